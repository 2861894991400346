use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A supported length unit.
///
/// The declaration order is the order of [`Unit::ALL`] and of the unit list in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "pm")]
    Picometer,
    #[serde(rename = "nm")]
    Nanometer,
    #[serde(rename = "um")]
    Micrometer,
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "dm")]
    Decimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "dam")]
    Decameter,
    #[serde(rename = "hm")]
    Hectometer,
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "nmi")]
    NauticalMile,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "yd")]
    Yard,
    #[serde(rename = "mi")]
    Mile,
    #[serde(rename = "au")]
    AstronomicalUnit,
    #[serde(rename = "ly")]
    LightYear,
    #[serde(rename = "pc")]
    Parsec,
}

// in meter
const ASTRONOMICAL_UNIT: f64 = 149_597_870_700.0;

/// Symbol and size in meter of every unit, indexed by the `Unit` discriminant.
const UNIT_TABLE: [(Unit, &str, f64); 18] = [
    (Unit::Picometer, "pm", 1e-12),
    (Unit::Nanometer, "nm", 1e-9),
    (Unit::Micrometer, "um", 1e-6),
    (Unit::Millimeter, "mm", 1e-3),
    (Unit::Centimeter, "cm", 1e-2),
    (Unit::Decimeter, "dm", 1e-1),
    (Unit::Meter, "m", 1.0),
    (Unit::Decameter, "dam", 1e1),
    (Unit::Hectometer, "hm", 1e2),
    (Unit::Kilometer, "km", 1e3),
    (Unit::NauticalMile, "nmi", 1852.0),
    (Unit::Inch, "in", 0.0254),
    (Unit::Foot, "ft", 0.3048),
    (Unit::Yard, "yd", 0.9144),
    (Unit::Mile, "mi", 1609.344),
    (Unit::AstronomicalUnit, "au", ASTRONOMICAL_UNIT),
    (Unit::LightYear, "ly", 9_460_730_472_580_800.0),
    (
        Unit::Parsec,
        "pc",
        (648_000.0 / std::f64::consts::PI) * ASTRONOMICAL_UNIT,
    ),
];

static SUPPORTED_SYMBOLS: Lazy<String> = Lazy::new(|| {
    UNIT_TABLE
        .iter()
        .map(|(_, symbol, _)| *symbol)
        .collect::<Vec<_>>()
        .join(", ")
});

impl Unit {
    /// The meter, all conversions pass through it.
    pub const BASE: Unit = Unit::Meter;

    pub const ALL: [Unit; 18] = [
        Unit::Picometer,
        Unit::Nanometer,
        Unit::Micrometer,
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Decimeter,
        Unit::Meter,
        Unit::Decameter,
        Unit::Hectometer,
        Unit::Kilometer,
        Unit::NauticalMile,
        Unit::Inch,
        Unit::Foot,
        Unit::Yard,
        Unit::Mile,
        Unit::AstronomicalUnit,
        Unit::LightYear,
        Unit::Parsec,
    ];

    pub fn symbol(self) -> &'static str {
        UNIT_TABLE[self as usize].1
    }

    /// Size of one unit in meter.
    pub fn factor(self) -> f64 {
        UNIT_TABLE[self as usize].2
    }

    /// Looks up a unit by its exact symbol (`"km"`, `"ft"`, ...).
    pub fn from_symbol(symbol: &str) -> Option<Unit> {
        UNIT_TABLE
            .iter()
            .find(|(_, s, _)| *s == symbol)
            .map(|(unit, _, _)| *unit)
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_symbol(s).ok_or_else(|| Error::UnsupportedUnit { unit: s.to_string() })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Size in meter of the unit with the given symbol, `None` if the symbol is unknown.
pub fn factor_of(symbol: &str) -> Option<f64> {
    Unit::from_symbol(symbol).map(Unit::factor)
}

/// All supported units in declaration order.
pub fn supported_units() -> &'static [Unit] {
    &Unit::ALL
}

/// Comma separated list of all supported symbols, as used in error messages.
pub fn supported_symbols() -> &'static str {
    SUPPORTED_SYMBOLS.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_declaration_order() {
        for (i, unit) in Unit::ALL.iter().enumerate() {
            assert_eq!(UNIT_TABLE[i].0, *unit);
            assert_eq!(*unit as usize, i);
        }
    }

    #[test]
    fn base_unit_factor_is_one() {
        assert_eq!(Unit::BASE.factor(), 1.0);
        assert_eq!(factor_of("m"), Some(1.0));
    }

    #[test]
    fn every_factor_is_positive_and_finite() {
        for unit in supported_units() {
            assert!(unit.factor() > 0.0 && unit.factor().is_finite(), "{}", unit);
        }
    }

    #[test]
    fn known_factors() {
        assert_eq!(factor_of("pm"), Some(1e-12));
        assert_eq!(factor_of("km"), Some(1000.0));
        assert_eq!(factor_of("nmi"), Some(1852.0));
        assert_eq!(factor_of("in"), Some(0.0254));
        assert_eq!(factor_of("mi"), Some(1609.344));
        assert_eq!(factor_of("ly"), Some(9460730472580800.0));
        assert_eq!(
            factor_of("pc"),
            Some((648000.0 / std::f64::consts::PI) * 149597870700.0)
        );
    }

    #[test]
    fn unknown_symbol_has_no_factor() {
        assert_eq!(factor_of("xyz"), None);
        assert_eq!(factor_of(""), None);
        assert_eq!(factor_of("KM"), None);
    }

    #[test]
    fn symbols_roundtrip_through_from_str() {
        for unit in Unit::ALL {
            assert_eq!(unit.symbol().parse::<Unit>(), Ok(unit));
            assert_eq!(unit.to_string(), unit.symbol());
        }
    }

    #[test]
    fn supported_symbols_in_order() {
        assert_eq!(
            supported_symbols(),
            "pm, nm, um, mm, cm, dm, m, dam, hm, km, nmi, in, ft, yd, mi, au, ly, pc"
        );
    }

    #[test]
    fn serializes_as_symbol() {
        assert_eq!(serde_json::to_string(&Unit::NauticalMile).unwrap(), "\"nmi\"");
        assert_eq!(
            serde_json::from_str::<Unit>("\"au\"").unwrap(),
            Unit::AstronomicalUnit
        );
    }
}
