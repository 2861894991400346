//! Conversions between units, always normalizing to meter first.

use crate::unit::{factor_of, Unit};

/// Converts `value` given in `unit` into meter.
pub fn to_base_unit(value: f64, unit: Unit) -> f64 {
    value * unit.factor()
}

/// Converts `value` given in meter into `unit`.
pub fn from_base_unit(value: f64, unit: Unit) -> f64 {
    value * (1.0 / unit.factor())
}

pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    from_base_unit(to_base_unit(value, from), to)
}

/// Same as [`convert`] but keyed by symbols; `None` if either symbol is unknown.
pub fn convert_symbols(value: f64, from: &str, to: &str) -> Option<f64> {
    let in_m = value * factor_of(from)?;
    Some(in_m * (1.0 / factor_of(to)?))
}
