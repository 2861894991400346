use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::error::Error;
use crate::precision::Precision;
use crate::unit::Unit;
use crate::validate::{self, IntoUnit};

/// A length: a finite value together with its unit.
///
/// Values are immutable, every operation returns a new `Length`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLength")]
pub struct Length {
    value: f64,
    unit: Unit,
}

/// Unvalidated form of a [`Length`] as it comes out of a deserializer.
#[derive(Deserialize)]
struct RawLength {
    value: Option<serde_json::Value>,
    unit: Option<String>,
}

impl TryFrom<RawLength> for Length {
    type Error = Error;

    fn try_from(raw: RawLength) -> Result<Self, Self::Error> {
        let (value, unit) = validate::json_value_and_unit(raw.value.as_ref(), raw.unit.as_deref())?;
        Ok(Length { value, unit })
    }
}

impl Length {
    /// Creates a new length, failing if `value` is not finite or `unit` is not a supported unit.
    pub fn new(value: f64, unit: impl IntoUnit) -> Result<Self, Error> {
        let value = validate::value(Some(value))?;
        let unit = unit.into_unit()?;
        Ok(Length { value, unit })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn version(&self) -> &'static str {
        crate::VERSION
    }

    /// Converts into `unit`.
    ///
    /// Fails if `unit` is not supported or the converted value does not fit into an `f64`.
    pub fn to(&self, unit: impl IntoUnit) -> Result<Length, Error> {
        let unit = unit.into_unit()?;
        if unit == self.unit {
            return Ok(*self);
        }

        let value = convert::convert(self.value, self.unit, unit);
        tracing::trace!(
            value = self.value,
            from = %self.unit,
            to = %unit,
            converted = value,
            "convert"
        );
        Length::new(value, unit)
    }

    /// Adds a plain number, interpreted in the unit of `self`.
    pub fn add(&self, value: f64) -> Result<Length, Error> {
        let value = validate::value(Some(value))?;
        Length::new(self.value + value, self.unit)
    }

    /// Adds `value` given in `unit`, the result keeps the unit of `self`.
    pub fn add_with_unit(&self, value: f64, unit: impl IntoUnit) -> Result<Length, Error> {
        let value = validate::value(Some(value))?;
        let unit = unit.into_unit()?;

        if value == 0.0 {
            tracing::trace!(%unit, "adding zero");
            return Ok(*self);
        }

        let other = Length::new(value, unit)?.to(self.unit)?;
        Length::new(self.value + other.value, self.unit)
    }

    /// Rounds the value to `digits` fractional digits, `None` keeps the value as is.
    ///
    /// `Some(0)` rounds to an integer, it is not treated like `None`.
    pub fn to_precision(&self, digits: Option<u32>) -> Length {
        let value = match digits {
            Some(digits) => self.value.fixed(digits),
            None => self.value,
        };
        Length {
            value,
            unit: self.unit,
        }
    }
}

/// The value directly followed by the unit symbol, e.g. `5m`.
///
/// Negative zero prints as `0`. Large and small magnitudes are printed positionally, never in
/// exponent notation.
impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // adding 0.0 turns -0.0 into 0.0
        write!(f, "{}{}", self.value + 0.0, self.unit)
    }
}
