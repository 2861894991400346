//! Admission checks for raw values and unit symbols.
//!
//! Every public operation that accepts input it cannot express in its types goes through one of
//! [`value_and_unit`], [`unit`] or [`value`] before touching any data.

use crate::error::{Argument, Error};
use crate::unit::Unit;

/// Validates a value together with a unit symbol.
///
/// Absence is reported before an invalid value, an invalid value before an unsupported unit.
pub fn value_and_unit(value: Option<f64>, unit: Option<&str>) -> Result<(f64, Unit), Error> {
    let (v, u) = present(value, unit)?;
    Ok((self::value(Some(v))?, self::unit(Some(u))?))
}

/// Same as [`value_and_unit`] for a dynamically typed value, as received through serde.
pub(crate) fn json_value_and_unit(
    value: Option<&serde_json::Value>,
    unit: Option<&str>,
) -> Result<(f64, Unit), Error> {
    let (v, u) = present(value, unit)?;
    Ok((json_value(Some(v))?, self::unit(Some(u))?))
}

fn present<V, U>(value: Option<V>, unit: Option<U>) -> Result<(V, U), Error> {
    match (value, unit) {
        (Some(v), Some(u)) => Ok((v, u)),
        (None, None) => Err(missing(Argument::ValueAndUnit)),
        (None, Some(_)) => Err(missing(Argument::Value)),
        (Some(_), None) => Err(missing(Argument::Unit)),
    }
}

pub fn unit(unit: Option<&str>) -> Result<Unit, Error> {
    let unit = unit.ok_or_else(|| missing(Argument::Unit))?;
    unit.parse().map_err(|err| {
        tracing::debug!(unit, "rejected unsupported unit");
        err
    })
}

pub fn value(value: Option<f64>) -> Result<f64, Error> {
    let value = value.ok_or_else(|| missing(Argument::Value))?;
    finite(value)
}

/// Rejects NaN and infinities.
pub(crate) fn finite(value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::debug!(value, "rejected non-finite value");
        Err(Error::InvalidValue(value.to_string()))
    }
}

pub(crate) fn json_value(value: Option<&serde_json::Value>) -> Result<f64, Error> {
    match value {
        None | Some(serde_json::Value::Null) => Err(missing(Argument::Value)),
        Some(serde_json::Value::Number(n)) => match n.as_f64() {
            Some(v) => finite(v),
            None => Err(Error::InvalidValue(n.to_string())),
        },
        Some(other) => {
            tracing::debug!(%other, "rejected non-numeric value");
            Err(Error::InvalidValue(other.to_string()))
        }
    }
}

fn missing(argument: Argument) -> Error {
    tracing::debug!(%argument, "missing argument");
    Error::MissingArgument(argument)
}

/// Anything that can name a unit: a [`Unit`] itself or a unit symbol.
///
/// Symbols are checked with [`unit`], so an unknown symbol fails with
/// [`Error::UnsupportedUnit`] and `None` with [`Error::MissingArgument`].
pub trait IntoUnit {
    fn into_unit(self) -> Result<Unit, Error>;
}

impl IntoUnit for Unit {
    fn into_unit(self) -> Result<Unit, Error> {
        Ok(self)
    }
}

impl IntoUnit for &str {
    fn into_unit(self) -> Result<Unit, Error> {
        unit(Some(self))
    }
}

impl IntoUnit for &String {
    fn into_unit(self) -> Result<Unit, Error> {
        unit(Some(self.as_str()))
    }
}

impl IntoUnit for String {
    fn into_unit(self) -> Result<Unit, Error> {
        unit(Some(self.as_str()))
    }
}

impl<T: IntoUnit> IntoUnit for Option<T> {
    fn into_unit(self) -> Result<Unit, Error> {
        match self {
            Some(unit) => unit.into_unit(),
            None => Err(missing(Argument::Unit)),
        }
    }
}
