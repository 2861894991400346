//! Lengths with a unit: conversion, addition and formatting.
//!
//! ```
//! let l = length::length(1.0, "m")?.add_with_unit(100.0, "cm")?;
//! assert_eq!(l.to_string(), "2m");
//! # Ok::<(), length::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod extension;
pub mod length;
pub mod precision;
pub mod unit;
pub mod validate;


pub use crate::error::{Argument, Error};
pub use crate::extension::{Extension, Extensions};
pub use crate::length::Length;
pub use crate::unit::{factor_of, supported_units, Unit};
pub use crate::validate::IntoUnit;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates a [`Length`], same as [`Length::new`].
pub fn length(value: f64, unit: impl IntoUnit) -> Result<Length, Error> {
    Length::new(value, unit)
}
