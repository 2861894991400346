use std::fmt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("you have to pass {0}")]
    MissingArgument(Argument),
    #[error("value must be a finite number, got {0}")]
    InvalidValue(String),
    #[error(
        "unsupported unit type `{unit}`, supported types: {}",
        crate::unit::supported_symbols()
    )]
    UnsupportedUnit { unit: String },
    #[error("no extension registered as `{0}`")]
    UnknownExtension(String),
}

/// The argument that was absent when reporting [`Error::MissingArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Value,
    Unit,
    ValueAndUnit,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Value => f.write_str("value"),
            Argument::Unit => f.write_str("unit type"),
            Argument::ValueAndUnit => f.write_str("value and unit type"),
        }
    }
}
