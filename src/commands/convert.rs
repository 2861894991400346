use length::{Error, Length};

/// Convert a length into another unit
#[derive(clap::Parser)]
#[clap(allow_negative_numbers = true)]
pub struct Opts {
    pub(crate) value: f64,
    pub(crate) unit: String,
    /// Unit to convert into
    pub(crate) target: String,
}

pub fn convert(opts: &Opts) -> Result<Length, Error> {
    let converted = length::length(opts.value, &opts.unit)?.to(&opts.target)?;
    tracing::debug!(%converted, "converted");
    Ok(converted)
}

pub fn execute(opts: Opts, precision: Option<u32>) -> Result<(), Error> {
    super::print(convert(&opts)?, precision);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(value: f64, unit: &str, target: &str) -> Opts {
        Opts {
            value,
            unit: unit.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn converts_negative_values() {
        let converted = convert(&opts(-5.0, "m", "km")).unwrap();
        assert_eq!(converted.to_string(), "-0.005km");
    }

    #[test]
    fn rejects_unknown_target() {
        assert!(matches!(
            convert(&opts(1.0, "m", "xyz")),
            Err(Error::UnsupportedUnit { .. })
        ));
    }
}
