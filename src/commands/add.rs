use length::{Error, Length};

/// Add a value to a length, the sum keeps the unit of the length
#[derive(clap::Parser)]
#[clap(allow_negative_numbers = true)]
pub struct Opts {
    pub(crate) value: f64,
    pub(crate) unit: String,
    pub(crate) other: f64,
    /// Unit of the added value, defaults to the unit of the length
    pub(crate) other_unit: Option<String>,
}

pub fn sum(opts: &Opts) -> Result<Length, Error> {
    let length = length::length(opts.value, &opts.unit)?;
    match &opts.other_unit {
        Some(unit) => length.add_with_unit(opts.other, unit),
        None => length.add(opts.other),
    }
}

pub fn execute(opts: Opts, precision: Option<u32>) -> Result<(), Error> {
    super::print(sum(&opts)?, precision);
    Ok(())
}
