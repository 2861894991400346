pub mod add;
pub mod convert;
pub mod units;

use length::Length;

/// Prints a result, rounded if a precision was requested.
fn print(length: Length, precision: Option<u32>) {
    println!("{}", length.to_precision(precision));
}
