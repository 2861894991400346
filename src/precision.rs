pub trait Precision {
    /// Rounds to `digits` fractional digits the way fixed-point formatting does.
    fn fixed(self, digits: u32) -> Self;
}

// Enough fractional digits to print any f64 exactly.
const EXACT_DIGITS: usize = 1074;

impl Precision for f64 {
    fn fixed(self, digits: u32) -> Self {
        let digits = digits as usize;
        if !self.is_finite() || digits >= EXACT_DIGITS {
            return self;
        }

        // Formatting rounds exact midpoints to even; move those one ulp away from zero so that
        // they round up in magnitude instead.
        let exact = format!("{:.*}", EXACT_DIGITS, self);
        let rest = exact
            .find('.')
            .and_then(|point| exact.get(point + 1 + digits..))
            .unwrap_or_default();
        let midpoint = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
        let value = if midpoint {
            f64::from_bits(self.to_bits() + 1)
        } else {
            self
        };

        format!("{:.*}", digits, value).parse().unwrap_or(self)
    }
}
