//! Number formatting for the canonical text form.
//!
//! Downstream tools compare catalog files byte for byte, so numbers are
//! written in the shortest form that reads back to the same value, with a
//! trailing `.0` on integral values and a signed, two-digit exponent outside
//! `1e-4 <= |x| < 1e16` (`1e-05`, `1e+16`).

use std::fmt::{self, Display, Formatter};

/// Separator written between fields.
pub(super) const SEPARATOR: &str = ",\t";

/// Display adapter for a catalog number.
#[derive(Debug, Clone, Copy)]
pub(super) struct Number(pub(super) f64);

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return f.write_str("nan");
        }

        // `Debug` already gives the shortest round-trip digits and switches
        // to scientific notation at the same thresholds.
        let text = format!("{:?}", self.0);
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&text),
        }
    }
}

/// Writes `sign` followed by each field, separated by [`SEPARATOR`].
pub(super) fn write_record(
    f: &mut Formatter<'_>,
    sign: &str,
    fields: &[&dyn Display],
) -> fmt::Result {
    f.write_str(sign)?;
    for field in fields {
        write!(f, "{SEPARATOR}{field}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: f64) -> String {
        Number(value).to_string()
    }

    #[test]
    fn plain_values() {
        assert_eq!(render(12.6), "12.6");
        assert_eq!(render(0.2850), "0.285");
        assert_eq!(render(0.0040), "0.004");
        assert_eq!(render(95.0), "95.0");
        assert_eq!(render(-40.0), "-40.0");
        assert_eq!(render(0.0001), "0.0001");
    }

    #[test]
    fn scientific_values() {
        assert_eq!(render(0.00001), "1e-05");
        assert_eq!(render(0.000015), "1.5e-05");
        assert_eq!(render(1e16), "1e+16");
        assert_eq!(render(2.5e120), "2.5e+120");
        assert_eq!(render(-3e-7), "-3e-07");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(render(f64::NAN), "nan");
        assert_eq!(render(f64::INFINITY), "inf");
    }
}
