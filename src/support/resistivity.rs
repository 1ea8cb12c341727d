//! Conductivity classes and resistivity.
//!
//! Conductor materials are graded by their conductivity relative to the
//! International Annealed Copper Standard (IACS). Catalog preparation looks up
//! the IACS fraction of a wire class (e.g. `L1`, `LHA2`) and converts it to a
//! resistivity before building a composite-aluminum record.
//!
//! Every helper here is best effort: an unusable input yields `0.0` instead of
//! an error, which later makes the record fail the non-zero check in the
//! conductor parser.

use log::debug;

use crate::support::constraint::{Constraint, Finite, StrictlyPositive};

/// Conductivity of 100% IACS, in S/m.
pub const IACS_BASE: f64 = 58_000_000.0;

/// IACS fraction by wire class code.
pub const IACS_PERCENT: &[(&str, f64)] = &[
    ("L3", 0.625),
    ("L2", 0.62),
    ("L1", 0.615),
    ("L", 0.61),
    ("LHA4", 0.585),
    ("LHA3", 0.57),
    ("LHA2", 0.53),
    ("LHA1", 0.525),
    ("LB40", 0.40),
    ("LB35", 0.35),
    ("LB27", 0.27),
    ("LB20A", 0.203),
];

/// Looks up the IACS fraction of a wire class, ignoring case and surrounding whitespace.
///
/// ```
/// use conductor_models::support::resistivity::iacs_fraction;
///
/// assert_eq!(iacs_fraction("lha1"), Some(0.525));
/// assert_eq!(iacs_fraction("G1A"), None);
/// ```
#[must_use]
pub fn iacs_fraction(class: &str) -> Option<f64> {
    let class = class.trim();
    IACS_PERCENT
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(class))
        .map(|&(_, fraction)| fraction)
}

/// Converts an IACS fraction (`0.61` for 61% IACS) to a resistivity in Ω·mm²/m.
///
/// Returns `0.0` if the fraction is not a finite, strictly positive number.
///
/// ```
/// use conductor_models::support::resistivity::resistivity;
///
/// assert!((resistivity(1.0) - 0.017241).abs() < 1e-6);
/// assert_eq!(resistivity(0.0), 0.0);
/// assert_eq!(resistivity(f64::NAN), 0.0);
/// ```
#[must_use]
pub fn resistivity(iacs_fraction: f64) -> f64 {
    if let Err(error) =
        Finite::check(&iacs_fraction).and_then(|()| StrictlyPositive::check(&iacs_fraction))
    {
        debug!("unusable IACS fraction {iacs_fraction}: {error}");
        return 0.0;
    }
    1_000_000.0 / (iacs_fraction * IACS_BASE)
}

/// Parses an IACS fraction from catalog text and converts it to a resistivity.
///
/// Returns `0.0` if the text is not a number.
#[must_use]
pub fn resistivity_from_text(iacs_fraction: &str) -> f64 {
    match iacs_fraction.trim().parse::<f64>() {
        Ok(fraction) => resistivity(fraction),
        Err(error) => {
            debug!("IACS fraction {iacs_fraction:?} is not a number: {error}");
            0.0
        }
    }
}

/// Returns the resistivity of a wire class, or `0.0` if the class is unknown.
///
/// ```
/// use conductor_models::support::resistivity::{resistivity, resistivity_of_class};
///
/// assert_eq!(resistivity_of_class("L"), resistivity(0.61));
/// assert_eq!(resistivity_of_class("X9"), 0.0);
/// ```
#[must_use]
pub fn resistivity_of_class(class: &str) -> f64 {
    iacs_fraction(class).map_or(0.0, resistivity)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn aluminum_classes() {
        // 61% IACS hard-drawn aluminum is 0.028264 Ω·mm²/m.
        assert_relative_eq!(resistivity_of_class("L"), 0.028_264, epsilon = 1e-6);
        assert_relative_eq!(resistivity_of_class("lha1"), 0.032_841, epsilon = 1e-6);
    }

    #[test]
    fn higher_conductivity_means_lower_resistivity() {
        assert!(resistivity_of_class("L3") < resistivity_of_class("L"));
        assert!(resistivity_of_class("LB20A") > resistivity_of_class("LB40"));
    }

    #[test]
    fn every_class_is_resolvable() {
        for (class, fraction) in IACS_PERCENT {
            assert_eq!(iacs_fraction(class), Some(*fraction));
            assert!(resistivity(*fraction) > 0.0);
        }
    }

    #[test]
    fn text_input() {
        assert_eq!(resistivity_from_text(" 0.61 "), resistivity(0.61));
        assert_eq!(resistivity_from_text("sixty-one"), 0.0);
        assert_eq!(resistivity_from_text(""), 0.0);
        assert_eq!(resistivity_from_text("inf"), 0.0);
    }

    #[test]
    fn unusable_fractions_yield_zero() {
        assert_eq!(resistivity(-0.5), 0.0);
        assert_eq!(resistivity(f64::INFINITY), 0.0);
    }
}
