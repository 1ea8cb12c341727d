use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is not equal to zero.
///
/// Diameters, resistances, sections and temperature coefficients read from a
/// catalog are never physically zero, so a zero in any of them marks the
/// record as malformed. Negative values pass this check.
///
/// # Examples
///
/// ```
/// use conductor_models::support::constraint::{Constraint, NonZero};
///
/// assert!(NonZero::new(12.6).is_ok());
/// assert!(NonZero::new(-0.004).is_ok());
///
/// assert!(NonZero::check(&0.0).is_err());
/// assert!(NonZero::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
