use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use conductor_models::support::constraint::StrictlyPositive;
///
/// let fraction = StrictlyPositive::new(0.61).unwrap();
/// assert_eq!(fraction.into_inner(), 0.61);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert!(StrictlyPositive::new(1).is_ok());
        assert_eq!(StrictlyPositive::check(&0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::check(&-2), Err(ConstraintError::Negative));
    }

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(0.203).is_ok());
        assert!(StrictlyPositive::new(f64::INFINITY).is_ok());
        assert_eq!(
            StrictlyPositive::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
