use num_traits::Float;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a floating-point value is finite.
///
/// Rust's float parser accepts `"nan"`, `"inf"` and `"infinity"`, none of
/// which is a usable catalog value.
///
/// # Examples
///
/// ```
/// use conductor_models::support::constraint::Finite;
///
/// assert!(Finite::new(0.2850).is_ok());
/// assert!(Finite::new(f64::INFINITY).is_err());
/// assert!(Finite::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is `NaN` or infinite.
    pub fn new<T: Float>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats() {
        assert!(Finite::new(-40.0_f64).is_ok());
        assert!(Finite::new(0.0_f64).is_ok());
        assert_eq!(
            Finite::check(&f64::NEG_INFINITY),
            Err(ConstraintError::Infinite)
        );
        assert_eq!(Finite::check(&f32::NAN), Err(ConstraintError::NotANumber));
    }
}
