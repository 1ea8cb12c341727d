//! Type-level numeric constraints for validating catalog values.
//!
//! Conductor records come from hand-curated tables, so every numeric field
//! is checked before a conductor is built. This module expresses those checks
//! as marker types that can be used either as one-off checks
//! (`NonZero::check(&x)`) or to carry the guarantee in a value
//! ([`Constrained<T, C>`]).
//!
//! # Provided constraints
//!
//! - [`Finite`]: Neither `NaN` nor infinite
//! - [`NonZero`]: Not equal to zero
//! - [`StrictlyPositive`]: Greater than zero
//!
//! # Extending
//!
//! Custom invariants can be added by implementing [`Constraint<T>`]
//! for a zero-sized marker type.

mod finite;
mod non_zero;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use finite::Finite;
pub use non_zero::NonZero;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use conductor_models::support::constraint::{Constrained, NonZero};
///
/// let r20 = Constrained::<f64, NonZero>::new(0.285).unwrap();
/// assert_eq!(r20.into_inner(), 0.285);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
