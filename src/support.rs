//! Crate-level utilities shared by the conductor models.
//!
//! These modules are public because catalog-preparation code uses them
//! directly (for example to turn an IACS class into a resistivity before
//! building a parseable record), but their APIs are not stable.

pub mod constraint;
pub mod resistance;
pub mod resistivity;
pub mod units;
