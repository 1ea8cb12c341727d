//! Extensions to [`uom`].
//!
//! Conductor catalogs quote resistance per unit length (Ω/km), a quantity
//! [`uom`] doesn't name. This module defines it and the conversions used at
//! the model boundary.
//!
//! ```
//! use conductor_models::support::units::{LinearResistanceExt, ohm_per_kilometer};
//!
//! let r = ohm_per_kilometer(0.285);
//! assert!((r.value - 0.285e-3).abs() < 1e-15);
//! assert!((r.get_ohm_per_kilometer() - 0.285).abs() < 1e-12);
//! ```

mod quantities;

pub use quantities::{LinearResistance, LinearResistanceExt, ohm_per_kilometer};
