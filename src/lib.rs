//! # Conductor Models
//!
//! Electrical parameters of stranded overhead-line conductors (GB/T 1179):
//! DC resistance at any temperature and the AC/DC resistance ratio, for
//! homogeneous, aluminum-alloy-core and steel-core constructions.
//!
//! ## Crate layout
//!
//! - [`models`]: Conductor models and their [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities (constraints, units, resistivity).
//!
//! ## Quick start
//!
//! ```
//! use conductor_models::models::electrical::conductor::Conductor;
//!
//! let conductor = Conductor::parse("HOMO, JLHA1-95, 12.6, 0.2850, 0.0040").unwrap();
//! assert_eq!(conductor.dc_resistance(20.0), 0.285);
//! assert_eq!(conductor.to_string(), "HOMO,\tJLHA1-95,\t12.6,\t0.285,\t0.004");
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
