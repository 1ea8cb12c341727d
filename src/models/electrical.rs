//! Electrical models.
//!
//! This module contains models of power-system components, currently the
//! stranded conductors of overhead lines.

pub mod conductor;
