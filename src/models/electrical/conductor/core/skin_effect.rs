//! Empirical fits for the AC/DC resistance ratio.
//!
//! `k1` approximates the skin-effect curve of the standard as a cubic in the
//! dimensionless parameter `x`; `k2` is the additional, current-dependent
//! correction for steel-core conductors with an even number (≥ 4) of
//! aluminum layers, where the magnetized core adds losses.

use std::f64::consts::PI;

/// Skin-effect parameter of a conductor where the whole cross-section carries current.
///
/// `frequency` in Hz, `rdc` in Ω/km.
pub(super) fn solid_x(frequency: f64, rdc: f64) -> f64 {
    0.01 * (8.0 * PI * frequency / rdc).sqrt()
}

/// Skin-effect parameter of a tubular conductor (a non-conducting core).
///
/// Diameters in mm, `frequency` in Hz, `rdc` in Ω/km.
pub(super) fn tubular_x(diameter: f64, core_diameter: f64, frequency: f64, rdc: f64) -> f64 {
    let sum = diameter + core_diameter;
    0.01 * (diameter + 2.0 * core_diameter) / sum
        * (8.0 * PI * frequency * (diameter - core_diameter) / sum / rdc).sqrt()
}

/// Skin-effect ratio `k1` for the parameter `x`.
pub(super) fn k1(x: f64) -> f64 {
    0.99609 + 0.018578 * x - 0.030263 * x.powi(2) + 0.020735 * x.powi(3)
}

/// Core-loss ratio `k2` for the current density `y` (A/mm²).
pub(super) fn k2(y: f64) -> f64 {
    0.99947 + 0.028895 * y - 0.0059348 * y.powi(2) + 0.00042259 * y.powi(3)
}
