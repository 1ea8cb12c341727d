//! Temperature dependence of DC resistance.
//!
//! Catalog resistances are quoted at 20 °C. Within the operating range of an
//! overhead line, resistance is linear in temperature:
//!
//! ```text
//! R(t) = R20 · (1 + α · (t − 20))
//! ```

/// Reference temperature of catalog resistance values, in °C.
pub const REFERENCE_TEMPERATURE: f64 = 20.0;

/// Returns the resistance at `temperature` (°C) given its value at 20 °C.
///
/// The result keeps the unit of `r20`. It isn't clamped: an extreme
/// temperature with a large `alpha` can give a negative value.
///
/// # Example
///
/// ```
/// use conductor_models::support::resistance::resistance_at;
///
/// assert_eq!(resistance_at(0.285, 0.004, 20.0), 0.285);
/// assert!(resistance_at(0.285, 0.004, 80.0) > 0.285);
/// ```
#[must_use]
pub fn resistance_at(r20: f64, alpha: f64, temperature: f64) -> f64 {
    r20 * (1.0 + alpha * (temperature - REFERENCE_TEMPERATURE))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reference_temperature_is_identity() {
        for r20 in [0.0, 0.1181, 2.8, 1e-6] {
            assert_eq!(resistance_at(r20, 0.00403, REFERENCE_TEMPERATURE), r20);
        }
    }

    #[test]
    fn linear_in_temperature() {
        assert_relative_eq!(resistance_at(1.0, 0.004, 70.0), 1.2);
        assert_relative_eq!(resistance_at(1.0, 0.004, -30.0), 0.8);
    }

    #[test]
    fn not_clamped() {
        assert!(resistance_at(1.0, 0.004, -300.0) < 0.0);
    }
}
