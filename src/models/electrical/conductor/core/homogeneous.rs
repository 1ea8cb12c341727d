use std::fmt::{self, Display, Formatter};

use crate::support::resistance::resistance_at;

use super::{
    ConductorKind, ParseError,
    fields::{Fields, require_non_zero},
    render::{Number, write_record},
    skin_effect,
};

/// A conductor stranded from a single material (e.g. JL or JLHA1).
///
/// Every wire carries current, so the conductor is described by its
/// resistance at 20 °C and one temperature coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Homogeneous {
    name: String,
    diameter: f64,
    r20: f64,
    alpha: f64,
}

impl Homogeneous {
    /// Creates a homogeneous conductor.
    ///
    /// `diameter` in mm, `r20` in Ω/km at 20 °C, `alpha` in 1/°C.
    #[must_use]
    pub fn new(name: impl Into<String>, diameter: f64, r20: f64, alpha: f64) -> Self {
        Self {
            name: name.into(),
            diameter,
            r20,
            alpha,
        }
    }

    /// Builds a conductor from a record split on commas, sign included.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the record has the wrong arity, an empty
    /// name, or a numeric field that is not a finite, non-zero number.
    pub fn parse_fields(fields: &[&str]) -> Result<Self, ParseError> {
        let fields = Fields::new(ConductorKind::Homogeneous, fields)?;
        let name = fields.name()?;
        let diameter = fields.number(2, "diameter")?;
        let r20 = fields.number(3, "r20")?;
        let alpha = fields.number(4, "alpha")?;
        require_non_zero(&[("diameter", diameter), ("r20", r20), ("alpha", alpha)])?;

        Ok(Self::new(name, diameter, r20, alpha))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outer diameter, in mm.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// DC resistance at 20 °C, in Ω/km.
    #[must_use]
    pub fn r20(&self) -> f64 {
        self.r20
    }

    /// Temperature coefficient of resistance, in 1/°C.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// DC resistance at `temperature` (°C), in Ω/km.
    #[must_use]
    pub fn dc_resistance(&self, temperature: f64) -> f64 {
        resistance_at(self.r20, self.alpha, temperature)
    }

    /// AC/DC resistance ratio at `frequency` (Hz) and `temperature` (°C).
    ///
    /// The current doesn't enter: there's no magnetic core to saturate.
    #[must_use]
    pub fn ac_dc_ratio(&self, _current: f64, frequency: f64, temperature: f64) -> f64 {
        let x = skin_effect::solid_x(frequency, self.dc_resistance(temperature));
        skin_effect::k1(x)
    }
}

impl Display for Homogeneous {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_record(
            f,
            ConductorKind::Homogeneous.sign(),
            &[
                &self.name,
                &Number(self.diameter),
                &Number(self.r20),
                &Number(self.alpha),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn jlha1_95() -> Homogeneous {
        Homogeneous::new("JLHA1-95", 12.6, 0.2850, 0.0040)
    }

    #[test]
    fn parse_trims_and_upper_cases() {
        let fields = ["HOMO", " jlha1-95", " 12.6 ", " 0.2850", " 0.0040\n"];
        assert_eq!(Homogeneous::parse_fields(&fields).unwrap(), jlha1_95());
    }

    #[test]
    fn parse_accepts_negative_values() {
        let fields = ["HOMO", "X", "12.6", "0.285", "-0.004"];
        assert_eq!(Homogeneous::parse_fields(&fields).unwrap().alpha(), -0.004);
    }

    #[test]
    fn parse_rejects_zero_values() {
        for fields in [
            ["HOMO", "X", "0", "0.285", "0.004"],
            ["HOMO", "X", "12.6", "0.0", "0.004"],
            ["HOMO", "X", "12.6", "0.285", "-0"],
        ] {
            assert!(matches!(
                Homogeneous::parse_fields(&fields),
                Err(ParseError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn parse_rejects_blank_name() {
        let fields = ["HOMO", "   ", "12.6", "0.285", "0.004"];
        assert_eq!(
            Homogeneous::parse_fields(&fields),
            Err(ParseError::EmptyName)
        );
    }

    #[test]
    fn resistance_at_reference_temperature_is_exact() {
        assert_eq!(jlha1_95().dc_resistance(20.0), 0.285);
    }

    #[test]
    fn resistance_rises_with_temperature() {
        let conductor = jlha1_95();
        assert_relative_eq!(conductor.dc_resistance(70.0), 0.285 * 1.2);
        assert!(conductor.dc_resistance(-20.0) < conductor.dc_resistance(40.0));
    }

    #[test]
    fn ratio_ignores_current() {
        let conductor = jlha1_95();
        let at_rest = conductor.ac_dc_ratio(0.0, 50.0, 20.0);
        assert_eq!(conductor.ac_dc_ratio(800.0, 50.0, 20.0), at_rest);
        assert_relative_eq!(at_rest, 1.001_153, epsilon = 1e-6);
    }

    #[test]
    fn display() {
        assert_eq!(
            jlha1_95().to_string(),
            "HOMO,\tJLHA1-95,\t12.6,\t0.285,\t0.004"
        );
    }
}
