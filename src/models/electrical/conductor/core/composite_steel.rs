use std::fmt::{self, Display, Formatter};

use log::warn;

use crate::support::resistance::resistance_at;

use super::{
    ConductorKind, ParseError, StructureError,
    fields::{Fields, require_non_zero},
    render::{Number, write_record},
    skin_effect,
    structure::{normalize, steel_core_outer_layers},
};

/// Structure code recorded by [`CompositeSteel::with_fallback`] for unlisted structures.
pub const UNKNOWN_STRUCTURE: &str = "unknown";

/// Aluminum wires laid over a steel core (e.g. JL/G1A).
///
/// At power frequencies the current flows in the aluminum layers only, so
/// `r20` is the resistance of the aluminum and the core enters through the
/// geometry of the skin-effect parameter. Conductors with an even number
/// (≥ 4) of aluminum layers get an additional current-dependent correction
/// for losses in the magnetized core.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeSteel {
    name: String,
    diameter: f64,
    core_diameter: f64,
    r20: f64,
    alpha: f64,
    section: f64,
    structure: String,
    outer_layers: u8,
}

impl CompositeSteel {
    /// Creates a composite conductor with a steel core.
    ///
    /// Diameters in mm, `r20` in Ω/km at 20 °C, `alpha` in 1/°C and the
    /// aluminum `section` in mm². The structure code is normalized (trimmed,
    /// lower-cased) before lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if the structure code is not listed in
    /// [`STEEL_CORE_STRUCTURES`](super::STEEL_CORE_STRUCTURES).
    pub fn new(
        name: impl Into<String>,
        diameter: f64,
        core_diameter: f64,
        r20: f64,
        alpha: f64,
        section: f64,
        structure: &str,
    ) -> Result<Self, StructureError> {
        let structure = normalize(structure);
        let Some(outer_layers) = steel_core_outer_layers(&structure) else {
            return Err(StructureError {
                kind: ConductorKind::CompositeSteel,
                code: structure,
            });
        };

        Ok(Self {
            name: name.into(),
            diameter,
            core_diameter,
            r20,
            alpha,
            section,
            structure,
            outer_layers,
        })
    }

    /// Creates a composite conductor, degrading an unlisted structure code to
    /// [`UNKNOWN_STRUCTURE`] with zero outer layers.
    ///
    /// Such a conductor never gets the core-loss correction, and its text form
    /// is rejected by [`parse_fields`](Self::parse_fields). Only code that
    /// builds conductors directly should use this.
    ///
    /// ```
    /// use conductor_models::models::electrical::conductor::{CompositeSteel, UNKNOWN_STRUCTURE};
    ///
    /// let conductor = CompositeSteel::with_fallback("X", 21.6, 7.2, 0.1181, 0.00403, 275.0, "s1_1");
    /// assert_eq!(conductor.structure(), UNKNOWN_STRUCTURE);
    /// assert_eq!(conductor.outer_layers(), 0);
    /// ```
    #[must_use]
    pub fn with_fallback(
        name: impl Into<String>,
        diameter: f64,
        core_diameter: f64,
        r20: f64,
        alpha: f64,
        section: f64,
        structure: &str,
    ) -> Self {
        let name = name.into();
        Self::new(
            name.clone(),
            diameter,
            core_diameter,
            r20,
            alpha,
            section,
            structure,
        )
        .unwrap_or_else(|error| {
            warn!("{name}: {error}, treating it as {UNKNOWN_STRUCTURE:?}");
            Self {
                name,
                diameter,
                core_diameter,
                r20,
                alpha,
                section,
                structure: UNKNOWN_STRUCTURE.to_owned(),
                outer_layers: 0,
            }
        })
    }

    /// Builds a conductor from a record split on commas, sign included.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the record has the wrong arity, an empty
    /// name, a numeric field that is not a finite number, an unknown
    /// structure code, or a zero numeric field.
    pub fn parse_fields(fields: &[&str]) -> Result<Self, ParseError> {
        let fields = Fields::new(ConductorKind::CompositeSteel, fields)?;
        let name = fields.name()?;
        let diameter = fields.number(2, "diameter")?;
        let core_diameter = fields.number(3, "core diameter")?;
        let r20 = fields.number(4, "r20")?;
        let alpha = fields.number(5, "alpha")?;
        let section = fields.number(6, "section")?;

        let structure = normalize(fields.text(7));
        if steel_core_outer_layers(&structure).is_none() {
            return Err(StructureError {
                kind: ConductorKind::CompositeSteel,
                code: structure,
            }
            .into());
        }

        require_non_zero(&[
            ("diameter", diameter),
            ("core diameter", core_diameter),
            ("r20", r20),
            ("alpha", alpha),
            ("section", section),
        ])?;

        Ok(Self::new(
            name,
            diameter,
            core_diameter,
            r20,
            alpha,
            section,
            &structure,
        )?)
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

    /// Steel core diameter, in mm.
    #[must_use]
    pub fn core_diameter(&self) -> f64 {
        self.core_diameter
    }

    /// DC resistance of the aluminum at 20 °C, in Ω/km.
    #[must_use]
    pub fn r20(&self) -> f64 {
        self.r20
    }

    /// Temperature coefficient of resistance, in 1/°C.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Aluminum cross-section, in mm².
    #[must_use]
    pub fn section(&self) -> f64 {
        self.section
    }

    #[must_use]
    pub fn structure(&self) -> &str {
        &self.structure
    }

    /// Number of aluminum layers; zero for [`UNKNOWN_STRUCTURE`].
    #[must_use]
    pub fn outer_layers(&self) -> u8 {
        self.outer_layers
    }

    /// Whether the current-dependent core-loss correction applies.
    #[must_use]
    pub fn has_core_loss(&self) -> bool {
        self.outer_layers >= 3 && self.outer_layers % 2 == 0
    }

    /// DC resistance of the aluminum layers at `temperature` (°C), in Ω/km.
    #[must_use]
    pub fn dc_resistance(&self, temperature: f64) -> f64 {
        resistance_at(self.r20, self.alpha, temperature)
    }

    /// AC/DC resistance ratio for `current` (A) at `frequency` (Hz) and `temperature` (°C).
    #[must_use]
    pub fn ac_dc_ratio(&self, current: f64, frequency: f64, temperature: f64) -> f64 {
        let x = skin_effect::tubular_x(
            self.diameter,
            self.core_diameter,
            frequency,
            self.dc_resistance(temperature),
        );
        let k1 = skin_effect::k1(x);
        let k2 = if self.has_core_loss() {
            skin_effect::k2(current / self.section)
        } else {
            1.0
        };
        k1 * k2
    }
}

impl Display for CompositeSteel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_record(
            f,
            ConductorKind::CompositeSteel.sign(),
            &[
                &self.name,
                &Number(self.diameter),
                &Number(self.core_diameter),
                &Number(self.r20),
                &Number(self.alpha),
                &Number(self.section),
                &self.structure,
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn with_structure(structure: &str) -> CompositeSteel {
        CompositeSteel::new("JL/G1A-400/35", 26.8, 7.5, 0.0739, 0.00403, 390.9, structure)
            .unwrap()
    }

    #[test]
    fn outer_layers_come_from_structure() {
        assert_eq!(with_structure("s6_1").outer_layers(), 1);
        assert_eq!(with_structure("s30_19").outer_layers(), 2);
        assert_eq!(with_structure("S54_7").outer_layers(), 3);
        assert_eq!(with_structure("s84_19").outer_layers(), 4);
    }

    #[test]
    fn core_loss_needs_even_layers_above_two() {
        assert!(!with_structure("s12_7").has_core_loss());
        assert!(!with_structure("s26_7").has_core_loss());
        assert!(!with_structure("s48_7").has_core_loss());
        assert!(with_structure("s72_7").has_core_loss());
    }

    #[test]
    fn two_layers_ignore_current() {
        let conductor = with_structure("s26_7");
        let at_rest = conductor.ac_dc_ratio(0.0, 50.0, 70.0);
        for current in [100.0, 500.0, 1500.0] {
            assert_eq!(conductor.ac_dc_ratio(current, 50.0, 70.0), at_rest);
        }
    }

    #[test]
    fn four_layers_depend_on_current() {
        let conductor = with_structure("s72_7");
        let low = conductor.ac_dc_ratio(200.0, 50.0, 70.0);
        let high = conductor.ac_dc_ratio(1200.0, 50.0, 70.0);
        assert!(high > low);

        let x = skin_effect::tubular_x(26.8, 7.5, 50.0, conductor.dc_resistance(70.0));
        let y = 1200.0 / 390.9;
        assert_relative_eq!(high, skin_effect::k1(x) * skin_effect::k2(y));
    }

    #[test]
    fn resistance_is_aluminum_only() {
        let conductor = with_structure("s45_7");
        assert_eq!(conductor.dc_resistance(20.0), 0.0739);
        assert_relative_eq!(conductor.dc_resistance(80.0), 0.0739 * (1.0 + 0.00403 * 60.0));
    }

    #[test]
    fn strict_constructor_rejects_unknown_structure() {
        let error = CompositeSteel::new("X", 1.0, 1.0, 1.0, 1.0, 1.0, "s5_5").unwrap_err();
        assert_eq!(error.kind, ConductorKind::CompositeSteel);
    }

    #[test]
    fn fallback_keeps_fields_and_drops_core_loss() {
        let conductor =
            CompositeSteel::with_fallback("JL/G1A-X", 26.8, 7.5, 0.0739, 0.00403, 390.9, "s5_5");
        assert_eq!(conductor.structure(), UNKNOWN_STRUCTURE);
        assert_eq!(conductor.outer_layers(), 0);
        assert_eq!(conductor.r20(), 0.0739);
        assert!(!conductor.has_core_loss());
    }

    #[test]
    fn fallback_matches_strict_for_known_structure() {
        let conductor =
            CompositeSteel::with_fallback("JL/G1A-400/35", 26.8, 7.5, 0.0739, 0.00403, 390.9, "s72_7");
        assert_eq!(conductor, with_structure("s72_7"));
    }

    #[test]
    fn parse_checks_structure_before_zero_values() {
        let fields = ["COMP_ST", "x", "26.8", "0", "0.0739", "0.00403", "390.9", "s5_5"];
        assert!(matches!(
            CompositeSteel::parse_fields(&fields),
            Err(ParseError::Structure(_))
        ));

        let fields = ["COMP_ST", "x", "26.8", "0", "0.0739", "0.00403", "390.9", "s54_7"];
        assert!(matches!(
            CompositeSteel::parse_fields(&fields),
            Err(ParseError::InvalidValue {
                field: "core diameter",
                ..
            })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(
            with_structure("s54_7").to_string(),
            "COMP_ST,\tJL/G1A-400/35,\t26.8,\t7.5,\t0.0739,\t0.00403,\t390.9,\ts54_7"
        );
    }
}
