//! Overhead-line conductor models.
//!
//! The computational core (variants, formulas, text form) lives in the
//! internal `core` module and is re-exported here. [`ConductorModel`] is the
//! [`twine_core::Model`] adapter: it evaluates one conductor at an operating
//! point given in [`uom`] quantities.
//!
//! # Example
//!
//! ```
//! use conductor_models::models::electrical::conductor::{
//!     Conductor, ConductorModel, OperatingPoint,
//! };
//! use conductor_models::support::units::LinearResistanceExt;
//! use twine_core::Model;
//! use uom::si::{
//!     electric_current::ampere,
//!     f64::{ElectricCurrent, Frequency, ThermodynamicTemperature},
//!     frequency::hertz,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let conductor = Conductor::parse("COMP_ST, JL/G1A-630/45, 33.8, 8.4, 0.0459, 0.00403, 623.5, s45_7")
//!     .expect("valid record");
//! let model = ConductorModel::new(conductor);
//!
//! let resistance = model
//!     .call(&OperatingPoint {
//!         temperature: ThermodynamicTemperature::new::<degree_celsius>(70.0),
//!         frequency: Frequency::new::<hertz>(50.0),
//!         current: ElectricCurrent::new::<ampere>(900.0),
//!     })
//!     .unwrap();
//!
//! assert!(resistance.ac.get_ohm_per_kilometer() > resistance.dc.get_ohm_per_kilometer());
//! ```

mod core;

pub use self::core::{
    ALUMINUM_CORE_STRUCTURES, CompositeAluminum, CompositeSteel, Conductor, ConductorKind,
    Homogeneous, LayIncrement, Layer, ParseError, STEEL_CORE_STRUCTURES, StructureError,
    UNKNOWN_STRUCTURE, aluminum_core_lay_increment, steel_core_outer_layers,
};

use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, Frequency, Ratio, ThermodynamicTemperature},
    frequency::hertz,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{LinearResistance, ohm_per_kilometer};

/// Conditions a conductor is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Conductor temperature.
    pub temperature: ThermodynamicTemperature,

    /// System frequency.
    pub frequency: Frequency,

    /// Load current; only steel-core conductors with an even number (≥ 4)
    /// of aluminum layers depend on it.
    pub current: ElectricCurrent,
}

/// Resistances of a conductor at an [`OperatingPoint`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductorResistance {
    pub dc: LinearResistance,
    pub ac_dc_ratio: Ratio,
    pub ac: LinearResistance,
}

/// [`Model`] adapter around a single [`Conductor`].
///
/// Catalog values are read as Ω/km, so the record's resistances and
/// resistivities must be in that unit for the output quantities to be right.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductorModel {
    conductor: Conductor,
}

impl ConductorModel {
    #[must_use]
    pub fn new(conductor: Conductor) -> Self {
        Self { conductor }
    }

    #[must_use]
    pub fn conductor(&self) -> &Conductor {
        &self.conductor
    }
}

impl From<Conductor> for ConductorModel {
    fn from(conductor: Conductor) -> Self {
        Self::new(conductor)
    }
}

impl Model for ConductorModel {
    type Input = OperatingPoint;
    type Output = ConductorResistance;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let temperature = input.temperature.get::<degree_celsius>();
        let frequency = input.frequency.get::<hertz>();
        let current = input.current.get::<ampere>();

        let rdc = self.conductor.dc_resistance(temperature);
        let k = self.conductor.ac_dc_ratio(current, frequency, temperature);

        Ok(ConductorResistance {
            dc: ohm_per_kilometer(rdc),
            ac_dc_ratio: Ratio::new::<ratio>(k),
            ac: ohm_per_kilometer(rdc * k),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::units::LinearResistanceExt;

    fn operating_point(celsius: f64, amperes: f64) -> OperatingPoint {
        OperatingPoint {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(celsius),
            frequency: Frequency::new::<hertz>(50.0),
            current: ElectricCurrent::new::<ampere>(amperes),
        }
    }

    #[test]
    fn matches_core_formulas() {
        let conductor = Conductor::from(Homogeneous::new("JL-240", 20.0, 0.1181, 0.00403));
        let model = ConductorModel::new(conductor.clone());

        let output = model.call(&operating_point(80.0, 500.0)).unwrap();

        assert_relative_eq!(
            output.dc.get_ohm_per_kilometer(),
            conductor.dc_resistance(80.0),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            output.ac_dc_ratio.get::<ratio>(),
            conductor.ac_dc_ratio(500.0, 50.0, 80.0),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            output.ac.value,
            output.dc.value * output.ac_dc_ratio.get::<ratio>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn current_dependence_follows_structure() {
        let four_layers = ConductorModel::from(
            Conductor::parse("COMP_ST, JL/G1A-720/50, 36.2, 9.6, 0.0398, 0.00403, 721.4, s72_7")
                .unwrap(),
        );
        let light = four_layers.call(&operating_point(70.0, 300.0)).unwrap();
        let heavy = four_layers.call(&operating_point(70.0, 1400.0)).unwrap();
        assert!(heavy.ac_dc_ratio > light.ac_dc_ratio);
        assert_relative_eq!(heavy.dc.value, light.dc.value);
    }
}
