use uom::{
    si::{
        ISQ, Quantity, SI,
        electrical_resistance::ohm,
        f64::{ElectricalResistance, Length},
        length::kilometer,
    },
    typenum::{N2, N3, P1, Z0},
};

/// Electrical resistance per unit length, Ω/m in SI.
pub type LinearResistance = Quantity<ISQ<P1, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`LinearResistance`] from a value in Ω/km.
#[must_use]
pub fn ohm_per_kilometer(value: f64) -> LinearResistance {
    ElectricalResistance::new::<ohm>(value) / Length::new::<kilometer>(1.0)
}

/// Reads a [`LinearResistance`] back in catalog units.
pub trait LinearResistanceExt {
    /// Returns the value in Ω/km.
    fn get_ohm_per_kilometer(&self) -> f64;
}

impl LinearResistanceExt for LinearResistance {
    fn get_ohm_per_kilometer(&self) -> f64 {
        (*self * Length::new::<kilometer>(1.0)).get::<ohm>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn kilometer_round_trip() {
        let r = ohm_per_kilometer(0.1181);
        assert_relative_eq!(r.value, 0.1181e-3);
        assert_relative_eq!(r.get_ohm_per_kilometer(), 0.1181);
    }
}
