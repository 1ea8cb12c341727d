//! Stranding tables from GB/T 1179-2017.
//!
//! Structure codes are written `s{outer wires}_{core wires}`, e.g. `s54_7`
//! for 54 aluminum wires laid over a 7-wire core. Lookups expect a
//! normalized (trimmed, lower-cased) code; see [`normalize`].

/// Lay-length increments of an aluminum-alloy-core conductor, in percent.
///
/// Stranded wires are longer than the conductor they form, which raises the
/// resistance of each layer by this much.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayIncrement {
    /// Increment for the outer (aluminum) wires.
    pub outer: f64,
    /// Increment for the inner (aluminum-alloy) wires.
    pub inner: f64,
}

impl LayIncrement {
    const fn new(outer: f64, inner: f64) -> Self {
        Self { outer, inner }
    }

    /// Resistance multiplier of the outer layer, `1 + outer / 100`.
    #[must_use]
    pub fn outer_factor(self) -> f64 {
        1.0 + self.outer / 100.0
    }

    /// Resistance multiplier of the inner layer, `1 + inner / 100`.
    #[must_use]
    pub fn inner_factor(self) -> f64 {
        1.0 + self.inner / 100.0
    }
}

/// Aluminum-alloy-core structures (table 5).
pub const ALUMINUM_CORE_STRUCTURES: &[(&str, LayIncrement)] = &[
    ("s4_3", LayIncrement::new(1.51, 1.51)),
    ("s12_7", LayIncrement::new(2.17, 1.29)),
    ("s30_7", LayIncrement::new(2.23, 1.29)),
    ("s54_7", LayIncrement::new(2.31, 1.29)),
    ("s18_19", LayIncrement::new(2.49, 1.58)),
    ("s42_19", LayIncrement::new(2.44, 1.58)),
    ("s72_19", LayIncrement::new(2.45, 1.58)),
    ("s24_37", LayIncrement::new(2.67, 1.84)),
    ("s42_37", LayIncrement::new(2.44, 1.84)),
    ("s54_37", LayIncrement::new(2.57, 1.84)),
];

/// Steel-core structures and their number of outer (aluminum) layers.
pub const STEEL_CORE_STRUCTURES: &[(&str, u8)] = &[
    ("s6_1", 1),
    ("s7_7", 1),
    ("s12_7", 1),
    ("s18_1", 2),
    ("s22_7", 2),
    ("s24_7", 2),
    ("s26_7", 2),
    ("s30_7", 2),
    ("s42_7", 3),
    ("s45_7", 3),
    ("s48_7", 3),
    ("s54_7", 3),
    ("s72_7", 4),
    ("s76_7", 4),
    ("s84_7", 4),
    ("s30_19", 2),
    ("s54_19", 2),
    ("s72_19", 4),
    ("s76_19", 4),
    ("s84_19", 4),
    ("s88_19", 4),
];

/// Normalizes a structure code the way records are keyed.
#[must_use]
pub fn normalize(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Returns the lay-length increments for an aluminum-alloy-core structure.
///
/// ```
/// use conductor_models::models::electrical::conductor::aluminum_core_lay_increment;
///
/// let lay = aluminum_core_lay_increment("s54_7").unwrap();
/// assert_eq!(lay.outer, 2.31);
/// assert!(aluminum_core_lay_increment("S54_7").is_none());
/// ```
#[must_use]
pub fn aluminum_core_lay_increment(code: &str) -> Option<LayIncrement> {
    ALUMINUM_CORE_STRUCTURES
        .iter()
        .find(|(key, _)| *key == code)
        .map(|&(_, lay)| lay)
}

/// Returns the number of outer conducting layers of a steel-core structure.
#[must_use]
pub fn steel_core_outer_layers(code: &str) -> Option<u8> {
    STEEL_CORE_STRUCTURES
        .iter()
        .find(|(key, _)| *key == code)
        .map(|&(_, layers)| layers)
}
