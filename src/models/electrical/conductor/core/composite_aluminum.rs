use std::fmt::{self, Display, Formatter};

use crate::support::resistance::resistance_at;

use super::{
    ConductorKind, ParseError, StructureError,
    fields::{Fields, require_non_zero},
    render::{Number, write_record},
    skin_effect,
    structure::{aluminum_core_lay_increment, normalize},
};

/// Material and cross-section of one conducting layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Cross-section, in mm².
    pub section: f64,
    /// Resistivity at 20 °C, in Ω·mm² per unit length.
    pub rou20: f64,
    /// Temperature coefficient of resistance, in 1/°C.
    pub alpha: f64,
}

impl Layer {
    #[must_use]
    pub fn new(section: f64, rou20: f64, alpha: f64) -> Self {
        Self {
            section,
            rou20,
            alpha,
        }
    }

    /// Resistance per unit length at `temperature`, lengthened by `lay_factor`.
    fn resistance(&self, lay_factor: f64, temperature: f64) -> f64 {
        let r20 = self.rou20 * lay_factor / self.section;
        resistance_at(r20, self.alpha, temperature)
    }
}

/// Aluminum wires laid over an aluminum-alloy core (e.g. JL1/LHA1).
///
/// Both layers conduct, so the DC resistance is that of the two layers in
/// parallel, each lengthened by the lay-length factor of the structure.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeAluminum {
    name: String,
    diameter: f64,
    outer: Layer,
    inner: Layer,
    structure: String,
    outer_lambda: f64,
    inner_lambda: f64,
}

impl CompositeAluminum {
    /// Creates a composite conductor with an aluminum-alloy core.
    ///
    /// `diameter` in mm. The structure code is normalized (trimmed,
    /// lower-cased) before lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if the structure code is not listed in
    /// [`ALUMINUM_CORE_STRUCTURES`](super::ALUMINUM_CORE_STRUCTURES).
    pub fn new(
        name: impl Into<String>,
        diameter: f64,
        outer: Layer,
        inner: Layer,
        structure: &str,
    ) -> Result<Self, StructureError> {
        let structure = normalize(structure);
        let Some(lay) = aluminum_core_lay_increment(&structure) else {
            return Err(StructureError {
                kind: ConductorKind::CompositeAluminum,
                code: structure,
            });
        };

        Ok(Self {
            name: name.into(),
            diameter,
            outer,
            inner,
            structure,
            outer_lambda: lay.outer_factor(),
            inner_lambda: lay.inner_factor(),
        })
    }

    /// Builds a conductor from a record split on commas, sign included.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the record has the wrong arity, an empty
    /// name, a numeric field that is not a finite, non-zero number, or an
    /// unknown structure code.
    pub fn parse_fields(fields: &[&str]) -> Result<Self, ParseError> {
        let fields = Fields::new(ConductorKind::CompositeAluminum, fields)?;
        let name = fields.name()?;
        let diameter = fields.number(2, "diameter")?;
        let outer = Layer::new(
            fields.number(3, "outer section")?,
            fields.number(4, "outer rou20")?,
            fields.number(5, "outer alpha")?,
        );
        let inner = Layer::new(
            fields.number(6, "inner section")?,
            fields.number(7, "inner rou20")?,
            fields.number(8, "inner alpha")?,
        );
        require_non_zero(&[
            ("diameter", diameter),
            ("outer section", outer.section),
            ("outer rou20", outer.rou20),
            ("outer alpha", outer.alpha),
            ("inner section", inner.section),
            ("inner rou20", inner.rou20),
            ("inner alpha", inner.alpha),
        ])?;

        Ok(Self::new(name, diameter, outer, inner, fields.text(9))?)
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

    #[must_use]
    pub fn outer(&self) -> Layer {
        self.outer
    }

    #[must_use]
    pub fn inner(&self) -> Layer {
        self.inner
    }

    #[must_use]
    pub fn structure(&self) -> &str {
        &self.structure
    }

    /// Lay-length resistance factor of the outer layer.
    #[must_use]
    pub fn outer_lambda(&self) -> f64 {
        self.outer_lambda
    }

    /// Lay-length resistance factor of the inner layer.
    #[must_use]
    pub fn inner_lambda(&self) -> f64 {
        self.inner_lambda
    }

    /// DC resistance at `temperature` (°C), both layers in parallel.
    #[must_use]
    pub fn dc_resistance(&self, temperature: f64) -> f64 {
        let inner = self.inner.resistance(self.inner_lambda, temperature);
        let outer = self.outer.resistance(self.outer_lambda, temperature);
        1.0 / (1.0 / inner + 1.0 / outer)
    }

    /// AC/DC resistance ratio at `frequency` (Hz) and `temperature` (°C).
    ///
    /// The current doesn't enter: the aluminum-alloy core isn't magnetic.
    #[must_use]
    pub fn ac_dc_ratio(&self, _current: f64, frequency: f64, temperature: f64) -> f64 {
        let x = skin_effect::solid_x(frequency, self.dc_resistance(temperature));
        skin_effect::k1(x)
    }
}

impl Display for CompositeAluminum {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_record(
            f,
            ConductorKind::CompositeAluminum.sign(),
            &[
                &self.name,
                &Number(self.diameter),
                &Number(self.outer.section),
                &Number(self.outer.rou20),
                &Number(self.outer.alpha),
                &Number(self.inner.section),
                &Number(self.inner.rou20),
                &Number(self.inner.alpha),
                &self.structure,
            ],
        )
    }
}
