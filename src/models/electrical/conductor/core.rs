//! Conductor variants, their formulas, and their text form.
//!
//! A record is one line of comma-separated fields whose first field names
//! the variant:
//!
//! | Sign      | Fields | Layout                                                                     |
//! |-----------|--------|----------------------------------------------------------------------------|
//! | `HOMO`    | 5      | name, diameter, r20, alpha                                                 |
//! | `COMP_AL` | 10     | name, diameter, outer section/rou20/alpha, inner section/rou20/alpha, structure |
//! | `COMP_ST` | 8      | name, diameter, core diameter, r20, alpha, section, structure              |
//!
//! Rendering writes the same fields separated by `",\t"`.

mod composite_aluminum;
mod composite_steel;
mod error;
mod fields;
mod homogeneous;
mod render;
mod skin_effect;
mod structure;

pub use composite_aluminum::{CompositeAluminum, Layer};
pub use composite_steel::{CompositeSteel, UNKNOWN_STRUCTURE};
pub use error::{ParseError, StructureError};
pub use homogeneous::Homogeneous;
pub use structure::{
    ALUMINUM_CORE_STRUCTURES, LayIncrement, STEEL_CORE_STRUCTURES, aluminum_core_lay_increment,
    steel_core_outer_layers,
};

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use log::debug;

/// The three conductor constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConductorKind {
    Homogeneous,
    CompositeAluminum,
    CompositeSteel,
}

impl ConductorKind {
    /// All kinds, in dispatch order.
    pub const ALL: [Self; 3] = [
        Self::Homogeneous,
        Self::CompositeAluminum,
        Self::CompositeSteel,
    ];

    /// The leading token of a record of this kind.
    #[must_use]
    pub const fn sign(self) -> &'static str {
        match self {
            Self::Homogeneous => "HOMO",
            Self::CompositeAluminum => "COMP_AL",
            Self::CompositeSteel => "COMP_ST",
        }
    }

    /// Number of comma-separated fields in a record, sign included.
    #[must_use]
    pub const fn field_count(self) -> usize {
        match self {
            Self::Homogeneous => 5,
            Self::CompositeAluminum => 10,
            Self::CompositeSteel => 8,
        }
    }
}

impl Display for ConductorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.sign())
    }
}

/// Matches a sign, ignoring case and surrounding whitespace.
impl FromStr for ConductorKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sign = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.sign() == sign)
            .ok_or(ParseError::UnknownKind { sign })
    }
}

/// A stranded overhead-line conductor.
///
/// Equality is exact: two conductors are equal only if they are the same
/// variant and every field compares equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Conductor {
    Homogeneous(Homogeneous),
    CompositeAluminum(CompositeAluminum),
    CompositeSteel(CompositeSteel),
}

impl Conductor {
    /// Parses a record, returning `None` if it isn't a well-formed conductor.
    ///
    /// Unrecognized signs are a normal outcome for arbitrary text and are
    /// not distinguished from malformed records; use [`Self::try_parse`] to
    /// learn why a record was rejected.
    ///
    /// ```
    /// use conductor_models::models::electrical::conductor::Conductor;
    ///
    /// let conductor = Conductor::parse("HOMO, JLHA1-95, 12.6, 0.2850, 0.0040").unwrap();
    /// assert_eq!(conductor.diameter(), 12.6);
    /// assert_eq!(conductor.dc_resistance(20.0), 0.285);
    ///
    /// assert!(Conductor::parse("HOMO, X, 1, 2").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Self::try_parse(text)
            .inspect_err(|error| debug!("rejected conductor record {text:?}: {error}"))
            .ok()
    }

    /// Parses a record, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first rule the record breaks.
    pub fn try_parse(text: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = text.split(',').collect();
        let sign = fields.first().copied().unwrap_or_default();

        match sign.parse::<ConductorKind>()? {
            ConductorKind::Homogeneous => Homogeneous::parse_fields(&fields).map(Self::from),
            ConductorKind::CompositeAluminum => {
                CompositeAluminum::parse_fields(&fields).map(Self::from)
            }
            ConductorKind::CompositeSteel => CompositeSteel::parse_fields(&fields).map(Self::from),
        }
    }

    /// Renders conductors one per line, each line newline-terminated.
    pub fn render_catalog<'a>(conductors: impl IntoIterator<Item = &'a Conductor>) -> String {
        conductors
            .into_iter()
            .map(|conductor| format!("{conductor}\n"))
            .collect()
    }

    #[must_use]
    pub fn kind(&self) -> ConductorKind {
        match self {
            Self::Homogeneous(_) => ConductorKind::Homogeneous,
            Self::CompositeAluminum(_) => ConductorKind::CompositeAluminum,
            Self::CompositeSteel(_) => ConductorKind::CompositeSteel,
        }
    }

    #[must_use]
    pub fn sign(&self) -> &'static str {
        self.kind().sign()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Homogeneous(c) => c.name(),
            Self::CompositeAluminum(c) => c.name(),
            Self::CompositeSteel(c) => c.name(),
        }
    }

    /// Outer diameter, in mm.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        match self {
            Self::Homogeneous(c) => c.diameter(),
            Self::CompositeAluminum(c) => c.diameter(),
            Self::CompositeSteel(c) => c.diameter(),
        }
    }

    /// DC resistance per unit length at `temperature` (°C).
    #[must_use]
    pub fn dc_resistance(&self, temperature: f64) -> f64 {
        match self {
            Self::Homogeneous(c) => c.dc_resistance(temperature),
            Self::CompositeAluminum(c) => c.dc_resistance(temperature),
            Self::CompositeSteel(c) => c.dc_resistance(temperature),
        }
    }

    /// AC/DC resistance ratio for `current` (A) at `frequency` (Hz) and `temperature` (°C).
    #[must_use]
    pub fn ac_dc_ratio(&self, current: f64, frequency: f64, temperature: f64) -> f64 {
        match self {
            Self::Homogeneous(c) => c.ac_dc_ratio(current, frequency, temperature),
            Self::CompositeAluminum(c) => c.ac_dc_ratio(current, frequency, temperature),
            Self::CompositeSteel(c) => c.ac_dc_ratio(current, frequency, temperature),
        }
    }

    /// AC resistance per unit length: the DC resistance scaled by [`Self::ac_dc_ratio`].
    #[must_use]
    pub fn ac_resistance(&self, current: f64, frequency: f64, temperature: f64) -> f64 {
        self.dc_resistance(temperature) * self.ac_dc_ratio(current, frequency, temperature)
    }
}

impl Display for Conductor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Homogeneous(c) => c.fmt(f),
            Self::CompositeAluminum(c) => c.fmt(f),
            Self::CompositeSteel(c) => c.fmt(f),
        }
    }
}

impl From<Homogeneous> for Conductor {
    fn from(conductor: Homogeneous) -> Self {
        Self::Homogeneous(conductor)
    }
}

impl From<CompositeAluminum> for Conductor {
    fn from(conductor: CompositeAluminum) -> Self {
        Self::CompositeAluminum(conductor)
    }
}

impl From<CompositeSteel> for Conductor {
    fn from(conductor: CompositeSteel) -> Self {
        Self::CompositeSteel(conductor)
    }
}
