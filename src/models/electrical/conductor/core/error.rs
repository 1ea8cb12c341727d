use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::ConductorKind;

/// A structure code that isn't listed in the variant's structural table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} structure code {code:?}")]
pub struct StructureError {
    /// Variant whose table was searched.
    pub kind: ConductorKind,

    /// The normalized (trimmed, lower-cased) code.
    pub code: String,
}

/// Reasons a text record is rejected by the conductor parser.
///
/// [`Conductor::parse`](super::Conductor::parse) collapses all of these into
/// `None`; [`Conductor::try_parse`](super::Conductor::try_parse) keeps them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The leading token doesn't name a conductor variant.
    #[error("unrecognized conductor sign {sign:?}")]
    UnknownKind { sign: String },

    /// The record has the wrong number of comma-separated fields.
    #[error("{kind} record needs {expected} fields, found {found}")]
    FieldCount {
        kind: ConductorKind,
        expected: usize,
        found: usize,
    },

    /// The name field is blank.
    #[error("conductor name is empty")]
    EmptyName,

    /// A numeric field couldn't be read as a number.
    #[error("{field} is not a number: {text:?}")]
    NotANumber { field: &'static str, text: String },

    /// A numeric field was read but isn't usable (zero or non-finite).
    #[error("invalid {field}")]
    InvalidValue {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The structure code isn't in the variant's table.
    #[error(transparent)]
    Structure(#[from] StructureError),
}
