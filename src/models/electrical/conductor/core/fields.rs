//! Field-level validation shared by the variant parsers.

use crate::support::constraint::{Constraint, Finite, NonZero};

use super::{ConductorKind, ParseError};

/// The comma-separated fields of one record, arity already checked.
///
/// Index 0 is the sign and index 1 the name; the remaining indices are
/// variant-specific.
#[derive(Debug, Clone, Copy)]
pub(super) struct Fields<'a> {
    fields: &'a [&'a str],
}

impl<'a> Fields<'a> {
    /// Checks that `fields` has exactly the arity of `kind`.
    pub(super) fn new(kind: ConductorKind, fields: &'a [&'a str]) -> Result<Self, ParseError> {
        let expected = kind.field_count();
        if fields.len() != expected {
            return Err(ParseError::FieldCount {
                kind,
                expected,
                found: fields.len(),
            });
        }
        Ok(Self { fields })
    }

    /// Reads the name: trimmed, upper-cased and non-empty.
    pub(super) fn name(&self) -> Result<String, ParseError> {
        let name = self.fields[1].trim().to_uppercase();
        if name.is_empty() {
            return Err(ParseError::EmptyName);
        }
        Ok(name)
    }

    /// Reads a finite number from the field at `index`.
    pub(super) fn number(&self, index: usize, field: &'static str) -> Result<f64, ParseError> {
        let text = self.fields[index].trim();
        let value = text.parse::<f64>().map_err(|_| ParseError::NotANumber {
            field,
            text: text.to_owned(),
        })?;
        Finite::check(&value).map_err(|source| ParseError::InvalidValue { field, source })?;
        Ok(value)
    }

    /// Reads the raw text of the field at `index`, trimmed.
    pub(super) fn text(&self, index: usize) -> &'a str {
        self.fields[index].trim()
    }
}

/// Rejects the record if any of the named values is zero.
pub(super) fn require_non_zero(values: &[(&'static str, f64)]) -> Result<(), ParseError> {
    values.iter().try_for_each(|&(field, value)| {
        NonZero::check(&value).map_err(|source| ParseError::InvalidValue { field, source })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    const RECORD: [&str; 5] = ["HOMO", "  jlha1-95 ", " 12.6", "0.2850 ", "nan"];

    #[test]
    fn arity() {
        assert!(Fields::new(ConductorKind::Homogeneous, &RECORD).is_ok());
        assert_eq!(
            Fields::new(ConductorKind::CompositeSteel, &RECORD).unwrap_err(),
            ParseError::FieldCount {
                kind: ConductorKind::CompositeSteel,
                expected: 8,
                found: 5,
            }
        );
    }

    #[test]
    fn name_is_trimmed_and_upper_cased() {
        let fields = Fields::new(ConductorKind::Homogeneous, &RECORD).unwrap();
        assert_eq!(fields.name().unwrap(), "JLHA1-95");
    }

    #[test]
    fn numbers() {
        let fields = Fields::new(ConductorKind::Homogeneous, &RECORD).unwrap();
        assert_eq!(fields.number(2, "diameter").unwrap(), 12.6);
        assert_eq!(fields.number(3, "r20").unwrap(), 0.285);
        assert_eq!(
            fields.number(4, "alpha").unwrap_err(),
            ParseError::InvalidValue {
                field: "alpha",
                source: ConstraintError::NotANumber,
            }
        );
        assert!(matches!(
            fields.number(1, "diameter"),
            Err(ParseError::NotANumber { field: "diameter", .. })
        ));
    }

    #[test]
    fn zero_values() {
        assert!(require_non_zero(&[("diameter", 12.6), ("alpha", -0.004)]).is_ok());
        assert_eq!(
            require_non_zero(&[("diameter", 12.6), ("r20", 0.0)]).unwrap_err(),
            ParseError::InvalidValue {
                field: "r20",
                source: ConstraintError::Zero,
            }
        );
    }
}
