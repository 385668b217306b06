//! Field-level validation for request payloads.

use std::fmt::Display;

/// A single payload field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// The JSON path of the field, e.g. `category.title`.
    pub field: &'static str,
    /// The rule the field broke.
    pub rule: &'static str,
}

/// Collects every violation found while validating one payload.
///
/// Validation does not stop at the first bad field so that the client can fix all of them at
/// once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    entity: &'static str,
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    /// Start validating a payload for `entity`, e.g. "Transaction".
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            violations: Vec::new(),
        }
    }

    /// Check that `value` is present and not empty.
    ///
    /// Returns the value unchanged when it is valid. Otherwise the violation is recorded and an
    /// empty string is returned, which callers must not use unless [ValidationErrors::finish]
    /// succeeds.
    pub fn require(&mut self, field: &'static str, value: Option<String>) -> String {
        match value {
            Some(value) if !value.is_empty() => value,
            _ => {
                self.violations.push(FieldViolation {
                    field,
                    rule: "required",
                });
                String::new()
            }
        }
    }

    /// The violations recorded so far.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Finish validation.
    ///
    /// # Errors
    ///
    /// Returns `self` if any violation was recorded.
    pub fn finish(self) -> Result<(), Self> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(
                f,
                "Key: '{}.{}' Error: field validation for '{}' failed on the '{}' tag",
                self.entity, violation.field, violation.field, violation.rule
            )?;
        }

        Ok(())
    }
}
