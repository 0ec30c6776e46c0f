//! Typed errors for the relief store.
//!
//! Store mutations never fail; these errors come from the form layer and
//! from parsing user-supplied enumeration values.

use thiserror::Error;

/// A single form field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every failed field of one form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("invalid form: {}", join_messages(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Record `message` for `field` when `ok` is false.
    pub fn check(&mut self, ok: bool, field: &'static str, message: &str) {
        if !ok {
            self.push(FieldError::new(field, message));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Error for a specific field, if it failed.
    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// `Ok(value)` when nothing failed, otherwise `Err(self)`.
    pub fn into_result<T>(
        self,
        value: impl FnOnce() -> T,
    ) -> std::result::Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// A string that is not one of an enumeration's accepted values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Errors surfaced by the relief library.
#[derive(Debug, Error)]
pub enum ReliefError {
    /// Form submission failed validation
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Unknown enumeration value
    #[error(transparent)]
    Parse(#[from] ParseEnumError),

    /// Export file could not be written
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for relief operations.
pub type Result<T> = std::result::Result<T, ReliefError>;
