use crate::AnswerValue;

/// Error type for building a `WizardDefinition`.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// The step list has no steps.
    #[error("No steps defined")]
    Empty,

    /// A step has an empty key.
    #[error("Step {index} has an empty key")]
    EmptyKey { index: usize },

    /// A select or multi-select step has no options.
    #[error("Step '{key}' needs at least one option")]
    NoOptions { key: String },

    /// The step list is not valid JSON or does not match the step schema.
    #[error("Error parsing steps JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Error type for typed access to `Answers`.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for key: {0}")]
    MissingKey(String),

    #[error("Type mismatch at key '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl AnswerError {
    pub(crate) fn type_mismatch(key: &str, expected: &'static str, actual: &AnswerValue) -> Self {
        Self::TypeMismatch {
            key: key.to_string(),
            expected,
            actual: actual.type_name(),
        }
    }
}

/// Error type for callers that treat an aborted run as a failure.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// User quit the wizard (Ctrl+C, `q`).
    #[error("Wizard aborted by user")]
    Aborted,

    /// Backend-specific failure (I/O, terminal setup, exhausted script, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl WizardError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents a user abort.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}
