use crate::Answers;

/// How a wizard run ended.
///
/// Aborting is a normal outcome, not an error: it simply carries no answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every step was committed.
    Completed(Answers),

    /// The user quit before the last step was committed.
    Aborted,
}

impl Outcome {
    /// Check if this run was aborted.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    /// The answers of a completed run.
    pub fn answers(&self) -> Option<&Answers> {
        match self {
            Self::Completed(answers) => Some(answers),
            Self::Aborted => None,
        }
    }

    /// Convert into the answers, treating an abort as `WizardError::Aborted`.
    pub fn into_answers(self) -> Result<Answers, crate::WizardError> {
        match self {
            Self::Completed(answers) => Ok(answers),
            Self::Aborted => Err(crate::WizardError::Aborted),
        }
    }
}
