//! Core types for the prompt-wizard crates.
//!
//! This crate provides the foundational, presentation-agnostic types:
//! - `Step` and `StepKind` - A single wizard page and its input modality
//! - `WizardDefinition` - A validated, non-empty list of steps
//! - `AnswerValue` and `Answers` - Committed values keyed by step key
//! - `Outcome` and `WizardBackend` - What a finished run yields and who drives it

mod step;
pub use step::{ConfirmStep, InputStep, MultiSelectStep, SelectStep, Step, StepKind};

mod definition;
pub use definition::WizardDefinition;

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::Answers;

mod outcome;
pub use outcome::Outcome;

mod error;
pub use error::{AnswerError, DefinitionError, WizardError};

mod traits;
pub use traits::WizardBackend;
