use crate::{Outcome, WizardDefinition};

/// Trait for drivers that run a wizard to completion.
///
/// A backend owns the event source (a terminal, a script, ...) and feeds
/// events to the engine until it reaches a terminal state. An abort is
/// reported as `Outcome::Aborted`; `Err` is reserved for driver failures.
pub trait WizardBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Run the wizard over `definition` and return how it ended.
    fn run(&self, definition: &WizardDefinition) -> Result<Outcome, Self::Error>;
}
