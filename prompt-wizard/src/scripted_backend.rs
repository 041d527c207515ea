//! Scripted backend for running wizards without user interaction.
//!
//! `ScriptedBackend` replays a fixed sequence of events against a fresh
//! [`Wizard`]. This is useful for testing step lists and for driving a wizard
//! from non-interactive tooling.
//!
//! # Example
//!
//! ```rust
//! use prompt_wizard::{ScriptedBackend, Step, WizardBackend, WizardDefinition};
//!
//! let definition = WizardDefinition::new(vec![
//!     Step::input("host", "Host:"),
//!     Step::confirm("tls", "Use TLS?"),
//! ])
//! .unwrap();
//!
//! let outcome = ScriptedBackend::new()
//!     .type_text("localhost")
//!     .commit()
//!     .confirm(true)
//!     .commit()
//!     .run(&definition)
//!     .unwrap();
//!
//! let answers = outcome.answers().unwrap();
//! assert_eq!(answers.get_text("host").unwrap(), "localhost");
//! assert!(answers.get_flag("tls").unwrap());
//! ```

use crate::{Outcome, Progress, Wizard, WizardBackend, WizardDefinition, WizardEvent};

/// A backend that replays pre-recorded events.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    events: Vec<WizardEvent>,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Script ended while step {index} ('{key}') was still waiting for input")]
    Exhausted { key: String, index: usize },
}

impl ScriptedBackend {
    /// Create a new empty script.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append a single event.
    pub fn press(mut self, event: WizardEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Append one `TextEdit` per character of `text`.
    pub fn type_text(mut self, text: &str) -> Self {
        self.events.extend(text.chars().map(WizardEvent::TextEdit));
        self
    }

    /// Append `n` cursor moves down.
    pub fn down(mut self, n: usize) -> Self {
        self.events.extend(std::iter::repeat_n(WizardEvent::MoveDown, n));
        self
    }

    /// Set a confirm step to yes or no.
    pub fn confirm(self, yes: bool) -> Self {
        self.press(if yes {
            WizardEvent::ToggleConfirmLeft
        } else {
            WizardEvent::ToggleConfirmRight
        })
    }

    /// Commit the current step.
    pub fn commit(self) -> Self {
        self.press(WizardEvent::Commit)
    }

    /// Go back one step.
    pub fn back(self) -> Self {
        self.press(WizardEvent::GoBack)
    }

    /// Quit the wizard.
    pub fn quit(self) -> Self {
        self.press(WizardEvent::Quit)
    }

    /// The recorded events.
    pub fn events(&self) -> &[WizardEvent] {
        &self.events
    }
}

impl WizardBackend for ScriptedBackend {
    type Error = ScriptError;

    fn run(&self, definition: &WizardDefinition) -> Result<Outcome, Self::Error> {
        let mut wizard = Wizard::new(definition);

        for (n, &event) in self.events.iter().enumerate() {
            if wizard.apply(event).is_terminal() {
                let unused = self.events.len() - n - 1;
                if unused > 0 {
                    log::debug!("wizard finished with {unused} scripted events left over");
                }
                break;
            }
        }

        if wizard.progress() == Progress::Active {
            let index = wizard.current_index();
            let key = wizard
                .current_step()
                .map(|step| step.key().to_string())
                .unwrap_or_default();
            return Err(ScriptError::Exhausted { key, index });
        }

        Ok(wizard.into_outcome())
    }
}
