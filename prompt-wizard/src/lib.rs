//! # prompt-wizard
//!
//! A step-by-step form wizard engine. Backend-agnostic.
//!
//! A wizard walks the user through an ordered list of steps (text input,
//! single choice, yes/no, multiple choice), one at a time, and collects the
//! committed answers keyed by each step's key. The user can go back to any
//! earlier step; its widget is rebuilt from the answer already given.
//!
//! ## Usage
//!
//! ```rust
//! use prompt_wizard::{Outcome, Step, Wizard, WizardDefinition, WizardEvent};
//!
//! let definition = WizardDefinition::new(vec![
//!     Step::input("name", "Name").with_default("guest"),
//!     Step::select("color", "Color", ["Red", "Blue"]),
//! ])
//! .unwrap();
//!
//! let mut wizard = Wizard::new(&definition);
//! wizard.apply(WizardEvent::Commit);
//! wizard.apply(WizardEvent::MoveDown);
//! wizard.apply(WizardEvent::Commit);
//!
//! let Outcome::Completed(answers) = wizard.into_outcome() else {
//!     unreachable!()
//! };
//! assert_eq!(answers.get_text("name").unwrap(), "guest");
//! assert_eq!(answers.get_text("color").unwrap(), "Blue");
//! ```
//!
//! ## Backends
//!
//! Drivers implement `WizardBackend`, feed events to a `Wizard` and draw its
//! `StepView` after every event:
//! - `ScriptedBackend` (this crate) - replays a fixed list of events
//! - `prompt-wizard-ratatui` - interactive terminal UI

// Re-export all types from prompt-wizard-types
pub use prompt_wizard_types::*;

mod event;
pub use event::WizardEvent;

mod widget;
pub use widget::Widget;

mod wizard;
pub use wizard::{Progress, Wizard};

pub mod view;
pub use view::StepView;

// Scripted backend for driving a wizard without user interaction
mod scripted_backend;
pub use scripted_backend::{ScriptError, ScriptedBackend};
