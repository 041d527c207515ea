//! # prompt-wizard-ratatui
//!
//! Ratatui backend for prompt-wizard.
//!
//! Presents one step at a time in a styled terminal UI with a progress line,
//! a short log of earlier answers and a help line. The UI is drawn on stderr,
//! so stdout stays free for the collected answers.
//!
//! ## Example
//!
//! ```rust,ignore
//! use prompt_wizard::{Outcome, Step, WizardBackend, WizardDefinition};
//! use prompt_wizard_ratatui::RatatuiBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let definition = WizardDefinition::new(vec![
//!         Step::input("name", "What is your name?"),
//!         Step::confirm("newsletter", "Subscribe to the newsletter?"),
//!     ])?;
//!
//!     match RatatuiBackend::new().with_title("Sign up").run(&definition)? {
//!         Outcome::Completed(answers) => println!("{}", answers.to_json()?),
//!         Outcome::Aborted => eprintln!("cancelled"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Keys
//!
//! | key | effect |
//! |---|---|
//! | Enter | commit the step |
//! | Esc, `b` | go back one step (`b` types a letter on text steps) |
//! | Ctrl+C, `q` | quit (`q` types a letter on text steps) |
//! | ↑↓ / `k` `j` | move the cursor |
//! | ←→ / `h` `l` | choose Yes / No |
//! | Space | toggle the highlighted option |
//! | `a` | select all / none |

mod backend;
pub use backend::{RatatuiBackend, RatatuiError, Theme};

pub mod keys;

mod ui;
