//! # prompt-wizard-cli
//!
//! Plumbing behind the `prompt-wizard` binary: locating the step list,
//! stripping comments from it and writing the collected answers.
//!
//! The binary itself only parses arguments, runs the terminal backend and
//! maps the outcome to an exit code.

pub mod jsonc;

mod source;
pub use source::{StepsSource, load_definition};

mod output;
pub use output::write_answers;
