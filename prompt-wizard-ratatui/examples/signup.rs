//! Sign-up form driven by the ratatui backend.
//!
//! Run with: cargo run -p prompt-wizard-ratatui --example signup

use prompt_wizard::{Outcome, Step, WizardBackend, WizardDefinition};
use prompt_wizard_ratatui::RatatuiBackend;

fn main() -> anyhow::Result<()> {
    let definition = WizardDefinition::new(vec![
        Step::input("name", "What is your name?").with_placeholder("Ada Lovelace"),
        Step::input("email", "Email").with_description("we never share it"),
        Step::select("plan", "Plan", ["Free", "Pro", "Team"]),
        Step::multi_select("topics", "Topics", ["Rust", "Terminals", "Compilers"]),
        Step::confirm("newsletter", "Subscribe to the newsletter?"),
    ])?;

    let backend = RatatuiBackend::new().with_title("Sign up");
    match backend.run(&definition)? {
        Outcome::Completed(answers) => {
            println!("\n=== Signed up ===");
            for (key, value) in answers.iter() {
                println!("{key}: {value}");
            }
        }
        Outcome::Aborted => println!("Sign-up cancelled."),
    }

    Ok(())
}
