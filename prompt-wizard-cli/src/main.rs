use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use prompt_wizard::{Outcome, WizardBackend};
use prompt_wizard_cli::{StepsSource, load_definition, write_answers};
use prompt_wizard_ratatui::RatatuiBackend;

const STEPS_HELP: &str = r#"Steps JSON format (// and /* */ comments are allowed):
[
  {"type": "input", "title": "Name", "key": "name", "placeholder": "Enter name"},
  {"type": "select", "title": "Color", "key": "color", "options": ["Red", "Blue"]},
  {"type": "confirm", "title": "Continue?", "key": "continue"},
  {"type": "multiselect", "title": "Extras", "key": "extras", "options": ["A", "B"]}
]"#;

#[derive(Parser, Debug)]
#[command(name = "prompt-wizard")]
#[command(version)]
#[command(about = "Walk through a list of prompts and print the answers as JSON.", long_about = None)]
#[command(after_help = STEPS_HELP)]
struct Args {
    /// Steps as a JSON file path or an inline JSON string. Read from stdin when omitted.
    #[arg(value_name = "STEPS")]
    steps: Option<String>,

    /// Write the answers to this file instead of stdout.
    #[arg(long, value_name = "FILE")]
    result_file: Option<PathBuf>,

    /// Title shown above the steps.
    #[arg(long, default_value = "")]
    title: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let source = StepsSource::resolve(args.steps.as_deref(), io::stdin().is_terminal())?;
    let definition = load_definition(&source)?;

    let backend = RatatuiBackend::new().with_title(args.title.as_str());
    let outcome = backend
        .run(&definition)
        .context("failed to run the terminal wizard")?;

    match outcome {
        Outcome::Completed(answers) => {
            write_answers(&answers, args.result_file.as_deref(), &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Aborted => {
            eprintln!("wizard aborted");
            Ok(ExitCode::FAILURE)
        }
    }
}
