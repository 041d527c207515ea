use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use prompt_wizard::WizardDefinition;

use crate::jsonc;

/// Where the step list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepsSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// JSON given directly on the command line.
    Inline(String),
    /// JSON piped into stdin.
    Stdin,
}

impl StepsSource {
    /// Decide how to read the step list.
    ///
    /// An argument that starts like a JSON document is always inline. Any
    /// other argument names a file if one exists at that path and is taken
    /// as inline JSON otherwise. Without an argument the list is read from
    /// stdin, which must not be a terminal.
    pub fn resolve(arg: Option<&str>, stdin_is_terminal: bool) -> anyhow::Result<Self> {
        match arg {
            Some(arg) => {
                let trimmed = arg.trim_start();
                if !trimmed.starts_with(['[', '{']) && Path::new(arg).is_file() {
                    Ok(Self::File(PathBuf::from(arg)))
                } else {
                    Ok(Self::Inline(arg.to_string()))
                }
            }
            None if stdin_is_terminal => bail!(
                "no steps JSON provided; pass a file path or a JSON string, or pipe the steps into stdin"
            ),
            None => Ok(Self::Stdin),
        }
    }

    /// Read the raw (possibly commented) JSON text.
    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            Self::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read steps file {}", path.display())),
            Self::Inline(json) => Ok(json.clone()),
            Self::Stdin => io::read_to_string(io::stdin()).context("failed to read steps from stdin"),
        }
    }
}

/// Read, strip and parse the step list from `source`.
pub fn load_definition(source: &StepsSource) -> anyhow::Result<WizardDefinition> {
    let text = source.read()?;
    let json = jsonc::strip_comments(&text);
    let definition = WizardDefinition::from_json(&json)
        .context("failed to parse steps JSON (// and /* */ comments are allowed)")?;
    log::debug!("loaded {} steps from {source:?}", definition.len());
    Ok(definition)
}
