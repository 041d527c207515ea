use std::collections::HashSet;

use serde::Deserialize;

use crate::{
    ConfirmStep, DefinitionError, InputStep, MultiSelectStep, SelectStep, Step, StepKind,
};

/// A validated, ordered list of steps.
///
/// Holding a `WizardDefinition` guarantees that there is at least one step,
/// that every key is non-empty, and that every select or multi-select step has
/// at least one option. Duplicate keys are allowed: the later step's answer
/// overwrites the earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardDefinition {
    steps: Vec<Step>,
}

impl WizardDefinition {
    /// Validate the given steps.
    pub fn new(steps: Vec<Step>) -> Result<Self, DefinitionError> {
        if steps.is_empty() {
            return Err(DefinitionError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, step) in steps.iter().enumerate() {
            if step.key().is_empty() {
                return Err(DefinitionError::EmptyKey { index });
            }
            if step.options().is_some_and(<[String]>::is_empty) {
                return Err(DefinitionError::NoOptions {
                    key: step.key().to_string(),
                });
            }
            if !seen.insert(step.key()) {
                log::warn!(
                    "step {index} reuses key '{}'; its answer overwrites the earlier one",
                    step.key()
                );
            }
        }

        Ok(Self { steps })
    }

    /// Parse and validate a JSON array of step records.
    ///
    /// ```
    /// use prompt_wizard_types::{StepKind, WizardDefinition};
    ///
    /// let definition = WizardDefinition::from_json(
    ///     r#"[
    ///         {"type": "input", "title": "Name", "key": "name", "placeholder": "Enter name"},
    ///         {"type": "select", "title": "Color", "key": "color", "options": ["Red", "Blue"]},
    ///         {"type": "confirm", "title": "Continue?", "key": "continue"}
    ///     ]"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(definition.len(), 3);
    /// assert!(matches!(definition.steps()[2].kind(), StepKind::Confirm(_)));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let records: Vec<StepRecord> = serde_json::from_str(json)?;
        Self::new(records.into_iter().map(Step::from).collect())
    }

    /// Get the steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get the step at `index`.
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the number of steps. Never zero.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Flat on-disk form of a step: a type tag plus every field any kind can use.
#[derive(Debug, Deserialize)]
struct StepRecord {
    #[serde(rename = "type")]
    kind: StepType,
    title: String,
    key: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    placeholder: Option<String>,
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    options: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum StepType {
    Input,
    Select,
    Confirm,
    #[serde(rename = "multiselect")]
    MultiSelect,
}

/// Empty strings in step records mean "not set".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl From<StepRecord> for Step {
    fn from(record: StepRecord) -> Self {
        let kind = match record.kind {
            StepType::Input => StepKind::Input(InputStep {
                placeholder: non_empty(record.placeholder),
                default: non_empty(record.default),
            }),
            StepType::Select => StepKind::Select(SelectStep::new(record.options)),
            StepType::Confirm => StepKind::Confirm(ConfirmStep),
            StepType::MultiSelect => StepKind::MultiSelect(MultiSelectStep::new(record.options)),
        };

        let step = Step::new(record.key, record.title, kind);
        match non_empty(record.description) {
            Some(description) => step.with_description(description),
            None => step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(
            WizardDefinition::new(Vec::new()),
            Err(DefinitionError::Empty)
        ));
        assert!(matches!(
            WizardDefinition::from_json("[]"),
            Err(DefinitionError::Empty)
        ));
    }

    #[test]
    fn rejects_empty_key() {
        let steps = vec![Step::input("name", "Name"), Step::confirm("", "Sure?")];
        assert!(matches!(
            WizardDefinition::new(steps),
            Err(DefinitionError::EmptyKey { index: 1 })
        ));
    }

    #[test]
    fn rejects_select_without_options() {
        let json = r#"[{"type": "multiselect", "title": "Toppings", "key": "toppings"}]"#;
        match WizardDefinition::from_json(json) {
            Err(DefinitionError::NoOptions { key }) => assert_eq!(key, "toppings"),
            other => panic!("expected NoOptions, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_type() {
        let json = r#"[{"type": "slider", "title": "Volume", "key": "volume"}]"#;
        assert!(matches!(
            WizardDefinition::from_json(json),
            Err(DefinitionError::Parse(_))
        ));
    }

    #[test]
    fn duplicate_keys_are_accepted() {
        let steps = vec![Step::input("name", "First"), Step::input("name", "Second")];
        assert_eq!(WizardDefinition::new(steps).unwrap().len(), 2);
    }

    #[test]
    fn empty_strings_are_unset() {
        let json = r#"[{"type": "input", "title": "Name", "key": "name",
                        "description": "", "placeholder": "", "default": ""}]"#;
        let definition = WizardDefinition::from_json(json).unwrap();
        let step = &definition.steps()[0];
        assert_eq!(step.description(), None);
        assert_eq!(step.kind(), &StepKind::Input(InputStep::default()));
    }

    #[test]
    fn ignores_fields_for_other_kinds() {
        let json = r#"[{"type": "confirm", "title": "Ok?", "key": "ok",
                        "default": "yes", "options": ["a"], "description": "really"}]"#;
        let definition = WizardDefinition::from_json(json).unwrap();
        let step = &definition.steps()[0];
        assert_eq!(step.kind(), &StepKind::Confirm(ConfirmStep));
        assert_eq!(step.description(), Some("really"));
    }
}
