//! Rendering contract for the active step.
//!
//! [`StepView`] is a plain snapshot of everything a backend needs to draw the
//! current step. Building it has no side effects; backends decide how to
//! style and place each part. Its `Display` impl is the canonical plain-text
//! rendering.

use std::fmt;

use crate::{Answers, StepKind, Widget, WizardDefinition};

/// How many earlier answers are shown above the current step.
pub const HISTORY_LEN: usize = 2;

pub const INPUT_HINT: &str = "Type your answer, Enter to continue";
pub const SELECT_HINT: &str = "↑↓ to navigate, Enter to select";
pub const CONFIRM_HINT: &str = "←→ to switch, Enter to confirm";
pub const MULTI_SELECT_HINT: &str =
    "↑↓ to navigate, Space to toggle, A to select all/none, Enter when done";

/// Back hint for input steps, where letters are typed into the buffer.
pub const INPUT_BACK_HINT: &str = "Esc to go back";
pub const BACK_HINT: &str = "B to go back";

/// An earlier step and its formatted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub title: String,
    pub answer: String,
}

/// The widget part of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// `text` is the buffer, or the placeholder when `is_placeholder` is set.
    Input { text: String, is_placeholder: bool },
    Select { options: Vec<String>, cursor: usize },
    Confirm { yes: bool },
    MultiSelect {
        options: Vec<(String, bool)>,
        cursor: usize,
    },
}

/// Snapshot of the active step, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    /// 1-based position of the active step.
    pub position: usize,
    pub total: usize,
    /// Oldest first.
    pub history: Vec<HistoryEntry>,
    pub title: String,
    pub description: Option<String>,
    pub body: Body,
    pub hints: String,
}

impl StepView {
    /// Build the view for step `index` with the given widget.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn build(
        definition: &WizardDefinition,
        index: usize,
        widget: &Widget,
        answers: &Answers,
    ) -> Option<Self> {
        let step = definition.step(index)?;

        let history = definition.steps()[index.saturating_sub(HISTORY_LEN)..index]
            .iter()
            .filter_map(|prev| {
                answers.get(prev.key()).map(|answer| HistoryEntry {
                    title: prev.title().to_string(),
                    answer: answer.to_string(),
                })
            })
            .collect();

        let body = match (widget, step.kind()) {
            (Widget::Input { buffer }, StepKind::Input(input)) if buffer.is_empty() => {
                Body::Input {
                    text: input.placeholder.clone().unwrap_or_default(),
                    is_placeholder: true,
                }
            }
            (Widget::Input { buffer }, _) => Body::Input {
                text: buffer.clone(),
                is_placeholder: false,
            },
            (Widget::Select { cursor }, _) => Body::Select {
                options: step.options().unwrap_or_default().to_vec(),
                cursor: *cursor,
            },
            (Widget::Confirm { yes }, _) => Body::Confirm { yes: *yes },
            (Widget::MultiSelect { cursor, checked }, _) => Body::MultiSelect {
                options: step
                    .options()
                    .unwrap_or_default()
                    .iter()
                    .zip(checked)
                    .map(|(opt, &on)| (opt.clone(), on))
                    .collect(),
                cursor: *cursor,
            },
        };

        let (hint, back_hint) = match step.kind() {
            StepKind::Input(_) => (INPUT_HINT, INPUT_BACK_HINT),
            StepKind::Select(_) => (SELECT_HINT, BACK_HINT),
            StepKind::Confirm(_) => (CONFIRM_HINT, BACK_HINT),
            StepKind::MultiSelect(_) => (MULTI_SELECT_HINT, BACK_HINT),
        };
        let hints = if index > 0 {
            format!("{hint}, {back_hint}")
        } else {
            hint.to_string()
        };

        Some(Self {
            position: index + 1,
            total: definition.len(),
            history,
            title: step.title().to_string(),
            description: step.description().map(str::to_string),
            body,
            hints,
        })
    }

    /// `Step N of M`.
    pub fn position_label(&self) -> String {
        format!("Step {} of {}", self.position, self.total)
    }

    /// Title with the description appended in parentheses.
    pub fn heading(&self) -> String {
        match &self.description {
            Some(description) => format!("{} ({})", self.title, description),
            None => self.title.clone(),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Input { text, .. } => writeln!(f, "[ {text} ]"),
            Body::Select { options, cursor } => {
                for (i, opt) in options.iter().enumerate() {
                    let marker = if i == *cursor { '>' } else { ' ' };
                    writeln!(f, "{marker} {opt}")?;
                }
                Ok(())
            }
            Body::Confirm { yes: true } => writeln!(f, "[Yes]  No"),
            Body::Confirm { yes: false } => writeln!(f, " Yes  [No]"),
            Body::MultiSelect { options, cursor } => {
                for (i, (opt, on)) in options.iter().enumerate() {
                    let marker = if i == *cursor { "> " } else { "  " };
                    let check = if *on { '✓' } else { '•' };
                    writeln!(f, "{marker}{check} {opt}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for StepView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.position_label())?;
        writeln!(f)?;

        if !self.history.is_empty() {
            writeln!(f, "Previous:")?;
            for entry in &self.history {
                writeln!(f, "{}: {}", entry.title, entry.answer)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", self.heading())?;
        writeln!(f)?;
        write!(f, "{}", self.body)?;
        writeln!(f)?;
        writeln!(f, "{}", self.hints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Step, Wizard, WizardEvent};

    fn definition() -> WizardDefinition {
        WizardDefinition::new(vec![
            Step::input("name", "Name").with_placeholder("Enter name"),
            Step::select("color", "Color", ["Red", "Blue"]).with_description("pick one"),
            Step::confirm("proceed", "Proceed?"),
            Step::multi_select("extras", "Extras", ["Cheese", "Ham", "Olives"]),
        ])
        .unwrap()
    }

    #[test]
    fn first_step_shows_placeholder() {
        let definition = definition();
        let wizard = Wizard::new(&definition);
        let view = wizard.view().unwrap();

        assert_eq!(
            view.to_string(),
            "Step 1 of 4\n\
             \n\
             Name\n\
             \n\
             [ Enter name ]\n\
             \n\
             Type your answer, Enter to continue\n"
        );
        assert_eq!(
            view.body,
            Body::Input {
                text: "Enter name".to_string(),
                is_placeholder: true
            }
        );
    }

    #[test]
    fn select_step_with_history_and_back_hint() {
        let definition = definition();
        let mut wizard = Wizard::new(&definition);
        for c in "Ada".chars() {
            wizard.apply(WizardEvent::TextEdit(c));
        }
        wizard.apply(WizardEvent::Commit);

        assert_eq!(
            wizard.view().unwrap().to_string(),
            "Step 2 of 4\n\
             \n\
             Previous:\n\
             Name: Ada\n\
             \n\
             Color (pick one)\n\
             \n\
             > Red\n\
             \x20 Blue\n\
             \n\
             ↑↓ to navigate, Enter to select, B to go back\n"
        );
    }

    #[test]
    fn history_is_capped_at_two_entries() {
        let definition = definition();
        let mut wizard = Wizard::new(&definition);
        wizard.apply(WizardEvent::Commit);
        wizard.apply(WizardEvent::Commit);
        wizard.apply(WizardEvent::ToggleConfirmLeft);
        wizard.apply(WizardEvent::Commit);

        let view = wizard.view().unwrap();
        assert_eq!(
            view.history,
            vec![
                HistoryEntry {
                    title: "Color".to_string(),
                    answer: "Red".to_string()
                },
                HistoryEntry {
                    title: "Proceed?".to_string(),
                    answer: "Yes".to_string()
                },
            ]
        );
        assert_eq!(
            view.hints,
            format!("{MULTI_SELECT_HINT}, {BACK_HINT}")
        );
    }

    #[test]
    fn history_skips_unanswered_steps() {
        let definition = definition();
        let mut wizard = Wizard::new(&definition);
        wizard.apply(WizardEvent::Commit);
        wizard.apply(WizardEvent::GoBack);
        let view = wizard.view().unwrap();
        assert!(view.history.is_empty());
        assert_eq!(view.hints, INPUT_HINT);
    }

    #[test]
    fn confirm_and_checklist_bodies() {
        let definition = definition();
        let mut wizard = Wizard::new(&definition);
        wizard.apply(WizardEvent::Commit);
        wizard.apply(WizardEvent::Commit);
        assert_eq!(wizard.view().unwrap().body.to_string(), " Yes  [No]\n");
        wizard.apply(WizardEvent::ToggleConfirmLeft);
        assert_eq!(wizard.view().unwrap().body.to_string(), "[Yes]  No\n");
        wizard.apply(WizardEvent::Commit);

        wizard.apply(WizardEvent::MoveDown);
        wizard.apply(WizardEvent::ToggleCurrentOption);
        assert_eq!(
            wizard.view().unwrap().body.to_string(),
            "  • Cheese\n> ✓ Ham\n  • Olives\n"
        );
    }

    #[test]
    fn empty_multi_select_answer_is_none() {
        let definition = WizardDefinition::new(vec![
            Step::multi_select("extras", "Extras", ["Cheese"]),
            Step::confirm("ok", "Ok?"),
        ])
        .unwrap();
        let mut wizard = Wizard::new(&definition);
        wizard.apply(WizardEvent::Commit);
        assert_eq!(wizard.view().unwrap().history[0].answer, "(none)");
    }
}
