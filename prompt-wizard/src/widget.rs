use crate::{AnswerValue, Step, StepKind, WizardEvent};

/// In-progress answer for the active step.
///
/// The variant always matches the kind of the step it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Text typed so far.
    Input { buffer: String },
    /// Index of the highlighted option.
    Select { cursor: usize },
    /// `true` when "Yes" is selected.
    Confirm { yes: bool },
    /// Highlighted option and per-option checked state.
    MultiSelect { cursor: usize, checked: Vec<bool> },
}

impl Widget {
    /// Initial widget for a step that has no stored answer.
    pub fn fresh(step: &Step) -> Self {
        match step.kind() {
            StepKind::Input(input) => Self::Input {
                buffer: input.default.clone().unwrap_or_default(),
            },
            StepKind::Select(_) => Self::Select { cursor: 0 },
            StepKind::Confirm(_) => Self::Confirm { yes: false },
            StepKind::MultiSelect(multi) => Self::MultiSelect {
                cursor: 0,
                checked: vec![false; multi.options.len()],
            },
        }
    }

    /// Widget for entering `step`, rebuilt from `stored` if it was answered before.
    ///
    /// A stored select answer that is no longer among the options keeps the
    /// fresh cursor. A stored value of the wrong type is ignored.
    pub fn restore(step: &Step, stored: Option<&AnswerValue>) -> Self {
        let mut widget = Self::fresh(step);
        let Some(stored) = stored else {
            return widget;
        };

        match (&mut widget, step.kind(), stored) {
            (Self::Input { buffer }, _, AnswerValue::Text(text)) => {
                buffer.clone_from(text);
            }
            (Self::Select { cursor }, StepKind::Select(select), AnswerValue::Text(text)) => {
                if let Some(idx) = select.options.iter().position(|opt| opt == text) {
                    *cursor = idx;
                } else {
                    log::debug!(
                        "stored answer '{text}' for '{}' is no longer an option",
                        step.key()
                    );
                }
            }
            (Self::Confirm { yes }, _, AnswerValue::Flag(flag)) => {
                *yes = *flag;
            }
            (
                Self::MultiSelect { checked, .. },
                StepKind::MultiSelect(multi),
                AnswerValue::TextList(list),
            ) => {
                for (slot, opt) in checked.iter_mut().zip(&multi.options) {
                    *slot = list.contains(opt);
                }
            }
            _ => {
                log::warn!(
                    "ignoring stored {} answer for {} step '{}'",
                    stored.type_name(),
                    step.kind().name(),
                    step.key()
                );
            }
        }

        widget
    }

    /// Apply an editing event. Returns `true` if the event applies to this
    /// widget kind (even if it left the state unchanged).
    ///
    /// `option_count` is the number of options of the step; it is only read
    /// by select widgets.
    pub(crate) fn edit(&mut self, event: WizardEvent, option_count: usize) -> bool {
        match (self, event) {
            (Self::Input { buffer }, WizardEvent::TextEdit(c)) => {
                buffer.push(c);
            }
            (Self::Input { buffer }, WizardEvent::Backspace) => {
                buffer.pop();
            }
            (Self::Select { cursor }, WizardEvent::MoveUp)
            | (Self::MultiSelect { cursor, .. }, WizardEvent::MoveUp) => {
                *cursor = cursor.saturating_sub(1);
            }
            (Self::Select { cursor }, WizardEvent::MoveDown)
            | (Self::MultiSelect { cursor, .. }, WizardEvent::MoveDown) => {
                if *cursor + 1 < option_count {
                    *cursor += 1;
                }
            }
            (Self::Confirm { yes }, WizardEvent::ToggleConfirmLeft) => {
                *yes = true;
            }
            (Self::Confirm { yes }, WizardEvent::ToggleConfirmRight) => {
                *yes = false;
            }
            (Self::MultiSelect { cursor, checked }, WizardEvent::ToggleCurrentOption) => {
                if let Some(slot) = checked.get_mut(*cursor) {
                    *slot = !*slot;
                }
            }
            (Self::MultiSelect { checked, .. }, WizardEvent::ToggleSelectAll) => {
                let all_selected = checked.iter().all(|&c| c);
                checked.fill(!all_selected);
            }
            _ => return false,
        }
        true
    }

    /// The value committing this widget would store.
    pub fn value(&self, step: &Step) -> AnswerValue {
        match (self, step.kind()) {
            (Self::Input { buffer }, StepKind::Input(input)) => {
                if buffer.is_empty() {
                    AnswerValue::Text(input.default.clone().unwrap_or_default())
                } else {
                    AnswerValue::Text(buffer.clone())
                }
            }
            (Self::Select { cursor }, StepKind::Select(select)) => {
                AnswerValue::Text(select.options.get(*cursor).cloned().unwrap_or_default())
            }
            (Self::Confirm { yes }, _) => AnswerValue::Flag(*yes),
            (Self::MultiSelect { checked, .. }, StepKind::MultiSelect(multi)) => {
                AnswerValue::TextList(
                    multi
                        .options
                        .iter()
                        .zip(checked)
                        .filter(|&(_, &on)| on)
                        .map(|(opt, _)| opt.clone())
                        .collect(),
                )
            }
            (Self::Input { buffer }, _) => AnswerValue::Text(buffer.clone()),
            (Self::Select { .. }, _) => AnswerValue::Text(String::new()),
            (Self::MultiSelect { .. }, _) => AnswerValue::TextList(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Step {
        Step::multi_select("colors", "Colors", ["Red", "Blue", "Green"])
    }

    #[test]
    fn fresh_defaults() {
        let input = Step::input("name", "Name").with_default("guest");
        assert_eq!(
            Widget::fresh(&input),
            Widget::Input {
                buffer: "guest".to_string()
            }
        );
        assert_eq!(
            Widget::fresh(&Step::confirm("ok", "Ok?")),
            Widget::Confirm { yes: false }
        );
        assert_eq!(
            Widget::fresh(&colors()),
            Widget::MultiSelect {
                cursor: 0,
                checked: vec![false; 3]
            }
        );
    }

    #[test]
    fn multi_select_keeps_option_order() {
        let step = colors();
        let mut widget = Widget::fresh(&step);
        widget.edit(WizardEvent::MoveDown, 3);
        widget.edit(WizardEvent::MoveDown, 3);
        widget.edit(WizardEvent::ToggleCurrentOption, 3);
        widget.edit(WizardEvent::MoveUp, 3);
        widget.edit(WizardEvent::MoveUp, 3);
        widget.edit(WizardEvent::ToggleCurrentOption, 3);

        assert_eq!(widget.value(&step), AnswerValue::from(vec!["Red", "Green"]));
    }

    #[test]
    fn select_all_twice_restores_selection() {
        let step = colors();
        let mut widget = Widget::fresh(&step);
        widget.edit(WizardEvent::MoveDown, 3);
        widget.edit(WizardEvent::ToggleCurrentOption, 3);
        let before = widget.clone();

        widget.edit(WizardEvent::ToggleSelectAll, 3);
        assert_eq!(
            widget.value(&step),
            AnswerValue::from(vec!["Red", "Blue", "Green"])
        );
        widget.edit(WizardEvent::ToggleSelectAll, 3);
        assert_eq!(
            widget.value(&step),
            AnswerValue::TextList(Vec::new()),
            "all selected, so the toggle clears everything"
        );

        // From a partial selection: select all, then clear all.
        let mut partial = before.clone();
        partial.edit(WizardEvent::ToggleSelectAll, 3);
        partial.edit(WizardEvent::ToggleSelectAll, 3);
        assert_ne!(partial, before);

        // From a full selection the toggle is its own inverse.
        let mut full = before;
        full.edit(WizardEvent::ToggleSelectAll, 3);
        let snapshot = full.clone();
        full.edit(WizardEvent::ToggleSelectAll, 3);
        full.edit(WizardEvent::ToggleSelectAll, 3);
        assert_eq!(full, snapshot);
    }

    #[test]
    fn cursor_saturates() {
        let mut widget = Widget::Select { cursor: 0 };
        widget.edit(WizardEvent::MoveUp, 2);
        assert_eq!(widget, Widget::Select { cursor: 0 });
        widget.edit(WizardEvent::MoveDown, 2);
        widget.edit(WizardEvent::MoveDown, 2);
        assert_eq!(widget, Widget::Select { cursor: 1 });
    }

    #[test]
    fn confirm_sets_rather_than_toggles() {
        let mut widget = Widget::Confirm { yes: false };
        widget.edit(WizardEvent::ToggleConfirmLeft, 0);
        widget.edit(WizardEvent::ToggleConfirmLeft, 0);
        assert_eq!(widget, Widget::Confirm { yes: true });
        widget.edit(WizardEvent::ToggleConfirmRight, 0);
        assert_eq!(widget, Widget::Confirm { yes: false });
    }

    #[test]
    fn backspace_removes_whole_chars() {
        let mut widget = Widget::Input {
            buffer: "né".to_string(),
        };
        widget.edit(WizardEvent::Backspace, 0);
        assert_eq!(
            widget,
            Widget::Input {
                buffer: "n".to_string()
            }
        );
        widget.edit(WizardEvent::Backspace, 0);
        widget.edit(WizardEvent::Backspace, 0);
        assert_eq!(
            widget,
            Widget::Input {
                buffer: String::new()
            }
        );
    }

    #[test]
    fn wrong_kind_events_are_ignored() {
        let mut widget = Widget::Input {
            buffer: "abc".to_string(),
        };
        for event in [
            WizardEvent::MoveUp,
            WizardEvent::MoveDown,
            WizardEvent::ToggleConfirmLeft,
            WizardEvent::ToggleCurrentOption,
            WizardEvent::ToggleSelectAll,
        ] {
            assert!(!widget.edit(event, 3));
        }
        assert_eq!(
            widget,
            Widget::Input {
                buffer: "abc".to_string()
            }
        );
    }

    #[test]
    fn restore_from_stored_answers() {
        let step = colors();
        let stored = AnswerValue::from(vec!["Green", "Red"]);
        assert_eq!(
            Widget::restore(&step, Some(&stored)),
            Widget::MultiSelect {
                cursor: 0,
                checked: vec![true, false, true]
            }
        );

        let select = Step::select("color", "Color", ["Red", "Blue"]);
        assert_eq!(
            Widget::restore(&select, Some(&AnswerValue::from("Blue"))),
            Widget::Select { cursor: 1 }
        );
        assert_eq!(
            Widget::restore(&select, Some(&AnswerValue::from("Purple"))),
            Widget::Select { cursor: 0 }
        );

        let confirm = Step::confirm("ok", "Ok?");
        assert_eq!(
            Widget::restore(&confirm, Some(&AnswerValue::from(true))),
            Widget::Confirm { yes: true }
        );
        assert_eq!(
            Widget::restore(&confirm, Some(&AnswerValue::from("yes"))),
            Widget::Confirm { yes: false }
        );
    }

    #[test]
    fn empty_input_falls_back_to_default() {
        let step = Step::input("user", "User").with_default("guest");
        let widget = Widget::Input {
            buffer: String::new(),
        };
        assert_eq!(widget.value(&step), AnswerValue::from("guest"));

        let plain = Step::input("user", "User");
        assert_eq!(widget.value(&plain), AnswerValue::from(""));
    }
}
