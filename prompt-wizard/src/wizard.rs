use crate::{Answers, Outcome, Step, StepView, Widget, WizardDefinition, WizardEvent};

/// Where a wizard stands after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A step is waiting for input.
    Active,
    /// The last step was committed.
    Complete,
    /// The user quit.
    Aborted,
}

impl Progress {
    /// Check if no further events will be accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

#[derive(Debug, Clone)]
enum State {
    Active(Widget),
    Complete,
    Aborted,
}

/// One run of a wizard over a step list.
///
/// The session starts on the first step and only changes through
/// [`Wizard::apply`]. Once it is complete or aborted, every further event is
/// ignored.
#[derive(Debug, Clone)]
pub struct Wizard<'a> {
    definition: &'a WizardDefinition,
    /// Index of the active step; equals the step count once complete.
    index: usize,
    answers: Answers,
    state: State,
}

impl<'a> Wizard<'a> {
    /// Start a new session on the first step.
    pub fn new(definition: &'a WizardDefinition) -> Self {
        let answers = Answers::new();
        let state = match definition.step(0) {
            Some(first) => State::Active(Widget::restore(first, None)),
            None => State::Complete,
        };

        Self {
            definition,
            index: 0,
            answers,
            state,
        }
    }

    /// Apply one input event and report where the wizard stands.
    pub fn apply(&mut self, event: WizardEvent) -> Progress {
        let definition = self.definition;
        let State::Active(widget) = &mut self.state else {
            log::trace!("ignoring {event:?}: wizard already finished");
            return self.progress();
        };
        let Some(step) = definition.step(self.index) else {
            return self.progress();
        };

        match event {
            WizardEvent::Quit => {
                log::debug!("wizard aborted at step {} ('{}')", self.index, step.key());
                self.state = State::Aborted;
            }
            WizardEvent::Commit => {
                let value = widget.value(step);
                log::debug!("step {} ('{}') committed: {value:?}", self.index, step.key());
                self.answers.insert(step.key(), value);

                match definition.step(self.index + 1) {
                    Some(next) => {
                        self.index += 1;
                        *widget = Widget::restore(next, self.answers.get(next.key()));
                    }
                    None => {
                        self.index = definition.len();
                        self.state = State::Complete;
                        log::debug!("wizard complete with {} answers", self.answers.len());
                    }
                }
            }
            WizardEvent::GoBack => {
                if self.index > 0 {
                    self.index -= 1;
                    if let Some(previous) = definition.step(self.index) {
                        log::debug!("back to step {} ('{}')", self.index, previous.key());
                        *widget = Widget::restore(previous, self.answers.get(previous.key()));
                    }
                }
            }
            edit => {
                let option_count = step.options().map_or(0, <[String]>::len);
                if widget.edit(edit, option_count) {
                    log::trace!("step '{}' widget now {widget:?}", step.key());
                }
            }
        }

        self.progress()
    }

    /// Where the wizard currently stands.
    pub fn progress(&self) -> Progress {
        match self.state {
            State::Active(_) => Progress::Active,
            State::Complete => Progress::Complete,
            State::Aborted => Progress::Aborted,
        }
    }

    /// Index of the active step; the step count once complete.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The active step, if any.
    pub fn current_step(&self) -> Option<&'a Step> {
        match self.state {
            State::Active(_) => self.definition.step(self.index),
            State::Complete | State::Aborted => None,
        }
    }

    /// The in-progress answer of the active step, if any.
    pub fn widget(&self) -> Option<&Widget> {
        match &self.state {
            State::Active(widget) => Some(widget),
            State::Complete | State::Aborted => None,
        }
    }

    /// Answers committed so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// The step list this wizard runs over.
    pub fn definition(&self) -> &'a WizardDefinition {
        self.definition
    }

    /// Render the active step. `None` once the wizard has finished.
    pub fn view(&self) -> Option<StepView> {
        let widget = self.widget()?;
        StepView::build(self.definition, self.index, widget, &self.answers)
    }

    /// Finish the session.
    ///
    /// Only a completed wizard yields answers; an aborted or unfinished one
    /// yields `Outcome::Aborted`.
    pub fn into_outcome(self) -> Outcome {
        match self.state {
            State::Complete => Outcome::Completed(self.answers),
            State::Active(_) | State::Aborted => Outcome::Aborted,
        }
    }
}
