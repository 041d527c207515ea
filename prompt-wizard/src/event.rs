/// A discrete input to the wizard engine.
///
/// Which raw key produces which event is up to the backend. Events that make
/// no sense for the current step kind are ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardEvent {
    /// Append a character to the input buffer (input steps).
    TextEdit(char),
    /// Remove the last character of the input buffer (input steps).
    Backspace,
    /// Move the cursor one option up (select and multi-select steps).
    MoveUp,
    /// Move the cursor one option down (select and multi-select steps).
    MoveDown,
    /// Set the confirmation to "Yes" (confirm steps).
    ToggleConfirmLeft,
    /// Set the confirmation to "No" (confirm steps).
    ToggleConfirmRight,
    /// Flip the option under the cursor (multi-select steps).
    ToggleCurrentOption,
    /// Select every option, or clear them all if all are selected (multi-select steps).
    ToggleSelectAll,
    /// Store the current answer and advance.
    Commit,
    /// Return to the previous step.
    GoBack,
    /// Abort the wizard.
    Quit,
}

impl WizardEvent {
    /// Every event kind, with a placeholder character for `TextEdit`.
    pub const ALL: [WizardEvent; 11] = [
        WizardEvent::TextEdit('x'),
        WizardEvent::Backspace,
        WizardEvent::MoveUp,
        WizardEvent::MoveDown,
        WizardEvent::ToggleConfirmLeft,
        WizardEvent::ToggleConfirmRight,
        WizardEvent::ToggleCurrentOption,
        WizardEvent::ToggleSelectAll,
        WizardEvent::Commit,
        WizardEvent::GoBack,
        WizardEvent::Quit,
    ];
}
