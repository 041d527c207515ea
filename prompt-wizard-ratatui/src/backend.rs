//! Ratatui backend implementation for the WizardBackend trait.
//!
//! Runs the wizard engine against real key presses and redraws the active
//! step after every event.

use std::io::{self, IsTerminal, Stderr};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use prompt_wizard::{Outcome, Wizard, WizardBackend, WizardDefinition};
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use thiserror::Error;

use crate::{keys, ui};

type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Error type for the Ratatui backend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub muted: Color,
    pub yes: Color,
    pub no: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            muted: Color::DarkGray,
            yes: Color::Green,
            no: Color::Red,
            border: Color::Gray,
        }
    }
}

/// Ratatui-based TUI backend.
///
/// Steps are shown one at a time on the alternate screen of stderr. The
/// terminal is restored before `run` returns, also when it fails.
#[derive(Debug, Clone)]
pub struct RatatuiBackend {
    /// Title shown at the top of the wizard. Hidden when empty.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiBackend {
    /// Create a new Ratatui backend with default settings.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the wizard.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Tui, RatatuiError> {
        let mut stderr = io::stderr();
        if !stderr.is_terminal() {
            return Err(RatatuiError::Terminal(
                "stderr is not a terminal; the wizard needs an interactive terminal".to_string(),
            ));
        }

        enable_raw_mode()?;
        execute!(stderr, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stderr);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(&self, terminal: &mut Tui) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop(
        &self,
        terminal: &mut Tui,
        definition: &WizardDefinition,
    ) -> Result<Outcome, RatatuiError> {
        let mut wizard = Wizard::new(definition);

        while let Some(view) = wizard.view() {
            terminal.draw(|frame| ui::draw(frame, &view, &self.title, &self.theme))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            let Some(step) = wizard.current_step() else {
                break;
            };
            if let Some(wizard_event) = keys::map_key(step.kind(), key) {
                wizard.apply(wizard_event);
            }
        }

        Ok(wizard.into_outcome())
    }
}

impl WizardBackend for RatatuiBackend {
    type Error = RatatuiError;

    fn run(&self, definition: &WizardDefinition) -> Result<Outcome, Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, definition);
        let restored = self.restore_terminal(&mut terminal);

        let outcome = result?;
        restored?;
        log::debug!(
            "terminal wizard finished: {}",
            if outcome.is_aborted() { "aborted" } else { "completed" }
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_creation() {
        let _backend = RatatuiBackend::new();
        let with_title = RatatuiBackend::new().with_title("Test");
        assert_eq!(with_title.title, "Test");
        let _with_theme = RatatuiBackend::new().with_theme(Theme::default());
    }

    #[test]
    fn error_types() {
        let err = RatatuiError::Terminal("test error".to_string());
        assert_eq!(err.to_string(), "Terminal error: test error");

        let err = RatatuiError::from(io::Error::other("boom"));
        assert_eq!(err.to_string(), "I/O error: boom");
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.yes, Color::Green);
        assert_eq!(theme.no, Color::Red);
    }
}
