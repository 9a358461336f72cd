//! Terminal session: raw mode, alternate screen and key release reporting.
//!
//! Setup is recorded one step at a time and undone in reverse, including when
//! a later step fails or the program panics.

use anyhow::{Context, Result};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

/// One completed setup step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    RawMode,
    AlternateScreen,
    KeyReleaseEvents,
}

/// Undoes completed setup steps in reverse order when dropped.
#[derive(Debug, Default)]
pub struct RestoreGuard {
    steps: Vec<SetupStep>,
}

impl RestoreGuard {
    pub fn record(&mut self, step: SetupStep) {
        self.steps.push(step);
    }

    pub fn has(&self, step: SetupStep) -> bool {
        self.steps.contains(&step)
    }

    /// Steps to undo, most recent first.
    pub fn undo_order(&self) -> Vec<SetupStep> {
        self.steps.iter().rev().copied().collect()
    }
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        restore(&self.undo_order());
    }
}

/// Best-effort undo; errors are ignored.
fn restore(steps: &[SetupStep]) {
    let mut stdout = io::stdout();
    for step in steps {
        match step {
            SetupStep::KeyReleaseEvents => {
                let _ = execute!(stdout, PopKeyboardEnhancementFlags);
            }
            SetupStep::AlternateScreen => {
                let _ = execute!(stdout, LeaveAlternateScreen, cursor::Show);
            }
            SetupStep::RawMode => {
                let _ = disable_raw_mode();
            }
        }
    }
}

/// Restore the terminal before the previous panic hook prints, so the
/// message lands on the normal screen instead of vanishing with the
/// alternate one.
fn install_panic_hook(steps: Vec<SetupStep>) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore(&steps);
        previous(info);
    }));
}

/// The running TUI. Dropping it hands the terminal back in its original state.
pub struct TerminalSession {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Key release events are reported (keyboard enhancement pushed).
    pub release_events: bool,
    // Declared last so the terminal is dropped before the restore runs
    _guard: RestoreGuard,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        let mut guard = RestoreGuard::default();

        enable_raw_mode().context("failed to enable raw mode")?;
        guard.record(SetupStep::RawMode);

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .context("failed to enter alternate screen")?;
        guard.record(SetupStep::AlternateScreen);

        let release_events = supports_keyboard_enhancement().unwrap_or(false);
        tracing::debug!(release_events, "keyboard enhancement probe");
        if release_events {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("failed to enable key release reporting")?;
            guard.record(SetupStep::KeyReleaseEvents);
        }

        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")?;

        install_panic_hook(guard.undo_order());
        Ok(Self {
            terminal,
            release_events: guard.has(SetupStep::KeyReleaseEvents),
            _guard: guard,
        })
    }
}
