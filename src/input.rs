//! Input handling for the runner screen.
//!
//! Turns crossterm key events into game commands. Terminals normally report
//! key presses only, so a held Down key is emulated with a short latch that
//! the first press opens for longer than the keyboard's repeat delay and
//! every auto-repeat refreshes. When the terminal supports the keyboard
//! enhancement protocol, real release events end the duck instead.

use crate::core::constants::{DUCK_FIRST_LATCH_MS, DUCK_LATCH_MS};
use crate::runner::{process_input, RunnerGame, RunnerInput};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use std::time::{Duration, Instant};

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Leave the game loop and exit.
    Quit,
}

/// Game command decoded from a single key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Jump,
    DuckPress,
    /// Auto-repeat of a held Down key.
    DuckRepeat,
    DuckRelease,
    Restart,
    Quit,
    /// A key with no binding.
    Other,
    /// An event that should not reach the game at all (e.g. stray releases).
    Ignore,
}

/// Map a key event to a command.
///
/// Jump and duck honour auto-repeat. Restart and quit only fire on the
/// initial press.
pub fn map_key(key: &KeyEvent) -> KeyCommand {
    match key.kind {
        KeyEventKind::Release => match key.code {
            KeyCode::Down => KeyCommand::DuckRelease,
            _ => KeyCommand::Ignore,
        },
        KeyEventKind::Repeat => match key.code {
            KeyCode::Down => KeyCommand::DuckRepeat,
            KeyCode::Char(' ') | KeyCode::Up => KeyCommand::Jump,
            _ => KeyCommand::Ignore,
        },
        KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            {
                return KeyCommand::Quit;
            }
            match key.code {
                KeyCode::Char(' ') | KeyCode::Up => KeyCommand::Jump,
                KeyCode::Down => KeyCommand::DuckPress,
                KeyCode::Char('r') | KeyCode::Char('R') => KeyCommand::Restart,
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyCommand::Quit,
                _ => KeyCommand::Other,
            }
        }
    }
}

/// Held state of the duck key.
#[derive(Debug, Clone)]
pub struct DuckLatch {
    /// The terminal reports key releases, so no timeout is needed.
    release_events: bool,
    pressed: bool,
    latched_until: Option<Instant>,
}

impl DuckLatch {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            pressed: false,
            latched_until: None,
        }
    }

    /// Initial press. Holds long enough for the first auto-repeat to arrive.
    pub fn press(&mut self, now: Instant) {
        self.hold(now, DUCK_FIRST_LATCH_MS);
    }

    /// Auto-repeat while the key stays down.
    pub fn repeat(&mut self, now: Instant) {
        self.hold(now, DUCK_LATCH_MS);
    }

    fn hold(&mut self, now: Instant, window_ms: u64) {
        if self.release_events {
            self.pressed = true;
            return;
        }
        let until = now + Duration::from_millis(window_ms);
        // A repeat never shortens a longer hold from the initial press
        self.latched_until = Some(self.latched_until.map_or(until, |prev| prev.max(until)));
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.latched_until = None;
    }

    pub fn is_held(&self, now: Instant) -> bool {
        self.pressed || self.latched_until.is_some_and(|until| now < until)
    }
}

/// Routes key events into a `RunnerGame`.
#[derive(Debug, Clone)]
pub struct InputHandler {
    duck: DuckLatch,
}

impl InputHandler {
    pub fn new(release_events: bool) -> Self {
        Self {
            duck: DuckLatch::new(release_events),
        }
    }

    /// Handle one key event at time `now`.
    pub fn handle_key<R: Rng>(
        &mut self,
        key: KeyEvent,
        game: &mut RunnerGame,
        now: Instant,
        rng: &mut R,
    ) -> InputResult {
        match map_key(&key) {
            KeyCommand::Quit => return InputResult::Quit,
            KeyCommand::Jump => process_input(game, RunnerInput::Jump, rng),
            KeyCommand::DuckPress => self.duck.press(now),
            KeyCommand::DuckRepeat => self.duck.repeat(now),
            KeyCommand::DuckRelease => self.duck.release(),
            KeyCommand::Restart => {
                if game.is_game_over() {
                    self.duck.release();
                }
                process_input(game, RunnerInput::Restart, rng);
            }
            KeyCommand::Other => process_input(game, RunnerInput::Other, rng),
            KeyCommand::Ignore => {}
        }
        self.sync_held_keys(game, now, rng);
        InputResult::Continue
    }

    /// Push the current held-key state into the game. Call once per frame
    /// so an expiring latch releases the duck even without new events.
    pub fn sync_held_keys<R: Rng>(&self, game: &mut RunnerGame, now: Instant, rng: &mut R) {
        process_input(game, RunnerInput::Duck(self.duck.is_held(now)), rng);
    }

    pub fn duck_held(&self, now: Instant) -> bool {
        self.duck.is_held(now)
    }
}
