pub mod game_common;
pub mod runner_scene;

use crate::runner::RunnerGame;
use ratatui::Frame;

/// Main UI drawing function: the runner scene fills the whole terminal.
pub fn draw_ui(frame: &mut Frame, game: &RunnerGame) {
    let size = frame.size();
    runner_scene::render_runner_scene(frame, size, game);
}
