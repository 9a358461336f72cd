//! Score-driven scroll speed.

use crate::core::Tuning;

/// Scroll speed for a given score, in px/s.
///
/// Steps up by `speed_increment` every `score_threshold` points and is
/// capped at `max_speed`. Purely derived: same score, same speed.
pub fn game_speed(score: u32, tuning: &Tuning) -> f64 {
    let steps = score.checked_div(tuning.score_threshold).unwrap_or(0);
    let speed = tuning.base_speed + steps as f64 * tuning.speed_increment;
    speed.min(tuning.max_speed)
}

/// Progress from base to max speed as a whole percentage, for display.
pub fn speed_percent(speed: f64, tuning: &Tuning) -> u32 {
    let span = tuning.max_speed - tuning.base_speed;
    if span <= 0.0 {
        return 100;
    }
    (((speed - tuning.base_speed) / span).clamp(0.0, 1.0) * 100.0).round() as u32
}
