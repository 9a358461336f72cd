//! Gameplay tuning values.
//!
//! Everything here is a feel knob rather than a contract: the qualitative
//! behavior (single jump, speed ramp, denser spawns) holds for any sane set.

/// Numeric parameters for one runner session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Downward acceleration in px/s².
    pub gravity: f64,
    /// Jump velocity in px/s (negative = upward, sets velocity directly).
    pub jump_impulse: f64,
    /// Scroll speed at score 0, px/s.
    pub base_speed: f64,
    /// Speed gained per `score_threshold` points, px/s.
    pub speed_increment: f64,
    /// Score points per speed step. Zero disables the ramp.
    pub score_threshold: u32,
    /// Speed ceiling, px/s.
    pub max_speed: f64,
    /// Minimum scroll distance between spawns, px.
    pub min_spawn_gap: f64,
    /// Maximum scroll distance between spawns, px.
    pub max_spawn_gap: f64,
    /// Score points earned per second of running.
    pub score_rate: f64,
    /// Pterodactyls only appear once the score is above this.
    pub flying_unlock_score: u32,
    /// Chance that an eligible spawn is a pterodactyl.
    pub flying_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 2000.0,
            jump_impulse: -640.0,
            base_speed: 360.0,
            speed_increment: 30.0,
            score_threshold: 100,
            max_speed: 780.0,
            min_spawn_gap: 320.0,
            max_spawn_gap: 640.0,
            score_rate: 10.0,
            flying_unlock_score: 200,
            flying_chance: 0.18,
        }
    }
}
