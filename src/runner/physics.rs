//! Player physics: single-impulse jump, constant gravity, ground-only duck.

use super::types::Player;
use crate::core::constants::GROUND_Y;

impl Player {
    /// Start a jump. Ignored while airborne. Jumping cancels a duck.
    pub fn jump(&mut self, impulse: f64) {
        if !self.on_ground {
            return;
        }
        self.velocity = impulse;
        self.on_ground = false;
        self.ducking = false;
    }

    /// Apply the held state of the duck key. Ducking only takes effect on
    /// the ground; in the air the player keeps its running silhouette.
    pub fn set_ducking(&mut self, held: bool) {
        self.ducking = held && self.on_ground;
    }

    /// Advance one step of `dt` seconds: position first, then gravity.
    pub fn update(&mut self, dt: f64, gravity: f64) {
        if self.on_ground {
            return;
        }

        self.y += self.velocity * dt;
        self.velocity += gravity * dt;

        // Ceiling
        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity = self.velocity.max(0.0);
        }

        // Landing
        if self.y >= GROUND_Y {
            self.y = GROUND_Y;
            self.velocity = 0.0;
            self.on_ground = true;
        }
    }
}
