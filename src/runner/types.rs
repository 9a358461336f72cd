//! Dino Runner data structures.
//!
//! A side-scrolling endless runner: the player jumps over cacti and ducks
//! under pterodactyls while the world speeds up with the score.

use crate::core::constants::*;
use crate::core::{Hitbox, Tuning};
use rand::Rng;

/// Top-level game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    GameOver,
}

/// The runner. `y` is the feet line, so smaller values are higher up.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub y: f64,
    /// Vertical velocity in px/s (negative = upward).
    pub velocity: f64,
    pub on_ground: bool,
    pub ducking: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A player standing on the ground at rest.
    pub fn new() -> Self {
        Self {
            y: GROUND_Y,
            velocity: 0.0,
            on_ground: true,
            ducking: false,
        }
    }

    /// Current hitbox. Ducking trades height for a slightly longer body.
    pub fn hitbox(&self) -> Hitbox {
        let (width, height) = if self.ducking {
            (PLAYER_DUCK_WIDTH, PLAYER_DUCK_HEIGHT)
        } else {
            (PLAYER_RUN_WIDTH, PLAYER_RUN_HEIGHT)
        };
        Hitbox::new(PLAYER_X, self.y - height, width, height)
    }
}

/// Obstacle variants. Cacti stand on the ground; pterodactyls fly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    SmallCactus,
    LargeCactus,
    DoubleCactus,
    TripleCactus,
    Pterodactyl,
}

impl ObstacleKind {
    pub const CACTI: [ObstacleKind; 4] = [
        ObstacleKind::SmallCactus,
        ObstacleKind::LargeCactus,
        ObstacleKind::DoubleCactus,
        ObstacleKind::TripleCactus,
    ];

    /// Width and height in px.
    pub fn size(&self) -> (f64, f64) {
        match self {
            Self::SmallCactus => (18.0, 36.0),
            Self::LargeCactus => (28.0, 56.0),
            Self::DoubleCactus => (38.0, 46.0),
            Self::TripleCactus => (52.0, 44.0),
            Self::Pterodactyl => (46.0, 22.0),
        }
    }

    pub fn is_flying(&self) -> bool {
        matches!(self, Self::Pterodactyl)
    }
}

/// A single obstacle in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Unique within a session; assigned by the spawner.
    pub id: u64,
    pub kind: ObstacleKind,
    /// Left edge, decreasing as the world scrolls.
    pub x: f64,
    /// Top edge. Fixed for the obstacle's lifetime.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Seconds since spawn, drives the wing animation.
    pub age: f64,
}

impl Obstacle {
    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }

    /// True once the right edge has passed the left screen boundary.
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// Wing position for pterodactyls: true while the wings are up.
    pub fn wings_up(&self) -> bool {
        (self.age / PTERODACTYL_FLAP_SECONDS) as u64 % 2 == 0
    }
}

/// Decorative background cloud. Drifts at its own pace and never collides.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
}

/// Distance-based spawn countdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    /// Scroll distance left before the next obstacle appears, px.
    pub distance_remaining: f64,
    /// Id handed to the next spawned obstacle.
    pub next_id: u64,
}

/// One game session: every entity the loop owns.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    pub tuning: Tuning,
    pub state: GameState,

    // -- Entities --
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub spawner: Spawner,

    // -- Input --
    /// Whether the duck key is currently held. Sampled every physics step.
    pub duck_held: bool,

    // -- Scoring --
    pub score: u32,
    /// Fractional score accumulator; `score` is its floor.
    pub score_progress: f64,
    /// Best score this process. Survives restarts, never persisted.
    pub high_score: u32,
    /// Current scroll speed in px/s, derived from `score`.
    pub game_speed: f64,
    pub next_milestone: u32,
    /// Seconds left on the score blink after a milestone.
    pub milestone_flash: f64,
    /// Total scroll distance this run, px. Drives the ground texture.
    pub distance: f64,

    // -- Timing --
    /// Sub-step time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Fixed physics steps since the session (re)started.
    pub tick_count: u64,
}

impl RunnerGame {
    /// Create a running session with the given tuning.
    pub fn new<R: Rng>(tuning: Tuning, rng: &mut R) -> Self {
        let mut game = Self {
            tuning,
            state: GameState::Running,
            player: Player::new(),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            spawner: Spawner {
                distance_remaining: 0.0,
                next_id: 0,
            },
            duck_held: false,
            score: 0,
            score_progress: 0.0,
            high_score: 0,
            game_speed: tuning.base_speed,
            next_milestone: MILESTONE_INTERVAL,
            milestone_flash: 0.0,
            distance: 0.0,
            accumulated_time_ms: 0,
            tick_count: 0,
        };
        game.reset(rng);
        game
    }

    /// Put every per-run entity back to its starting state. Keeps the
    /// high score and tuning.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.state = GameState::Running;
        self.player = Player::new();
        self.obstacles.clear();
        self.spawner.distance_remaining = self.random_spawn_gap(rng);
        self.duck_held = false;
        self.score = 0;
        self.score_progress = 0.0;
        self.game_speed = self.tuning.base_speed;
        self.next_milestone = MILESTONE_INTERVAL;
        self.milestone_flash = 0.0;
        self.distance = 0.0;
        self.accumulated_time_ms = 0;
        self.tick_count = 0;
        crate::runner::scenery::reset_clouds(self, rng);
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Random scroll distance until the next spawn.
    pub fn random_spawn_gap<R: Rng>(&self, rng: &mut R) -> f64 {
        let (min, max) = (self.tuning.min_spawn_gap, self.tuning.max_spawn_gap);
        if max > min {
            rng.gen_range(min..=max)
        } else {
            min
        }
    }
}
