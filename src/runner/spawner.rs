//! Obstacle spawning, scrolling and culling.

use super::types::{Obstacle, ObstacleKind, RunnerGame};
use crate::core::constants::{
    GROUND_Y, PTERODACTYL_HIGH_BOTTOM, PTERODACTYL_LOW_BOTTOM, WORLD_WIDTH,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick the next obstacle kind. Mostly cacti; pterodactyls join in once
/// the score passes the unlock threshold.
pub fn choose_kind<R: Rng>(game: &RunnerGame, rng: &mut R) -> ObstacleKind {
    let flyers_unlocked = game.score > game.tuning.flying_unlock_score;
    if flyers_unlocked && rng.gen::<f64>() < game.tuning.flying_chance {
        return ObstacleKind::Pterodactyl;
    }
    *ObstacleKind::CACTI
        .choose(rng)
        .unwrap_or(&ObstacleKind::SmallCactus)
}

/// Spawn one obstacle at the right edge and rearm the countdown.
pub fn spawn_obstacle<R: Rng>(game: &mut RunnerGame, rng: &mut R) {
    let kind = choose_kind(game, rng);
    let (width, height) = kind.size();

    let bottom = if kind.is_flying() {
        if rng.gen::<bool>() {
            PTERODACTYL_LOW_BOTTOM
        } else {
            PTERODACTYL_HIGH_BOTTOM
        }
    } else {
        GROUND_Y
    };

    let id = game.spawner.next_id;
    game.spawner.next_id += 1;
    game.obstacles.push(Obstacle {
        id,
        kind,
        x: WORLD_WIDTH,
        y: bottom - height,
        width,
        height,
        age: 0.0,
    });
    game.spawner.distance_remaining = game.random_spawn_gap(rng);

    tracing::trace!(id, ?kind, "obstacle spawned");
}

/// Count down the spawn distance by this step's scroll and spawn when due.
/// Returns true if an obstacle was spawned.
pub fn update_spawner<R: Rng>(game: &mut RunnerGame, dt: f64, rng: &mut R) -> bool {
    game.spawner.distance_remaining -= game.game_speed * dt;
    if game.spawner.distance_remaining <= 0.0 {
        spawn_obstacle(game, rng);
        return true;
    }
    false
}

/// Scroll every obstacle left by `game_speed * dt` and drop the ones that
/// have fully left the screen.
pub fn advance_obstacles(game: &mut RunnerGame, dt: f64) {
    let dx = game.game_speed * dt;
    for obstacle in &mut game.obstacles {
        obstacle.x -= dx;
        obstacle.age += dt;
    }
    game.obstacles.retain(|o| !o.is_offscreen());
}
