//! Background clouds. Pure decoration: they drift slower than the ground
//! for a hint of parallax and never take part in collisions.

use super::types::{Cloud, RunnerGame};
use crate::core::constants::{CLOUD_COUNT, CLOUD_SPEED, CLOUD_Y_RANGE, WORLD_WIDTH};
use rand::Rng;

/// A new cloud somewhere past the right edge.
pub fn random_cloud<R: Rng>(rng: &mut R) -> Cloud {
    Cloud {
        x: WORLD_WIDTH + rng.gen_range(0.0..=280.0),
        y: rng.gen_range(CLOUD_Y_RANGE.0..=CLOUD_Y_RANGE.1),
        width: rng.gen_range(40.0..=72.0),
        height: rng.gen_range(18.0..=26.0),
        speed: CLOUD_SPEED * rng.gen_range(0.8..=1.2),
    }
}

/// Scatter a fresh set of clouds across the whole sky.
pub fn reset_clouds<R: Rng>(game: &mut RunnerGame, rng: &mut R) {
    game.clouds.clear();
    for _ in 0..CLOUD_COUNT {
        let mut cloud = random_cloud(rng);
        cloud.x = rng.gen_range(0.0..WORLD_WIDTH);
        game.clouds.push(cloud);
    }
}

/// Drift clouds left and keep the sky topped up.
pub fn update_clouds<R: Rng>(game: &mut RunnerGame, dt: f64, rng: &mut R) {
    for cloud in &mut game.clouds {
        cloud.x -= cloud.speed * dt;
    }
    game.clouds.retain(|c| c.x + c.width >= 0.0);
    while game.clouds.len() < CLOUD_COUNT {
        game.clouds.push(random_cloud(rng));
    }
}
