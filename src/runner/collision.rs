//! Player vs. obstacle collision.

use super::types::{Obstacle, RunnerGame};

/// First obstacle overlapping the player's current (duck-adjusted) hitbox.
pub fn find_collision(game: &RunnerGame) -> Option<&Obstacle> {
    let player = game.player.hitbox();
    game.obstacles
        .iter()
        .find(|obstacle| player.intersects(&obstacle.hitbox()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::*;
    use crate::core::Tuning;
    use crate::runner::types::ObstacleKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_game() -> RunnerGame {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        RunnerGame::new(Tuning::default(), &mut rng)
    }

    fn obstacle_at(kind: ObstacleKind, x: f64, bottom: f64) -> Obstacle {
        let (width, height) = kind.size();
        Obstacle {
            id: 0,
            kind,
            x,
            y: bottom - height,
            width,
            height,
            age: 0.0,
        }
    }

    #[test]
    fn test_cactus_hits_standing_player() {
        let mut game = new_game();
        game.obstacles
            .push(obstacle_at(ObstacleKind::SmallCactus, PLAYER_X, GROUND_Y));

        assert!(find_collision(&game).is_some());
    }

    #[test]
    fn test_distant_cactus_misses() {
        let mut game = new_game();
        game.obstacles
            .push(obstacle_at(ObstacleKind::LargeCactus, 600.0, GROUND_Y));

        assert!(find_collision(&game).is_none());
    }

    #[test]
    fn test_touching_edge_is_not_a_hit() {
        let mut game = new_game();
        let x = PLAYER_X + PLAYER_RUN_WIDTH;
        game.obstacles
            .push(obstacle_at(ObstacleKind::SmallCactus, x, GROUND_Y));

        assert!(find_collision(&game).is_none());
    }

    #[test]
    fn test_jump_clears_cactus() {
        let mut game = new_game();
        game.player.on_ground = false;
        game.player.y = GROUND_Y - 60.0;
        game.obstacles
            .push(obstacle_at(ObstacleKind::LargeCactus, PLAYER_X, GROUND_Y));

        assert!(find_collision(&game).is_none());
    }

    #[test]
    fn test_low_pterodactyl_hits_standing_player() {
        let mut game = new_game();
        game.obstacles.push(obstacle_at(
            ObstacleKind::Pterodactyl,
            PLAYER_X,
            PTERODACTYL_LOW_BOTTOM,
        ));

        assert!(find_collision(&game).is_some());
    }

    #[test]
    fn test_duck_passes_under_low_pterodactyl() {
        let mut game = new_game();
        game.player.ducking = true;
        game.obstacles.push(obstacle_at(
            ObstacleKind::Pterodactyl,
            PLAYER_X,
            PTERODACTYL_LOW_BOTTOM,
        ));

        assert!(find_collision(&game).is_none());
    }

    #[test]
    fn test_high_pterodactyl_clears_standing_player() {
        let mut game = new_game();
        game.obstacles.push(obstacle_at(
            ObstacleKind::Pterodactyl,
            PLAYER_X,
            PTERODACTYL_HIGH_BOTTOM,
        ));

        assert!(find_collision(&game).is_none());
    }

    #[test]
    fn test_ducking_still_hits_cactus() {
        let mut game = new_game();
        game.player.ducking = true;
        game.obstacles
            .push(obstacle_at(ObstacleKind::SmallCactus, PLAYER_X + 10.0, GROUND_Y));

        assert!(find_collision(&game).is_some());
    }

    #[test]
    fn test_first_overlap_reported() {
        let mut game = new_game();
        let mut far = obstacle_at(ObstacleKind::SmallCactus, 700.0, GROUND_Y);
        far.id = 1;
        let mut near = obstacle_at(ObstacleKind::SmallCactus, PLAYER_X, GROUND_Y);
        near.id = 2;
        game.obstacles.push(far);
        game.obstacles.push(near);

        assert_eq!(find_collision(&game).map(|o| o.id), Some(2));
    }
}
