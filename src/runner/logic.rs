//! Dino Runner game logic: input processing, the fixed-step frame loop and
//! the Running / GameOver state machine.

use super::collision::find_collision;
use super::difficulty::game_speed;
use super::scenery::update_clouds;
use super::spawner::{advance_obstacles, update_spawner};
use super::types::*;
use crate::core::constants::*;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    Jump,       // Space or Up arrow
    Duck(bool), // Down arrow held (true) or released (false)
    Restart,    // R, only while game over
    Other,
}

/// What happened during one `tick_runner` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Fixed physics steps executed.
    pub steps: u32,
    /// The player hit an obstacle during this tick.
    pub crashed: bool,
    /// Score milestones crossed during this tick.
    pub milestones: u32,
}

/// Process player input. Out-of-context input is ignored.
pub fn process_input<R: Rng>(game: &mut RunnerGame, input: RunnerInput, rng: &mut R) {
    match game.state {
        GameState::GameOver => {
            if input == RunnerInput::Restart {
                restart(game, rng);
            }
        }
        GameState::Running => match input {
            RunnerInput::Jump => {
                let impulse = game.tuning.jump_impulse;
                game.player.jump(impulse);
            }
            RunnerInput::Duck(held) => game.duck_held = held,
            RunnerInput::Restart | RunnerInput::Other => {}
        },
    }
}

/// Start a new run from the game-over screen. Ignored while running, so
/// repeated calls leave the same fresh session.
pub fn restart<R: Rng>(game: &mut RunnerGame, rng: &mut R) {
    if game.state != GameState::GameOver {
        return;
    }
    game.reset(rng);
    tracing::info!(high_score = game.high_score, "run restarted");
}

/// Advance the session. Called from the main loop.
///
/// `dt_ms` is milliseconds since the last call. Internally steps physics in
/// fixed `FRAME_MS` increments so the simulation does not depend on the
/// render rate.
pub fn tick_runner<R: Rng>(game: &mut RunnerGame, dt_ms: u64, rng: &mut R) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if game.state != GameState::Running {
        return outcome;
    }

    // Clamp dt to prevent a burst of steps after a stall
    game.accumulated_time_ms += dt_ms.min(MAX_FRAME_DELTA_MS);

    while game.accumulated_time_ms >= FRAME_MS {
        game.accumulated_time_ms -= FRAME_MS;
        let step = step_frame(game, FRAME_DT_SECONDS, rng);
        outcome.steps += 1;
        outcome.milestones += step.milestones;

        if step.crashed {
            outcome.crashed = true;
            game.accumulated_time_ms = 0;
            break;
        }
    }

    outcome
}

/// A single simulation step of `dt` seconds.
///
/// Order: physics, spawner, collision, then score and speed. Does nothing
/// once the game is over, which keeps score and speed frozen.
pub fn step_frame<R: Rng>(game: &mut RunnerGame, dt: f64, rng: &mut R) -> TickOutcome {
    let mut outcome = TickOutcome {
        steps: 1,
        ..Default::default()
    };
    if game.state != GameState::Running {
        outcome.steps = 0;
        return outcome;
    }
    game.tick_count += 1;

    // 1. Physics
    game.player.set_ducking(game.duck_held);
    game.player.update(dt, game.tuning.gravity);

    // 2. Spawn, scroll and cull obstacles
    update_spawner(game, dt, rng);
    advance_obstacles(game, dt);
    game.distance += game.game_speed * dt;
    update_clouds(game, dt, rng);

    // 3. Collision
    if let Some(obstacle) = find_collision(game) {
        let (id, kind) = (obstacle.id, obstacle.kind);
        game.state = GameState::GameOver;
        game.high_score = game.high_score.max(game.score);
        game.duck_held = false;
        outcome.crashed = true;
        tracing::info!(score = game.score, obstacle = id, ?kind, "game over");
        return outcome;
    }

    // 4. Score and difficulty
    game.score_progress += game.tuning.score_rate * dt;
    game.score = game.score_progress.floor() as u32;
    game.game_speed = game_speed(game.score, &game.tuning);

    game.milestone_flash = (game.milestone_flash - dt).max(0.0);
    while game.score >= game.next_milestone {
        outcome.milestones += 1;
        game.milestone_flash = MILESTONE_FLASH_SECONDS;
        tracing::debug!(milestone = game.next_milestone, speed = game.game_speed, "milestone");
        game.next_milestone += MILESTONE_INTERVAL;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tuning;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    /// A session with spawning pushed far away so tests control obstacles.
    fn quiet_game(rng: &mut ChaCha8Rng) -> RunnerGame {
        let mut game = RunnerGame::new(Tuning::default(), rng);
        game.spawner.distance_remaining = 1.0e9;
        game
    }

    fn cactus_on_player() -> Obstacle {
        let (width, height) = ObstacleKind::LargeCactus.size();
        Obstacle {
            id: 99,
            kind: ObstacleKind::LargeCactus,
            x: PLAYER_X,
            y: GROUND_Y - height,
            width,
            height,
            age: 0.0,
        }
    }

    // ── Input ──

    #[test]
    fn test_jump_input_applies_impulse() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);

        process_input(&mut game, RunnerInput::Jump, &mut rng);

        assert!(!game.player.on_ground);
        assert!((game.player.velocity - game.tuning.jump_impulse).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duck_input_tracks_held_state() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);

        process_input(&mut game, RunnerInput::Duck(true), &mut rng);
        step_frame(&mut game, FRAME_DT_SECONDS, &mut rng);
        assert!(game.player.ducking);

        process_input(&mut game, RunnerInput::Duck(false), &mut rng);
        step_frame(&mut game, FRAME_DT_SECONDS, &mut rng);
        assert!(!game.player.ducking);
    }

    #[test]
    fn test_duck_held_through_jump_resumes_on_landing() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        process_input(&mut game, RunnerInput::Jump, &mut rng);
        process_input(&mut game, RunnerInput::Duck(true), &mut rng);

        step_frame(&mut game, FRAME_DT_SECONDS, &mut rng);
        assert!(!game.player.ducking, "No duck in the air");

        let mut steps = 0;
        while !game.player.on_ground && steps < 500 {
            step_frame(&mut game, FRAME_DT_SECONDS, &mut rng);
            steps += 1;
        }
        step_frame(&mut game, FRAME_DT_SECONDS, &mut rng);
        assert!(game.player.ducking, "Still holding duck after landing");
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.score = 42;
        game.score_progress = 42.5;

        process_input(&mut game, RunnerInput::Restart, &mut rng);

        assert_eq!(game.score, 42);
        assert!(game.is_running());
    }

    #[test]
    fn test_jump_ignored_when_game_over() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.state = GameState::GameOver;

        process_input(&mut game, RunnerInput::Jump, &mut rng);

        assert!(game.player.on_ground);
    }

    // ── Frame stepping ──

    #[test]
    fn test_tick_steps_fixed_increments() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);

        let outcome = tick_runner(&mut game, FRAME_MS * 3 + 5, &mut rng);

        assert_eq!(outcome.steps, 3);
        assert_eq!(game.accumulated_time_ms, 5);
        assert_eq!(game.tick_count, 3);
    }

    #[test]
    fn test_tick_clamps_large_delta() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);

        let outcome = tick_runner(&mut game, 10_000, &mut rng);

        assert_eq!(outcome.steps as u64, MAX_FRAME_DELTA_MS / FRAME_MS);
    }

    #[test]
    fn test_score_grows_with_time() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);

        // A little over two seconds of running
        for _ in 0..130 {
            step_frame(&mut game, FRAME_DT_SECONDS, &mut rng);
        }

        assert_eq!(game.score, 20);
    }

    #[test]
    fn test_speed_follows_score() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.score_progress = 499.99;

        step_frame(&mut game, FRAME_DT_SECONDS, &mut rng);

        assert_eq!(game.score, 500);
        let expected = game_speed(500, &game.tuning);
        assert!((game.game_speed - expected).abs() < f64::EPSILON);
        assert!(game.game_speed > game.tuning.base_speed);
    }

    #[test]
    fn test_milestone_flash() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.score_progress = MILESTONE_INTERVAL as f64 - 0.01;

        let outcome = step_frame(&mut game, FRAME_DT_SECONDS, &mut rng);

        assert_eq!(outcome.milestones, 1);
        assert!(game.milestone_flash > 0.0);
        assert_eq!(game.next_milestone, MILESTONE_INTERVAL * 2);

        let outcome = step_frame(&mut game, FRAME_DT_SECONDS, &mut rng);
        assert_eq!(outcome.milestones, 0);
    }

    // ── State machine ──

    #[test]
    fn test_collision_ends_game_once() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.obstacles.push(cactus_on_player());

        let first = tick_runner(&mut game, FRAME_MS * 4, &mut rng);
        assert!(first.crashed);
        assert_eq!(first.steps, 1, "Stepping stops at the crash");
        assert!(game.is_game_over());

        let second = tick_runner(&mut game, FRAME_MS * 4, &mut rng);
        assert!(!second.crashed);
        assert_eq!(second.steps, 0);
    }

    #[test]
    fn test_score_frozen_during_game_over() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.score_progress = 77.3;
        game.score = 77;
        game.obstacles.push(cactus_on_player());
        tick_runner(&mut game, FRAME_MS, &mut rng);

        let (score, speed) = (game.score, game.game_speed);
        for _ in 0..10 {
            tick_runner(&mut game, FRAME_MS, &mut rng);
            step_frame(&mut game, FRAME_DT_SECONDS, &mut rng);
        }

        assert_eq!(game.score, score);
        assert!((game.game_speed - speed).abs() < f64::EPSILON);
        assert_eq!(game.high_score, 77);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.score_progress = 150.0;
        game.score = 150;
        game.obstacles.push(cactus_on_player());
        tick_runner(&mut game, FRAME_MS, &mut rng);
        assert!(game.is_game_over());

        process_input(&mut game, RunnerInput::Restart, &mut rng);

        assert!(game.is_running());
        assert_eq!(game.score, 0);
        assert!(game.obstacles.is_empty());
        assert_eq!(game.player, Player::new());
        assert_eq!(game.high_score, 150);
        assert!((game.game_speed - game.tuning.base_speed).abs() < f64::EPSILON);
        assert!(game.spawner.distance_remaining >= game.tuning.min_spawn_gap);
    }

    #[test]
    fn test_restart_idempotent() {
        let mut rng = create_test_rng();
        let mut game = quiet_game(&mut rng);
        game.obstacles.push(cactus_on_player());
        tick_runner(&mut game, FRAME_MS, &mut rng);

        restart(&mut game, &mut rng);
        let (score, player, count) = (game.score, game.player.clone(), game.obstacles.len());
        restart(&mut game, &mut rng);
        restart(&mut game, &mut rng);

        assert_eq!(game.score, score);
        assert_eq!(game.player, player);
        assert_eq!(game.obstacles.len(), count);
        assert!(game.is_running());
    }
}
