use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use dino_runner::core::constants::FRAME_MS;
use dino_runner::core::Tuning;
use dino_runner::input::{InputHandler, InputResult};
use dino_runner::runner::{tick_runner, RunnerGame};
use dino_runner::terminal::TerminalSession;
use dino_runner::ui::draw_ui;
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() -> Result<()> {
    // Silent unless RUST_LOG is set; stderr keeps log lines off the game screen
    // when redirected (`2>runner.log`).
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_ansi(false))
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")
}

fn main() -> Result<()> {
    init_tracing()?;

    let mut rng = rand::thread_rng();
    let mut game = RunnerGame::new(Tuning::default(), &mut rng);
    let mut session = TerminalSession::start()?;
    let mut input = InputHandler::new(session.release_events);

    tracing::info!("starting dino runner");

    let frame_budget = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        session
            .terminal
            .draw(|frame| draw_ui(frame, &game))
            .context("failed to draw frame")?;

        // Wait for input until the frame budget is used up, then drain
        // whatever else is already queued.
        let mut timeout = frame_budget.saturating_sub(last_frame.elapsed());
        while event::poll(timeout).context("failed to poll terminal events")? {
            if let Event::Key(key_event) = event::read().context("failed to read event")? {
                let now = Instant::now();
                if input.handle_key(key_event, &mut game, now, &mut rng) == InputResult::Quit {
                    tracing::info!(score = game.score, high_score = game.high_score, "quit");
                    return Ok(());
                }
            }
            timeout = Duration::ZERO;
        }

        let now = Instant::now();
        input.sync_held_keys(&mut game, now, &mut rng);

        let elapsed_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        tick_runner(&mut game, elapsed_ms, &mut rng);
    }
}
