//! Brick Breaker headless runner
//!
//! Plays the simulation without a display: the autopilot (or nothing, if
//! disabled) steers, lost lives are resumed automatically, and the final state
//! is printed as JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use brick_breaker::sim::{GameEvent, GamePhase, autopilot};
use brick_breaker::{FrameDriver, Game, Settings};

#[derive(Parser, Debug)]
#[command(name = "brick-breaker", about = "Run a headless Brick Breaker game")]
struct Args {
    /// Settings file (JSON)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// RNG seed (overrides settings)
    #[arg(long)]
    seed: Option<u64>,
    /// Ball speed multiplier (overrides settings)
    #[arg(long)]
    speed: Option<f32>,
    /// Maximum frames to simulate
    #[arg(long, default_value_t = 100_000)]
    frames: u64,
    /// Disable the demo AI (the paddle will not move)
    #[arg(long)]
    no_autopilot: bool,
    /// Print a snapshot every N frames
    #[arg(long)]
    trace_every: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path),
        None => Settings {
            autopilot: true,
            ..Settings::default()
        },
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if let Some(speed) = args.speed {
        settings.speed_multiplier = speed;
    }
    if args.no_autopilot {
        settings.autopilot = false;
    }

    log::info!("Brick Breaker (headless) starting...");
    let mut game = Game::new(&settings);
    let mut driver = FrameDriver::new();

    game.start();
    driver.sync(&game);

    for frame in 0..args.frames {
        if settings.autopilot {
            game.set_input(autopilot::steer(game.state()));
        }

        let mut trace = None;
        driver.frame(&mut game, |g| {
            if args.trace_every.is_some_and(|n| n > 0 && frame % n == 0) {
                trace = Some(g.snapshot());
            }
        });
        if let Some(snapshot) = trace {
            println!("{}", snapshot.to_json()?);
        }

        for event in game.take_events() {
            match event {
                GameEvent::LifeLost { remaining } => {
                    log::info!("Frame {}: life lost, {} remaining", frame, remaining)
                }
                GameEvent::GameOver => log::info!("Frame {}: game over", frame),
                GameEvent::Won => log::info!("Frame {}: won", frame),
                other => log::trace!("Frame {}: {:?}", frame, other),
            }
        }

        match game.phase() {
            GamePhase::Paused => {
                game.start();
                driver.sync(&game);
            }
            GamePhase::GameOver | GamePhase::Won => break,
            _ => {}
        }
    }

    driver.stop();
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}
