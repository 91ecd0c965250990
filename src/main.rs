//! Gem Poacher headless driver
//!
//! Runs the simulation at a fixed frame rate with the autopilot steering,
//! then prints the final world as JSON. Rendering and real input are wired in
//! by a front end; this driver exists for demos and balance checks.
//!
//! Usage: `gem-poacher [settings.json] [frames]`

use std::path::PathBuf;
use std::process::ExitCode;

use gem_poacher::Settings;
use gem_poacher::sim::{GameEvent, GameState, ManualClock, RulesEngine, TickInput, tick};

/// Simulated frame length (~60 Hz)
const FRAME_MS: u64 = 16;
/// Frames between automatic level advances
const FRAMES_PER_LEVEL: u64 = 600;
const DEFAULT_FRAMES: u64 = 3600;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Gem Poacher (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args.next().map(PathBuf::from);
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(frames)) => frames,
        Some(Err(e)) => {
            log::error!("Invalid frame count: {}", e);
            return ExitCode::FAILURE;
        }
        None => DEFAULT_FRAMES,
    };

    let settings = match Settings::load_or_default(settings_path.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Game initialized with seed: {}", seed);

    let mut engine = RulesEngine::new(GameState::new(settings, seed), ManualClock::new(0));
    let mut input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    for frame in 1..=frames {
        engine.clock().advance(FRAME_MS);
        input.advance_level = frame % FRAMES_PER_LEVEL == 0;

        for event in tick(&mut engine, &input) {
            match event {
                GameEvent::PlayerDamaged { lives_left } => {
                    log::info!("Frame {}: player hit, {} lives left", frame, lives_left)
                }
                GameEvent::GameOver { score } => {
                    log::info!("Frame {}: game over, score {}", frame, score)
                }
                _ => log::trace!("Frame {}: {:?}", frame, event),
            }
        }

        if engine.state().is_game_over() {
            break;
        }
    }

    let state = engine.into_state();
    log::info!(
        "Finished at level {} with score {} and {} lives",
        state.level,
        state.score(),
        state.player.lives
    );

    match serde_json::to_string_pretty(&state) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize world: {}", e);
            ExitCode::FAILURE
        }
    }
}
