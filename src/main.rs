//! Ghostly Potion Chase headless runner
//!
//! Plays seeded rounds with the autopilot at a fixed frame rate and prints a
//! JSON summary per round. Windowed frontends embed `potion_chase::Game`
//! directly and supply their own renderer, audio backend and input events.

use clap::Parser;
use serde::Serialize;

use potion_chase::audio::{AudioManager, LogAudio};
use potion_chase::autopilot::steer;
use potion_chase::sim::{GamePhase, PcgSource, SheetTable};
use potion_chase::{Game, InputEvent, Key, MenuAction};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Seed for the first round (later rounds use seed + n)
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Number of rounds to play
    #[arg(long, default_value_t = 1)]
    rounds: u32,
    /// Simulated frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Pretty-print the summary
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct RoundSummary {
    seed: u64,
    outcome: GamePhase,
    score: u32,
    #[serde(rename = "timeLeft")]
    time_left: u32,
    #[serde(rename = "ghostsLeft")]
    ghosts_left: usize,
    frames: u64,
}

/// Upper bound on frames per round so a stuck round cannot spin forever
const MAX_ROUND_SECONDS: u64 = 60;

fn play_round(seed: u64, fps: u32) -> RoundSummary {
    let mut game = Game::with_parts(
        SheetTable::default(),
        Box::new(PcgSource::new(seed)),
        AudioManager::new(Box::new(LogAudio)),
    );
    game.menu_action(MenuAction::Start);

    let dt = 1.0 / fps.max(1) as f32;
    let max_frames = MAX_ROUND_SECONDS * u64::from(fps.max(1));
    let mut frames = 0;
    while game.phase() == GamePhase::Playing && frames < max_frames {
        let steering = steer(game.state());
        match steering.direction {
            d if d < 0 => game.handle_input(InputEvent::KeyDown(Key::Left)),
            d if d > 0 => game.handle_input(InputEvent::KeyDown(Key::Right)),
            _ => game.handle_input(InputEvent::KeyUp(Key::Other)),
        };
        if steering.attack {
            game.handle_input(InputEvent::KeyDown(Key::Space));
        }
        game.update(dt);
        frames += 1;
    }

    let summary = RoundSummary {
        seed,
        outcome: game.phase(),
        score: game.score(),
        time_left: game.time_left(),
        ghosts_left: game.ghosts().len(),
        frames,
    };
    game.handle_input(InputEvent::KeyDown(Key::Return));
    summary
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Potion Chase (headless) starting: {} round(s)", cli.rounds);

    let mut failed = false;
    for n in 0..cli.rounds {
        let seed = cli.seed.wrapping_add(u64::from(n));
        let summary = play_round(seed, cli.fps);
        log::info!(
            "Round {} finished: {:?} with score {}",
            n + 1,
            summary.outcome,
            summary.score
        );

        let json = if cli.pretty {
            serde_json::to_string_pretty(&summary)
        } else {
            serde_json::to_string(&summary)
        };
        match json {
            Ok(line) => println!("{line}"),
            Err(e) => {
                log::error!("Failed to encode summary: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
