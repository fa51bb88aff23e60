//! Critterball headless demo runner
//!
//! Drives the simulation with a real frame clock and an autopilot paddle,
//! standing in for the windowed frontend: pointer samples and the start
//! click come from the autopilot, events drain into a logging audio sink.
//!
//! Usage: `critterball [seed] [max_games]` (RUST_LOG=debug for per-event
//! output). Prints a JSON run summary on exit.

use std::time::{Duration, Instant};

use glam::DVec2;
use serde::Serialize;

use critterball::audio::{AudioSink, LogAudio};
use critterball::{GameConfig, GameState, Session, TickInput, tick};

/// Wall-clock cap so an unlucky autopilot run still terminates.
const RUN_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Frame pacing (~120 Hz)
const FRAME_INTERVAL: Duration = Duration::from_millis(8);

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    games: u32,
    wins: u32,
    losses: u32,
    duration_ms: u128,
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(random_seed);
    let max_games: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let config = GameConfig::default();
    let paddle_y = config.paddle_initial_y_frac * config.board_height;
    let mut session = Session::new(config, seed);
    let mut audio = LogAudio;

    log::info!("critterball demo, seed {seed}, up to {max_games} game(s)");

    let started = Instant::now();
    // First frame is skipped: no elapsed time is known until the clock has
    // ticked once.
    let mut last_frame: Option<Instant> = None;
    let mut frames: u64 = 0;
    let mut wins: u32 = 0;
    let mut losses: u32 = 0;

    while wins + losses < max_games && started.elapsed() < RUN_TIME_LIMIT {
        std::thread::sleep(FRAME_INTERVAL);

        let now = Instant::now();
        let Some(prev) = last_frame else {
            last_frame = Some(now);
            continue;
        };
        let elapsed_ns = now.duration_since(prev).as_nanos() as f64;
        last_frame = Some(now);

        // Autopilot: click through the start prompt and keep the paddle
        // under the ball.
        let input = TickInput {
            pointer: Some(DVec2::new(session.ball.pos.x, paddle_y)),
            start: session.state == GameState::New,
        };

        let state = tick(&mut session, &input, elapsed_ns);
        frames += 1;

        for event in session.drain_events() {
            audio.play(event);
        }

        match state {
            GameState::Won => {
                wins += 1;
                session.restart(state);
                log::info!("{}", session.prompt.replace('\n', " "));
            }
            GameState::Lost => {
                losses += 1;
                session.restart(state);
                log::info!("{}", session.prompt.replace('\n', " "));
            }
            _ => {}
        }
    }

    let summary = RunSummary {
        seed,
        frames,
        games: wins + losses,
        wins,
        losses,
        duration_ms: started.elapsed().as_millis(),
    };
    println!(
        "{}",
        serde_json::to_string(&summary).expect("summary serializes")
    );
}

/// Seed from the wall clock when none is given.
fn random_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
