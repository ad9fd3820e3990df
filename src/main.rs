//! Arcade Runner headless entry point
//!
//! Drives the simulation without a renderer, optionally with a simple
//! look-ahead autopilot, and prints a run summary.
//!
//! Usage:
//!   cargo run --release -- --seed 7 --ticks 5000 --autopilot
//!   RUST_LOG=debug cargo run -- --tuning hard.json --json

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use arcade_runner::sim::{GameEvent, GamePhase, GameState, Snapshot};
use arcade_runner::tuning::{Difficulty, Tuning};
use arcade_runner::{Clock, FrameSink};

#[derive(Parser, Debug)]
#[command(name = "arcade-runner")]
#[command(about = "Run the arcade runner simulation headless")]
struct Args {
    /// Run seed
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 3600)]
    ticks: u64,

    /// Difficulty preset (easy, normal, hard)
    #[arg(short, long, default_value = "normal")]
    difficulty: String,

    /// JSON file with tuning overrides (replaces the preset)
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Let the autopilot press the button
    #[arg(short, long)]
    autopilot: bool,

    /// Print the final snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

/// Collects run statistics from the frame stream
#[derive(Default)]
struct Stats {
    runs: u32,
    best_score: u32,
    hits: u32,
    jumps: u32,
    last: Option<Snapshot>,
}

impl FrameSink for Stats {
    fn present(&mut self, frame: &Snapshot) {
        for event in &frame.events {
            match event {
                GameEvent::Started { .. } => self.runs += 1,
                GameEvent::Jumped { .. } => self.jumps += 1,
                GameEvent::Hit { .. } => self.hits += 1,
                GameEvent::GameOver { final_score } => {
                    self.hits += 1;
                    self.best_score = self.best_score.max(*final_score);
                    log::info!("Run {} over with score {}", self.runs, final_score);
                }
                GameEvent::Spawned { .. } | GameEvent::Passed { .. } => {}
            }
        }
        self.best_score = self.best_score.max(frame.score);
        self.last = Some(frame.clone());
    }
}

/// Jump when the next unpassed obstacle is about to reach the player
fn autopilot_wants_jump(state: &GameState) -> bool {
    if state.player.airborne {
        return false;
    }
    let lead = state.player.leading_edge();
    let window = state.run.speed * 12.0;
    state
        .obstacles
        .iter()
        .filter(|o| !o.passed && o.pos.x >= lead)
        .map(|o| o.pos.x - lead)
        .next()
        .is_some_and(|gap| gap <= window)
}

fn load_tuning(args: &Args) -> anyhow::Result<Tuning> {
    if let Some(path) = &args.tuning {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Tuning::from_json(&json).with_context(|| format!("invalid {}", path.display()));
    }
    let difficulty = Difficulty::parse(&args.difficulty)
        .with_context(|| format!("unknown difficulty `{}`", args.difficulty))?;
    Ok(Tuning::from_difficulty(difficulty))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let tuning = load_tuning(&args)?;

    log::info!("Arcade Runner (headless) starting, seed {}", args.seed);

    let mut clock = Clock::try_new(args.seed, tuning)?;
    let signals = clock.signals();
    let mut stats = Stats::default();

    // Press once to leave NotStarted
    signals.activate();
    for _ in 0..args.ticks {
        clock.frame(&mut stats);

        let state = clock.state();
        if args.autopilot {
            match state.phase() {
                GamePhase::Playing => {
                    if autopilot_wants_jump(state) {
                        signals.activate();
                    }
                }
                _ => signals.activate(),
            }
        }
    }

    if args.json {
        let last = stats.last.as_ref().context("no frames were simulated")?;
        println!("{}", serde_json::to_string_pretty(last)?);
        return Ok(());
    }

    println!("=== RUN SUMMARY ===");
    println!("  Seed:       {}", args.seed);
    println!("  Frames:     {}", clock.frames());
    println!("  Runs:       {}", stats.runs);
    println!("  Best score: {}", stats.best_score);
    println!("  Jumps:      {}", stats.jumps);
    println!("  Hits:       {}", stats.hits);
    if let Some(last) = &stats.last {
        println!(
            "  Final:      {:?}, score {}, lives {}, speed {:.2}",
            last.phase, last.score, last.lives, last.speed
        );
    }
    Ok(())
}
