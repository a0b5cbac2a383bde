//! Healthy Breath Runner headless runner
//!
//! Plays the game with the autopilot at a fixed 60 Hz frame rate and prints a
//! JSON summary of every run. Rendering and audio hosts link the library
//! directly; this binary is for balance checks and soak testing.
//!
//! Usage:
//!   RUST_LOG=info cargo run --release -- --runs 5
//!   cargo run -- --config tuning.json --hazard-mode emitter

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use breath_runner::sim::{GameEvent, GamePhase, MaskEffect};
use breath_runner::{Game, HazardMode, Settings, ui};

#[derive(Parser)]
#[command(name = "breath-runner")]
#[command(about = "Run Healthy Breath Runner headless with the demo autopilot")]
struct Args {
    /// JSON settings file (partial files are fine)
    #[arg(long)]
    config: Option<String>,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Hazard behavior: contact or emitter
    #[arg(long)]
    hazard_mode: Option<HazardMode>,

    /// Number of runs to play
    #[arg(long, default_value_t = 3)]
    runs: u32,

    /// Stop a run after this many simulated seconds
    #[arg(long, default_value_t = 120.0)]
    max_seconds: f32,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Debug, Default, Serialize)]
struct RunSummary {
    run: u32,
    score: u64,
    seconds: f64,
    died: bool,
    hits_taken: u32,
    clouds_spawned: u32,
    masks_for_health: u32,
    masks_for_protection: u32,
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u64,
    hazard_mode: HazardMode,
    best_score: u64,
    runs: Vec<RunSummary>,
}

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path).with_context(|| format!("loading {path}"))?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(mode) = args.hazard_mode {
        settings.hazard_mode = mode;
    }

    if args.print_config {
        println!("{}", settings.to_json_pretty()?);
        return Ok(());
    }

    let mut game = Game::create(&settings);
    let mut runs = Vec::with_capacity(args.runs as usize);

    for run in 1..=args.runs {
        let summary = play_run(&mut game, &settings, run, args.max_seconds)?;
        log::info!(
            "Run {}: score {} in {:.1}s ({})",
            run,
            summary.score,
            summary.seconds,
            if summary.died { "died" } else { "time limit" }
        );
        let survived = !summary.died;
        runs.push(summary);
        if survived {
            // No death means no RESPAWN button to press
            log::warn!("Run {} survived the time limit, stopping early", run);
            break;
        }
    }

    let report = Report {
        seed: settings.seed(),
        hazard_mode: settings.hazard_mode,
        best_score: game.state().best_score,
        runs,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Click through the current screen, then let the bot play until death or timeout
fn play_run(game: &mut Game, settings: &Settings, run: u32, max_seconds: f32) -> Result<RunSummary> {
    let field = &settings.tuning.field;
    let button = match game.phase() {
        GamePhase::Menu => ui::start_button(field),
        GamePhase::GameOver => ui::respawn_button(field),
        GamePhase::Playing => anyhow::bail!("run {run} started while already playing"),
    };
    let click = button.rect.center();
    game.on_primary_click(click.x, click.y);
    anyhow::ensure!(game.phase() == GamePhase::Playing, "start button did not start a run");

    let mut summary = RunSummary {
        run,
        ..RunSummary::default()
    };
    let max_frames = (max_seconds / FRAME_DT).ceil() as u64;
    for _ in 0..max_frames {
        game.apply_autopilot();
        game.update(FRAME_DT);
        for event in game.drain_events() {
            match event {
                GameEvent::PlayerHit { .. } => summary.hits_taken += 1,
                GameEvent::HazardSpawned => summary.clouds_spawned += 1,
                GameEvent::MaskCollected(MaskEffect::Health) => summary.masks_for_health += 1,
                GameEvent::MaskCollected(MaskEffect::Protection) => {
                    summary.masks_for_protection += 1
                }
                GameEvent::GameOver { .. } => summary.died = true,
                GameEvent::Started | GameEvent::MaskSpawned => {}
            }
        }
        if summary.died {
            break;
        }
    }

    let state = game.state();
    summary.score = state.score;
    summary.seconds = state.survival_time;
    Ok(summary)
}
