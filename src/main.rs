//! Gate Flyer entry point
//!
//! Loads settings and runs the game loop headless, driven by the autopilot.
//! A windowed front end plugs in through `platform::{InputSource, Presenter}`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use gate_flyer::Settings;
use gate_flyer::platform::{AutopilotInput, FramePacer, LogPresenter, run};
use gate_flyer::sim::{Autopilot, Session};

/// A fixed-timestep gate-dodging arcade game
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON settings file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many frames (runs until interrupted otherwise)
    #[arg(short, long)]
    frames: Option<u64>,

    /// RNG seed, overrides the settings file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run as fast as possible instead of at the target frame rate
    #[arg(long)]
    unpaced: bool,

    /// Frames the autopilot waits on the game-over screen
    #[arg(long, default_value_t = 90)]
    restart_delay: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let mut session = Session::new(settings).context("validating settings")?;
    let mut pacer = if args.unpaced {
        FramePacer::unpaced()
    } else {
        FramePacer::new(session.settings.frame_duration())
    };
    let mut input = AutopilotInput::new(Autopilot::new(args.restart_delay));
    let mut presenter = LogPresenter::new();

    let summary = run(
        &mut session,
        &mut input,
        &mut presenter,
        &mut pacer,
        args.frames,
    )
    .context("game loop failed")?;

    log::info!(
        "Finished after {} frames, {} runs, best score {} (seed {})",
        summary.frames,
        summary.runs,
        summary.high_score,
        session.seed
    );
    Ok(())
}
