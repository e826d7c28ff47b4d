//! Rushblock entry point.
//!
//! Runs a sliding-block puzzle headless: a level is loaded from JSON, a key
//! script stands in for the keyboard, and the board is printed when the run
//! ends.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing), apply CLI overrides
//! 2. Insert resources, spawn the level, register event observers
//! 3. Validate the board and put the cursor on a random piece
//! 4. Run frames until the script is exhausted and no piece is sliding, or
//!    the frame limit is hit
//! 5. Print the board report
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --script assets/scripts/solve.txt --seed 1
//! ```

use std::path::PathBuf;

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{debug, error, info, warn};

use rushblock::components::slidetask::SlideTask;
use rushblock::error::PuzzleError;
use rushblock::events::puzzle::PuzzleSolvedEvent;
use rushblock::events::selection::SelectionChangedEvent;
use rushblock::events::slide::{SlideCommittedEvent, SlideFinishedEvent};
use rushblock::game::{
    build_update_schedule, insert_resources, piece_report, run_frame, setup_puzzle,
};
use rushblock::keyscript::KeyScript;
use rushblock::level::{LevelData, spawn_level};
use rushblock::resources::gameconfig::GameConfig;
use rushblock::resources::winlatch::WinLatch;

/// Rushblock sliding-block puzzle
#[derive(Parser)]
#[command(version, about = "Headless sliding-block puzzle driven by a key script.")]
struct Cli {
    /// Level file (JSON).
    #[arg(long, value_name = "PATH", default_value = "assets/levels/rushhours.json")]
    level: PathBuf,

    /// Key script replayed one line per frame. Without it the board just idles.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Configuration file (INI).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for the random source; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of frames to run; overrides the config file.
    #[arg(long)]
    frames: Option<u32>,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PuzzleError> {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(frames) = cli.frames {
        config.max_frames = frames;
    }

    if cli.write_config {
        match config.save_to_file() {
            Ok(()) => println!("Configuration written to {}", config.config_path.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let level = LevelData::load_from_file(&cli.level)?;
    let mut script = match &cli.script {
        Some(path) => KeyScript::load_from_file(path)?,
        None => KeyScript::default(),
    };
    info!("Replaying {} scripted frames", script.len());

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    insert_resources(&mut world, &config);
    spawn_level(&mut world, &level);

    world.add_observer(|trigger: On<SelectionChangedEvent>| {
        let event = trigger.event();
        debug!("Cursor moved from {:?} to {:?}", event.from, event.to);
    });
    world.add_observer(|trigger: On<SlideCommittedEvent>| {
        let event = trigger.event();
        info!(
            "{:?} slides {:.3} along {:?} (stopped by {:?})",
            event.entity, event.distance, event.axis, event.obstacle
        );
    });
    world.add_observer(|trigger: On<SlideFinishedEvent>| {
        debug!("{:?} landed", trigger.event().entity);
    });
    world.add_observer(|trigger: On<PuzzleSolvedEvent>| {
        let event = trigger.event();
        info!("Player {:?} reached target {:?}", event.player, event.target);
    });
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    setup_puzzle(&mut world)?;

    let mut update = build_update_schedule();
    let dt = config.frame_delta;

    // --------------- Main loop ---------------
    let mut frames = 0;
    while frames < config.max_frames {
        run_frame(&mut world, &mut update, dt, &script);
        script.advance();
        frames += 1;

        let sliding = world
            .query_filtered::<(), With<SlideTask>>()
            .iter(&world)
            .next()
            .is_some();
        if script.is_finished() && !sliding {
            break;
        }
    }
    info!("Stopped after {frames} frames");

    for line in piece_report(&mut world) {
        println!("{line}");
    }
    let latch = world.resource::<WinLatch>();
    if latch.is_solved() {
        println!("{}", latch.message);
    } else {
        println!("Not solved yet.");
    }
    Ok(())
}
