//! Game configuration resource.
//!
//! Manages puzzle settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [puzzle]
//! slide_speed = 4.0
//! particle_rise_speed = 1.0
//! win_message = "  !! Congratulation !!"
//!
//! [frame]
//! delta = 0.016666668
//! max_frames = 600
//!
//! [rng]
//! seed = 42
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::winlatch::DEFAULT_WIN_MESSAGE;

/// Default safe values for startup
const DEFAULT_SLIDE_SPEED: f32 = 4.0;
const DEFAULT_PARTICLE_RISE_SPEED: f32 = 1.0;
const DEFAULT_FRAME_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_MAX_FRAMES: u32 = 600;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Systems read the speeds from it every frame; the host reads the frame
/// settings and the seed once at startup.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Units per second a sliding piece travels.
    pub slide_speed: f32,
    /// Units per second a smoke particle rises.
    pub particle_rise_speed: f32,
    /// Text shown in the instructions once the puzzle is solved.
    pub win_message: String,
    /// Fixed delta time fed to each frame by the headless host.
    pub frame_delta: f32,
    /// Upper bound on frames the headless host runs.
    pub max_frames: u32,
    /// Seed for the puzzle's random source. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            slide_speed: DEFAULT_SLIDE_SPEED,
            particle_rise_speed: DEFAULT_PARTICLE_RISE_SPEED,
            win_message: DEFAULT_WIN_MESSAGE.to_string(),
            frame_delta: DEFAULT_FRAME_DELTA,
            max_frames: DEFAULT_MAX_FRAMES,
            seed: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [puzzle] section
        if let Some(speed) = config.getfloat("puzzle", "slide_speed").ok().flatten() {
            self.slide_speed = speed as f32;
        }
        if let Some(speed) = config
            .getfloat("puzzle", "particle_rise_speed")
            .ok()
            .flatten()
        {
            self.particle_rise_speed = speed as f32;
        }
        if let Some(message) = config.get("puzzle", "win_message") {
            // values are trimmed by the parser, quotes keep leading spaces
            self.win_message = message.trim_matches('"').to_string();
        }

        // [frame] section
        if let Some(delta) = config.getfloat("frame", "delta").ok().flatten() {
            self.frame_delta = delta as f32;
        }
        if let Some(frames) = config.getuint("frame", "max_frames").ok().flatten() {
            self.max_frames = frames as u32;
        }

        // [rng] section
        if let Some(seed) = config.getuint("rng", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        info!(
            "Loaded config: slide_speed={}, rise_speed={}, delta={}, max_frames={}, seed={:?}",
            self.slide_speed, self.particle_rise_speed, self.frame_delta, self.max_frames, self.seed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [puzzle] section
        config.set("puzzle", "slide_speed", Some(self.slide_speed.to_string()));
        config.set(
            "puzzle",
            "particle_rise_speed",
            Some(self.particle_rise_speed.to_string()),
        );
        config.set(
            "puzzle",
            "win_message",
            Some(format!("\"{}\"", self.win_message)),
        );

        // [frame] section
        config.set("frame", "delta", Some(self.frame_delta.to_string()));
        config.set("frame", "max_frames", Some(self.max_frames.to_string()));

        // [rng] section
        if let Some(seed) = self.seed {
            config.set("rng", "seed", Some(seed.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {}", self.config_path.display());
        Ok(())
    }
}
