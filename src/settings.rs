//! Game configuration
//!
//! Every tunable constant lives here. Defaults mirror [`crate::consts`]; a JSON
//! file may override any subset of fields.

use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::ScoringRule;

/// Failure while loading or validating [`Settings`]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings, fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window caption handed to the host
    pub title: String,

    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Target frames per second
    pub frame_rate: u32,

    // === Flyer ===
    pub gravity: f32,
    /// Impulse velocity (must be negative: up is -y)
    pub flap_power: f32,
    /// Fixed start position (center of the sprite)
    pub flyer_start: Vec2,
    pub flyer_size: Vec2,
    /// Number of animation variants
    pub flyer_frames: usize,
    /// Frames between animation steps
    pub animation_interval: u32,

    // === Gates ===
    pub gate_sprite_size: Vec2,
    /// Subtracted from both sprite dimensions to get the hit-box
    pub gate_trim: f32,
    pub gate_gap: f32,
    pub gate_speed: f32,
    pub spawn_threshold: f32,
    pub spawn_offset: f32,
    /// Discrete pivot candidates; one is picked uniformly per pair
    pub gate_pivots: Vec<f32>,

    // === Rules ===
    pub top_overshoot: f32,
    pub scoring: ScoringRule,
    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,

    // === HUD ===
    pub score_text_y: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Gate Flyer".to_string(),

            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            frame_rate: FRAME_RATE,

            gravity: GRAVITY,
            flap_power: FLAP_POWER,
            flyer_start: Vec2::new(FLYER_START_X, FLYER_START_Y),
            flyer_size: Vec2::new(FLYER_WIDTH, FLYER_HEIGHT),
            flyer_frames: FLYER_FRAMES,
            animation_interval: FLAP_ANIMATION_INTERVAL,

            gate_sprite_size: Vec2::new(GATE_SPRITE_WIDTH, GATE_SPRITE_HEIGHT),
            gate_trim: GATE_TRIM,
            gate_gap: GATE_GAP,
            gate_speed: GATE_SPEED,
            spawn_threshold: GATE_SPAWN_THRESHOLD,
            spawn_offset: GATE_SPAWN_OFFSET,
            gate_pivots: GATE_PIVOTS.to_vec(),

            top_overshoot: TOP_OVERSHOOT,
            scoring: ScoringRule::default(),
            seed: None,

            score_text_y: SCORE_TEXT_Y,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
            SettingsError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(invalid("screen_width/screen_height", "must be positive"));
        }
        if self.frame_rate == 0 {
            return Err(invalid("frame_rate", "must be at least 1"));
        }
        if !(self.gravity > 0.0 && self.gravity.is_finite()) {
            return Err(invalid("gravity", "must be positive (downward)"));
        }
        if !(self.flap_power < 0.0) {
            return Err(invalid("flap_power", "must be negative (upward)"));
        }
        if !(self.flyer_size.x > 0.0 && self.flyer_size.y > 0.0) {
            return Err(invalid("flyer_size", "must be positive"));
        }
        if self.flyer_frames == 0 {
            return Err(invalid("flyer_frames", "need at least one animation frame"));
        }
        if self.animation_interval == 0 {
            return Err(invalid("animation_interval", "must be at least 1"));
        }
        let gate = self.gate_size();
        if !(gate.x > 0.0 && gate.y > 0.0) {
            return Err(invalid(
                "gate_trim",
                format!("trimmed gate size {gate} must be positive"),
            ));
        }
        if !(self.gate_speed > 0.0) {
            return Err(invalid("gate_speed", "must be positive"));
        }
        if !(self.gate_gap > 0.0 && self.gate_gap.is_finite()) {
            return Err(invalid("gate_gap", "must be positive"));
        }
        if !self.spawn_offset.is_finite() {
            return Err(invalid("spawn_offset", "must be finite"));
        }
        // Consecutive pairs are at least one gate width apart
        let spacing = self.spawn_x() - (self.screen_width - self.spawn_threshold);
        if !(spacing >= gate.x) {
            return Err(invalid(
                "spawn_threshold",
                format!(
                    "pairs would spawn {spacing} apart, need at least the gate width {}",
                    gate.x
                ),
            ));
        }
        if self.gate_pivots.is_empty() {
            return Err(invalid("gate_pivots", "need at least one candidate"));
        }
        if !(self.top_overshoot >= 0.0 && self.top_overshoot.is_finite()) {
            return Err(invalid("top_overshoot", "must be finite and not negative"));
        }
        Ok(())
    }

    /// Hit-box size of one gate rectangle
    pub fn gate_size(&self) -> Vec2 {
        self.gate_sprite_size - Vec2::splat(self.gate_trim)
    }

    /// Horizontal center at which new gate pairs appear
    pub fn spawn_x(&self) -> f32 {
        self.screen_width + self.spawn_offset
    }

    /// Wall-clock length of one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate as f64)
    }
}
