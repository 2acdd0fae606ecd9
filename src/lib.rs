//! Gate Flyer - a fixed-timestep gate-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, gates, collisions, session state)
//! - `platform`: Host loop, frame pacing and input/presentation seams
//! - `settings`: Data-driven game configuration

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Default game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 488.0;
    pub const SCREEN_HEIGHT: f32 = 512.0;

    /// Target frame rate; the simulation advances once per frame
    pub const FRAME_RATE: u32 = 60;

    /// Downward acceleration added to the flyer velocity every frame
    pub const GRAVITY: f32 = 0.25;
    /// Velocity the flyer is set to on each impulse (negative = upward)
    pub const FLAP_POWER: f32 = -4.0;

    /// Flyer start position and sprite size
    pub const FLYER_START_X: f32 = 50.0;
    pub const FLYER_START_Y: f32 = 256.0;
    pub const FLYER_WIDTH: f32 = 34.0;
    pub const FLYER_HEIGHT: f32 = 24.0;
    /// Number of wing-beat sprite variants (down, mid, up)
    pub const FLYER_FRAMES: usize = 3;
    /// Frames between animation steps
    pub const FLAP_ANIMATION_INTERVAL: u32 = 5;

    /// Gate sprite size before trimming
    pub const GATE_SPRITE_WIDTH: f32 = 104.0;
    pub const GATE_SPRITE_HEIGHT: f32 = 450.0;
    /// Removed from both sprite dimensions to tighten the hit-box
    pub const GATE_TRIM: f32 = 50.0;
    /// Vertical opening between the upper and lower gate
    pub const GATE_GAP: f32 = 100.0;
    /// Horizontal distance a gate travels per frame
    pub const GATE_SPEED: f32 = 2.0;
    /// A new pair spawns once the newest one is this far from the right edge
    pub const GATE_SPAWN_THRESHOLD: f32 = 150.0;
    /// New pairs start this far beyond the right edge
    pub const GATE_SPAWN_OFFSET: f32 = 100.0;
    /// Candidate pivots (top of the lower gate)
    pub const GATE_PIVOTS: [f32; 3] = [200.0, 300.0, 400.0];

    /// How far the flyer may rise above the top edge before it counts as a crash
    pub const TOP_OVERSHOOT: f32 = 50.0;
    /// Vertical center of the score text
    pub const SCORE_TEXT_Y: f32 = 50.0;
}
