//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one step per frame)
//! - Seeded RNG only
//! - Stable gate order (oldest first)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod flyer;
pub mod gates;
pub mod output;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::{Autopilot, gap_center};
pub use collision::{
    Collision, PlayBounds, Score, ScoringRule, check_collision, detect_collision, update_score,
};
pub use flyer::Flyer;
pub use gates::{GateField, GateGenerator};
pub use output::{DrawRequest, Outbox, SoundCue, TextLabel};
pub use rect::Rect;
pub use state::{Session, SessionPhase};
pub use tick::{InputEvent, TickOutcome, render, tick};
