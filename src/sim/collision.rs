//! Collision detection and scoring
//!
//! The flyer crashes when its hit-box overlaps any gate, when it climbs too
//! far above the top edge, or when it touches the bottom of the screen.

use serde::{Deserialize, Serialize};

use super::output::{Outbox, SoundCue};
use super::rect::Rect;
use crate::settings::Settings;

/// What the flyer ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Overlap with the gate at this index of the field
    Gate { index: usize },
    /// Rose more than the overshoot margin above the top edge
    Ceiling,
    /// Reached the bottom edge
    Floor,
}

/// Vertical limits of the playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayBounds {
    pub height: f32,
    pub top_overshoot: f32,
}

impl PlayBounds {
    pub fn new(settings: &Settings) -> Self {
        Self {
            height: settings.screen_height,
            top_overshoot: settings.top_overshoot,
        }
    }
}

/// Find the first thing the flyer hits, gates before screen edges
pub fn detect_collision(flyer: &Rect, gates: &[Rect], bounds: &PlayBounds) -> Option<Collision> {
    if let Some(index) = gates.iter().position(|gate| flyer.intersects(gate)) {
        return Some(Collision::Gate { index });
    }
    if flyer.top < -bounds.top_overshoot {
        return Some(Collision::Ceiling);
    }
    if flyer.bottom() >= bounds.height {
        return Some(Collision::Floor);
    }
    None
}

/// True if the flyer hits a gate or leaves the playfield
pub fn check_collision(flyer: &Rect, gates: &[Rect], bounds: &PlayBounds) -> bool {
    detect_collision(flyer, gates, bounds).is_some()
}

/// When a gate rectangle counts as passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// The gate center equals the flyer x exactly this frame. Only fires when
    /// the scroll speed lands on the flyer x.
    #[default]
    ExactCenter,
    /// The gate center moved from right of the flyer x to at-or-left of it
    /// during this frame's scroll.
    Crossing,
}

impl ScoringRule {
    /// Did a gate whose center is now `center_x` pass `flyer_x` this frame?
    pub fn passed(self, center_x: f32, flyer_x: f32, speed: f32) -> bool {
        match self {
            ScoringRule::ExactCenter => center_x == flyer_x,
            ScoringRule::Crossing => center_x <= flyer_x && flyer_x < center_x + speed,
        }
    }
}

/// Score kept in half points so the arithmetic stays exact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Score {
    halves: u32,
}

impl Score {
    /// Add half a point; returns true if the score is now a whole number
    pub fn add_half(&mut self) -> bool {
        self.halves += 1;
        self.halves % 2 == 0
    }

    pub fn halves(&self) -> u32 {
        self.halves
    }

    /// Score as displayed (truncated to whole points)
    pub fn whole(&self) -> u32 {
        self.halves / 2
    }

    pub fn value(&self) -> f32 {
        self.halves as f32 / 2.0
    }

    pub fn reset(&mut self) {
        self.halves = 0;
    }
}

/// Add half a point for every gate that passed the flyer this frame, with a
/// score cue each time the total becomes whole. Returns halves gained.
pub fn update_score(
    flyer_x: f32,
    gates: &[Rect],
    rule: ScoringRule,
    speed: f32,
    score: &mut Score,
    outbox: &mut Outbox,
) -> u32 {
    let mut gained = 0;
    for gate in gates {
        if rule.passed(gate.center_x(), flyer_x, speed) {
            gained += 1;
            if score.add_half() {
                outbox.play(SoundCue::Score);
            }
        }
    }
    if gained > 0 {
        log::debug!("Scored {} half points, total {}", gained, score.value());
    }
    gained
}
