//! Gate generation and the scrolling gate field
//!
//! A gate pair is two rectangles sharing one horizontal center: the lower gate
//! hangs down from the pivot, the upper gate ends `gap` pixels above it. The
//! field stores the rectangles flattened, oldest first.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::settings::Settings;

/// Builds new gate pairs just beyond the right edge of the screen
#[derive(Debug, Clone)]
pub struct GateGenerator {
    spawn_x: f32,
    gap: f32,
    size: Vec2,
    pivots: Vec<f32>,
}

impl GateGenerator {
    pub fn new(settings: &Settings) -> Self {
        Self {
            spawn_x: settings.spawn_x(),
            gap: settings.gate_gap,
            size: settings.gate_size(),
            pivots: settings.gate_pivots.clone(),
        }
    }

    /// Pick a pivot and build `(lower, upper)`. `None` only without candidates.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(Rect, Rect)> {
        self.pivots.choose(rng).map(|&pivot| self.pair_at(pivot))
    }

    /// Build the pair for a given pivot
    pub fn pair_at(&self, pivot: f32) -> (Rect, Rect) {
        let lower = Rect::from_mid_top(Vec2::new(self.spawn_x, pivot), self.size);
        let upper = Rect::from_mid_bottom(Vec2::new(self.spawn_x, pivot - self.gap), self.size);
        (lower, upper)
    }
}

/// Live gate rectangles, ordered by age (leftmost first)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateField {
    rects: Vec<Rect>,
    /// A new pair is due once the newest center is left of this line
    spawn_line: f32,
}

impl GateField {
    pub fn new(settings: &Settings) -> Self {
        Self {
            rects: Vec::new(),
            spawn_line: settings.screen_width - settings.spawn_threshold,
        }
    }

    /// Scroll every gate left by `speed` and drop the ones fully off-screen
    pub fn advance(&mut self, speed: f32) {
        for rect in &mut self.rects {
            rect.translate_x(-speed);
        }
        // retain keeps relative order, so the field stays oldest-first
        self.rects.retain(|r| r.center_x() >= -r.width / 2.0);
    }

    /// Append one pair when the field is empty or the newest pair has
    /// scrolled past the spawn line. Returns true if a pair was added.
    pub fn maybe_spawn<R: Rng + ?Sized>(&mut self, generator: &GateGenerator, rng: &mut R) -> bool {
        let due = match self.rects.last() {
            None => true,
            Some(newest) => newest.center_x() < self.spawn_line,
        };
        if !due {
            return false;
        }

        let Some((lower, upper)) = generator.generate(rng) else {
            log::warn!("No gate pivots to choose from");
            return false;
        };
        log::debug!(
            "Spawned gate pair at x={} (gap {}..{})",
            lower.center_x(),
            upper.bottom(),
            lower.top
        );
        self.rects.push(lower);
        self.rects.push(upper);
        true
    }

    /// Append a prebuilt pair (lower, upper)
    pub fn push_pair(&mut self, pair: (Rect, Rect)) {
        self.rects.push(pair.0);
        self.rects.push(pair.1);
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.rects.iter()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
