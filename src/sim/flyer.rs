//! The player-controlled flyer
//!
//! Integration is per frame, not per second: gravity is added to the velocity
//! once every simulated frame regardless of wall-clock time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::settings::Settings;

/// Player entity: position, vertical velocity and wing-beat animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flyer {
    /// Center of the sprite. `x` never changes during play.
    pub pos: Vec2,
    /// Vertical velocity (pixels per frame, +y = down)
    pub vel: f32,
    pub size: Vec2,
    /// Current animation variant, cycles over `0..frame_count`
    pub frame: usize,
    pub frame_count: usize,
    /// Frames since the last animation step
    pub frame_counter: u32,
    pub frame_interval: u32,
    start: Vec2,
}

impl Flyer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: settings.flyer_start,
            vel: 0.0,
            size: settings.flyer_size,
            frame: 0,
            frame_count: settings.flyer_frames,
            frame_counter: 0,
            frame_interval: settings.animation_interval,
            start: settings.flyer_start,
        }
    }

    /// Back to the start position at rest
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.vel = 0.0;
        self.frame = 0;
        self.frame_counter = 0;
    }

    /// Advance one frame: velocity first, then position
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.pos.y += self.vel;
    }

    /// Overwrite the velocity with the impulse. No clamping.
    pub fn apply_impulse(&mut self, flap_power: f32) {
        self.vel = flap_power;
    }

    /// Step the wing-beat animation every `frame_interval` frames
    pub fn tick_animation(&mut self) {
        self.frame_counter += 1;
        if self.frame_counter >= self.frame_interval {
            self.frame = (self.frame + 1) % self.frame_count;
            self.frame_counter = 0;
        }
    }

    /// Hit-box centered on the position
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }
}
