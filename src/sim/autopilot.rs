//! Demo autopilot
//!
//! Plays unattended: aims for the middle of the next gap and flaps whenever
//! the flyer sinks below it. After a crash it waits a moment, then restarts.

use super::state::Session;
use super::tick::InputEvent;

/// Vertical center of the gap the flyer has to pass next, if any gate pair is
/// still ahead of (or overlapping) the flyer
pub fn gap_center(session: &Session) -> Option<f32> {
    let flyer_left = session.flyer.bounds().left;
    session
        .gates
        .rects()
        .chunks_exact(2)
        .find(|pair| pair[0].right() >= flyer_left)
        .map(|pair| (pair[1].bottom() + pair[0].top) / 2.0)
}

/// Input generator for idle/demo mode
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// How far below the target the flyer may sink before flapping
    pub slack: f32,
    /// Flap only once the upward speed has decayed below this
    pub max_rise: f32,
    /// Frames to linger on the game-over screen before restarting
    pub restart_delay: u32,
    ended_frames: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            slack: 10.0,
            max_rise: 1.0,
            restart_delay: 90,
            ended_frames: 0,
        }
    }
}

impl Autopilot {
    pub fn new(restart_delay: u32) -> Self {
        Self {
            restart_delay,
            ..Default::default()
        }
    }

    /// Decide this frame's input
    pub fn decide(&mut self, session: &Session) -> Option<InputEvent> {
        if !session.is_active() {
            self.ended_frames += 1;
            if self.ended_frames >= self.restart_delay {
                self.ended_frames = 0;
                return Some(InputEvent::Impulse);
            }
            return None;
        }
        self.ended_frames = 0;

        let target = gap_center(session).unwrap_or(session.settings.screen_height / 2.0);
        let flyer = &session.flyer;
        let sinking = flyer.vel > -self.max_rise;
        if flyer.pos.y > target + self.slack && sinking {
            Some(InputEvent::Impulse)
        } else {
            None
        }
    }
}
