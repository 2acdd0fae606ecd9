//! Per-frame output of the simulation
//!
//! The simulation never talks to a renderer or an audio device. It appends
//! draw and sound requests to an [`Outbox`]; the host drains it once per frame
//! and nothing flows back.

use glam::Vec2;

use super::rect::Rect;

/// Sound effect requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Flyer received an impulse
    Flap,
    /// Flyer struck something
    Hit,
    /// Run ended
    Death,
    /// A whole point was scored
    Score,
    /// Looping background track, requested once at start-up
    Music,
}

impl SoundCue {
    /// Playback volume (0.0 - 1.0)
    pub fn volume(self) -> f32 {
        match self {
            SoundCue::Flap | SoundCue::Hit | SoundCue::Score => 0.5,
            SoundCue::Death | SoundCue::Music => 1.0,
        }
    }

    /// True for cues that repeat until stopped
    pub fn looped(self) -> bool {
        matches!(self, SoundCue::Music)
    }
}

/// Text overlays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextLabel {
    /// Current score, already truncated to whole points
    Score(u32),
    GameOver,
}

impl TextLabel {
    pub fn text(&self) -> String {
        match self {
            TextLabel::Score(value) => value.to_string(),
            TextLabel::GameOver => "Game Over".to_string(),
        }
    }
}

/// A single draw request, emitted back to front
#[derive(Debug, Clone, PartialEq)]
pub enum DrawRequest {
    Background,
    /// Gate sprite stretched over `rect`; `flipped` for the upper gate
    Gate { rect: Rect, flipped: bool },
    /// Flyer sprite centered on `center` using animation variant `frame`
    Flyer { center: Vec2, frame: usize },
    /// Text centered on `center`
    Text { label: TextLabel, center: Vec2 },
}

/// Draw and sound requests produced by one tick
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    pub draws: Vec<DrawRequest>,
    pub sounds: Vec<SoundCue>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, request: DrawRequest) {
        self.draws.push(request);
    }

    pub fn play(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }

    /// Empty both queues, keeping their allocations
    pub fn clear(&mut self) {
        self.draws.clear();
        self.sounds.clear();
    }

    /// Number of gate sprites requested this frame
    pub fn gate_count(&self) -> usize {
        self.draws
            .iter()
            .filter(|d| matches!(d, DrawRequest::Gate { .. }))
            .count()
    }

    /// True if a "Game Over" overlay was requested this frame
    pub fn shows_game_over(&self) -> bool {
        self.draws.iter().any(|d| {
            matches!(
                d,
                DrawRequest::Text {
                    label: TextLabel::GameOver,
                    ..
                }
            )
        })
    }
}
