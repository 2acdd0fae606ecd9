//! Headless host pieces: scripted and autopilot input, logging presenter

use std::collections::HashMap;

use super::{InputSource, PresentError, Presenter};
use crate::settings::Settings;
use crate::sim::{Autopilot, InputEvent, Outbox, Session, SessionPhase, SoundCue};

/// Replays `(frame, event)` pairs; frames count polls from zero
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: Vec<(u64, InputEvent)>,
    frame: u64,
}

impl ScriptedInput {
    pub fn new(mut script: Vec<(u64, InputEvent)>) -> Self {
        // stable: events sharing a frame keep their order
        script.sort_by_key(|(frame, _)| *frame);
        Self { script, frame: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _session: &Session, events: &mut Vec<InputEvent>) {
        let frame = self.frame;
        events.extend(
            self.script
                .iter()
                .filter(|(at, _)| *at == frame)
                .map(|(_, event)| *event),
        );
        self.frame += 1;
    }
}

/// Demo mode: the autopilot plays and restarts after each crash
#[derive(Debug, Default)]
pub struct AutopilotInput {
    pilot: Autopilot,
}

impl AutopilotInput {
    pub fn new(pilot: Autopilot) -> Self {
        Self { pilot }
    }
}

impl InputSource for AutopilotInput {
    fn poll(&mut self, session: &Session, events: &mut Vec<InputEvent>) {
        events.extend(self.pilot.decide(session));
    }
}

/// Presenter without a display: logs what a renderer and mixer would do
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames: u64,
    cues: HashMap<SoundCue, u64>,
    last_phase: Option<SessionPhase>,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// How often `cue` has been requested
    pub fn cue_count(&self, cue: SoundCue) -> u64 {
        self.cues.get(&cue).copied().unwrap_or(0)
    }
}

impl Presenter for LogPresenter {
    fn start(&mut self, settings: &Settings) -> Result<(), PresentError> {
        log::info!(
            "Opening {}x{} view \"{}\"",
            settings.screen_width,
            settings.screen_height,
            settings.title
        );
        Ok(())
    }

    fn present(&mut self, session: &Session, frame: &Outbox) -> Result<(), PresentError> {
        self.frames += 1;

        for cue in &frame.sounds {
            *self.cues.entry(*cue).or_insert(0) += 1;
            log::debug!(
                "play {:?} (volume {}, looped {})",
                cue,
                cue.volume(),
                cue.looped()
            );
        }

        if self.last_phase != Some(session.phase) {
            if session.phase == SessionPhase::Ended {
                log::info!("💥 Game over screen, score {}", session.score.whole());
            }
            self.last_phase = Some(session.phase);
        }

        log::trace!(
            "frame {}: {} draws, {} gates, flyer y={:.2}",
            self.frames,
            frame.draws.len(),
            frame.gate_count(),
            session.flyer.pos.y
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FramePacer, run};

    #[test]
    fn test_scripted_input_by_frame() {
        let session = Session::new(Settings {
            seed: Some(1),
            ..Default::default()
        })
        .unwrap();
        let mut input = ScriptedInput::new(vec![
            (2, InputEvent::Impulse),
            (0, InputEvent::Impulse),
            (2, InputEvent::Quit),
        ]);
        let mut events = Vec::new();

        input.poll(&session, &mut events);
        assert_eq!(events, vec![InputEvent::Impulse]);

        events.clear();
        input.poll(&session, &mut events);
        assert!(events.is_empty());

        events.clear();
        input.poll(&session, &mut events);
        assert_eq!(events, vec![InputEvent::Impulse, InputEvent::Quit]);
    }

    #[test]
    fn test_demo_loop_restarts_runs() {
        let mut session = Session::new(Settings {
            seed: Some(77),
            ..Default::default()
        })
        .unwrap();
        let mut input = AutopilotInput::new(Autopilot::new(10));
        let mut presenter = LogPresenter::new();

        // Crash on purpose: hold the flyer under the floor once
        session.flyer.pos.y = 1000.0;

        let summary = run(
            &mut session,
            &mut input,
            &mut presenter,
            &mut FramePacer::unpaced(),
            Some(60),
        )
        .unwrap();

        assert_eq!(summary.frames, 60);
        assert_eq!(presenter.frames(), 60);
        assert!(summary.runs >= 2);
        assert_eq!(presenter.cue_count(SoundCue::Music), 1);
        assert!(presenter.cue_count(SoundCue::Death) >= 1);
    }
}
