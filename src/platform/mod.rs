//! Platform abstraction layer
//!
//! Handles host-side concerns around the simulation:
//! - Frame pacing
//! - Input events
//! - Presenting draw and sound requests
//!
//! The loop is single-threaded: drain input, tick once, present, wait.

pub mod headless;

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::settings::Settings;
use crate::sim::{InputEvent, Outbox, Session, SoundCue, TickOutcome, tick};

pub use headless::{AutopilotInput, LogPresenter, ScriptedInput};

/// Failure reported by a presenter
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PresentError(pub String);

/// Fatal host-loop failure
#[derive(Debug, Error)]
pub enum HostError {
    #[error("presenter failed to start: {0}")]
    Start(#[source] PresentError),
    #[error("presenter failed on frame {frame}: {source}")]
    Present {
        frame: u64,
        #[source]
        source: PresentError,
    },
}

/// Source of input events, polled once per frame
pub trait InputSource {
    /// Append this frame's events in arrival order
    fn poll(&mut self, session: &Session, events: &mut Vec<InputEvent>);
}

/// Consumer of the simulation's output (renderer, audio, recorder)
pub trait Presenter {
    /// Called once before the first frame
    fn start(&mut self, _settings: &Settings) -> Result<(), PresentError> {
        Ok(())
    }

    /// Show one frame. The outbox is read-only; nothing flows back.
    fn present(&mut self, session: &Session, frame: &Outbox) -> Result<(), PresentError>;
}

/// Holds the loop to the target frame rate by sleeping out each frame
#[derive(Debug)]
pub struct FramePacer {
    frame: Option<Duration>,
    last: Option<Instant>,
}

impl FramePacer {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame: Some(frame),
            last: None,
        }
    }

    /// Never waits; runs as fast as the host allows
    pub fn unpaced() -> Self {
        Self {
            frame: None,
            last: None,
        }
    }

    /// Block until at least one frame has elapsed since the previous call.
    /// A late frame is not made up for.
    pub fn wait(&mut self) {
        let Some(frame) = self.frame else {
            return;
        };
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// What a finished loop reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames presented
    pub frames: u64,
    /// Runs started, including the one in progress
    pub runs: u32,
    pub high_score: u32,
    /// True if the loop ended on a quit event rather than the frame limit
    pub quit: bool,
}

/// Run the game loop until quit or `max_frames` frames have been presented
pub fn run(
    session: &mut Session,
    input: &mut dyn InputSource,
    presenter: &mut dyn Presenter,
    pacer: &mut FramePacer,
    max_frames: Option<u64>,
) -> Result<RunSummary, HostError> {
    presenter.start(&session.settings).map_err(HostError::Start)?;
    log::info!(
        "{} running at {} fps",
        session.settings.title,
        session.settings.frame_rate
    );

    let mut events = Vec::new();
    let mut outbox = Outbox::new();
    outbox.play(SoundCue::Music);

    let mut frame = 0;
    let mut quit = false;
    while max_frames.is_none_or(|max| frame < max) {
        events.clear();
        input.poll(session, &mut events);

        if tick(session, &events, &mut outbox) == TickOutcome::Quit {
            quit = true;
            break;
        }

        presenter
            .present(session, &outbox)
            .map_err(|source| HostError::Present { frame, source })?;
        outbox.clear();
        frame += 1;

        pacer.wait();
    }

    let high_score = session.high_score.max(session.score).whole();
    Ok(RunSummary {
        frames: frame,
        runs: session.runs,
        high_score,
        quit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{DrawRequest, SessionPhase};

    fn seeded() -> Session {
        Session::new(Settings {
            seed: Some(2024),
            ..Default::default()
        })
        .unwrap()
    }

    /// Keeps every presented frame
    #[derive(Default)]
    struct Recorder {
        started: bool,
        frames: Vec<Outbox>,
    }

    impl Presenter for Recorder {
        fn start(&mut self, _settings: &Settings) -> Result<(), PresentError> {
            self.started = true;
            Ok(())
        }

        fn present(&mut self, _session: &Session, frame: &Outbox) -> Result<(), PresentError> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    struct FailsOn(usize, usize);

    impl Presenter for FailsOn {
        fn present(&mut self, _session: &Session, _frame: &Outbox) -> Result<(), PresentError> {
            self.1 += 1;
            if self.1 > self.0 {
                return Err(PresentError("display lost".to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_runs_to_frame_limit() {
        let mut session = seeded();
        let mut input = ScriptedInput::default();
        let mut recorder = Recorder::default();

        let summary = run(
            &mut session,
            &mut input,
            &mut recorder,
            &mut FramePacer::unpaced(),
            Some(30),
        )
        .unwrap();

        assert!(recorder.started);
        assert_eq!(summary.frames, 30);
        assert!(!summary.quit);
        assert_eq!(recorder.frames.len(), 30);
        assert_eq!(recorder.frames[0].draws[0], DrawRequest::Background);
        // Music is requested once, with the first frame
        assert_eq!(recorder.frames[0].sounds, vec![SoundCue::Music]);
        assert!(recorder.frames[1..].iter().all(|f| !f.sounds.contains(&SoundCue::Music)));
    }

    #[test]
    fn test_quit_ends_loop() {
        let mut session = seeded();
        let mut input = ScriptedInput::new(vec![(5, InputEvent::Quit)]);
        let mut recorder = Recorder::default();

        let summary = run(
            &mut session,
            &mut input,
            &mut recorder,
            &mut FramePacer::unpaced(),
            None,
        )
        .unwrap();

        assert!(summary.quit);
        assert_eq!(summary.frames, 5);
        assert_eq!(recorder.frames.len(), 5);
    }

    #[test]
    fn test_presenter_failure_propagates() {
        let mut session = seeded();
        let mut input = ScriptedInput::default();
        let mut presenter = FailsOn(3, 0);

        let err = run(
            &mut session,
            &mut input,
            &mut presenter,
            &mut FramePacer::unpaced(),
            Some(100),
        )
        .unwrap_err();

        match err {
            HostError::Present { frame, source } => {
                assert_eq!(frame, 3);
                assert_eq!(source.0, "display lost");
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_impulses_reach_the_session() {
        let mut session = seeded();
        let mut input = ScriptedInput::new(vec![(0, InputEvent::Impulse)]);
        let mut recorder = Recorder::default();

        run(
            &mut session,
            &mut input,
            &mut recorder,
            &mut FramePacer::unpaced(),
            Some(1),
        )
        .unwrap();

        assert_eq!(
            recorder.frames[0].sounds,
            vec![SoundCue::Music, SoundCue::Flap]
        );
        assert_eq!(session.phase, SessionPhase::Active);
    }

    #[test]
    fn test_pacer_holds_frame_rate() {
        let mut pacer = FramePacer::new(Duration::from_millis(5));
        let start = Instant::now();
        for _ in 0..4 {
            pacer.wait();
        }
        // The first call only arms the pacer
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_unpaced_never_sleeps() {
        let mut pacer = FramePacer::unpaced();
        let start = Instant::now();
        for _ in 0..1000 {
            pacer.wait();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
