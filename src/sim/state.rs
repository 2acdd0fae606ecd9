//! Session state and core simulation types
//!
//! One `Session` lives for the whole process and is reset in place between
//! runs. Everything the simulation mutates is reachable from here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::{Collision, Score};
use super::flyer::Flyer;
use super::gates::{GateField, GateGenerator};
use super::output::{Outbox, SoundCue};
use crate::settings::{Settings, SettingsError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    /// Simulation running
    Active,
    /// Run ended; world frozen until the restart input
    Ended,
}

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub settings: Settings,
    /// Seed the RNG was created from
    pub seed: u64,
    pub phase: SessionPhase,
    pub flyer: Flyer,
    pub gates: GateField,
    pub score: Score,
    /// Best score at any run end
    pub high_score: Score,
    /// Simulated frames since the process started
    pub frames: u64,
    /// Number of runs started, including the current one
    pub runs: u32,
    #[serde(skip)]
    pub(crate) generator: GateGenerator,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl Session {
    /// Create a session from validated settings; draws a random seed if the
    /// settings have none
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Starting session with seed {}", seed);

        Ok(Self {
            seed,
            phase: SessionPhase::Active,
            flyer: Flyer::new(&settings),
            gates: GateField::new(&settings),
            score: Score::default(),
            high_score: Score::default(),
            frames: 0,
            runs: 1,
            generator: GateGenerator::new(&settings),
            rng: Pcg32::seed_from_u64(seed),
            settings,
        })
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    /// Impulse while active: overwrite the velocity and request the flap cue
    pub fn flap(&mut self, outbox: &mut Outbox) {
        debug_assert!(self.is_active());
        self.flyer.apply_impulse(self.settings.flap_power);
        outbox.play(SoundCue::Flap);
    }

    /// Active -> Ended. Records the high score at this moment.
    pub fn end(&mut self, cause: Collision) {
        if !self.is_active() {
            return;
        }
        self.high_score = self.high_score.max(self.score);
        self.phase = SessionPhase::Ended;
        log::info!(
            "Game over ({:?}) - score {}, best {}",
            cause,
            self.score.whole(),
            self.high_score.whole()
        );
    }

    /// Ended -> Active. Flyer back to start, no gates, score zero.
    pub fn reset(&mut self) {
        self.flyer.reset();
        self.gates.clear();
        self.score.reset();
        self.phase = SessionPhase::Active;
        self.runs += 1;
        log::info!("Run {} started", self.runs);
    }

    /// Copy of the current state for readers outside the loop
    pub fn snapshot(&self) -> Session {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Session {
        Session::new(Settings {
            seed: Some(12345),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_session_is_active_and_empty() {
        let session = seeded();
        assert_eq!(session.phase, SessionPhase::Active);
        assert_eq!(session.seed, 12345);
        assert!(session.gates.is_empty());
        assert_eq!(session.score.halves(), 0);
        assert_eq!(session.flyer.pos, session.settings.flyer_start);
        assert_eq!(session.flyer.vel, 0.0);
    }

    #[test]
    fn test_end_records_high_score() {
        let mut session = seeded();
        for _ in 0..6 {
            session.score.add_half();
        }
        session.end(Collision::Floor);
        assert_eq!(session.phase, SessionPhase::Ended);
        assert_eq!(session.high_score.whole(), 3);

        session.reset();
        session.score.add_half();
        session.score.add_half();
        session.end(Collision::Ceiling);
        // Lower score does not replace the best
        assert_eq!(session.high_score.whole(), 3);
    }

    #[test]
    fn test_end_is_one_shot() {
        let mut session = seeded();
        session.score.add_half();
        session.end(Collision::Floor);
        session.score.add_half();
        session.score.add_half();
        session.end(Collision::Floor);
        assert_eq!(session.high_score.halves(), 1);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut session = seeded();
        let mut outbox = Outbox::new();
        session.flap(&mut outbox);
        session.flyer.integrate(session.settings.gravity);
        session.gates.push_pair(session.generator.pair_at(300.0));
        session.score.add_half();
        session.end(Collision::Gate { index: 0 });

        session.reset();
        assert_eq!(session.phase, SessionPhase::Active);
        assert!(session.gates.is_empty());
        assert_eq!(session.score, Score::default());
        assert_eq!(session.flyer, Flyer::new(&session.settings));
        assert_eq!(session.runs, 2);
    }

    #[test]
    fn test_flap_requests_cue() {
        let mut session = seeded();
        let mut outbox = Outbox::new();
        session.flap(&mut outbox);
        assert_eq!(session.flyer.vel, session.settings.flap_power);
        assert_eq!(outbox.sounds, vec![SoundCue::Flap]);
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let result = Session::new(Settings {
            gravity: -0.25,
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(SettingsError::Invalid {
                field: "gravity",
                ..
            })
        ));
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = seeded();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["phase"], "Active");
        assert_eq!(json["seed"], 12345);
        assert!(json.get("rng").is_none());
    }
}
