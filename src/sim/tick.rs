//! Fixed timestep simulation tick
//!
//! One call per frame: apply input, advance the world once if the run is
//! active, then emit the frame's draw requests.

use glam::Vec2;

use super::collision::{PlayBounds, detect_collision, update_score};
use super::output::{DrawRequest, Outbox, SoundCue, TextLabel};
use super::state::{Session, SessionPhase};

/// Logical input events, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Stop the loop immediately
    Quit,
    /// Flap while active, restart while ended
    Impulse,
}

/// Whether the host loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the session by one frame and fill `outbox` with its output
pub fn tick(session: &mut Session, events: &[InputEvent], outbox: &mut Outbox) -> TickOutcome {
    let mut restarted = false;
    for event in events {
        match event {
            InputEvent::Quit => {
                log::info!("Quit requested after {} frames", session.frames);
                return TickOutcome::Quit;
            }
            InputEvent::Impulse => match session.phase {
                SessionPhase::Active => session.flap(outbox),
                SessionPhase::Ended => {
                    session.reset();
                    restarted = true;
                }
            },
        }
    }

    // The restart frame shows the fresh world without advancing it
    if session.is_active() && !restarted {
        step(session, outbox);
    }

    render(session, outbox);
    TickOutcome::Continue
}

/// One frame of active play: physics, gates, collision, scoring, animation
fn step(session: &mut Session, outbox: &mut Outbox) {
    session.frames += 1;

    let settings = &session.settings;
    session.flyer.integrate(settings.gravity);
    session.gates.advance(settings.gate_speed);
    session
        .gates
        .maybe_spawn(&session.generator, &mut session.rng);

    let bounds = PlayBounds::new(settings);
    if let Some(cause) = detect_collision(&session.flyer.bounds(), session.gates.rects(), &bounds) {
        outbox.play(SoundCue::Hit);
        outbox.play(SoundCue::Death);
        session.end(cause);
        return;
    }

    update_score(
        session.flyer.pos.x,
        session.gates.rects(),
        settings.scoring,
        settings.gate_speed,
        &mut session.score,
        outbox,
    );

    session.flyer.tick_animation();
}

/// Emit the frame back to front: background, gates, flyer, score, overlay
pub fn render(session: &Session, outbox: &mut Outbox) {
    let settings = &session.settings;

    outbox.draw(DrawRequest::Background);

    for rect in session.gates.iter() {
        // Gates that reach the bottom edge stand upright; the rest hang down
        let flipped = rect.bottom() < settings.screen_height;
        outbox.draw(DrawRequest::Gate {
            rect: *rect,
            flipped,
        });
    }

    outbox.draw(DrawRequest::Flyer {
        center: session.flyer.pos,
        frame: session.flyer.frame,
    });

    outbox.draw(DrawRequest::Text {
        label: TextLabel::Score(session.score.whole()),
        center: Vec2::new(settings.screen_width / 2.0, settings.score_text_y),
    });

    if session.phase == SessionPhase::Ended {
        outbox.draw(DrawRequest::Text {
            label: TextLabel::GameOver,
            center: Vec2::new(settings.screen_width / 2.0, settings.screen_height / 2.0),
        });
    }
}
