//! Step sequencer - time-driven pattern playback
//!
//! The sequencer has no clock of its own. Every call to [`StepSequencer::run`]
//! maps the absolute time onto the sixteenth-note grid:
//!
//! ```text
//! step = floor(t × bpm / 15) mod len      (15 = 60 s / 4 steps per beat)
//! ```
//!
//! and fires the step's note into the target when the step index differs
//! from the last one seen. Repeated calls inside the same step are no-ops.
//!
//! Steps are only noticed when `run` is called while they are current. The
//! engine calls it once per output sample, which is far finer than any
//! musical step. Steps skipped by sparser polling are not caught up.

use tracing::{debug, trace};

use super::{notes::Note, pattern::Pattern};
use crate::{
    error::{Error, Result},
    graph::NoteReceiver,
    SECONDS_PER_MINUTE, STEPS_PER_BEAT,
};

#[derive(Debug, Clone)]
pub struct StepSequencer {
    pattern: Pattern,
    bpm: f64,
    /// Last step index seen; `None` until the first `run`.
    last_step: Option<usize>,
}

impl StepSequencer {
    pub fn new(bpm: f64, pattern: Pattern) -> Result<Self> {
        if !bpm.is_finite() || bpm <= 0.0 {
            return Err(Error::InvalidTempo(bpm));
        }

        debug!(bpm, steps = pattern.len(), "step sequencer created");
        Ok(Self {
            pattern,
            bpm,
            last_step: None,
        })
    }

    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Seconds per step.
    pub fn step_duration(&self) -> f64 {
        SECONDS_PER_MINUTE / (self.bpm * STEPS_PER_BEAT)
    }

    /// Step index current at time `t`.
    pub fn step_at(&self, t: f64) -> usize {
        let divisor = SECONDS_PER_MINUTE / STEPS_PER_BEAT;
        let absolute = (t * self.bpm / divisor).floor() as i64;
        absolute.rem_euclid(self.pattern.len() as i64) as usize
    }

    /// Last step index seen by `run`.
    pub fn current_step(&self) -> Option<usize> {
        self.last_step
    }

    /// Advance to the step current at `t`, firing its note into `target` on
    /// a step change. Returns the note that fired, if any.
    pub fn run<R>(&mut self, t: f64, target: &mut R) -> Option<Note>
    where
        R: NoteReceiver + ?Sized,
    {
        let step = self.step_at(t);
        if self.last_step == Some(step) {
            return None;
        }
        self.last_step = Some(step);

        let note = self.pattern.step(step).note()?;
        trace!(t, step, %note, "step fired");
        target.note_on(t, note);
        Some(note)
    }
}
