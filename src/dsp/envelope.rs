/*
Attack/Decay Envelope
=====================

A one-shot envelope: a trigger starts a linear rise to full level, followed
immediately by a linear fall back to silence. There is no sustain and no
release, so no note-off is needed. This makes it a good fit for plucks,
percussion and pitch sweeps driven by a step sequencer.


The Shape
---------

  Level
    1.0 ┐   ╱╲
        │  ╱  ╲
        │ ╱    ╲
    0.0 └╱──────╲──────────→ Time
        t0  A    A+D

  elapsed = t - t0

  elapsed in [0, A]         level = elapsed / A
  elapsed in (A, A + D]     level = 1 - (elapsed - A) / D
  otherwise                 level = 0


Time, Not Samples
-----------------

The envelope holds no running level. Its value is a closed-form function of
the elapsed time since the last trigger, so it can be evaluated at any t and
in any order. The only state is the trigger time itself.

Retriggering overwrites t0. The previous note's decay is discarded, so a
retrigger during decay jumps back to zero (or to one when A = 0) instead of
ramping from the current level.


Zero-Length Segments
--------------------

A = 0 means the envelope is at full level the instant it is triggered. D = 0
means it drops to zero right after the attack peak. Neither case divides.
*/

/// Anything that can shape a note over time.
///
/// Voices take envelopes through this trait so the amplitude and pitch
/// shapes can be swapped without touching voice logic.
pub trait Envelope: Send {
    /// Restart the envelope at time `t`.
    fn trigger(&mut self, t: f64);

    /// Envelope level at time `t`, in `0.0..=1.0`.
    fn value(&self, t: f64) -> f64;

    /// True once the envelope has been triggered at least once.
    fn is_triggered(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttackDecay {
    attack: f64, // seconds to ramp 0 → 1
    decay: f64,  // seconds to ramp 1 → 0
    trigger_time: Option<f64>,
}

impl AttackDecay {
    /// Negative or NaN durations are treated as zero.
    pub fn new(attack: f64, decay: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            trigger_time: None,
        }
    }

    pub fn attack(&self) -> f64 {
        self.attack
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Time of the most recent trigger, if any.
    pub fn trigger_time(&self) -> Option<f64> {
        self.trigger_time
    }

    /// Total audible length after a trigger.
    pub fn length(&self) -> f64 {
        self.attack + self.decay
    }
}

impl Default for AttackDecay {
    fn default() -> Self {
        Self::new(0.01, 0.2)
    }
}

impl Envelope for AttackDecay {
    fn trigger(&mut self, t: f64) {
        self.trigger_time = Some(t);
    }

    fn value(&self, t: f64) -> f64 {
        let Some(start) = self.trigger_time else {
            return 0.0;
        };

        let elapsed = t - start;
        if elapsed < 0.0 {
            return 0.0;
        }

        let level = if elapsed <= self.attack {
            if self.attack > 0.0 {
                elapsed / self.attack
            } else {
                1.0
            }
        } else if elapsed <= self.attack + self.decay {
            // decay > 0 here, otherwise the first branch would have matched
            1.0 - (elapsed - self.attack) / self.decay
        } else {
            0.0
        };

        level.clamp(0.0, 1.0)
    }

    fn is_triggered(&self) -> bool {
        self.trigger_time.is_some()
    }
}

impl<E: Envelope + ?Sized> Envelope for Box<E> {
    fn trigger(&mut self, t: f64) {
        (**self).trigger(t)
    }

    fn value(&self, t: f64) -> f64 {
        (**self).value(t)
    }

    fn is_triggered(&self) -> bool {
        (**self).is_triggered()
    }
}
