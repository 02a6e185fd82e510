/*
Step Patterns
=============

A pattern is a fixed loop of steps. Each step either plays a note or rests:

    a3 . . .  c3 . g2 e2

The textual form is whitespace separated. `.`, `_`, `-` and `~` are rests;
any other token must be a note (see `notes`). A pattern has at least one
step and never changes after it is built, which is what lets the sequencer
index it with `step % len` without further checks.
*/

use std::{fmt, str::FromStr};

use super::notes::Note;
use crate::error::{Error, Result};

/// A single slot in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Note(Note),
    Rest,
}

impl Step {
    pub fn note(&self) -> Option<Note> {
        match self {
            Step::Note(note) => Some(*note),
            Step::Rest => None,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, Step::Rest)
    }
}

impl From<Note> for Step {
    fn from(note: Note) -> Self {
        Step::Note(note)
    }
}

impl From<Option<Note>> for Step {
    fn from(note: Option<Note>) -> Self {
        note.map_or(Step::Rest, Step::Note)
    }
}

const REST_TOKENS: [&str; 4] = [".", "_", "-", "~"];

impl FromStr for Step {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        if REST_TOKENS.contains(&token) {
            Ok(Step::Rest)
        } else {
            token.parse().map(Step::Note)
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Note(note) => write!(f, "{note}"),
            Step::Rest => f.write_str("."),
        }
    }
}

/// A non-empty, immutable loop of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    steps: Vec<Step>,
}

impl Pattern {
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(Self { steps })
    }

    /// Build from optional note names, `None` being a rest.
    ///
    /// ```ignore
    /// let pattern = Pattern::from_steps([Some("a3"), None, None, None])?;
    /// ```
    pub fn from_steps<I, S>(steps: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let steps = steps
            .into_iter()
            .map(|step| match step {
                Some(name) => name.as_ref().parse().map(Step::Note),
                None => Ok(Step::Rest),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(steps)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`, wrapping around the loop.
    pub fn step(&self, index: usize) -> Step {
        self.steps[index % self.steps.len()]
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps that play a note.
    pub fn note_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.is_rest()).count()
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let steps = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Step>>>()?;
        Self::new(steps)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
