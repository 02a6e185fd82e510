/*
Note Names and Frequencies
==========================

Notes are written as a pitch class followed by an octave: `a4`, `c#3`, `bb2`.

Octave numbering starts at A, not at C. The reference row is octave 4:

    a4  = 440.00    c4  = 523.25    d#4 = 622.25    f#4 = 739.99
    a#4 = 466.16    c#4 = 554.37    e4  = 659.25    g4  = 783.99
    b4  = 493.88    d4  = 587.33    f4  = 698.46    g#4 = 830.61

so c4 sits above a4 here. Every other octave is a power-of-two shift:

    frequency = row[pitch] × 2^(octave − 4)

Flats are folded into the sharp below them. Folding can cross the octave
boundary at A: `ab4` is the same pitch as `g#3`.

Written octaves must lie in OCTAVES (-2 to 10). Outside that the table
runs off into sub-audio or overflows to infinity.

Parsing is where invalid notes are caught. A Note value always has a
frequency, so voices never deal with unknown pitches.
*/

use std::{fmt, ops::RangeInclusive, str::FromStr};

use crate::error::{Error, Result};

/// The twelve pitch classes, ordered from A upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchClass {
    A,
    As,
    B,
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
}

const PITCH_CLASSES: [PitchClass; 12] = [
    PitchClass::A,
    PitchClass::As,
    PitchClass::B,
    PitchClass::C,
    PitchClass::Cs,
    PitchClass::D,
    PitchClass::Ds,
    PitchClass::E,
    PitchClass::F,
    PitchClass::Fs,
    PitchClass::G,
    PitchClass::Gs,
];

/// Octave-4 frequencies, indexed like `PITCH_CLASSES`.
const OCTAVE_FOUR_HZ: [f64; 12] = [
    440.00, 466.16, 493.88, 523.25, 554.37, 587.33, 622.25, 659.25, 698.46, 739.99, 783.99, 830.61,
];

const REFERENCE_OCTAVE: i32 = 4;

/// Octaves accepted when parsing note text.
pub const OCTAVES: RangeInclusive<i32> = -2..=10;

impl PitchClass {
    /// Semitones above A.
    pub fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Self {
        PITCH_CLASSES[index % 12]
    }

    pub fn name(self) -> &'static str {
        match self {
            PitchClass::A => "a",
            PitchClass::As => "a#",
            PitchClass::B => "b",
            PitchClass::C => "c",
            PitchClass::Cs => "c#",
            PitchClass::D => "d",
            PitchClass::Ds => "d#",
            PitchClass::E => "e",
            PitchClass::F => "f",
            PitchClass::Fs => "f#",
            PitchClass::G => "g",
            PitchClass::Gs => "g#",
        }
    }

    fn natural(letter: char) -> Option<Self> {
        match letter {
            'a' => Some(PitchClass::A),
            'b' => Some(PitchClass::B),
            'c' => Some(PitchClass::C),
            'd' => Some(PitchClass::D),
            'e' => Some(PitchClass::E),
            'f' => Some(PitchClass::F),
            'g' => Some(PitchClass::G),
            _ => None,
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Frequency in Hz of `pitch` in `octave`.
pub fn frequency(pitch: PitchClass, octave: i32) -> f64 {
    OCTAVE_FOUR_HZ[pitch.index()] * 2.0_f64.powi(octave - REFERENCE_OCTAVE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub pitch: PitchClass,
    pub octave: i32,
}

impl Note {
    pub fn new(pitch: PitchClass, octave: i32) -> Self {
        Self { pitch, octave }
    }

    pub fn frequency(&self) -> f64 {
        frequency(self.pitch, self.octave)
    }

    /// Shift by `semitones`, carrying into the octave at A.
    ///
    /// `None` if the shifted pitch does not fit an `i32` octave.
    pub fn transpose(self, semitones: i32) -> Option<Self> {
        let absolute = self
            .octave
            .checked_mul(12)?
            .checked_add(self.pitch.index() as i32)?
            .checked_add(semitones)?;
        Some(Self {
            pitch: PitchClass::from_index(absolute.rem_euclid(12) as usize),
            octave: absolute.div_euclid(12),
        })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}

impl FromStr for Note {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let lower = text.trim().to_ascii_lowercase();
        let mut chars = lower.chars();

        let letter = chars
            .next()
            .ok_or_else(|| Error::MalformedNote(text.to_string()))?;
        let pitch = PitchClass::natural(letter)
            .ok_or_else(|| Error::UnknownPitchClass(letter.to_string()))?;

        let rest = chars.as_str();
        // Octaves are digits, so a `b` right after the letter is always a flat
        let (accidental, octave_text) = if let Some(octave) = rest.strip_prefix('#') {
            (1, octave)
        } else if let Some(octave) = rest.strip_prefix('b') {
            (-1, octave)
        } else {
            (0, rest)
        };

        if octave_text.starts_with(|c: char| c.is_ascii_alphabetic() || c == '#') {
            let pitch_text = lower.trim_end_matches(|c: char| c.is_ascii_digit() || c == '-');
            return Err(Error::UnknownPitchClass(pitch_text.to_string()));
        }

        let malformed = || Error::MalformedNote(text.to_string());
        let octave: i32 = octave_text.parse().map_err(|_| malformed())?;
        if !OCTAVES.contains(&octave) {
            return Err(malformed());
        }

        Note::new(pitch, octave)
            .transpose(accidental)
            .ok_or_else(malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(text: &str) -> Note {
        text.parse().unwrap()
    }

    #[test]
    fn a4_is_440() {
        assert_eq!(note("a4").frequency(), 440.0);
    }

    #[test]
    fn octave_four_row_matches_table() {
        assert_eq!(note("c4").frequency(), 523.25);
        assert_eq!(note("f#4").frequency(), 739.99);
        assert_eq!(note("g#4").frequency(), 830.61);
    }

    #[test]
    fn octaves_are_powers_of_two() {
        assert_eq!(note("a3").frequency(), 220.0);
        assert_eq!(note("a1").frequency(), 55.0);
        assert_eq!(note("a5").frequency(), 880.0);
        assert!((note("c1").frequency() - 523.25 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(note("C#3"), note("c#3"));
        assert_eq!(note(" E2 "), Note::new(PitchClass::E, 2));
    }

    #[test]
    fn flats_fold_into_sharps() {
        assert_eq!(note("bb2"), note("a#2"));
        assert_eq!(note("eb4"), note("d#4"));
        assert_eq!(note("cb4"), note("b4"));
    }

    #[test]
    fn flat_crosses_octave_boundary_at_a() {
        assert_eq!(note("ab4"), note("g#3"));
        assert_eq!(note("g#4").transpose(1), Some(note("a5")));
    }

    #[test]
    fn transpose_overflow_is_none() {
        assert_eq!(Note::new(PitchClass::A, i32::MAX).transpose(0), None);
        assert_eq!(Note::new(PitchClass::G, i32::MAX / 12).transpose(12), None);
        assert_eq!(note("a4").transpose(-12), Some(note("a3")));
    }

    #[test]
    fn out_of_range_octaves_are_malformed() {
        for text in ["a200000000", "a1100", "c11", "a-3", "g99999999999"] {
            assert_eq!(
                text.parse::<Note>(),
                Err(Error::MalformedNote(text.to_string())),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn octave_range_edges_have_finite_frequencies() {
        for text in ["a-2", "ab-2", "g#10", "gb10"] {
            let frequency = note(text).frequency();
            assert!(frequency.is_finite() && frequency > 0.0, "{text}: {frequency}");
        }
    }

    #[test]
    fn plain_b_is_a_pitch_not_a_flat() {
        assert_eq!(note("b3"), Note::new(PitchClass::B, 3));
    }

    #[test]
    fn negative_octaves_parse() {
        assert_eq!(note("e-1"), Note::new(PitchClass::E, -1));
    }

    #[test]
    fn unknown_pitch_class_is_rejected() {
        assert_eq!(
            "h4".parse::<Note>(),
            Err(Error::UnknownPitchClass("h".to_string()))
        );
        assert_eq!(
            "ax4".parse::<Note>(),
            Err(Error::UnknownPitchClass("ax".to_string()))
        );
    }

    #[test]
    fn missing_octave_is_malformed() {
        assert_eq!("a".parse::<Note>(), Err(Error::MalformedNote("a".to_string())));
        assert_eq!("".parse::<Note>(), Err(Error::MalformedNote(String::new())));
        assert!(matches!("c#".parse::<Note>(), Err(Error::MalformedNote(_))));
        assert!(matches!("bb".parse::<Note>(), Err(Error::MalformedNote(_))));
        assert!(matches!("d4.5".parse::<Note>(), Err(Error::MalformedNote(_))));
    }

    #[test]
    fn display_round_trips() {
        for text in ["a4", "c#3", "g-1", "f#0"] {
            assert_eq!(note(text).to_string(), text);
        }
    }
}
