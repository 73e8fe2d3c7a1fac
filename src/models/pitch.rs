//! Pitch classes of the 12-tone chromatic space
//!
//! A `Pitch` is one of twelve octave-agnostic tone classes, C = 0 up to B = 11.
//! Enharmonic spellings (C# and Db, Fb and E, ...) are separate names for the same
//! canonical value and cannot be told apart once resolved.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FretboardError;

/// Number of pitch classes in the chromatic space
pub const SEMITONES_PER_OCTAVE: u8 = 12;

/// Canonical display name for each pitch class, indexed by value
const CANONICAL_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Letter names and their natural pitch class
const LETTERS: [(char, u8); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];

/// Accidental spellings and their semitone offset
const ACCIDENTALS: [(&str, i32); 8] = [
    ("", 0),
    ("#", 1),
    ("s", 1),
    ("♯", 1),
    ("##", 2),
    ("b", -1),
    ("♭", -1),
    ("bb", -2),
];

/// Upper-cased name → canonical pitch, covering every letter/accidental combination
static PITCH_NAMES: Lazy<HashMap<String, Pitch>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for (letter, base) in LETTERS {
        for (accidental, offset) in ACCIDENTALS {
            let name = format!("{}{}", letter, accidental).to_uppercase();
            table.insert(name, Pitch::new(base as i32 + offset));
        }
    }
    table
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch(u8);

#[allow(non_upper_case_globals)]
impl Pitch {
    pub const C: Pitch = Pitch(0);
    pub const Bs: Pitch = Pitch(0);
    pub const Cs: Pitch = Pitch(1);
    pub const Db: Pitch = Pitch(1);
    pub const D: Pitch = Pitch(2);
    pub const Ds: Pitch = Pitch(3);
    pub const Eb: Pitch = Pitch(3);
    pub const E: Pitch = Pitch(4);
    pub const Fb: Pitch = Pitch(4);
    pub const F: Pitch = Pitch(5);
    pub const Es: Pitch = Pitch(5);
    pub const Fs: Pitch = Pitch(6);
    pub const Gb: Pitch = Pitch(6);
    pub const G: Pitch = Pitch(7);
    pub const Gs: Pitch = Pitch(8);
    pub const Ab: Pitch = Pitch(8);
    pub const A: Pitch = Pitch(9);
    pub const As: Pitch = Pitch(10);
    pub const Bb: Pitch = Pitch(10);
    pub const B: Pitch = Pitch(11);
    pub const Cb: Pitch = Pitch(11);

    /// All twelve pitch classes in ascending order from C
    pub const ALL: [Pitch; 12] = [
        Pitch(0),
        Pitch(1),
        Pitch(2),
        Pitch(3),
        Pitch(4),
        Pitch(5),
        Pitch(6),
        Pitch(7),
        Pitch(8),
        Pitch(9),
        Pitch(10),
        Pitch(11),
    ];

    /// Build a pitch from any semitone count, reduced into 0-11
    pub fn new(semitones: i32) -> Pitch {
        Pitch(semitones.rem_euclid(SEMITONES_PER_OCTAVE as i32) as u8)
    }

    /// Canonical integer value (0-11)
    pub fn value(self) -> u8 {
        self.0
    }

    /// Move up (or down, for negative `n`) by `n` semitones
    pub fn add_semitones(self, n: i32) -> Pitch {
        // Reduce first so the sum stays far from i32 overflow
        Pitch::new(self.0 as i32 + n.rem_euclid(SEMITONES_PER_OCTAVE as i32))
    }

    /// Canonical display name, sharps preferred
    pub fn name(self) -> &'static str {
        CANONICAL_NAMES[self.0 as usize]
    }
}

impl From<u8> for Pitch {
    fn from(value: u8) -> Self {
        Pitch::new(value as i32)
    }
}

impl From<Pitch> for u8 {
    fn from(pitch: Pitch) -> Self {
        pitch.0
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.name().to_string()
    }
}

impl TryFrom<String> for Pitch {
    type Error = FretboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Pitch {
    type Err = FretboardError;

    /// Case-insensitive on the letter: "F#", "f#", "Fs", "F♯" and "Gb" all give F#
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PITCH_NAMES
            .get(&s.trim().to_uppercase())
            .copied()
            .ok_or_else(|| FretboardError::UnknownPitchName(s.to_string()))
    }
}
