//! Named intervals over the chromatic space
//!
//! See https://en.wikipedia.org/wiki/Interval_(music)#Main_intervals
//!
//! An `Interval` is a semitone distance from 0 (unison) to 12 (octave). Several
//! names alias the same distance, e.g. the augmented fourth, the tritone and the
//! diminished fifth are all 6. Only the numeric value is compared.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FretboardError;
use crate::models::pitch::SEMITONES_PER_OCTAVE;

/// Largest representable interval (the octave)
pub const MAX_INTERVAL: u8 = 12;

/// Every accepted interval name, grouped by semitones.
/// The first name of each group is the canonical display name.
const INTERVAL_NAMES: [(u8, &[&str]); 13] = [
    (0, &["P1", "d2", "unison"]),
    (1, &["m2", "A1"]),
    (2, &["M2", "d3"]),
    (3, &["m3", "A2"]),
    (4, &["M3", "d4"]),
    (5, &["P4", "A3"]),
    (6, &["TT", "d5", "A4", "tritone"]),
    (7, &["P5", "d6"]),
    (8, &["m6", "A5"]),
    (9, &["M6", "d7"]),
    (10, &["m7", "A6"]),
    (11, &["M7", "d8"]),
    (12, &["P8", "A7", "octave"]),
];

// Case-sensitive: "m3" and "M3" are different intervals
static INTERVAL_INDEX: Lazy<HashMap<&'static str, Interval>> = Lazy::new(|| {
    INTERVAL_NAMES
        .iter()
        .flat_map(|(semitones, names)| names.iter().map(move |name| (*name, Interval(*semitones))))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Interval(u8);

#[allow(non_upper_case_globals)]
impl Interval {
    pub const P1: Interval = Interval(0);
    pub const d2: Interval = Interval(0);
    pub const m2: Interval = Interval(1);
    pub const A1: Interval = Interval(1);
    pub const M2: Interval = Interval(2);
    pub const d3: Interval = Interval(2);
    pub const m3: Interval = Interval(3);
    pub const A2: Interval = Interval(3);
    pub const M3: Interval = Interval(4);
    pub const d4: Interval = Interval(4);
    pub const P4: Interval = Interval(5);
    pub const A3: Interval = Interval(5);
    pub const d5: Interval = Interval(6);
    pub const TT: Interval = Interval(6);
    pub const A4: Interval = Interval(6);
    pub const P5: Interval = Interval(7);
    pub const d6: Interval = Interval(7);
    pub const m6: Interval = Interval(8);
    pub const A5: Interval = Interval(8);
    pub const M6: Interval = Interval(9);
    pub const d7: Interval = Interval(9);
    pub const m7: Interval = Interval(10);
    pub const A6: Interval = Interval(10);
    pub const M7: Interval = Interval(11);
    pub const d8: Interval = Interval(11);
    pub const P8: Interval = Interval(12);
    pub const A7: Interval = Interval(12);

    /// Build an interval from a semitone count in 0-12
    pub fn from_semitones(semitones: u8) -> Result<Interval, FretboardError> {
        if semitones > MAX_INTERVAL {
            return Err(FretboardError::IntervalOutOfRange(semitones));
        }
        Ok(Interval(semitones))
    }

    /// Interval between two pitch classes; always below an octave
    pub(crate) fn from_pitch_class_distance(semitones: u8) -> Interval {
        Interval(semitones % SEMITONES_PER_OCTAVE)
    }

    /// Semitone count, octave included (0-12)
    pub fn semitones(self) -> u8 {
        self.0
    }

    /// Semitone count reduced mod 12, so the octave becomes 0
    pub fn reduced(self) -> u8 {
        self.0 % SEMITONES_PER_OCTAVE
    }

    /// Canonical display name
    pub fn name(self) -> &'static str {
        INTERVAL_NAMES[self.0 as usize].1[0]
    }

    /// Every name accepted for this interval, canonical name first
    pub fn aliases(self) -> &'static [&'static str] {
        INTERVAL_NAMES[self.0 as usize].1
    }
}

impl TryFrom<u8> for Interval {
    type Error = FretboardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Interval::from_semitones(value)
    }
}

impl From<Interval> for u8 {
    fn from(interval: Interval) -> Self {
        interval.0
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Interval {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Some(interval) = INTERVAL_INDEX.get(name) {
            return Ok(*interval);
        }
        // Long names are matched without regard to case
        INTERVAL_INDEX
            .get(name.to_lowercase().as_str())
            .filter(|_| name.len() > 2)
            .copied()
            .ok_or_else(|| FretboardError::UnknownIntervalName(s.to_string()))
    }
}
