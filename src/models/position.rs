//! Fretboard coordinates
//!
//! A position is a plain (string, fret) grid coordinate. Strings are numbered from
//! 1 for the highest-pitched (thinnest) string; fret 0 is the open string.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::interval::Interval;

pub type StringPosition = u8;
pub type Fret = u8;

/// A (string, fret) coordinate. Serialized as `[string, fret]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(StringPosition, Fret)", into = "(StringPosition, Fret)")]
pub struct FretboardPosition {
    pub string: StringPosition,
    pub fret: Fret,
}

impl FretboardPosition {
    pub fn new(string: StringPosition, fret: Fret) -> Self {
        Self { string, fret }
    }
}

impl From<(StringPosition, Fret)> for FretboardPosition {
    fn from((string, fret): (StringPosition, Fret)) -> Self {
        Self { string, fret }
    }
}

impl From<FretboardPosition> for (StringPosition, Fret) {
    fn from(position: FretboardPosition) -> Self {
        (position.string, position.fret)
    }
}

impl fmt::Display for FretboardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.string, self.fret)
    }
}

/// A position tagged with its interval above an implicit root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FretboardInterval {
    pub position: FretboardPosition,
    pub interval: Interval,
}

impl FretboardInterval {
    pub fn new(position: FretboardPosition, interval: Interval) -> Self {
        Self { position, interval }
    }

    /// Reference position that is itself the root
    pub fn root(position: FretboardPosition) -> Self {
        Self::new(position, Interval::P1)
    }
}

/// Every position of a tuning, string-major then fret-minor
pub type Fretboard = Vec<FretboardPosition>;
