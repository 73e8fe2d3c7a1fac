//! Error type shared by the theory model, the fretboard search and the WASM API

use thiserror::Error;

use crate::models::position::StringPosition;
use crate::models::tuning::TuningPreset;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretboardError {
    /// The tuning has no open pitch for this string
    #[error("No string {0}")]
    UnknownString(StringPosition),
    #[error("unknown pitch name: '{0}'")]
    UnknownPitchName(String),
    #[error("unknown interval name: '{0}'")]
    UnknownIntervalName(String),
    #[error("interval out of range: {0} (must be 0-12)")]
    IntervalOutOfRange(u8),
    #[error(
        "unknown tuning preset: '{0}'. Expected one of: {expected}",
        expected = TuningPreset::expected_names()
    )]
    UnknownPreset(String),
    /// String positions are `u8`, so a tuning holds at most 255 strings
    #[error("tuning has {0} strings (at most {max})", max = StringPosition::MAX)]
    TooManyStrings(usize),
}

pub type Result<T> = std::result::Result<T, FretboardError>;
