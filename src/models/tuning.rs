//! Instrument tunings
//!
//! A tuning gives the open pitch of each string plus a fret count shared by all
//! strings. Every string from 1 up to the string count always has a pitch; asking
//! for any other string fails with `UnknownString`.
//!
//! Note: the grid is rectangular, so instruments with short strings (a 5-string
//! banjo's drone string, for one) are not modelled.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{FretboardError, Result};
use crate::models::pitch::Pitch;
use crate::models::position::{Fret, StringPosition};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TuningFields")]
pub struct Tuning {
    /// Open pitch per string; `strings[0]` is string 1 (the highest)
    strings: Vec<Pitch>,
    /// Highest fret on every string
    frets: Fret,
}

/// Unvalidated wire shape of a `Tuning`
#[derive(Deserialize)]
struct TuningFields {
    strings: Vec<Pitch>,
    frets: Fret,
}

impl TryFrom<TuningFields> for Tuning {
    type Error = FretboardError;

    fn try_from(fields: TuningFields) -> Result<Self> {
        Tuning::new(fields.strings, fields.frets)
    }
}

impl Tuning {
    /// Build a tuning from open pitches, highest string first
    ///
    /// Every string must be addressable by a `StringPosition`, so at most 255
    /// strings are accepted.
    pub fn new(strings: Vec<Pitch>, frets: Fret) -> Result<Self> {
        if strings.len() > StringPosition::MAX as usize {
            return Err(FretboardError::TooManyStrings(strings.len()));
        }
        Ok(Self { strings, frets })
    }

    /// Build a tuning from an explicit string → pitch map
    ///
    /// The map must declare exactly the strings 1 to its size. A key outside
    /// that range is reported as `UnknownString`.
    pub fn from_map(strings: &BTreeMap<StringPosition, Pitch>, frets: Fret) -> Result<Self> {
        let count = strings.len();
        if let Some(&string) = strings
            .keys()
            .find(|&&string| string == 0 || string as usize > count)
        {
            return Err(FretboardError::UnknownString(string));
        }
        // Keys are distinct and all in 1..=count, so they are exactly 1..=count
        Self::new(strings.values().copied().collect(), frets)
    }

    /// Same strings, limited to `frets` frets
    pub fn with_frets(&self, frets: Fret) -> Self {
        Self {
            strings: self.strings.clone(),
            frets,
        }
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// String numbers from 1 to the string count
    pub fn string_positions(&self) -> RangeInclusive<StringPosition> {
        // `new` caps the string count at StringPosition::MAX
        1..=self.strings.len() as StringPosition
    }

    pub fn frets(&self) -> Fret {
        self.frets
    }

    /// Open pitches, highest string first
    pub fn open_strings(&self) -> &[Pitch] {
        &self.strings
    }

    /// Open pitch of `string`
    pub fn string_pitch(&self, string: StringPosition) -> Result<Pitch> {
        (string as usize)
            .checked_sub(1)
            .and_then(|index| self.strings.get(index))
            .copied()
            .ok_or_else(|| {
                log::warn!("No string {} in a {}-string tuning", string, self.strings.len());
                FretboardError::UnknownString(string)
            })
    }
}

const STANDARD_GUITAR_STRINGS: [Pitch; 6] =
    [Pitch::E, Pitch::B, Pitch::G, Pitch::D, Pitch::A, Pitch::E];
const DROP_D_STRINGS: [Pitch; 6] =
    [Pitch::E, Pitch::B, Pitch::G, Pitch::D, Pitch::A, Pitch::D];
const STANDARD_BASS_STRINGS: [Pitch; 4] = [Pitch::G, Pitch::D, Pitch::A, Pitch::E];
const UKULELE_STRINGS: [Pitch; 4] = [Pitch::A, Pitch::E, Pitch::C, Pitch::G];

/// Built-in tunings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TuningPreset {
    StandardGuitar,
    DropD,
    StandardBass,
    Ukulele,
}

impl TuningPreset {
    pub const ALL: [TuningPreset; 4] = [
        TuningPreset::StandardGuitar,
        TuningPreset::DropD,
        TuningPreset::StandardBass,
        TuningPreset::Ukulele,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TuningPreset::StandardGuitar => "StandardGuitar",
            TuningPreset::DropD => "DropD",
            TuningPreset::StandardBass => "StandardBass",
            TuningPreset::Ukulele => "Ukulele",
        }
    }

    pub fn open_strings(&self) -> &'static [Pitch] {
        match self {
            TuningPreset::StandardGuitar => &STANDARD_GUITAR_STRINGS,
            TuningPreset::DropD => &DROP_D_STRINGS,
            TuningPreset::StandardBass => &STANDARD_BASS_STRINGS,
            TuningPreset::Ukulele => &UKULELE_STRINGS,
        }
    }

    pub fn frets(&self) -> Fret {
        match self {
            TuningPreset::StandardGuitar | TuningPreset::DropD => 15,
            TuningPreset::StandardBass => 20,
            TuningPreset::Ukulele => 12,
        }
    }

    pub fn tuning(&self) -> Tuning {
        Tuning {
            strings: self.open_strings().to_vec(),
            frets: self.frets(),
        }
    }

    /// Comma-separated preset names, for error messages
    pub fn expected_names() -> String {
        TuningPreset::ALL
            .iter()
            .map(TuningPreset::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<TuningPreset> for Tuning {
    fn from(preset: TuningPreset) -> Self {
        preset.tuning()
    }
}

impl fmt::Display for TuningPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TuningPreset {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self> {
        TuningPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FretboardError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_guitar_strings() {
        let tuning = TuningPreset::StandardGuitar.tuning();
        assert_eq!(tuning.string_count(), 6);
        assert_eq!(tuning.frets(), 15);
        assert_eq!(tuning.string_pitch(1).unwrap(), Pitch::E);
        assert_eq!(tuning.string_pitch(2).unwrap(), Pitch::B);
        assert_eq!(tuning.string_pitch(3).unwrap(), Pitch::G);
        assert_eq!(tuning.string_pitch(4).unwrap(), Pitch::D);
        assert_eq!(tuning.string_pitch(5).unwrap(), Pitch::A);
        assert_eq!(tuning.string_pitch(6).unwrap(), Pitch::E);
    }

    #[test]
    fn test_unknown_string() {
        let tuning = TuningPreset::StandardGuitar.tuning();
        assert_eq!(tuning.string_pitch(7), Err(FretboardError::UnknownString(7)));
        assert_eq!(tuning.string_pitch(0), Err(FretboardError::UnknownString(0)));
        assert_eq!(
            FretboardError::UnknownString(7).to_string(),
            "No string 7"
        );
    }

    #[test]
    fn test_from_map() {
        let strings: BTreeMap<StringPosition, Pitch> =
            [(2, Pitch::E), (1, Pitch::A), (3, Pitch::C)].into_iter().collect();
        let tuning = Tuning::from_map(&strings, 12).unwrap();
        assert_eq!(tuning.open_strings(), &[Pitch::A, Pitch::E, Pitch::C]);
    }

    #[test]
    fn test_from_map_rejects_gaps() {
        let strings: BTreeMap<StringPosition, Pitch> =
            [(1, Pitch::E), (2, Pitch::B), (4, Pitch::D)].into_iter().collect();
        assert_eq!(
            Tuning::from_map(&strings, 12),
            Err(FretboardError::UnknownString(4))
        );
    }

    #[test]
    fn test_from_map_rejects_string_zero() {
        let strings: BTreeMap<StringPosition, Pitch> =
            [(0, Pitch::E), (1, Pitch::B)].into_iter().collect();
        assert_eq!(
            Tuning::from_map(&strings, 12),
            Err(FretboardError::UnknownString(0))
        );
    }

    #[test]
    fn test_new_limits_string_count() {
        let widest = Tuning::new(vec![Pitch::E; 255], 0).unwrap();
        assert_eq!(widest.string_count(), 255);
        assert_eq!(widest.string_positions(), 1..=255);

        assert_eq!(
            Tuning::new(vec![Pitch::E; 300], 0),
            Err(FretboardError::TooManyStrings(300))
        );
    }

    #[test]
    fn test_string_positions() {
        let tuning = TuningPreset::Ukulele.tuning();
        assert_eq!(tuning.string_positions().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        let empty = Tuning::new(Vec::new(), 12).unwrap();
        assert_eq!(empty.string_positions().count(), 0);
    }

    #[test]
    fn test_with_frets_keeps_strings() {
        let full = TuningPreset::StandardGuitar.tuning();
        let short = full.with_frets(5);
        assert_eq!(short.frets(), 5);
        assert_eq!(short.open_strings(), full.open_strings());
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!(
            "StandardGuitar".parse::<TuningPreset>().unwrap(),
            TuningPreset::StandardGuitar
        );
        assert_eq!("dropd".parse::<TuningPreset>().unwrap(), TuningPreset::DropD);
        assert!("Banjo".parse::<TuningPreset>().is_err());
        for preset in TuningPreset::ALL {
            assert_eq!(preset.to_string().parse::<TuningPreset>().unwrap(), preset);
        }
    }

    #[test]
    fn test_unknown_preset_lists_every_preset() {
        let message = FretboardError::UnknownPreset("Banjo".to_string()).to_string();
        assert!(message.starts_with("unknown tuning preset: 'Banjo'"));
        for preset in TuningPreset::ALL {
            assert!(message.contains(preset.as_str()), "{} missing from: {}", preset, message);
        }
    }

    #[test]
    fn test_tuning_serde_shape() {
        let tuning = TuningPreset::StandardBass.tuning();
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(json, r#"{"strings":["G","D","A","E"],"frets":20}"#);

        let parsed: Tuning =
            serde_json::from_str(r#"{"strings":["E","B","G","D","A","E"],"frets":5}"#).unwrap();
        assert_eq!(parsed, TuningPreset::StandardGuitar.tuning().with_frets(5));
    }

    #[test]
    fn test_tuning_deserialize_limits_string_count() {
        let strings = vec!["E"; 256];
        let json = serde_json::json!({ "strings": strings, "frets": 0 }).to_string();
        let err = serde_json::from_str::<Tuning>(&json).unwrap_err();
        assert!(err.to_string().contains("tuning has 256 strings"));
    }
}
