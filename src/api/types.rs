//! Shared types for the WASM API

use serde::{Deserialize, Serialize};

use crate::models::{Fret, Pitch, TuningPreset};

/// Summary of a built-in tuning, as listed by `listTuningPresets`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PresetInfo {
    pub name: String,
    pub strings: Vec<Pitch>,
    pub frets: Fret,
}

impl From<TuningPreset> for PresetInfo {
    fn from(preset: TuningPreset) -> Self {
        Self {
            name: preset.as_str().to_string(),
            strings: preset.open_strings().to_vec(),
            frets: preset.frets(),
        }
    }
}
