//! Tuning, grid and interval search exports
//!
//! Tunings and references are passed in from JS on every call; nothing is kept
//! between calls.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, model_error, serialize};
use crate::api::types::PresetInfo;
use crate::fretboard;
use crate::models::{
    Fret, FretboardInterval, FretboardPosition, Interval, StringPosition, Tuning, TuningPreset,
};

fn tuning_from_js(tuning_js: JsValue) -> Result<Tuning, JsValue> {
    deserialize(tuning_js, "Failed to deserialize tuning")
}

fn reference_from_js(reference_js: JsValue) -> Result<FretboardInterval, JsValue> {
    deserialize(reference_js, "Failed to deserialize reference")
}

/// Get a built-in tuning by name (e.g. "StandardGuitar")
#[wasm_bindgen(js_name = tuningPreset)]
pub fn tuning_preset(name: &str) -> Result<JsValue, JsValue> {
    let preset = name.parse::<TuningPreset>().map_err(model_error)?;
    serialize(&preset.tuning(), "Failed to serialize tuning")
}

/// List every built-in tuning with its strings and fret count
#[wasm_bindgen(js_name = listTuningPresets)]
pub fn list_tuning_presets() -> Result<JsValue, JsValue> {
    let presets: Vec<PresetInfo> = TuningPreset::ALL.into_iter().map(PresetInfo::from).collect();
    serialize(&presets, "Failed to serialize presets")
}

/// Open pitch name of a string
#[wasm_bindgen(js_name = stringPitch)]
pub fn string_pitch(tuning_js: JsValue, string: StringPosition) -> Result<String, JsValue> {
    let tuning = tuning_from_js(tuning_js)?;
    let pitch = tuning.string_pitch(string).map_err(model_error)?;
    Ok(pitch.to_string())
}

/// Pitch name sounding at a string and fret
#[wasm_bindgen(js_name = fretboardPitch)]
pub fn fretboard_pitch(
    tuning_js: JsValue,
    string: StringPosition,
    fret: Fret,
) -> Result<String, JsValue> {
    let tuning = tuning_from_js(tuning_js)?;
    let pitch = fretboard::fretboard_pitch(&tuning, FretboardPosition::new(string, fret))
        .map_err(model_error)?;
    Ok(pitch.to_string())
}

/// Every `[string, fret]` position of a tuning, string-major
#[wasm_bindgen(js_name = fretboardPositions)]
pub fn fretboard_positions(tuning_js: JsValue) -> Result<JsValue, JsValue> {
    let tuning = tuning_from_js(tuning_js)?;
    serialize(&fretboard::fretboard_positions(&tuning), "Failed to serialize positions")
}

/// Every position paired with its interval above the reference's root
///
/// `reference_js` is `{ position: [string, fret], interval: semitones }`.
#[wasm_bindgen(js_name = allIntervalsFromRoot)]
pub fn all_intervals_from_root(
    tuning_js: JsValue,
    reference_js: JsValue,
) -> Result<JsValue, JsValue> {
    let tuning = tuning_from_js(tuning_js)?;
    let reference = reference_from_js(reference_js)?;
    let intervals = fretboard::all_intervals_from_root(&tuning, reference).map_err(model_error)?;
    serialize(&intervals, "Failed to serialize intervals")
}

/// Positions at `target` semitones above the reference's root
#[wasm_bindgen(js_name = intervalSearch)]
pub fn interval_search(
    tuning_js: JsValue,
    reference_js: JsValue,
    target: u8,
) -> Result<JsValue, JsValue> {
    let tuning = tuning_from_js(tuning_js)?;
    let reference = reference_from_js(reference_js)?;
    let target = Interval::from_semitones(target).map_err(model_error)?;
    let positions = fretboard::interval_search(&tuning, reference, target).map_err(model_error)?;
    serialize(&positions, "Failed to serialize positions")
}

/// Reachability between two positions (always true for now)
#[wasm_bindgen(js_name = isReachable)]
pub fn is_reachable(tuning_js: JsValue, from_js: JsValue, to_js: JsValue) -> Result<bool, JsValue> {
    let tuning = tuning_from_js(tuning_js)?;
    let from: FretboardPosition = deserialize(from_js, "Failed to deserialize position")?;
    let to: FretboardPosition = deserialize(to_js, "Failed to deserialize position")?;
    Ok(fretboard::is_reachable(&tuning, from, to))
}
