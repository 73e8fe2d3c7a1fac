//! Pitch and interval arithmetic exports

use wasm_bindgen::prelude::*;

use crate::api::helpers::model_error;
use crate::models::{Interval, Pitch};
use crate::transposition;

fn parse_pitch(name: &str) -> Result<Pitch, JsValue> {
    name.parse::<Pitch>().map_err(model_error)
}

fn interval_from_js(semitones: u8) -> Result<Interval, JsValue> {
    Interval::from_semitones(semitones).map_err(model_error)
}

/// Transpose a pitch up by an interval
///
/// Returns the canonical pitch name, e.g. `addInterval("E", 5)` is `"A"`.
#[wasm_bindgen(js_name = addInterval)]
pub fn add_interval(pitch: &str, interval: u8) -> Result<String, JsValue> {
    let pitch = parse_pitch(pitch)?;
    let interval = interval_from_js(interval)?;
    Ok(transposition::add_interval(pitch, interval).to_string())
}

/// Transpose a pitch down by an interval (an octave counts as unison)
#[wasm_bindgen(js_name = subtractInterval)]
pub fn subtract_interval(pitch: &str, interval: u8) -> Result<String, JsValue> {
    let pitch = parse_pitch(pitch)?;
    let interval = interval_from_js(interval)?;
    Ok(transposition::subtract_interval(pitch, interval).to_string())
}

/// Ascending interval in semitones (0-11) between two pitch names
#[wasm_bindgen(js_name = noteInterval)]
pub fn note_interval(from: &str, to: &str) -> Result<u8, JsValue> {
    let from = parse_pitch(from)?;
    let to = parse_pitch(to)?;
    Ok(transposition::note_interval(from, to).semitones())
}

/// Canonical name of an interval given in semitones
#[wasm_bindgen(js_name = intervalName)]
pub fn interval_name(semitones: u8) -> Result<String, JsValue> {
    Ok(interval_from_js(semitones)?.name().to_string())
}

/// Semitones of a named interval ("P5", "d5", "tritone", ...)
#[wasm_bindgen(js_name = parseInterval)]
pub fn parse_interval(name: &str) -> Result<u8, JsValue> {
    name.parse::<Interval>()
        .map(Interval::semitones)
        .map_err(model_error)
}
