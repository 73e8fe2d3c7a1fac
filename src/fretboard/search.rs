//! Interval search over the fretboard
//!
//! A reference position is tagged with its interval above some root pitch that
//! is never named directly. The root is recovered by subtracting that interval
//! from the reference's pitch, and every grid position is then measured against it.

use crate::error::Result;
use crate::fretboard::{fretboard_pitch, fretboard_positions};
use crate::models::interval::Interval;
use crate::models::pitch::Pitch;
use crate::models::position::{FretboardInterval, FretboardPosition};
use crate::models::tuning::Tuning;
use crate::transposition::{note_interval, subtract_interval};

fn root_pitch(tuning: &Tuning, reference: FretboardInterval) -> Result<Pitch> {
    let reference_pitch = fretboard_pitch(tuning, reference.position)?;
    let root = subtract_interval(reference_pitch, reference.interval);
    log::debug!(
        "reference {} ({}) is {} above root {}",
        reference.position,
        reference_pitch,
        reference.interval,
        root
    );
    Ok(root)
}

/// Interval of `position` above the root implied by `reference`
pub fn interval_at(
    tuning: &Tuning,
    reference: FretboardInterval,
    position: FretboardPosition,
) -> Result<Interval> {
    let root = root_pitch(tuning, reference)?;
    Ok(note_interval(root, fretboard_pitch(tuning, position)?))
}

/// Every grid position paired with its interval above the reference's root
///
/// Intervals are always below an octave; a position an octave above the root
/// reads as `P1`.
pub fn all_intervals_from_root(
    tuning: &Tuning,
    reference: FretboardInterval,
) -> Result<Vec<FretboardInterval>> {
    let root = root_pitch(tuning, reference)?;
    fretboard_positions(tuning)
        .into_iter()
        .map(|position| {
            let interval = note_interval(root, fretboard_pitch(tuning, position)?);
            Ok(FretboardInterval::new(position, interval))
        })
        .collect()
}

/// Positions sitting `target` above the reference's root, in grid order
pub fn interval_search(
    tuning: &Tuning,
    reference: FretboardInterval,
    target: Interval,
) -> Result<Vec<FretboardPosition>> {
    let matches: Vec<FretboardPosition> = all_intervals_from_root(tuning, reference)?
        .into_iter()
        .filter(|candidate| candidate.interval == target)
        .map(|candidate| candidate.position)
        .collect();
    log::debug!("{} positions at {} from {}", matches.len(), target, reference.position);
    Ok(matches)
}

/// Whether a hand can get from one position to the other
///
/// Not implemented yet: always reports true. Real reachability (e.g. a maximum
/// fret span between the two positions) has no agreed semantics so far.
pub fn is_reachable(_tuning: &Tuning, _from: FretboardPosition, _to: FretboardPosition) -> bool {
    true
}
