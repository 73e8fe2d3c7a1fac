//! Pitch/interval composition
//!
//! Intervals are applied as plain semitone arithmetic mod 12. There is no
//! octave/register dimension, so a distance and its octave-equivalent are
//! indistinguishable: `note_interval` never reports anything above a major 7th.

use std::ops::{Add, Sub};

use crate::models::interval::Interval;
use crate::models::pitch::{Pitch, SEMITONES_PER_OCTAVE};

/// Transpose `pitch` up by `interval`
pub fn add_interval(pitch: Pitch, interval: Interval) -> Pitch {
    pitch.add_semitones(interval.semitones() as i32)
}

/// Transpose `pitch` down by `interval`
///
/// The interval is reduced mod 12 first, so subtracting an octave leaves the
/// pitch where it was.
pub fn subtract_interval(pitch: Pitch, interval: Interval) -> Pitch {
    Pitch::new(pitch.value() as i32 + SEMITONES_PER_OCTAVE as i32 - interval.reduced() as i32)
}

/// Ascending distance from `from` to `to`, in 0-11
pub fn note_interval(from: Pitch, to: Pitch) -> Interval {
    Interval::from_pitch_class_distance(to.value() + SEMITONES_PER_OCTAVE - from.value())
}

impl Add<Interval> for Pitch {
    type Output = Pitch;

    fn add(self, interval: Interval) -> Pitch {
        add_interval(self, interval)
    }
}

impl Sub<Interval> for Pitch {
    type Output = Pitch;

    fn sub(self, interval: Interval) -> Pitch {
        subtract_interval(self, interval)
    }
}

/// `to - from` is the interval from `from` up to `to`
impl Sub<Pitch> for Pitch {
    type Output = Interval;

    fn sub(self, from: Pitch) -> Interval {
        note_interval(from, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_interval() {
        assert_eq!(add_interval(Pitch::E, Interval::P4), Pitch::A);
        assert_eq!(add_interval(Pitch::A, Interval::m3), Pitch::C);
        assert_eq!(add_interval(Pitch::G, Interval::P8), Pitch::G);
    }

    #[test]
    fn test_subtract_interval() {
        assert_eq!(subtract_interval(Pitch::Bb, Interval::m3), Pitch::G);
        assert_eq!(subtract_interval(Pitch::C, Interval::m2), Pitch::B);
        assert_eq!(subtract_interval(Pitch::D, Interval::P1), Pitch::D);
    }

    #[test]
    fn test_subtracting_an_octave_is_a_no_op() {
        for pitch in Pitch::ALL {
            assert_eq!(subtract_interval(pitch, Interval::P8), pitch);
            assert_eq!(
                subtract_interval(pitch, Interval::P8),
                subtract_interval(pitch, Interval::P1)
            );
        }
    }

    #[test]
    fn test_note_interval() {
        assert_eq!(note_interval(Pitch::C, Pitch::G), Interval::P5);
        assert_eq!(note_interval(Pitch::G, Pitch::C), Interval::P4);
        assert_eq!(note_interval(Pitch::E, Pitch::E), Interval::P1);
    }

    #[test]
    fn test_note_interval_round_trips_add_interval() {
        for pitch in Pitch::ALL {
            for semitones in 0..12 {
                let interval = Interval::from_semitones(semitones).unwrap();
                assert_eq!(note_interval(pitch, add_interval(pitch, interval)), interval);
            }
        }
    }

    #[test]
    fn test_subtract_then_add_returns_to_pitch() {
        for pitch in Pitch::ALL {
            for semitones in 0..12 {
                let interval = Interval::from_semitones(semitones).unwrap();
                assert_eq!(add_interval(subtract_interval(pitch, interval), interval), pitch);
            }
        }
    }

    #[test]
    fn test_octave_collapses_to_unison() {
        let above = add_interval(Pitch::C, Interval::P8);
        assert_eq!(note_interval(Pitch::C, above), Interval::P1);
        assert!(Pitch::ALL
            .iter()
            .flat_map(|from| Pitch::ALL.iter().map(move |to| note_interval(*from, *to)))
            .all(|interval| interval.semitones() <= 11));
    }

    #[test]
    fn test_operators() {
        assert_eq!(Pitch::E + Interval::P4, Pitch::A);
        assert_eq!(Pitch::Bb - Interval::m3, Pitch::G);
        assert_eq!(Pitch::G - Pitch::C, Interval::P5);
    }
}
