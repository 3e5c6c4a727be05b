use crate::pitch::PitchClass;
use crate::tuning::{Tuning, STRING_COUNT};

/// Every note on the neck up to `max_fret`, derived from the tuning.
///
/// Fret 0 is the open string, so each string carries `max_fret + 1` notes.
/// The table is recomputed per question and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    tuning: Tuning,
    max_fret: u8,
    notes: Vec<Vec<PitchClass>>,
}

impl Fretboard {
    /// Build the complete note table for frets 0..=`max_fret`.
    #[must_use]
    pub fn new(tuning: Tuning, max_fret: u8) -> Self {
        let notes = tuning
            .strings()
            .map(|(_, open)| (0..=max_fret).map(|fret| open.note_at(fret)).collect())
            .collect();
        Self {
            tuning,
            max_fret,
            notes,
        }
    }

    #[must_use]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[must_use]
    pub fn max_fret(&self) -> u8 {
        self.max_fret
    }

    /// Note at `string` (1..=6) and `fret` (0..=max_fret), or `None` when
    /// either coordinate is out of range.
    #[must_use]
    pub fn note_at(&self, string: u8, fret: u8) -> Option<PitchClass> {
        if !(1..=STRING_COUNT).contains(&string) || fret > self.max_fret {
            return None;
        }
        Some(self.notes[usize::from(string) - 1][usize::from(fret)])
    }
}
