use crate::pitch::PitchClass;

/// Number of strings on the instrument.
pub const STRING_COUNT: u8 = 6;

/// Fret counts offered to players when starting a practice session.
pub const FRET_OPTIONS: [u8; 5] = [3, 5, 7, 9, 12];

/// Open-string pitch classes indexed by string number.
///
/// String 1 is the highest-pitched string by convention. The tuning is a
/// process-wide constant; [`Tuning::STANDARD`] is the only value the
/// trainer currently uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    open: [PitchClass; STRING_COUNT as usize],
}

impl Tuning {
    /// Standard guitar tuning, strings 1..=6: e B G D A E.
    pub const STANDARD: Tuning = Tuning {
        open: [
            PitchClass::E,
            PitchClass::B,
            PitchClass::G,
            PitchClass::D,
            PitchClass::A,
            PitchClass::E,
        ],
    };

    /// Open note of `string` (1..=6), or `None` for an invalid string number.
    #[must_use]
    pub fn open_note(&self, string: u8) -> Option<PitchClass> {
        if (1..=STRING_COUNT).contains(&string) {
            Some(self.open[usize::from(string) - 1])
        } else {
            None
        }
    }

    /// Display label of `string`: string 1 renders as lowercase `e` to tell
    /// it apart from the low E (string 6).
    #[must_use]
    pub fn label(&self, string: u8) -> Option<String> {
        self.open_note(string).map(|note| {
            if string == 1 {
                note.name().to_lowercase()
            } else {
                note.name().to_string()
            }
        })
    }

    /// Iterate `(string_number, open_note)` pairs, string 1 first.
    pub fn strings(&self) -> impl Iterator<Item = (u8, PitchClass)> + '_ {
        self.open
            .iter()
            .copied()
            .enumerate()
            .map(|(i, note)| (i as u8 + 1, note))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tuning_open_notes() {
        let t = Tuning::STANDARD;
        assert_eq!(t.open_note(1), Some(PitchClass::E));
        assert_eq!(t.open_note(2), Some(PitchClass::B));
        assert_eq!(t.open_note(3), Some(PitchClass::G));
        assert_eq!(t.open_note(4), Some(PitchClass::D));
        assert_eq!(t.open_note(5), Some(PitchClass::A));
        assert_eq!(t.open_note(6), Some(PitchClass::E));
    }

    #[test]
    fn test_open_note_rejects_out_of_range_strings() {
        assert_eq!(Tuning::STANDARD.open_note(0), None);
        assert_eq!(Tuning::STANDARD.open_note(7), None);
    }

    #[test]
    fn test_first_string_label_is_lowercase() {
        assert_eq!(Tuning::STANDARD.label(1).as_deref(), Some("e"));
        assert_eq!(Tuning::STANDARD.label(6).as_deref(), Some("E"));
    }

    #[test]
    fn test_strings_iterates_in_order() {
        let pairs: Vec<_> = Tuning::STANDARD.strings().collect();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], (1, PitchClass::E));
        assert_eq!(pairs[5], (6, PitchClass::E));
    }
}
