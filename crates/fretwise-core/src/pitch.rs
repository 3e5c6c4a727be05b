use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A pitch class in the 12-tone chromatic scale, sharp spelling.
///
/// Variants are declared in chromatic order starting at A, so the
/// discriminant doubles as the chromatic index and fret arithmetic is a
/// plain modular offset from a string's open note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchClass {
    A,
    ASharp,
    B,
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

impl PitchClass {
    /// The 12 pitch classes in chromatic order, index 0 = A.
    pub const CHROMATIC: [PitchClass; 12] = [
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
    ];

    /// Position of this pitch class within [`Self::CHROMATIC`].
    #[must_use]
    pub fn chromatic_index(self) -> usize {
        self as usize
    }

    /// Pitch class `index` semitones above A, wrapping around the octave.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::CHROMATIC[index % Self::CHROMATIC.len()]
    }

    /// The note sounding `fret_offset` semitones above this open note.
    #[must_use]
    pub fn note_at(self, fret_offset: u8) -> Self {
        Self::from_index(self.chromatic_index() + usize::from(fret_offset))
    }

    /// Canonical name, sharp spelling (`"A"`, `"A#"`, ...).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = Error;

    /// Parse one of the 12 canonical sharp-spelled names. Enharmonic input
    /// belongs in [`crate::answer::normalize`], not here.
    fn from_str(s: &str) -> Result<Self, Error> {
        Self::CHROMATIC
            .iter()
            .copied()
            .find(|pc| pc.name() == s)
            .ok_or_else(|| Error::UnknownPitchClass(s.to_string()))
    }
}
