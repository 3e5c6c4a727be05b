//! Free-text answer normalization.

/// Enharmonic respellings accepted as answers, mapped to the canonical
/// sharp spelling. B# and E# wrap to the next natural. Keys are compared
/// after trimming and uppercasing the input.
const RESPELLINGS: [(&str, &str); 7] = [
    ("BB", "A#"),
    ("DB", "C#"),
    ("EB", "D#"),
    ("GB", "F#"),
    ("AB", "G#"),
    ("B#", "C"),
    ("E#", "F"),
];

/// Normalize a free-text note answer: trim, uppercase, respell flats and
/// the B#/E# edge cases.
///
/// Unrecognized input passes through uppercased. It will simply fail the
/// comparison against the correct note, which is the intended wrong-answer
/// path rather than an error.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    for (from, to) in RESPELLINGS {
        if upper == from {
            return to.to_string();
        }
    }
    upper
}
