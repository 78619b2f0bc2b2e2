// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note spellings and enharmonic comparison.
//!
//! A note is a letter plus an optional accidental. Equality and ordering
//! are enharmonic-aware: C# and Db occupy the same pitch and compare
//! equal, while their spellings stay distinct for display.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TheoryError;
use crate::pitch::{Interval, Spelling};

/// Note letters in alphabetic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// The letter that follows this one in the musical cycle (G wraps
    /// back to A).
    pub fn next(self) -> Letter {
        match self {
            Letter::A => Letter::B,
            Letter::B => Letter::C,
            Letter::C => Letter::D,
            Letter::D => Letter::E,
            Letter::E => Letter::F,
            Letter::F => Letter::G,
            Letter::G => Letter::A,
        }
    }

    /// Parse a letter from a character, case-insensitive.
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        };
        write!(f, "{}", c)
    }
}

/// Accidentals, ordered so that flat < natural < sharp within one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
}

/// A pitch class: a letter with an optional accidental.
///
/// Only the 17 commonly used spellings exist; `Note::new` rejects the
/// rest (E#, Fb, B#, Cb). Notes are plain `Copy` values compared through
/// enharmonic-aware equality.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    letter: Letter,
    accidental: Accidental,
}

impl Note {
    pub const C: Note = Note::plain(Letter::C);
    pub const C_SHARP: Note = Note::sharp(Letter::C);
    pub const D_FLAT: Note = Note::flat(Letter::D);
    pub const D: Note = Note::plain(Letter::D);
    pub const D_SHARP: Note = Note::sharp(Letter::D);
    pub const E_FLAT: Note = Note::flat(Letter::E);
    pub const E: Note = Note::plain(Letter::E);
    pub const F: Note = Note::plain(Letter::F);
    pub const F_SHARP: Note = Note::sharp(Letter::F);
    pub const G_FLAT: Note = Note::flat(Letter::G);
    pub const G: Note = Note::plain(Letter::G);
    pub const G_SHARP: Note = Note::sharp(Letter::G);
    pub const A_FLAT: Note = Note::flat(Letter::A);
    pub const A: Note = Note::plain(Letter::A);
    pub const A_SHARP: Note = Note::sharp(Letter::A);
    pub const B_FLAT: Note = Note::flat(Letter::B);
    pub const B: Note = Note::plain(Letter::B);

    /// The 17 catalog spellings in ascending pitch order from C.
    pub const ALL: [Note; 17] = [
        Note::C,
        Note::C_SHARP,
        Note::D_FLAT,
        Note::D,
        Note::D_SHARP,
        Note::E_FLAT,
        Note::E,
        Note::F,
        Note::F_SHARP,
        Note::G_FLAT,
        Note::G,
        Note::G_SHARP,
        Note::A_FLAT,
        Note::A,
        Note::A_SHARP,
        Note::B_FLAT,
        Note::B,
    ];

    const fn plain(letter: Letter) -> Note {
        Note {
            letter,
            accidental: Accidental::Natural,
        }
    }

    const fn sharp(letter: Letter) -> Note {
        Note {
            letter,
            accidental: Accidental::Sharp,
        }
    }

    const fn flat(letter: Letter) -> Note {
        Note {
            letter,
            accidental: Accidental::Flat,
        }
    }

    /// Build a note from letter and accidental, rejecting spellings
    /// outside the catalog.
    pub fn new(letter: Letter, accidental: Accidental) -> Result<Note, TheoryError> {
        let note = Note { letter, accidental };
        match (letter, accidental) {
            (Letter::E | Letter::B, Accidental::Sharp)
            | (Letter::F | Letter::C, Accidental::Flat) => {
                Err(TheoryError::InvalidSpelling(note.to_string()))
            }
            _ => Ok(note),
        }
    }

    /// The letter component of this spelling.
    pub fn letter(self) -> Letter {
        self.letter
    }

    /// The accidental component of this spelling.
    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    pub fn is_sharp(self) -> bool {
        self.accidental == Accidental::Sharp
    }

    pub fn is_flat(self) -> bool {
        self.accidental == Accidental::Flat
    }

    pub fn is_plain(self) -> bool {
        self.accidental == Accidental::Natural
    }

    /// The chromatic reference this spelling belongs to.
    pub fn preferred_spelling(self) -> Spelling {
        if self.is_flat() {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }

    /// Forward semitone distance from `other` up to `self`, wrapped into
    /// a single octave.
    ///
    /// Each operand is located in the chromatic reference matching its
    /// own spelling; a negative raw difference wraps into [0,12). The
    /// result is the canonical catalog interval for that distance, or a
    /// synthesized custom interval when no catalog entry covers it.
    pub fn subtract(self, other: Note) -> Result<Interval, TheoryError> {
        let own = self.preferred_spelling().position_of(self)? as i32;
        let theirs = other.preferred_spelling().position_of(other)? as i32;
        let semitones = (own - theirs).rem_euclid(12) as u8;
        Ok(Interval::from_semitones(semitones).unwrap_or_else(|| Interval::custom(semitones)))
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        if self.letter == other.letter && self.accidental == other.accidental {
            return true;
        }
        // A sharp equals the flat of the next letter: C# == Db, G# == Ab.
        (self.is_sharp() && other.is_flat() && self.letter.next() == other.letter)
            || (self.is_flat() && other.is_sharp() && other.letter.next() == self.letter)
    }
}

impl Eq for Note {}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    /// Enharmonic pairs compare equal. Otherwise letters compare
    /// alphabetically (no wraparound — letters are not monotonic with
    /// pitch, so interval math must not lean on this ordering), and
    /// within one letter flat < plain < sharp.
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        if self.letter == other.letter {
            self.accidental.cmp(&other.accidental)
        } else {
            self.letter.cmp(&other.letter)
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.accidental {
            Accidental::Natural => write!(f, "{}", self.letter),
            Accidental::Sharp => write!(f, "{}#", self.letter),
            Accidental::Flat => write!(f, "{}b", self.letter),
        }
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::InvalidSpelling(s.to_string()))?;
        let accidental = match chars.next() {
            None => Accidental::Natural,
            Some('#') => Accidental::Sharp,
            Some('b') => Accidental::Flat,
            Some(_) => return Err(TheoryError::InvalidSpelling(s.to_string())),
        };
        if chars.next().is_some() {
            return Err(TheoryError::InvalidSpelling(s.to_string()));
        }
        Note::new(letter, accidental)
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enharmonic_pairs_equal_both_directions() {
        let pairs = [
            (Note::C_SHARP, Note::D_FLAT),
            (Note::D_SHARP, Note::E_FLAT),
            (Note::F_SHARP, Note::G_FLAT),
            (Note::G_SHARP, Note::A_FLAT),
            (Note::A_SHARP, Note::B_FLAT),
        ];
        for (sharp, flat) in pairs {
            assert_eq!(sharp, flat, "{} should equal {}", sharp, flat);
            assert_eq!(flat, sharp, "{} should equal {}", flat, sharp);
        }
    }

    #[test]
    fn test_non_enharmonic_pairs_unequal() {
        assert_ne!(Note::C, Note::D);
        assert_ne!(Note::C_SHARP, Note::D_SHARP);
        assert_ne!(Note::C_SHARP, Note::E_FLAT);
        assert_ne!(Note::D_FLAT, Note::D);
        assert_ne!(Note::G, Note::G_SHARP);
    }

    #[test]
    fn test_identical_spellings_equal() {
        for note in Note::ALL {
            assert_eq!(note, note);
        }
    }

    #[test]
    fn test_ordering_flat_plain_sharp() {
        // Regression pin for the ordering rule: within one letter,
        // flat < plain < sharp.
        assert!(Note::D_FLAT < Note::D);
        assert!(Note::D < Note::D_SHARP);
        assert!(Note::D_FLAT < Note::D_SHARP);
        assert!(Note::B_FLAT < Note::B);
    }

    #[test]
    fn test_ordering_treats_enharmonics_as_equal() {
        use std::cmp::Ordering;
        assert_eq!(Note::C_SHARP.cmp(&Note::D_FLAT), Ordering::Equal);
        assert_eq!(Note::A_FLAT.cmp(&Note::G_SHARP), Ordering::Equal);
    }

    #[test]
    fn test_ordering_across_letters_is_alphabetic() {
        assert!(Note::C < Note::D);
        assert!(Note::A < Note::G);
        assert!(Note::B < Note::C_SHARP);

        let mut notes = vec![Note::D, Note::D_FLAT, Note::C];
        notes.sort();
        assert_eq!(notes, vec![Note::C, Note::D_FLAT, Note::D]);
    }

    #[test]
    fn test_subtract_self_is_unison() {
        for note in Note::ALL {
            let interval = note.subtract(note).unwrap();
            assert_eq!(interval, Interval::UNISON);
        }
    }

    #[test]
    fn test_subtract_forward_distances() {
        assert_eq!(Note::G.subtract(Note::C).unwrap(), Interval::PERFECT_FIFTH);
        assert_eq!(Note::E.subtract(Note::C).unwrap(), Interval::MAJOR_THIRD);
        assert_eq!(Note::E_FLAT.subtract(Note::C).unwrap(), Interval::MINOR_THIRD);
        // Negative raw difference wraps forward: C is a fourth above G.
        assert_eq!(Note::C.subtract(Note::G).unwrap(), Interval::PERFECT_FOURTH);
    }

    #[test]
    fn test_subtract_stays_in_octave() {
        for a in Note::ALL {
            for b in Note::ALL {
                let semitones = a.subtract(b).unwrap().semitones();
                assert!(semitones < 12, "{} - {} gave {}", a, b, semitones);
            }
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for note in Note::ALL {
            let parsed: Note = note.to_string().parse().unwrap();
            assert_eq!(parsed.letter(), note.letter());
            assert_eq!(parsed.accidental(), note.accidental());
        }
    }

    #[test]
    fn test_parse_rejects_invalid_spellings() {
        for input in ["E#", "Fb", "B#", "Cb", "H", "C##", "", "Cx"] {
            assert!(input.parse::<Note>().is_err(), "{:?} should not parse", input);
        }
    }

    #[test]
    fn test_new_rejects_off_catalog_spellings() {
        assert!(Note::new(Letter::E, Accidental::Sharp).is_err());
        assert!(Note::new(Letter::B, Accidental::Sharp).is_err());
        assert!(Note::new(Letter::F, Accidental::Flat).is_err());
        assert!(Note::new(Letter::C, Accidental::Flat).is_err());
        assert!(Note::new(Letter::E, Accidental::Natural).is_ok());
        assert!(Note::new(Letter::B, Accidental::Flat).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(Note::C.to_string(), "C");
        assert_eq!(Note::C_SHARP.to_string(), "C#");
        assert_eq!(Note::E_FLAT.to_string(), "Eb");
    }

    #[test]
    fn test_serde_round_trip() {
        for note in Note::ALL {
            let yaml = serde_yaml::to_string(&note).unwrap();
            let back: Note = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(back, note);
        }
    }
}
