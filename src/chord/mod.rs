// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords: interval recipes applied to a key, and reverse derivation
//! from note stacks.

pub mod progression;

pub use progression::{
    arrange_harmonic_degrees, chords_for_scale, diatonic_triads, harmonic_seventh_scale,
};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TheoryError;
use crate::pitch::{Interval, Note, Spelling};
use crate::scale::{scale_notes, Scale, ScaleDegree, ScaleElement, WalkOptions};

/// The supported chord qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Seventh,
    MajorSeventh,
    Ninth,
    MajorNinth,
    MinorNinth,
}

/// One step of a chord recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecipeStep {
    /// Advance a fixed distance from the previous note.
    Interval(Interval),
    /// Resolve a degree of the major scale built on the chord's key.
    Degree(ScaleDegree),
}

const MAJOR_RECIPE: [RecipeStep; 2] = [
    RecipeStep::Interval(Interval::MAJOR_THIRD),
    RecipeStep::Interval(Interval::MINOR_THIRD),
];

const MINOR_RECIPE: [RecipeStep; 2] = [
    RecipeStep::Interval(Interval::MINOR_THIRD),
    RecipeStep::Interval(Interval::MAJOR_THIRD),
];

const DIMINISHED_RECIPE: [RecipeStep; 2] = [
    RecipeStep::Interval(Interval::MINOR_THIRD),
    RecipeStep::Interval(Interval::MINOR_THIRD),
];

const AUGMENTED_RECIPE: [RecipeStep; 2] = [
    RecipeStep::Interval(Interval::MAJOR_THIRD),
    RecipeStep::Interval(Interval::MAJOR_THIRD),
];

const SEVENTH_RECIPE: [RecipeStep; 3] = [
    RecipeStep::Interval(Interval::MAJOR_THIRD),
    RecipeStep::Interval(Interval::MINOR_THIRD),
    RecipeStep::Interval(Interval::MINOR_THIRD),
];

const MAJOR_SEVENTH_RECIPE: [RecipeStep; 3] = [
    RecipeStep::Interval(Interval::MAJOR_THIRD),
    RecipeStep::Interval(Interval::MINOR_THIRD),
    RecipeStep::Interval(Interval::MAJOR_THIRD),
];

// The ninths extend their seventh stack by the second degree of the
// key's major scale, one octave up.
const NINTH_RECIPE: [RecipeStep; 4] = [
    RecipeStep::Interval(Interval::MAJOR_THIRD),
    RecipeStep::Interval(Interval::MINOR_THIRD),
    RecipeStep::Interval(Interval::MINOR_THIRD),
    RecipeStep::Degree(ScaleDegree::new(2, 2)),
];

const MAJOR_NINTH_RECIPE: [RecipeStep; 4] = [
    RecipeStep::Interval(Interval::MAJOR_THIRD),
    RecipeStep::Interval(Interval::MINOR_THIRD),
    RecipeStep::Interval(Interval::MAJOR_THIRD),
    RecipeStep::Degree(ScaleDegree::new(2, 2)),
];

const MINOR_NINTH_RECIPE: [RecipeStep; 4] = [
    RecipeStep::Interval(Interval::MINOR_THIRD),
    RecipeStep::Interval(Interval::MAJOR_THIRD),
    RecipeStep::Interval(Interval::MINOR_THIRD),
    RecipeStep::Degree(ScaleDegree::new(2, 2)),
];

impl ChordType {
    /// Every chord quality in catalog order.
    pub const ALL: [ChordType; 9] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Seventh,
        ChordType::MajorSeventh,
        ChordType::Ninth,
        ChordType::MajorNinth,
        ChordType::MinorNinth,
    ];

    /// The fixed construction recipe for this quality.
    pub fn recipe(self) -> &'static [RecipeStep] {
        match self {
            ChordType::Major => &MAJOR_RECIPE,
            ChordType::Minor => &MINOR_RECIPE,
            ChordType::Diminished => &DIMINISHED_RECIPE,
            ChordType::Augmented => &AUGMENTED_RECIPE,
            ChordType::Seventh => &SEVENTH_RECIPE,
            ChordType::MajorSeventh => &MAJOR_SEVENTH_RECIPE,
            ChordType::Ninth => &NINTH_RECIPE,
            ChordType::MajorNinth => &MAJOR_NINTH_RECIPE,
            ChordType::MinorNinth => &MINOR_NINTH_RECIPE,
        }
    }

    /// Display suffix appended to the chord's key.
    pub fn symbol(self) -> &'static str {
        match self {
            ChordType::Major => "",
            ChordType::Minor => "m",
            ChordType::Seventh => "7",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::MajorSeventh => "Maj7",
            ChordType::Ninth => "9",
            ChordType::MajorNinth => "Maj9",
            ChordType::MinorNinth => "m9",
        }
    }

    /// Parse a quality from a name or its display symbol.
    pub fn by_name(name: &str) -> Option<ChordType> {
        let name = name.trim().to_lowercase().replace([' ', '-', '_'], "");
        match name.as_str() {
            "major" | "maj" => Some(ChordType::Major),
            "minor" | "min" | "m" => Some(ChordType::Minor),
            "diminished" | "dim" => Some(ChordType::Diminished),
            "augmented" | "aug" => Some(ChordType::Augmented),
            "seventh" | "7" => Some(ChordType::Seventh),
            "majorseventh" | "maj7" => Some(ChordType::MajorSeventh),
            "ninth" | "9" => Some(ChordType::Ninth),
            "majorninth" | "maj9" => Some(ChordType::MajorNinth),
            "minorninth" | "m9" => Some(ChordType::MinorNinth),
            _ => None,
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordType::Major => write!(f, "major"),
            ChordType::Minor => write!(f, "minor"),
            ChordType::Diminished => write!(f, "diminished"),
            ChordType::Augmented => write!(f, "augmented"),
            ChordType::Seventh => write!(f, "seventh"),
            ChordType::MajorSeventh => write!(f, "major-seventh"),
            ChordType::Ninth => write!(f, "ninth"),
            ChordType::MajorNinth => write!(f, "major-ninth"),
            ChordType::MinorNinth => write!(f, "minor-ninth"),
        }
    }
}

/// A stack of notes built on a key.
///
/// Chord identity is the key and quality; the member notes are derived
/// from the recipe and do not take part in equality.
#[derive(Debug, Clone, Serialize)]
pub struct Chord {
    key: Note,
    chord_type: ChordType,
    spelling: Spelling,
    notes: Vec<Note>,
}

impl Chord {
    /// Apply the quality's recipe to `key`.
    ///
    /// Interval steps advance chromatically from the previous note,
    /// wrapping within the reference for `spelling`; degree steps resolve
    /// against the major scale built on `key`.
    pub fn new(key: Note, chord_type: ChordType, spelling: Spelling) -> Result<Chord, TheoryError> {
        debug!(key = %key, chord_type = %chord_type, "building chord");

        let reference = spelling.reference();
        let mut notes = vec![key];
        let mut current = key;
        for step in chord_type.recipe() {
            let next = match step {
                RecipeStep::Interval(interval) => {
                    let pos = spelling.position_of(current)?;
                    reference[(pos + interval.semitones() as usize) % reference.len()]
                }
                RecipeStep::Degree(degree) => resolve_major_degree(key, spelling, *degree)?,
            };
            notes.push(next);
            current = next;
        }

        Ok(Chord {
            key,
            chord_type,
            spelling,
            notes,
        })
    }

    /// Reverse-derive a chord from a generated scale sequence, ignoring
    /// any interval markers in it.
    pub fn from_elements(elements: &[ScaleElement]) -> Option<Chord> {
        let notes: Vec<Note> = elements
            .iter()
            .filter_map(|element| element.as_note().map(|scale_note| scale_note.note()))
            .collect();
        Chord::from_notes(&notes)
    }

    /// Reverse-derive a chord from an ordered note stack.
    ///
    /// The successive intervals between neighbors are matched against the
    /// interval-only recipes; qualities whose recipes reach through a
    /// scale degree (the ninths) are never derived this way. Fewer than
    /// two notes or an unmatched stack yields no chord.
    pub fn from_notes(notes: &[Note]) -> Option<Chord> {
        if notes.len() < 2 {
            return None;
        }

        let mut steps = Vec::with_capacity(notes.len() - 1);
        for pair in notes.windows(2) {
            steps.push(pair[1].subtract(pair[0]).ok()?);
        }

        let chord_type = ChordType::ALL.into_iter().find(|chord_type| {
            let recipe = chord_type.recipe();
            recipe.len() == steps.len()
                && recipe.iter().zip(&steps).all(|(step, interval)| {
                    matches!(step, RecipeStep::Interval(expected) if expected == interval)
                })
        })?;

        let spelling = if notes.iter().any(|note| note.is_flat()) {
            Spelling::Flats
        } else {
            Spelling::Sharps
        };
        Chord::new(notes[0], chord_type, spelling).ok()
    }

    /// The sixth triad of the diatonic progression on this chord's key.
    pub fn relative_minor(&self) -> Result<Chord, TheoryError> {
        let chords = progression::diatonic_triads(self.key, self.spelling)?;
        chords
            .into_iter()
            .nth(5)
            .ok_or(TheoryError::UnresolvedDegree(6))
    }

    pub fn key(&self) -> Note {
        self.key
    }

    pub fn chord_type(&self) -> ChordType {
        self.chord_type
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    /// The member notes, root first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Key plus quality suffix, e.g. "Dm" or "G7".
    pub fn name(&self) -> String {
        format!("{}{}", self.key, self.chord_type.symbol())
    }
}

/// Resolve a recipe degree against the major scale on `key`. Extensions
/// address the walk by degree number; the octave in the recipe is
/// nominal.
fn resolve_major_degree(
    key: Note,
    spelling: Spelling,
    degree: ScaleDegree,
) -> Result<Note, TheoryError> {
    let walk = scale_notes(Scale::MAJOR, key, spelling, &WalkOptions::default())?;
    degree
        .degree
        .checked_sub(1)
        .and_then(|index| walk.get(index))
        .and_then(|element| element.as_note())
        .map(|scale_note| scale_note.note())
        .ok_or(TheoryError::UnresolvedDegree(degree.degree))
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.chord_type == other.chord_type
    }
}

impl Eq for Chord {}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        for (index, note) in self.notes.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", note)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_triad() {
        let chord = Chord::new(Note::C, ChordType::Major, Spelling::Sharps).unwrap();
        assert_eq!(chord.notes(), &[Note::C, Note::E, Note::G]);
    }

    #[test]
    fn test_minor_triad() {
        let chord = Chord::new(Note::D, ChordType::Minor, Spelling::Sharps).unwrap();
        assert_eq!(chord.notes(), &[Note::D, Note::F, Note::A]);
    }

    #[test]
    fn test_diminished_triad_spelled_with_flats() {
        let chord = Chord::new(Note::C, ChordType::Diminished, Spelling::Flats).unwrap();
        assert_eq!(chord.notes(), &[Note::C, Note::E_FLAT, Note::G_FLAT]);
    }

    #[test]
    fn test_augmented_triad() {
        let chord = Chord::new(Note::C, ChordType::Augmented, Spelling::Sharps).unwrap();
        assert_eq!(chord.notes(), &[Note::C, Note::E, Note::G_SHARP]);
    }

    #[test]
    fn test_seventh_chords() {
        let dominant = Chord::new(Note::G, ChordType::Seventh, Spelling::Sharps).unwrap();
        assert_eq!(dominant.notes(), &[Note::G, Note::B, Note::D, Note::F]);

        let major = Chord::new(Note::C, ChordType::MajorSeventh, Spelling::Sharps).unwrap();
        assert_eq!(major.notes(), &[Note::C, Note::E, Note::G, Note::B]);
    }

    #[test]
    fn test_ninth_reaches_through_the_major_scale() {
        let chord = Chord::new(Note::C, ChordType::Ninth, Spelling::Sharps).unwrap();
        // Dominant seventh stack plus the second degree as the ninth.
        assert_eq!(
            chord.notes(),
            &[Note::C, Note::E, Note::G, Note::A_SHARP, Note::D]
        );
    }

    #[test]
    fn test_major_ninth() {
        let chord = Chord::new(Note::C, ChordType::MajorNinth, Spelling::Sharps).unwrap();
        assert_eq!(chord.notes(), &[Note::C, Note::E, Note::G, Note::B, Note::D]);
    }

    #[test]
    fn test_minor_ninth() {
        let chord = Chord::new(Note::C, ChordType::MinorNinth, Spelling::Flats).unwrap();
        assert_eq!(
            chord.notes(),
            &[Note::C, Note::E_FLAT, Note::G, Note::B_FLAT, Note::D]
        );
    }

    #[test]
    fn test_symbols() {
        assert_eq!(ChordType::Major.symbol(), "");
        assert_eq!(ChordType::Minor.symbol(), "m");
        assert_eq!(ChordType::Seventh.symbol(), "7");
        assert_eq!(ChordType::Diminished.symbol(), "dim");
        assert_eq!(ChordType::Augmented.symbol(), "aug");
        assert_eq!(ChordType::MajorSeventh.symbol(), "Maj7");
        assert_eq!(ChordType::Ninth.symbol(), "9");
        assert_eq!(ChordType::MajorNinth.symbol(), "Maj9");
        assert_eq!(ChordType::MinorNinth.symbol(), "m9");
    }

    #[test]
    fn test_by_name() {
        assert_eq!(ChordType::by_name("major"), Some(ChordType::Major));
        assert_eq!(ChordType::by_name("Maj7"), Some(ChordType::MajorSeventh));
        assert_eq!(ChordType::by_name("minor-ninth"), Some(ChordType::MinorNinth));
        assert_eq!(ChordType::by_name("sus4"), None);
    }

    #[test]
    fn test_display() {
        let chord = Chord::new(Note::D, ChordType::Minor, Spelling::Sharps).unwrap();
        assert_eq!(chord.to_string(), "Dm(D, F, A)");

        let seventh = Chord::new(Note::G, ChordType::Seventh, Spelling::Sharps).unwrap();
        assert_eq!(seventh.to_string(), "G7(G, B, D, F)");
    }

    #[test]
    fn test_from_notes_matches_triads() {
        let major = Chord::from_notes(&[Note::C, Note::E, Note::G]).unwrap();
        assert_eq!(major.chord_type(), ChordType::Major);
        assert_eq!(major.key(), Note::C);

        let diminished = Chord::from_notes(&[Note::C, Note::E_FLAT, Note::G_FLAT]).unwrap();
        assert_eq!(diminished.chord_type(), ChordType::Diminished);
        assert_eq!(diminished.notes(), &[Note::C, Note::E_FLAT, Note::G_FLAT]);

        let minor = Chord::from_notes(&[Note::A, Note::C, Note::E]).unwrap();
        assert_eq!(minor.chord_type(), ChordType::Minor);
    }

    #[test]
    fn test_from_notes_matches_sevenths() {
        let chord = Chord::from_notes(&[Note::G, Note::B, Note::D, Note::F]).unwrap();
        assert_eq!(chord.chord_type(), ChordType::Seventh);
        assert_eq!(chord.key(), Note::G);
    }

    #[test]
    fn test_from_notes_rejects_short_input() {
        assert!(Chord::from_notes(&[]).is_none());
        assert!(Chord::from_notes(&[Note::C]).is_none());
        assert!(Chord::from_notes(&[Note::C, Note::E]).is_none());
    }

    #[test]
    fn test_from_notes_rejects_unknown_stacks() {
        // A cluster of seconds matches no recipe.
        assert!(Chord::from_notes(&[Note::C, Note::D, Note::E]).is_none());
    }

    #[test]
    fn test_from_elements_skips_interval_markers() {
        let options = WalkOptions {
            octaves: 2,
            with_intervals: true,
            filter_positions: Some(vec![1, 3, 5]),
            ..WalkOptions::default()
        };
        let elements = scale_notes(Scale::MAJOR, Note::C, Spelling::Sharps, &options).unwrap();
        let chord = Chord::from_elements(&elements).unwrap();
        assert_eq!(chord.chord_type(), ChordType::Major);
        assert_eq!(chord.key(), Note::C);
    }

    #[test]
    fn test_equality_compares_key_and_type_only() {
        // Open question preserved from the source: member spelling does
        // not take part in chord identity.
        let sharps = Chord::new(Note::C, ChordType::Major, Spelling::Sharps).unwrap();
        let flats = Chord::new(Note::C, ChordType::Major, Spelling::Flats).unwrap();
        assert_eq!(sharps, flats);

        // Enharmonic keys merge identities too.
        let c_sharp = Chord::new(Note::C_SHARP, ChordType::Major, Spelling::Sharps).unwrap();
        let d_flat = Chord::new(Note::D_FLAT, ChordType::Major, Spelling::Flats).unwrap();
        assert_eq!(c_sharp, d_flat);

        let minor = Chord::new(Note::C, ChordType::Minor, Spelling::Sharps).unwrap();
        assert_ne!(sharps, minor);
    }

    #[test]
    fn test_relative_minor() {
        let chord = Chord::new(Note::C, ChordType::Major, Spelling::Sharps).unwrap();
        let relative = chord.relative_minor().unwrap();
        assert_eq!(relative.key(), Note::A);
        assert_eq!(relative.chord_type(), ChordType::Minor);
    }

    #[test]
    fn test_every_quality_has_a_recipe() {
        for chord_type in ChordType::ALL {
            assert!(!chord_type.recipe().is_empty());
            let chord = Chord::new(Note::C, chord_type, Spelling::Sharps).unwrap();
            assert_eq!(chord.notes().len(), chord_type.recipe().len() + 1);
            assert_eq!(chord.notes()[0], Note::C);
        }
    }
}
