// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Progressions: diatonic triads and harmonized seventh arrangements.

use tracing::debug;

use super::{Chord, ChordType};
use crate::error::TheoryError;
use crate::pitch::{Note, Spelling};
use crate::scale::{scale_notes, Scale, WalkOptions};

/// Triad quality of each major-scale degree: I ii iii IV V vi vii°.
const DIATONIC_QUALITIES: [ChordType; 7] = [
    ChordType::Major,
    ChordType::Minor,
    ChordType::Minor,
    ChordType::Major,
    ChordType::Major,
    ChordType::Minor,
    ChordType::Diminished,
];

/// The seven diatonic triads of the major scale on `key`.
pub fn diatonic_triads(key: Note, spelling: Spelling) -> Result<Vec<Chord>, TheoryError> {
    let roots = scale_roots(Scale::MAJOR, key, spelling)?;
    DIATONIC_QUALITIES
        .iter()
        .zip(&roots)
        .map(|(chord_type, root)| Chord::new(*root, *chord_type, spelling))
        .collect()
}

/// Harmonize each degree of `scale` as a stacked triad.
///
/// The major scale keeps its fixed quality table. Any other mode stacks
/// positions {degree, degree+2, degree+4} over a two-octave walk and
/// derives each quality from the notes that land there.
pub fn chords_for_scale(
    scale: Scale,
    key: Note,
    spelling: Spelling,
) -> Result<Vec<Chord>, TheoryError> {
    if scale == Scale::MAJOR {
        return diatonic_triads(key, spelling);
    }

    debug!(scale = %scale, key = %key, "harmonizing scale degrees");
    let mut chords = Vec::with_capacity(scale.interval_len());
    for degree in 1..=scale.interval_len() {
        let options = WalkOptions {
            octaves: 2,
            filter_positions: Some(vec![degree, degree + 2, degree + 4]),
            ..WalkOptions::default()
        };
        let elements = scale_notes(scale, key, spelling, &options)?;
        let chord = Chord::from_elements(&elements).ok_or(TheoryError::UnmatchedChord)?;
        chords.push(chord);
    }
    Ok(chords)
}

/// The harmonized seventh arrangement of the major scale on `key`:
/// V7, I, IV, vii°, iii7, vi, ii.
pub fn harmonic_seventh_scale(key: Note, spelling: Spelling) -> Result<Vec<Chord>, TheoryError> {
    let triads = diatonic_triads(key, spelling)?;
    arrange_harmonic_degrees(&triads)
}

/// Reorder seven diatonic triads into the V7/I/IV/vii°/iii7/vi/ii
/// pattern, promoting the fifth and third degrees to seventh chords.
pub fn arrange_harmonic_degrees(chords: &[Chord]) -> Result<Vec<Chord>, TheoryError> {
    if chords.len() != 7 {
        return Err(TheoryError::MalformedProgression(chords.len()));
    }

    let seventh = |chord: &Chord| Chord::new(chord.key(), ChordType::Seventh, chord.spelling());
    Ok(vec![
        seventh(&chords[4])?,
        chords[0].clone(),
        chords[3].clone(),
        chords[6].clone(),
        seventh(&chords[2])?,
        chords[5].clone(),
        chords[1].clone(),
    ])
}

/// The member notes of a one-octave walk, tonic first.
fn scale_roots(scale: Scale, key: Note, spelling: Spelling) -> Result<Vec<Note>, TheoryError> {
    let walk = scale_notes(scale, key, spelling, &WalkOptions::default())?;
    Ok(walk
        .iter()
        .filter_map(|element| element.as_note().map(|scale_note| scale_note.note()))
        .collect())
}
