// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives: notes, intervals, scales, and chords.
//!
//! This crate models Western tonal harmony as pure computation. A fixed
//! vocabulary of note spellings, named intervals, and modes feeds the
//! generation functions: walking a scale from a key, stacking chords from
//! interval recipes, reverse-deriving chords from note sequences, and
//! harmonizing whole scales into progressions.
//!
//! ```
//! use tonality::{diatonic_triads, Note, Spelling};
//!
//! # fn main() -> Result<(), tonality::TheoryError> {
//! let chords = diatonic_triads(Note::C, Spelling::Sharps)?;
//! assert_eq!(chords[1].name(), "Dm");
//! # Ok(())
//! # }
//! ```

pub mod chord;
pub mod error;
pub mod pitch;
pub mod scale;

pub use chord::{
    arrange_harmonic_degrees, chords_for_scale, diatonic_triads, harmonic_seventh_scale, Chord,
    ChordType, RecipeStep,
};
pub use error::TheoryError;
pub use pitch::{
    Accidental, Interval, IntervalQuality, Letter, Note, Spelling, CHROMATIC_FLATS,
    CHROMATIC_SHARPS,
};
pub use scale::{scale_notes, Scale, ScaleDegree, ScaleElement, ScaleNote, WalkOptions};
