// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for theory operations.

use thiserror::Error;

use crate::pitch::{Note, Spelling};

/// Errors produced by note validation, catalog lookups, and progression
/// construction.
///
/// All of these are precondition violations at the call site rather than
/// recoverable runtime conditions; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The spelling is not one of the 17 catalog notes.
    #[error("invalid note spelling: {0}")]
    InvalidSpelling(String),

    /// A note failed to resolve in the active chromatic reference.
    /// Unreachable for catalog notes; kept as a guard.
    #[error("note {note} not found in the {spelling} chromatic reference")]
    NoteNotInReference { note: Note, spelling: Spelling },

    /// A combined interval run has no catalog entry.
    #[error("no catalog interval spans {0} semitones")]
    UnmappedInterval(u32),

    /// A chord recipe degree fell outside the resolved scale walk.
    #[error("scale degree {0} is outside the generated scale")]
    UnresolvedDegree(usize),

    /// Harmonic rearrangement needs exactly seven triads.
    #[error("harmonic arrangement requires exactly 7 chords, got {0}")]
    MalformedProgression(usize),

    /// A degree stack produced notes no chord recipe matches.
    #[error("no chord recipe matches the note stack")]
    UnmatchedChord,
}
