// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Degree-and-octave addressing within a generated scale.

use std::fmt;

use serde::Serialize;

use crate::pitch::Note;
use crate::scale::Scale;

/// A 1-based scale degree in a 1-based octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleDegree {
    pub degree: usize,
    pub octave: usize,
}

impl ScaleDegree {
    pub const fn new(degree: usize, octave: usize) -> ScaleDegree {
        ScaleDegree { degree, octave }
    }

    /// Linearize degree and octave into an absolute position within the
    /// generated sequence.
    pub fn position(self, scale: Scale) -> usize {
        (self.octave - 1) * scale.interval_len() + self.degree
    }
}

/// A note resolved at a degree of a specific scale.
///
/// Equality requires matching note, degree, and scale; the same pitch at
/// the same degree of two different modes is two different scale notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleNote {
    note: Note,
    degree: ScaleDegree,
    scale: Scale,
    pos: usize,
}

impl ScaleNote {
    pub fn new(note: Note, degree: ScaleDegree, scale: Scale) -> ScaleNote {
        let pos = degree.position(scale);
        ScaleNote {
            note,
            degree,
            scale,
            pos,
        }
    }

    pub fn note(&self) -> Note {
        self.note
    }

    pub fn degree(&self) -> ScaleDegree {
        self.degree
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Absolute position within the generated sequence.
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl fmt::Display for ScaleNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pos <= self.degree.degree {
            write!(f, "{}({})", self.note, self.degree.degree)
        } else {
            write!(f, "{}({}/{})", self.note, self.pos, self.degree.degree)
        }
    }
}
