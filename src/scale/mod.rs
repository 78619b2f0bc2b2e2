// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scales: ordered interval patterns defining the modes.
//!
//! Provides the fixed mode catalog, degree-and-octave addressing, and
//! scale-note generation.

pub mod degree;
pub mod walk;

pub use degree::{ScaleDegree, ScaleNote};
pub use walk::{scale_notes, ScaleElement, WalkOptions};

use std::fmt;

use serde::{Serialize, Serializer};

use crate::pitch::Interval;

const IONIAN_STEPS: [Interval; 7] = [
    Interval::TONE,
    Interval::TONE,
    Interval::SEMITONE,
    Interval::TONE,
    Interval::TONE,
    Interval::TONE,
    Interval::SEMITONE,
];

const DORIAN_STEPS: [Interval; 7] = [
    Interval::TONE,
    Interval::SEMITONE,
    Interval::TONE,
    Interval::TONE,
    Interval::TONE,
    Interval::SEMITONE,
    Interval::TONE,
];

const PHRYGIAN_STEPS: [Interval; 7] = [
    Interval::SEMITONE,
    Interval::TONE,
    Interval::TONE,
    Interval::TONE,
    Interval::SEMITONE,
    Interval::TONE,
    Interval::TONE,
];

const LYDIAN_STEPS: [Interval; 7] = [
    Interval::TONE,
    Interval::TONE,
    Interval::TONE,
    Interval::SEMITONE,
    Interval::TONE,
    Interval::TONE,
    Interval::SEMITONE,
];

const MIXOLYDIAN_STEPS: [Interval; 7] = [
    Interval::TONE,
    Interval::TONE,
    Interval::SEMITONE,
    Interval::TONE,
    Interval::TONE,
    Interval::SEMITONE,
    Interval::TONE,
];

const AEOLIAN_STEPS: [Interval; 7] = [
    Interval::TONE,
    Interval::SEMITONE,
    Interval::TONE,
    Interval::TONE,
    Interval::SEMITONE,
    Interval::TONE,
    Interval::TONE,
];

const LOCRIAN_STEPS: [Interval; 7] = [
    Interval::SEMITONE,
    Interval::TONE,
    Interval::TONE,
    Interval::SEMITONE,
    Interval::TONE,
    Interval::TONE,
    Interval::TONE,
];

/// An ordered interval pattern defining a mode.
///
/// Catalog scales stay distinct by name even when they share step data:
/// major is ionian and minor is aeolian, but each keeps its own identity
/// for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    name: &'static str,
    intervals: &'static [Interval],
}

impl Scale {
    pub const IONIAN: Scale = Scale::catalog("ionian", &IONIAN_STEPS);
    pub const MAJOR: Scale = Scale::catalog("major", &IONIAN_STEPS);
    pub const DORIAN: Scale = Scale::catalog("dorian", &DORIAN_STEPS);
    pub const PHRYGIAN: Scale = Scale::catalog("phrygian", &PHRYGIAN_STEPS);
    pub const LYDIAN: Scale = Scale::catalog("lydian", &LYDIAN_STEPS);
    pub const MIXOLYDIAN: Scale = Scale::catalog("mixolydian", &MIXOLYDIAN_STEPS);
    pub const AEOLIAN: Scale = Scale::catalog("aeolian", &AEOLIAN_STEPS);
    pub const MINOR: Scale = Scale::catalog("minor", &AEOLIAN_STEPS);
    pub const LOCRIAN: Scale = Scale::catalog("locrian", &LOCRIAN_STEPS);

    /// All catalog modes.
    pub const ALL: [Scale; 9] = [
        Scale::IONIAN,
        Scale::MAJOR,
        Scale::DORIAN,
        Scale::PHRYGIAN,
        Scale::LYDIAN,
        Scale::MIXOLYDIAN,
        Scale::AEOLIAN,
        Scale::MINOR,
        Scale::LOCRIAN,
    ];

    const fn catalog(name: &'static str, intervals: &'static [Interval]) -> Scale {
        Scale { name, intervals }
    }

    /// Look up a catalog mode by name, case-insensitive.
    pub fn by_name(name: &str) -> Option<Scale> {
        let name = name.trim().to_lowercase();
        Scale::ALL.into_iter().find(|scale| scale.name == name)
    }

    pub fn name(self) -> &'static str {
        self.name
    }

    /// The step pattern between consecutive scale tones.
    pub fn intervals(self) -> &'static [Interval] {
        self.intervals
    }

    /// Number of steps in the pattern.
    pub fn interval_len(self) -> usize {
        self.intervals.len()
    }

    /// Number of tones the pattern resolves to, tonic included.
    pub fn scale_len(self) -> usize {
        self.intervals.len() + 1
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Serialize for Scale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}
