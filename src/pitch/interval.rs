// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named intervals and the semitone lookup table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Consonance classification of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalQuality {
    Consonant,
    Dissonant,
}

/// A named semitone distance.
///
/// The catalog covers unison through octave plus the generic tone and
/// semitone steps used by scale patterns. Two intervals are equal only
/// when name and distance both match, so the generic tone stays distinct
/// from the major second it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    name: &'static str,
    semitones: u8,
    quality: Option<IntervalQuality>,
    ratio: Option<&'static str>,
}

impl Interval {
    /// Generic whole-tone scale step.
    pub const TONE: Interval = Interval::generic("tone", 2);
    /// Generic half-tone scale step.
    pub const SEMITONE: Interval = Interval::generic("semitone", 1);

    pub const UNISON: Interval = Interval::catalog("unison", 0, IntervalQuality::Consonant, "1:1");
    pub const MINOR_SECOND: Interval =
        Interval::catalog("minor-second", 1, IntervalQuality::Dissonant, "16:15");
    pub const MAJOR_SECOND: Interval =
        Interval::catalog("major-second", 2, IntervalQuality::Dissonant, "9:8");
    pub const MINOR_THIRD: Interval =
        Interval::catalog("minor-third", 3, IntervalQuality::Consonant, "6:5");
    pub const MAJOR_THIRD: Interval =
        Interval::catalog("major-third", 4, IntervalQuality::Consonant, "5:4");
    pub const PERFECT_FOURTH: Interval =
        Interval::catalog("perfect-fourth", 5, IntervalQuality::Consonant, "4:3");
    pub const AUGMENTED_FOURTH: Interval =
        Interval::catalog("augmented-fourth", 6, IntervalQuality::Dissonant, "45:32");
    pub const TRITONE: Interval =
        Interval::catalog("tritone", 6, IntervalQuality::Dissonant, "45:32");
    pub const PERFECT_FIFTH: Interval =
        Interval::catalog("perfect-fifth", 7, IntervalQuality::Consonant, "3:2");
    pub const MINOR_SIXTH: Interval =
        Interval::catalog("minor-sixth", 8, IntervalQuality::Consonant, "8:5");
    pub const MAJOR_SIXTH: Interval =
        Interval::catalog("major-sixth", 9, IntervalQuality::Consonant, "5:3");
    pub const MINOR_SEVENTH: Interval =
        Interval::catalog("minor-seventh", 10, IntervalQuality::Dissonant, "9:5");
    pub const MAJOR_SEVENTH: Interval =
        Interval::catalog("major-seventh", 11, IntervalQuality::Dissonant, "15:8");
    pub const OCTAVE: Interval = Interval::catalog("octave", 12, IntervalQuality::Consonant, "2:1");

    const fn generic(name: &'static str, semitones: u8) -> Interval {
        Interval {
            name,
            semitones,
            quality: None,
            ratio: None,
        }
    }

    const fn catalog(
        name: &'static str,
        semitones: u8,
        quality: IntervalQuality,
        ratio: &'static str,
    ) -> Interval {
        Interval {
            name,
            semitones,
            quality: Some(quality),
            ratio: Some(ratio),
        }
    }

    /// The canonical interval for a semitone distance within one octave.
    ///
    /// Every distance 0..=12 maps to exactly one entry; six semitones
    /// resolve to the tritone rather than the augmented fourth. Distances
    /// beyond the octave have no mapping.
    pub fn from_semitones(semitones: u8) -> Option<Interval> {
        match semitones {
            0 => Some(Interval::UNISON),
            1 => Some(Interval::MINOR_SECOND),
            2 => Some(Interval::MAJOR_SECOND),
            3 => Some(Interval::MINOR_THIRD),
            4 => Some(Interval::MAJOR_THIRD),
            5 => Some(Interval::PERFECT_FOURTH),
            6 => Some(Interval::TRITONE),
            7 => Some(Interval::PERFECT_FIFTH),
            8 => Some(Interval::MINOR_SIXTH),
            9 => Some(Interval::MAJOR_SIXTH),
            10 => Some(Interval::MINOR_SEVENTH),
            11 => Some(Interval::MAJOR_SEVENTH),
            12 => Some(Interval::OCTAVE),
            _ => None,
        }
    }

    /// Fallback for distances outside the catalog.
    pub fn custom(semitones: u8) -> Interval {
        Interval {
            name: "custom",
            semitones,
            quality: None,
            ratio: None,
        }
    }

    pub fn name(self) -> &'static str {
        self.name
    }

    pub fn semitones(self) -> u8 {
        self.semitones
    }

    pub fn quality(self) -> Option<IntervalQuality> {
        self.quality
    }

    /// Just-intonation frequency ratio, informational only.
    pub fn ratio(self) -> Option<&'static str> {
        self.ratio
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.semitones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_semitones_is_total_within_octave() {
        for semitones in 0..=12 {
            let interval = Interval::from_semitones(semitones)
                .unwrap_or_else(|| panic!("no interval for {} semitones", semitones));
            assert_eq!(interval.semitones(), semitones);
        }
        assert_eq!(Interval::from_semitones(13), None);
        assert_eq!(Interval::from_semitones(255), None);
    }

    #[test]
    fn test_from_semitones_canonical_entries() {
        assert_eq!(Interval::from_semitones(0).unwrap(), Interval::UNISON);
        assert_eq!(Interval::from_semitones(5).unwrap(), Interval::PERFECT_FOURTH);
        assert_eq!(Interval::from_semitones(6).unwrap(), Interval::TRITONE);
        assert_eq!(Interval::from_semitones(11).unwrap(), Interval::MAJOR_SEVENTH);
        assert_eq!(Interval::from_semitones(12).unwrap(), Interval::OCTAVE);
    }

    #[test]
    fn test_generic_steps_distinct_from_catalog() {
        // The tone spans a major second but is not one.
        assert_ne!(Interval::TONE, Interval::MAJOR_SECOND);
        assert_ne!(Interval::SEMITONE, Interval::MINOR_SECOND);
        assert_eq!(Interval::TONE.semitones(), Interval::MAJOR_SECOND.semitones());
    }

    #[test]
    fn test_quality_classification() {
        assert_eq!(
            Interval::PERFECT_FIFTH.quality(),
            Some(IntervalQuality::Consonant)
        );
        assert_eq!(
            Interval::MINOR_SECOND.quality(),
            Some(IntervalQuality::Dissonant)
        );
        assert_eq!(Interval::TONE.quality(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::UNISON.to_string(), "unison(0)");
        assert_eq!(Interval::PERFECT_FIFTH.to_string(), "perfect-fifth(7)");
        assert_eq!(Interval::custom(14).to_string(), "custom(14)");
    }
}
