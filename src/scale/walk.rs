// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale-note generation: walking a mode's step pattern from a key.

use serde::Serialize;
use tracing::debug;

use crate::error::TheoryError;
use crate::pitch::{Interval, Note, Spelling};
use crate::scale::{Scale, ScaleDegree, ScaleNote};

/// One element of a generated scale sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleElement {
    /// A resolved scale tone.
    Note(ScaleNote),
    /// The step traversed to reach the note that follows it.
    Interval(Interval),
}

impl ScaleElement {
    pub fn as_note(&self) -> Option<&ScaleNote> {
        match self {
            ScaleElement::Note(note) => Some(note),
            ScaleElement::Interval(_) => None,
        }
    }

    pub fn as_interval(&self) -> Option<&Interval> {
        match self {
            ScaleElement::Note(_) => None,
            ScaleElement::Interval(interval) => Some(interval),
        }
    }

    pub fn is_note(&self) -> bool {
        matches!(self, ScaleElement::Note(_))
    }
}

/// Options controlling scale-note generation.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// How many octaves to walk.
    pub octaves: usize,
    /// Emit the traversed interval immediately before each resolved note.
    pub with_intervals: bool,
    /// Retain only notes at these absolute positions.
    pub filter_positions: Option<Vec<usize>>,
    /// Collapse each run of interval markers left over after filtering
    /// into the single catalog interval spanning the run.
    pub combine_intervals: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            octaves: 1,
            with_intervals: false,
            filter_positions: None,
            combine_intervals: true,
        }
    }
}

/// Walk `scale` upward from `key`, resolving each step against the
/// chromatic reference for `spelling`.
///
/// The key opens the sequence as degree 1 of octave 1. Each step advances
/// the chromatic position by the step's semitone count, wrapping within
/// the reference. A step that lands back on the key starts the next
/// octave as degree 1; every other tone is numbered after the step that
/// produced it.
pub fn scale_notes(
    scale: Scale,
    key: Note,
    spelling: Spelling,
    options: &WalkOptions,
) -> Result<Vec<ScaleElement>, TheoryError> {
    debug!(scale = %scale, key = %key, octaves = options.octaves, "generating scale notes");

    let reference = spelling.reference();
    let mut elements = vec![ScaleElement::Note(ScaleNote::new(
        key,
        ScaleDegree::new(1, 1),
        scale,
    ))];
    let mut pos = spelling.position_of(key)?;

    for octave in 0..options.octaves {
        for (step, interval) in scale.intervals().iter().enumerate() {
            pos = (pos + interval.semitones() as usize) % reference.len();
            if options.with_intervals {
                elements.push(ScaleElement::Interval(*interval));
            }
            let note = reference[pos];
            let degree = if note == key {
                ScaleDegree::new(1, octave + 2)
            } else {
                ScaleDegree::new(step + 2, octave + 1)
            };
            elements.push(ScaleElement::Note(ScaleNote::new(note, degree, scale)));
        }
    }

    if let Some(filter) = &options.filter_positions {
        elements.retain(|element| match element {
            ScaleElement::Interval(_) => true,
            ScaleElement::Note(note) => filter.contains(&note.pos()),
        });
        trim_intervals(&mut elements);
        if options.combine_intervals {
            elements = combine_interval_runs(elements)?;
        }
    }

    Ok(elements)
}

/// Drop interval markers from the front and back of the sequence.
fn trim_intervals(elements: &mut Vec<ScaleElement>) {
    while elements.first().is_some_and(|element| !element.is_note()) {
        elements.remove(0);
    }
    while elements.last().is_some_and(|element| !element.is_note()) {
        elements.pop();
    }
}

/// Replace each run of consecutive interval markers with the catalog
/// interval spanning the run's semitone sum.
///
/// Builds a fresh sequence rather than splicing in place. Fails when a
/// run adds up past the octave, where the catalog has no entry.
fn combine_interval_runs(elements: Vec<ScaleElement>) -> Result<Vec<ScaleElement>, TheoryError> {
    let mut combined = Vec::with_capacity(elements.len());
    let mut run: u32 = 0;
    for element in elements {
        match element {
            ScaleElement::Interval(interval) => run += u32::from(interval.semitones()),
            note => {
                if run > 0 {
                    let interval = u8::try_from(run)
                        .ok()
                        .and_then(Interval::from_semitones)
                        .ok_or(TheoryError::UnmappedInterval(run))?;
                    combined.push(ScaleElement::Interval(interval));
                    run = 0;
                }
                combined.push(note);
            }
        }
    }
    Ok(combined)
}
