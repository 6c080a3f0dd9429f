// Copyright 2026 the Abecedary Authors
// SPDX-License-Identifier: Apache-2.0

//! Target strokes and their tolerance segments.
//!
//! A stroke path description like `"M 300,500 L 400,100"` is reduced to
//! the straight chord between its first and last coordinate pair. Curved
//! commands contribute nothing beyond their coordinates, so a curve is
//! matched against its chord. That is the intended behavior of the
//! exercise, not an approximation to be refined: guide strokes are
//! authored so the chord is a fair tracing target.
//!
//! The chord is divided into equal segments no longer than
//! [`settings::matcher::MAX_SEGMENT_LENGTH`], each carrying a `covered`
//! flag that only ever flips from false to true while the stroke's
//! segments are alive.

use kurbo::{Line, Point};

use crate::settings;

// ===== Segment =====

/// One tolerance segment of a stroke chord
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Segment geometry (immutable once computed)
    pub line: Line,
    /// Whether a traced point has come within tolerance of this segment
    pub covered: bool,
}

impl Segment {
    fn new(start: Point, end: Point) -> Self {
        Segment {
            line: Line::new(start, end),
            covered: false,
        }
    }

    /// Distance from a point to this segment.
    ///
    /// Projects the point onto the carrying line, clamps the projection
    /// parameter to the segment, then measures point-to-point. A
    /// zero-length segment degrades to plain point distance.
    pub fn distance_to(&self, point: Point) -> f64 {
        let chord = self.line.p1 - self.line.p0;
        let len_sq = chord.hypot2();
        if len_sq == 0.0 {
            return point.distance(self.line.p0);
        }
        let t = ((point - self.line.p0).dot(chord) / len_sq).clamp(0.0, 1.0);
        point.distance(self.line.p0 + chord * t)
    }
}

// ===== TargetStroke =====

/// A stroke the learner is asked to trace
#[derive(Debug, Clone)]
pub struct TargetStroke {
    /// The path description this stroke was built from, kept verbatim for
    /// the presentation layer to render as the dotted guide
    description: String,
    /// Tolerance segments along the chord, empty when the description has
    /// fewer than two coordinate pairs or no traceable extent
    segments: Vec<Segment>,
}

impl TargetStroke {
    /// Build a stroke from a path description.
    ///
    /// A description that yields fewer than two coordinate pairs produces
    /// an empty segment list; such a stroke can never be accepted and is
    /// treated as a data defect by [`crate::alphabet::Alphabet::validate`].
    pub fn new(description: impl Into<String>) -> Self {
        let description = description.into();
        let coords = parse_coordinates(&description);
        let segments = compute_segments(&coords);
        TargetStroke {
            description,
            segments,
        }
    }

    /// The original path description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The tolerance segments of this stroke
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether this stroke has any segments to cover
    pub fn is_traceable(&self) -> bool {
        !self.segments.is_empty()
    }

    /// Count of segments marked covered so far
    pub fn covered_count(&self) -> usize {
        self.segments.iter().filter(|s| s.covered).count()
    }

    /// Mark every still-uncovered segment within tolerance of `point` as
    /// covered. Returns true when at least one segment flipped, so the
    /// caller knows a redraw of the coverage feedback is due.
    pub fn update_coverage(&mut self, point: Point) -> bool {
        let mut changed = false;
        for segment in &mut self.segments {
            if segment.covered {
                continue;
            }
            if segment.distance_to(point) < settings::matcher::COVERAGE_THRESHOLD {
                segment.covered = true;
                changed = true;
            }
        }
        changed
    }
}

// ===== Parsing =====

/// Extract the numeric coordinates from a path description.
///
/// The glyph tables are authored with non-negative integer coordinates,
/// so a digit-run scan is sufficient. Command letters, commas, and signs
/// are all treated as separators.
pub(crate) fn parse_coordinates(description: &str) -> Vec<f64> {
    let mut coords = Vec::new();
    let mut run = String::new();
    for ch in description.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
        } else if !run.is_empty() {
            if let Ok(value) = run.parse::<f64>() {
                coords.push(value);
            }
            run.clear();
        }
    }
    if !run.is_empty()
        && let Ok(value) = run.parse::<f64>()
    {
        coords.push(value);
    }
    coords
}

/// Divide the chord from the first to the last coordinate pair into equal
/// segments no longer than the maximum segment length.
fn compute_segments(coords: &[f64]) -> Vec<Segment> {
    if coords.len() < 4 {
        return Vec::new();
    }

    let start = Point::new(coords[0], coords[1]);
    let end = Point::new(coords[coords.len() - 2], coords[coords.len() - 1]);
    let chord = end - start;
    let steps = (chord.hypot() / settings::matcher::MAX_SEGMENT_LENGTH).ceil() as usize;

    // A zero-length chord yields no segments; the stroke is untraceable.
    (0..steps)
        .map(|i| {
            let t0 = i as f64 / steps as f64;
            let t1 = (i + 1) as f64 / steps as f64;
            Segment::new(start + chord * t0, start + chord * t1)
        })
        .collect()
}

// ===== Tests =====
