// Copyright 2026 the Abecedary Authors
// SPDX-License-Identifier: Apache-2.0

//! Stroke coverage matching for one letter.
//!
//! The matcher owns the tolerance segments of every stroke in the active
//! letter. During a gesture the session feeds it pointer samples via
//! [`StrokeMatcher::update_coverage`]; at gesture end
//! [`StrokeMatcher::evaluate_attempt`] turns the accumulated coverage
//! into a pass/fail verdict. The matcher is rebuilt whenever the active
//! letter changes, which is also what resets coverage.

use kurbo::Point;

use crate::settings;
use crate::stroke::{Segment, TargetStroke};

// ===== AttemptVerdict =====

/// Verdict for one completed trace attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttemptVerdict {
    /// Whether the attempt passed the coverage bar
    pub accepted: bool,
    /// Segments covered at attempt end
    pub covered: usize,
    /// Total segments in the stroke
    pub total: usize,
}

impl AttemptVerdict {
    /// Covered fraction, 0.0 for an untraceable stroke
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.covered as f64 / self.total as f64
        }
    }
}

// ===== StrokeMatcher =====

/// Coverage matcher for the strokes of one letter
#[derive(Debug, Clone)]
pub struct StrokeMatcher {
    strokes: Vec<TargetStroke>,
}

impl StrokeMatcher {
    /// Build a matcher from the letter's stroke path descriptions
    pub fn new(descriptions: &[String]) -> Self {
        let strokes = descriptions
            .iter()
            .map(TargetStroke::new)
            .collect::<Vec<_>>();
        for (index, stroke) in strokes.iter().enumerate() {
            if !stroke.is_traceable() {
                tracing::warn!(
                    "stroke {} ({:?}) has no traceable extent and can never be accepted",
                    index,
                    stroke.description()
                );
            }
        }
        StrokeMatcher { strokes }
    }

    /// Number of strokes in the letter
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// A stroke by index
    pub fn stroke(&self, index: usize) -> Option<&TargetStroke> {
        self.strokes.get(index)
    }

    /// The tolerance segments of a stroke, empty for a bad index
    pub fn segments(&self, index: usize) -> &[Segment] {
        self.strokes.get(index).map(TargetStroke::segments).unwrap_or(&[])
    }

    /// Mark every still-uncovered segment of `stroke` within tolerance of
    /// `point` as covered. Returns true when any segment flipped. A bad
    /// stroke index is a no-op.
    pub fn update_coverage(&mut self, point: Point, stroke: usize) -> bool {
        match self.strokes.get_mut(stroke) {
            Some(target) => target.update_coverage(point),
            None => false,
        }
    }

    /// Covered fraction of a stroke, 0.0 for a bad index or an
    /// untraceable stroke
    pub fn coverage_ratio(&self, stroke: usize) -> f64 {
        self.evaluate_attempt(stroke).ratio()
    }

    /// Judge the accumulated coverage of a stroke.
    ///
    /// Accepted iff at least one segment is covered and the covered
    /// fraction reaches [`settings::matcher::ACCEPT_RATIO`]. A stroke
    /// with no segments is never accepted.
    pub fn evaluate_attempt(&self, stroke: usize) -> AttemptVerdict {
        let (covered, total) = match self.strokes.get(stroke) {
            Some(target) => (target.covered_count(), target.segments().len()),
            None => (0, 0),
        };
        let accepted =
            covered > 0 && covered as f64 / total as f64 >= settings::matcher::ACCEPT_RATIO;
        AttemptVerdict {
            accepted,
            covered,
            total,
        }
    }
}

// ===== Tests =====
