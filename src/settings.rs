// Copyright 2026 the Abecedary Authors
// SPDX-License-Identifier: Apache-2.0

//! Engine settings and tuning constants.
//!
//! This module holds the non-visual tuning knobs of the matcher and
//! session. Anything the presentation layer draws with (colors, stroke
//! widths, overlays) belongs to the presentation layer, not here.

use std::time::Duration;

// ============================================================================
// CANVAS SETTINGS
// ============================================================================
/// Logical canvas width (glyph coordinate units)
const CANVAS_WIDTH: f64 = 800.0;

/// Logical canvas height (glyph coordinate units)
const CANVAS_HEIGHT: f64 = 600.0;

// ============================================================================
// MATCHER SETTINGS
// ============================================================================
/// Maximum length of one tolerance segment (canvas units).
///
/// A stroke chord is divided into `ceil(length / MAX_SEGMENT_LENGTH)`
/// equal segments, each independently trackable for coverage.
const MAX_SEGMENT_LENGTH: f64 = 30.0;

/// Distance within which a traced point marks a segment covered (canvas units)
const COVERAGE_THRESHOLD: f64 = 50.0;

/// Fraction of a stroke's segments that must be covered for the attempt
/// to be accepted
const ACCEPT_RATIO: f64 = 0.7;

// ============================================================================
// FEEDBACK SETTINGS
// ============================================================================
/// How long a transient hint stays up before auto-dismissing
const HINT_DURATION_MS: u64 = 1500;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Logical canvas extents the glyph tables are authored in
pub mod canvas {
    /// Canvas width (glyph coordinate units)
    pub const WIDTH: f64 = super::CANVAS_WIDTH;

    /// Canvas height (glyph coordinate units)
    pub const HEIGHT: f64 = super::CANVAS_HEIGHT;
}

/// Stroke matcher tuning
pub mod matcher {
    /// Maximum tolerance segment length (canvas units)
    pub const MAX_SEGMENT_LENGTH: f64 = super::MAX_SEGMENT_LENGTH;

    /// Point-to-segment distance below which a segment counts as covered
    pub const COVERAGE_THRESHOLD: f64 = super::COVERAGE_THRESHOLD;

    /// Minimum covered/total ratio for an accepted stroke
    pub const ACCEPT_RATIO: f64 = super::ACCEPT_RATIO;
}

/// Transient feedback tuning
pub mod feedback {
    use super::Duration;

    /// Lifetime of a hint message before it auto-dismisses
    pub const HINT_DURATION: Duration = Duration::from_millis(super::HINT_DURATION_MS);
}
