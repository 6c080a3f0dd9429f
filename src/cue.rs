// Copyright 2026 the Abecedary Authors
// SPDX-License-Identifier: Apache-2.0

//! Audio cue selection.
//!
//! The engine never plays audio. It names the cue that fits a session
//! event and hands it to an injected [`CuePlayer`]; what (if anything)
//! happens next is the host's concern. Playback failure must stay inside
//! the player — `play` is infallible from the engine's point of view.

// ===== Cue =====

/// The cue vocabulary of the tracing exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A gesture started
    Trace,
    /// A stroke attempt was accepted
    Success,
    /// A stroke attempt was rejected
    Error,
    /// A whole letter was completed
    Celebration,
}

// ===== CuePlayer =====

/// Capability for playing audio cues
pub trait CuePlayer {
    /// Play a cue. Implementations swallow playback errors; a cue that
    /// fails to sound is not an engine error.
    fn play(&mut self, cue: Cue);
}

/// Player that discards every cue (headless sessions, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&mut self, _cue: Cue) {}
}

/// Player that logs each cue instead of sounding it
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggedCues;

impl CuePlayer for LoggedCues {
    fn play(&mut self, cue: Cue) {
        tracing::info!("cue: {:?}", cue);
    }
}
