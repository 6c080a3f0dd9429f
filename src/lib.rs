// Copyright 2026 the Abecedary Authors
// SPDX-License-Identifier: Apache-2.0

//! Abecedary: a letter-tracing practice engine.
//!
//! A displayed glyph offers guide strokes; the learner traces them with a
//! pointer. The engine reduces each target stroke to a chord of tolerance
//! segments, marks segments covered as pointer samples arrive, and judges
//! each attempt by coverage ratio. Presentation, audio playback and
//! animation live outside the crate: the host forwards pointer samples to
//! a [`session::TraceSession`] and reacts to the [`session::SessionEvent`]s
//! it returns.
//!
//! ```
//! use abecedary::{Alphabet, SessionEvent, TraceSession};
//! use kurbo::Point;
//!
//! let mut session = TraceSession::new(Alphabet::builtin());
//! session.begin_stroke(Point::new(300.0, 500.0));
//! for i in 1..=20 {
//!     let t = i as f64 / 20.0;
//!     session.move_to(Point::new(300.0 + 100.0 * t, 500.0 - 400.0 * t));
//! }
//! let events = session.end_stroke();
//! assert_eq!(events, vec![SessionEvent::StrokeAccepted { stroke: 0 }]);
//! ```

pub mod alphabet;
pub mod cue;
pub mod matcher;
pub mod session;
pub mod settings;
pub mod stroke;

pub use alphabet::{Alphabet, AlphabetError, LetterGlyph};
pub use cue::{Cue, CuePlayer, LoggedCues, SilentCues};
pub use matcher::{AttemptVerdict, StrokeMatcher};
pub use session::{Hint, HintKind, SessionEvent, TraceSession};
pub use stroke::{Segment, TargetStroke};
