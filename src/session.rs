// Copyright 2026 the Abecedary Authors
// SPDX-License-Identifier: Apache-2.0

//! Tracing session control.
//!
//! `TraceSession` owns everything the exercise needs between pointer
//! events: the position in the letter sequence, the coverage matcher for
//! the active letter, per-stroke completion, the in-flight gesture path,
//! rejected-attempt paths kept for feedback, the transient hint, the
//! guide-mode flag, and the completed-letter set. The presentation layer
//! forwards pointer samples through [`TraceSession::begin_stroke`],
//! [`TraceSession::move_to`] and [`TraceSession::end_stroke`], and reacts
//! to the [`SessionEvent`]s the latter returns.
//!
//! All transitions are synchronous; one gesture is in flight at a time.
//! A move or end with no gesture in flight is ignored.

use std::collections::HashSet;
use std::time::Instant;

use kurbo::Point;

use crate::alphabet::{Alphabet, LetterGlyph};
use crate::cue::{Cue, CuePlayer, SilentCues};
use crate::matcher::StrokeMatcher;
use crate::settings;
use crate::stroke::Segment;

// ===== Events =====

/// Events the presentation layer reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A stroke attempt passed; the stroke is now complete
    StrokeAccepted {
        /// Index of the accepted stroke
        stroke: usize,
    },
    /// A stroke attempt failed; the traced path is returned for feedback
    StrokeRejected {
        /// Index of the rejected stroke
        stroke: usize,
        /// The path the learner actually traced
        attempt: Vec<Point>,
    },
    /// Every stroke of the letter is complete. Fires at most once per
    /// letter per session.
    LetterCompleted {
        /// The completed letter
        letter: char,
    },
}

// ===== Hints =====

/// Flavor of a transient hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    /// The attempt passed
    Praise,
    /// The attempt failed
    Retry,
}

/// A transient feedback message with a fixed lifetime.
///
/// Dismissal is a pure read: callers ask [`TraceSession::hint`] with the
/// current time and get `None` once the hint has expired. Nothing about
/// stroke or segment state is tied to the hint, so a hint outliving the
/// stroke it commented on is harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// What the hint is reacting to
    pub kind: HintKind,
    /// Display text
    pub message: &'static str,
    expires_at: Instant,
}

impl Hint {
    fn new(kind: HintKind, message: &'static str) -> Self {
        Hint {
            kind,
            message,
            expires_at: Instant::now() + settings::feedback::HINT_DURATION,
        }
    }

    /// Whether the hint should no longer be shown at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

const PRAISE_HINT: &str = "Perfect! Keep going!";
const RETRY_HINT: &str = "Try again - follow the dotted line";

// ===== TraceSession =====

/// Session state machine for the letter-tracing exercise
#[derive(Debug)]
pub struct TraceSession<P: CuePlayer = SilentCues> {
    alphabet: Alphabet,
    cues: P,

    /// Position in the letter sequence, always a valid index
    letter_index: usize,
    /// Letters completed this session; also the once-per-letter guard for
    /// [`SessionEvent::LetterCompleted`]
    completed_letters: HashSet<char>,

    /// Coverage matcher for the active letter, rebuilt on letter change
    matcher: StrokeMatcher,
    /// Per-stroke completion for the active letter
    completed_strokes: Vec<bool>,
    /// The stroke currently being traced, in `[0, stroke_count)`
    stroke_index: usize,

    /// Whether a gesture is in flight
    dragging: bool,
    /// Samples of the in-flight gesture
    current_path: Vec<Point>,
    /// Paths of rejected attempts, kept until a stroke is accepted
    attempted_paths: Vec<Vec<Point>>,

    hint: Option<Hint>,
    show_guide: bool,
}

impl TraceSession<SilentCues> {
    /// Start a session over `alphabet` with no audio
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_cues(alphabet, SilentCues)
    }
}

impl<P: CuePlayer> TraceSession<P> {
    /// Start a session over `alphabet`, playing cues through `cues`
    pub fn with_cues(alphabet: Alphabet, cues: P) -> Self {
        let mut session = TraceSession {
            alphabet,
            cues,
            letter_index: 0,
            completed_letters: HashSet::new(),
            matcher: StrokeMatcher::new(&[]),
            completed_strokes: Vec::new(),
            stroke_index: 0,
            dragging: false,
            current_path: Vec::new(),
            attempted_paths: Vec::new(),
            hint: None,
            show_guide: false,
        };
        session.load_letter();
        session
    }

    // ===== Queries =====

    /// The active letter
    pub fn current_letter(&self) -> char {
        self.current_glyph().map(|g| g.letter).unwrap_or('?')
    }

    /// The active glyph, `None` only for an empty alphabet
    pub fn current_glyph(&self) -> Option<&LetterGlyph> {
        self.alphabet.glyph(self.letter_index)
    }

    /// Position of the active letter in the sequence
    pub fn letter_index(&self) -> usize {
        self.letter_index
    }

    /// Index of the stroke currently being traced
    pub fn stroke_index(&self) -> usize {
        self.stroke_index
    }

    /// Letters completed so far this session
    pub fn completed_letters(&self) -> &HashSet<char> {
        &self.completed_letters
    }

    /// Whether every stroke of the active letter is complete
    pub fn is_letter_complete(&self) -> bool {
        !self.completed_strokes.is_empty() && self.completed_strokes.iter().all(|&done| done)
    }

    /// Per-stroke completion flags of the active letter
    pub fn completed_strokes(&self) -> &[bool] {
        &self.completed_strokes
    }

    /// Tolerance segments of a stroke of the active letter, for coverage
    /// feedback during the gesture
    pub fn segments(&self, stroke: usize) -> &[Segment] {
        self.matcher.segments(stroke)
    }

    /// Covered fraction of a stroke of the active letter
    pub fn coverage_ratio(&self, stroke: usize) -> f64 {
        self.matcher.coverage_ratio(stroke)
    }

    /// Samples of the gesture in flight (empty when idle)
    pub fn current_path(&self) -> &[Point] {
        &self.current_path
    }

    /// Paths of rejected attempts on the current stroke run
    pub fn attempted_paths(&self) -> &[Vec<Point>] {
        &self.attempted_paths
    }

    /// The transient hint, if one is still live at `now`
    pub fn hint(&self, now: Instant) -> Option<&Hint> {
        self.hint.as_ref().filter(|hint| !hint.is_expired(now))
    }

    /// Whether the guide overlay is on
    pub fn show_guide(&self) -> bool {
        self.show_guide
    }

    /// Whether a previous letter exists
    pub fn can_go_previous(&self) -> bool {
        self.letter_index > 0
    }

    /// Whether a next letter exists
    pub fn can_go_next(&self) -> bool {
        self.letter_index + 1 < self.alphabet.len()
    }

    // ===== Navigation =====

    /// Toggle the guide overlay
    pub fn toggle_guide(&mut self) {
        self.show_guide = !self.show_guide;
    }

    /// Go to the previous letter; clamped at the first
    pub fn previous_letter(&mut self) {
        self.go_to_letter(self.letter_index.saturating_sub(1));
    }

    /// Go to the next letter; clamped at the last
    pub fn next_letter(&mut self) {
        self.go_to_letter(self.letter_index + 1);
    }

    /// Jump to a letter by index; out-of-range indices are clamped
    pub fn go_to_letter(&mut self, index: usize) {
        let clamped = index.min(self.alphabet.len().saturating_sub(1));
        if clamped == self.letter_index {
            return;
        }
        self.letter_index = clamped;
        self.load_letter();
    }

    /// Acknowledge the completion celebration and move on to the next
    /// letter (clamped at the last)
    pub fn acknowledge_celebration(&mut self) {
        if self.can_go_next() {
            self.next_letter();
        }
    }

    // ===== Gesture state machine =====

    /// Pointer down: start a gesture at `point`.
    ///
    /// A down while a gesture is already in flight restarts the gesture;
    /// the previous samples are discarded but coverage they applied
    /// stays, coverage being monotonic until the letter changes.
    pub fn begin_stroke(&mut self, point: Point) {
        tracing::debug!(
            "gesture start at {:?}, letter {:?} stroke {}",
            point,
            self.current_letter(),
            self.stroke_index
        );
        self.dragging = true;
        self.current_path.clear();
        self.current_path.push(point);
        self.cues.play(Cue::Trace);
    }

    /// Pointer move: record the sample and apply coverage.
    ///
    /// Returns true when the sample covered at least one new segment.
    /// Ignored when no gesture is in flight.
    pub fn move_to(&mut self, point: Point) -> bool {
        if !self.dragging {
            return false;
        }
        self.current_path.push(point);
        self.matcher.update_coverage(point, self.stroke_index)
    }

    /// Pointer up: end the gesture and judge the attempt.
    ///
    /// Returns the events the attempt produced, in order. Ignored when no
    /// gesture is in flight; a gesture of fewer than two samples is
    /// abandoned without a verdict.
    pub fn end_stroke(&mut self) -> Vec<SessionEvent> {
        if !self.dragging {
            return Vec::new();
        }
        self.dragging = false;

        if self.current_path.len() < 2 {
            self.current_path.clear();
            return Vec::new();
        }

        let stroke = self.stroke_index;
        let verdict = self.matcher.evaluate_attempt(stroke);
        let attempt = std::mem::take(&mut self.current_path);
        tracing::debug!(
            "attempt on letter {:?} stroke {}: {}/{} covered, accepted={}",
            self.current_letter(),
            stroke,
            verdict.covered,
            verdict.total,
            verdict.accepted
        );

        let mut events = Vec::new();
        if verdict.accepted {
            self.accept_stroke(stroke, &mut events);
        } else {
            self.attempted_paths.push(attempt.clone());
            self.hint = Some(Hint::new(HintKind::Retry, RETRY_HINT));
            self.cues.play(Cue::Error);
            events.push(SessionEvent::StrokeRejected { stroke, attempt });
        }
        events
    }

    fn accept_stroke(&mut self, stroke: usize, events: &mut Vec<SessionEvent>) {
        if let Some(done) = self.completed_strokes.get_mut(stroke) {
            *done = true;
        }
        self.attempted_paths.clear();
        self.hint = Some(Hint::new(HintKind::Praise, PRAISE_HINT));
        self.cues.play(Cue::Success);
        events.push(SessionEvent::StrokeAccepted { stroke });

        if stroke + 1 < self.matcher.stroke_count() {
            self.stroke_index = stroke + 1;
        } else if self.is_letter_complete() {
            let letter = self.current_letter();
            // Completion signals once per letter: re-tracing a finished
            // letter re-accepts strokes but stays quiet here.
            if self.completed_letters.insert(letter) {
                tracing::info!("letter {:?} completed", letter);
                self.cues.play(Cue::Celebration);
                events.push(SessionEvent::LetterCompleted { letter });
            }
        }
    }

    /// Rebuild matcher and attempt state for the active letter. Runs
    /// synchronously on every letter change, before new input is taken.
    fn load_letter(&mut self) {
        let strokes = self
            .current_glyph()
            .map(|glyph| glyph.strokes.clone())
            .unwrap_or_default();
        self.matcher = StrokeMatcher::new(&strokes);
        self.completed_strokes = vec![false; strokes.len()];
        self.stroke_index = 0;
        self.dragging = false;
        self.current_path.clear();
        self.attempted_paths.clear();
        tracing::debug!(
            "loaded letter {:?} ({} strokes)",
            self.current_letter(),
            strokes.len()
        );
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    /// Cue player that records what it was asked to play
    #[derive(Debug, Clone, Default)]
    struct RecordingCues(Rc<RefCell<Vec<Cue>>>);

    impl CuePlayer for RecordingCues {
        fn play(&mut self, cue: Cue) {
            self.0.borrow_mut().push(cue);
        }
    }

    fn session() -> TraceSession {
        TraceSession::new(Alphabet::builtin())
    }

    /// Chord endpoints of a stroke of the active letter
    fn chord_of<P: CuePlayer>(session: &TraceSession<P>, stroke: usize) -> (Point, Point) {
        let segments = session.segments(stroke);
        (
            segments.first().unwrap().line.p0,
            segments.last().unwrap().line.p1,
        )
    }

    /// Trace a straight gesture from `from` to `to` with dense sampling
    fn trace<P: CuePlayer>(
        session: &mut TraceSession<P>,
        from: Point,
        to: Point,
    ) -> Vec<SessionEvent> {
        session.begin_stroke(from);
        for i in 1..=20 {
            session.move_to(from.lerp(to, i as f64 / 20.0));
        }
        session.end_stroke()
    }

    /// Trace the active stroke along its own chord
    fn trace_active_stroke<P: CuePlayer>(session: &mut TraceSession<P>) -> Vec<SessionEvent> {
        let (from, to) = chord_of(session, session.stroke_index());
        trace(session, from, to)
    }

    #[test]
    fn test_accepted_stroke_advances_stroke_index() {
        let mut session = session();
        assert_eq!(session.stroke_index(), 0);
        let events = trace_active_stroke(&mut session);
        assert_eq!(events, vec![SessionEvent::StrokeAccepted { stroke: 0 }]);
        assert_eq!(session.stroke_index(), 1);
        assert_eq!(session.completed_strokes(), &[true, false, false]);
    }

    #[test]
    fn test_rejected_stroke_stays_put_and_records_attempt() {
        let mut session = session();
        // Trace far away from letter A's first stroke
        let events = trace(
            &mut session,
            Point::new(700.0, 550.0),
            Point::new(750.0, 550.0),
        );
        assert!(matches!(
            events.as_slice(),
            [SessionEvent::StrokeRejected { stroke: 0, .. }]
        ));
        assert_eq!(session.stroke_index(), 0);
        assert_eq!(session.attempted_paths().len(), 1);
        assert_eq!(session.completed_strokes(), &[false, false, false]);

        let hint = session.hint(Instant::now()).unwrap();
        assert_eq!(hint.kind, HintKind::Retry);
    }

    #[test]
    fn test_hint_auto_dismisses() {
        let mut session = session();
        trace_active_stroke(&mut session);
        let now = Instant::now();
        assert!(session.hint(now).is_some());
        assert!(session.hint(now + Duration::from_secs(2)).is_none());
    }

    #[test]
    fn test_acceptance_clears_recorded_attempts() {
        let mut session = session();
        trace(
            &mut session,
            Point::new(700.0, 550.0),
            Point::new(750.0, 550.0),
        );
        assert_eq!(session.attempted_paths().len(), 1);
        trace_active_stroke(&mut session);
        assert!(session.attempted_paths().is_empty());
    }

    #[test]
    fn test_letter_completion_fires_exactly_once() {
        let mut session = session();
        let mut completions = 0;
        for _ in 0..3 {
            for event in trace_active_stroke(&mut session) {
                if matches!(event, SessionEvent::LetterCompleted { .. }) {
                    completions += 1;
                }
            }
        }
        assert_eq!(completions, 1);
        assert!(session.is_letter_complete());
        assert!(session.completed_letters().contains(&'A'));

        // Re-tracing the last stroke of the finished letter re-accepts it
        // but stays quiet about completion
        let events = trace_active_stroke(&mut session);
        assert_eq!(events, vec![SessionEvent::StrokeAccepted { stroke: 2 }]);
        assert_eq!(session.completed_strokes(), &[true, true, true]);
    }

    #[test]
    fn test_third_stroke_completion_preserves_earlier_strokes() {
        let mut session = session();
        trace_active_stroke(&mut session);
        trace_active_stroke(&mut session);
        assert_eq!(session.completed_strokes(), &[true, true, false]);

        let events = trace_active_stroke(&mut session);
        assert_eq!(
            events,
            vec![
                SessionEvent::StrokeAccepted { stroke: 2 },
                SessionEvent::LetterCompleted { letter: 'A' },
            ]
        );
        assert_eq!(session.completed_strokes(), &[true, true, true]);
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut session = session();
        session.previous_letter();
        assert_eq!(session.letter_index(), 0);
        assert!(!session.can_go_previous());

        session.go_to_letter(999);
        assert_eq!(session.letter_index(), 25);
        session.next_letter();
        assert_eq!(session.letter_index(), 25);
        assert!(!session.can_go_next());
    }

    #[test]
    fn test_letter_change_resets_attempt_state() {
        let mut session = session();
        trace_active_stroke(&mut session);
        trace(
            &mut session,
            Point::new(700.0, 550.0),
            Point::new(750.0, 550.0),
        );
        assert_eq!(session.stroke_index(), 1);
        assert_eq!(session.attempted_paths().len(), 1);

        session.next_letter();
        assert_eq!(session.current_letter(), 'B');
        assert_eq!(session.stroke_index(), 0);
        assert!(session.attempted_paths().is_empty());
        assert!(session.current_path().is_empty());
        assert_eq!(session.coverage_ratio(0), 0.0);
        assert_eq!(session.completed_strokes(), &[false, false, false]);

        // Going back rebuilds letter A from scratch
        session.previous_letter();
        assert_eq!(session.current_letter(), 'A');
        assert_eq!(session.completed_strokes(), &[false, false, false]);
    }

    #[test]
    fn test_completed_letters_survive_navigation() {
        let mut session = session();
        for _ in 0..3 {
            trace_active_stroke(&mut session);
        }
        session.next_letter();
        session.previous_letter();
        assert!(session.completed_letters().contains(&'A'));
    }

    #[test]
    fn test_spurious_move_and_end_are_ignored() {
        let mut session = session();
        assert!(!session.move_to(Point::new(300.0, 500.0)));
        assert!(session.end_stroke().is_empty());
        assert!(session.current_path().is_empty());
        assert_eq!(session.coverage_ratio(0), 0.0);
    }

    #[test]
    fn test_tap_without_movement_is_abandoned() {
        let mut session = session();
        session.begin_stroke(Point::new(300.0, 500.0));
        let events = session.end_stroke();
        assert!(events.is_empty());
        assert!(session.attempted_paths().is_empty());
        assert_eq!(session.stroke_index(), 0);
    }

    #[test]
    fn test_acknowledge_celebration_advances_and_clamps() {
        let mut session = session();
        for _ in 0..3 {
            trace_active_stroke(&mut session);
        }
        session.acknowledge_celebration();
        assert_eq!(session.current_letter(), 'B');

        session.go_to_letter(25);
        session.acknowledge_celebration();
        assert_eq!(session.letter_index(), 25);
    }

    #[test]
    fn test_guide_toggle() {
        let mut session = session();
        assert!(!session.show_guide());
        session.toggle_guide();
        assert!(session.show_guide());
        session.toggle_guide();
        assert!(!session.show_guide());
    }

    #[test]
    fn test_cue_sequence() {
        let cues = RecordingCues::default();
        let handle = cues.0.clone();
        let mut session = TraceSession::with_cues(Alphabet::builtin(), cues);

        trace(
            &mut session,
            Point::new(700.0, 550.0),
            Point::new(750.0, 550.0),
        );
        assert_eq!(handle.borrow().as_slice(), &[Cue::Trace, Cue::Error]);

        handle.borrow_mut().clear();
        for _ in 0..3 {
            trace_active_stroke(&mut session);
        }
        assert_eq!(
            handle.borrow().as_slice(),
            &[
                Cue::Trace,
                Cue::Success,
                Cue::Trace,
                Cue::Success,
                Cue::Trace,
                Cue::Success,
                Cue::Celebration,
            ]
        );
    }
}
