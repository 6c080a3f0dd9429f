// Copyright 2026 the Abecedary Authors
// SPDX-License-Identifier: Apache-2.0

//! Headless demo for the tracing engine.
//!
//! Replays a scripted perfect trace of every letter in the curriculum and
//! logs the events the session emits. Pass a path to a TOML letter table
//! to run a custom curriculum instead of the built-in A–Z.

use anyhow::{Context, Result};
use kurbo::Point;

use abecedary::{Alphabet, LoggedCues, SessionEvent, TraceSession};

fn main() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("abecedary=info".parse().unwrap()),
        )
        .init();

    let alphabet = load_alphabet()?;
    let mut session = TraceSession::with_cues(alphabet, LoggedCues);

    loop {
        let letter = session.current_letter();
        let stroke_count = session.completed_strokes().len();
        tracing::info!("tracing letter {:?} ({} strokes)", letter, stroke_count);

        for _ in 0..stroke_count {
            for event in trace_active_stroke(&mut session) {
                tracing::info!("event: {:?}", event);
            }
        }
        if !session.is_letter_complete() {
            tracing::warn!("scripted trace did not complete letter {:?}", letter);
        }

        if !session.can_go_next() {
            break;
        }
        session.acknowledge_celebration();
    }

    tracing::info!(
        "session finished: {} letters completed",
        session.completed_letters().len()
    );
    Ok(())
}

/// Load the letter table named on the command line, or the built-in A–Z
fn load_alphabet() -> Result<Alphabet> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() <= 1 {
        return Ok(Alphabet::builtin());
    }

    let path = std::path::PathBuf::from(&args[1]);
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("reading letter table {}", path.display()))?;
    let alphabet = Alphabet::from_toml_str(&source)
        .with_context(|| format!("parsing letter table {}", path.display()))?;
    tracing::info!(
        "loaded {} letters from {}",
        alphabet.len(),
        path.display()
    );
    Ok(alphabet)
}

/// Trace the active stroke along its chord with dense sampling
fn trace_active_stroke(session: &mut TraceSession<LoggedCues>) -> Vec<SessionEvent> {
    let segments = session.segments(session.stroke_index());
    let (from, to) = match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => (first.line.p0, last.line.p1),
        // An untraceable stroke cannot be passed; bail out of the demo
        _ => return vec![],
    };

    session.begin_stroke(from);
    for i in 1..=20 {
        session.move_to(Point::lerp(from, to, i as f64 / 20.0));
    }
    session.end_stroke()
}
