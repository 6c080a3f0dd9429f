// Copyright 2026 the Abecedary Authors
// SPDX-License-Identifier: Apache-2.0

//! The tracing curriculum: an ordered letter sequence with per-letter
//! stroke paths.
//!
//! The built-in table covers A–Z in the 800×600 glyph coordinate space.
//! A custom table can be supplied at initialization as TOML; it is
//! validated up front so that a stroke nobody can ever pass surfaces as
//! a data defect instead of a silent dead end at runtime.

use serde::Deserialize;
use thiserror::Error;

use crate::stroke::TargetStroke;

// ===== Errors =====

/// Problems found in a letter table
#[derive(Debug, Error)]
pub enum AlphabetError {
    /// The TOML did not parse
    #[error("failed to parse letter table: {0}")]
    Parse(#[from] toml::de::Error),

    /// The table has no letters at all
    #[error("letter table is empty")]
    Empty,

    /// The same letter appears twice
    #[error("duplicate letter {0:?} in letter table")]
    DuplicateLetter(char),

    /// A stroke can never be traced (fewer than two coordinate pairs, or
    /// zero extent)
    #[error("letter {letter:?} stroke {stroke} has no traceable extent")]
    UntraceableStroke { letter: char, stroke: usize },
}

// ===== LetterGlyph =====

/// One letter and the ordered stroke paths used to trace it
#[derive(Debug, Clone, Deserialize)]
pub struct LetterGlyph {
    /// The letter this glyph teaches
    pub letter: char,
    /// Ordered stroke path descriptions (1–4 typical)
    pub strokes: Vec<String>,
}

impl LetterGlyph {
    /// Build a glyph, substituting the generic practice pattern when no
    /// strokes are given
    pub fn new(letter: char, strokes: Vec<String>) -> Self {
        let strokes = if strokes.is_empty() {
            fallback_strokes()
        } else {
            strokes
        };
        LetterGlyph { letter, strokes }
    }
}

// ===== Alphabet =====

/// The ordered letter sequence of a session
#[derive(Debug, Clone)]
pub struct Alphabet {
    letters: Vec<LetterGlyph>,
}

/// TOML wire shape: `[[letters]]` entries with `letter` and `strokes`
#[derive(Debug, Deserialize)]
struct LetterTable {
    letters: Vec<LetterGlyph>,
}

impl Alphabet {
    /// The built-in A–Z curriculum
    pub fn builtin() -> Self {
        let letters = LETTER_STROKES
            .iter()
            .map(|(letter, strokes)| {
                LetterGlyph::new(*letter, strokes.iter().map(|s| s.to_string()).collect())
            })
            .collect();
        Alphabet { letters }
    }

    /// Build from glyphs supplied at initialization, validating the data
    pub fn from_letters(letters: Vec<LetterGlyph>) -> Result<Self, AlphabetError> {
        let letters = letters
            .into_iter()
            .map(|glyph| LetterGlyph::new(glyph.letter, glyph.strokes))
            .collect();
        let alphabet = Alphabet { letters };
        alphabet.validate()?;
        Ok(alphabet)
    }

    /// Parse and validate a TOML letter table
    pub fn from_toml_str(source: &str) -> Result<Self, AlphabetError> {
        let table: LetterTable = toml::from_str(source)?;
        Self::from_letters(table.letters)
    }

    /// Check the table for data defects: emptiness, duplicate letters,
    /// and strokes that can never be traced
    pub fn validate(&self) -> Result<(), AlphabetError> {
        if self.letters.is_empty() {
            return Err(AlphabetError::Empty);
        }
        let mut seen = std::collections::HashSet::new();
        for glyph in &self.letters {
            if !seen.insert(glyph.letter) {
                return Err(AlphabetError::DuplicateLetter(glyph.letter));
            }
            for (index, stroke) in glyph.strokes.iter().enumerate() {
                if !TargetStroke::new(stroke.as_str()).is_traceable() {
                    return Err(AlphabetError::UntraceableStroke {
                        letter: glyph.letter,
                        stroke: index,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of letters in the sequence
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// A glyph by position in the sequence
    pub fn glyph(&self, index: usize) -> Option<&LetterGlyph> {
        self.letters.get(index)
    }

    /// The glyphs in sequence order
    pub fn glyphs(&self) -> &[LetterGlyph] {
        &self.letters
    }
}

/// The generic two-stroke practice pattern used for letters without a
/// dedicated table entry
pub fn fallback_strokes() -> Vec<String> {
    FALLBACK_STROKES.iter().map(|s| s.to_string()).collect()
}

// ===== Built-in stroke tables =====

const FALLBACK_STROKES: [&str; 2] = ["M 250,100 L 250,500", "M 250,300 L 450,300"];

/// Stroke paths for A–Z, authored in the 800×600 canvas space. Stroke
/// order follows how the letters are taught: verticals and left-side
/// strokes first, then crossings.
const LETTER_STROKES: [(char, &[&str]); 26] = [
    (
        'A',
        &[
            "M 300,500 L 400,100", // Left to peak
            "M 400,100 L 500,500", // Peak to right
            "M 350,300 L 450,300", // Cross bar
        ],
    ),
    (
        'B',
        &[
            "M 300,100 L 300,500", // Vertical line
            "M 300,100 L 450,100 Q 500,100 500,200 Q 500,300 300,300", // Top curve
            "M 300,300 L 450,300 Q 500,300 500,400 Q 500,500 300,500", // Bottom curve
        ],
    ),
    (
        'C',
        &["M 500,150 Q 500,100 450,100 L 350,100 Q 300,100 300,150 L 300,450 Q 300,500 350,500 L 450,500 Q 500,500 500,450"],
    ),
    (
        'D',
        &[
            "M 300,100 L 300,500", // Vertical line
            "M 300,100 L 400,100 Q 500,100 500,250 L 500,350 Q 500,500 400,500 L 300,500", // Curve
        ],
    ),
    (
        'E',
        &[
            "M 500,100 L 300,100", // Top line
            "M 300,100 L 300,500", // Vertical line
            "M 300,300 L 450,300", // Middle line
            "M 300,500 L 500,500", // Bottom line
        ],
    ),
    (
        'F',
        &[
            "M 500,100 L 300,100", // Top line
            "M 300,100 L 300,500", // Vertical line
            "M 300,300 L 450,300", // Middle line
        ],
    ),
    (
        'G',
        &["M 500,150 Q 500,100 450,100 L 350,100 Q 300,100 300,150 L 300,450 Q 300,500 350,500 L 450,500 Q 500,500 500,450 L 500,300 L 400,300"],
    ),
    (
        'H',
        &[
            "M 300,100 L 300,500", // Left vertical
            "M 500,100 L 500,500", // Right vertical
            "M 300,300 L 500,300", // Middle line
        ],
    ),
    ('I', &["M 400,100 L 400,500"]),
    (
        'J',
        &["M 500,100 L 500,400 Q 500,500 400,500 L 350,500 Q 300,500 300,400"],
    ),
    (
        'K',
        &[
            "M 300,100 L 300,500", // Vertical line
            "M 300,300 L 500,100", // Upper diagonal
            "M 300,300 L 500,500", // Lower diagonal
        ],
    ),
    (
        'L',
        &[
            "M 300,100 L 300,500", // Vertical line
            "M 300,500 L 500,500", // Bottom line
        ],
    ),
    (
        'M',
        &[
            "M 200,500 L 200,100", // Left vertical
            "M 200,100 L 350,300", // First diagonal
            "M 350,300 L 500,100", // Second diagonal
            "M 500,100 L 500,500", // Right vertical
        ],
    ),
    (
        'N',
        &[
            "M 300,500 L 300,100", // Left vertical
            "M 300,100 L 500,500", // Diagonal
            "M 500,500 L 500,100", // Right vertical
        ],
    ),
    (
        'O',
        &["M 400,100 Q 300,100 300,200 L 300,400 Q 300,500 400,500 Q 500,500 500,400 L 500,200 Q 500,100 400,100"],
    ),
    (
        'P',
        &[
            "M 300,100 L 300,500", // Vertical line
            "M 300,100 L 450,100 Q 500,100 500,200 Q 500,300 300,300", // Curve
        ],
    ),
    (
        'Q',
        &[
            "M 400,100 Q 300,100 300,200 L 300,400 Q 300,500 400,500 Q 500,500 500,400 L 500,200 Q 500,100 400,100", // Circle
            "M 400,400 L 500,500", // Tail
        ],
    ),
    (
        'R',
        &[
            "M 300,100 L 300,500", // Vertical line
            "M 300,100 L 450,100 Q 500,100 500,200 Q 500,300 300,300", // Top curve
            "M 300,300 L 500,500", // Diagonal
        ],
    ),
    (
        'S',
        &["M 500,150 Q 500,100 450,100 L 350,100 Q 300,100 300,150 Q 300,300 500,300 Q 500,500 350,500 L 350,500 Q 300,500 300,450"],
    ),
    (
        'T',
        &[
            "M 300,100 L 500,100", // Top line
            "M 400,100 L 400,500", // Vertical line
        ],
    ),
    (
        'U',
        &["M 300,100 L 300,400 Q 300,500 400,500 Q 500,500 500,400 L 500,100"],
    ),
    (
        'V',
        &[
            "M 300,100 L 400,500", // Left diagonal
            "M 400,500 L 500,100", // Right diagonal
        ],
    ),
    (
        'W',
        &[
            "M 200,100 L 300,500", // First diagonal
            "M 300,500 L 400,300", // Second diagonal
            "M 400,300 L 500,500", // Third diagonal
            "M 500,500 L 600,100", // Fourth diagonal
        ],
    ),
    (
        'X',
        &[
            "M 300,100 L 500,500", // First diagonal
            "M 500,100 L 300,500", // Second diagonal
        ],
    ),
    (
        'Y',
        &[
            "M 300,100 L 400,300", // Upper left
            "M 500,100 L 400,300", // Upper right
            "M 400,300 L 400,500", // Lower vertical
        ],
    ),
    (
        'Z',
        &[
            "M 300,100 L 500,100", // Top line
            "M 500,100 L 300,500", // Diagonal
            "M 300,500 L 500,500", // Bottom line
        ],
    ),
];

// ===== Tests =====
