//! Style-driven structural folding.
//!
//! One brace folder serves every grammar: operator-styled brackets open
//! and close levels, line-state flags extend comment and string runs
//! into folds, and a brace sitting first on the following line is
//! pulled up so the line that introduced it heads the fold.

use tracing::{debug, trace_span};

use crate::document::Document;
use crate::line_state::LineState;

/// Base fold level; nesting counts upward from here.
pub const FOLD_BASE: u16 = 0x400;

const LEVEL_MASK: u32 = 0x0fff;
const HEADER_FLAG: u32 = 0x2000;

/// Per-line fold record: the level a line starts on and the level its
/// trailing edge hands to the next line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FoldLevel {
    pub start: u16,
    pub end: u16,
}

impl Default for FoldLevel {
    fn default() -> Self {
        Self {
            start: FOLD_BASE,
            end: FOLD_BASE,
        }
    }
}

impl FoldLevel {
    /// A line heads a fold when it hands a deeper level onward.
    #[inline]
    pub fn is_header(self) -> bool {
        self.end > self.start
    }

    /// Pack into a per-line word: start level in the low bits, a header
    /// flag, the end level in the high half.
    pub fn encode(self) -> u32 {
        let mut word = u32::from(self.start) & LEVEL_MASK;
        if self.is_header() {
            word |= HEADER_FLAG;
        }
        word | (u32::from(self.end) & LEVEL_MASK) << 16
    }

    /// Unpack a per-line word; flag bits are ignored.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "both halves are masked to twelve bits"
    )]
    pub fn decode(word: u32) -> Self {
        Self {
            start: (word & LEVEL_MASK) as u16,
            end: ((word >> 16) & LEVEL_MASK) as u16,
        }
    }
}

/// Recompute fold records for the byte range `start .. start + length`.
///
/// Styles and line states must be current for the range, and for the
/// line after it so flag deltas see the run's far edge. `start` must
/// sit on a line boundary; the record of the line before it seeds the
/// walk, so a partial pass joins seamlessly onto earlier records.
pub fn fold(doc: &mut Document, start: u32, length: u32) {
    let _span = trace_span!("fold", start, length).entered();
    let end = start.saturating_add(length).min(doc.len());
    if start >= end {
        return;
    }
    let mut line = doc.line_of(start);
    debug_assert!(
        doc.line_start(line) == start,
        "fold must start on a line boundary"
    );

    let mut pos = start;
    let mut fold_prev = LineState::default();
    let mut level_current = i32::from(FOLD_BASE);
    if line > 0 {
        level_current = i32::from(FoldLevel::decode(doc.fold_level(line - 1)).end);
        fold_prev = LineState::decode(doc.line_state(line - 1));
        if let Some(brace) = brace_on_next_line(doc, line - 1) {
            // The previous pass counted this brace for the line above.
            pos = brace + 1;
        }
        debug!(line, level = level_current, "seeded from previous line");
    }

    let mut level_next = level_current;
    let mut fold_current = LineState::decode(doc.line_state(line));
    let mut line_start_next = doc.line_start(line + 1).min(end);
    let mut visible = false;

    while pos < end {
        let style = doc.style_at(pos);
        if style.is_fold_operator() {
            match doc.byte_at(pos) {
                b'{' | b'[' | b'(' => level_next += 1,
                b'}' | b']' | b')' => level_next -= 1,
                _ => {}
            }
        }
        if !visible && !style.is_space_equiv() {
            visible = true;
        }
        pos += 1;
        if pos == line_start_next {
            let fold_next = LineState::decode(doc.line_state(line + 1));
            level_next = level_next.max(i32::from(FOLD_BASE));
            if fold_current.line_comment {
                level_next += i32::from(fold_next.line_comment) - i32::from(fold_prev.line_comment);
            } else if fold_current.string_continues {
                level_next +=
                    i32::from(fold_next.string_continues) - i32::from(fold_prev.string_continues);
            } else if visible {
                if let Some(brace) = brace_on_next_line(doc, line) {
                    level_next += 1;
                    pos = brace + 1;
                }
            }
            let record = FoldLevel {
                start: clamp_level(level_current),
                end: clamp_level(level_next),
            };
            doc.set_fold_level(line, record.encode());
            line += 1;
            line_start_next = doc.line_start(line + 1).min(end);
            level_current = level_next;
            fold_prev = fold_current;
            fold_current = fold_next;
            visible = false;
        }
    }
}

/// Position of a brace opening the next line, when that line's first
/// visible character is an operator-styled `{`.
fn brace_on_next_line(doc: &Document, line: u32) -> Option<u32> {
    let next = line + 1;
    if next >= doc.line_count() {
        return None;
    }
    let mut pos = doc.line_start(next);
    let limit = doc.line_start(next + 1);
    while pos < limit && matches!(doc.byte_at(pos), b' ' | b'\t') {
        pos += 1;
    }
    if pos < limit && doc.byte_at(pos) == b'{' && doc.style_at(pos).is_fold_operator() {
        return Some(pos);
    }
    None
}

fn clamp_level(level: i32) -> u16 {
    u16::try_from(level.max(0)).unwrap_or(u16::MAX)
}
