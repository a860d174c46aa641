//! Scan-window resumption helpers.
//!
//! Tokenize calls land on arbitrary line boundaries. These helpers
//! rebuild the context a resumed scan needs: widening the window
//! backwards across continuation lines, and recovering the last visible
//! character before the window for lookbehind heuristics.

use tracing::debug;

use crate::document::Document;
use crate::style::Style;

/// Revised scan window produced by [`backtrack_to_start`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScanWindow {
    pub start: u32,
    pub length: u32,
    /// Style in force at `start`.
    pub initial: Style,
}

/// Widen a scan window backwards across lines whose persisted state
/// carries any bit of `mask`.
///
/// A set bit means the line hands an open construct to its successor,
/// so the requested start is not a clean boundary. The walk stops at
/// the first line that ends clean (or at the top) and the window
/// restarts on the line after it, with the initial style re-read from
/// the style store.
pub fn backtrack_to_start(
    doc: &Document,
    mask: u32,
    start: u32,
    length: u32,
    initial: Style,
) -> ScanWindow {
    let current = doc.line_of(start);
    if current == 0 {
        return ScanWindow {
            start,
            length,
            initial,
        };
    }
    let mut line = current - 1;
    while doc.line_state(line) & mask != 0 && line != 0 {
        line -= 1;
    }
    if doc.line_state(line) & mask == 0 {
        line += 1;
    }
    if line == current {
        return ScanWindow {
            start,
            length,
            initial,
        };
    }
    let new_start = doc.line_start(line);
    debug!(
        from = start,
        to = new_start,
        "backtracked across continuation lines"
    );
    ScanWindow {
        start: new_start,
        length: length + (start - new_start),
        initial: if new_start == 0 {
            Style::Default
        } else {
            doc.style_at(new_start - 1)
        },
    }
}

/// Last visible character before `start` and its style.
///
/// Walks the style store backwards past space-equivalent runs,
/// including the first byte of the text. Answers `('\0',
/// Style::Default)` when only blank space precedes the window.
pub fn lookback_non_white(doc: &Document, start: u32) -> (char, Style) {
    let mut back = start.min(doc.len());
    while back > 0 {
        let style = doc.style_at(back - 1);
        if !style.is_space_equiv() {
            return (doc.char_before(back), style);
        }
        back -= 1;
    }
    ('\0', Style::Default)
}

#[cfg(test)]
mod tests;
