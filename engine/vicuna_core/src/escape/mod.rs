//! Single-slot escape-sequence sub-state.
//!
//! Every string and character context shares this tiny machine: on the
//! introducing backslash (or interpolation marker) it records which
//! control state to resume into and how many characters the sequence may
//! still consume, then [`at_end`](EscapeState::at_end) counts the scan
//! down one character at a time. The slot is reset on entry and consumed
//! on exit; it never persists across lines.

use crate::chars::is_eol_char;

/// Escape sub-state, generic over the grammar's control-state enum.
#[derive(Copy, Clone, Debug)]
pub struct EscapeState<S> {
    /// Control state to resume into when the sequence ends.
    pub outer: S,
    /// Remaining character budget; the sequence also ends early at the
    /// first non-hex character.
    pub digits_left: i32,
    /// A brace-delimited form is open (`\u{...}`); the closing brace
    /// joins the sequence.
    pub brace: bool,
}

impl<S: Copy> EscapeState<S> {
    /// Fresh slot resuming into `outer` with no sequence open.
    pub fn new(outer: S) -> Self {
        Self {
            outer,
            digits_left: 0,
            brace: false,
        }
    }

    /// Open a backslash escape. The budget counts the characters still
    /// to consume: the marker and two hex digits for `\xNN`, the marker
    /// and four digits for `\uNNNN`, one character for simple escapes.
    pub fn reset(&mut self, outer: S, ch_next: char) {
        self.outer = outer;
        self.brace = false;
        self.digits_left = match ch_next {
            'x' => 3,
            'u' => 5,
            _ => 1,
        };
    }

    /// Like [`reset`](Self::reset), refusing to open a sequence when
    /// the backslash is the last character of its line.
    pub fn try_reset(&mut self, outer: S, ch_next: char) -> bool {
        if is_eol_char(ch_next) {
            return false;
        }
        self.reset(outer, ch_next);
        true
    }

    /// Open a one-character literal escape (`{{`, `}}`, `$$`).
    pub fn reset_literal(&mut self, outer: S) {
        self.outer = outer;
        self.brace = false;
        self.digits_left = 1;
    }

    /// Count `ch` against the budget. True when the sequence ends
    /// before `ch`: budget exhausted, or a non-hex character in a
    /// digit form.
    pub fn at_end(&mut self, ch: char) -> bool {
        self.digits_left -= 1;
        self.digits_left <= 0 || !ch.is_ascii_hexdigit()
    }
}

#[cfg(test)]
mod tests;
