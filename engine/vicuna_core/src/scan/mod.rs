//! Scanning cursor fused with style-run emission.
//!
//! `ScanContext` is the single moving part of every tokenizer: a
//! character window over the document (`ch_prev`, `ch`, `ch_next`)
//! plus the open style run behind it. Grammars drive it with a small
//! verb set: `forward` steps, `set_state` closes the open run and
//! opens the next, `change_state` re-tags the open run in place, and
//! `complete` flushes the tail when the window is exhausted.
//!
//! The control states a grammar scans with are its own enum; the
//! [`ScanState`] trait maps each onto the shared [`Style`] code the
//! run is painted with.

use crate::document::Document;
use crate::style::Style;

/// A grammar's control state, paintable as a [`Style`].
///
/// Control states are richer than styles: several states may share one
/// style code, and the mapping is the only thing the engine needs from
/// them.
pub trait ScanState: Copy + Eq {
    fn style(self) -> Style;
}

/// Cursor over a scan window plus the open style run behind it.
///
/// # Contract
///
/// The window `[start, start + length)` is clamped to the document.
/// Between calls, `run_start <= pos` always holds and every byte below
/// `run_start` has its final style. Characters never straddle line
/// boundaries, so one `forward` crosses at most one boundary.
///
/// Lookahead is against the document, not the window: `ch` and
/// `ch_next` keep reading real text beyond the window end, and only
/// the end of the buffer reads as `'\0'`. Resumed scans depend on
/// this to make the same decisions a full pass would at the seam.
pub struct ScanContext<'a, S: ScanState> {
    doc: &'a mut Document,
    end: u32,
    pos: u32,
    run_start: u32,
    state: S,
    line: u32,
    line_start: u32,
    line_start_next: u32,
    /// Character before the cursor; `'\0'` at the document start.
    pub ch_prev: char,
    /// Character under the cursor; `'\0'` past the buffer.
    pub ch: char,
    /// Character after the cursor; `'\0'` past the buffer.
    pub ch_next: char,
    width: u32,
    width_next: u32,
}

impl<'a, S: ScanState> ScanContext<'a, S> {
    /// Open a scan window at `start` in control state `initial`.
    ///
    /// `start` must lie on a character boundary; tokenizers always
    /// resume on line boundaries, which satisfies this.
    pub fn new(doc: &'a mut Document, start: u32, length: u32, initial: S) -> Self {
        let end = start.saturating_add(length).min(doc.len());
        let line = doc.line_of(start);
        let line_start = doc.line_start(line);
        let line_start_next = doc.line_start(line + 1);
        let ch = doc.char_at(start);
        let ch_prev = doc.char_before(start);
        let mut sc = Self {
            doc,
            end,
            pos: start,
            run_start: start,
            state: initial,
            line,
            line_start,
            line_start_next,
            ch_prev,
            ch,
            ch_next: '\0',
            width: char_width(ch),
            width_next: 1,
        };
        sc.read_next();
        sc
    }

    // === Window queries ===

    /// True while the cursor is inside the window.
    #[inline]
    pub fn more(&self) -> bool {
        self.pos < self.end
    }

    /// Byte position of the cursor.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Line the cursor is on.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current control state.
    #[inline]
    pub fn state(&self) -> S {
        self.state
    }

    /// True at the first byte of a line.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.pos == self.line_start
    }

    /// True at the last character of a line: the `\n` of a `\r\n` pair,
    /// a lone `\r`, or the final character of the last line.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        self.pos + self.width >= self.line_start_next
    }

    // === Character lookahead ===

    /// True when the cursor sits on `first` followed by `second`.
    #[inline]
    pub fn matches(&self, first: char, second: char) -> bool {
        self.ch == first && self.ch_next == second
    }

    /// Three-character variant of [`matches`](Self::matches).
    #[inline]
    pub fn matches3(&self, first: char, second: char, third: char) -> bool {
        self.matches(first, second) && self.char_after_next() == third
    }

    /// True when the two characters after the cursor are `first` then
    /// `second`.
    #[inline]
    pub fn matches_next(&self, first: char, second: char) -> bool {
        self.ch_next == first && self.char_after_next() == second
    }

    /// Character two steps ahead of the cursor.
    #[inline]
    pub fn char_after_next(&self) -> char {
        self.doc.char_at(self.pos + self.width + self.width_next)
    }

    /// Byte at an absolute document position.
    #[inline]
    pub fn byte_at(&self, pos: u32) -> u8 {
        self.doc.byte_at(pos)
    }

    /// Character at an absolute document position.
    #[inline]
    pub fn char_at(&self, pos: u32) -> char {
        self.doc.char_at(pos)
    }

    /// First character on the current line at or after the cursor that
    /// is not a space or tab; `'\0'` when only blanks remain.
    pub fn line_next_char(&self) -> char {
        let mut pos = self.pos;
        loop {
            match self.doc.char_at(pos) {
                ' ' | '\t' => pos += 1,
                '\r' | '\n' | '\0' => return '\0',
                ch => return ch,
            }
        }
    }

    // === Movement ===

    /// Step one character forward.
    pub fn forward(&mut self) {
        if self.pos >= self.end {
            self.ch_prev = self.ch;
            self.ch = '\0';
            self.ch_next = '\0';
            self.width = 1;
            self.width_next = 1;
            return;
        }
        self.ch_prev = self.ch;
        self.pos += self.width;
        if self.pos >= self.line_start_next && self.line + 1 < self.doc.line_count() {
            self.line += 1;
            self.line_start = self.line_start_next;
            self.line_start_next = self.doc.line_start(self.line + 1);
        }
        self.ch = self.ch_next;
        self.width = self.width_next;
        self.read_next();
    }

    /// Step `count` characters forward.
    pub fn forward_by(&mut self, count: u32) {
        for _ in 0..count {
            self.forward();
        }
    }

    /// Jump `bytes` forward without characterwise stepping. The skipped
    /// bytes stay in the open run.
    ///
    /// # Contract
    ///
    /// The target must be a character boundary on the current line;
    /// callers jump over ASCII spans they have already measured.
    pub fn advance(&mut self, bytes: u32) {
        self.seek(self.pos.saturating_add(bytes));
    }

    /// Step one character backwards.
    ///
    /// # Contract
    ///
    /// Only reaches back into the open run on the current line; used to
    /// re-dispatch a single character under a different state.
    pub fn rewind(&mut self) {
        debug_assert!(self.pos > self.line_start, "rewind across a line boundary");
        debug_assert!(self.pos > self.run_start, "rewind into a flushed run");
        let width = u32::try_from(self.ch_prev.len_utf8()).unwrap_or(1);
        self.seek(self.pos.saturating_sub(width));
    }

    /// Re-sync every cursor field at an absolute position.
    fn seek(&mut self, pos: u32) {
        self.pos = pos;
        self.line = self.doc.line_of(pos);
        self.line_start = self.doc.line_start(self.line);
        self.line_start_next = self.doc.line_start(self.line + 1);
        self.ch = self.doc.char_at(pos);
        self.width = char_width(self.ch);
        self.ch_prev = self.doc.char_before(pos);
        self.read_next();
    }

    fn read_next(&mut self) {
        self.ch_next = self.doc.char_at(self.pos + self.width);
        self.width_next = char_width(self.ch_next);
    }

    // === Run emission ===

    /// Close the open run with the current state's style and open a new
    /// run in `state` at the cursor.
    pub fn set_state(&mut self, state: S) {
        self.doc
            .fill_styles(self.run_start, self.pos, self.state.style());
        self.run_start = self.pos;
        self.state = state;
    }

    /// Take the current character into the open run, then close it and
    /// open a new run in `state`.
    pub fn forward_set_state(&mut self, state: S) {
        self.forward();
        self.set_state(state);
    }

    /// Re-tag the open run without closing it.
    #[inline]
    pub fn change_state(&mut self, state: S) {
        self.state = state;
    }

    /// Text of the open run.
    #[inline]
    pub fn current_text(&self) -> &str {
        self.doc.slice(self.run_start, self.pos)
    }

    /// Flush the open run to the end of the window.
    pub fn complete(&mut self) {
        self.doc
            .fill_styles(self.run_start, self.end, self.state.style());
        self.run_start = self.end;
    }

    // === Per-line state ===

    /// Persist the packed lexical state of the current line.
    #[inline]
    pub fn set_line_state(&mut self, state: u32) {
        self.doc.set_line_state(self.line, state);
    }

    /// Read the persisted state of any line.
    #[inline]
    pub fn line_state(&self, line: u32) -> u32 {
        self.doc.line_state(line)
    }
}

#[inline]
fn char_width(ch: char) -> u32 {
    u32::try_from(ch.len_utf8()).unwrap_or(1)
}
