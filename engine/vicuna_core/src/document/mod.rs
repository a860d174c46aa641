//! In-memory document: source text, line index, and per-line stores.
//!
//! `Document` is the reference implementation of the buffer collaborator:
//! it owns the text, a line-start index built with `memchr`, one `Style`
//! per text byte, one packed line state per line, and one packed fold
//! record per line. Hosts with their own buffers reimplement this
//! surface; the tokenizers and the folder consume it and nothing else.
//!
//! # Sentinel convention
//!
//! Position queries past the end of the text answer `0x00` / `'\0'`
//! rather than failing, so scan loops terminate on the sentinel the same
//! way they stop mid-buffer on real delimiters.

use crate::fold::FoldLevel;
use crate::style::Style;

/// Source text plus every per-byte and per-line store the engine
/// persists.
///
/// Line boundaries follow the usual editor rule: a break occurs after
/// `\n` and after a lone `\r`; `\r\n` is one break. A trailing break
/// opens a final empty line.
#[derive(Clone, Debug)]
pub struct Document {
    /// The source text.
    text: Box<str>,
    /// Byte offset of the first byte of every line. `line_starts[0] == 0`.
    line_starts: Vec<u32>,
    /// One style per text byte.
    styles: Vec<Style>,
    /// One packed `LineState` per line.
    line_states: Vec<u32>,
    /// One packed fold record per line.
    fold_levels: Vec<u32>,
}

impl Document {
    /// Build a document over `text` with every byte styled `Default`,
    /// every line state zero, and every fold record at the baseline.
    ///
    /// Positions are 32-bit throughout the engine; texts longer than
    /// `u32::MAX` bytes are not supported.
    pub fn new(text: &str) -> Self {
        debug_assert!(
            u32::try_from(text.len()).is_ok(),
            "text exceeds 32-bit positions"
        );
        let line_starts = build_line_starts(text);
        let line_count = line_starts.len();
        Self {
            text: text.into(),
            line_starts,
            styles: vec![Style::Default; text.len()],
            line_states: vec![0; line_count],
            fold_levels: vec![FoldLevel::default().encode(); line_count],
        }
    }

    // === Text queries ===

    /// The full source text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    /// Returns `true` for an empty text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte at `pos`, or `0x00` past the end.
    #[inline]
    pub fn byte_at(&self, pos: u32) -> u8 {
        self.text.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Character starting at `pos`, or `'\0'` past the end.
    ///
    /// # Contract
    ///
    /// `pos` is expected to be a character boundary; a mid-character
    /// position answers `'\0'` like the sentinel.
    #[inline]
    pub fn char_at(&self, pos: u32) -> char {
        let pos = pos as usize;
        if pos >= self.text.len() || !self.text.is_char_boundary(pos) {
            return '\0';
        }
        self.text[pos..].chars().next().unwrap_or('\0')
    }

    /// Character ending at `pos`, or `'\0'` at the start of the text.
    ///
    /// Walks one full UTF-8 sequence backwards, so multi-byte characters
    /// answer correctly from the position after them.
    #[inline]
    pub fn char_before(&self, pos: u32) -> char {
        let pos = (pos as usize).min(self.text.len());
        if pos == 0 || !self.text.is_char_boundary(pos) {
            return '\0';
        }
        self.text[..pos].chars().next_back().unwrap_or('\0')
    }

    /// Text in `start..end`.
    ///
    /// The range is clamped to the text and both ends are
    /// boundary-checked, answering `""` rather than slicing
    /// mid-character.
    pub fn slice(&self, start: u32, end: u32) -> &str {
        let len = self.text.len();
        let start = (start as usize).min(len);
        let end = (end as usize).min(len).max(start);
        if self.text.is_char_boundary(start) && self.text.is_char_boundary(end) {
            &self.text[start..end]
        } else {
            ""
        }
    }

    // === Line queries ===

    /// Number of lines, at least 1.
    #[inline]
    pub fn line_count(&self) -> u32 {
        u32::try_from(self.line_starts.len()).unwrap_or(u32::MAX)
    }

    /// The line containing `pos`. Positions past the end answer the
    /// last line. Line-break bytes belong to the line they terminate.
    #[inline]
    pub fn line_of(&self, pos: u32) -> u32 {
        let idx = self.line_starts.partition_point(|&start| start <= pos);
        // line_starts[0] == 0, so idx >= 1.
        u32::try_from(idx - 1).unwrap_or(u32::MAX)
    }

    /// Byte offset of the first byte of `line`. Lines past the end
    /// answer the text length, so `line_start(line + 1)` is always a
    /// valid scan limit.
    #[inline]
    pub fn line_start(&self, line: u32) -> u32 {
        self.line_starts
            .get(line as usize)
            .copied()
            .unwrap_or_else(|| self.len())
    }

    // === Per-line stores ===

    /// Persisted lexical state of `line`; zero for lines out of range.
    #[inline]
    pub fn line_state(&self, line: u32) -> u32 {
        self.line_states.get(line as usize).copied().unwrap_or(0)
    }

    /// Record the lexical state of `line`. Out-of-range lines are
    /// ignored.
    #[inline]
    pub fn set_line_state(&mut self, line: u32, state: u32) {
        if let Some(slot) = self.line_states.get_mut(line as usize) {
            *slot = state;
        }
    }

    /// Packed fold record of `line`; the baseline record for lines out
    /// of range.
    #[inline]
    pub fn fold_level(&self, line: u32) -> u32 {
        self.fold_levels
            .get(line as usize)
            .copied()
            .unwrap_or_else(|| FoldLevel::default().encode())
    }

    /// Record the fold level of `line`. Out-of-range lines are ignored.
    #[inline]
    pub fn set_fold_level(&mut self, line: u32, level: u32) {
        if let Some(slot) = self.fold_levels.get_mut(line as usize) {
            *slot = level;
        }
    }

    // === Style store ===

    /// Style of the byte at `pos`; `Default` past the end.
    #[inline]
    pub fn style_at(&self, pos: u32) -> Style {
        self.styles
            .get(pos as usize)
            .copied()
            .unwrap_or(Style::Default)
    }

    /// All styles, one per text byte.
    #[inline]
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Assign `style` to every byte in `start..end`, clamped to the
    /// text.
    pub(crate) fn fill_styles(&mut self, start: u32, end: u32, style: Style) {
        debug_assert!(start <= end, "style run reversed: {start}..{end}");
        let len = self.styles.len();
        let start = (start as usize).min(len);
        let end = (end as usize).min(len).max(start);
        self.styles[start..end].fill(style);
    }
}

/// Build the line-start index: a break after every `\n` and after every
/// lone `\r`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "break positions lie within a text length-checked at construction"
)]
fn build_line_starts(text: &str) -> Vec<u32> {
    let bytes = text.as_bytes();
    let mut starts = vec![0u32];
    for pos in memchr::memchr2_iter(b'\r', b'\n', bytes) {
        if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
            continue;
        }
        starts.push(pos as u32 + 1);
    }
    starts
}
