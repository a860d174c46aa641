//! Per-line continuation state and its `u32` codec.
//!
//! One `LineState` is persisted per line. It carries exactly the bits a
//! tokenizer or the folder needs to resume at the following line without
//! re-scanning anything earlier. Both grammar instances share one
//! layout:
//!
//! ```text
//! bit  0      line is empty (whitespace only)
//! bit  1      line is a line comment
//! bit  2      line ends inside a multi-line / triple construct
//! bit  3      line's first visible token closes a scope
//! bit  4      interpolation or markup construct still open at line end
//! bits 5..8   reserved, always zero
//! bits 8..16  block-comment nesting depth, saturating
//! bits 16..32 leading-indent count, saturating
//! ```

/// Decoded per-line continuation record.
///
/// `encode`/`decode` are bit-exact inverses over every field value; the
/// reserved bits decode to nothing and encode to zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LineState {
    /// Line holds no visible characters and no other flag applies.
    pub empty: bool,
    /// Line's visible content is entirely a line comment.
    pub line_comment: bool,
    /// Line ends inside an unterminated multi-line or triple construct.
    pub string_continues: bool,
    /// Line's first visible token is `}`, `]`, `)`, or a closing word.
    pub close_brace: bool,
    /// String interpolation or markup is still open at the line end.
    pub interpolation: bool,
    /// Block-comment nesting depth at the line end.
    pub comment_depth: u8,
    /// Number of leading space/tab characters, each counting one.
    pub indent_count: u16,
}

impl LineState {
    /// Mask of bit 0 in the packed word.
    pub const EMPTY: u32 = 1;
    /// Mask of bit 1 in the packed word.
    pub const LINE_COMMENT: u32 = 1 << 1;
    /// Mask of bit 2 in the packed word.
    pub const STRING_CONTINUES: u32 = 1 << 2;
    /// Mask of bit 3 in the packed word.
    pub const CLOSE_BRACE: u32 = 1 << 3;
    /// Mask of bit 4 in the packed word.
    pub const INTERPOLATION: u32 = 1 << 4;

    /// Pack into the persisted `u32` layout.
    pub fn encode(self) -> u32 {
        let mut word = 0;
        if self.empty {
            word |= Self::EMPTY;
        }
        if self.line_comment {
            word |= Self::LINE_COMMENT;
        }
        if self.string_continues {
            word |= Self::STRING_CONTINUES;
        }
        if self.close_brace {
            word |= Self::CLOSE_BRACE;
        }
        if self.interpolation {
            word |= Self::INTERPOLATION;
        }
        word | (u32::from(self.comment_depth) << 8) | (u32::from(self.indent_count) << 16)
    }

    /// Unpack from the persisted `u32` layout. Reserved bits are
    /// ignored.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "both counter fields are masked to their stored width"
    )]
    pub fn decode(word: u32) -> Self {
        Self {
            empty: word & Self::EMPTY != 0,
            line_comment: word & Self::LINE_COMMENT != 0,
            string_continues: word & Self::STRING_CONTINUES != 0,
            close_brace: word & Self::CLOSE_BRACE != 0,
            interpolation: word & Self::INTERPOLATION != 0,
            comment_depth: ((word >> 8) & 0xFF) as u8,
            indent_count: (word >> 16) as u16,
        }
    }

    /// Clamp a scan-time nesting depth into the persisted width.
    #[inline]
    pub fn saturate_depth(depth: u32) -> u8 {
        u8::try_from(depth).unwrap_or(u8::MAX)
    }

    /// Clamp a scan-time indent count into the persisted width.
    #[inline]
    pub fn saturate_indent(count: u32) -> u16 {
        u16::try_from(count).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests;
