//! Character classification shared by the grammar state machines.
//!
//! Identifier classes follow the "extended" convention of the lexer
//! family: any codepoint at or above U+0080 counts as an identifier
//! character, so accented names highlight without a Unicode table.

/// Table lookup replaces the multi-range `matches!` with a single indexed read.
/// The padding byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_TABLE: [u8; 256] = {
    // bit 0: identifier start, bit 1: identifier continue
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        let b = i as u8;
        let start = matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'_') || b >= 0x80;
        let cont = start || b.is_ascii_digit();
        table[i as usize] = (start as u8) | ((cont as u8) << 1);
        i += 1;
    }
    table
};

/// Returns `true` if `ch` can begin an identifier.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    !ch.is_ascii() || IS_IDENT_TABLE[ch as usize] & 1 != 0
}

/// Returns `true` if `ch` can continue an identifier.
#[inline]
pub fn is_identifier_char(ch: char) -> bool {
    !ch.is_ascii() || IS_IDENT_TABLE[ch as usize] & 2 != 0
}

/// Returns `true` if `ch` begins a numeric literal: a digit, or a dot
/// directly followed by a digit.
#[inline]
pub fn is_number_start(ch: char, ch_next: char) -> bool {
    ch.is_ascii_digit() || (ch == '.' && ch_next.is_ascii_digit())
}

/// Returns `true` while inside a numeric literal.
///
/// Identifier characters cover digits, hex/exponent letters, and `_`
/// separators; a sign continues only directly after an exponent marker;
/// a dot continues unless it starts a `..` range operator.
#[inline]
pub fn is_number_continue(ch_prev: char, ch: char, ch_next: char) -> bool {
    is_identifier_char(ch)
        || ((ch == '+' || ch == '-') && (ch_prev == 'e' || ch_prev == 'E'))
        || (ch == '.' && ch_next != '.')
}

/// Printable, non-space ASCII. Anything graphic that no other rule
/// claimed scans as an operator.
#[inline]
pub fn is_a_graphic(ch: char) -> bool {
    matches!(ch, '!'..='~')
}

/// Space or tab.
#[inline]
pub fn is_space_or_tab(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Space, tab, or line break.
#[inline]
pub fn is_space_char(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Carriage return or line feed.
#[inline]
pub fn is_eol_char(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}
