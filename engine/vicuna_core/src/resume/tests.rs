use pretty_assertions::assert_eq;

use crate::document::Document;
use crate::style::Style;

use super::{backtrack_to_start, lookback_non_white, ScanWindow};

const MASK: u32 = 1 << 4;

// === Backtracking ===

#[test]
fn document_start_needs_no_backtrack() {
    let doc = Document::new("a\nb\n");
    let window = backtrack_to_start(&doc, MASK, 0, doc.len(), Style::Default);
    assert_eq!(
        window,
        ScanWindow {
            start: 0,
            length: doc.len(),
            initial: Style::Default,
        }
    );
}

#[test]
fn clean_previous_line_keeps_the_window() {
    let doc = Document::new("a\nb\nc\n");
    let start = doc.line_start(1);
    let window = backtrack_to_start(&doc, MASK, start, doc.len() - start, Style::Default);
    assert_eq!(window.start, start);
    assert_eq!(window.initial, Style::Default);
}

#[test]
fn flagged_previous_line_widens_the_window() {
    let mut doc = Document::new("a\nb\nc\n");
    doc.set_line_state(1, MASK);
    doc.fill_styles(0, 4, Style::TripleString);
    let start = doc.line_start(2);
    let window = backtrack_to_start(&doc, MASK, start, doc.len() - start, Style::Default);
    // Line 0 ends clean, so the window restarts on line 1.
    assert_eq!(window.start, doc.line_start(1));
    assert_eq!(window.initial, Style::TripleString);
    assert_eq!(window.start + window.length, doc.len());
}

#[test]
fn run_reaching_the_top_restarts_at_zero() {
    let mut doc = Document::new("a\nb\nc\n");
    doc.set_line_state(0, MASK);
    doc.set_line_state(1, MASK);
    let start = doc.line_start(2);
    let window = backtrack_to_start(&doc, MASK, start, doc.len() - start, Style::TripleString);
    assert_eq!(window.start, 0);
    assert_eq!(window.length, doc.len());
    assert_eq!(window.initial, Style::Default);
}

#[test]
fn unrelated_state_bits_are_ignored() {
    let mut doc = Document::new("a\nb\nc\n");
    doc.set_line_state(1, !MASK);
    let start = doc.line_start(2);
    let window = backtrack_to_start(&doc, MASK, start, doc.len() - start, Style::Default);
    assert_eq!(window.start, start);
}

// === Lookback ===

#[test]
fn finds_last_visible_char() {
    let mut doc = Document::new("ab  ");
    doc.fill_styles(0, 2, Style::Identifier);
    assert_eq!(lookback_non_white(&doc, 4), ('b', Style::Identifier));
}

#[test]
fn skips_comment_runs() {
    let text = "x /*c*/ ";
    let mut doc = Document::new(text);
    doc.fill_styles(0, 1, Style::Identifier);
    doc.fill_styles(2, 7, Style::CommentBlock);
    assert_eq!(lookback_non_white(&doc, doc.len()), ('x', Style::Identifier));
}

#[test]
fn first_text_byte_is_examined() {
    let mut doc = Document::new("x ");
    doc.fill_styles(0, 1, Style::Identifier);
    assert_eq!(lookback_non_white(&doc, 1), ('x', Style::Identifier));
}

#[test]
fn all_blank_answers_the_sentinel() {
    let doc = Document::new("   ");
    assert_eq!(lookback_non_white(&doc, doc.len()), ('\0', Style::Default));
    let empty = Document::new("");
    assert_eq!(lookback_non_white(&empty, 0), ('\0', Style::Default));
}

#[test]
fn multibyte_char_decodes_whole() {
    let mut doc = Document::new("é ");
    doc.fill_styles(0, 2, Style::Identifier);
    assert_eq!(lookback_non_white(&doc, doc.len()), ('é', Style::Identifier));
}
