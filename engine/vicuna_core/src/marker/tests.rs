use pretty_assertions::assert_eq;

use crate::document::Document;
use crate::scan::{ScanContext, ScanState};
use crate::style::Style;

use super::highlight_task_marker;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Toy {
    Comment,
    Marker,
}

impl ScanState for Toy {
    fn style(self) -> Style {
        match self {
            Toy::Comment => Style::CommentLine,
            Toy::Marker => Style::TaskMarker,
        }
    }
}

// === Recognition ===

#[test]
fn recognizes_each_marker_word() {
    for word in ["TODO", "FIXME", "HACK", "XXX", "NOTE"] {
        let text = format!("{word} rest");
        let mut doc = Document::new(&text);
        let len = doc.len();
        let mut sc = ScanContext::new(&mut doc, 0, len, Toy::Comment);
        assert!(highlight_task_marker(&mut sc, Toy::Marker), "{word}");
        assert_eq!(sc.ch, ' ', "{word}");
        assert_eq!(sc.state(), Toy::Comment, "{word}");
        sc.complete();
        for pos in 0..word.len() {
            assert_eq!(doc.styles()[pos], Style::TaskMarker, "{word} at {pos}");
        }
        assert_eq!(doc.styles()[word.len()], Style::CommentLine, "{word}");
    }
}

#[test]
fn marker_at_buffer_end_matches() {
    let mut doc = Document::new("HACK");
    let mut sc = ScanContext::new(&mut doc, 0, 4, Toy::Comment);
    assert!(highlight_task_marker(&mut sc, Toy::Marker));
    sc.complete();
    assert_eq!(doc.styles(), &[Style::TaskMarker; 4]);
}

// === Boundaries ===

#[test]
fn trailing_word_chars_block_the_marker() {
    for text in ["TODOS", "TODO4", "XXXX", "NOTEple"] {
        let mut doc = Document::new(text);
        let len = doc.len();
        let mut sc = ScanContext::new(&mut doc, 0, len, Toy::Comment);
        assert!(!highlight_task_marker(&mut sc, Toy::Marker), "{text}");
        assert_eq!(sc.pos(), 0, "{text}");
    }
}

#[test]
fn leading_word_char_blocks_the_marker() {
    let mut doc = Document::new("xTODO");
    let mut sc = ScanContext::new(&mut doc, 0, 5, Toy::Comment);
    sc.forward();
    assert!(!highlight_task_marker(&mut sc, Toy::Marker));
}

#[test]
fn punctuation_before_the_marker_is_fine() {
    let mut doc = Document::new("//TODO");
    let mut sc = ScanContext::new(&mut doc, 0, 6, Toy::Comment);
    sc.forward_by(2);
    assert!(highlight_task_marker(&mut sc, Toy::Marker));
}

#[test]
fn ordinary_uppercase_words_do_not_match() {
    for text in ["TOAST", "FIX", "NO", "todo"] {
        let mut doc = Document::new(text);
        let len = doc.len();
        let mut sc = ScanContext::new(&mut doc, 0, len, Toy::Comment);
        assert!(!highlight_task_marker(&mut sc, Toy::Marker), "{text}");
    }
}
