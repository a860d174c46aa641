use pretty_assertions::assert_eq;

use super::EscapeState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Outer {
    Text,
    Quoted,
}

// === Budgets ===

#[test]
fn new_slot_is_inert() {
    let esc = EscapeState::new(Outer::Text);
    assert_eq!(esc.outer, Outer::Text);
    assert_eq!(esc.digits_left, 0);
    assert!(!esc.brace);
}

#[test]
fn simple_escape_ends_on_next_char() {
    let mut esc = EscapeState::new(Outer::Text);
    esc.reset(Outer::Quoted, 'n');
    assert_eq!(esc.digits_left, 1);
    assert!(esc.at_end('"'));
    assert_eq!(esc.outer, Outer::Quoted);
}

#[test]
fn hex_escape_counts_two_digits() {
    let mut esc = EscapeState::new(Outer::Text);
    esc.reset(Outer::Quoted, 'x');
    assert_eq!(esc.digits_left, 3);
    assert!(!esc.at_end('A'));
    assert!(!esc.at_end('b'));
    assert!(esc.at_end('"'));
}

#[test]
fn hex_escape_stops_early_on_non_hex() {
    let mut esc = EscapeState::new(Outer::Text);
    esc.reset(Outer::Quoted, 'x');
    assert!(esc.at_end('z'));
}

#[test]
fn unicode_escape_counts_four_digits() {
    let mut esc = EscapeState::new(Outer::Text);
    esc.reset(Outer::Quoted, 'u');
    assert_eq!(esc.digits_left, 5);
    for digit in ['0', '1', 'c', 'F'] {
        assert!(!esc.at_end(digit), "budget must survive digit {digit:?}");
    }
    assert!(esc.at_end('"'));
}

#[test]
fn literal_reset_spans_one_char() {
    let mut esc = EscapeState::new(Outer::Text);
    esc.reset_literal(Outer::Quoted);
    assert_eq!(esc.digits_left, 1);
    assert!(!esc.brace);
    assert!(esc.at_end('{'));
}

// === Braced Form ===

#[test]
fn braced_budget_covers_six_digits_and_closer() {
    let mut esc = EscapeState::new(Outer::Text);
    esc.reset(Outer::Quoted, 'u');
    esc.brace = true;
    esc.digits_left = 7;
    for digit in ['1', 'F', '6', '0', '0', 'a'] {
        assert!(!esc.at_end(digit), "budget must survive digit {digit:?}");
    }
    assert!(esc.at_end('}'));
    assert!(esc.brace);
}

#[test]
fn braced_form_ends_early_at_closer() {
    let mut esc = EscapeState::new(Outer::Text);
    esc.reset(Outer::Quoted, 'u');
    esc.brace = true;
    esc.digits_left = 7;
    assert!(!esc.at_end('7'));
    assert!(esc.at_end('}'));
}

// === Line-End Refusal ===

#[test]
fn try_reset_refuses_line_break() {
    let mut esc = EscapeState::new(Outer::Text);
    assert!(!esc.try_reset(Outer::Quoted, '\n'));
    assert!(!esc.try_reset(Outer::Quoted, '\r'));
    assert_eq!(esc.outer, Outer::Text);
    assert_eq!(esc.digits_left, 0);
}

#[test]
fn try_reset_accepts_ordinary_chars() {
    let mut esc = EscapeState::new(Outer::Text);
    assert!(esc.try_reset(Outer::Quoted, 'u'));
    assert_eq!(esc.outer, Outer::Quoted);
    assert_eq!(esc.digits_left, 5);
}

#[test]
fn try_reset_accepts_buffer_end_sentinel() {
    // The NUL sentinel past the buffer is not a line break; the escape
    // opens and ends at the next countdown.
    let mut esc = EscapeState::new(Outer::Text);
    assert!(esc.try_reset(Outer::Quoted, '\0'));
    assert_eq!(esc.digits_left, 1);
}
