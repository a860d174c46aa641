//! Scan loop of the Zig-flavored grammar.

use tracing::trace_span;

use vicuna_core::chars::{
    is_a_graphic, is_identifier_char, is_identifier_start, is_number_continue, is_number_start,
    is_space_char,
};
use vicuna_core::marker::highlight_task_marker;
use vicuna_core::scan::ScanContext;
use vicuna_core::{Document, EscapeState, KeywordSets, LineState, Style};

use crate::state::ZigState;
use crate::word_lists::{KEYWORD_LIST, TYPE_LIST};

/// Format-argument shape inside a `{...}` placeholder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FormatArgument {
    None,
    Digit,
    Identifier,
    Error,
}

fn is_format_argument(ch: char, argument: FormatArgument) -> bool {
    ch.is_ascii_digit() || (argument == FormatArgument::Identifier && is_identifier_char(ch))
}

/// Specifier letters accepted directly after `{`.
fn is_brace_format_specifier(ch: char) -> bool {
    matches!(
        ch,
        'b' | 'c' | 'd' | 'e' | 'f' | 'g' | 'o' | 's' | 'u' | 'x' | 'X' | '?' | '!' | '*' | 'a'
    )
}

/// Characters after `{` that can open a placeholder.
fn is_brace_format_next(ch: char) -> bool {
    ch == '}' || ch.is_ascii_digit() || matches!(ch, '[' | ':' | '.') || is_brace_format_specifier(ch)
}

/// Classification of a finished identifier token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum WordClass {
    Keyword { opens_function: bool },
    Type,
    Plain,
}

fn classify_word(keywords: &KeywordSets, text: &str) -> WordClass {
    if keywords.contains(KEYWORD_LIST, text) {
        WordClass::Keyword {
            opens_function: text == "fn",
        }
    } else if keywords.contains(TYPE_LIST, text) {
        WordClass::Type
    } else {
        WordClass::Plain
    }
}

/// Paint styles and persist line states for `start .. start + length`.
///
/// `start` must sit on a line boundary and `initial` must be the style
/// in force there (the style of the byte before `start`, or default at
/// the top). Every line the window covers gets its state persisted when
/// the scan passes its last character.
pub fn tokenize(doc: &mut Document, keywords: &KeywordSets, start: u32, length: u32, initial: Style) {
    let _span = trace_span!("tokenize", grammar = "zig", start, length).entered();
    debug_assert!(
        doc.line_start(doc.line_of(start)) == start,
        "scan must start on a line boundary"
    );

    let mut after_fn = false;
    let mut visible_chars = 0u32;
    let mut indent_count = 0u32;
    let mut line_state = LineState::default();
    let mut fmt_argument = FormatArgument::None;
    let mut esc = EscapeState::new(ZigState::Default);

    let mut sc = ScanContext::new(doc, start, length, ZigState::from_style(initial));

    while sc.more() {
        match sc.state() {
            ZigState::Operator => {
                sc.set_state(ZigState::Default);
            }

            ZigState::Number => {
                if !is_number_continue(sc.ch_prev, sc.ch, sc.ch_next) {
                    sc.set_state(ZigState::Default);
                }
            }

            ZigState::Identifier | ZigState::BuiltinFunction => {
                if !is_identifier_char(sc.ch) {
                    if sc.state() == ZigState::Identifier {
                        match classify_word(keywords, sc.current_text()) {
                            WordClass::Keyword { opens_function } => {
                                sc.change_state(ZigState::Keyword);
                                after_fn = opens_function;
                            }
                            WordClass::Type => {
                                sc.change_state(ZigState::Type);
                            }
                            WordClass::Plain => {
                                if after_fn {
                                    sc.change_state(ZigState::FunctionDefinition);
                                } else if sc.line_next_char() == '(' {
                                    sc.change_state(ZigState::Function);
                                }
                            }
                        }
                    }
                    if sc.state() != ZigState::Keyword {
                        after_fn = false;
                    }
                    sc.set_state(ZigState::Default);
                }
            }

            ZigState::Character | ZigState::String | ZigState::MultilineString => {
                if sc.at_line_start() {
                    sc.set_state(ZigState::Default);
                } else if sc.ch == '\\' && sc.state() != ZigState::MultilineString {
                    esc.reset(sc.state(), sc.ch_next);
                    sc.set_state(ZigState::EscapeChar);
                    sc.forward();
                    if sc.matches('u', '{') {
                        esc.brace = true;
                        esc.digits_left = 7;
                        sc.forward();
                    }
                } else if (sc.ch == '\'' && sc.state() == ZigState::Character)
                    || (sc.ch == '"' && sc.state() == ZigState::String)
                {
                    sc.forward_set_state(ZigState::Default);
                } else if sc.state() != ZigState::Character && (sc.ch == '{' || sc.ch == '}') {
                    if sc.ch == sc.ch_next {
                        esc.reset_literal(sc.state());
                        sc.set_state(ZigState::EscapeChar);
                        sc.forward();
                    } else if sc.ch == '{' && is_brace_format_next(sc.ch_next) {
                        esc.outer = sc.state();
                        sc.set_state(ZigState::Placeholder);
                        fmt_argument = FormatArgument::None;
                        if sc.ch_next.is_ascii_digit() {
                            fmt_argument = FormatArgument::Digit;
                        } else if sc.ch_next == '[' {
                            fmt_argument = FormatArgument::Identifier;
                            if is_identifier_start(sc.char_after_next()) {
                                sc.forward();
                            }
                        }
                    }
                }
            }

            ZigState::EscapeChar => {
                if esc.at_end(sc.ch) {
                    if esc.brace && sc.ch == '}' {
                        sc.forward();
                    }
                    sc.set_state(esc.outer);
                    continue;
                }
            }

            ZigState::Placeholder => {
                if !is_format_argument(sc.ch, fmt_argument) {
                    if fmt_argument == FormatArgument::Identifier {
                        if sc.ch == ']' {
                            sc.forward();
                        } else {
                            fmt_argument = FormatArgument::Error;
                        }
                    }
                    if fmt_argument != FormatArgument::Error {
                        let length = brace_format_specifier_length(&sc);
                        if length != 0 {
                            sc.set_state(ZigState::FormatSpecifier);
                            sc.advance(length);
                            sc.set_state(ZigState::Placeholder);
                            sc.forward_set_state(esc.outer);
                            continue;
                        }
                    }
                    if fmt_argument == FormatArgument::Error || sc.ch != '}' {
                        // Not a placeholder after all; hand the run back
                        // to the string and re-dispatch this character.
                        sc.rewind();
                        sc.change_state(esc.outer);
                    }
                    sc.forward_set_state(esc.outer);
                    continue;
                }
            }

            ZigState::CommentLine | ZigState::CommentLineDoc | ZigState::CommentLineTop => {
                if sc.at_line_start() {
                    sc.set_state(ZigState::Default);
                } else {
                    highlight_task_marker(&mut sc, ZigState::TaskMarker);
                }
            }

            _ => {}
        }

        if sc.state() == ZigState::Default {
            if sc.matches('/', '/') {
                if visible_chars == 0 {
                    line_state.line_comment = true;
                }
                sc.set_state(ZigState::CommentLine);
                sc.forward_by(2);
                if sc.ch == '!' {
                    sc.change_state(ZigState::CommentLineTop);
                } else if sc.ch == '/' && sc.ch_next != '/' {
                    sc.change_state(ZigState::CommentLineDoc);
                }
            } else if sc.matches('\\', '\\') {
                line_state.string_continues = true;
                sc.set_state(ZigState::MultilineString);
            } else if sc.ch == '"' {
                sc.set_state(ZigState::String);
            } else if sc.ch == '\'' {
                sc.set_state(ZigState::Character);
            } else if is_number_start(sc.ch, sc.ch_next) {
                sc.set_state(ZigState::Number);
            } else if (sc.ch == '@' && is_identifier_start(sc.ch_next)) || is_identifier_start(sc.ch)
            {
                sc.set_state(if sc.ch == '@' {
                    ZigState::BuiltinFunction
                } else {
                    ZigState::Identifier
                });
            } else if is_a_graphic(sc.ch) {
                sc.set_state(ZigState::Operator);
            }
        }

        if visible_chars == 0 && matches!(sc.ch, ' ' | '\t') {
            indent_count += 1;
        }
        if visible_chars == 0 && !is_space_char(sc.ch) {
            visible_chars = 1;
        }
        if sc.at_line_end() {
            line_state.empty =
                visible_chars == 0 && !line_state.line_comment && !line_state.string_continues;
            line_state.indent_count = LineState::saturate_indent(indent_count);
            sc.set_line_state(line_state.encode());
            line_state = LineState::default();
            indent_count = 0;
            after_fn = false;
            visible_chars = 0;
        }
        sc.forward();
    }

    sc.complete();
}

/// Byte length of a format-specifier run starting at the cursor and
/// ending just before the closing brace; zero when the tail of the
/// placeholder is not a specifier.
fn brace_format_specifier_length(sc: &ScanContext<'_, ZigState>) -> u32 {
    let mut pos = sc.pos();
    let mut ch = sc.ch;
    // [specifier]
    if is_brace_format_specifier(ch) {
        pos += 1;
        if sc.matches3('a', 'n', 'y') {
            pos += 2;
        }
        ch = sc.char_at(pos);
        if !matches!(ch, ':' | '.' | '}' | '<' | '>' | '^') {
            return 0;
        }
    }
    if ch == ':' {
        pos += 1;
        ch = sc.char_at(pos);
    }
    // [[fill] alignment]
    if !matches!(ch, '\r' | '\n' | '{' | '}') {
        let width = u32::try_from(ch.len_utf8()).unwrap_or(1);
        let ch_next = sc.char_at(pos + width);
        if matches!(ch_next, '<' | '>' | '^') {
            // Any character, multibyte included, may fill before the
            // alignment.
            pos += width + 1;
            ch = sc.char_at(pos);
        } else if matches!(ch, '<' | '>' | '^') {
            pos += 1;
            ch = sc.char_at(pos);
        }
    }
    // [width]
    while ch.is_ascii_digit() {
        pos += 1;
        ch = sc.char_at(pos);
    }
    // [.precision]
    if ch == '.' {
        pos += 1;
        ch = sc.char_at(pos);
        while ch.is_ascii_digit() {
            pos += 1;
            ch = sc.char_at(pos);
        }
    }
    if ch == '}' {
        return pos - sc.pos();
    }
    0
}
