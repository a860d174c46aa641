//! Scan loop of the Scala-flavored grammar.

use smallvec::SmallVec;
use tracing::trace_span;

use vicuna_core::chars::{
    is_a_graphic, is_identifier_char, is_identifier_start, is_number_continue, is_number_start,
    is_space_char, is_space_or_tab,
};
use vicuna_core::marker::highlight_task_marker;
use vicuna_core::scan::{ScanContext, ScanState};
use vicuna_core::{
    backtrack_to_start, lookback_non_white, Document, EscapeState, KeywordSets, LineState, Style,
};

use crate::state::ScalaState;
use crate::word_lists::{CLASS_LIST, KEYWORD_LIST, TRAIT_LIST};

/// Identifier classes extended with `$`, which is legal in Scala names.
fn is_scala_identifier_start(ch: char) -> bool {
    is_identifier_start(ch) || ch == '$'
}

fn is_scala_identifier_char(ch: char) -> bool {
    is_identifier_char(ch) || ch == '$'
}

/// Characters allowed directly before a `@tag` inside a doc comment.
fn is_comment_tag_prev(ch: char) -> bool {
    ch <= ' ' || ch == '/' || ch == '*' || ch == '!'
}

/// Last visible token ends an expression, so a `<` after it reads as a
/// comparison rather than markup.
fn follows_expression(ch_prev_non_white: char, style_prev_non_white: Style) -> bool {
    matches!(ch_prev_non_white, ')' | ']')
        || style_prev_non_white.is_value_like()
        || is_scala_identifier_char(ch_prev_non_white)
}

/// Heuristic for `<` opening inline markup.
fn is_xml_tag_start(
    sc: &ScanContext<'_, ScalaState>,
    ch_prev_non_white: char,
    style_prev_non_white: Style,
) -> bool {
    (matches!(sc.ch_prev, '(' | '{')
        || (sc.ch_prev <= ' '
            && (style_prev_non_white == Style::XmlTag
                || style_prev_non_white == Style::Keyword
                || !follows_expression(ch_prev_non_white, style_prev_non_white))))
        && (is_scala_identifier_char(sc.ch_next) || sc.ch_next == '!' || sc.ch_next == '?')
}

/// Token class the most recent keyword promises for the identifier that
/// follows it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum KeywordCarry {
    None,
    Class,
    Trait,
    Enum,
    Function,
    /// `return` and `yield`; never promotes, only blocks definition
    /// detection.
    Return,
}

impl KeywordCarry {
    fn target(self) -> Option<ScalaState> {
        match self {
            KeywordCarry::Class => Some(ScalaState::Class),
            KeywordCarry::Trait => Some(ScalaState::Trait),
            KeywordCarry::Enum => Some(ScalaState::Enum),
            KeywordCarry::Function => Some(ScalaState::FunctionDefinition),
            KeywordCarry::None | KeywordCarry::Return => None,
        }
    }
}

fn keyword_carry(text: &str) -> KeywordCarry {
    match text {
        "class" | "new" | "extends" | "throws" | "object" => KeywordCarry::Class,
        "trait" | "with" => KeywordCarry::Trait,
        "def" => KeywordCarry::Function,
        "enum" => KeywordCarry::Enum,
        "return" | "yield" => KeywordCarry::Return,
        _ => KeywordCarry::None,
    }
}

/// Classification of a finished identifier token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum WordClass {
    Keyword {
        carry: KeywordCarry,
        closes_scope: bool,
    },
    Class,
    Trait,
    Plain,
}

fn classify_word(keywords: &KeywordSets, text: &str, visible_chars: u32) -> WordClass {
    if keywords.contains(KEYWORD_LIST, text) {
        WordClass::Keyword {
            carry: keyword_carry(text),
            closes_scope: visible_chars == 3 && text == "end",
        }
    } else if keywords.contains(CLASS_LIST, text) {
        WordClass::Class
    } else if keywords.contains(TRAIT_LIST, text) {
        WordClass::Trait
    } else {
        WordClass::Plain
    }
}

/// Line state persisted for a line whose visible content is entirely
/// comment.
fn comment_line_state() -> LineState {
    LineState {
        line_comment: true,
        ..LineState::default()
    }
}

/// Paint styles and persist line states for `start .. start + length`.
///
/// `start` must sit on a line boundary and `initial` must be the style
/// in force there. The window widens backwards over lines flagged as
/// interpolation or markup continuations, so the interpolation stack
/// and markup depth are rebuilt before the requested range is reached;
/// `start` is a hint, not a hard left edge.
pub fn tokenize(doc: &mut Document, keywords: &KeywordSets, start: u32, length: u32, initial: Style) {
    let _span = trace_span!("tokenize", grammar = "scala", start, length).entered();
    debug_assert!(
        doc.line_start(doc.line_of(start)) == start,
        "scan must start on a line boundary"
    );

    let window = backtrack_to_start(doc, LineState::INTERPOLATION, start, length, initial);

    let mut kw_carry = KeywordCarry::None;
    let mut comment_level = 0u32;
    let mut nested_state: SmallVec<[ScalaState; 8]> = SmallVec::new();

    let mut line_state = LineState::default();
    let mut visible_chars = 0u32;
    let mut indent_count = 0u32;
    let mut xml_tag_level = 0i32;

    let mut ch_before = '\0';
    let mut ch_prev_non_white = '\0';
    let mut style_prev_non_white = Style::Default;
    let mut esc = EscapeState::new(ScalaState::Default);

    if window.start > 0 && window.initial.is_space_equiv() {
        (ch_prev_non_white, style_prev_non_white) = lookback_non_white(doc, window.start);
    }

    let initial_state = ScalaState::from_style(window.initial);
    let mut sc = ScanContext::new(doc, window.start, window.length, initial_state);

    if sc.line() > 0 {
        comment_level = u32::from(LineState::decode(sc.line_state(sc.line() - 1)).comment_depth);
    }
    if window.start == 0 && sc.matches('#', '!') {
        // Shebang at the top of the file.
        sc.set_state(ScalaState::CommentLine);
        sc.forward();
    }

    while sc.more() {
        match sc.state() {
            ScalaState::Operator | ScalaState::OperatorNested | ScalaState::OperatorPostfix => {
                sc.set_state(ScalaState::Default);
            }

            ScalaState::Number => {
                if !is_number_continue(sc.ch_prev, sc.ch, sc.ch_next) {
                    sc.set_state(ScalaState::Default);
                }
            }

            ScalaState::Identifier
            | ScalaState::Annotation
            | ScalaState::Symbol
            | ScalaState::XmlTag
            | ScalaState::XmlAttribute => {
                let in_markup = matches!(sc.state(), ScalaState::XmlTag | ScalaState::XmlAttribute);
                if (sc.ch == '.'
                    && !matches!(sc.state(), ScalaState::Identifier | ScalaState::Symbol))
                    || (sc.ch == ':' && in_markup)
                {
                    let state = sc.state();
                    sc.set_state(ScalaState::OperatorNested);
                    sc.forward_set_state(state);
                }
                if !is_scala_identifier_char(sc.ch) && !(sc.ch == '-' && in_markup) {
                    if sc.state() == ScalaState::Identifier {
                        if esc.outer == ScalaState::Default {
                            match classify_word(keywords, sc.current_text(), visible_chars) {
                                WordClass::Keyword {
                                    carry,
                                    closes_scope,
                                } => {
                                    sc.change_state(ScalaState::Keyword);
                                    kw_carry = carry;
                                    if closes_scope {
                                        line_state.close_brace = true;
                                    }
                                    if kw_carry.target().is_some()
                                        && !is_identifier_start(sc.line_next_char())
                                    {
                                        kw_carry = KeywordCarry::None;
                                    }
                                }
                                WordClass::Class => sc.change_state(ScalaState::Class),
                                WordClass::Trait => sc.change_state(ScalaState::Trait),
                                WordClass::Plain => {
                                    if sc.ch != '.' {
                                        if let Some(target) = kw_carry.target() {
                                            sc.change_state(target);
                                        } else if sc.line_next_char() == '(' {
                                            // type method() or type[] method()
                                            if kw_carry != KeywordCarry::Return
                                                && (is_identifier_char(ch_before)
                                                    || ch_before == ']')
                                            {
                                                sc.change_state(ScalaState::FunctionDefinition);
                                            } else {
                                                sc.change_state(ScalaState::Function);
                                            }
                                        }
                                    }
                                }
                            }
                            style_prev_non_white = sc.state().style();
                            if sc.state() != ScalaState::Keyword && sc.ch != '.' {
                                kw_carry = KeywordCarry::None;
                            }
                        } else {
                            sc.set_state(esc.outer);
                            continue;
                        }
                    }
                    sc.set_state(if in_markup {
                        ScalaState::XmlOther
                    } else {
                        ScalaState::Default
                    });
                    continue;
                }
            }

            ScalaState::CommentLine => {
                if sc.at_line_start() {
                    sc.set_state(ScalaState::Default);
                } else {
                    highlight_task_marker(&mut sc, ScalaState::TaskMarker);
                }
            }

            ScalaState::CommentBlock | ScalaState::CommentBlockDoc => {
                if sc.at_line_start() {
                    line_state = comment_line_state();
                }
                if sc.matches('*', '/') {
                    sc.forward();
                    comment_level = comment_level.saturating_sub(1);
                    if comment_level == 0 {
                        sc.forward_set_state(ScalaState::Default);
                        if line_state == comment_line_state() && sc.line_next_char() != '\0' {
                            line_state = LineState::default();
                        }
                    }
                } else if sc.matches('/', '*') {
                    sc.forward();
                    comment_level += 1;
                } else if sc.state() == ScalaState::CommentBlockDoc
                    && sc.ch == '@'
                    && sc.ch_next.is_ascii_alphabetic()
                    && is_comment_tag_prev(sc.ch_prev)
                {
                    sc.set_state(ScalaState::CommentTag);
                } else if highlight_task_marker(&mut sc, ScalaState::TaskMarker) {
                    continue;
                }
            }

            ScalaState::CommentTag => {
                if !sc.ch.is_ascii_alphabetic() {
                    sc.set_state(ScalaState::CommentBlockDoc);
                    continue;
                }
            }

            ScalaState::Backticks
            | ScalaState::Character
            | ScalaState::XmlStringSq
            | ScalaState::XmlStringDq
            | ScalaState::String
            | ScalaState::InterpolatedString
            | ScalaState::TripleString
            | ScalaState::TripleInterpolatedString => {
                if sc.at_line_start() && sc.state().is_single_line_string() {
                    sc.set_state(ScalaState::Default);
                } else if sc.ch == '\\' {
                    // No \xNN form here; everything but \uNNNN spends one
                    // character after the marker.
                    if esc.try_reset(sc.state(), sc.ch_next) {
                        if sc.ch_next != 'u' {
                            esc.digits_left = 1;
                        }
                        sc.set_state(ScalaState::EscapeChar);
                        sc.forward();
                    }
                } else if sc.ch == '$' && sc.state().is_interpolated_string() {
                    if sc.ch_next == '$' {
                        esc.outer = sc.state();
                        esc.digits_left = 1;
                        sc.set_state(ScalaState::EscapeChar);
                        sc.forward();
                    } else if sc.ch_next == '{' {
                        nested_state.push(sc.state());
                        sc.set_state(ScalaState::OperatorNested);
                        sc.forward();
                    } else if is_scala_identifier_start(sc.ch_next) {
                        esc.outer = sc.state();
                        sc.set_state(ScalaState::Identifier);
                    }
                } else if sc.ch == sc.state().string_quote()
                    && (sc.state().is_single_line_string() || sc.matches_next('"', '"'))
                {
                    if !sc.state().is_single_line_string() {
                        // Quotes beyond the closing three stay string
                        // content.
                        while sc.ch_next == '"' {
                            sc.forward();
                        }
                    }
                    let next = if matches!(
                        sc.state(),
                        ScalaState::XmlStringSq | ScalaState::XmlStringDq
                    ) {
                        ScalaState::XmlOther
                    } else {
                        ScalaState::Default
                    };
                    sc.forward_set_state(next);
                    continue;
                }
            }

            ScalaState::EscapeChar => {
                if esc.at_end(sc.ch) {
                    sc.set_state(esc.outer);
                    continue;
                }
            }

            ScalaState::XmlText | ScalaState::XmlOther => {
                if sc.ch == '>' || sc.matches('/', '>') {
                    sc.set_state(ScalaState::XmlTag);
                    if sc.ch == '/' {
                        // self closing <tag />
                        xml_tag_level -= 1;
                        sc.forward();
                    }
                    ch_prev_non_white = '>';
                    style_prev_non_white = Style::XmlTag;
                    let next = if xml_tag_level == 0 {
                        ScalaState::Default
                    } else {
                        ScalaState::XmlText
                    };
                    sc.forward_set_state(next);
                    continue;
                } else if sc.ch == '=' && sc.state() == ScalaState::XmlOther {
                    sc.set_state(ScalaState::OperatorNested);
                    sc.forward_set_state(ScalaState::XmlOther);
                    continue;
                } else if (sc.ch == '\'' || sc.ch == '"') && sc.state() == ScalaState::XmlOther {
                    sc.set_state(if sc.ch == '\'' {
                        ScalaState::XmlStringSq
                    } else {
                        ScalaState::XmlStringDq
                    });
                } else if sc.state() == ScalaState::XmlOther && is_scala_identifier_start(sc.ch) {
                    sc.set_state(ScalaState::XmlAttribute);
                } else if sc.ch == '{' {
                    nested_state.push(sc.state());
                    sc.set_state(ScalaState::OperatorNested);
                } else if sc.matches('<', '/') {
                    xml_tag_level -= 1;
                    sc.set_state(ScalaState::XmlTag);
                    sc.forward();
                } else if sc.ch == '<' {
                    xml_tag_level += 1;
                    sc.set_state(ScalaState::XmlTag);
                }
            }

            _ => {}
        }

        if sc.state() == ScalaState::Default {
            if sc.matches('/', '/') {
                if visible_chars == 0 {
                    line_state = comment_line_state();
                }
                sc.set_state(ScalaState::CommentLine);
            } else if sc.matches('/', '*') {
                comment_level = 1;
                if visible_chars == 0 {
                    line_state = comment_line_state();
                }
                sc.set_state(ScalaState::CommentBlock);
                sc.forward_by(2);
                if sc.ch == '*' && sc.ch_next != '*' {
                    sc.change_state(ScalaState::CommentBlockDoc);
                }
                continue;
            } else if sc.ch == '"' {
                let interpolated =
                    style_prev_non_white != Style::Number && is_scala_identifier_char(sc.ch_prev);
                sc.set_state(if interpolated {
                    ScalaState::InterpolatedString
                } else {
                    ScalaState::String
                });
                if sc.matches_next('"', '"') {
                    sc.set_state(if interpolated {
                        ScalaState::TripleInterpolatedString
                    } else {
                        ScalaState::TripleString
                    });
                    sc.advance(2);
                }
            } else if sc.ch == '\'' {
                // 'a' is a character, 'name a symbol, '{ a quoted block.
                let mut state = ScalaState::Character;
                if (sc.ch_next == '{' || is_scala_identifier_start(sc.ch_next))
                    && sc.char_after_next() != '\''
                {
                    state = if sc.ch_next == '{' {
                        ScalaState::Operator
                    } else {
                        ScalaState::Symbol
                    };
                }
                sc.set_state(state);
            } else if sc.ch == '<' {
                if sc.ch_next == '/' {
                    xml_tag_level -= 1;
                    sc.set_state(ScalaState::XmlTag);
                    sc.forward();
                } else if is_xml_tag_start(&sc, ch_prev_non_white, style_prev_non_white) {
                    xml_tag_level += 1;
                    sc.set_state(ScalaState::XmlTag);
                } else {
                    sc.set_state(ScalaState::Operator);
                }
            } else if sc.ch == '`' {
                sc.set_state(ScalaState::Backticks);
            } else if is_number_start(sc.ch, sc.ch_next) {
                sc.set_state(ScalaState::Number);
            } else if is_scala_identifier_start(sc.ch) {
                esc.outer = ScalaState::Default;
                ch_before = ch_prev_non_white;
                sc.set_state(ScalaState::Identifier);
            } else if sc.ch == '@' && is_scala_identifier_start(sc.ch_next) {
                sc.set_state(ScalaState::Annotation);
            } else if is_a_graphic(sc.ch) {
                sc.set_state(ScalaState::Operator);
                if (sc.ch == '+' || sc.ch == '-') && sc.ch == sc.ch_next {
                    sc.change_state(ScalaState::OperatorPostfix);
                    sc.forward();
                } else if !nested_state.is_empty() {
                    sc.change_state(ScalaState::OperatorNested);
                    if sc.ch == '{' {
                        nested_state.push(ScalaState::Default);
                    } else if sc.ch == '}' {
                        let outer = nested_state.pop().unwrap_or(ScalaState::Default);
                        sc.forward_set_state(outer);
                        continue;
                    }
                } else if visible_chars == 0 && matches!(sc.ch, '}' | ']' | ')') {
                    line_state.close_brace = true;
                }
            }
        }

        if visible_chars == 0 && is_space_or_tab(sc.ch) {
            indent_count += 1;
        }
        if !is_space_char(sc.ch) {
            visible_chars += 1;
            if !sc.state().style().is_space_equiv() {
                ch_prev_non_white = sc.ch;
                style_prev_non_white = sc.state().style();
            }
        }
        if sc.at_line_end() {
            if !nested_state.is_empty() || xml_tag_level != 0 {
                line_state = LineState {
                    string_continues: true,
                    interpolation: true,
                    ..LineState::default()
                };
            } else if sc.state().is_triple_string() {
                line_state = LineState {
                    string_continues: true,
                    ..LineState::default()
                };
            } else if line_state == LineState::default() && visible_chars == 0 {
                line_state.empty = true;
            }
            line_state.comment_depth = LineState::saturate_depth(comment_level);
            line_state.indent_count = LineState::saturate_indent(indent_count);
            sc.set_line_state(line_state.encode());
            line_state = LineState::default();
            indent_count = 0;
            visible_chars = 0;
            kw_carry = KeywordCarry::None;
        }
        sc.forward();
    }

    sc.complete();
}
