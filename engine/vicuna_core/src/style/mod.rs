//! Style codes shared by every grammar instance.
//!
//! One `Style` is attached to every byte of a scanned document. The
//! variants are the union of what the shipped grammars emit; each grammar
//! uses its own subset and maps its control states onto these codes.
//!
//! Discriminants are grouped semantically so a style byte can be eyeballed
//! in a debugger:
//!
//! - `0..=7`    space-equivalent (default + comments + task markers)
//! - `16..=22`  operators, numbers, identifiers, keywords
//! - `24..=30`  declarations and references
//! - `32..=42`  literals, escapes, format placeholders
//! - `48..=53`  embedded markup

/// Classification attached to a run of bytes.
///
/// # Contract
///
/// Styles form contiguous runs; a run boundary occurs only at a state
/// transition in the emitting tokenizer. The folder and any presentation
/// layer consume styles without re-reading the grammar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Style {
    // Space-equivalent styles. The folder treats a line holding only
    // these as blank for header purposes.
    #[default]
    Default = 0,
    CommentLine = 1,
    CommentLineDoc = 2,
    CommentLineTop = 3,
    CommentBlock = 4,
    CommentBlockDoc = 5,
    CommentTag = 6,
    TaskMarker = 7,

    // Code atoms.
    Operator = 16,
    OperatorNested = 17,
    OperatorPostfix = 18,
    Number = 19,
    Identifier = 20,
    Keyword = 21,
    Type = 22,

    // Declarations and references.
    Function = 24,
    FunctionDefinition = 25,
    BuiltinFunction = 26,
    Annotation = 27,
    Class = 28,
    Trait = 29,
    Enum = 30,

    // Literals.
    Symbol = 32,
    Backticks = 33,
    Character = 34,
    String = 35,
    InterpolatedString = 36,
    MultilineString = 37,
    TripleString = 38,
    TripleInterpolatedString = 39,
    EscapeChar = 40,
    Placeholder = 41,
    FormatSpecifier = 42,

    // Embedded markup.
    XmlTag = 48,
    XmlAttribute = 49,
    XmlText = 50,
    XmlOther = 51,
    XmlStringSq = 52,
    XmlStringDq = 53,
}

impl Style {
    /// Styles that read as blank space to the folder and to lookback
    /// heuristics: plain content, comments, and task markers.
    #[inline]
    pub fn is_space_equiv(self) -> bool {
        matches!(
            self,
            Style::Default
                | Style::CommentLine
                | Style::CommentLineDoc
                | Style::CommentLineTop
                | Style::CommentBlock
                | Style::CommentBlockDoc
                | Style::CommentTag
                | Style::TaskMarker
        )
    }

    /// Any comment style, line or block.
    #[inline]
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Style::CommentLine
                | Style::CommentLineDoc
                | Style::CommentLineTop
                | Style::CommentBlock
                | Style::CommentBlockDoc
                | Style::CommentTag
        )
    }

    /// Styles whose bracket characters count toward fold nesting.
    ///
    /// Brackets inside strings, comments, and markup text carry other
    /// styles and are invisible to the folder.
    #[inline]
    pub fn is_fold_operator(self) -> bool {
        matches!(self, Style::Operator | Style::OperatorNested)
    }

    /// Styles that end a value expression.
    ///
    /// Used by the markup heuristic: a `<` directly after one of these is
    /// a comparison or shift, never a tag opener.
    #[inline]
    pub fn is_value_like(self) -> bool {
        matches!(
            self,
            Style::OperatorPostfix
                | Style::Symbol
                | Style::Backticks
                | Style::Character
                | Style::XmlStringSq
                | Style::XmlStringDq
                | Style::String
                | Style::InterpolatedString
                | Style::MultilineString
                | Style::TripleString
                | Style::TripleInterpolatedString
                | Style::EscapeChar
                | Style::Identifier
        )
    }

    /// Human-readable name for test failures and trace output.
    pub const fn name(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::CommentLine => "comment-line",
            Style::CommentLineDoc => "comment-line-doc",
            Style::CommentLineTop => "comment-line-top",
            Style::CommentBlock => "comment-block",
            Style::CommentBlockDoc => "comment-block-doc",
            Style::CommentTag => "comment-tag",
            Style::TaskMarker => "task-marker",
            Style::Operator => "operator",
            Style::OperatorNested => "operator-nested",
            Style::OperatorPostfix => "operator-postfix",
            Style::Number => "number",
            Style::Identifier => "identifier",
            Style::Keyword => "keyword",
            Style::Type => "type",
            Style::Function => "function",
            Style::FunctionDefinition => "function-definition",
            Style::BuiltinFunction => "builtin-function",
            Style::Annotation => "annotation",
            Style::Class => "class",
            Style::Trait => "trait",
            Style::Enum => "enum",
            Style::Symbol => "symbol",
            Style::Backticks => "backticks",
            Style::Character => "character",
            Style::String => "string",
            Style::InterpolatedString => "interpolated-string",
            Style::MultilineString => "multiline-string",
            Style::TripleString => "triple-string",
            Style::TripleInterpolatedString => "triple-interpolated-string",
            Style::EscapeChar => "escape-char",
            Style::Placeholder => "placeholder",
            Style::FormatSpecifier => "format-specifier",
            Style::XmlTag => "xml-tag",
            Style::XmlAttribute => "xml-attribute",
            Style::XmlText => "xml-text",
            Style::XmlOther => "xml-other",
            Style::XmlStringSq => "xml-string-sq",
            Style::XmlStringDq => "xml-string-dq",
        }
    }
}

// Styles are stored one per source byte; keep them one byte wide.
const _: () = assert!(std::mem::size_of::<Style>() == 1);
