//! Control states of the Scala-flavored scanner.

use vicuna_core::scan::ScanState;
use vicuna_core::Style;

/// One control state per syntactic context the scanner can be in.
///
/// States map one-to-one onto shared [`Style`] codes. The string family
/// splits along two axes (single-line vs. triple-quoted, plain vs.
/// interpolated) because resumption and the closing-quote rule differ per
/// combination; the predicates below keep those distinctions in one place.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScalaState {
    #[default]
    Default,
    CommentLine,
    CommentBlock,
    CommentBlockDoc,
    CommentTag,
    TaskMarker,
    Number,
    Operator,
    OperatorNested,
    OperatorPostfix,
    Identifier,
    Keyword,
    Class,
    Trait,
    Enum,
    Annotation,
    Function,
    FunctionDefinition,
    Symbol,
    Backticks,
    Character,
    String,
    InterpolatedString,
    TripleString,
    TripleInterpolatedString,
    EscapeChar,
    XmlTag,
    XmlAttribute,
    XmlText,
    XmlOther,
    XmlStringSq,
    XmlStringDq,
}

impl ScalaState {
    /// Control state to resume in when the byte before the scan window
    /// carries `style`.
    pub fn from_style(style: Style) -> Self {
        match style {
            Style::CommentLine => Self::CommentLine,
            Style::CommentBlock => Self::CommentBlock,
            Style::CommentBlockDoc => Self::CommentBlockDoc,
            Style::CommentTag => Self::CommentTag,
            Style::TaskMarker => Self::TaskMarker,
            Style::Number => Self::Number,
            Style::Operator => Self::Operator,
            Style::OperatorNested => Self::OperatorNested,
            Style::OperatorPostfix => Self::OperatorPostfix,
            Style::Identifier => Self::Identifier,
            Style::Keyword => Self::Keyword,
            Style::Class => Self::Class,
            Style::Trait => Self::Trait,
            Style::Enum => Self::Enum,
            Style::Annotation => Self::Annotation,
            Style::Function => Self::Function,
            Style::FunctionDefinition => Self::FunctionDefinition,
            Style::Symbol => Self::Symbol,
            Style::Backticks => Self::Backticks,
            Style::Character => Self::Character,
            Style::String => Self::String,
            Style::InterpolatedString => Self::InterpolatedString,
            Style::TripleString => Self::TripleString,
            Style::TripleInterpolatedString => Self::TripleInterpolatedString,
            Style::EscapeChar => Self::EscapeChar,
            Style::XmlTag => Self::XmlTag,
            Style::XmlAttribute => Self::XmlAttribute,
            Style::XmlText => Self::XmlText,
            Style::XmlOther => Self::XmlOther,
            Style::XmlStringSq => Self::XmlStringSq,
            Style::XmlStringDq => Self::XmlStringDq,
            _ => Self::Default,
        }
    }

    /// String states whose run ends at the line boundary if left open.
    pub(crate) fn is_single_line_string(self) -> bool {
        matches!(
            self,
            Self::Backticks
                | Self::Character
                | Self::String
                | Self::InterpolatedString
                | Self::XmlStringSq
                | Self::XmlStringDq
        )
    }

    /// Triple-quoted string states; these continue across lines.
    pub(crate) fn is_triple_string(self) -> bool {
        matches!(self, Self::TripleString | Self::TripleInterpolatedString)
    }

    /// String states that honor `$` interpolation.
    pub(crate) fn is_interpolated_string(self) -> bool {
        matches!(self, Self::InterpolatedString | Self::TripleInterpolatedString)
    }

    /// Closing quote character for a string-family state.
    pub(crate) fn string_quote(self) -> char {
        match self {
            Self::Backticks => '`',
            Self::Character | Self::XmlStringSq => '\'',
            _ => '"',
        }
    }
}

impl ScanState for ScalaState {
    fn style(self) -> Style {
        match self {
            ScalaState::Default => Style::Default,
            ScalaState::CommentLine => Style::CommentLine,
            ScalaState::CommentBlock => Style::CommentBlock,
            ScalaState::CommentBlockDoc => Style::CommentBlockDoc,
            ScalaState::CommentTag => Style::CommentTag,
            ScalaState::TaskMarker => Style::TaskMarker,
            ScalaState::Number => Style::Number,
            ScalaState::Operator => Style::Operator,
            ScalaState::OperatorNested => Style::OperatorNested,
            ScalaState::OperatorPostfix => Style::OperatorPostfix,
            ScalaState::Identifier => Style::Identifier,
            ScalaState::Keyword => Style::Keyword,
            ScalaState::Class => Style::Class,
            ScalaState::Trait => Style::Trait,
            ScalaState::Enum => Style::Enum,
            ScalaState::Annotation => Style::Annotation,
            ScalaState::Function => Style::Function,
            ScalaState::FunctionDefinition => Style::FunctionDefinition,
            ScalaState::Symbol => Style::Symbol,
            ScalaState::Backticks => Style::Backticks,
            ScalaState::Character => Style::Character,
            ScalaState::String => Style::String,
            ScalaState::InterpolatedString => Style::InterpolatedString,
            ScalaState::TripleString => Style::TripleString,
            ScalaState::TripleInterpolatedString => Style::TripleInterpolatedString,
            ScalaState::EscapeChar => Style::EscapeChar,
            ScalaState::XmlTag => Style::XmlTag,
            ScalaState::XmlAttribute => Style::XmlAttribute,
            ScalaState::XmlText => Style::XmlText,
            ScalaState::XmlOther => Style::XmlOther,
            ScalaState::XmlStringSq => Style::XmlStringSq,
            ScalaState::XmlStringDq => Style::XmlStringDq,
        }
    }
}
