//! Control states of the Zig-flavored scanner.

use vicuna_core::scan::ScanState;
use vicuna_core::Style;

/// One control state per syntactic context the scanner can be in.
///
/// States map one-to-one onto shared [`Style`] codes; the extra
/// information a state carries over its style (escape budgets, keyword
/// carry) lives in the scan loop's locals.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ZigState {
    #[default]
    Default,
    CommentLine,
    CommentLineDoc,
    CommentLineTop,
    TaskMarker,
    Number,
    Operator,
    Character,
    String,
    MultilineString,
    EscapeChar,
    Placeholder,
    FormatSpecifier,
    Identifier,
    BuiltinFunction,
    Keyword,
    Type,
    Function,
    FunctionDefinition,
}

impl ZigState {
    /// Control state to resume in when the byte before the scan window
    /// carries `style`.
    pub fn from_style(style: Style) -> Self {
        match style {
            Style::CommentLine => Self::CommentLine,
            Style::CommentLineDoc => Self::CommentLineDoc,
            Style::CommentLineTop => Self::CommentLineTop,
            Style::TaskMarker => Self::TaskMarker,
            Style::Number => Self::Number,
            Style::Operator => Self::Operator,
            Style::Character => Self::Character,
            Style::String => Self::String,
            Style::MultilineString => Self::MultilineString,
            Style::EscapeChar => Self::EscapeChar,
            Style::Placeholder => Self::Placeholder,
            Style::FormatSpecifier => Self::FormatSpecifier,
            Style::Identifier => Self::Identifier,
            Style::BuiltinFunction => Self::BuiltinFunction,
            Style::Keyword => Self::Keyword,
            Style::Type => Self::Type,
            Style::Function => Self::Function,
            Style::FunctionDefinition => Self::FunctionDefinition,
            _ => Self::Default,
        }
    }
}

impl ScanState for ZigState {
    fn style(self) -> Style {
        match self {
            ZigState::Default => Style::Default,
            ZigState::CommentLine => Style::CommentLine,
            ZigState::CommentLineDoc => Style::CommentLineDoc,
            ZigState::CommentLineTop => Style::CommentLineTop,
            ZigState::TaskMarker => Style::TaskMarker,
            ZigState::Number => Style::Number,
            ZigState::Operator => Style::Operator,
            ZigState::Character => Style::Character,
            ZigState::String => Style::String,
            ZigState::MultilineString => Style::MultilineString,
            ZigState::EscapeChar => Style::EscapeChar,
            ZigState::Placeholder => Style::Placeholder,
            ZigState::FormatSpecifier => Style::FormatSpecifier,
            ZigState::Identifier => Style::Identifier,
            ZigState::BuiltinFunction => Style::BuiltinFunction,
            ZigState::Keyword => Style::Keyword,
            ZigState::Type => Style::Type,
            ZigState::Function => Style::Function,
            ZigState::FunctionDefinition => Style::FunctionDefinition,
        }
    }
}

#[cfg(test)]
mod tests {
    use vicuna_core::scan::ScanState;
    use vicuna_core::Style;

    use super::ZigState;

    #[test]
    fn resume_mapping_inverts_the_style_mapping() {
        let states = [
            ZigState::Default,
            ZigState::CommentLine,
            ZigState::CommentLineDoc,
            ZigState::CommentLineTop,
            ZigState::TaskMarker,
            ZigState::Number,
            ZigState::Operator,
            ZigState::Character,
            ZigState::String,
            ZigState::MultilineString,
            ZigState::EscapeChar,
            ZigState::Placeholder,
            ZigState::FormatSpecifier,
            ZigState::Identifier,
            ZigState::BuiltinFunction,
            ZigState::Keyword,
            ZigState::Type,
            ZigState::Function,
            ZigState::FunctionDefinition,
        ];
        for state in states {
            assert_eq!(ZigState::from_style(state.style()), state, "{state:?}");
        }
    }

    #[test]
    fn foreign_styles_resume_in_default() {
        assert_eq!(ZigState::from_style(Style::XmlTag), ZigState::Default);
        assert_eq!(ZigState::from_style(Style::TripleString), ZigState::Default);
    }
}
