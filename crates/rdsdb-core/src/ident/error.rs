//! Identifier parse errors.

use super::span::{offset_to_col, Span};
use thiserror::Error;

/// Error raised when a string is not a canonical `RDS(m,n,k,lambda)` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseError {
    /// The offending input.
    pub input: String,
    /// The error message.
    pub message: String,
    /// Where in `input` the error occurred.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}': {}", self.input, self.message)
    }
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(input: &str, message: impl Into<String>, span: Span) -> Self {
        Self {
            input: input.to_string(),
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Add a hint to the error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Format the error with the input and a caret under the offending column.
    pub fn format_with_source(&self) -> String {
        let col = offset_to_col(&self.input, self.span.start);
        let mut result = format!("error: {}\n", self.message);
        result.push_str(&format!("  --> column {}\n", col));
        result.push_str(&format!("   |\n   | {}\n   |", self.input));

        for _ in 0..col {
            result.push(' ');
        }
        result.push('^');

        let span_len = self
            .input
            .get(self.span.start..self.span.end)
            .map_or(self.span.len(), |s| s.chars().count());
        for _ in 1..span_len {
            result.push('~');
        }
        result.push('\n');

        if let Some(hint) = &self.hint {
            result.push_str(&format!("   = hint: {}\n", hint));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_formatting() {
        let err = ParseError::new("RDS(1,2,3 ,4)", "whitespace is not allowed", Span::new(9, 10))
            .with_hint("remove the space");

        let formatted = err.format_with_source();
        assert!(formatted.contains("column 10"));
        assert!(formatted.contains("whitespace is not allowed"));
        assert!(formatted.contains("hint: remove the space"));

        let caret_line = formatted.lines().nth(4).unwrap();
        assert_eq!(caret_line.find('^'), Some(4 + 10));
    }

    #[test]
    fn test_underline_counts_characters() {
        let err = ParseError::new("RDS(ü,1,1,1)", "unexpected character 'ü'", Span::new(4, 6));
        let caret_line = err.format_with_source().lines().nth(4).unwrap().to_string();
        assert_eq!(caret_line, format!("   |{}^", " ".repeat(5)));

        let err = ParseError::new("RDS(1,2,3,4)ßß", "trailing", Span::new(12, 16));
        let caret_line = err.format_with_source().lines().nth(4).unwrap().to_string();
        assert!(caret_line.ends_with("^~"));
    }

    #[test]
    fn test_display_names_input() {
        let err = ParseError::new("RDS(1)", "expected ','", Span::new(5, 6));
        assert_eq!(err.to_string(), "'RDS(1)': expected ','");
    }
}
