//! Lexer for canonical identifiers using logos.

use super::error::ParseError;
use super::span::Span;
use logos::Logos;

/// Token types of the identifier grammar.
///
/// Whitespace is deliberately not skipped: the canonical form has none, so a
/// blank surfaces as a lexer error.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[token("RDS")]
    Rds,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,

    // Canonical unsigned decimal: no sign, no leading zeros.
    #[regex(r"0|[1-9][0-9]*", |lex| lex.slice().parse::<u64>().ok())]
    Int(u64),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Rds => write!(f, "'RDS'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Comma => write!(f, "','"),
            Token::Int(i) => write!(f, "integer {}", i),
        }
    }
}

/// A token with its span in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

/// Lexer that produces spanned tokens and reports invalid input.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
    peeked: Option<Option<Result<SpannedToken, ParseError>>>,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            inner: Token::lexer(source),
            peeked: None,
        }
    }

    /// Peek at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Result<SpannedToken, ParseError>> {
        if self.peeked.is_none() {
            self.peeked = Some(self.next_inner());
        }
        self.peeked.as_ref().and_then(|o| o.as_ref())
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Option<Result<SpannedToken, ParseError>> {
        if let Some(peeked) = self.peeked.take() {
            peeked
        } else {
            self.next_inner()
        }
    }

    fn next_inner(&mut self) -> Option<Result<SpannedToken, ParseError>> {
        let token = self.inner.next()?;
        let span: Span = self.inner.span().into();
        Some(match token {
            Ok(token) => Ok(SpannedToken { token, span }),
            Err(()) => Err(self.invalid_token(span)),
        })
    }

    fn invalid_token(&self, span: Span) -> ParseError {
        let source = self.inner.source();
        let slice = self.inner.slice();

        if slice.chars().all(char::is_whitespace) {
            ParseError::new(source, "whitespace is not allowed in an identifier", span)
                .with_hint("strip whitespace first, e.g. RDS(73,7,64,8)")
        } else if slice.chars().all(|c| c.is_ascii_digit()) {
            ParseError::new(source, format!("integer '{}' is out of range", slice), span)
        } else {
            ParseError::new(source, format!("unexpected character '{}'", slice), span)
        }
    }

    /// Get the source string.
    pub fn source(&self) -> &'source str {
        self.inner.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut out = Vec::new();
        while let Some(tok) = lexer.next_token() {
            out.push(tok.unwrap().token);
        }
        out
    }

    #[test]
    fn test_canonical_identifier() {
        assert_eq!(
            tokens("RDS(73,7,64,8)"),
            vec![
                Token::Rds,
                Token::LParen,
                Token::Int(73),
                Token::Comma,
                Token::Int(7),
                Token::Comma,
                Token::Int(64),
                Token::Comma,
                Token::Int(8),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_leading_zero_splits() {
        assert_eq!(tokens("07"), vec![Token::Int(0), Token::Int(7)]);
    }

    #[test]
    fn test_whitespace_is_an_error() {
        let mut lexer = Lexer::new("RDS( 1");
        assert_eq!(lexer.next_token().unwrap().unwrap().token, Token::Rds);
        assert_eq!(lexer.next_token().unwrap().unwrap().token, Token::LParen);

        let err = lexer.next_token().unwrap().unwrap_err();
        assert_eq!(err.span, Span::new(4, 5));
        assert!(err.message.contains("whitespace"));
        assert!(err.hint.is_some());
    }

    #[test]
    fn test_overflowing_integer() {
        let mut lexer = Lexer::new("99999999999999999999999");
        let err = lexer.next_token().unwrap().unwrap_err();
        assert!(err.message.contains("out of range"));
    }

    #[test]
    fn test_lexer_peek() {
        let mut lexer = Lexer::new("RDS(");

        assert_eq!(
            lexer.peek().and_then(|t| t.as_ref().ok()).map(|t| &t.token),
            Some(&Token::Rds)
        );
        assert_eq!(
            lexer.peek().and_then(|t| t.as_ref().ok()).map(|t| &t.token),
            Some(&Token::Rds)
        );

        assert_eq!(lexer.next_token().unwrap().unwrap().token, Token::Rds);
        assert_eq!(lexer.next_token().unwrap().unwrap().token, Token::LParen);
        assert!(lexer.next_token().is_none());
    }
}
