//! Recursive descent parser for `RDS(m,n,k,lambda)`.

use super::error::ParseError;
use super::lexer::{Lexer, SpannedToken, Token};
use super::span::{Span, Spanned};
use super::ParameterTuple;

/// Parser for canonical identifiers.
pub struct Parser<'source> {
    lexer: Lexer<'source>,
    source: &'source str,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            lexer: Lexer::new(source),
            source,
        }
    }

    /// Parse a complete identifier. Trailing input is an error.
    pub fn parse_identifier(&mut self) -> Result<ParameterTuple, ParseError> {
        self.expect_token(Token::Rds)?;
        self.expect_token(Token::LParen)?;
        let m = self.expect_int()?;
        self.expect_token(Token::Comma)?;
        let n = self.expect_int()?;
        self.expect_token(Token::Comma)?;
        let k = self.expect_int()?;
        self.expect_token(Token::Comma)?;
        let lambda = self.expect_int()?;
        self.expect_token(Token::RParen)?;
        self.expect_end()?;

        Ok(ParameterTuple::new(m.value, n.value, k.value, lambda.value))
    }

    /// Expect and consume an integer.
    fn expect_int(&mut self) -> Result<Spanned<u64>, ParseError> {
        let tok = self.next_token()?;
        match tok.token {
            Token::Int(i) => Ok(Spanned::new(i, tok.span)),
            other => Err(ParseError::new(
                self.source,
                format!("expected integer, found {}", other),
                tok.span,
            )),
        }
    }

    /// Expect and consume a specific token.
    fn expect_token(&mut self, expected: Token) -> Result<SpannedToken, ParseError> {
        let tok = self.next_token()?;
        if tok.token == expected {
            return Ok(tok);
        }

        let err = ParseError::new(
            self.source,
            format!("expected {}, found {}", expected, tok.token),
            tok.span,
        );
        Err(match (&expected, &tok.token) {
            (Token::Comma | Token::RParen, Token::Int(_)) => {
                err.with_hint("integers are written without leading zeros")
            }
            _ => err,
        })
    }

    /// Expect the end of input.
    fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.lexer.next_token() {
            None => Ok(()),
            Some(Err(e)) => Err(e),
            Some(Ok(tok)) => Err(ParseError::new(
                self.source,
                format!("unexpected {} after identifier", tok.token),
                Span::new(tok.span.start, self.source.len()),
            )),
        }
    }

    /// Get the next token or error if EOF.
    fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        match self.lexer.next_token() {
            Some(tok) => tok,
            None => Err(ParseError::new(
                self.source,
                "unexpected end of input",
                Span::eof(self.source),
            )),
        }
    }
}

/// Parse a canonical identifier string.
pub fn parse(source: &str) -> Result<ParameterTuple, ParseError> {
    Parser::new(source).parse_identifier()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        assert_eq!(
            parse("RDS(73,7,64,8)").unwrap(),
            ParameterTuple::new(73, 7, 64, 8)
        );
        assert_eq!(parse("RDS(0,0,0,0)").unwrap(), ParameterTuple::new(0, 0, 0, 0));
    }

    #[test]
    fn test_missing_parameter() {
        let err = parse("RDS(73,7,64)").unwrap_err();
        assert_eq!(err.message, "expected ',', found ')'");
        assert_eq!(err.span, Span::new(11, 12));
    }

    #[test]
    fn test_extra_parameter() {
        let err = parse("RDS(1,2,3,4,5)").unwrap_err();
        assert_eq!(err.message, "expected ')', found ','");
    }

    #[test]
    fn test_truncated() {
        let err = parse("RDS(1,2").unwrap_err();
        assert_eq!(err.message, "unexpected end of input");
        assert_eq!(err.span, Span::new(7, 7));
    }

    #[test]
    fn test_trailing_input() {
        let err = parse("RDS(1,2,3,4)RDS").unwrap_err();
        assert!(err.message.starts_with("unexpected 'RDS'"));
    }

    #[test]
    fn test_leading_zero_rejected() {
        let err = parse("RDS(07,2,3,4)").unwrap_err();
        assert_eq!(err.message, "expected ',', found integer 7");
        assert!(err.hint.is_some());
    }

    #[test]
    fn test_negative_rejected() {
        let err = parse("RDS(-1,2,3,4)").unwrap_err();
        assert_eq!(err.message, "unexpected character '-'");
    }

    #[test]
    fn test_wrong_prefix() {
        assert!(parse("rds(1,2,3,4)").is_err());
        assert!(parse("(1,2,3,4)").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_whitespace_rejected() {
        let err = parse("RDS(1, 2,3,4)").unwrap_err();
        assert_eq!(err.span, Span::new(6, 7));
        assert!(err.message.contains("whitespace"));
    }
}
