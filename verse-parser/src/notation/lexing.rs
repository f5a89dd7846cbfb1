//! Lexer
//!
//!     Turns chapter notation into a stream of `(Token, Range<usize>)` pairs. The
//!     tokenization itself is handled entirely by logos; this module only converts
//!     logos errors into [NotationError::UnexpectedCharacter] and offers a small cursor
//!     over the result for the parser.
//!
//!     The byte ranges are kept so every parse error can point at its input position.

use super::error::NotationError;
use super::token::Token;
use logos::Logos;
use std::ops::Range;

pub type SpannedToken = (Token, Range<usize>);

/// Tokenize a string, failing on the first character outside the notation alphabet
pub fn tokenize_with_spans(source: &str) -> Result<Vec<SpannedToken>, NotationError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let found = source[span.start..].chars().next().unwrap_or('\u{FFFD}');
                return Err(NotationError::UnexpectedCharacter {
                    found,
                    position: span.start,
                });
            }
        }
    }

    Ok(tokens)
}

/// Read a digit run as a number.
pub fn parse_number(source: &str, span: &Range<usize>) -> Result<u32, NotationError> {
    source[span.clone()]
        .parse::<u32>()
        .map_err(|_| NotationError::NumberOverflow {
            position: span.start,
        })
}

/// Forward-only cursor over a token stream.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    source: &'a str,
    tokens: Vec<SpannedToken>,
    index: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(source: &'a str) -> Result<Self, NotationError> {
        Ok(Self {
            source,
            tokens: tokenize_with_spans(source)?,
            index: 0,
        })
    }

    pub fn next_token(&mut self) -> Option<SpannedToken> {
        let token = self.tokens.get(self.index).cloned();
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// Consume the digit run that must follow the token ending at `after`.
    ///
    /// Zero digits (another token or end of input) is a
    /// [MalformedNumber](NotationError::MalformedNumber) at the position where the
    /// digits were expected.
    pub fn expect_number(&mut self, after: usize) -> Result<(u32, Range<usize>), NotationError> {
        match self.tokens.get(self.index) {
            Some((Token::Digits, span)) => {
                let span = span.clone();
                self.index += 1;
                Ok((parse_number(self.source, &span)?, span))
            }
            Some((_, span)) => Err(NotationError::MalformedNumber {
                position: span.start,
            }),
            None => Err(NotationError::MalformedNumber { position: after }),
        }
    }

    /// Read the digit run at `span` of the underlying source.
    pub fn number(&self, span: &Range<usize>) -> Result<u32, NotationError> {
        parse_number(self.source, span)
    }
}
