//! Token definitions for the chapter notation
//!
//! The tokens are defined using the logos derive macro. Anything outside the
//! notation alphabet is a lexing error and surfaces as
//! [UnexpectedCharacter](super::error::NotationError::UnexpectedCharacter).
use logos::Logos;
use std::fmt;

/// All possible tokens in the chapter notation
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    // ASCII only, unicode digits are not part of the notation
    #[regex(r"[0-9]+")]
    Digits,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("-")]
    Dash,

    // One token per space, so "  " is two separators
    #[token(" ")]
    Space,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::Digits => "<digits>",
            Token::Colon => "<colon>",
            Token::Comma => "<comma>",
            Token::Dash => "<dash>",
            Token::Space => "<space>",
        };
        write!(f, "{}", name)
    }
}
