use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// A fatal parse failure together with the source position it refers to.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// `found` does not continue the production being parsed; `expected`
    /// lists every kind that would have.
    pub fn unexpected_token(found: Token, expected: &[TokenKind]) -> Self {
        let position = found.position;
        Error::new(
            ErrorImpl::UnexpectedToken {
                found,
                expected: expected.to_vec(),
            },
            position,
        )
    }

    pub fn lexical_error(token: Token) -> Self {
        let position = token.position;
        Error::new(ErrorImpl::LexicalError { token }, position)
    }

    pub fn number_parse_error(token: Token) -> Self {
        let position = token.position;
        Error::new(ErrorImpl::NumberParseError { token }, position)
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::LexicalError { .. } => "LexicalError",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { found, expected } => ErrorTip::Suggestion(format!(
                "found `{}`, expected one of: {}",
                found.spelling,
                format_kinds(expected)
            )),
            // The rendered source line and caret already show the bad input.
            ErrorImpl::LexicalError { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it outside the 32-bit range?",
                token.spelling
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token `{}`, expected one of: {}", .found.spelling, format_kinds(.expected))]
    UnexpectedToken {
        found: Token,
        expected: Vec<TokenKind>,
    },
    #[error("lexical error at `{}`", .token.spelling)]
    LexicalError { token: Token },
    #[error("error parsing number: {:?}", .token.spelling)]
    NumberParseError { token: Token },
}

fn format_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|kind| format!("`{}`", kind))
        .collect::<Vec<_>>()
        .join(", ")
}
