//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::Position;

fn token(kind: TokenKind, spelling: &str, line: u32, column: u32) -> Token {
    Token {
        kind,
        spelling: spelling.to_string(),
        position: Position::new(line, column),
    }
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::unexpected_token(
        token(TokenKind::CloseCurly, "}", 3, 7),
        &[TokenKind::Val, TokenKind::Var],
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position(), Position::new(3, 7));
    match error.get_error() {
        ErrorImpl::UnexpectedToken { found, expected } => {
            assert_eq!(found.kind, TokenKind::CloseCurly);
            assert_eq!(expected, &vec![TokenKind::Val, TokenKind::Var]);
        }
        other => panic!("Expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_lexical_error() {
    let error = Error::lexical_error(token(TokenKind::Error, "$", 1, 4));

    assert_eq!(error.get_error_name(), "LexicalError");
    assert_eq!(error.get_position(), Position::new(1, 4));
}

#[test]
fn test_number_parse_error() {
    let error = Error::number_parse_error(token(TokenKind::IntLit, "99999999999", 2, 1));

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position(), Position::new(2, 1));
}

#[test]
fn test_error_position_from_explicit_constructor() {
    let error = Error::new(
        ErrorImpl::LexicalError {
            token: token(TokenKind::Error, "~", 1, 1),
        },
        Position::new(42, 9),
    );

    assert_eq!(error.get_position(), Position::new(42, 9));
}

#[test]
fn test_error_tip_suggestion_lists_expected_kinds() {
    let error = Error::unexpected_token(
        token(TokenKind::Identifier, "x", 1, 1),
        &[TokenKind::Function, TokenKind::Record],
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "found `x`, expected one of: `function`, `record`")
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_lexical_error_has_no_tip() {
    let error = Error::lexical_error(token(TokenKind::Error, "$", 1, 4));

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::unexpected_token(
        token(TokenKind::EOF, "EOF", 5, 2),
        &[TokenKind::CloseCurly],
    );

    assert_eq!(
        error.to_string(),
        "unexpected token `EOF`, expected one of: `}` at 5:2"
    );

    let error = Error::lexical_error(token(TokenKind::Error, "$", 1, 4));
    assert_eq!(error.to_string(), "lexical error at `$` at 1:4");
}
