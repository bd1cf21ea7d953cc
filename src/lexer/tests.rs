//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric, boolean and string literals
//! - Operators and punctuation
//! - Comments
//! - Positions and error tokens

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};
use crate::Position;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "function record val var return for foreach if else switch case default";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Function,
            TokenKind::Record,
            TokenKind::Val,
            TokenKind::Var,
            TokenKind::Return,
            TokenKind::For,
            TokenKind::Foreach,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Switch,
            TokenKind::Case,
            TokenKind::Default,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_type_keywords() {
    assert_eq!(
        kinds("int float bool void string vector matrix"),
        vec![
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Bool,
            TokenKind::Void,
            TokenKind::String,
            TokenKind::Vector,
            TokenKind::Matrix,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase values");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].spelling, "foo");
    assert_eq!(tokens[1].spelling, "bar");
    assert_eq!(tokens[2].spelling, "baz_123");
    assert_eq!(tokens[3].spelling, "_underscore");
    assert_eq!(tokens[4].spelling, "CamelCase");
    // Keyword prefixes do not split identifiers.
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].spelling, "values");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5 2e3 1.5E-2");

    assert_eq!(tokens[0].kind, TokenKind::IntLit);
    assert_eq!(tokens[0].spelling, "42");
    assert_eq!(tokens[1].kind, TokenKind::FloatLit);
    assert_eq!(tokens[1].spelling, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::IntLit);
    assert_eq!(tokens[2].spelling, "0");
    assert_eq!(tokens[3].kind, TokenKind::FloatLit);
    assert_eq!(tokens[3].spelling, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::FloatLit);
    assert_eq!(tokens[4].spelling, "2e3");
    assert_eq!(tokens[5].kind, TokenKind::FloatLit);
    assert_eq!(tokens[5].spelling, "1.5E-2");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_bool_literals() {
    let tokens = tokenize("true false");

    assert_eq!(tokens[0].kind, TokenKind::BoolLit);
    assert_eq!(tokens[0].spelling, "true");
    assert_eq!(tokens[1].kind, TokenKind::BoolLit);
    assert_eq!(tokens[1].spelling, "false");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "world" "multiple words" """#);

    assert_eq!(tokens[0].kind, TokenKind::StringLit);
    assert_eq!(tokens[0].spelling, "hello");
    assert_eq!(tokens[1].spelling, "world");
    assert_eq!(tokens[2].spelling, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::StringLit);
    assert_eq!(tokens[3].spelling, "");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / ^ == != < > <= >= = && || ! .* #"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Caret,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::DotProduct,
            TokenKind::Hash,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] , ; : ? @"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Question,
            TokenKind::At,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_dimension_selectors() {
    assert_eq!(
        kinds("m.xDimension m.yDimension v.dimension"),
        vec![
            TokenKind::Identifier,
            TokenKind::XDimension,
            TokenKind::Identifier,
            TokenKind::YDimension,
            TokenKind::Identifier,
            TokenKind::Dimension,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("val x // this is a comment\nvar /* block\ncomment */ y");

    assert_eq!(tokens[0].kind, TokenKind::Val);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].spelling, "x");
    assert_eq!(tokens[2].kind, TokenKind::Var);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].spelling, "y");
    assert_eq!(tokens[3].position, Position::new(3, 12));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("function int f() {\n  return 1;\n}\n");

    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].position, Position::new(1, 10));
    assert_eq!(tokens[2].position, Position::new(1, 14));
    assert_eq!(tokens[5].position, Position::new(1, 18));
    // return
    assert_eq!(tokens[6].position, Position::new(2, 3));
    // 1
    assert_eq!(tokens[7].position, Position::new(2, 10));
    // }
    assert_eq!(tokens[9].position, Position::new(3, 1));
    assert_eq!(tokens[10].kind, TokenKind::EOF);
    assert_eq!(tokens[10].position, Position::new(4, 1));
}

#[test]
fn test_unrecognised_character_becomes_error_token() {
    let tokens = tokenize("a $ b");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].spelling, "$");
    assert_eq!(tokens[1].position, Position::new(1, 3));
    // Scanning resumes after the bad character.
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].spelling, "b");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_string_is_error_token() {
    let tokens = tokenize("\"open\nx");

    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].spelling, "\"open");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].position, Position::new(2, 1));
}

#[test]
fn test_unterminated_comment_is_error_token() {
    let tokens = tokenize("x /* never closed");

    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].spelling, "/* never closed");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_lexer_is_lazy_and_fused() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next().map(|token| token.kind), Some(TokenKind::Identifier));
    assert_eq!(lexer.next().map(|token| token.kind), Some(TokenKind::EOF));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn test_current_position_follows_scanning() {
    let mut lexer = Lexer::new("val x\n  y $");

    assert_eq!(lexer.current_position(), Position::new(1, 1));
    lexer.next();
    assert_eq!(lexer.current_position(), Position::new(1, 4));
    lexer.next();
    assert_eq!(lexer.current_position(), Position::new(1, 6));

    let y = lexer.next().unwrap();
    assert_eq!(y.position, Position::new(2, 3));
    assert_eq!(lexer.current_position(), Position::new(2, 4));

    let error = lexer.next().unwrap();
    assert_eq!(error.kind, TokenKind::Error);
    assert_eq!(error.position, Position::new(2, 5));

    let eof = lexer.next().unwrap();
    assert_eq!(eof.kind, TokenKind::EOF);
    assert_eq!(eof.position, Position::new(2, 6));
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].position, Position::new(1, 1));
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("val int x = 42;");

    assert_eq!(tokens.len(), 7); // val, int, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Val);
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].spelling, "x");
    assert_eq!(tokens[3].kind, TokenKind::Assignment);
    assert_eq!(tokens[4].kind, TokenKind::IntLit);
    assert_eq!(tokens[4].spelling, "42");
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}
