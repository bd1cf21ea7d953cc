//! Type annotations.
//!
//! Supports:
//!
//! - Scalar types (`int`, `float`, `bool`, `void`, `string`)
//! - Sized vectors and matrices (`vector<int>[n]`, `matrix<float>[r][c]`)
//! - Record types, referred to by name

use crate::{
    ast::{
        expressions::Expr,
        types::{ScalarType, Type},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    lookups::{ELEMENT_SCALAR, TYPE_START},
    parser::Parser,
};

pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let ty = match parser.current_token_kind() {
        TokenKind::Int => Type::Int,
        TokenKind::Float => Type::Float,
        TokenKind::Bool => Type::Bool,
        TokenKind::Void => Type::Void,
        TokenKind::String => Type::String,
        TokenKind::Vector => return parse_vector_type(parser),
        TokenKind::Matrix => return parse_matrix_type(parser),
        TokenKind::Identifier => Type::Record(parser.current_token().spelling.clone()),
        _ => return Err(parser.unexpected(TYPE_START)),
    };

    parser.advance()?;
    Ok(ty)
}

fn parse_vector_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::Vector)?;
    let element = parse_element_scalar(parser)?;
    let size = parse_dimension_size(parser)?;

    Ok(Type::Vector {
        element,
        size: Box::new(size),
    })
}

fn parse_matrix_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::Matrix)?;
    let element = parse_element_scalar(parser)?;
    let rows = parse_dimension_size(parser)?;
    let cols = parse_dimension_size(parser)?;

    Ok(Type::Matrix {
        element,
        rows: Box::new(rows),
        cols: Box::new(cols),
    })
}

/// `< int >` or `< float >`
fn parse_element_scalar(parser: &mut Parser) -> Result<ScalarType, Error> {
    parser.expect(TokenKind::Less)?;
    let element = match parser.current_token_kind() {
        TokenKind::Int => ScalarType::Int,
        TokenKind::Float => ScalarType::Float,
        _ => return Err(parser.unexpected(ELEMENT_SCALAR)),
    };
    parser.advance()?;
    parser.expect(TokenKind::Greater)?;

    Ok(element)
}

fn parse_dimension_size(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    let size = parse_expr(parser)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(size)
}
