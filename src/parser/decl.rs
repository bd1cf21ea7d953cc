//! Top-level declarations: functions and record types.

use crate::{
    ast::ast::{FormalParameter, Function, RecordElementDeclaration, RecordTypeDeclaration},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{ARGUMENT_SEPARATOR, MUTABILITY, RECORD_BODY},
    parser::Parser,
    stmt::parse_block_body,
    types::parse_type,
};

/// `function type name ( parameters ) { statements }`
pub fn parse_function(parser: &mut Parser) -> Result<Function, Error> {
    let position = parser.position();
    parser.expect(TokenKind::Function)?;

    let return_type = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?;

    parser.expect(TokenKind::OpenParen)?;
    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        parameters.push(parse_formal_parameter(parser)?);
        while parser.current_token_kind() != TokenKind::CloseParen {
            if parser.current_token_kind() != TokenKind::Comma {
                return Err(parser.unexpected(ARGUMENT_SEPARATOR));
            }
            parser.advance()?;
            parameters.push(parse_formal_parameter(parser)?);
        }
    }
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block_body(parser)?;

    Ok(Function {
        name,
        return_type,
        parameters,
        body,
        position,
    })
}

pub fn parse_formal_parameter(parser: &mut Parser) -> Result<FormalParameter, Error> {
    let position = parser.position();
    let ty = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?;

    Ok(FormalParameter { name, ty, position })
}

/// `record Name { element element* }`. Empty records are rejected.
pub fn parse_record_type_declaration(parser: &mut Parser) -> Result<RecordTypeDeclaration, Error> {
    let position = parser.position();
    parser.expect(TokenKind::Record)?;
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut elements = vec![parse_record_element_declaration(parser)?];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.current_token().is_one_of_many(MUTABILITY) {
            return Err(parser.unexpected(RECORD_BODY));
        }
        elements.push(parse_record_element_declaration(parser)?);
    }
    parser.expect(TokenKind::CloseCurly)?;

    Ok(RecordTypeDeclaration {
        name,
        elements,
        position,
    })
}

pub fn parse_record_element_declaration(
    parser: &mut Parser,
) -> Result<RecordElementDeclaration, Error> {
    let position = parser.position();
    let is_mutable = parse_mutability(parser)?;
    let ty = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(RecordElementDeclaration {
        is_mutable,
        ty,
        name,
        position,
    })
}

/// `val` or `var`; true for `var`.
pub(super) fn parse_mutability(parser: &mut Parser) -> Result<bool, Error> {
    match parser.current_token_kind() {
        TokenKind::Val => {
            parser.advance()?;
            Ok(false)
        }
        TokenKind::Var => {
            parser.advance()?;
            Ok(true)
        }
        _ => Err(parser.unexpected(MUTABILITY)),
    }
}
