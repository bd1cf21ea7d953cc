use crate::{
    ast::{
        ast::IteratorDeclaration,
        statements::{
            CallStmt, Case, CompoundStmt, DefaultCase, ForEachLoop, ForLoop, IfStmt,
            LeftHandIdentifier, LeftHandIdentifierKind, ReturnStmt, Stmt, StmtKind, SwitchStmt,
            ValueDefinition, VariableAssignment, VariableDeclaration,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Position,
};

use super::{
    decl::parse_mutability,
    expr::{parse_call, parse_expr},
    lookups::{BLOCK_BODY, STATEMENT_START, STMT_LOOKUP, SWITCH_BODY, SWITCH_BODY_AFTER_DEFAULT},
    parser::Parser,
    types::parse_type,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match STMT_LOOKUP.get(&parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected(STATEMENT_START)),
    }
}

/// `{ stmt* }`, returning the statements in order.
pub fn parse_block_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.current_token().is_one_of_many(STATEMENT_START) {
            return Err(parser.unexpected(BLOCK_BODY));
        }
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    Ok(statements)
}

pub fn parse_value_definition(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.position();
    parser.expect(TokenKind::Val)?;

    let ty = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::new(
        StmtKind::ValueDefinition(ValueDefinition { ty, name, value }),
        position,
    ))
}

pub fn parse_variable_declaration(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.position();
    parser.expect(TokenKind::Var)?;

    let ty = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::new(
        StmtKind::VariableDeclaration(VariableDeclaration { ty, name }),
        position,
    ))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.position();
    parser.expect(TokenKind::Return)?;

    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::new(StmtKind::Return(ReturnStmt { value }), position))
}

/// An identifier in statement position starts a call if `(` follows it and
/// an assignment otherwise.
pub fn parse_assign_or_call(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.position();
    let name = parser.expect(TokenKind::Identifier)?;

    let kind = if parser.current_token_kind() == TokenKind::OpenParen {
        StmtKind::Call(CallStmt {
            call: parse_call(parser, name)?,
        })
    } else {
        StmtKind::VariableAssignment(parse_assign(parser, name, position)?)
    };
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::new(kind, position))
}

/// Everything after the target's name: optional selector, `=` and the value.
fn parse_assign(
    parser: &mut Parser,
    name: String,
    position: Position,
) -> Result<VariableAssignment, Error> {
    let target = parse_left_hand_identifier(parser, name, position)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;

    Ok(VariableAssignment { target, value })
}

fn parse_left_hand_identifier(
    parser: &mut Parser,
    name: String,
    position: Position,
) -> Result<LeftHandIdentifier, Error> {
    let kind = match parser.current_token_kind() {
        TokenKind::OpenBracket => {
            parser.advance()?;
            let index = parse_expr(parser)?;
            parser.expect(TokenKind::CloseBracket)?;

            if parser.current_token_kind() == TokenKind::OpenBracket {
                parser.advance()?;
                let col = parse_expr(parser)?;
                parser.expect(TokenKind::CloseBracket)?;
                LeftHandIdentifierKind::MatrixIndex { row: index, col }
            } else {
                LeftHandIdentifierKind::VectorIndex { index }
            }
        }
        TokenKind::At => {
            parser.advance()?;
            let field = parser.expect(TokenKind::Identifier)?;
            LeftHandIdentifierKind::RecordField { field }
        }
        _ => LeftHandIdentifierKind::Plain,
    };

    Ok(LeftHandIdentifier {
        name,
        kind,
        position,
    })
}

/// `for (i = init; condition; i = step) body`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.position();
    parser.expect(TokenKind::For)?;
    parser.expect(TokenKind::OpenParen)?;

    let variable = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    let init = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    let step_variable = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    let step = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::new(
        StmtKind::ForLoop(ForLoop {
            variable,
            init,
            condition,
            step_variable,
            step,
            body: Box::new(body),
        }),
        position,
    ))
}

pub fn parse_foreach_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.position();
    parser.expect(TokenKind::Foreach)?;
    parser.expect(TokenKind::OpenParen)?;

    let iterator = parse_iterator_declaration(parser)?;
    parser.expect(TokenKind::Colon)?;
    let source = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::new(
        StmtKind::ForEachLoop(ForEachLoop {
            iterator,
            source,
            body: Box::new(body),
        }),
        position,
    ))
}

fn parse_iterator_declaration(parser: &mut Parser) -> Result<IteratorDeclaration, Error> {
    let position = parser.position();
    let is_mutable = parse_mutability(parser)?;
    let ty = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?;

    Ok(IteratorDeclaration {
        name,
        ty,
        is_mutable,
        position,
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.position();
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = parse_stmt(parser)?;

    // A dangling else binds to the innermost if.
    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance()?;
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::new(
        StmtKind::If(IfStmt {
            condition,
            then_body: Box::new(then_body),
            else_body,
        }),
        position,
    ))
}

/// `switch (test) { ... }` with any number of cases and at most one default.
pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.position();
    parser.expect(TokenKind::Switch)?;
    parser.expect(TokenKind::OpenParen)?;
    let test = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut cases = Vec::new();
    let mut default = None;
    loop {
        match parser.current_token_kind() {
            TokenKind::Case => cases.push(parse_case(parser)?),
            TokenKind::Default if default.is_none() => default = Some(parse_default_case(parser)?),
            TokenKind::CloseCurly => break,
            _ if default.is_some() => return Err(parser.unexpected(SWITCH_BODY_AFTER_DEFAULT)),
            _ => return Err(parser.unexpected(SWITCH_BODY)),
        }
    }
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stmt::new(
        StmtKind::Switch(SwitchStmt {
            test,
            cases,
            default,
        }),
        position,
    ))
}

fn parse_case(parser: &mut Parser) -> Result<Case, Error> {
    let position = parser.position();
    parser.expect(TokenKind::Case)?;
    let condition = parse_expr(parser)?;
    parser.expect(TokenKind::Colon)?;
    let body = parse_stmt(parser)?;

    Ok(Case {
        condition,
        body: Box::new(body),
        position,
    })
}

fn parse_default_case(parser: &mut Parser) -> Result<DefaultCase, Error> {
    let position = parser.position();
    parser.expect(TokenKind::Default)?;
    parser.expect(TokenKind::Colon)?;
    let body = parse_stmt(parser)?;

    Ok(DefaultCase {
        body: Box::new(body),
        position,
    })
}

pub fn parse_compound_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.position();
    let statements = parse_block_body(parser)?;

    Ok(Stmt::new(
        StmtKind::Compound(CompoundStmt { statements }),
        position,
    ))
}
