//! Expression parsing.
//!
//! One procedure per precedence level, loosest first. Each level parses its
//! operands with the next tighter level, so the call chain itself encodes
//! precedence:
//!
//! - `? :` select, then `||`, `&&`, prefix `!`, comparisons
//! - `+ -`, `* /`, prefix `-`, right-associative `^`
//! - dimension postfixes, `.*`, `#`
//! - subranges `{a:b:c}`, element selects `[i]`, record selects `@f`
//! - atoms
//!
//! Every node takes the position of the first token of its level.

use crate::{
    ast::expressions::{
        BinaryExpr, CallExpr, CompareExpr, ElementSelectExpr, Expr, ExprKind,
        RecordElementSelectExpr, RecordInitExpr, SelectExpr, StructureInitExpr, SubMatrixExpr,
        SubVectorExpr, UnaryExpr,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binary_operator, comparison_for, BindingPower, ARGUMENT_SEPARATOR, ATOM_START},
    parser::Parser,
};

type LevelParser = fn(&mut Parser) -> Result<Expr, Error>;

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_select(parser)
}

/// Condition and both branches are parsed one level down, at `||`.
fn parse_select(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.position();
    let condition = parse_or(parser)?;
    if parser.current_token_kind() != TokenKind::Question {
        return Ok(condition);
    }

    parser.advance()?;
    let true_case = parse_or(parser)?;
    parser.expect(TokenKind::Colon)?;
    let false_case = parse_or(parser)?;

    Ok(Expr::new(
        ExprKind::Select(SelectExpr {
            condition: Box::new(condition),
            true_case: Box::new(true_case),
            false_case: Box::new(false_case),
        }),
        position,
    ))
}

/// Left-associative loop over the operators `binary_operator` assigns to `level`.
fn parse_binary_level(
    parser: &mut Parser,
    level: BindingPower,
    operand: LevelParser,
) -> Result<Expr, Error> {
    let position = parser.position();
    let mut left = operand(parser)?;

    while let Some(constructor) = binary_operator(level, parser.current_token_kind()) {
        parser.advance()?;
        let right = operand(parser)?;
        left = Expr::new(constructor(BinaryExpr::new(left, right)), position);
    }

    Ok(left)
}

fn parse_or(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_level(parser, BindingPower::Logical, parse_and)
}

fn parse_and(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_level(parser, BindingPower::Conjunction, parse_not)
}

/// `!` applies to a comparison and does not nest.
fn parse_not(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token_kind() != TokenKind::Not {
        return parse_compare(parser);
    }

    let position = parser.advance()?.position;
    let operand = parse_compare(parser)?;
    Ok(Expr::new(ExprKind::BoolNot(UnaryExpr::new(operand)), position))
}

fn parse_compare(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.position();
    let mut left = parse_additive(parser)?;

    while let Some(comparison) = comparison_for(parser.current_token_kind()) {
        parser.advance()?;
        let right = parse_additive(parser)?;
        left = Expr::new(
            ExprKind::Compare(CompareExpr {
                left: Box::new(left),
                right: Box::new(right),
                comparison,
            }),
            position,
        );
    }

    Ok(left)
}

fn parse_additive(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_level(parser, BindingPower::Additive, parse_multiplicative)
}

fn parse_multiplicative(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_level(parser, BindingPower::Multiplicative, parse_unary_minus)
}

fn parse_unary_minus(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.current_token_kind() != TokenKind::Dash {
        return parse_exponentiation(parser);
    }

    let position = parser.advance()?.position;
    let operand = parse_exponentiation(parser)?;
    Ok(Expr::new(ExprKind::UnaryMinus(UnaryExpr::new(operand)), position))
}

/// Right-associative: the exponent recurses into this level.
fn parse_exponentiation(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.position();
    let base = parse_dimension(parser)?;
    if parser.current_token_kind() != TokenKind::Caret {
        return Ok(base);
    }

    parser.advance()?;
    let exponent = parse_exponentiation(parser)?;
    Ok(Expr::new(
        ExprKind::Exponentiation(BinaryExpr::new(base, exponent)),
        position,
    ))
}

/// At most one dimension postfix per operand.
fn parse_dimension(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.position();
    let operand = parse_dot_product(parser)?;

    let constructor: fn(UnaryExpr) -> ExprKind = match parser.current_token_kind() {
        TokenKind::XDimension => ExprKind::MatrixXDimension,
        TokenKind::YDimension => ExprKind::MatrixYDimension,
        TokenKind::Dimension => ExprKind::VectorDimension,
        _ => return Ok(operand),
    };

    parser.advance()?;
    Ok(Expr::new(constructor(UnaryExpr::new(operand)), position))
}

fn parse_dot_product(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_level(parser, BindingPower::DotProduct, parse_matrix_multiplication)
}

fn parse_matrix_multiplication(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_level(parser, BindingPower::MatrixMultiplication, parse_subrange)
}

/// `base{start:base_index:end}` selects a subvector, a second group makes it
/// a submatrix.
fn parse_subrange(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.position();
    let base = parse_element_select(parser)?;
    if parser.current_token_kind() != TokenKind::OpenCurly {
        return Ok(base);
    }

    let (row_start, row_base, row_end) = parse_range(parser)?;
    if parser.current_token_kind() != TokenKind::OpenCurly {
        return Ok(Expr::new(
            ExprKind::SubVector(SubVectorExpr {
                base: Box::new(base),
                base_index: Box::new(row_base),
                start: Box::new(row_start),
                end: Box::new(row_end),
            }),
            position,
        ));
    }

    let (col_start, col_base, col_end) = parse_range(parser)?;
    Ok(Expr::new(
        ExprKind::SubMatrix(SubMatrixExpr {
            base: Box::new(base),
            row_base: Box::new(row_base),
            row_start: Box::new(row_start),
            row_end: Box::new(row_end),
            col_base: Box::new(col_base),
            col_start: Box::new(col_start),
            col_end: Box::new(col_end),
        }),
        position,
    ))
}

/// `{ start : base : end }`
fn parse_range(parser: &mut Parser) -> Result<(Expr, Expr, Expr), Error> {
    parser.expect(TokenKind::OpenCurly)?;
    let start = parse_expr(parser)?;
    parser.expect(TokenKind::Colon)?;
    let base = parse_expr(parser)?;
    parser.expect(TokenKind::Colon)?;
    let end = parse_expr(parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok((start, base, end))
}

fn parse_element_select(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.position();
    let mut base = parse_record_element_select(parser)?;

    while parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance()?;
        let index = parse_expr(parser)?;
        parser.expect(TokenKind::CloseBracket)?;

        base = Expr::new(
            ExprKind::ElementSelect(ElementSelectExpr {
                base: Box::new(base),
                index: Box::new(index),
            }),
            position,
        );
    }

    Ok(base)
}

fn parse_record_element_select(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.position();
    let base = parse_atom(parser)?;
    if parser.current_token_kind() != TokenKind::At {
        return Ok(base);
    }

    parser.advance()?;
    let element_name = parser.expect(TokenKind::Identifier)?;
    Ok(Expr::new(
        ExprKind::RecordElementSelect(RecordElementSelectExpr {
            base: Box::new(base),
            element_name,
        }),
        position,
    ))
}

pub fn parse_atom(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.position();

    let kind = match parser.current_token_kind() {
        TokenKind::IntLit => {
            let token = parser.current_token().clone();
            let value = match token.spelling.parse::<i32>() {
                Ok(value) => value,
                Err(_) => return Err(Error::number_parse_error(token)),
            };
            parser.advance()?;
            ExprKind::IntValue(value)
        }
        TokenKind::FloatLit => {
            let token = parser.current_token().clone();
            let value = match token.spelling.parse::<f32>() {
                Ok(value) if value.is_finite() => value,
                _ => return Err(Error::number_parse_error(token)),
            };
            parser.advance()?;
            ExprKind::FloatValue(value)
        }
        TokenKind::BoolLit => ExprKind::BoolValue(parser.advance()?.spelling == "true"),
        TokenKind::StringLit => ExprKind::StringValue(parser.advance()?.spelling),
        TokenKind::Identifier => {
            let name = parser.advance()?.spelling;
            if parser.current_token_kind() == TokenKind::OpenParen {
                ExprKind::Call(parse_call(parser, name)?)
            } else {
                ExprKind::IdentifierReference(name)
            }
        }
        TokenKind::OpenParen => {
            parser.advance()?;
            let inner = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            return Ok(inner);
        }
        TokenKind::At => {
            parser.advance()?;
            let name = parser.expect(TokenKind::Identifier)?;
            let elements = parse_element_list(parser)?;
            ExprKind::RecordInit(RecordInitExpr { name, elements })
        }
        TokenKind::OpenBracket => ExprKind::StructureInit(StructureInitExpr {
            elements: parse_element_list(parser)?,
        }),
        _ => return Err(parser.unexpected(ATOM_START)),
    };

    Ok(Expr::new(kind, position))
}

/// `[ expr (, expr)* ]`, never empty.
fn parse_element_list(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenBracket)?;

    let mut elements = vec![parse_expr(parser)?];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance()?;
        elements.push(parse_expr(parser)?);
    }

    parser.expect(TokenKind::CloseBracket)?;
    Ok(elements)
}

/// Argument list of a call whose name has already been consumed.
pub fn parse_call(parser: &mut Parser, name: String) -> Result<CallExpr, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser)?);
        while parser.current_token_kind() != TokenKind::CloseParen {
            if parser.current_token_kind() != TokenKind::Comma {
                return Err(parser.unexpected(ARGUMENT_SEPARATOR));
            }
            parser.advance()?;
            arguments.push(parse_expr(parser)?);
        }
    }
    parser.expect(TokenKind::CloseParen)?;

    Ok(CallExpr { name, arguments })
}
