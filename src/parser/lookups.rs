use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        expressions::{BinaryExpr, Comparison, ExprKind},
        statements::Stmt,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::*};

/// Left-associative binary levels, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Logical,
    Conjunction,
    Additive,
    Multiplicative,
    DotProduct,
    MatrixMultiplication,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type BinaryConstructor = fn(BinaryExpr) -> ExprKind;

lazy_static! {
    /// Statement procedure for each token that can start a statement.
    pub static ref STMT_LOOKUP: HashMap<TokenKind, StmtHandler> = {
        let mut map: HashMap<TokenKind, StmtHandler> = HashMap::new();
        map.insert(TokenKind::Val, parse_value_definition);
        map.insert(TokenKind::Var, parse_variable_declaration);
        map.insert(TokenKind::Return, parse_return_stmt);
        map.insert(TokenKind::Identifier, parse_assign_or_call);
        map.insert(TokenKind::For, parse_for_stmt);
        map.insert(TokenKind::Foreach, parse_foreach_stmt);
        map.insert(TokenKind::If, parse_if_stmt);
        map.insert(TokenKind::Switch, parse_switch_stmt);
        map.insert(TokenKind::OpenCurly, parse_compound_stmt);
        map
    };

    static ref BINARY_LOOKUP: HashMap<TokenKind, (BindingPower, BinaryConstructor)> = {
        let mut map: HashMap<TokenKind, (BindingPower, BinaryConstructor)> = HashMap::new();
        map.insert(TokenKind::Or, (BindingPower::Logical, ExprKind::Or));
        map.insert(TokenKind::And, (BindingPower::Conjunction, ExprKind::And));
        map.insert(TokenKind::Plus, (BindingPower::Additive, ExprKind::Addition));
        map.insert(TokenKind::Dash, (BindingPower::Additive, ExprKind::Subtraction));
        map.insert(TokenKind::Star, (BindingPower::Multiplicative, ExprKind::Multiplication));
        map.insert(TokenKind::Slash, (BindingPower::Multiplicative, ExprKind::Division));
        map.insert(TokenKind::DotProduct, (BindingPower::DotProduct, ExprKind::DotProduct));
        map.insert(
            TokenKind::Hash,
            (BindingPower::MatrixMultiplication, ExprKind::MatrixMultiplication),
        );
        map
    };
}

/// Node constructor for `kind` if it is a binary operator of `level`.
pub fn binary_operator(level: BindingPower, kind: TokenKind) -> Option<BinaryConstructor> {
    BINARY_LOOKUP
        .get(&kind)
        .filter(|(power, _)| *power == level)
        .map(|(_, constructor)| *constructor)
}

pub fn comparison_for(kind: TokenKind) -> Option<Comparison> {
    match kind {
        TokenKind::Less => Some(Comparison::Less),
        TokenKind::Greater => Some(Comparison::Greater),
        TokenKind::LessEquals => Some(Comparison::LessEqual),
        TokenKind::GreaterEquals => Some(Comparison::GreaterEqual),
        TokenKind::Equals => Some(Comparison::Equal),
        TokenKind::NotEquals => Some(Comparison::NotEqual),
        _ => None,
    }
}

// Expected sets reported when a dispatch point finds no alternative.

pub const DECLARATION_START: &[TokenKind] = &[TokenKind::Function, TokenKind::Record];

pub const STATEMENT_START: &[TokenKind] = &[
    TokenKind::Val,
    TokenKind::Var,
    TokenKind::Return,
    TokenKind::Identifier,
    TokenKind::For,
    TokenKind::Foreach,
    TokenKind::If,
    TokenKind::Switch,
    TokenKind::OpenCurly,
];

/// Inside `{ ... }` the closing brace is also acceptable.
pub const BLOCK_BODY: &[TokenKind] = &[
    TokenKind::Val,
    TokenKind::Var,
    TokenKind::Return,
    TokenKind::Identifier,
    TokenKind::For,
    TokenKind::Foreach,
    TokenKind::If,
    TokenKind::Switch,
    TokenKind::OpenCurly,
    TokenKind::CloseCurly,
];

pub const TYPE_START: &[TokenKind] = &[
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Bool,
    TokenKind::Void,
    TokenKind::String,
    TokenKind::Vector,
    TokenKind::Matrix,
    TokenKind::Identifier,
];

pub const ELEMENT_SCALAR: &[TokenKind] = &[TokenKind::Int, TokenKind::Float];

pub const MUTABILITY: &[TokenKind] = &[TokenKind::Val, TokenKind::Var];

pub const RECORD_BODY: &[TokenKind] = &[TokenKind::Val, TokenKind::Var, TokenKind::CloseCurly];

pub const SWITCH_BODY: &[TokenKind] = &[TokenKind::Case, TokenKind::Default, TokenKind::CloseCurly];

pub const SWITCH_BODY_AFTER_DEFAULT: &[TokenKind] = &[TokenKind::Case, TokenKind::CloseCurly];

pub const ATOM_START: &[TokenKind] = &[
    TokenKind::IntLit,
    TokenKind::FloatLit,
    TokenKind::BoolLit,
    TokenKind::StringLit,
    TokenKind::Identifier,
    TokenKind::OpenParen,
    TokenKind::OpenBracket,
    TokenKind::At,
];

/// After a parameter or argument, either another one or the closing paren.
pub const ARGUMENT_SEPARATOR: &[TokenKind] = &[TokenKind::Comma, TokenKind::CloseParen];
