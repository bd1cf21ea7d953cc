use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("function", TokenKind::Function);
        map.insert("record", TokenKind::Record);
        map.insert("val", TokenKind::Val);
        map.insert("var", TokenKind::Var);
        map.insert("return", TokenKind::Return);
        map.insert("for", TokenKind::For);
        map.insert("foreach", TokenKind::Foreach);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("default", TokenKind::Default);
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map.insert("bool", TokenKind::Bool);
        map.insert("void", TokenKind::Void);
        map.insert("string", TokenKind::String);
        map.insert("vector", TokenKind::Vector);
        map.insert("matrix", TokenKind::Matrix);
        map.insert("true", TokenKind::BoolLit);
        map.insert("false", TokenKind::BoolLit);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    /// Input the scanner could not turn into a token.
    Error,

    IntLit,
    FloatLit,
    BoolLit,
    StringLit,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Semicolon,
    Colon,
    Question,
    Comma,
    At,

    Plus,
    Dash,
    Slash,
    Star,
    Caret,
    DotProduct,   // .*
    Hash,         // #
    XDimension,   // .xDimension
    YDimension,   // .yDimension
    Dimension,    // .dimension

    // Reserved
    Function,
    Record,
    Val,
    Var,
    Return,
    For,
    Foreach,
    If,
    Else,
    Switch,
    Case,
    Default,
    Int,
    Float,
    Bool,
    Void,
    String,
    Vector,
    Matrix,
}

impl TokenKind {
    /// The fixed spelling of the token, or a description for token classes.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of file",
            TokenKind::Error => "invalid token",
            TokenKind::IntLit => "int literal",
            TokenKind::FloatLit => "float literal",
            TokenKind::BoolLit => "bool literal",
            TokenKind::StringLit => "string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Comma => ",",
            TokenKind::At => "@",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Caret => "^",
            TokenKind::DotProduct => ".*",
            TokenKind::Hash => "#",
            TokenKind::XDimension => ".xDimension",
            TokenKind::YDimension => ".yDimension",
            TokenKind::Dimension => ".dimension",
            TokenKind::Function => "function",
            TokenKind::Record => "record",
            TokenKind::Val => "val",
            TokenKind::Var => "var",
            TokenKind::Return => "return",
            TokenKind::For => "for",
            TokenKind::Foreach => "foreach",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Bool => "bool",
            TokenKind::Void => "void",
            TokenKind::String => "string",
            TokenKind::Vector => "vector",
            TokenKind::Matrix => "matrix",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub spelling: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<8} {:?} `{}`",
            self.position.to_string(),
            self.kind,
            self.spelling
        )
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
