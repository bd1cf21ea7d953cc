//! Token cursor and module entry point.
//!
//! The parser pulls tokens lazily from any iterator and keeps exactly one
//! token of lookahead. There is no backtracking: every grammar procedure
//! decides what to do from `current_token_kind()` alone.

use tracing::{debug, trace};

use crate::{
    ast::ast::Module,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

use super::{
    decl::{parse_function, parse_record_type_declaration},
    lookups::DECLARATION_START,
};

/// Parsing state: the remaining token stream plus the lookahead token.
pub struct Parser<'src> {
    tokens: Box<dyn Iterator<Item = Token> + 'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `tokens` and loads the first lookahead token.
    ///
    /// Fails right away if that token is a scanner error.
    pub fn new<T>(tokens: T) -> Result<Self, Error>
    where
        T: IntoIterator<Item = Token>,
        T::IntoIter: 'src,
    {
        let mut tokens: Box<dyn Iterator<Item = Token> + 'src> = Box::new(tokens.into_iter());
        let current = tokens
            .next()
            .unwrap_or_else(|| MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Position::start()));

        if current.kind == TokenKind::Error {
            return Err(Error::lexical_error(current));
        }

        Ok(Parser { tokens, current })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Position of the current token.
    pub fn position(&self) -> Position {
        self.current.position
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// A stream that ends without `EOF` is padded with one at the last
    /// position seen.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = match self.tokens.next() {
            Some(token) => token,
            None => MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.current.position),
        };

        if next.kind == TokenKind::Error {
            return Err(Error::lexical_error(next));
        }

        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes a token of `expected_kind` and returns its spelling.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<String, Error> {
        if self.current.kind != expected_kind {
            return Err(self.unexpected(&[expected_kind]));
        }

        Ok(self.advance()?.spelling)
    }

    /// Error for a current token that is none of `expected`.
    pub fn unexpected(&self, expected: &[TokenKind]) -> Error {
        Error::unexpected_token(self.current.clone(), expected)
    }
}

/// Parses declarations until end of stream.
pub fn parse_module(parser: &mut Parser) -> Result<Module, Error> {
    let position = parser.position();
    let mut functions = Vec::new();
    let mut records = Vec::new();

    loop {
        match parser.current_token_kind() {
            TokenKind::Function => {
                let function = parse_function(parser)?;
                trace!(name = %function.name, position = %function.position, "parsed function");
                functions.push(function);
            }
            TokenKind::Record => {
                let record = parse_record_type_declaration(parser)?;
                trace!(name = %record.name, position = %record.position, "parsed record");
                records.push(record);
            }
            TokenKind::EOF => break,
            _ => return Err(parser.unexpected(DECLARATION_START)),
        }
    }

    debug!(
        functions = functions.len(),
        records = records.len(),
        "parsed module"
    );

    Ok(Module {
        functions,
        records,
        position,
    })
}

/// Parses a whole token stream into a module.
///
/// This is the main entry point of the crate. The stream is consumed lazily,
/// so a scanner error past the first failure point is never reached.
///
/// # Example
///
/// ```ignore
/// let module = parse(Lexer::new("function void main() { }"))?;
/// assert_eq!(module.functions[0].name, "main");
/// ```
pub fn parse<'src, T>(tokens: T) -> Result<Module, Error>
where
    T: IntoIterator<Item = Token>,
    T::IntoIter: 'src,
{
    let mut parser = Parser::new(tokens)?;
    parse_module(&mut parser)
}
