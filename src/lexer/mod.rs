//! Reference scanner for MAVL source text.
//!
//! The parser only depends on the token stream contract (any iterator of
//! [`tokens::Token`]); this module provides one such stream. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column tracking for error reporting
//! - Comments and whitespace handling
//! - Lazy reporting of unrecognised input through `TokenKind::Error` tokens

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
