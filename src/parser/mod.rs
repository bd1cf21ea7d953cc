//! Recursive-descent parser producing the MAVL AST.
//!
//! The parser consumes a lazy token stream with one token of lookahead and
//! fails fast: the first syntax or scanner error aborts the parse and no
//! partial tree is returned.
//!
//! - `parser`: token cursor and the module entry point
//! - `decl`: functions and record types
//! - `stmt`: statements, including assignment target disambiguation
//! - `expr`: the expression precedence levels and atoms
//! - `types`: type annotations
//! - `lookups`: statement and operator tables plus the expected-token sets

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
