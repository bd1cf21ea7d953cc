//! Utility macros for the front end.
//!
//! This module defines helper macros used by the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-spelling tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$spelling` - The token's source text
/// * `$position` - The position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLit, "42".to_string(), Position::new(1, 5));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $spelling:expr, $position:expr) => {
        Token {
            kind: $kind,
            spelling: $spelling,
            position: $position,
        }
    };
}

/// Creates a default lexer handler for tokens with a fixed spelling.
///
/// Generates a handler function that creates a token with the given kind
/// and advances the lexer past the token's spelling.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$spelling` - The literal spelling (used for length calculation)
///
/// # Example
///
/// ```ignore
/// pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $spelling:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Option<Token> {
            let position = lexer.current_position();
            lexer.advance_n($spelling.len());
            Some(MK_TOKEN!($kind, String::from($spelling), position))
        }
    };
}
