//! Error types and error handling for the parser.
//!
//! This module defines the failures a parse can end with. It includes:
//!
//! - Error structures with source position information
//! - The unexpected-token, lexical-error and number-parse variants
//! - Error formatting and display functionality
//! - Suggestions listing the acceptable alternatives

pub mod errors;

#[cfg(test)]
mod tests;
