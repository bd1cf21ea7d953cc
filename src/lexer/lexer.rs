use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Handles a pattern match at the lexer's current offset. Returns `None` for
/// input that produces no token (whitespace, comments).
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(source: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(&format!("^(?:{})", source)).expect("token patterns are valid regexes"),
        handler,
    }
}

lazy_static! {
    // Order matters: the first pattern matching at the current offset wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("[0-9]+\\.[0-9]+([eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+", float_handler),
        pattern("[0-9]+", int_handler),
        pattern("\\s+", skip_handler),
        pattern("\"[^\"\\n]*\"", string_handler),
        pattern("\"[^\"\\n]*", error_handler),
        pattern("//[^\\n]*", skip_handler),
        pattern("/\\*(?s:.*?)\\*/", skip_handler),
        pattern("/\\*(?s:.*)", error_handler),
        pattern("\\.xDimension", MK_DEFAULT_HANDLER!(TokenKind::XDimension, ".xDimension")),
        pattern("\\.yDimension", MK_DEFAULT_HANDLER!(TokenKind::YDimension, ".yDimension")),
        pattern("\\.dimension", MK_DEFAULT_HANDLER!(TokenKind::Dimension, ".dimension")),
        pattern("\\.\\*", MK_DEFAULT_HANDLER!(TokenKind::DotProduct, ".*")),
        pattern("\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        pattern("\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        pattern("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern("!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        pattern("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        pattern("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        pattern(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern("\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        pattern("&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        pattern(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern(":", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern("\\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
        pattern(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern("@", MK_DEFAULT_HANDLER!(TokenKind::At, "@")),
        pattern("#", MK_DEFAULT_HANDLER!(TokenKind::Hash, "#")),
        pattern("\\^", MK_DEFAULT_HANDLER!(TokenKind::Caret, "^")),
        pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
    ];
}

/// Lazy scanner over a MAVL source text.
///
/// Yields tokens on demand, ending with exactly one `EOF` token. Input it
/// cannot recognise becomes a `TokenKind::Error` token and scanning resumes
/// right after it, so the failure surfaces only when a parser consumes it.
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    finished: bool,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Advances past `n` bytes of source, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        for c in self.source[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Returns the text `regex` matches at the current offset.
    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn emit(&mut self, kind: TokenKind, spelling: String) -> Token {
        let position = self.current_position();
        self.advance_n(spelling.len());
        MK_TOKEN!(kind, spelling, position)
    }

    fn unrecognised(&mut self) -> Token {
        let spelling = self
            .remainder()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();
        tracing::debug!(
            position = %self.current_position(),
            spelling = %spelling,
            "unrecognised input"
        );
        self.emit(TokenKind::Error, spelling)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if self.finished {
                return None;
            }

            if self.at_eof() {
                self.finished = true;
                let position = self.current_position();
                return Some(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), position));
            }

            let pattern = PATTERNS
                .iter()
                .find(|pattern| pattern.regex.is_match(self.remainder()));

            match pattern {
                Some(pattern) => {
                    if let Some(token) = (pattern.handler)(self, &pattern.regex) {
                        return Some(token);
                    }
                }
                None => return Some(self.unrecognised()),
            }
        }
    }
}

fn int_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex);
    Some(lexer.emit(TokenKind::IntLit, matched))
}

fn float_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex);
    Some(lexer.emit(TokenKind::FloatLit, matched))
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    None
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex);
    let position = lexer.current_position();
    lexer.advance_n(matched.len());

    let string_literal = matched[1..matched.len() - 1].to_string();
    Some(MK_TOKEN!(TokenKind::StringLit, string_literal, position))
}

fn error_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = lexer.matched(regex);
    tracing::debug!(
        position = %lexer.current_position(),
        spelling = %matched,
        "unterminated input"
    );
    Some(lexer.emit(TokenKind::Error, matched))
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let value = lexer.matched(regex);

    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(lexer.emit(kind, value))
}

/// Scans the whole of `source`; the last token is always `EOF`.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    Lexer::new(source).collect()
}
