#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the line `position` points into, without its line break.
pub fn get_line_at_position(source: &str, position: Position) -> Option<&str> {
    source
        .split('\n')
        .nth(position.line.saturating_sub(1) as usize)
        .map(|line| line.trim_end_matches('\r'))
}

/// Renders a parse failure for the terminal.
pub fn render_error(error: &Error, source: &str, file: &Path) -> String {
    /*
        Error: UnexpectedToken (...)
        -> final.mavl
           |
        20 | val int a = ;
           | ------------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position).unwrap_or_default();

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    let mut rendered = String::new();
    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    rendered.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::{lexer::lexer::Lexer, parser::parser::parse, Position};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";

        assert_eq!(
            super::get_line_at_position(source, Position::new(1, 10)),
            Some("Hello, world!")
        );
        assert_eq!(
            super::get_line_at_position(source, Position::new(2, 1)),
            Some("second")
        );
        assert_eq!(
            super::get_line_at_position(source, Position::new(4, 8)),
            Some("Testing { }")
        );
        assert_eq!(super::get_line_at_position(source, Position::new(9, 1)), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "function void main() {\n  val int x = ;\n}\n";
        let error = parse(Lexer::new(source)).unwrap_err();
        let rendered = super::render_error(&error, source, &PathBuf::from("main.mavl"));

        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("Error: UnexpectedToken ("));
        assert_eq!(lines[1], "-> main.mavl");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | val int x = ;");
        // `;` sits in column 15, two of which are leading indentation.
        assert_eq!(lines[4], "  | ------------^");
    }

    #[test]
    fn test_render_lexical_error() {
        let source = "function void main() { $ }";
        let error = parse(Lexer::new(source)).unwrap_err();
        let rendered = super::render_error(&error, source, &PathBuf::from("main.mavl"));

        assert_eq!(rendered.lines().next(), Some("Error: LexicalError"));
        assert!(rendered.ends_with(&format!("{}^", "-".repeat(23))));
    }
}
