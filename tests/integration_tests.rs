//! Integration tests for the whole front end.
//!
//! These tests run complete MAVL programs through the public API, from
//! scanning through parsing, and inspect the resulting module.

use std::path::PathBuf;

use mavl::{
    ast::{
        ast::Module,
        expressions::ExprKind,
        statements::{Stmt, StmtKind},
        visitor::{NodeRef, Visitor},
    },
    errors::errors::Error,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::parse,
    render_error,
};

const MATRIX_PROGRAM: &str = r#"
// Matrix helpers.
record Shape {
    val int rows;
    var int cols;
}

function matrix<float>[3][3] scaled(matrix<float>[3][3] m, float factor) {
    var matrix<float>[3][3] result;
    for (i = 0; i < m.xDimension; i = i + 1) {
        for (j = 0; j < m.yDimension; j = j + 1) {
            result[i][j] = m[i][j] * factor;
        }
    }
    return result;
}

function float trace(matrix<float>[3][3] m) {
    var float sum;
    sum = 0.0;
    foreach (val vector<float>[3] row : m) {
        sum = sum + row[0];
    }
    return sum;
}

function void main() {
    val matrix<float>[3][3] id = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    val matrix<float>[3][3] twice = scaled(id, 2.0);
    val Shape shape = @Shape[3, 3];
    val vector<float>[2] part = twice{0:1:1}{0:0:0} .* [1.0, 2.0];
    printFloat(trace(twice # id) ^ 2.0);
    printInt(shape@rows);
}
"#;

const SWITCH_PROGRAM: &str = r#"
function string describe(int code) {
    var string text;
    switch (code) {
        case 0: text = "zero";
        case 1: {
            text = "one";
        }
        default: text = code > 1 ? "many" : "negative";
    }
    if (!code == 0 && code != 1) printString("odd"); else printString(text);
    return text;
}
"#;

fn parse_source(source: &str) -> Result<Module, Error> {
    parse(Lexer::new(source))
}

/// Counts every statement, descending into nested bodies.
struct StatementCounter;

impl StatementCounter {
    fn count_all(&mut self, statements: &[Stmt]) -> usize {
        statements
            .iter()
            .map(|statement| statement.accept(self, ()))
            .sum()
    }
}

impl Visitor<()> for StatementCounter {
    type Output = usize;

    fn visit_default(&mut self, node: NodeRef<'_>, _ctx: ()) -> usize {
        let NodeRef::Stmt(statement) = node else {
            return 0;
        };

        1 + match &statement.kind {
            StmtKind::ForLoop(for_loop) => for_loop.body.accept(self, ()),
            StmtKind::ForEachLoop(foreach) => foreach.body.accept(self, ()),
            StmtKind::If(if_stmt) => {
                if_stmt.then_body.accept(self, ())
                    + if_stmt
                        .else_body
                        .as_ref()
                        .map_or(0, |body| body.accept(self, ()))
            }
            StmtKind::Switch(switch) => {
                switch
                    .cases
                    .iter()
                    .map(|case| case.body.accept(self, ()))
                    .sum::<usize>()
                    + switch
                        .default
                        .as_ref()
                        .map_or(0, |default| default.body.accept(self, ()))
            }
            StmtKind::Compound(compound) => self.count_all(&compound.statements),
            _ => 0,
        }
    }
}

#[test]
fn test_parse_matrix_program() {
    let module = parse_source(MATRIX_PROGRAM).unwrap();

    assert_eq!(module.records.len(), 1);
    assert_eq!(module.functions.len(), 3);

    let names: Vec<_> = module
        .functions
        .iter()
        .map(|function| function.name.as_str())
        .collect();
    assert_eq!(names, vec!["scaled", "trace", "main"]);

    let scaled = module.function("scaled").unwrap();
    assert_eq!(scaled.parameters.len(), 2);
    assert_eq!(StatementCounter.count_all(&scaled.body), 7);

    let main = module.function("main").unwrap();
    let part = &main.body[3];
    match &part.kind {
        StmtKind::ValueDefinition(def) => {
            assert!(matches!(def.value.kind, ExprKind::DotProduct(_)));
            assert_eq!(
                def.value.dump(),
                "((twice{0:1:1}{0:0:0}) .* [1.0, 2.0])"
            );
        }
        other => panic!("expected a value definition, got {:?}", other),
    }
}

#[test]
fn test_parse_switch_program() {
    let module = parse_source(SWITCH_PROGRAM).unwrap();
    let describe = module.function("describe").unwrap();

    assert_eq!(describe.body.len(), 4);
    assert_eq!(StatementCounter.count_all(&describe.body), 10);

    match &describe.body[1].kind {
        StmtKind::Switch(switch) => {
            assert_eq!(switch.cases.len(), 2);
            let default = switch.default.as_ref().unwrap();
            assert_eq!(
                default.body.dump(),
                "text = ((code > 1) ? \"many\" : \"negative\");"
            );
        }
        other => panic!("expected a switch, got {:?}", other),
    }

    match &describe.body[2].kind {
        StmtKind::If(if_stmt) => {
            assert_eq!(if_stmt.condition.dump(), "((!(code == 0)) && (code != 1))");
        }
        other => panic!("expected an if statement, got {:?}", other),
    }
}

#[test]
fn test_dump_reparses() {
    let module = parse_source(MATRIX_PROGRAM).unwrap();
    let reparsed = parse_source(&module.dump()).unwrap();

    assert_eq!(module.dump(), reparsed.dump());
}

#[test]
fn test_parse_token_vector_matches_lazy_stream() {
    let from_vector = parse(tokenize(SWITCH_PROGRAM)).unwrap();
    let from_stream = parse_source(SWITCH_PROGRAM).unwrap();

    assert_eq!(from_vector, from_stream);
}

#[test]
fn test_error_is_rendered_against_source() {
    let source = "function void main() {\n    return 1 +;\n}\n";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 15);

    let rendered = render_error(&error, source, &PathBuf::from("broken.mavl"));
    assert!(rendered.contains("-> broken.mavl"));
    assert!(rendered.contains("2 | return 1 +;"));
    assert!(rendered.ends_with("-^"));
}

#[test]
fn test_scanner_error_fails_parse() {
    let source = "function void main() {\n    val string s = \"unterminated;\n}\n";
    let error = parse_source(source).unwrap_err();

    assert_eq!(error.get_error_name(), "LexicalError");
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 20);
}
