use crate::Position;

use super::{
    ast::IteratorDeclaration,
    expressions::{CallExpr, Expr},
    types::Type,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    ValueDefinition(ValueDefinition),
    VariableDeclaration(VariableDeclaration),
    Return(ReturnStmt),
    VariableAssignment(VariableAssignment),
    Call(CallStmt),
    ForLoop(ForLoop),
    ForEachLoop(ForEachLoop),
    If(IfStmt),
    Switch(SwitchStmt),
    Compound(CompoundStmt),
}

/// `val type name = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDefinition {
    pub ty: Type,
    pub name: String,
    pub value: Expr,
}

/// `var type name;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub ty: Type,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub target: LeftHandIdentifier,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallStmt {
    pub call: CallExpr,
}

/// `for (variable = init; condition; step_variable = step) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub variable: String,
    pub init: Expr,
    pub condition: Expr,
    pub step_variable: String,
    pub step: Expr,
    pub body: Box<Stmt>,
}

/// `foreach (iterator : source) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForEachLoop {
    pub iterator: IteratorDeclaration,
    pub source: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
}

/// A switch holds any number of cases and at most one default clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub test: Expr,
    pub cases: Vec<Case>,
    pub default: Option<DefaultCase>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompoundStmt {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultCase {
    pub body: Box<Stmt>,
    pub position: Position,
}

/// Target of an assignment statement.
#[derive(Debug, Clone, PartialEq)]
pub struct LeftHandIdentifier {
    pub name: String,
    pub kind: LeftHandIdentifierKind,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeftHandIdentifierKind {
    /// `name`
    Plain,
    /// `name[index]`
    VectorIndex { index: Expr },
    /// `name[row][col]`
    MatrixIndex { row: Expr, col: Expr },
    /// `name@field`
    RecordField { field: String },
}

impl LeftHandIdentifier {
    pub fn dump(&self) -> String {
        match &self.kind {
            LeftHandIdentifierKind::Plain => self.name.clone(),
            LeftHandIdentifierKind::VectorIndex { index } => {
                format!("{}[{}]", self.name, index.dump())
            }
            LeftHandIdentifierKind::MatrixIndex { row, col } => {
                format!("{}[{}][{}]", self.name, row.dump(), col.dump())
            }
            LeftHandIdentifierKind::RecordField { field } => format!("{}@{}", self.name, field),
        }
    }
}

pub(crate) fn indent(level: usize) -> String {
    "  ".repeat(level)
}

impl Stmt {
    pub fn new(kind: StmtKind, position: Position) -> Self {
        Stmt { kind, position }
    }

    pub fn dump(&self) -> String {
        self.dump_at(0)
    }

    /// Dumps the statement as if it started at nesting `level`. The first
    /// line carries no indentation; the caller has already placed it.
    pub fn dump_at(&self, level: usize) -> String {
        match &self.kind {
            StmtKind::ValueDefinition(def) => {
                format!("val {} {} = {};", def.ty.dump(), def.name, def.value.dump())
            }
            StmtKind::VariableDeclaration(decl) => format!("var {} {};", decl.ty.dump(), decl.name),
            StmtKind::Return(ret) => format!("return {};", ret.value.dump()),
            StmtKind::VariableAssignment(assignment) => format!(
                "{} = {};",
                assignment.target.dump(),
                assignment.value.dump()
            ),
            StmtKind::Call(call) => format!("{};", call.call.dump()),
            StmtKind::ForLoop(for_loop) => format!(
                "for ({} = {}; {}; {} = {}) {}",
                for_loop.variable,
                for_loop.init.dump(),
                for_loop.condition.dump(),
                for_loop.step_variable,
                for_loop.step.dump(),
                for_loop.body.dump_at(level)
            ),
            StmtKind::ForEachLoop(foreach) => format!(
                "foreach ({} : {}) {}",
                foreach.iterator.dump(),
                foreach.source.dump(),
                foreach.body.dump_at(level)
            ),
            StmtKind::If(if_stmt) => {
                let mut dumped = format!(
                    "if ({}) {}",
                    if_stmt.condition.dump(),
                    if_stmt.then_body.dump_at(level)
                );
                if let Some(else_body) = &if_stmt.else_body {
                    dumped.push_str(&format!(" else {}", else_body.dump_at(level)));
                }
                dumped
            }
            StmtKind::Switch(switch) => {
                let mut dumped = format!("switch ({}) {{\n", switch.test.dump());
                for case in &switch.cases {
                    dumped.push_str(&format!(
                        "{}case {}: {}\n",
                        indent(level + 1),
                        case.condition.dump(),
                        case.body.dump_at(level + 1)
                    ));
                }
                if let Some(default) = &switch.default {
                    dumped.push_str(&format!(
                        "{}default: {}\n",
                        indent(level + 1),
                        default.body.dump_at(level + 1)
                    ));
                }
                dumped.push_str(&format!("{}}}", indent(level)));
                dumped
            }
            StmtKind::Compound(compound) => dump_block(&compound.statements, level),
        }
    }
}

/// `{ ... }` with one statement per line, nested one level deeper than `level`.
pub(crate) fn dump_block(statements: &[Stmt], level: usize) -> String {
    let mut dumped = String::from("{\n");
    for statement in statements {
        dumped.push_str(&indent(level + 1));
        dumped.push_str(&statement.dump_at(level + 1));
        dumped.push('\n');
    }
    dumped.push_str(&indent(level));
    dumped.push('}');
    dumped
}
