use crate::Position;

use super::{
    statements::{dump_block, indent, Stmt},
    types::Type,
};

/// Root of the tree: every function and record declared in one source file,
/// each list in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub functions: Vec<Function>,
    pub records: Vec<RecordTypeDeclaration>,
    pub position: Position,
}

impl Module {
    pub fn dump(&self) -> String {
        self.records
            .iter()
            .map(RecordTypeDeclaration::dump)
            .chain(self.functions.iter().map(Function::dump))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|function| function.name == name)
    }

    pub fn record(&self, name: &str) -> Option<&RecordTypeDeclaration> {
        self.records.iter().find(|record| record.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub return_type: Type,
    pub parameters: Vec<FormalParameter>,
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl Function {
    pub fn dump(&self) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(FormalParameter::dump)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "function {} {}({}) {}",
            self.return_type.dump(),
            self.name,
            parameters,
            dump_block(&self.body, 0)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormalParameter {
    pub name: String,
    pub ty: Type,
    pub position: Position,
}

impl FormalParameter {
    pub fn dump(&self) -> String {
        format!("{} {}", self.ty.dump(), self.name)
    }
}

/// `record Name { ... }`. Always holds at least one element.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTypeDeclaration {
    pub name: String,
    pub elements: Vec<RecordElementDeclaration>,
    pub position: Position,
}

impl RecordTypeDeclaration {
    pub fn dump(&self) -> String {
        let mut dumped = format!("record {} {{\n", self.name);
        for element in &self.elements {
            dumped.push_str(&indent(1));
            dumped.push_str(&element.dump());
            dumped.push('\n');
        }
        dumped.push('}');
        dumped
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordElementDeclaration {
    pub is_mutable: bool,
    pub ty: Type,
    pub name: String,
    pub position: Position,
}

impl RecordElementDeclaration {
    pub fn dump(&self) -> String {
        format!("{} {} {};", mutability(self.is_mutable), self.ty.dump(), self.name)
    }
}

/// Loop variable of a `foreach`.
#[derive(Debug, Clone, PartialEq)]
pub struct IteratorDeclaration {
    pub name: String,
    pub ty: Type,
    pub is_mutable: bool,
    pub position: Position,
}

impl IteratorDeclaration {
    pub fn dump(&self) -> String {
        format!("{} {} {}", mutability(self.is_mutable), self.ty.dump(), self.name)
    }
}

fn mutability(is_mutable: bool) -> &'static str {
    if is_mutable {
        "var"
    } else {
        "val"
    }
}
