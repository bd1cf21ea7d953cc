use std::fmt::Display;

use super::expressions::Expr;

/// Element type of vectors and matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    Float,
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarType::Int => write!(f, "int"),
            ScalarType::Float => write!(f, "float"),
        }
    }
}

/// A type as written in the source.
///
/// Types compare structurally. Vector and matrix dimensions are kept as the
/// unevaluated expressions the programmer wrote.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Int,
    Float,
    Bool,
    Void,
    String,
    Vector {
        element: ScalarType,
        size: Box<Expr>,
    },
    Matrix {
        element: ScalarType,
        rows: Box<Expr>,
        cols: Box<Expr>,
    },
    Record(String),
}

impl Type {
    pub fn dump(&self) -> String {
        match self {
            Type::Int => String::from("int"),
            Type::Float => String::from("float"),
            Type::Bool => String::from("bool"),
            Type::Void => String::from("void"),
            Type::String => String::from("string"),
            Type::Vector { element, size } => format!("vector<{}>[{}]", element, size.dump()),
            Type::Matrix {
                element,
                rows,
                cols,
            } => format!("matrix<{}>[{}][{}]", element, rows.dump(), cols.dump()),
            Type::Record(name) => name.clone(),
        }
    }
}
