use crate::Position;

/// Expression node: the variant plus the position of its first token.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // LITERALS
    IntValue(i32),
    FloatValue(f32),
    BoolValue(bool),
    StringValue(String),

    IdentifierReference(String),
    Call(CallExpr),

    // UNARY
    BoolNot(UnaryExpr),
    UnaryMinus(UnaryExpr),
    MatrixXDimension(UnaryExpr),
    MatrixYDimension(UnaryExpr),
    VectorDimension(UnaryExpr),

    // BINARY
    And(BinaryExpr),
    Or(BinaryExpr),
    Addition(BinaryExpr),
    Subtraction(BinaryExpr),
    Multiplication(BinaryExpr),
    Division(BinaryExpr),
    Exponentiation(BinaryExpr),
    DotProduct(BinaryExpr),
    MatrixMultiplication(BinaryExpr),
    Compare(CompareExpr),

    /// `condition ? true_case : false_case`
    Select(SelectExpr),

    // SELECTION
    ElementSelect(ElementSelectExpr),
    RecordElementSelect(RecordElementSelectExpr),
    SubVector(SubVectorExpr),
    SubMatrix(SubMatrixExpr),

    // AGGREGATES
    StructureInit(StructureInitExpr),
    RecordInit(RecordInitExpr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
}

impl Comparison {
    pub fn operator(&self) -> &'static str {
        match self {
            Comparison::Less => "<",
            Comparison::Greater => ">",
            Comparison::LessEqual => "<=",
            Comparison::GreaterEqual => ">=",
            Comparison::Equal => "==",
            Comparison::NotEqual => "!=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operand: Box<Expr>,
}

impl UnaryExpr {
    pub fn new(operand: Expr) -> Self {
        UnaryExpr {
            operand: Box::new(operand),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(left: Expr, right: Expr) -> Self {
        BinaryExpr {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub comparison: Comparison,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectExpr {
    pub condition: Box<Expr>,
    pub true_case: Box<Expr>,
    pub false_case: Box<Expr>,
}

/// Call of a function by name; also the payload of call statements.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementSelectExpr {
    pub base: Box<Expr>,
    pub index: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordElementSelectExpr {
    pub base: Box<Expr>,
    pub element_name: String,
}

/// `base{start:base_index:end}`
#[derive(Debug, Clone, PartialEq)]
pub struct SubVectorExpr {
    pub base: Box<Expr>,
    pub base_index: Box<Expr>,
    pub start: Box<Expr>,
    pub end: Box<Expr>,
}

/// `base{row_start:row_base:row_end}{col_start:col_base:col_end}`
#[derive(Debug, Clone, PartialEq)]
pub struct SubMatrixExpr {
    pub base: Box<Expr>,
    pub row_base: Box<Expr>,
    pub row_start: Box<Expr>,
    pub row_end: Box<Expr>,
    pub col_base: Box<Expr>,
    pub col_start: Box<Expr>,
    pub col_end: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructureInitExpr {
    pub elements: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordInitExpr {
    pub name: String,
    pub elements: Vec<Expr>,
}

impl Expr {
    pub fn new(kind: ExprKind, position: Position) -> Self {
        Expr { kind, position }
    }

    /// Source-like rendering. Every composite form is parenthesised, so the
    /// dump of an expression parses back into the same shape.
    pub fn dump(&self) -> String {
        match &self.kind {
            ExprKind::IntValue(value) => value.to_string(),
            ExprKind::FloatValue(value) => format!("{:?}", value),
            ExprKind::BoolValue(value) => value.to_string(),
            ExprKind::StringValue(value) => format!("\"{}\"", value),
            ExprKind::IdentifierReference(name) => name.clone(),
            ExprKind::Call(call) => call.dump(),

            ExprKind::BoolNot(unary) => format!("(!{})", unary.operand.dump()),
            ExprKind::UnaryMinus(unary) => format!("(-{})", unary.operand.dump()),
            ExprKind::MatrixXDimension(unary) => format!("({}.xDimension)", unary.operand.dump()),
            ExprKind::MatrixYDimension(unary) => format!("({}.yDimension)", unary.operand.dump()),
            ExprKind::VectorDimension(unary) => format!("({}.dimension)", unary.operand.dump()),

            ExprKind::And(binary) => binary.dump("&&"),
            ExprKind::Or(binary) => binary.dump("||"),
            ExprKind::Addition(binary) => binary.dump("+"),
            ExprKind::Subtraction(binary) => binary.dump("-"),
            ExprKind::Multiplication(binary) => binary.dump("*"),
            ExprKind::Division(binary) => binary.dump("/"),
            ExprKind::Exponentiation(binary) => binary.dump("^"),
            ExprKind::DotProduct(binary) => binary.dump(".*"),
            ExprKind::MatrixMultiplication(binary) => binary.dump("#"),
            ExprKind::Compare(compare) => format!(
                "({} {} {})",
                compare.left.dump(),
                compare.comparison.operator(),
                compare.right.dump()
            ),

            ExprKind::Select(select) => format!(
                "({} ? {} : {})",
                select.condition.dump(),
                select.true_case.dump(),
                select.false_case.dump()
            ),

            ExprKind::ElementSelect(select) => {
                format!("({}[{}])", select.base.dump(), select.index.dump())
            }
            ExprKind::RecordElementSelect(select) => {
                format!("({}@{})", select.base.dump(), select.element_name)
            }
            ExprKind::SubVector(sub) => format!(
                "({}{{{}:{}:{}}})",
                sub.base.dump(),
                sub.start.dump(),
                sub.base_index.dump(),
                sub.end.dump()
            ),
            ExprKind::SubMatrix(sub) => format!(
                "({}{{{}:{}:{}}}{{{}:{}:{}}})",
                sub.base.dump(),
                sub.row_start.dump(),
                sub.row_base.dump(),
                sub.row_end.dump(),
                sub.col_start.dump(),
                sub.col_base.dump(),
                sub.col_end.dump()
            ),

            ExprKind::StructureInit(init) => format!("[{}]", dump_list(&init.elements)),
            ExprKind::RecordInit(init) => {
                format!("@{}[{}]", init.name, dump_list(&init.elements))
            }
        }
    }
}

impl BinaryExpr {
    fn dump(&self, operator: &str) -> String {
        format!("({} {} {})", self.left.dump(), operator, self.right.dump())
    }
}

impl CallExpr {
    pub fn dump(&self) -> String {
        format!("{}({})", self.name, dump_list(&self.arguments))
    }
}

fn dump_list(expressions: &[Expr]) -> String {
    expressions
        .iter()
        .map(Expr::dump)
        .collect::<Vec<_>>()
        .join(", ")
}
