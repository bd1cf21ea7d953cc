//! Double-dispatch traversal contract for downstream passes.
//!
//! Every concrete node variant has one `visit_*` method. Each one defaults to
//! [`Visitor::visit_default`], so a pass only overrides the variants it cares
//! about. Nodes dispatch through their `accept` methods; recursion into
//! children is left to the visitor.
//!
//! # Example
//!
//! ```ignore
//! struct CallCounter;
//!
//! impl Visitor<()> for CallCounter {
//!     type Output = usize;
//!
//!     fn visit_default(&mut self, _node: NodeRef<'_>, _ctx: ()) -> usize {
//!         0
//!     }
//!
//!     fn visit_call(&mut self, _expr: &Expr, call: &CallExpr, ctx: ()) -> usize {
//!         1 + call.arguments.iter().map(|arg| arg.accept(self, ctx)).sum::<usize>()
//!     }
//! }
//! ```

use crate::Position;

use super::{
    ast::{
        FormalParameter, Function, IteratorDeclaration, Module, RecordElementDeclaration,
        RecordTypeDeclaration,
    },
    expressions::{
        BinaryExpr, CallExpr, CompareExpr, ElementSelectExpr, Expr, ExprKind,
        RecordElementSelectExpr, RecordInitExpr, SelectExpr, StructureInitExpr, SubMatrixExpr,
        SubVectorExpr, UnaryExpr,
    },
    statements::{
        CallStmt, Case, CompoundStmt, DefaultCase, ForEachLoop, ForLoop, IfStmt,
        LeftHandIdentifier, LeftHandIdentifierKind, ReturnStmt, Stmt, StmtKind, SwitchStmt,
        ValueDefinition, VariableAssignment, VariableDeclaration,
    },
    types::Type,
};

/// Borrowed view of any node, handed to [`Visitor::visit_default`].
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Module(&'a Module),
    Function(&'a Function),
    FormalParameter(&'a FormalParameter),
    RecordTypeDeclaration(&'a RecordTypeDeclaration),
    RecordElementDeclaration(&'a RecordElementDeclaration),
    IteratorDeclaration(&'a IteratorDeclaration),
    Stmt(&'a Stmt),
    Case(&'a Case),
    DefaultCase(&'a DefaultCase),
    LeftHandIdentifier(&'a LeftHandIdentifier),
    Expr(&'a Expr),
    Type(&'a Type),
}

impl NodeRef<'_> {
    /// Source position of the node. Types are values and carry none.
    pub fn position(&self) -> Option<Position> {
        match self {
            NodeRef::Module(node) => Some(node.position),
            NodeRef::Function(node) => Some(node.position),
            NodeRef::FormalParameter(node) => Some(node.position),
            NodeRef::RecordTypeDeclaration(node) => Some(node.position),
            NodeRef::RecordElementDeclaration(node) => Some(node.position),
            NodeRef::IteratorDeclaration(node) => Some(node.position),
            NodeRef::Stmt(node) => Some(node.position),
            NodeRef::Case(node) => Some(node.position),
            NodeRef::DefaultCase(node) => Some(node.position),
            NodeRef::LeftHandIdentifier(node) => Some(node.position),
            NodeRef::Expr(node) => Some(node.position),
            NodeRef::Type(_) => None,
        }
    }
}

pub trait Visitor<Ctx> {
    type Output;

    /// Fallback for every variant the visitor does not override.
    fn visit_default(&mut self, node: NodeRef<'_>, ctx: Ctx) -> Self::Output;

    // DECLARATIONS

    fn visit_module(&mut self, module: &Module, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Module(module), ctx)
    }
    fn visit_function(&mut self, function: &Function, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Function(function), ctx)
    }
    fn visit_formal_parameter(&mut self, parameter: &FormalParameter, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::FormalParameter(parameter), ctx)
    }
    fn visit_record_type_declaration(
        &mut self,
        record: &RecordTypeDeclaration,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::RecordTypeDeclaration(record), ctx)
    }
    fn visit_record_element_declaration(
        &mut self,
        element: &RecordElementDeclaration,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::RecordElementDeclaration(element), ctx)
    }
    fn visit_iterator_declaration(
        &mut self,
        iterator: &IteratorDeclaration,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::IteratorDeclaration(iterator), ctx)
    }
    fn visit_type(&mut self, ty: &Type, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Type(ty), ctx)
    }

    // STATEMENTS

    fn visit_value_definition(
        &mut self,
        stmt: &Stmt,
        _def: &ValueDefinition,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Stmt(stmt), ctx)
    }
    fn visit_variable_declaration(
        &mut self,
        stmt: &Stmt,
        _decl: &VariableDeclaration,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Stmt(stmt), ctx)
    }
    fn visit_return(&mut self, stmt: &Stmt, _ret: &ReturnStmt, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Stmt(stmt), ctx)
    }
    fn visit_variable_assignment(
        &mut self,
        stmt: &Stmt,
        _assignment: &VariableAssignment,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Stmt(stmt), ctx)
    }
    fn visit_call_statement(&mut self, stmt: &Stmt, _call: &CallStmt, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Stmt(stmt), ctx)
    }
    fn visit_for_loop(&mut self, stmt: &Stmt, _for_loop: &ForLoop, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Stmt(stmt), ctx)
    }
    fn visit_for_each_loop(
        &mut self,
        stmt: &Stmt,
        _foreach: &ForEachLoop,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Stmt(stmt), ctx)
    }
    fn visit_if(&mut self, stmt: &Stmt, _if_stmt: &IfStmt, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Stmt(stmt), ctx)
    }
    fn visit_switch(&mut self, stmt: &Stmt, _switch: &SwitchStmt, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Stmt(stmt), ctx)
    }
    fn visit_compound(&mut self, stmt: &Stmt, _compound: &CompoundStmt, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Stmt(stmt), ctx)
    }
    fn visit_case(&mut self, case: &Case, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Case(case), ctx)
    }
    fn visit_default_case(&mut self, default: &DefaultCase, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::DefaultCase(default), ctx)
    }

    // ASSIGNMENT TARGETS

    fn visit_plain_lhs(&mut self, lhs: &LeftHandIdentifier, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::LeftHandIdentifier(lhs), ctx)
    }
    fn visit_vector_lhs(
        &mut self,
        lhs: &LeftHandIdentifier,
        _index: &Expr,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::LeftHandIdentifier(lhs), ctx)
    }
    fn visit_matrix_lhs(
        &mut self,
        lhs: &LeftHandIdentifier,
        _row: &Expr,
        _col: &Expr,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::LeftHandIdentifier(lhs), ctx)
    }
    fn visit_record_lhs(
        &mut self,
        lhs: &LeftHandIdentifier,
        _field: &str,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::LeftHandIdentifier(lhs), ctx)
    }

    // EXPRESSIONS

    fn visit_int_value(&mut self, expr: &Expr, _value: i32, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_float_value(&mut self, expr: &Expr, _value: f32, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_bool_value(&mut self, expr: &Expr, _value: bool, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_string_value(&mut self, expr: &Expr, _value: &str, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_identifier_reference(&mut self, expr: &Expr, _name: &str, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_call(&mut self, expr: &Expr, _call: &CallExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_bool_not(&mut self, expr: &Expr, _unary: &UnaryExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_unary_minus(&mut self, expr: &Expr, _unary: &UnaryExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_matrix_x_dimension(
        &mut self,
        expr: &Expr,
        _unary: &UnaryExpr,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_matrix_y_dimension(
        &mut self,
        expr: &Expr,
        _unary: &UnaryExpr,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_vector_dimension(
        &mut self,
        expr: &Expr,
        _unary: &UnaryExpr,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_and(&mut self, expr: &Expr, _binary: &BinaryExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_or(&mut self, expr: &Expr, _binary: &BinaryExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_addition(&mut self, expr: &Expr, _binary: &BinaryExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_subtraction(&mut self, expr: &Expr, _binary: &BinaryExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_multiplication(
        &mut self,
        expr: &Expr,
        _binary: &BinaryExpr,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_division(&mut self, expr: &Expr, _binary: &BinaryExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_exponentiation(
        &mut self,
        expr: &Expr,
        _binary: &BinaryExpr,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_dot_product(&mut self, expr: &Expr, _binary: &BinaryExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_matrix_multiplication(
        &mut self,
        expr: &Expr,
        _binary: &BinaryExpr,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_compare(&mut self, expr: &Expr, _compare: &CompareExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_select(&mut self, expr: &Expr, _select: &SelectExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_element_select(
        &mut self,
        expr: &Expr,
        _select: &ElementSelectExpr,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_record_element_select(
        &mut self,
        expr: &Expr,
        _select: &RecordElementSelectExpr,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_sub_vector(&mut self, expr: &Expr, _sub: &SubVectorExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_sub_matrix(&mut self, expr: &Expr, _sub: &SubMatrixExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_structure_init(
        &mut self,
        expr: &Expr,
        _init: &StructureInitExpr,
        ctx: Ctx,
    ) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
    fn visit_record_init(&mut self, expr: &Expr, _init: &RecordInitExpr, ctx: Ctx) -> Self::Output {
        self.visit_default(NodeRef::Expr(expr), ctx)
    }
}

impl Module {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        visitor.visit_module(self, ctx)
    }
}

impl Function {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        visitor.visit_function(self, ctx)
    }
}

impl FormalParameter {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        visitor.visit_formal_parameter(self, ctx)
    }
}

impl RecordTypeDeclaration {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        visitor.visit_record_type_declaration(self, ctx)
    }
}

impl RecordElementDeclaration {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        visitor.visit_record_element_declaration(self, ctx)
    }
}

impl IteratorDeclaration {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        visitor.visit_iterator_declaration(self, ctx)
    }
}

impl Type {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        visitor.visit_type(self, ctx)
    }
}

impl Stmt {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        match &self.kind {
            StmtKind::ValueDefinition(def) => visitor.visit_value_definition(self, def, ctx),
            StmtKind::VariableDeclaration(decl) => {
                visitor.visit_variable_declaration(self, decl, ctx)
            }
            StmtKind::Return(ret) => visitor.visit_return(self, ret, ctx),
            StmtKind::VariableAssignment(assignment) => {
                visitor.visit_variable_assignment(self, assignment, ctx)
            }
            StmtKind::Call(call) => visitor.visit_call_statement(self, call, ctx),
            StmtKind::ForLoop(for_loop) => visitor.visit_for_loop(self, for_loop, ctx),
            StmtKind::ForEachLoop(foreach) => visitor.visit_for_each_loop(self, foreach, ctx),
            StmtKind::If(if_stmt) => visitor.visit_if(self, if_stmt, ctx),
            StmtKind::Switch(switch) => visitor.visit_switch(self, switch, ctx),
            StmtKind::Compound(compound) => visitor.visit_compound(self, compound, ctx),
        }
    }
}

impl Case {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        visitor.visit_case(self, ctx)
    }
}

impl DefaultCase {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        visitor.visit_default_case(self, ctx)
    }
}

impl LeftHandIdentifier {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        match &self.kind {
            LeftHandIdentifierKind::Plain => visitor.visit_plain_lhs(self, ctx),
            LeftHandIdentifierKind::VectorIndex { index } => {
                visitor.visit_vector_lhs(self, index, ctx)
            }
            LeftHandIdentifierKind::MatrixIndex { row, col } => {
                visitor.visit_matrix_lhs(self, row, col, ctx)
            }
            LeftHandIdentifierKind::RecordField { field } => {
                visitor.visit_record_lhs(self, field, ctx)
            }
        }
    }
}

impl Expr {
    pub fn accept<Ctx, V: Visitor<Ctx> + ?Sized>(&self, visitor: &mut V, ctx: Ctx) -> V::Output {
        match &self.kind {
            ExprKind::IntValue(value) => visitor.visit_int_value(self, *value, ctx),
            ExprKind::FloatValue(value) => visitor.visit_float_value(self, *value, ctx),
            ExprKind::BoolValue(value) => visitor.visit_bool_value(self, *value, ctx),
            ExprKind::StringValue(value) => visitor.visit_string_value(self, value, ctx),
            ExprKind::IdentifierReference(name) => {
                visitor.visit_identifier_reference(self, name, ctx)
            }
            ExprKind::Call(call) => visitor.visit_call(self, call, ctx),
            ExprKind::BoolNot(unary) => visitor.visit_bool_not(self, unary, ctx),
            ExprKind::UnaryMinus(unary) => visitor.visit_unary_minus(self, unary, ctx),
            ExprKind::MatrixXDimension(unary) => visitor.visit_matrix_x_dimension(self, unary, ctx),
            ExprKind::MatrixYDimension(unary) => visitor.visit_matrix_y_dimension(self, unary, ctx),
            ExprKind::VectorDimension(unary) => visitor.visit_vector_dimension(self, unary, ctx),
            ExprKind::And(binary) => visitor.visit_and(self, binary, ctx),
            ExprKind::Or(binary) => visitor.visit_or(self, binary, ctx),
            ExprKind::Addition(binary) => visitor.visit_addition(self, binary, ctx),
            ExprKind::Subtraction(binary) => visitor.visit_subtraction(self, binary, ctx),
            ExprKind::Multiplication(binary) => visitor.visit_multiplication(self, binary, ctx),
            ExprKind::Division(binary) => visitor.visit_division(self, binary, ctx),
            ExprKind::Exponentiation(binary) => visitor.visit_exponentiation(self, binary, ctx),
            ExprKind::DotProduct(binary) => visitor.visit_dot_product(self, binary, ctx),
            ExprKind::MatrixMultiplication(binary) => {
                visitor.visit_matrix_multiplication(self, binary, ctx)
            }
            ExprKind::Compare(compare) => visitor.visit_compare(self, compare, ctx),
            ExprKind::Select(select) => visitor.visit_select(self, select, ctx),
            ExprKind::ElementSelect(select) => visitor.visit_element_select(self, select, ctx),
            ExprKind::RecordElementSelect(select) => {
                visitor.visit_record_element_select(self, select, ctx)
            }
            ExprKind::SubVector(sub) => visitor.visit_sub_vector(self, sub, ctx),
            ExprKind::SubMatrix(sub) => visitor.visit_sub_matrix(self, sub, ctx),
            ExprKind::StructureInit(init) => visitor.visit_structure_init(self, init, ctx),
            ExprKind::RecordInit(init) => visitor.visit_record_init(self, init, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeRef, Visitor};
    use crate::{
        ast::{
            expressions::{BinaryExpr, CallExpr, Expr},
            statements::{Stmt, StmtKind},
        },
        lexer::lexer::Lexer,
        parser::parser::parse,
    };

    /// Counts calls, in expressions and in call statements alike.
    struct CallCounter;

    impl Visitor<()> for CallCounter {
        type Output = usize;

        fn visit_default(&mut self, node: NodeRef<'_>, _ctx: ()) -> usize {
            match node {
                NodeRef::Stmt(Stmt {
                    kind: StmtKind::Return(ret),
                    ..
                }) => ret.value.accept(self, ()),
                _ => 0,
            }
        }

        fn visit_call(&mut self, _expr: &Expr, call: &CallExpr, _ctx: ()) -> usize {
            1 + call
                .arguments
                .iter()
                .map(|argument| argument.accept(self, ()))
                .sum::<usize>()
        }

        fn visit_addition(&mut self, _expr: &Expr, binary: &BinaryExpr, _ctx: ()) -> usize {
            binary.left.accept(self, ()) + binary.right.accept(self, ())
        }
    }

    /// Threads a depth through the context argument.
    struct DepthTracker;

    impl Visitor<usize> for DepthTracker {
        type Output = usize;

        fn visit_default(&mut self, _node: NodeRef<'_>, depth: usize) -> usize {
            depth
        }

        fn visit_addition(&mut self, _expr: &Expr, binary: &BinaryExpr, depth: usize) -> usize {
            binary
                .left
                .accept(self, depth + 1)
                .max(binary.right.accept(self, depth + 1))
        }
    }

    #[test]
    fn test_visitor_dispatches_per_variant() {
        let module = parse(Lexer::new(
            "function int main() { return f(g(1), 2) + h(); }",
        ))
        .unwrap();
        let statement = &module.functions[0].body[0];

        assert_eq!(statement.accept(&mut CallCounter, ()), 3);
    }

    #[test]
    fn test_visitor_context_argument() {
        let module = parse(Lexer::new("function int main() { return 1 + 2 + 3; }")).unwrap();
        let crate::ast::statements::StmtKind::Return(ret) = &module.functions[0].body[0].kind
        else {
            panic!("expected a return statement");
        };

        assert_eq!(ret.value.accept(&mut DepthTracker, 0), 2);
    }

    #[test]
    fn test_default_receives_node_position() {
        struct PositionOf;

        impl Visitor<()> for PositionOf {
            type Output = Option<crate::Position>;

            fn visit_default(&mut self, node: NodeRef<'_>, _ctx: ()) -> Self::Output {
                node.position()
            }
        }

        let module = parse(Lexer::new("function void main() {\n  x = 1;\n}")).unwrap();
        let function = &module.functions[0];

        assert_eq!(
            function.accept(&mut PositionOf, ()),
            Some(crate::Position::new(1, 1))
        );
        assert_eq!(
            function.body[0].accept(&mut PositionOf, ()),
            Some(crate::Position::new(2, 3))
        );
        assert_eq!(function.return_type.accept(&mut PositionOf, ()), None);
    }
}
