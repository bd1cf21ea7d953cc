/// AST (Abstract Syntax Tree) module
/// Contains all node definitions produced by the parser
///
/// Submodules:
/// - ast: Module and declaration nodes
/// - expressions: Expression nodes and operator payloads
/// - statements: Statement nodes and assignment targets
/// - types: Type annotations as written in the source
/// - visitor: Per-variant dispatch for downstream passes
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
pub mod visitor;
