/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: `Program`, and the `Stmt` / `Expr` sum types
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for the statement node types
///
/// Every node prints its canonical, fully parenthesized form through `Display`.
pub mod ast;
pub mod expressions;
pub mod statements;
