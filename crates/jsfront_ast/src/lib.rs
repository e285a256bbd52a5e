//! jsfront_ast: Token kinds and the abstract syntax tree.
//!
//! Defines the `SyntaxKind` tag set shared by scanner and parser, the
//! operator enums, and the arena-allocated expression and statement nodes.

pub mod node;
pub mod operator;
pub mod syntax_kind;

pub use node::*;
pub use operator::*;
pub use syntax_kind::SyntaxKind;
