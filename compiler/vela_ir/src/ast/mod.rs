//! AST node types.
//!
//! The four node categories the rest of the compiler deals in:
//! declarations, expressions, statements, and patterns. Nodes are flat -
//! children are [`ExprId`](crate::ExprId)/[`PatternId`](crate::PatternId)
//! indices into per-module tables, never boxes.
//!
//! Each category implements [`Spanned`](crate::Spanned) and
//! [`Anchored`](crate::Anchored); the anchor rules differ per category
//! (declarations point at their name, expressions at their primary
//! token, statements and patterns at their start).

mod decl;
mod expr;
mod pattern;
mod stmt;

pub use decl::{Decl, DeclKind};
pub use expr::{BinaryOp, Expr, ExprKind, UnaryOp};
pub use pattern::{Pattern, PatternKind};
pub use stmt::{Stmt, StmtKind};
