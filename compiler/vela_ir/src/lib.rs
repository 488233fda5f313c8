//! Vela IR - syntax tree and source coordinate types
//!
//! This crate contains the data structures shared by every phase of the
//! Vela compiler:
//! - Spans and source points for locating code in files
//! - Interned names for identifiers and paths
//! - AST nodes (declarations, expressions, statements, patterns)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Flatten Everything**: No `Box<Expr>`, use `ExprId(u32)` indices
//! - **Interface Segregation**: Focused traits (`Spanned`, `Anchored`)
//!
//! All coordinate types are `Copy` and at most 16 bytes so they can be
//! stamped onto every instruction the compiler produces.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod ids;
mod interner;
mod name;
mod pos;
mod span;
mod traits;

pub use ast::{
    BinaryOp, Decl, DeclKind, Expr, ExprKind, Pattern, PatternKind, Stmt, StmtKind, UnaryOp,
};
pub use ids::{ExprId, ExprRange, PatternId, PatternRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use pos::{FilePos, SourcePoint};
pub use span::{FileId, Span};
pub use traits::{Anchored, Spanned};
