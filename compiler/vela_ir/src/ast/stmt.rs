//! Statement nodes.

use std::fmt;

use crate::{Anchored, ExprId, PatternId, Span, Spanned};

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    /// Whether this is a `return` statement.
    pub fn is_return(&self) -> bool {
        matches!(self.kind, StmtKind::Return(_))
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

impl Anchored for Stmt {
    fn anchor(&self) -> u32 {
        self.span.start
    }

    fn kind_name(&self) -> &'static str {
        match self.kind {
            StmtKind::Expr(_) => "ExprStmt",
            StmtKind::Let { .. } => "LetStmt",
            StmtKind::Return(_) => "ReturnStmt",
        }
    }
}

/// Statement variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Expression statement
    Expr(ExprId),

    /// Let binding: `let pattern = init`
    Let { pattern: PatternId, init: ExprId },

    /// Return statement: `return` or `return expr`
    Return(Option<ExprId>),
}
