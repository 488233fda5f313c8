//! Expression nodes.

use std::fmt;

use crate::{Anchored, ExprId, ExprRange, Name, Span, Spanned};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Offset of the expression's primary token.
    ///
    /// For operator expressions this is the operator itself, which is
    /// what a diagnostic should underline; everything else reports its
    /// start.
    pub fn primary_token_offset(&self) -> u32 {
        match self.kind {
            ExprKind::Binary { op_span, .. } | ExprKind::Unary { op_span, .. } => op_span.start,
            _ => self.span.start,
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

impl Anchored for Expr {
    fn anchor(&self) -> u32 {
        self.primary_token_offset()
    }

    fn kind_name(&self) -> &'static str {
        match self.kind {
            ExprKind::Int(_) => "IntExpr",
            ExprKind::Bool(_) => "BoolExpr",
            ExprKind::Str(_) => "StrExpr",
            ExprKind::Var(_) => "VarExpr",
            ExprKind::Unary { .. } => "UnaryExpr",
            ExprKind::Binary { .. } => "BinaryExpr",
            ExprKind::Call { .. } => "CallExpr",
        }
    }
}

/// Expression variants.
///
/// All children are indices, not boxes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: `42`, `1_000`
    Int(i64),

    /// Boolean literal: `true`, `false`
    Bool(bool),

    /// String literal (interned contents)
    Str(Name),

    /// Variable reference: `x`
    Var(Name),

    /// Unary operation: `-x`, `!flag`
    Unary {
        op: UnaryOp,
        /// Span of the operator token.
        op_span: Span,
        operand: ExprId,
    },

    /// Binary operation: `a + b`
    Binary {
        op: BinaryOp,
        /// Span of the operator token.
        op_span: Span,
        lhs: ExprId,
        rhs: ExprId,
    },

    /// Function call: `f(a, b)`
    Call { callee: ExprId, args: ExprRange },
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Not,
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Lt,
}
