//! Borrowed references into the AST.

use vela_ir::{Anchored, Decl, Expr, FileId, Pattern, Span, Spanned, Stmt};

/// Reference to one of the four AST node categories.
///
/// MIR never owns the nodes it points at; the AST must outlive every
/// location referencing it, which the `'ast` lifetime enforces.
#[derive(Copy, Clone, Debug)]
pub enum AstNode<'ast> {
    Decl(&'ast Decl),
    Expr(&'ast Expr),
    Stmt(&'ast Stmt),
    Pattern(&'ast Pattern),
}

impl AstNode<'_> {
    /// Category tag used when rendering locations.
    pub fn category(self) -> &'static str {
        match self {
            AstNode::Decl(_) => "decl",
            AstNode::Expr(_) => "expr",
            AstNode::Stmt(_) => "stmt",
            AstNode::Pattern(_) => "pattern",
        }
    }
}

impl Spanned for AstNode<'_> {
    fn span(&self) -> Span {
        match self {
            AstNode::Decl(decl) => decl.span(),
            AstNode::Expr(expr) => expr.span(),
            AstNode::Stmt(stmt) => stmt.span(),
            AstNode::Pattern(pattern) => pattern.span(),
        }
    }
}

impl Anchored for AstNode<'_> {
    fn anchor(&self) -> u32 {
        match self {
            AstNode::Decl(decl) => decl.anchor(),
            AstNode::Expr(expr) => expr.anchor(),
            AstNode::Stmt(stmt) => stmt.anchor(),
            AstNode::Pattern(pattern) => pattern.anchor(),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            AstNode::Decl(decl) => decl.kind_name(),
            AstNode::Expr(expr) => expr.kind_name(),
            AstNode::Stmt(stmt) => stmt.kind_name(),
            AstNode::Pattern(pattern) => pattern.kind_name(),
        }
    }
}

impl<'ast> From<&'ast Decl> for AstNode<'ast> {
    fn from(decl: &'ast Decl) -> Self {
        AstNode::Decl(decl)
    }
}

impl<'ast> From<&'ast Expr> for AstNode<'ast> {
    fn from(expr: &'ast Expr) -> Self {
        AstNode::Expr(expr)
    }
}

impl<'ast> From<&'ast Stmt> for AstNode<'ast> {
    fn from(stmt: &'ast Stmt) -> Self {
        AstNode::Stmt(stmt)
    }
}

impl<'ast> From<&'ast Pattern> for AstNode<'ast> {
    fn from(pattern: &'ast Pattern) -> Self {
        AstNode::Pattern(pattern)
    }
}

/// An [`AstNode`] paired with the file its offsets are relative to.
#[derive(Copy, Clone, Debug)]
pub struct NodeRef<'ast> {
    file: FileId,
    node: AstNode<'ast>,
}

impl<'ast> NodeRef<'ast> {
    /// Reference `node` within `file`.
    pub fn new(file: FileId, node: impl Into<AstNode<'ast>>) -> Self {
        NodeRef {
            file,
            node: node.into(),
        }
    }

    /// File the node's offsets are relative to.
    pub fn file(self) -> FileId {
        self.file
    }

    /// The referenced node.
    pub fn node(self) -> AstNode<'ast> {
        self.node
    }

    /// The declaration, if that is what this references.
    pub fn as_decl(self) -> Option<&'ast Decl> {
        match self.node {
            AstNode::Decl(decl) => Some(decl),
            _ => None,
        }
    }

    /// The expression, if that is what this references.
    pub fn as_expr(self) -> Option<&'ast Expr> {
        match self.node {
            AstNode::Expr(expr) => Some(expr),
            _ => None,
        }
    }

    /// The statement, if that is what this references.
    pub fn as_stmt(self) -> Option<&'ast Stmt> {
        match self.node {
            AstNode::Stmt(stmt) => Some(stmt),
            _ => None,
        }
    }

    /// The pattern, if that is what this references.
    pub fn as_pattern(self) -> Option<&'ast Pattern> {
        match self.node {
            AstNode::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }
}
