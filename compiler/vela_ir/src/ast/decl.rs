//! Declaration nodes.

use std::fmt;

use crate::{Anchored, ExprId, Name, Span, Spanned};

/// Declaration node.
///
/// `span` covers the whole declaration including its body; `name_span`
/// covers just the declared name, which is where diagnostics about the
/// declaration point.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Decl {
    pub kind: DeclKind,
    pub name: Name,
    pub name_span: Span,
    pub span: Span,
}

impl Decl {
    pub fn new(kind: DeclKind, name: Name, name_span: Span, span: Span) -> Self {
        Decl {
            kind,
            name,
            name_span,
            span,
        }
    }
}

impl fmt::Debug for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {:?}", self.kind, self.name, self.span)
    }
}

impl Spanned for Decl {
    fn span(&self) -> Span {
        self.span
    }
}

impl Anchored for Decl {
    fn anchor(&self) -> u32 {
        self.name_span.start
    }

    fn kind_name(&self) -> &'static str {
        match self.kind {
            DeclKind::Function { .. } => "FuncDecl",
            DeclKind::Const { .. } => "ConstDecl",
            DeclKind::TypeAlias => "TypeAliasDecl",
        }
    }
}

/// Declaration variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    /// Function definition: `fn name(...) = body`
    Function { body: ExprId },

    /// Constant definition: `const name = value`
    Const { value: ExprId },

    /// Type alias: `type Name = ...`
    TypeAlias,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decl_anchors_at_name() {
        // `fn main() = ...` at 0..40, name `main` at 3..7
        let decl = Decl::new(
            DeclKind::Function {
                body: ExprId::new(0),
            },
            Name::from_raw(1),
            Span::new(3, 7),
            Span::new(0, 40),
        );
        assert_eq!(decl.anchor(), 3);
        assert_eq!(decl.span().start, 0);
        assert_eq!(decl.span().end, 40);
        assert_eq!(decl.kind_name(), "FuncDecl");
    }

    #[test]
    fn kind_names() {
        let alias = Decl::new(
            DeclKind::TypeAlias,
            Name::from_raw(2),
            Span::new(5, 10),
            Span::new(0, 20),
        );
        assert_eq!(alias.kind_name(), "TypeAliasDecl");
    }
}
