//! Focused traits for interface segregation.
//!
//! Each trait provides one capability:
//! - [`Spanned`] - span access
//! - [`Anchored`] - provenance anchoring for downstream location queries

use crate::Span;

/// Trait for types that have a source location span.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}

/// Provenance capabilities consumed by the MIR location queries.
///
/// Every AST node category reports a span (via [`Spanned`]) plus an
/// *anchor*: the single byte offset diagnostics point at when they name
/// the node. The anchor need not be the span start - a declaration
/// anchors at its declared name, an expression at its primary token.
pub trait Anchored: Spanned {
    /// Byte offset of the point diagnostics report for this node.
    fn anchor(&self) -> u32;

    /// Human-readable kind name, e.g. `"ReturnStmt"` or `"CallExpr"`.
    fn kind_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Span);

    impl Spanned for Fixed {
        fn span(&self) -> Span {
            self.0
        }
    }

    impl Anchored for Fixed {
        fn anchor(&self) -> u32 {
            self.0.start
        }
        fn kind_name(&self) -> &'static str {
            "Fixed"
        }
    }

    #[test]
    fn anchored_via_dyn() {
        let node = Fixed(Span::new(10, 14));
        let anchored: &dyn Anchored = &node;
        assert_eq!(anchored.anchor(), 10);
        assert_eq!(anchored.span().end, 14);
        assert_eq!(anchored.kind_name(), "Fixed");
    }
}
