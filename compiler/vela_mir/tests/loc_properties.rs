//! Property-based tests for location refinement.
//!
//! Generated flag sets and payload shapes verify the two factory
//! guarantees over the whole input space: flags survive every
//! refinement bit-for-bit, and re-wrapping collapses instead of
//! nesting (a second wrap resolves exactly like the first).

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use vela_ir::{Expr, ExprKind, FileId, FilePos, Name, Span, Stmt, StmtKind};
use vela_mir::{LocFlags, Location, NodeRef};

/// Any combination of the defined flag bits.
fn flags_strategy() -> impl Strategy<Value = LocFlags> {
    (0u8..16).prop_map(LocFlags::from_bits_truncate)
}

/// Payload shape of the base location.
#[derive(Clone, Copy, Debug)]
enum Shape {
    Stmt,
    Expr,
    Flat,
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![Just(Shape::Stmt), Just(Shape::Expr), Just(Shape::Flat)]
}

fn fixtures(line: u32, col: u32) -> (Stmt, Expr, FilePos) {
    let stmt = Stmt::new(StmtKind::Return(None), Span::new(3, 12));
    let expr = Expr::new(ExprKind::Int(7), Span::new(5, 6));
    let pos = FilePos::new(Name::from_raw(1), line, col);
    (stmt, expr, pos)
}

proptest! {
    #[test]
    fn factories_preserve_flags(
        flags in flags_strategy(),
        shape in shape_strategy(),
        line in 1u32..10_000,
        col in 1u32..500,
    ) {
        let (stmt, expr, pos) = fixtures(line, col);
        let base = match shape {
            Shape::Stmt => Location::regular(NodeRef::new(FileId::new(0), &stmt)),
            Shape::Expr => Location::regular(NodeRef::new(FileId::new(0), &expr)),
            Shape::Flat => Location::file(pos),
        }
        .with_flags(flags);

        prop_assert_eq!(base.into_inlined().flags(), flags);
        prop_assert_eq!(base.into_mandatory_inlined().flags(), flags);
        prop_assert_eq!(base.into_cleanup().flags(), flags);
    }

    #[test]
    fn rewrapping_is_idempotent(
        flags in flags_strategy(),
        shape in shape_strategy(),
        line in 1u32..10_000,
        col in 1u32..500,
    ) {
        let (stmt, expr, pos) = fixtures(line, col);
        let base = match shape {
            Shape::Stmt => Location::regular(NodeRef::new(FileId::new(0), &stmt)),
            Shape::Expr => Location::regular(NodeRef::new(FileId::new(0), &expr)),
            Shape::Flat => Location::file(pos),
        }
        .with_flags(flags);

        let once = Location::from(base.into_inlined());
        let twice = Location::from(once.into_inlined());

        prop_assert_eq!(once.kind(), twice.kind());
        prop_assert_eq!(once.canonical_point(), twice.canonical_point());
        prop_assert_eq!(once.start_point(), twice.start_point());
        prop_assert_eq!(once.end_point(), twice.end_point());
        prop_assert_eq!(once.is_ast_node(), twice.is_ast_node());
        prop_assert_eq!(once.flags(), twice.flags());

        // Mandatory inlining collapses an optimizer wrapper the same way.
        let mandatory = Location::from(once.into_mandatory_inlined());
        prop_assert_eq!(mandatory.canonical_point(), once.canonical_point());
    }
}
