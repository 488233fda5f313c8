//! Location kinds and their canonical-point policy.

/// Classification of a MIR location.
///
/// The kind selects which point of the underlying range the location
/// reports as canonical (see [`canonical_anchor`](Self::canonical_anchor))
/// and how the refinement factories may reclassify it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LocationKind {
    /// Ordinary location lowered straight from an AST node.
    Regular,
    /// Explicit `return` statement.
    Return,
    /// Return synthesized at the end of a body with no written `return`.
    ImplicitReturn,
    /// Instruction produced by optimizer inlining.
    Inlined,
    /// Instruction produced by mandatory inlining of always-inline
    /// bodies.
    MandatoryInlined,
    /// Cleanup instruction synthesized at scope exit.
    Cleanup,
    /// Unreachable terminator synthesized after a diverging call.
    ArtificialUnreachable,
    /// Position given directly as file/line/column, with no AST node
    /// behind it.
    File,
}

/// Which point of the underlying range a kind reports as canonical.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Anchor {
    /// The range start.
    Start,
    /// The range end.
    End,
    /// The node's own anchor point.
    Node,
}

impl LocationKind {
    /// Canonical-point policy table.
    ///
    /// The canonical point is a reporting convention separate from the
    /// span: a cleanup or an implicit return reports at the end of the
    /// range it covers even though its start/end span is unchanged.
    /// Keeping the policy in one table keeps `canonical_point` and the
    /// raw span queries independent.
    pub(crate) const fn canonical_anchor(self) -> Anchor {
        match self {
            LocationKind::Return => Anchor::Start,
            LocationKind::ImplicitReturn
            | LocationKind::Cleanup
            | LocationKind::ArtificialUnreachable => Anchor::End,
            LocationKind::Regular
            | LocationKind::Inlined
            | LocationKind::MandatoryInlined
            | LocationKind::File => Anchor::Node,
        }
    }

    /// Kinds produced by the refinement factories.
    pub const fn is_wrapper(self) -> bool {
        matches!(
            self,
            LocationKind::Inlined | LocationKind::MandatoryInlined | LocationKind::Cleanup
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_policy() {
        assert_eq!(LocationKind::Return.canonical_anchor(), Anchor::Start);
        assert_eq!(LocationKind::Cleanup.canonical_anchor(), Anchor::End);
        assert_eq!(LocationKind::ImplicitReturn.canonical_anchor(), Anchor::End);
        assert_eq!(
            LocationKind::ArtificialUnreachable.canonical_anchor(),
            Anchor::End
        );
        assert_eq!(LocationKind::Regular.canonical_anchor(), Anchor::Node);
        assert_eq!(LocationKind::Inlined.canonical_anchor(), Anchor::Node);
    }

    #[test]
    fn wrapper_kinds() {
        assert!(LocationKind::Inlined.is_wrapper());
        assert!(LocationKind::MandatoryInlined.is_wrapper());
        assert!(LocationKind::Cleanup.is_wrapper());
        assert!(!LocationKind::Regular.is_wrapper());
        assert!(!LocationKind::File.is_wrapper());
    }
}
