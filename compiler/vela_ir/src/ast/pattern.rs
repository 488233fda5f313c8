//! Pattern nodes.

use std::fmt;

use crate::{Anchored, Name, PatternRange, Span, Spanned};

/// Pattern node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

impl Pattern {
    pub fn new(kind: PatternKind, span: Span) -> Self {
        Pattern { kind, span }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Pattern {
    fn span(&self) -> Span {
        self.span
    }
}

impl Anchored for Pattern {
    fn anchor(&self) -> u32 {
        self.span.start
    }

    fn kind_name(&self) -> &'static str {
        match self.kind {
            PatternKind::Wildcard => "WildcardPattern",
            PatternKind::Binding { .. } => "BindingPattern",
            PatternKind::Tuple { .. } => "TuplePattern",
        }
    }
}

/// Pattern variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternKind {
    /// Discard pattern: `_`
    Wildcard,

    /// Name binding: `x`, `mut x`
    Binding { name: Name, mutable: bool },

    /// Tuple destructuring: `(a, b, _)`
    Tuple { elems: PatternRange },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_anchors_at_start() {
        let pattern = Pattern::new(
            PatternKind::Binding {
                name: Name::from_raw(3),
                mutable: false,
            },
            Span::new(8, 9),
        );
        assert_eq!(pattern.anchor(), 8);
        assert_eq!(pattern.kind_name(), "BindingPattern");
    }

    #[test]
    fn kind_names() {
        let wildcard = Pattern::new(PatternKind::Wildcard, Span::new(0, 1));
        let tuple = Pattern::new(
            PatternKind::Tuple {
                elems: PatternRange::new(0, 2),
            },
            Span::new(0, 6),
        );
        assert_eq!(wildcard.kind_name(), "WildcardPattern");
        assert_eq!(tuple.kind_name(), "TuplePattern");
    }
}
