//! Node indices for the flat AST.
//!
//! Child links are `u32` indices into per-module node tables instead of
//! boxes: 4 bytes per link, O(1) equality, contiguous storage.

use std::fmt;

/// Index of an expression in its module's expression table.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Sentinel for a missing expression.
    pub const INVALID: ExprId = ExprId(u32::MAX);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Index into the expression table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            write!(f, "ExprId::INVALID")
        } else {
            write!(f, "ExprId({})", self.0)
        }
    }
}

/// Index of a pattern in its module's pattern table.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct PatternId(u32);

impl PatternId {
    /// Create a new `PatternId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        PatternId(index)
    }

    /// Index into the pattern table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternId({})", self.0)
    }
}

/// Contiguous run of expressions in the module's expression list table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(C)]
pub struct ExprRange {
    pub start: u32,
    pub len: u16,
}

impl ExprRange {
    /// Empty range.
    pub const EMPTY: ExprRange = ExprRange { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        ExprRange { start, len }
    }

    /// Whether the range holds no expressions.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Contiguous run of patterns in the module's pattern list table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(C)]
pub struct PatternRange {
    pub start: u32,
    pub len: u16,
}

impl PatternRange {
    /// Empty range.
    pub const EMPTY: PatternRange = PatternRange { start: 0, len: 0 };

    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, len: u16) -> Self {
        PatternRange { start, len }
    }

    /// Whether the range holds no patterns.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expr_id_debug() {
        assert_eq!(format!("{:?}", ExprId::new(3)), "ExprId(3)");
        assert_eq!(format!("{:?}", ExprId::INVALID), "ExprId::INVALID");
    }

    #[test]
    fn ranges_report_emptiness() {
        assert!(ExprRange::EMPTY.is_empty());
        assert!(!ExprRange::new(4, 2).is_empty());
        assert!(PatternRange::EMPTY.is_empty());
        assert!(!PatternRange::new(0, 1).is_empty());
    }
}
