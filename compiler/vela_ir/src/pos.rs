//! Resolved source positions.
//!
//! Spans locate AST nodes as byte ranges inside a registered file. MIR
//! instructions need something more general: generated code has no node
//! to point at, and synthetic positions arrive as explicit
//! file/line/column triples. [`SourcePoint`] is the common currency the
//! provenance queries resolve to; [`FilePos`] is the explicit triple.

use crate::{FileId, Name};

/// Explicit file/line/column triple.
///
/// Used for code that has no backing AST node (synthesized thunks,
/// REPL-generated stubs). The path is interned so the value stays `Copy`;
/// line and column are 1-based.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FilePos {
    pub path: Name,
    pub line: u32,
    pub column: u32,
}

impl FilePos {
    /// Create a new flat position.
    #[inline]
    pub const fn new(path: Name, line: u32, column: u32) -> Self {
        FilePos { path, line, column }
    }
}

/// A resolved point in source, as reported by the provenance queries.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum SourcePoint {
    /// No source attached.
    Invalid,
    /// Byte offset into a registered source file.
    Offset { file: FileId, offset: u32 },
    /// Synthetic flat position, not tied to a registered file.
    Flat(FilePos),
}

impl SourcePoint {
    /// Whether this point carries no source information.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, SourcePoint::Invalid)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::SourcePoint;
    crate::static_assert_size!(SourcePoint, 16);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_is_invalid() {
        assert!(SourcePoint::Invalid.is_invalid());
        let point = SourcePoint::Offset {
            file: FileId::new(0),
            offset: 10,
        };
        assert!(!point.is_invalid());
    }

    #[test]
    fn flat_points_compare_by_fields() {
        let a = SourcePoint::Flat(FilePos::new(Name::from_raw(1), 10, 3));
        let b = SourcePoint::Flat(FilePos::new(Name::from_raw(1), 10, 3));
        let c = SourcePoint::Flat(FilePos::new(Name::from_raw(1), 10, 4));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
