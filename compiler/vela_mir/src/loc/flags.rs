//! Refinement flags attached to every location.

use bitflags::bitflags;

bitflags! {
    /// Markers refining how a location is interpreted, orthogonal to its
    /// kind and payload.
    ///
    /// Every refinement factory copies these bit-for-bit onto the
    /// location it derives.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct LocFlags: u8 {
        /// Compiler-synthesized; not present in the written source.
        const AUTO_GENERATED = 1 << 0;
        /// Implied by the language rules rather than written out.
        const IMPLICIT = 1 << 1;
        /// Sits in the function prologue, before user code runs.
        const IN_PROLOGUE = 1 << 2;
        /// Sits in top-level module code rather than a function body.
        const IN_TOP_LEVEL = 1 << 3;
    }
}

impl Default for LocFlags {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_size() {
        assert_eq!(std::mem::size_of::<LocFlags>(), 1);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(LocFlags::default(), LocFlags::empty());
    }

    #[test]
    fn union_keeps_both() {
        let flags = LocFlags::AUTO_GENERATED | LocFlags::IN_TOP_LEVEL;
        assert!(flags.contains(LocFlags::AUTO_GENERATED));
        assert!(flags.contains(LocFlags::IN_TOP_LEVEL));
        assert!(!flags.contains(LocFlags::IN_PROLOGUE));
    }
}
