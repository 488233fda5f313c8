//! Vela MIR - source provenance for mid-level IR instructions.
//!
//! Every MIR instruction carries a [`Location`]: where in the original
//! source it came from, or an explicit synthetic position for generated
//! code. Lowering stamps locations onto instructions as it emits them;
//! the inliner and the cleanup emitter reclassify them through the
//! refinement factories; diagnostics and debug-line emission resolve
//! them back to points via the queries here.
//!
//! Locations are plain `Copy` values borrowing into the AST - they hold
//! no resources and are safe to share across threads once built.

pub mod loc;

pub use loc::{
    AstNode, CleanupLocation, FileLocation, InlinedLocation, LocFlags, Location, LocationKind,
    MandatoryInlinedLocation, NodeRef,
};
