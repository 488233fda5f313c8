//! Source file management for the Vela compiler.
//!
//! Owns the registered source files and answers the one question every
//! diagnostic eventually asks: what human-readable position does this
//! point correspond to? Byte offsets are mapped to 1-based line/column
//! pairs through a pre-computed [`LineIndex`] per file.

mod line_index;
mod source_map;

pub use line_index::LineIndex;
pub use source_map::{SourceFile, SourceManager};
