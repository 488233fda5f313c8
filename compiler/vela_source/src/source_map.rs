//! Registered source files and point rendering.

use crate::LineIndex;
use vela_ir::{FileId, Name, SharedInterner, SourcePoint};

/// One registered source file.
#[derive(Debug)]
pub struct SourceFile {
    path: Name,
    text: String,
    lines: LineIndex,
}

impl SourceFile {
    /// Interned path this file was registered under.
    pub fn path(&self) -> Name {
        self.path
    }

    /// Full source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based (line, column) for a byte offset into this file.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        self.lines.line_col(&self.text, offset)
    }
}

/// Registry of source files, shared by parsing and diagnostics.
///
/// Single-writer/many-reader by pipeline discipline: files are added while
/// the driver loads the module graph, then only read.
pub struct SourceManager {
    interner: SharedInterner,
    files: Vec<SourceFile>,
}

impl SourceManager {
    /// Create an empty manager sharing `interner` with the rest of the
    /// session.
    pub fn new(interner: SharedInterner) -> Self {
        SourceManager {
            interner,
            files: Vec::new(),
        }
    }

    /// The session interner.
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Register a file and return its id.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "file count is bounded well below u32::MAX"
    )]
    pub fn add_file(&mut self, path: &str, text: String) -> FileId {
        let id = FileId::new(self.files.len() as u32);
        tracing::debug!(path, bytes = text.len(), "registered source file");
        let lines = LineIndex::build(&text);
        self.files.push(SourceFile {
            path: self.interner.intern(path),
            text,
            lines,
        });
        id
    }

    /// Look up a registered file.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this manager.
    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.index()]
    }

    /// 1-based (line, column) for a byte offset into a registered file.
    pub fn line_col(&self, file: FileId, offset: u32) -> (u32, u32) {
        self.file(file).line_col(offset)
    }

    /// Render a resolved point as `path:line:column`.
    ///
    /// [`SourcePoint::Invalid`] renders as the fixed `<invalid loc>`
    /// marker.
    pub fn render_point(&self, point: SourcePoint) -> String {
        match point {
            SourcePoint::Invalid => "<invalid loc>".to_owned(),
            SourcePoint::Offset { file, offset } => {
                let file = self.file(file);
                let (line, col) = file.line_col(offset);
                format!("{}:{line}:{col}", self.interner.lookup(file.path()))
            }
            SourcePoint::Flat(pos) => {
                format!(
                    "{}:{}:{}",
                    self.interner.lookup(pos.path),
                    pos.line,
                    pos.column
                )
            }
        }
    }
}
