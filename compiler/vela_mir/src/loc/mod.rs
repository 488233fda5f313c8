//! MIR instruction locations.
//!
//! A [`Location`] ties a MIR instruction back to the source it was
//! lowered from: an AST node, an explicit file/line/column position for
//! generated code, or nothing at all. The kind tag refines how the
//! location resolves and reports (a `return`, an implicit return, a
//! cleanup, an inlined body).
//!
//! Three queries resolve a location to a [`SourcePoint`]:
//! [`canonical_point`](Location::canonical_point) is the single point a
//! diagnostic reports, [`start_point`](Location::start_point) and
//! [`end_point`](Location::end_point) are the raw range bounds. The
//! canonical point follows a per-kind policy; the range bounds never do.
//!
//! The refinement factories ([`into_inlined`](Location::into_inlined),
//! [`into_mandatory_inlined`](Location::into_mandatory_inlined),
//! [`into_cleanup`](Location::into_cleanup)) reclassify an existing
//! location under a wrapper kind. Wrappers never nest: re-wrapping a
//! wrapper collapses to the underlying node or position, so the result
//! is always one level deep.

mod flags;
mod kind;
mod node_ref;

pub use flags::LocFlags;
pub use kind::LocationKind;
pub use node_ref::{AstNode, NodeRef};

use kind::Anchor;
use std::ops::Deref;
use vela_ir::{Anchored, Decl, Expr, FileId, FilePos, Pattern, SourcePoint, Spanned, Stmt};
use vela_source::SourceManager;

/// What a location points at.
#[derive(Copy, Clone, Debug)]
enum Payload<'ast> {
    /// Nothing; the location is null.
    None,
    /// An AST node the instruction was lowered from.
    Node(NodeRef<'ast>),
    /// An explicit position for code with no backing node. Only carried
    /// by flat-backed kinds (`File` and collapsed wrappers).
    File(FilePos),
}

/// Source location of a MIR instruction.
///
/// An immutable `Copy` value: kind, payload, and refinement flags. The
/// payload borrows the AST; locations must not outlive the session that
/// built that AST.
#[derive(Copy, Clone, Debug)]
pub struct Location<'ast> {
    kind: LocationKind,
    payload: Payload<'ast>,
    flags: LocFlags,
}

impl<'ast> Location<'ast> {
    fn new(kind: LocationKind, payload: Payload<'ast>, flags: LocFlags) -> Self {
        Location {
            kind,
            payload,
            flags,
        }
    }

    /// Ordinary location over an AST node.
    pub fn regular(node: NodeRef<'ast>) -> Self {
        Self::new(LocationKind::Regular, Payload::Node(node), LocFlags::empty())
    }

    /// Location of an explicit `return` statement.
    pub fn return_stmt(file: FileId, stmt: &'ast Stmt) -> Self {
        debug_assert!(stmt.is_return(), "return location over {}", stmt.kind_name());
        Self::new(
            LocationKind::Return,
            Payload::Node(NodeRef::new(file, stmt)),
            LocFlags::empty(),
        )
    }

    /// Location of a return synthesized at the end of a body.
    pub fn implicit_return(node: NodeRef<'ast>) -> Self {
        Self::new(
            LocationKind::ImplicitReturn,
            Payload::Node(node),
            LocFlags::empty(),
        )
    }

    /// Location of an unreachable terminator synthesized after a
    /// diverging call.
    pub fn artificial_unreachable(node: NodeRef<'ast>) -> Self {
        Self::new(
            LocationKind::ArtificialUnreachable,
            Payload::Node(node),
            LocFlags::empty(),
        )
    }

    /// Location given directly as a file/line/column position.
    pub fn file(pos: FilePos) -> Self {
        Self::new(LocationKind::File, Payload::File(pos), LocFlags::empty())
    }

    /// Location carrying no source information.
    pub fn null() -> Self {
        Self::new(LocationKind::Regular, Payload::None, LocFlags::empty())
    }

    /// Module-level location used when mandatory inlining reaches
    /// top-level code.
    pub fn module(flags: LocFlags) -> Self {
        Self::new(LocationKind::MandatoryInlined, Payload::None, flags)
    }

    // --- Queries ---

    /// The location's kind.
    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// The refinement flags.
    pub fn flags(&self) -> LocFlags {
        self.flags
    }

    /// Replace the refinement flags.
    #[must_use]
    pub fn with_flags(self, flags: LocFlags) -> Self {
        Self::new(self.kind, self.payload, flags)
    }

    /// Add refinement flags to the existing set.
    #[must_use]
    pub fn mark(self, extra: LocFlags) -> Self {
        self.with_flags(self.flags | extra)
    }

    /// Whether this location points at nothing.
    pub fn is_null(&self) -> bool {
        matches!(self.payload, Payload::None)
    }

    /// Whether this location is backed by an AST node.
    pub fn is_ast_node(&self) -> bool {
        matches!(self.payload, Payload::Node(_))
    }

    /// Whether the located code was compiler-synthesized.
    pub fn is_auto_generated(&self) -> bool {
        self.flags.contains(LocFlags::AUTO_GENERATED)
    }

    /// Whether the located code is implied by the language rules.
    pub fn is_implicit(&self) -> bool {
        self.flags.contains(LocFlags::IMPLICIT)
    }

    /// Whether the location sits in the function prologue.
    pub fn is_in_prologue(&self) -> bool {
        self.flags.contains(LocFlags::IN_PROLOGUE)
    }

    /// Whether the location sits in top-level module code.
    pub fn is_in_top_level(&self) -> bool {
        self.flags.contains(LocFlags::IN_TOP_LEVEL)
    }

    /// The referenced AST node, if any.
    pub fn node(&self) -> Option<NodeRef<'ast>> {
        match self.payload {
            Payload::Node(node) => Some(node),
            _ => None,
        }
    }

    /// The referenced declaration, if that is what this points at.
    pub fn as_decl(&self) -> Option<&'ast Decl> {
        self.node().and_then(NodeRef::as_decl)
    }

    /// The referenced expression, if that is what this points at.
    pub fn as_expr(&self) -> Option<&'ast Expr> {
        self.node().and_then(NodeRef::as_expr)
    }

    /// The referenced statement, if that is what this points at.
    pub fn as_stmt(&self) -> Option<&'ast Stmt> {
        self.node().and_then(NodeRef::as_stmt)
    }

    /// The referenced pattern, if that is what this points at.
    pub fn as_pattern(&self) -> Option<&'ast Pattern> {
        self.node().and_then(NodeRef::as_pattern)
    }

    /// The flat position stored directly in this location, if any.
    ///
    /// Plain file locations always carry one; inlined wrappers carry one
    /// when they collapsed a flat-backed location. AST-backed and null
    /// locations return `None`.
    pub fn file_pos(&self) -> Option<FilePos> {
        match self.payload {
            Payload::File(pos) => Some(pos),
            _ => None,
        }
    }

    // --- Kind views ---

    /// View as a plain file location, if that is the kind.
    pub fn as_file(&self) -> Option<FileLocation<'ast>> {
        (self.kind == LocationKind::File).then_some(FileLocation(*self))
    }

    /// View as an inlined location, if that is the kind.
    pub fn as_inlined(&self) -> Option<InlinedLocation<'ast>> {
        (self.kind == LocationKind::Inlined).then_some(InlinedLocation(*self))
    }

    /// View as a mandatory-inlined location, if that is the kind.
    pub fn as_mandatory_inlined(&self) -> Option<MandatoryInlinedLocation<'ast>> {
        (self.kind == LocationKind::MandatoryInlined).then_some(MandatoryInlinedLocation(*self))
    }

    /// View as a cleanup location, if that is the kind.
    pub fn as_cleanup(&self) -> Option<CleanupLocation<'ast>> {
        (self.kind == LocationKind::Cleanup).then_some(CleanupLocation(*self))
    }

    // --- Resolution ---

    /// The single point reported for this location in diagnostics.
    ///
    /// Node-backed locations follow the kind policy (a `return` reports
    /// at its start, a cleanup or implicit return at its end, everything
    /// else at the node's own anchor). Flat-backed locations resolve to
    /// their stored position regardless of kind; null locations resolve
    /// to [`SourcePoint::Invalid`].
    pub fn canonical_point(&self) -> SourcePoint {
        let node = match self.payload {
            Payload::None => return SourcePoint::Invalid,
            Payload::File(pos) => return SourcePoint::Flat(pos),
            Payload::Node(node) => node,
        };
        match self.kind.canonical_anchor() {
            Anchor::Start => self.start_point(),
            Anchor::End => self.end_point(),
            Anchor::Node => SourcePoint::Offset {
                file: node.file(),
                offset: node.node().anchor(),
            },
        }
    }

    /// Start of the range this location covers. Ignores the kind policy.
    pub fn start_point(&self) -> SourcePoint {
        match self.payload {
            Payload::None => SourcePoint::Invalid,
            Payload::File(pos) => SourcePoint::Flat(pos),
            Payload::Node(node) => SourcePoint::Offset {
                file: node.file(),
                offset: node.node().span().start,
            },
        }
    }

    /// End of the range this location covers. Ignores the kind policy.
    pub fn end_point(&self) -> SourcePoint {
        match self.payload {
            Payload::None => SourcePoint::Invalid,
            Payload::File(pos) => SourcePoint::Flat(pos),
            Payload::Node(node) => SourcePoint::Offset {
                file: node.file(),
                offset: node.node().span().end,
            },
        }
    }

    // --- Refinement factories ---

    /// Payload a wrapper location may legally re-carry: the AST node if
    /// there is one, else the stored flat position. File payloads only
    /// occur on flat-backed kinds, so re-wrapping a wrapper recovers the
    /// position it collapsed to rather than nesting.
    fn wrapper_payload(&self) -> Option<Payload<'ast>> {
        match self.payload {
            Payload::Node(node) => Some(Payload::Node(node)),
            Payload::File(pos) => Some(Payload::File(pos)),
            Payload::None => None,
        }
    }

    /// Reclassify as an inlined location, preserving flags.
    ///
    /// # Panics
    /// Panics on a null location: there is nothing to attribute the
    /// inlined code to.
    pub fn into_inlined(self) -> InlinedLocation<'ast> {
        let payload = self
            .wrapper_payload()
            .unwrap_or_else(|| panic!("cannot form an inlined location from {:?}", self.kind));
        InlinedLocation(Self::new(LocationKind::Inlined, payload, self.flags))
    }

    /// Reclassify as a mandatory-inlined location, preserving flags.
    ///
    /// A null location flagged [`LocFlags::IN_TOP_LEVEL`] becomes the
    /// module-level location instead.
    ///
    /// # Panics
    /// Panics on a null location outside top-level code.
    pub fn into_mandatory_inlined(self) -> MandatoryInlinedLocation<'ast> {
        if let Some(payload) = self.wrapper_payload() {
            return MandatoryInlinedLocation(Self::new(
                LocationKind::MandatoryInlined,
                payload,
                self.flags,
            ));
        }
        if self.is_in_top_level() {
            return MandatoryInlinedLocation(Self::module(self.flags));
        }
        panic!(
            "cannot form a mandatory inlined location from {:?}",
            self.kind
        )
    }

    /// Reclassify as a cleanup location, preserving flags.
    ///
    /// Cleanup locations never retain bare file positions: a null or
    /// plain file location becomes an empty cleanup.
    ///
    /// # Panics
    /// Panics on a wrapper location that carries a bare position.
    pub fn into_cleanup(self) -> CleanupLocation<'ast> {
        let payload = match self.payload {
            Payload::Node(node) => Payload::Node(node),
            Payload::None => Payload::None,
            Payload::File(_) if self.kind == LocationKind::File => Payload::None,
            Payload::File(_) => {
                panic!("cannot form a cleanup location from {:?}", self.kind)
            }
        };
        CleanupLocation(Self::new(LocationKind::Cleanup, payload, self.flags))
    }

    // --- Rendering ---

    /// Render for diagnostics: the payload category and the canonical
    /// point, or the fixed `<no loc>` marker for a null location.
    pub fn render(&self, sm: &SourceManager) -> String {
        if self.is_null() {
            return "<no loc>".to_owned();
        }
        let point = sm.render_point(self.canonical_point());
        match self.payload {
            Payload::Node(node) => format!("{} @ {}", node.node().category(), point),
            _ => point,
        }
    }

    /// Render for debugging: like [`render`](Self::render), but prefixed
    /// with the node's specific kind name (`ReturnStmt @ ...`).
    pub fn dump(&self, sm: &SourceManager) -> String {
        if self.is_null() {
            return "<no loc>".to_owned();
        }
        let point = sm.render_point(self.canonical_point());
        match self.payload {
            Payload::Node(node) => format!("{} @ {}", node.node().kind_name(), point),
            _ => point,
        }
    }
}

/// [`Location`] known to be of kind [`LocationKind::File`].
#[derive(Copy, Clone, Debug)]
pub struct FileLocation<'ast>(Location<'ast>);

impl<'ast> FileLocation<'ast> {
    /// The stored position.
    pub fn position(&self) -> FilePos {
        match self.0.payload {
            Payload::File(pos) => pos,
            _ => unreachable!("file location without a stored position"),
        }
    }
}

/// [`Location`] known to be of kind [`LocationKind::Inlined`].
#[derive(Copy, Clone, Debug)]
pub struct InlinedLocation<'ast>(Location<'ast>);

/// [`Location`] known to be of kind [`LocationKind::MandatoryInlined`].
#[derive(Copy, Clone, Debug)]
pub struct MandatoryInlinedLocation<'ast>(Location<'ast>);

/// [`Location`] known to be of kind [`LocationKind::Cleanup`].
#[derive(Copy, Clone, Debug)]
pub struct CleanupLocation<'ast>(Location<'ast>);

macro_rules! kind_view {
    ($view:ident) => {
        impl<'ast> Deref for $view<'ast> {
            type Target = Location<'ast>;

            fn deref(&self) -> &Location<'ast> {
                &self.0
            }
        }

        impl<'ast> From<$view<'ast>> for Location<'ast> {
            fn from(view: $view<'ast>) -> Location<'ast> {
                view.0
            }
        }
    };
}

kind_view!(FileLocation);
kind_view!(InlinedLocation);
kind_view!(MandatoryInlinedLocation);
kind_view!(CleanupLocation);
