//! Namespace declaration records and the capability seams around them.
//!
//! The checker never talks to a parser or a binder directly. It consumes two
//! narrow capabilities: [`NamespaceSyntax`] to enumerate the declarations a
//! file contains, and [`NameResolver`] to map each declaration to its
//! fully-qualified dotted name. Any host that can provide both can run the
//! check; tests use trivial in-memory implementations.

use serde::{Deserialize, Serialize};

/// Identifies one declaration within a single file's enumeration.
///
/// Assigned in document order by whichever host built the declaration
/// sequence. Ids are only meaningful to the host that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclId(pub usize);

/// Span of a declaration's name token within its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSpan {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length of the name token in bytes.
    pub length: usize,
}

/// One namespace-style declaration found in a source file.
///
/// `written` is the name as it appears syntactically, which may be partial
/// or relative; the authoritative name comes from [`NameResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDecl {
    /// Host-assigned document-order id.
    pub id: DeclId,
    /// Name as written in source.
    pub written: String,
    /// Span of the name token, for diagnostic anchoring.
    pub name_span: NameSpan,
}

impl NamespaceDecl {
    /// Creates a declaration record.
    #[must_use]
    pub fn new(id: DeclId, written: impl Into<String>, name_span: NameSpan) -> Self {
        Self {
            id,
            written: written.into(),
            name_span,
        }
    }
}

/// Capability to enumerate a file's namespace declarations.
pub trait NamespaceSyntax: Send + Sync {
    /// Returns every namespace declaration in the file, nested ones
    /// included, in document order.
    ///
    /// The sequence is lazy, finite and restartable: each call starts a
    /// fresh iteration over the same declarations.
    fn namespace_declarations(&self) -> Box<dyn Iterator<Item = &NamespaceDecl> + '_>;
}

/// Capability to resolve a declaration to its fully-qualified dotted name.
pub trait NameResolver: Send + Sync {
    /// Returns the fully-qualified name (e.g. `Company.Product.Feature`),
    /// or `None` when semantic binding failed for this declaration.
    fn fully_qualified(&self, decl: &NamespaceDecl) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decl_new_stores_fields() {
        let span = NameSpan {
            line: 3,
            column: 11,
            offset: 42,
            length: 7,
        };
        let decl = NamespaceDecl::new(DeclId(0), "billing", span);
        assert_eq!(decl.id, DeclId(0));
        assert_eq!(decl.written, "billing");
        assert_eq!(decl.name_span.line, 3);
        assert_eq!(decl.name_span.length, 7);
    }
}
