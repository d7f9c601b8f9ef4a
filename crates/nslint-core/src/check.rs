//! The namespace/location consistency check.
//!
//! A file's declared namespaces must agree with where the file lives: the
//! directory portion of the file path, with separators replaced by `.`, must
//! end with each declaration's fully-qualified name (case-insensitively).
//! The suffix test lets an arbitrary ancestor prefix (such as a source root)
//! sit above the matching segments.
//!
//! The comparison is a raw string-suffix test, not a path-segment-aware one.
//! A name that crosses a word boundary in the directory string can still
//! match (`ny.Product` against a directory ending `Company.Product`). This
//! looseness is intentional, pinned by tests below.

use crate::decl::{NameResolver, NamespaceSyntax};
use crate::types::{Finding, Location, Severity};
use std::path::Path;
use tracing::debug;

/// Rule code for namespace-location.
pub const CODE: &str = "NR0001";

/// Rule name for namespace-location.
pub const NAME: &str = "namespace-location";

/// Diagnostic category for namespace-location.
pub const CATEGORY: &str = "Naming";

/// Fixed message template for namespace-location findings.
pub const MESSAGE: &str = "Namespace must match file location";

/// Checks that declared namespaces match the containing directory path.
///
/// Stateless and re-entrant; one instance may check any number of files,
/// concurrently if the host wishes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamespaceLocationCheck;

impl NamespaceLocationCheck {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Checks one file and returns any findings.
    ///
    /// `file_path` is the absolute path backing the syntax structure, or
    /// `None` for trees with no file (generated or in-memory code), which
    /// are skipped entirely. Declarations the resolver cannot bind are
    /// skipped individually; the pass never fails.
    #[must_use]
    pub fn check(
        &self,
        file_path: Option<&Path>,
        syntax: &dyn NamespaceSyntax,
        resolver: &dyn NameResolver,
    ) -> Vec<Finding> {
        let Some(path) = file_path else {
            return Vec::new();
        };

        let expected = expected_namespace_path(path);
        let mut findings = Vec::new();

        for decl in syntax.namespace_declarations() {
            let Some(actual) = resolver.fully_qualified(decl) else {
                debug!(
                    "no symbol for namespace `{}` at line {}, skipping",
                    decl.written, decl.name_span.line
                );
                continue;
            };

            if !ends_with_ignore_case(&expected, &actual) {
                let location = Location::new(
                    path.to_path_buf(),
                    decl.name_span.line,
                    decl.name_span.column,
                )
                .with_span(decl.name_span.offset, decl.name_span.length);

                findings.push(
                    Finding::new(CODE, NAME, CATEGORY, Severity::Warning, location, MESSAGE)
                        .with_expected(expected.clone()),
                );
            }
        }

        findings
    }
}

/// Derives the expected namespace path for a file.
///
/// Takes the directory portion of the path (final segment removed) and
/// replaces every platform separator character with `.`. No normalization
/// of repeated or trailing separators is performed; a path without a
/// directory component yields the empty string.
#[must_use]
pub fn expected_namespace_path(path: &Path) -> String {
    let parent = path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();

    parent
        .chars()
        .map(|c| if std::path::is_separator(c) { '.' } else { c })
        .collect()
}

/// Case-insensitive suffix test over raw strings.
#[must_use]
pub fn ends_with_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().ends_with(&needle.to_lowercase())
}
