//! syn-backed host adapter for Rust source files.
//!
//! On the Rust host, a "namespace declaration" is an inline `mod name { .. }`
//! item. An out-of-line `mod name;` forwards to another file and introduces
//! no scope in the declaring file, so it is not a candidate. The
//! fully-qualified name of a declaration is the dot-joined chain of inline
//! modules enclosing it, innermost last.

use crate::decl::{DeclId, NameResolver, NameSpan, NamespaceDecl, NamespaceSyntax};
use syn::visit::Visit;
use syn::ItemMod;

/// Inline module declarations extracted from one Rust source file.
///
/// Implements both [`NamespaceSyntax`] and [`NameResolver`], so a parsed
/// file is a complete host for [`NamespaceLocationCheck`].
///
/// [`NamespaceLocationCheck`]: crate::check::NamespaceLocationCheck
#[derive(Debug)]
pub struct SourceModules {
    decls: Vec<NamespaceDecl>,
    qualified: Vec<String>,
}

impl SourceModules {
    /// Parses Rust source text and collects its inline module declarations
    /// in document order.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the source is not valid Rust.
    pub fn parse(content: &str) -> Result<Self, syn::Error> {
        let ast = syn::parse_file(content)?;

        let mut collector = ModCollector {
            content,
            stack: Vec::new(),
            decls: Vec::new(),
            qualified: Vec::new(),
        };
        collector.visit_file(&ast);

        Ok(Self {
            decls: collector.decls,
            qualified: collector.qualified,
        })
    }

    /// Number of declarations found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// True when the file declares no inline modules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl NamespaceSyntax for SourceModules {
    fn namespace_declarations(&self) -> Box<dyn Iterator<Item = &NamespaceDecl> + '_> {
        Box::new(self.decls.iter())
    }
}

impl NameResolver for SourceModules {
    fn fully_qualified(&self, decl: &NamespaceDecl) -> Option<String> {
        // A declaration this file did not produce has no binding here.
        let known = self.decls.get(decl.id.0)?;
        if known != decl {
            return None;
        }
        self.qualified.get(decl.id.0).cloned()
    }
}

struct ModCollector<'a> {
    content: &'a str,
    stack: Vec<String>,
    decls: Vec<NamespaceDecl>,
    qualified: Vec<String>,
}

impl<'ast> Visit<'ast> for ModCollector<'_> {
    fn visit_item_mod(&mut self, node: &'ast ItemMod) {
        if node.content.is_none() {
            // `mod name;` — content lives in another file.
            return;
        }

        let name = node.ident.to_string();
        let start = node.ident.span().start();
        let line = start.line;
        let column = start.column + 1;

        let id = DeclId(self.decls.len());
        self.stack.push(name.clone());
        self.decls.push(NamespaceDecl::new(
            id,
            name.clone(),
            NameSpan {
                line,
                column,
                offset: offset_for(self.content, line, column),
                length: name.len(),
            },
        ));
        self.qualified.push(self.stack.join("."));

        syn::visit::visit_item_mod(self, node);
        self.stack.pop();
    }
}

/// Byte offset for a 1-indexed line/column pair.
fn offset_for(content: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }

    let mut offset = 0;
    for (i, line_content) in content.lines().enumerate() {
        if i + 1 == line {
            return offset + column.saturating_sub(1);
        }
        offset += line_content.len() + 1; // +1 for newline
    }

    offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_and_qualified(source: &str) -> Vec<(String, String)> {
        let modules = SourceModules::parse(source).expect("parse failed");
        modules
            .namespace_declarations()
            .map(|d| {
                let fqn = modules.fully_qualified(d).expect("unresolved");
                (d.written.clone(), fqn)
            })
            .collect()
    }

    #[test]
    fn collects_nested_modules_in_document_order() {
        let pairs = names_and_qualified(
            r"
mod acme {
    mod billing {
        mod invoice {}
    }
}
mod other {}
",
        );
        assert_eq!(
            pairs,
            vec![
                ("acme".to_string(), "acme".to_string()),
                ("billing".to_string(), "acme.billing".to_string()),
                ("invoice".to_string(), "acme.billing.invoice".to_string()),
                ("other".to_string(), "other".to_string()),
            ]
        );
    }

    #[test]
    fn out_of_line_module_is_not_a_candidate() {
        let pairs = names_and_qualified(
            r"
mod forwarded;
mod inline {}
",
        );
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "inline");
    }

    #[test]
    fn empty_file_has_no_declarations() {
        let modules = SourceModules::parse("fn main() {}\n").expect("parse failed");
        assert!(modules.is_empty());
        assert_eq!(modules.len(), 0);
    }

    #[test]
    fn name_span_points_at_identifier() {
        let modules = SourceModules::parse("mod alpha {}\n").expect("parse failed");
        let decl = modules
            .namespace_declarations()
            .next()
            .expect("no declaration");
        assert_eq!(decl.name_span.line, 1);
        assert_eq!(decl.name_span.column, 5);
        assert_eq!(decl.name_span.offset, 4);
        assert_eq!(decl.name_span.length, 5);
    }

    #[test]
    fn enumeration_is_restartable() {
        let modules = SourceModules::parse("mod a {}\nmod b {}\n").expect("parse failed");
        let first: Vec<_> = modules.namespace_declarations().collect();
        let second: Vec<_> = modules.namespace_declarations().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn foreign_declaration_does_not_resolve() {
        let modules = SourceModules::parse("mod a {}\n").expect("parse failed");
        let foreign = NamespaceDecl::new(
            DeclId(7),
            "elsewhere",
            NameSpan {
                line: 1,
                column: 1,
                offset: 0,
                length: 9,
            },
        );
        assert!(modules.fully_qualified(&foreign).is_none());
    }

    #[test]
    fn invalid_source_is_a_parse_error() {
        assert!(SourceModules::parse("mod {").is_err());
    }
}
