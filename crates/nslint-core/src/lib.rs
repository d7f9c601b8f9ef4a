//! # nslint-core
//!
//! Checks that declared namespaces match the location of the file that
//! declares them: the directory portion of the file path, with separators
//! replaced by `.`, must end (case-insensitively) with each declaration's
//! fully-qualified name.
//!
//! The crate provides:
//!
//! - [`NamespaceLocationCheck`] — the check itself, a pure function over
//!   `(file path, syntax, resolver)`
//! - [`NamespaceSyntax`] / [`NameResolver`] — the capability seams a host
//!   implements
//! - [`SourceModules`] — the syn-backed host for Rust source files
//! - [`Analyzer`] — directory-walking orchestration producing a
//!   [`LintResult`]
//!
//! ## Example
//!
//! ```ignore
//! use nslint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder().root("./src").build()?;
//! let result = analyzer.analyze()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod check;
mod config;
mod decl;
mod source;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use check::{
    ends_with_ignore_case, expected_namespace_path, NamespaceLocationCheck, CATEGORY, CODE,
    MESSAGE, NAME,
};
pub use config::{AnalyzerConfig, Config, ConfigError};
pub use decl::{DeclId, NameResolver, NameSpan, NamespaceDecl, NamespaceSyntax};
pub use source::SourceModules;
pub use types::{Finding, FindingDiagnostic, LintResult, Location, Severity};
