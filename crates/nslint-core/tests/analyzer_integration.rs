//! End-to-end analyzer tests over real directory trees.

use nslint_core::{Analyzer, AnalyzerError, Severity};
use std::fs;
use std::path::{Path, PathBuf};

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dirs");
    }
    fs::write(path, content).expect("write file");
}

#[test]
fn matching_layout_is_clean() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(
        dir.path(),
        "billing/invoice.rs",
        "mod billing {\n    pub fn total() {}\n}\n",
    );

    let analyzer = Analyzer::builder()
        .root(dir.path())
        .build()
        .expect("build analyzer");
    let result = analyzer.analyze().expect("analyze");

    assert!(!result.has_findings());
    assert_eq!(result.files_checked, 1);
}

#[test]
fn directory_match_is_case_insensitive() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "Billing/invoice.rs", "mod billing {}\n");

    let analyzer = Analyzer::builder()
        .root(dir.path())
        .build()
        .expect("build analyzer");
    let result = analyzer.analyze().expect("analyze");

    assert!(!result.has_findings());
}

#[test]
fn mismatched_module_is_reported_with_relative_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "payments/ledger.rs", "mod refunds {}\n");

    let analyzer = Analyzer::builder()
        .root(dir.path())
        .build()
        .expect("build analyzer");
    let result = analyzer.analyze().expect("analyze");

    assert_eq!(result.findings.len(), 1);
    let finding = &result.findings[0];
    assert_eq!(finding.code, "NR0001");
    assert_eq!(finding.severity, Severity::Warning);
    assert_eq!(finding.location.file, PathBuf::from("payments/ledger.rs"));
    assert_eq!(finding.location.line, 1);
    assert_eq!(finding.location.column, 5);

    let expected = finding.expected.as_deref().expect("expected path");
    assert!(expected.ends_with(".payments"));
}

#[test]
fn files_without_declarations_still_count_as_checked() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "plain.rs", "fn main() {}\n");
    write_file(dir.path(), "billing/invoice.rs", "mod billing {}\n");

    let analyzer = Analyzer::builder()
        .root(dir.path())
        .build()
        .expect("build analyzer");
    let result = analyzer.analyze().expect("analyze");

    assert_eq!(result.files_checked, 2);
    assert!(!result.has_findings());
}

#[test]
fn default_excludes_skip_target_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "target/generated.rs", "mod wrong {}\n");
    write_file(dir.path(), "billing/invoice.rs", "mod billing {}\n");

    let analyzer = Analyzer::builder()
        .root(dir.path())
        .build()
        .expect("build analyzer");
    let result = analyzer.analyze().expect("analyze");

    assert_eq!(result.files_checked, 1);
    assert!(!result.has_findings());
}

#[test]
fn custom_exclude_pattern_is_honored() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "generated/schema.rs", "mod wrong {}\n");
    write_file(dir.path(), "billing/invoice.rs", "mod billing {}\n");

    let analyzer = Analyzer::builder()
        .root(dir.path())
        .exclude("**/generated/**")
        .build()
        .expect("build analyzer");
    let result = analyzer.analyze().expect("analyze");

    assert_eq!(result.files_checked, 1);
    assert!(!result.has_findings());
}

#[test]
fn unparseable_file_is_skipped_by_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "broken.rs", "mod {\n");
    write_file(dir.path(), "billing/invoice.rs", "mod billing {}\n");

    let analyzer = Analyzer::builder()
        .root(dir.path())
        .build()
        .expect("build analyzer");
    let result = analyzer.analyze().expect("analyze");

    // The broken file is skipped with a warning and not counted.
    assert_eq!(result.files_checked, 1);
    assert!(!result.has_findings());
}

#[test]
fn unparseable_file_fails_when_requested() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "broken.rs", "mod {\n");

    let analyzer = Analyzer::builder()
        .root(dir.path())
        .fail_on_parse_error(true)
        .build()
        .expect("build analyzer");

    let result = analyzer.analyze();
    assert!(matches!(result, Err(AnalyzerError::Parse { .. })));
}

#[test]
fn findings_are_sorted_by_file_then_line() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "zeta/a.rs", "mod wrong {}\n");
    write_file(
        dir.path(),
        "alpha/b.rs",
        "mod first_wrong {}\nmod second_wrong {}\n",
    );

    let analyzer = Analyzer::builder()
        .root(dir.path())
        .build()
        .expect("build analyzer");
    let result = analyzer.analyze().expect("analyze");

    assert_eq!(result.findings.len(), 3);
    assert_eq!(result.findings[0].location.file, PathBuf::from("alpha/b.rs"));
    assert_eq!(result.findings[0].location.line, 1);
    assert_eq!(result.findings[1].location.file, PathBuf::from("alpha/b.rs"));
    assert_eq!(result.findings[1].location.line, 2);
    assert_eq!(result.findings[2].location.file, PathBuf::from("zeta/a.rs"));
}

#[test]
fn repeated_analysis_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "payments/ledger.rs", "mod refunds {}\n");

    let analyzer = Analyzer::builder()
        .root(dir.path())
        .build()
        .expect("build analyzer");

    let first = analyzer.analyze().expect("first pass");
    let second = analyzer.analyze().expect("second pass");

    assert_eq!(first.findings, second.findings);
    assert_eq!(first.files_checked, second.files_checked);
}
