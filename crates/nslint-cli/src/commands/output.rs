//! Shared output formatting for results.

use anyhow::Result;
use nslint_core::{LintResult, Severity};

use crate::OutputFormat;

/// Print results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for finding in &result.findings {
        let severity_indicator = match finding.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            finding.code,
            finding.rule,
            finding.location.file.display(),
            finding.location.line,
            finding.location.column,
        );
        println!("  {}: {}", severity_indicator, finding.message);
        if let Some(expected) = &finding.expected {
            println!("  = expected: {expected}");
        }
        println!();
    }

    let summary_color = if result.has_findings() {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} finding(s) in {} file(s)\x1b[0m",
        summary_color,
        result.findings.len(),
        result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for finding in &result.findings {
        println!(
            "{}:{}:{}: {} [{}] {}",
            finding.location.file.display(),
            finding.location.line,
            finding.location.column,
            finding.severity,
            finding.code,
            finding.message,
        );
    }
}
