//! Explain command implementation.

use nslint_core::{CATEGORY, CODE, MESSAGE, NAME};

/// Runs the explain command.
pub fn run() {
    println!("{CODE} {NAME} ({CATEGORY}, warning)\n");
    println!("{MESSAGE}.\n");
    println!("The directory of a source file, with path separators replaced by");
    println!("dots, must end with the fully-qualified name of every namespace");
    println!("the file declares. The comparison is case-insensitive and");
    println!("suffix-based, so ancestor directories above the namespace's own");
    println!("segments are ignored. On Rust sources, inline `mod` blocks are");
    println!("the namespace declarations; `mod name;` items are not checked");
    println!("since their content lives in another file.\n");
    println!("Examples:");
    println!("  src/acme/billing/invoice.rs   mod billing {{ .. }}    ok");
    println!("  src/acme/billing/invoice.rs   mod payments {{ .. }}   finding");
}
