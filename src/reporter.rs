//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic so builderize can be
//! used as a library without printing side effects.

use colored::Colorize;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘
use unicode_width::UnicodeWidthStr;

use crate::issues::{Issue, Report, Severity};

/// Print issues in a cargo-style format.
///
/// Issues are sorted and displayed with:
/// - Severity and message
/// - Clickable file location (path:line:col)
/// - Source code context with caret indicator
/// - Notes showing the builder call the argument becomes
/// - Summary of total errors/warnings
pub fn print_report(issues: &[Issue]) {
    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = sorted
        .iter()
        .filter_map(|i| i.line())
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in &sorted {
        let line = issue.line().unwrap_or(0);
        let col = issue.col().unwrap_or(0);

        let severity_str = match issue.report_severity() {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        println!(
            "{}: \"{}\"  {}",
            severity_str,
            issue.message(),
            issue.rule_name().dimmed().cyan()
        );

        // Print clickable location: --> path:line:col
        println!("  {} {}:{}:{}", "-->".blue(), issue.file_path(), line, col);

        // Print source context if available
        if let Some(source_line) = issue.source_line() {
            let caret_char = match issue.report_severity() {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };

            println!("{:>width$} {}", "", "|".blue(), width = max_line_width);
            println!(
                "{:>width$} {} {}",
                line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );
            // Caret pointing to the column (col is 1-based)
            // Use unicode display width for correct positioning with CJK chars and emoji
            let prefix = if col > 1 {
                source_line.chars().take(col - 1).collect::<String>()
            } else {
                String::new()
            };
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            println!(
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret_char,
                width = max_line_width,
                padding = caret_padding
            );
        }

        // Print details if present (cargo-style note)
        if let Some(details) = issue.details() {
            println!(
                "{:>width$} {} {} {}",
                "",
                "=".blue(),
                "note:".bold(),
                details,
                width = max_line_width
            );
        }

        println!(); // Empty line between issues
    }

    // Summary
    let total_errors = sorted
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = sorted
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        println!(
            "\n{} {} migratable argument(s) ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

/// Print a success message when no issues are found.
///
/// Displays the number of files checked to give the user confidence
/// that the check actually ran and covered the expected scope.
pub fn print_success(source_files: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - nothing left to migrate",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a summary of what `fix` did (or would do).
pub fn print_fix_summary(rewrites: usize, files_changed: usize, apply: bool) {
    if rewrites == 0 {
        return;
    }
    if apply {
        println!(
            "{} {} argument(s) in {} file(s)",
            "Rewrote".green().bold(),
            rewrites,
            files_changed
        );
    } else {
        println!(
            "{} {} argument(s) in {} file(s)",
            "Would rewrite".yellow().bold(),
            rewrites,
            files_changed
        );
        println!("Run with {} to write the changes.", "--apply".cyan());
    }
}

/// Print a warning about files that could not be parsed.
///
/// This is shown at the end of a run when files were skipped.
pub fn print_parse_warning(parse_error_count: usize, verbose: bool) {
    if parse_error_count > 0 && !verbose {
        eprintln!(
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            parse_error_count,
            "-v".cyan()
        );
    }
}
