use std::fs;

use anyhow::{Context as _, Result};
use rayon::prelude::*;

use crate::cli::args::FixCommand;
use crate::commands::RunResult;
use crate::commands::context::CheckContext;
use crate::issues::{Issue, ParseErrorIssue};
use crate::reporter::print_fix_summary;
use crate::rules::engine::rewrite_to_fixpoint;

struct FileFix {
    issues: Vec<Issue>,
    rewrites: usize,
    changed: bool,
}

pub fn fix(cmd: FixCommand) -> Result<RunResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let results: Vec<FileFix> = ctx
        .files
        .par_iter()
        .map(|path| fix_file(&ctx, path, apply))
        .collect::<Result<Vec<_>>>()?;

    let rewrites: usize = results.iter().map(|r| r.rewrites).sum();
    let files_changed = results.iter().filter(|r| r.changed).count();

    let mut issues: Vec<Issue> = results.into_iter().flat_map(|r| r.issues).collect();
    issues.sort();
    let parse_error_count = issues
        .iter()
        .filter(|issue| matches!(issue, Issue::ParseError(_)))
        .count();

    print_fix_summary(rewrites, files_changed, apply);

    Ok(RunResult {
        parse_error_count,
        source_files_checked: ctx.files.len(),
        files_changed: if apply { files_changed } else { 0 },
        // Dry-run reports work to do; that is not a failure.
        exit_on_issues: false,
        issues,
    })
}

fn fix_file(ctx: &CheckContext, path: &str, apply: bool) -> Result<FileFix> {
    let code = match fs::read_to_string(path) {
        Ok(code) => code,
        Err(e) => {
            return Ok(FileFix {
                issues: vec![Issue::ParseError(ParseErrorIssue {
                    file_path: path.to_string(),
                    error: e.to_string(),
                })],
                rewrites: 0,
                changed: false,
            });
        }
    };

    let outcome = match rewrite_to_fixpoint(code, path, &ctx.options) {
        Ok(outcome) => outcome,
        Err(e) => {
            return Ok(FileFix {
                issues: vec![Issue::ParseError(ParseErrorIssue {
                    file_path: path.to_string(),
                    error: e.to_string(),
                })],
                rewrites: 0,
                changed: false,
            });
        }
    };

    if apply && outcome.changed() {
        fs::write(path, &outcome.source)
            .with_context(|| format!("Failed to write file: {}", path))?;
        return Ok(FileFix {
            issues: Vec::new(),
            rewrites: outcome.rewrites,
            changed: true,
        });
    }

    // Dry-run: report what a single observation pass sees, so the output
    // matches `check` and carries the would-be builder calls.
    let issues = if outcome.changed() {
        ctx.check_file(path)
    } else {
        Vec::new()
    };

    Ok(FileFix {
        issues,
        rewrites: outcome.rewrites,
        changed: outcome.changed(),
    })
}
