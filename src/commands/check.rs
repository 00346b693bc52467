use anyhow::Result;

use crate::cli::args::CheckCommand;
use crate::commands::RunResult;
use crate::commands::context::CheckContext;
use crate::issues::Issue;

pub fn check(cmd: CheckCommand) -> Result<RunResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;
    let issues = ctx.check_all();
    let parse_error_count = issues
        .iter()
        .filter(|issue| matches!(issue, Issue::ParseError(_)))
        .count();

    Ok(RunResult {
        parse_error_count,
        source_files_checked: ctx.files.len(),
        files_changed: 0,
        exit_on_issues: true,
        issues,
    })
}
