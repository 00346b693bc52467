/// Main entry point for the builderize CLI.
///
/// Dispatches to the appropriate command handler based on the parsed
/// arguments, prints the resulting report, and maps the outcome to an exit
/// status.
use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command};
use super::exit_status::ExitStatus;
use crate::commands::RunResult;
use crate::commands::{check::check, fix::fix};
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::reporter;

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };
    let verbose = args.verbose();

    let result = match args.command {
        Some(Command::Check(cmd)) => check(cmd)?,
        Some(Command::Fix(cmd)) => fix(cmd)?,
        Some(Command::Init) => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            return Ok(ExitStatus::Success);
        }
        None => unreachable!("with_command_or_help filters the no-command case"),
    };

    Ok(report(&result, verbose))
}

fn report(result: &RunResult, verbose: bool) -> ExitStatus {
    if !result.has_issues() {
        reporter::print_success(result.source_files_checked);
        return ExitStatus::Success;
    }

    reporter::print_report(&result.issues);
    reporter::print_parse_warning(result.parse_error_count, verbose);

    if result.exit_on_issues {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
