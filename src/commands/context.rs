//! Shared setup for commands: configuration, file discovery, and the
//! per-file check entry point.

use std::fs;

use anyhow::Result;
use rayon::prelude::*;

use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::file_scanner::scan_files;
use crate::core::parser::parse_ts_source;
use crate::issues::{Issue, ParseErrorIssue};
use crate::rules::engine::{RewriteOptions, check_source};

/// Configuration plus the scanned file set for one command invocation.
pub struct CheckContext {
    pub config: Config,
    pub files: Vec<String>,
    pub options: RewriteOptions,
}

impl CheckContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let mut config = load_config(&cwd)?.config;

        if let Some(source_root) = &args.source_root {
            config.source_root = source_root.display().to_string();
        }
        if let Some(constructor) = &args.constructor {
            config.constructor_name = constructor.clone();
        }
        // Overrides can invalidate a config that loaded fine.
        config.validate()?;

        let scan = scan_files(
            &config.source_root,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            args.verbose,
        );
        let options = RewriteOptions::new(&config.constructor_name, &config.expand_flag_symbol);

        Ok(Self {
            config,
            files: scan.files,
            options,
        })
    }

    /// Check one file. A file that cannot be read or parsed contributes a
    /// parse-error issue instead of aborting the run.
    pub fn check_file(&self, path: &str) -> Vec<Issue> {
        let code = match fs::read_to_string(path) {
            Ok(code) => code,
            Err(e) => {
                return vec![Issue::ParseError(ParseErrorIssue {
                    file_path: path.to_string(),
                    error: e.to_string(),
                })];
            }
        };
        match parse_ts_source(code, path) {
            Ok(parsed) => check_source(&parsed, path, &self.options)
                .into_iter()
                .map(Issue::Rewrite)
                .collect(),
            Err(e) => vec![Issue::ParseError(ParseErrorIssue {
                file_path: path.to_string(),
                error: e.to_string(),
            })],
        }
    }

    /// Check every scanned file in parallel. Files are independent, so the
    /// only ordering that matters is the final sort for stable output.
    pub fn check_all(&self) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self
            .files
            .par_iter()
            .flat_map(|path| self.check_file(path))
            .collect();
        issues.sort();
        issues
    }
}
