//! Per-file rewrite passes.
//!
//! `check_source` is one pure observation pass over a parsed file: it
//! discovers matches and emits issues carrying edit pairs, touching
//! nothing. `rewrite_to_fixpoint` is the host loop that actually applies
//! edits: it re-parses and re-checks until a pass finds no further matches,
//! so rewrites masked by an overlap in one pass are picked up in the next.
//!
//! Matches are discovered in argument-list order per call-site, with
//! catalog registration order breaking ties within a single argument. That
//! order is observable as the order of appended builder calls and is part
//! of the contract, not an iteration accident.

use anyhow::Result;

use crate::core::callsites::CallSiteFinder;
use crate::core::edits::{SourceEdit, apply_edit_groups};
use crate::core::parser::{ParsedSource, parse_ts_source};
use crate::core::source::line_context;
use crate::core::symbols::SymbolTable;
use crate::issues::{RewriteIssue, SourceContext};

use super::classify::classify;
use super::synthesize::synthesize;
use super::{RewriteRule, catalog};

/// Safety stop for the fixpoint loop. One pass normally suffices; a second
/// only runs when overlap handling deferred a group.
const MAX_REWRITE_PASSES: usize = 10;

/// What to look for and how to rewrite it.
pub struct RewriteOptions {
    pub constructor_name: String,
    pub rules: Vec<RewriteRule>,
}

impl RewriteOptions {
    pub fn new(constructor_name: &str, expand_flag_symbol: &str) -> Self {
        Self {
            constructor_name: constructor_name.to_string(),
            rules: catalog(expand_flag_symbol),
        }
    }
}

/// One observation pass over a parsed file.
pub fn check_source(
    parsed: &ParsedSource,
    file_path: &str,
    options: &RewriteOptions,
) -> Vec<RewriteIssue> {
    let symbols = SymbolTable::collect(&parsed.module);
    let sites = CallSiteFinder::new(&options.constructor_name, &symbols).find(&parsed.module);
    let text = parsed.text();

    let mut issues = Vec::new();
    for site in sites {
        let (call_start, call_end) = text.range(site.span);
        // Deletion spans on one call-site must be pairwise disjoint. A
        // trailing argument extends backward over its preceding separator;
        // when the preceding argument matched too, that separator is
        // already inside the previous deletion, so the new span is clipped
        // at the previous one's end.
        let mut floor = call_start;
        for arg in &site.args {
            let Some(rule) = classify(&options.rules, arg) else {
                continue;
            };
            let (mut pair, captured) =
                synthesize(rule, &parsed.source, call_end, text.range(arg.span));
            if pair.deletion.start < floor {
                pair.deletion.start = floor;
            }
            floor = pair.deletion.end;
            let (line, col, source_line) = line_context(&parsed.source_map, arg.span.lo);
            issues.push(RewriteIssue {
                context: SourceContext {
                    file_path: file_path.to_string(),
                    line,
                    col,
                    source_line,
                },
                kind: rule.kind,
                argument: captured,
                builder_call: pair.insertion.text.clone(),
                edits: pair,
            });
        }
    }
    issues
}

/// Result of rewriting one file to fixpoint.
#[derive(Debug)]
pub struct RewriteOutcome {
    pub source: String,
    /// Total argument rewrites applied across all passes.
    pub rewrites: usize,
    /// Number of passes that applied at least one rewrite.
    pub passes: usize,
}

impl RewriteOutcome {
    pub fn changed(&self) -> bool {
        self.rewrites > 0
    }
}

/// Apply rewrites until a pass finds no further matches.
pub fn rewrite_to_fixpoint(
    source: String,
    file_path: &str,
    options: &RewriteOptions,
) -> Result<RewriteOutcome> {
    let mut current = source;
    let mut rewrites = 0;
    let mut passes = 0;

    while passes < MAX_REWRITE_PASSES {
        let parsed = parse_ts_source(current.clone(), file_path)?;
        let issues = check_source(&parsed, file_path, options);
        if issues.is_empty() {
            break;
        }

        let groups: Vec<Vec<SourceEdit>> = issues
            .into_iter()
            .map(|issue| issue.edits.into_group())
            .collect();
        let outcome = apply_edit_groups(&current, &groups);
        if outcome.applied == 0 {
            // Every remaining group conflicts; a further pass would not
            // make progress.
            break;
        }
        current = outcome.source;
        rewrites += outcome.applied;
        passes += 1;
    }

    Ok(RewriteOutcome {
        source: current,
        rewrites,
        passes,
    })
}
