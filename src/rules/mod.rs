//! The rewrite rule catalog.
//!
//! Each rule pairs an argument kind with the predicate that recognizes it
//! and the builder method that replaces it. Rules are independent: any
//! number of them may fire on one call-site, one per qualifying argument.
//! The catalog order is a documented property: it is the tie-breaker when
//! more than one rule could claim the same argument, so new rules must be
//! appended deliberately, not inserted.
//!
//! ## Module Structure
//!
//! - `classify`: maps one argument to at most one catalog rule
//! - `span`: computes the exact deletable range for a matched argument
//! - `synthesize`: builds the deletion/insertion edit pair for a match
//! - `engine`: per-file check pass and the fixpoint rewrite loop

pub mod classify;
pub mod engine;
pub mod span;
pub mod synthesize;

use std::fmt;

use regex::Regex;

use crate::core::types::TypePattern;

/// The cataloged argument kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArgKind {
    ExpandFlag,
    Decoration,
    ErrorCode,
    TimePoint,
    Device,
    Connection,
    DeviceList,
    ConnectionList,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgKind::ExpandFlag => write!(f, "expand-flag"),
            ArgKind::Decoration => write!(f, "decoration"),
            ArgKind::ErrorCode => write!(f, "error-code"),
            ArgKind::TimePoint => write!(f, "time-point"),
            ArgKind::Device => write!(f, "device"),
            ArgKind::Connection => write!(f, "connection"),
            ArgKind::DeviceList => write!(f, "device-list"),
            ArgKind::ConnectionList => write!(f, "connection-list"),
        }
    }
}

/// How a rule recognizes its argument.
#[derive(Debug, Clone)]
pub enum ArgMatcher {
    /// The argument is an identifier naming this declared symbol.
    Symbol(String),
    /// The argument's declared type satisfies this pattern.
    Type(TypePattern),
}

/// One catalog entry.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub kind: ArgKind,
    pub matcher: ArgMatcher,
    /// Builder method appended after the construction expression.
    pub method: &'static str,
    /// Whether the captured argument text is carried into the builder
    /// call. The expand flag is a sentinel whose presence alone matters,
    /// so its text is discarded.
    pub carries_argument: bool,
}

fn name_pattern(pattern: &str) -> Regex {
    // Catalog patterns are fixed literals; a failure here is a programming
    // error, not an input condition.
    Regex::new(pattern).expect("catalog name pattern is valid")
}

/// Build the rule catalog, in registration order.
///
/// The same builder method is deliberately reused for the single and
/// collection forms of device and connection arguments; the builder side
/// accepts either.
pub fn catalog(expand_flag_symbol: &str) -> Vec<RewriteRule> {
    let device = || TypePattern::RefTo(name_pattern("Device"));
    let connection = || TypePattern::RefTo(name_pattern("Connection"));

    vec![
        RewriteRule {
            kind: ArgKind::ExpandFlag,
            matcher: ArgMatcher::Symbol(expand_flag_symbol.to_string()),
            method: "set_default_expanded",
            carries_argument: false,
        },
        RewriteRule {
            kind: ArgKind::Decoration,
            matcher: ArgMatcher::Type(TypePattern::Instance(name_pattern("Decoration|Icon"))),
            method: "set_decoration",
            carries_argument: true,
        },
        RewriteRule {
            kind: ArgKind::ErrorCode,
            matcher: ArgMatcher::Type(TypePattern::Enumeration(name_pattern("Error"))),
            method: "set_error",
            carries_argument: true,
        },
        RewriteRule {
            kind: ArgKind::TimePoint,
            matcher: ArgMatcher::Type(TypePattern::Instance(name_pattern("TimePoint"))),
            method: "set_time",
            carries_argument: true,
        },
        RewriteRule {
            kind: ArgKind::Device,
            matcher: ArgMatcher::Type(device()),
            method: "add_device",
            carries_argument: true,
        },
        RewriteRule {
            kind: ArgKind::Connection,
            matcher: ArgMatcher::Type(connection()),
            method: "add_connection",
            carries_argument: true,
        },
        RewriteRule {
            kind: ArgKind::DeviceList,
            matcher: ArgMatcher::Type(TypePattern::CollectionOf(Box::new(device()))),
            method: "add_device",
            carries_argument: true,
        },
        RewriteRule {
            kind: ArgKind::ConnectionList,
            matcher: ArgMatcher::Type(TypePattern::CollectionOf(Box::new(connection()))),
            method: "add_connection",
            carries_argument: true,
        },
    ]
}
