//! Builderize - builder-call migration for TypeScript tree items
//!
//! Builderize is a CLI tool and library for migrating `new TreeItem(...)`
//! constructor arguments into chained builder calls. It finds call-sites of
//! the configured constructor, classifies each argument against a fixed
//! rule catalog, and either reports the rewrites (`check`) or applies them
//! (`fix --apply`), preserving every argument expression byte-for-byte.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `commands`: Command implementations over the shared check context
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, symbol resolution, call-site discovery, edits
//! - `issues`: Issue type definitions and reporting
//! - `reporter`: Cargo-style diagnostic output
//! - `rules`: The rewrite rule catalog and the rewrite engine

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod issues;
pub mod reporter;
pub mod rules;
