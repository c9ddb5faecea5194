//! Harvest - hardcoded UI string extraction for React projects
//!
//! Harvest is a CLI tool and library that scans JSX/TSX sources for
//! hardcoded user-facing strings at UI-component call sites, synthesizes
//! stable camelCase keys, centralizes the strings into per-locale ARB
//! resource files, and optionally rewrites the sources so each literal
//! becomes a `t('key')` reference.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction pipeline (scan, parse, collect, keygen, resource,
//!   rewrite, propagate)
//! - `issues`: Accumulated issue types and reporting
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
