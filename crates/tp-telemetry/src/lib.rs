//! Logging setup shared by the training plan binaries.
//!
//! Both binaries write their primary output to stdout (tables, JSON exports,
//! headless events), so every subscriber installed here writes to stderr.

pub mod logging;
