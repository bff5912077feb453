//! twig: a minimal content-addressed version control engine
//!
//! - `areas`: the parts of a repository on disk (object store, index, refs, workspace)
//! - `artifacts`: object model, snapshot engine and the algorithms built on them
//! - `commands`: user-facing operations as `impl Repository` blocks
//! - `error`: the error kinds every operation reports

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;
