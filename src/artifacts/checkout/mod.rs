//! Checkout and reset support
//!
//! - `migration`: rewrites the workspace and the staging index to match a commit

pub mod migration;
