//! Repository areas
//!
//! - `config`: repository configuration and format-version check
//! - `database`: content-addressed object store
//! - `index`: staging index
//! - `refs`: HEAD and branches
//! - `repository`: the context value owning all areas
//! - `workspace`: working directory access

pub mod config;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
