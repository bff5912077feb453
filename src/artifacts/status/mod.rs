//! Working tree status inspection
//!
//! Every file on disk is hashed and compared with its index entry and with the HEAD
//! snapshot; staged paths missing on disk are reported as removed.
//!
//! ## Components
//!
//! - `file_change`: status classes and their rendering
//! - `inspector`: per-file observation and the classification table
//! - `status_info`: report aggregation over the whole workspace

pub mod file_change;
pub mod inspector;
pub mod status_info;
