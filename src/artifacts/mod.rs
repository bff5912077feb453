//! Data structures and algorithms
//!
//! - `branch`: branch names and revision parsing
//! - `checkout`: applying a commit's snapshot to workspace and index
//! - `database`: tree entry types
//! - `index`: index entries and the on-disk codec pieces
//! - `log`: commit history traversal
//! - `objects`: blobs, trees, commits and their encodings
//! - `snapshot`: copy-on-write tree rewriting
//! - `status`: working tree status inspection

pub mod branch;
pub mod checkout;
pub mod database;
pub mod index;
pub mod log;
pub mod objects;
pub mod snapshot;
pub mod status;
