//! Object model
//!
//! Every piece of history is stored as one of three immutable objects, identified by the
//! SHA-1 digest of its canonical encoding:
//!
//! - **Blob**: raw file content
//! - **Tree**: directory snapshot mapping child names to `(digest, kind)` pairs
//! - **Commit**: a tree digest, an optional parent commit digest and a message
//!
//! The canonical encoding (what gets hashed) and the stored encoding (what lands in
//! `.twig/objects`) are deliberately separate. The stored form is versioned:
//! `<kind> <format-version>\0<length-prefixed body>`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw bytes
pub const OBJECT_ID_BYTES: usize = OBJECT_ID_LENGTH / 2;

/// Version of the stored object encoding
pub const OBJECT_FORMAT_VERSION: u32 = 1;
