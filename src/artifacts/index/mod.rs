//! Staging index file format
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "TIDX" (4 bytes)
//!   - Version: 1 (4 bytes, big endian)
//!   - Entry count (4 bytes, big endian)
//!
//! Entries, sorted by path:
//!   - mtime seconds (i64), mtime nanoseconds (u32)
//!   - 20-byte blob digest
//!   - path length (u16) and path bytes
//!
//! Staged tree:
//!   - same layout as a stored tree body
//!
//! Checksum (20 bytes):
//!   - SHA-1 of all preceding bytes
//! ```

pub mod checksum;
pub mod index_entry;
pub mod index_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 12;

/// Magic signature identifying index files
pub const SIGNATURE: &str = "TIDX";

/// Index file format version
pub const VERSION: u32 = 1;
