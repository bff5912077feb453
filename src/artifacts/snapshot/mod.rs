//! Tree snapshots
//!
//! Path-scoped, copy-on-write edits of tree objects. Paths are walked one segment at a
//! time; each level that changes yields a brand-new tree object while untouched
//! siblings keep their digests.

pub mod tree_editor;
pub mod tree_path;
