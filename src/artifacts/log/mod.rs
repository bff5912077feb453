//! Commit history traversal
//!
//! - `rev_list`: walks parent links from a start commit, newest first

pub mod rev_list;
