//! Database entry types
//!
//! Tree children as read from (or written to) the object database: a digest plus the
//! kind of object it names.

pub mod database_entry;
