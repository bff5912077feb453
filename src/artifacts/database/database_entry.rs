use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::{ObjectType, invalid_data};
use derive_new::new;
use std::io;

/// Kind of a tree child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Blob,
    Tree,
}

impl EntryKind {
    /// Tag used in the canonical tree encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Blob => "blob",
            EntryKind::Tree => "tree",
        }
    }

    /// Tag byte used in the stored tree encoding
    pub fn to_tag(self) -> u8 {
        match self {
            EntryKind::Blob => 0,
            EntryKind::Tree => 1,
        }
    }

    pub fn from_tag(tag: u8) -> io::Result<Self> {
        match tag {
            0 => Ok(EntryKind::Blob),
            1 => Ok(EntryKind::Tree),
            other => Err(invalid_data(format!("invalid tree entry kind tag {other}"))),
        }
    }
}

impl From<EntryKind> for ObjectType {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Blob => ObjectType::Blob,
            EntryKind::Tree => ObjectType::Tree,
        }
    }
}

/// A tree child: the digest of the object it names and the kind of that object
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DatabaseEntry {
    pub oid: ObjectId,
    pub kind: EntryKind,
}

impl DatabaseEntry {
    pub fn blob(oid: ObjectId) -> Self {
        Self::new(oid, EntryKind::Blob)
    }

    pub fn tree(oid: ObjectId) -> Self {
        Self::new(oid, EntryKind::Tree)
    }

    pub fn is_tree(&self) -> bool {
        self.kind == EntryKind::Tree
    }
}
