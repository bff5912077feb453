use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Binary encoding of a value
///
/// For objects this is the stored form: `<kind> <format-version>\0` followed by the body.
pub trait Packable {
    fn serialize(&self) -> io::Result<Bytes>;
}

/// Inverse of [`Packable`]; for objects the header has already been consumed from `reader`
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> io::Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// Deterministic byte string the object identity is derived from
    fn canonical_bytes(&self) -> Bytes;

    fn object_id(&self) -> ObjectId {
        ObjectId::digest(&self.canonical_bytes())
    }

    fn object_path(&self) -> PathBuf {
        self.object_id().to_path()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(_) => ObjectType::Blob,
            ObjectBox::Tree(_) => ObjectType::Tree,
            ObjectBox::Commit(_) => ObjectType::Commit,
        }
    }

    pub fn object_id(&self) -> ObjectId {
        match self {
            ObjectBox::Blob(blob) => blob.object_id(),
            ObjectBox::Tree(tree) => tree.object_id(),
            ObjectBox::Commit(commit) => commit.object_id(),
        }
    }

    /// Decode a stored object (header included)
    pub fn unpack(mut reader: impl BufRead) -> io::Result<Self> {
        let object = match ObjectType::parse_object_type(&mut reader)? {
            ObjectType::Blob => ObjectBox::Blob(Box::new(Blob::deserialize(reader)?)),
            ObjectType::Tree => ObjectBox::Tree(Box::new(Tree::deserialize(reader)?)),
            ObjectType::Commit => ObjectBox::Commit(Box::new(Commit::deserialize(reader)?)),
        };

        Ok(object)
    }
}

impl Packable for ObjectBox {
    fn serialize(&self) -> io::Result<Bytes> {
        match self {
            ObjectBox::Blob(blob) => blob.serialize(),
            ObjectBox::Tree(tree) => tree.serialize(),
            ObjectBox::Commit(commit) => commit.serialize(),
        }
    }
}

impl From<Blob> for ObjectBox {
    fn from(blob: Blob) -> Self {
        ObjectBox::Blob(Box::new(blob))
    }
}

impl From<Tree> for ObjectBox {
    fn from(tree: Tree) -> Self {
        ObjectBox::Tree(Box::new(tree))
    }
}

impl From<Commit> for ObjectBox {
    fn from(commit: Commit) -> Self {
        ObjectBox::Commit(Box::new(commit))
    }
}
