//! Commit object
//!
//! A commit points at one tree snapshot and at most one parent commit, so history is
//! a singly linked chain ending at the first commit.
//!
//! ## Format
//!
//! Canonical: `<parent-hex>?<tree-hex><message>`
//!
//! Stored: `commit 1\0` followed by
//! - `u8` has-parent flag and, when set, the 20-byte parent digest
//! - 20-byte tree digest
//! - `u32` message length and the message bytes
//!
//! Commits carry no timestamp of their own; `log` reports the modification time of the
//! stored object instead.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::{ObjectType, invalid_data};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Commit {
    parent: Option<ObjectId>,
    tree_oid: ObjectId,
    message: String,
}

impl Commit {
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> io::Result<Bytes> {
        let mut commit_bytes = Vec::new();
        commit_bytes.write_all(self.object_type().header().as_bytes())?;

        match &self.parent {
            Some(parent) => {
                commit_bytes.write_u8(1)?;
                parent.write_h40_to(&mut commit_bytes)?;
            }
            None => commit_bytes.write_u8(0)?,
        }
        self.tree_oid.write_h40_to(&mut commit_bytes)?;

        let message_len = u32::try_from(self.message.len())
            .map_err(|_| invalid_data("commit message too long"))?;
        commit_bytes.write_u32::<BigEndian>(message_len)?;
        commit_bytes.write_all(self.message.as_bytes())?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> io::Result<Self> {
        let parent = match reader.read_u8()? {
            0 => None,
            1 => Some(ObjectId::read_h40_from(&mut reader)?),
            other => return Err(invalid_data(format!("invalid parent flag {other}"))),
        };
        let tree_oid = ObjectId::read_h40_from(&mut reader)?;

        let message_len = reader.read_u32::<BigEndian>()?;
        let mut message = vec![0u8; message_len as usize];
        reader.read_exact(&mut message)?;
        let message = String::from_utf8(message)
            .map_err(|_| invalid_data("commit message is not valid UTF-8"))?;

        let mut trailing = [0u8; 1];
        if reader.read(&mut trailing)? != 0 {
            return Err(invalid_data("trailing bytes after commit message"));
        }

        Ok(Self::new(parent, tree_oid, message))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn canonical_bytes(&self) -> Bytes {
        let mut canonical = Vec::new();

        if let Some(parent) = &self.parent {
            canonical.extend_from_slice(parent.as_ref().as_bytes());
        }
        canonical.extend_from_slice(self.tree_oid.as_ref().as_bytes());
        canonical.extend_from_slice(self.message.as_bytes());

        Bytes::from(canonical)
    }
}
