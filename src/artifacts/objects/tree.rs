//! Tree object
//!
//! Trees are directory snapshots: each child name maps to the digest of a blob or of
//! another tree, which makes the tree a node of a Merkle DAG.
//!
//! ## Format
//!
//! Canonical: for every child in byte-lexicographic name order,
//! `<name><40-hex-digest><blob|tree>`.
//!
//! Stored: `tree 1\0` followed by
//! - `u32` entry count
//! - per entry: `u16` name length, name, 20-byte digest, `u8` kind tag
//!
//! Trees are plain values. Edits produce new trees (see `artifacts::snapshot`); a tree
//! read from the database is never shared with the tree being built from it.

use crate::artifacts::database::database_entry::{DatabaseEntry, EntryKind};
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::{ObjectType, invalid_data};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Read, Write};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, DatabaseEntry>,
}

impl Tree {
    pub fn get(&self, name: &str) -> Option<&DatabaseEntry> {
        self.entries.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: DatabaseEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn remove(&mut self, name: &str) -> Option<DatabaseEntry> {
        self.entries.remove(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &DatabaseEntry)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Write the length-prefixed body shared by stored trees and the index file
    pub fn write_body(&self, writer: &mut impl Write) -> io::Result<()> {
        let count = u32::try_from(self.entries.len())
            .map_err(|_| invalid_data("too many tree entries"))?;
        writer.write_u32::<BigEndian>(count)?;

        for (name, entry) in &self.entries {
            let name_len = u16::try_from(name.len())
                .map_err(|_| invalid_data(format!("tree entry name too long: {name}")))?;
            writer.write_u16::<BigEndian>(name_len)?;
            writer.write_all(name.as_bytes())?;
            entry.oid.write_h40_to(writer)?;
            writer.write_u8(entry.kind.to_tag())?;
        }

        Ok(())
    }

    pub fn read_body(reader: &mut impl Read) -> io::Result<Self> {
        let count = reader.read_u32::<BigEndian>()?;
        let mut tree = Tree::default();

        for _ in 0..count {
            let name_len = reader.read_u16::<BigEndian>()?;
            let mut name = vec![0u8; name_len as usize];
            reader.read_exact(&mut name)?;
            let name = String::from_utf8(name)
                .map_err(|_| invalid_data("tree entry name is not valid UTF-8"))?;

            let oid = ObjectId::read_h40_from(reader)?;
            let kind = EntryKind::from_tag(reader.read_u8()?)?;

            if tree.entries.insert(name, DatabaseEntry::new(oid, kind)).is_some() {
                return Err(invalid_data("duplicate tree entry name"));
            }
        }

        Ok(tree)
    }
}

impl Packable for Tree {
    fn serialize(&self) -> io::Result<Bytes> {
        let mut tree_bytes = Vec::new();
        tree_bytes.write_all(self.object_type().header().as_bytes())?;
        self.write_body(&mut tree_bytes)?;

        Ok(Bytes::from(tree_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(mut reader: impl BufRead) -> io::Result<Self> {
        let tree = Self::read_body(&mut reader)?;

        let mut trailing = [0u8; 1];
        if reader.read(&mut trailing)? != 0 {
            return Err(invalid_data("trailing bytes after tree entries"));
        }

        Ok(tree)
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn canonical_bytes(&self) -> Bytes {
        let mut canonical = Vec::new();

        for (name, entry) in &self.entries {
            canonical.extend_from_slice(name.as_bytes());
            canonical.extend_from_slice(entry.oid.as_ref().as_bytes());
            canonical.extend_from_slice(entry.kind.as_str().as_bytes());
        }

        Bytes::from(canonical)
    }
}
