//! Staging index
//!
//! The index records which file contents go into the next commit: one entry per staged
//! path, plus the staged root tree that mirrors those entries. It is loaded whole,
//! mutated in memory and flushed whole. The shared/exclusive locks taken around load
//! and flush only protect single reads and writes. Two processes running
//! read-modify-write cycles concurrently can still overwrite each other's updates.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::invalid_data;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::snapshot::tree_editor::TreeEditor;
use crate::artifacts::snapshot::tree_path::TreePath;
use crate::error::{IoContext, RepositoryError, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::collections::BTreeMap;
use std::io::{Cursor, Read, Write};
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.twig/index`)
    path: Box<Path>,
    entries: BTreeMap<TreePath, IndexEntry>,
    /// Root of the staged snapshot; its subtrees are stored, the root itself is not
    tree: Tree,
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            tree: Tree::default(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_by_path(&self, path: &TreePath) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn has_changed(&self) -> bool {
        self.changed
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.tree = Tree::default();
        self.changed = false;
    }

    /// Load the index from disk
    ///
    /// A missing or empty index file loads as an empty index.
    ///
    /// # Locking
    ///
    /// Acquires a shared lock on the index file during reading.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .io_context(|| format!("unable to open index {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)
            .io_context(|| format!("unable to lock index {}", self.path.display()))?;

        let mut content = Vec::new();
        lock.deref_mut()
            .read_to_end(&mut content)
            .io_context(|| format!("unable to read index {}", self.path.display()))?;

        if content.is_empty() {
            return Ok(());
        }

        let (entries, tree) = Self::decode(content)
            .map_err(|source| RepositoryError::corrupt_with("index", "unable to decode index", source))?;
        self.entries = entries;
        self.tree = tree;

        tracing::debug!(entries = self.entries.len(), "loaded index");
        Ok(())
    }

    fn decode(content: Vec<u8>) -> std::io::Result<(BTreeMap<TreePath, IndexEntry>, Tree)> {
        let mut reader = Checksum::new(Cursor::new(content));

        let mut header_bytes = [0u8; HEADER_SIZE];
        reader.read_exact(&mut header_bytes)?;
        let header = IndexHeader::deserialize(Cursor::new(header_bytes))?;

        if header.marker != SIGNATURE {
            return Err(invalid_data("invalid index file signature"));
        }
        if header.version != VERSION {
            return Err(invalid_data(format!(
                "unsupported index file version: {}",
                header.version
            )));
        }

        let mut entries = BTreeMap::new();
        for _ in 0..header.entries_count {
            let entry = Self::read_entry(&mut reader)?;
            if entries.insert(entry.path.clone(), entry).is_some() {
                return Err(invalid_data("duplicate index entry"));
            }
        }

        let tree = Tree::read_body(&mut reader)?;
        reader.verify()?;

        Ok((entries, tree))
    }

    fn read_entry(reader: &mut impl Read) -> std::io::Result<IndexEntry> {
        // fixed-size prefix: mtime (12 bytes), digest (20 bytes), path length (2 bytes)
        let mut prefix = [0u8; 34];
        reader.read_exact(&mut prefix)?;
        let path_len = Cursor::new(&prefix[32..]).read_u16::<BigEndian>()?;

        let mut entry_bytes = prefix.to_vec();
        let mut path = vec![0u8; path_len as usize];
        reader.read_exact(&mut path)?;
        entry_bytes.extend_from_slice(&path);

        IndexEntry::deserialize(Cursor::new(entry_bytes))
    }

    /// Insert or replace the entry for its path and rewrite the staged tree to match
    pub fn add(&mut self, editor: &TreeEditor, entry: IndexEntry) -> Result<()> {
        self.tree = editor.rewrite(&self.tree, &entry.path, Some(&entry.oid))?;
        self.entries.insert(entry.path.clone(), entry);
        self.changed = true;

        Ok(())
    }

    /// Drop the entry for `path` and delete the leaf from the staged tree
    pub fn remove(&mut self, editor: &TreeEditor, path: &TreePath) -> Result<IndexEntry> {
        if !self.entries.contains_key(path) {
            return Err(RepositoryError::NotTracked(path.to_string()));
        }

        self.tree = editor.rewrite(&self.tree, path, None)?;
        let entry = self
            .entries
            .remove(path)
            .ok_or_else(|| RepositoryError::NotTracked(path.to_string()))?;
        self.changed = true;

        Ok(entry)
    }

    /// Replace the whole staged state, discarding every current entry
    pub fn replace(&mut self, entries: impl IntoIterator<Item = IndexEntry>, tree: Tree) {
        self.entries = entries
            .into_iter()
            .map(|entry| (entry.path.clone(), entry))
            .collect();
        self.tree = tree;
        self.changed = true;
    }

    /// Recorded blob digests keyed by path, as used to compare with a commit
    pub fn digests(&self) -> BTreeMap<String, ObjectId> {
        self.entries
            .values()
            .map(|entry| (entry.path.to_string(), entry.oid.clone()))
            .collect()
    }

    /// Flush the whole index to disk
    ///
    /// # Locking
    ///
    /// Acquires an exclusive lock on the index file during writing.
    pub fn write_updates(&mut self) -> Result<()> {
        let content = self
            .encode()
            .io_context(|| format!("unable to encode index {}", self.path.display()))?;

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .io_context(|| format!("unable to open index {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)
            .io_context(|| format!("unable to lock index {}", self.path.display()))?;
        lock.deref_mut()
            .write_all(&content)
            .io_context(|| format!("unable to write index {}", self.path.display()))?;

        self.changed = false;
        tracing::debug!(entries = self.entries.len(), "flushed index");

        Ok(())
    }

    fn encode(&self) -> std::io::Result<Vec<u8>> {
        let mut writer = Checksum::new(Vec::new());

        let entries_count = u32::try_from(self.entries.len())
            .map_err(|_| invalid_data("too many index entries"))?;
        let header = IndexHeader {
            entries_count,
            ..IndexHeader::empty()
        };
        writer.write_all(&header.serialize()?)?;

        for entry in self.entries.values() {
            writer.write_all(&entry.serialize()?)?;
        }
        self.tree.write_body(&mut writer)?;

        writer.write_checksum()
    }
}
