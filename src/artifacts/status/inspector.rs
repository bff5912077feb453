use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::snapshot::tree_path::TreePath;
use crate::artifacts::status::file_change::FileStatus;
use crate::error::Result;
use derive_new::new;
use std::collections::BTreeMap;

/// The three checks status combines for one file present on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct Observation {
    /// The path has an index entry
    pub tracked: bool,
    /// Current content hashes to the digest recorded in the index
    pub matches_index: bool,
    /// HEAD's snapshot holds exactly this (path, digest) pair
    pub matches_head: bool,
    /// The index entry differs from HEAD's recorded index for the path
    pub differs_from_record: bool,
}

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl<'r> Inspector<'r> {
    /// Hash the workspace file at `path` and compare it against the index and HEAD
    ///
    /// `head_files` is the flattened snapshot of the HEAD commit (empty without one).
    pub fn observe(
        &self,
        path: &TreePath,
        index: &Index,
        head_files: &BTreeMap<String, ObjectId>,
    ) -> Result<Observation> {
        let content = self.repository.workspace().read_file(path)?;
        let oid = Blob::new(content).object_id();
        let head_oid = head_files.get(path.as_str());

        let index_entry = index.entry_by_path(path);

        Ok(Observation {
            tracked: index_entry.is_some(),
            matches_index: index_entry.is_some_and(|entry| entry.oid == oid),
            matches_head: head_oid == Some(&oid),
            differs_from_record: index_entry.is_some_and(|entry| head_oid != Some(&entry.oid)),
        })
    }

    /// Classify an observed file; `None` means the file is clean
    pub fn classify(observation: &Observation) -> Option<FileStatus> {
        match *observation {
            Observation {
                tracked: false,
                matches_head: false,
                ..
            } => Some(FileStatus::Untracked),
            Observation {
                tracked: false,
                matches_head: true,
                ..
            } => Some(FileStatus::Removed),
            Observation {
                matches_index: false,
                ..
            } => Some(FileStatus::Unstaged),
            Observation {
                matches_head: false,
                ..
            } => Some(FileStatus::Staged),
            Observation {
                differs_from_record: true,
                ..
            } => Some(FileStatus::Staged),
            _ => None,
        }
    }
}
