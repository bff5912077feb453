//! Snapshot application
//!
//! Checkout and reset both materialise a commit's recorded index: every file of the
//! target snapshot is rewritten from its blob, and the staging index is replaced by
//! one entry per written file, stamped with the modification time left on disk.
//!
//! Files tracked before the migration but absent from the target are left in place;
//! they simply stop being tracked.
//!
//! Writing a snapshot file may need to replace a file standing where a directory goes,
//! or a directory standing where a file goes. Only tracked content is replaced: when an
//! untracked file is in the way, the migration fails before touching the workspace.

use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::{EntryTime, IndexEntry};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::snapshot::tree_path::TreePath;
use crate::error::{RepositoryError, Result};
use std::collections::BTreeSet;

pub struct Migration<'r> {
    repository: &'r Repository,
    /// Index to replace
    index: &'r mut Index,
    /// Root tree of the target commit
    target: Tree,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, index: &'r mut Index, target: Tree) -> Self {
        Self {
            repository,
            index,
            target,
        }
    }

    /// Load the root tree of `commit_oid` and build a migration towards it
    pub fn to_commit(
        repository: &'r Repository,
        index: &'r mut Index,
        commit_oid: &ObjectId,
    ) -> Result<Self> {
        let commit = repository.database().load_commit(commit_oid)?;
        let target = repository.database().load_tree(commit.tree_oid())?;

        Ok(Self::new(repository, index, target))
    }

    /// Rewrite the workspace and replace the in-memory index; the caller flushes it
    pub fn apply_changes(self) -> Result<Vec<IndexEntry>> {
        let files = self
            .repository
            .tree_editor()
            .flatten(&self.target)?
            .into_iter()
            .map(|(path, oid)| Ok((TreePath::try_parse(path)?, oid)))
            .collect::<Result<Vec<_>>>()?;
        check_untracked_in_the_way(
            self.repository,
            &*self.index,
            files.iter().map(|(path, _)| path),
        )?;

        let mut entries = Vec::with_capacity(files.len());
        for (path, oid) in files {
            let mtime = restore_file(self.repository, &path, &oid)?;

            entries.push(IndexEntry::new(path, oid, mtime));
        }

        self.index.replace(entries.clone(), self.target);
        tracing::info!(files = entries.len(), "applied snapshot to workspace");

        Ok(entries)
    }
}

/// Fail with `UntrackedInTheWay` if writing any of `paths` would delete an untracked file
///
/// That is an untracked file standing where a parent directory of a path goes, or an
/// untracked file below a directory standing where a path goes.
pub fn check_untracked_in_the_way<'p>(
    repository: &Repository,
    index: &Index,
    paths: impl IntoIterator<Item = &'p TreePath>,
) -> Result<()> {
    let workspace = repository.workspace();
    let is_untracked = |path: &TreePath| index.entry_by_path(path).is_none();
    let mut blocking = BTreeSet::new();

    for path in paths {
        let segments = path.segments().collect::<Vec<_>>();

        for depth in 1..segments.len() {
            let parent = TreePath::try_parse(segments[..depth].join("/"))?;
            if workspace.is_file(&parent) && is_untracked(&parent) {
                blocking.insert(parent.to_string());
            }
        }

        if workspace.is_dir(path) {
            for nested in workspace.list_files(Some(path))? {
                if is_untracked(&nested) {
                    blocking.insert(nested.to_string());
                }
            }
        }
    }

    if blocking.is_empty() {
        return Ok(());
    }

    tracing::warn!(paths = ?blocking, "untracked files block the workspace update");
    Err(RepositoryError::UntrackedInTheWay {
        paths: blocking.into_iter().collect(),
    })
}

/// Overwrite the workspace file at `path` with the content of blob `oid`
pub fn restore_file(repository: &Repository, path: &TreePath, oid: &ObjectId) -> Result<EntryTime> {
    let blob = repository.database().load_blob(oid)?;
    let mtime = repository.workspace().write_file(path, blob.content())?;
    tracing::debug!(path = %path, oid = %oid, "restored file");

    Ok(mtime)
}
