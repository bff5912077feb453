use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::{FileChange, FileStatus};
use crate::artifacts::status::inspector::Inspector;
use crate::error::Result;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};

pub type FileSet = BTreeSet<String>;

/// Paths grouped by how they differ between workspace, index and HEAD
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub untracked: FileSet,
    pub staged: FileSet,
    pub unstaged: FileSet,
    pub removed: FileSet,
}

impl StatusReport {
    pub fn files(&self, status: FileStatus) -> &FileSet {
        match status {
            FileStatus::Staged => &self.staged,
            FileStatus::Unstaged => &self.unstaged,
            FileStatus::Removed => &self.removed,
            FileStatus::Untracked => &self.untracked,
        }
    }

    fn files_mut(&mut self, status: FileStatus) -> &mut FileSet {
        match status {
            FileStatus::Staged => &mut self.staged,
            FileStatus::Unstaged => &mut self.unstaged,
            FileStatus::Removed => &mut self.removed,
            FileStatus::Untracked => &mut self.untracked,
        }
    }

    pub fn is_clean(&self) -> bool {
        FileStatus::ALL
            .iter()
            .all(|status| self.files(*status).is_empty())
    }

    /// Every reported path with its class, sorted by path
    pub fn changes(&self) -> Vec<FileChange<'_>> {
        let mut changes = FileStatus::ALL
            .iter()
            .flat_map(|status| {
                self.files(*status).iter().map(|path| FileChange {
                    path: path.as_str(),
                    status: *status,
                })
            })
            .collect::<Vec<_>>();
        changes.sort_by(|a, b| a.path.cmp(b.path).then(a.status.cmp(&b.status)));

        changes
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self, index: &Index) -> Result<StatusReport> {
        let mut report = StatusReport::default();
        let inspector = Inspector::new(self.repository);
        let head_files = self.load_head_files()?;

        for path in self.repository.workspace().list_files(None)? {
            let observation = inspector.observe(&path, index, &head_files)?;

            if let Some(status) = Inspector::classify(&observation) {
                report.files_mut(status).insert(path.to_string());
            }
        }

        for entry in index.entries() {
            if !self.repository.workspace().is_file(&entry.path) {
                report.removed.insert(entry.path.to_string());
            }
        }

        tracing::debug!(
            untracked = report.untracked.len(),
            staged = report.staged.len(),
            unstaged = report.unstaged.len(),
            removed = report.removed.len(),
            "computed status"
        );

        Ok(report)
    }

    fn load_head_files(&self) -> Result<BTreeMap<String, ObjectId>> {
        match self.repository.refs().head_oid()? {
            Some(head_oid) => {
                let commit = self.repository.database().load_commit(&head_oid)?;
                let tree = self.repository.database().load_tree(commit.tree_oid())?;

                self.repository.tree_editor().flatten(&tree)
            }
            None => Ok(BTreeMap::new()),
        }
    }
}
