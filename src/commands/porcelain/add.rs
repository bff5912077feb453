use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::snapshot::tree_editor::TreeEditor;
use crate::artifacts::snapshot::tree_path::TreePath;
use crate::error::{RepositoryError, Result};
use std::path::PathBuf;

impl Repository {
    /// Stage a single file and persist the index
    pub fn stage(&self, path: &TreePath) -> Result<IndexEntry> {
        let mut index = self.index();
        index.rehydrate()?;

        let entry = self.stage_entry(&mut index, &self.tree_editor(), path)?;
        index.write_updates()?;

        Ok(entry)
    }

    /// Stage every path, expanding directories to the regular files below them
    ///
    /// Files reached through a directory that are already staged and unchanged are
    /// skipped; naming such a file directly fails with `NoOpStage`.
    pub fn add(&self, paths: &[PathBuf]) -> Result<()> {
        let mut index = self.index();
        index.rehydrate()?;
        let editor = self.tree_editor();

        for user_path in paths {
            let pathspec = self.workspace().pathspec(user_path)?;
            let expanded = match &pathspec {
                Some(path) => self.workspace().is_dir(path),
                None => true,
            };

            for path in self.workspace().list_files(pathspec.as_ref())? {
                match self.stage_entry(&mut index, &editor, &path) {
                    Err(RepositoryError::NoOpStage(_)) if expanded => {
                        tracing::debug!(path = %path, "skipping unchanged file");
                    }
                    result => {
                        result?;
                    }
                }
            }
        }

        index.write_updates()
    }

    fn stage_entry(
        &self,
        index: &mut Index,
        editor: &TreeEditor,
        path: &TreePath,
    ) -> Result<IndexEntry> {
        let content = self.workspace().read_file(path)?;
        let mtime = self.workspace().stat_mtime(path)?;

        if index
            .entry_by_path(path)
            .is_some_and(|entry| entry.mtime == mtime)
        {
            return Err(RepositoryError::NoOpStage(path.to_string()));
        }

        let oid = self.database().store(&Blob::new(content))?;
        let entry = IndexEntry::new(path.clone(), oid, mtime);
        index.add(editor, entry.clone())?;
        tracing::info!(path = %path, oid = %entry.oid, "staged file");

        Ok(entry)
    }
}
