use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::snapshot::tree_path::TreePath;
use crate::error::{IoContext, Result};
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Remove `path` from the index and persist it; the file on disk is untouched
    pub fn unstage(&self, path: &TreePath) -> Result<IndexEntry> {
        let mut index = self.index();
        index.rehydrate()?;

        let entry = index.remove(&self.tree_editor(), path)?;
        index.write_updates()?;
        tracing::info!(path = %path, "unstaged file");

        Ok(entry)
    }

    pub fn rm(&self, paths: &[PathBuf]) -> Result<()> {
        let mut index = self.index();
        index.rehydrate()?;
        let editor = self.tree_editor();

        let mut removed = Vec::with_capacity(paths.len());
        for user_path in paths {
            let path = self.workspace().relative_path(user_path)?;
            index.remove(&editor, &path)?;
            removed.push(path);
        }
        index.write_updates()?;

        for path in removed {
            tracing::info!(path = %path, "unstaged file");
            writeln!(self.writer(), "rm '{path}'").io_context(|| "unable to write output")?;
        }

        Ok(())
    }
}
