use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::error::{IoContext, RepositoryError, Result};
use std::io::Write;

impl Repository {
    /// Record the staged tree as a new commit on the current branch
    ///
    /// Leading and trailing whitespace is trimmed from `message` before it is stored, so
    /// it takes part in the commit digest only in trimmed form.
    pub fn commit(&self, message: &str) -> Result<Commit> {
        let branch = match self.refs().read_head()? {
            Head::Branch(branch) => branch,
            Head::Detached(_) => return Err(RepositoryError::DetachedHead),
        };

        let mut index = self.index();
        index.rehydrate()?;
        let tree = index.tree().clone();
        let tree_oid = tree.object_id();

        let parent = self.refs().read_branch(&branch)?;
        if let Some(parent_oid) = &parent {
            let parent_commit = self.database().load_commit(parent_oid)?;
            if parent_commit.tree_oid() == &tree_oid {
                return Err(RepositoryError::NoChanges);
            }
        }

        self.database().store(&tree)?;
        let commit = Commit::new(parent.clone(), tree_oid, message.trim().to_string());
        let commit_oid = self.database().store(&commit)?;
        self.refs().update_branch(&branch, &commit_oid)?;
        tracing::info!(branch = %branch, oid = %commit_oid, "created commit");

        let is_root = if parent.is_none() { " (root-commit)" } else { "" };
        writeln!(
            self.writer(),
            "[{}{} {}] {}",
            branch,
            is_root,
            commit_oid.to_short_oid(),
            commit.short_message()
        )
        .io_context(|| "unable to write output")?;

        Ok(commit)
    }
}
