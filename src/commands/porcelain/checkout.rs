use crate::areas::refs::{HEAD_REF_NAME, Head};
use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::{Migration, check_untracked_in_the_way, restore_file};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::snapshot::tree_path::TreePath;
use crate::error::{IoContext, RepositoryError, Result};
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Move HEAD to `target` and rewrite the workspace and index to its snapshot
    ///
    /// A name of an existing branch attaches HEAD to it; any other revision detaches
    /// HEAD at the resolved commit.
    pub fn checkout(&self, target: &str) -> Result<ObjectId> {
        let revision = Revision::try_parse(target)?;

        let (new_head, target_oid) = match revision.branch(self) {
            Some(branch) => {
                let oid = self
                    .refs()
                    .read_branch(&branch)?
                    .ok_or_else(|| RepositoryError::UnknownBranch(branch.to_string()))?;
                (Head::Branch(branch), oid)
            }
            None => {
                let oid = revision
                    .resolve(self)?
                    .ok_or_else(|| Self::unresolved_target(&revision, target))?;
                (Head::Detached(oid.clone()), oid)
            }
        };

        let mut index = self.index();
        index.rehydrate()?;
        Migration::to_commit(self, &mut index, &target_oid)?.apply_changes()?;
        index.write_updates()?;

        if self.refs().head_oid()?.as_ref() != Some(&target_oid) {
            self.refs().set_head(&new_head)?;
        }
        tracing::info!(revision = target, oid = %target_oid, "checked out revision");

        self.print_new_head(&target_oid)?;

        Ok(target_oid)
    }

    fn unresolved_target(revision: &Revision, target: &str) -> RepositoryError {
        match revision {
            Revision::Ref(name) if name.as_ref() == HEAD_REF_NAME => RepositoryError::NoCommitsYet,
            Revision::Ref(name)
                if !ObjectId::is_full_hex(name.as_ref())
                    && !Revision::looks_like_abbreviated_oid(name.as_ref()) =>
            {
                RepositoryError::UnknownBranch(name.to_string())
            }
            _ => RepositoryError::RevisionNotFound(target.to_string()),
        }
    }

    /// Restore each path from the HEAD commit, leaving HEAD and the index as they are
    pub fn checkout_files(&self, paths: &[PathBuf]) -> Result<()> {
        for user_path in paths {
            let path = self.workspace().relative_path(user_path)?;
            self.checkout_file(&path)?;
        }

        Ok(())
    }

    pub fn checkout_file(&self, path: &TreePath) -> Result<()> {
        let head_oid = self
            .refs()
            .head_oid()?
            .ok_or(RepositoryError::NoCommitsYet)?;
        let commit = self.database().load_commit(&head_oid)?;
        let tree = self.database().load_tree(commit.tree_oid())?;

        let blob_oid = self
            .tree_editor()
            .lookup(&tree, path)?
            .ok_or_else(|| RepositoryError::PathNotInCommit(path.to_string()))?;

        let mut index = self.index();
        index.rehydrate()?;
        check_untracked_in_the_way(self, &index, [path])?;

        restore_file(self, path, &blob_oid)?;
        tracing::info!(path = %path, oid = %blob_oid, "checked out file");

        Ok(())
    }

    pub(crate) fn print_new_head(&self, oid: &ObjectId) -> Result<()> {
        let head = match self.refs().read_head()? {
            Head::Branch(branch) => format!("On branch {branch}"),
            Head::Detached(_) => "HEAD is now detached".to_string(),
        };
        let commit = self.database().load_commit(oid)?;

        writeln!(
            self.writer(),
            "{head}, at {} {}",
            oid.to_short_oid(),
            commit.short_message()
        )
        .io_context(|| "unable to write output")
    }
}
