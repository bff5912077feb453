use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::{RepositoryError, Result};

impl Repository {
    /// Force the current branch to `target` and rewrite the workspace and index to match
    ///
    /// With a detached HEAD the default branch is moved; HEAD itself is not touched.
    pub fn reset(&self, target: &str) -> Result<ObjectId> {
        let target_oid = Revision::try_parse(target)?
            .resolve(self)?
            .ok_or_else(|| RepositoryError::RevisionNotFound(target.to_string()))?;

        let mut index = self.index();
        index.rehydrate()?;
        Migration::to_commit(self, &mut index, &target_oid)?.apply_changes()?;
        index.write_updates()?;

        let branch = self
            .refs()
            .current_branch()?
            .unwrap_or_else(BranchName::default_branch);
        self.refs().update_branch(&branch, &target_oid)?;
        tracing::info!(branch = %branch, oid = %target_oid, "reset branch");

        self.print_new_head(&target_oid)?;

        Ok(target_oid)
    }
}
