use crate::areas::database::Database;
use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use crate::artifacts::snapshot::tree_path::TreePath;
use crate::error::{RepositoryError, Result};
use derive_new::new;
use std::collections::BTreeMap;

/// Copy-on-write edits and lookups over trees stored in a [`Database`]
///
/// Every edit returns a new root tree. Rewritten subtrees are stored as they are
/// produced; storing the returned root is left to the caller.
#[derive(Debug, new)]
pub struct TreeEditor<'d> {
    database: &'d Database,
}

impl TreeEditor<'_> {
    /// Set the leaf at `path` to `blob`, or delete it when `blob` is `None`
    ///
    /// Directories left without children are dropped from their parent.
    pub fn rewrite(&self, tree: &Tree, path: &TreePath, blob: Option<&ObjectId>) -> Result<Tree> {
        let segments = path.segments().collect::<Vec<_>>();
        self.rewrite_segments(tree, path, &segments, blob)
    }

    fn rewrite_segments(
        &self,
        tree: &Tree,
        path: &TreePath,
        segments: &[&str],
        blob: Option<&ObjectId>,
    ) -> Result<Tree> {
        let mut tree = tree.clone();

        match segments {
            [] => return Err(RepositoryError::malformed_path(path.as_str(), "path is empty")),
            [leaf] => {
                if tree.get(leaf).is_some_and(DatabaseEntry::is_tree) {
                    return Err(RepositoryError::malformed_path(
                        path.as_str(),
                        format!("'{leaf}' is a directory"),
                    ));
                }

                match blob {
                    Some(oid) => tree.insert(*leaf, DatabaseEntry::blob(oid.clone())),
                    None => {
                        tree.remove(leaf);
                    }
                }
            }
            [dir, rest @ ..] => {
                let subtree = match tree.get(dir) {
                    Some(entry) if entry.is_tree() => self.database.load_tree(&entry.oid)?,
                    Some(_) => {
                        return Err(RepositoryError::malformed_path(
                            path.as_str(),
                            format!("'{dir}' is a file"),
                        ));
                    }
                    None if blob.is_none() => return Ok(tree),
                    None => Tree::default(),
                };

                let subtree = self.rewrite_segments(&subtree, path, rest, blob)?;
                if subtree.is_empty() {
                    tree.remove(dir);
                } else {
                    let subtree_oid = self.database.store(&subtree)?;
                    tree.insert(*dir, DatabaseEntry::tree(subtree_oid));
                }
            }
        }

        Ok(tree)
    }

    /// Blob digest recorded at `path`, if the path names a file in `tree`
    pub fn lookup(&self, tree: &Tree, path: &TreePath) -> Result<Option<ObjectId>> {
        let segments = path.segments().collect::<Vec<_>>();
        let Some((leaf, dirs)) = segments.split_last() else {
            return Ok(None);
        };

        let mut current = tree.clone();
        for dir in dirs {
            match current.get(dir) {
                Some(entry) if entry.is_tree() => current = self.database.load_tree(&entry.oid)?,
                _ => return Ok(None),
            }
        }

        Ok(current
            .get(leaf)
            .filter(|entry| !entry.is_tree())
            .map(|entry| entry.oid.clone()))
    }

    /// Whether `tree` records exactly `oid` for the file at `path`
    pub fn matches(&self, tree: &Tree, path: &TreePath, oid: &ObjectId) -> Result<bool> {
        Ok(self.lookup(tree, path)?.as_ref() == Some(oid))
    }

    /// Every file in `tree` with its blob digest, keyed by slash-separated path
    pub fn flatten(&self, tree: &Tree) -> Result<BTreeMap<String, ObjectId>> {
        let mut files = BTreeMap::new();
        self.flatten_into(tree, "", &mut files)?;

        Ok(files)
    }

    fn flatten_into(
        &self,
        tree: &Tree,
        prefix: &str,
        files: &mut BTreeMap<String, ObjectId>,
    ) -> Result<()> {
        for (name, entry) in tree.entries() {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}/{name}")
            };

            if entry.is_tree() {
                let subtree = self.database.load_tree(&entry.oid)?;
                self.flatten_into(&subtree, &path, files)?;
            } else {
                files.insert(path, entry.oid.clone());
            }
        }

        Ok(())
    }
}
