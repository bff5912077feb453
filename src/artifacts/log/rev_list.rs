use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::Result;
use derive_new::new;
use std::time::SystemTime;

/// One commit as shown by `log`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub oid: ObjectId,
    /// Modification time of the stored commit object
    pub timestamp: SystemTime,
    pub message: String,
}

/// History of a commit, newest first, following parent links to the root
#[derive(Clone, new)]
pub struct RevList<'r> {
    repository: &'r Repository,
    start: ObjectId,
}

impl<'r> IntoIterator for RevList<'r> {
    type Item = Result<LogEntry>;
    type IntoIter = RevListIntoIter<'r>;

    fn into_iter(self) -> Self::IntoIter {
        RevListIntoIter {
            repository: self.repository,
            current_commit_oid: Some(self.start),
        }
    }
}

#[derive(Clone)]
pub struct RevListIntoIter<'r> {
    repository: &'r Repository,
    current_commit_oid: Option<ObjectId>,
}

impl RevListIntoIter<'_> {
    fn load_entry(&self, oid: &ObjectId) -> Result<(LogEntry, Option<ObjectId>)> {
        let database = self.repository.database();
        let commit = database.load_commit(oid)?;
        let timestamp = database.object_mtime(oid)?;

        let entry = LogEntry {
            oid: oid.clone(),
            timestamp,
            message: commit.message().to_string(),
        };

        Ok((entry, commit.parent().cloned()))
    }
}

impl Iterator for RevListIntoIter<'_> {
    type Item = Result<LogEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.load_entry(&commit_oid) {
            Ok((entry, parent)) => {
                self.current_commit_oid = parent;
                Some(Ok(entry))
            }
            // the walk stops after the first failure
            Err(error) => Some(Err(error)),
        }
    }
}
