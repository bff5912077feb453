use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::log::rev_list::{LogEntry, RevList};
use crate::error::{IoContext, RepositoryError, Result};
use chrono::{DateTime, Local};
use std::io::Write;

const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

impl Repository {
    /// Print the history reachable from `revision` (HEAD when absent), newest first
    pub fn log(&self, revision: Option<&str>) -> Result<()> {
        let start = match revision {
            Some(revision) => Revision::try_parse(revision)?
                .resolve(self)?
                .ok_or_else(|| RepositoryError::RevisionNotFound(revision.to_string()))?,
            None => self
                .refs()
                .head_oid()?
                .ok_or(RepositoryError::NoCommitsYet)?,
        };

        for entry in RevList::new(self, start) {
            self.show_log_entry(&entry?)?;
        }

        Ok(())
    }

    fn show_log_entry(&self, entry: &LogEntry) -> Result<()> {
        let date = DateTime::<Local>::from(entry.timestamp).format(DATE_FORMAT);
        let message = entry
            .message
            .lines()
            .map(|line| format!("    {line}"))
            .collect::<Vec<_>>()
            .join("\n");

        writeln!(
            self.writer(),
            "commit {}\nDate:   {}\n\n{}\n",
            entry.oid,
            date,
            message
        )
        .io_context(|| "unable to write output")
    }
}
