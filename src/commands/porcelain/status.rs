use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::{FileChange, FileStatus};
use crate::artifacts::status::status_info::{Status, StatusReport};
use crate::error::{IoContext, Result};
use std::io::Write;

impl Repository {
    /// Classify every file against the index and the HEAD snapshot
    pub fn status_report(&self) -> Result<StatusReport> {
        let mut index = self.index();
        index.rehydrate()?;

        Status::new(self).initialize(&index)
    }

    pub fn status(&self, porcelain: bool) -> Result<StatusReport> {
        let report = self.status_report()?;

        if porcelain {
            self.print_porcelain_format(&report)?;
        } else {
            self.print_long_format(&report)?;
        }

        Ok(report)
    }

    fn print_porcelain_format(&self, report: &StatusReport) -> Result<()> {
        let mut writer = self.writer();

        for change in report.changes() {
            writeln!(writer, "{} {}", change.status.porcelain_code(), change.path)
                .io_context(|| "unable to write output")?;
        }

        Ok(())
    }

    fn print_long_format(&self, report: &StatusReport) -> Result<()> {
        let header = match self.refs().read_head()? {
            Head::Branch(branch) => format!("On branch {branch}"),
            Head::Detached(oid) => format!("HEAD detached at {}", oid.to_short_oid()),
        };

        let mut writer = self.writer();
        writeln!(writer, "{header}").io_context(|| "unable to write output")?;

        if report.is_clean() {
            return writeln!(writer, "nothing to commit, working tree clean")
                .io_context(|| "unable to write output");
        }

        for status in FileStatus::ALL {
            let files = report.files(status);
            if files.is_empty() {
                continue;
            }

            writeln!(writer, "\n{}", status.section_title())
                .io_context(|| "unable to write output")?;
            for path in files {
                writeln!(writer, "{}", FileChange { path, status })
                    .io_context(|| "unable to write output")?;
            }
        }

        Ok(())
    }
}
