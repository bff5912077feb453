use crate::areas::config::RepositoryConfig;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::error::{IoContext, Result};
use std::fs;
use std::io::Write;

const DEFAULT_DESCRIPTION: &str = "Edit this file to name the repository\n";

impl Repository {
    /// Create the `.twig` layout; files that already exist are left untouched
    pub fn init(&self) -> Result<()> {
        let metadata_path = self.metadata_path();

        for dir in [
            self.database().objects_path().to_path_buf(),
            self.refs().heads_path(),
            self.refs().refs_path().join("tags"),
            metadata_path.join("branches"),
        ] {
            fs::create_dir_all(&dir)
                .io_context(|| format!("unable to create directory {}", dir.display()))?;
        }

        let description_path = metadata_path.join("description");
        if !description_path.exists() {
            fs::write(&description_path, DEFAULT_DESCRIPTION)
                .io_context(|| format!("unable to write {}", description_path.display()))?;
        }

        self.refs().init_head(&BranchName::default_branch())?;
        RepositoryConfig::write_default(&metadata_path.join("config"))?;

        tracing::info!(path = %self.path().display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty twig repository in {}",
            metadata_path.display()
        )
        .io_context(|| "unable to write output")
    }
}
