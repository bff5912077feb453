//! Repository configuration
//!
//! `.twig/config` is an INI file. The only key the engine consumes is
//! `core.repositoryformatversion`, which must be `0`.

use crate::error::{IoContext, RepositoryError, Result};
use std::path::Path;

pub const REPOSITORY_FORMAT_VERSION: i64 = 0;

pub const DEFAULT_CONFIG: &str = "[core]
\trepositoryformatversion = 0
\tfilemode = false
\tbare = false
";

#[derive(Debug)]
pub struct RepositoryConfig {
    settings: config::Config,
}

impl RepositoryConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(RepositoryError::NotARepository {
                path: path.to_path_buf(),
                source: None,
            });
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Ini))
            .build()
            .map_err(|source| RepositoryError::UnsupportedFormat {
                reason: format!("unable to parse {}", path.display()),
                source: Some(source.into()),
            })?;

        Ok(RepositoryConfig { settings })
    }

    /// Write the default configuration unless a config file already exists
    pub fn write_default(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }

        std::fs::write(path, DEFAULT_CONFIG)
            .io_context(|| format!("unable to write config {}", path.display()))
    }

    pub fn repository_format_version(&self) -> Result<i64> {
        self.settings
            .get_int("core.repositoryformatversion")
            .map_err(|source| RepositoryError::UnsupportedFormat {
                reason: "missing or invalid core.repositoryformatversion".into(),
                source: Some(source.into()),
            })
    }

    pub fn check_format_version(&self) -> Result<()> {
        let version = self.repository_format_version()?;

        if version != REPOSITORY_FORMAT_VERSION {
            return Err(RepositoryError::unsupported_format(format!(
                "repository format version {version} is not supported"
            )));
        }

        Ok(())
    }
}
