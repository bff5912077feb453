use crate::error::{RepositoryError, Result};
use std::path::{Component, Path, PathBuf};

/// Name of the repository metadata directory; never tracked
pub const METADATA_DIR: &str = ".twig";

/// A validated, slash-separated path relative to the working directory
///
/// Segments are never empty, `.` or `..`, and the first segment is never the
/// metadata directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreePath {
    raw: String,
}

impl TreePath {
    pub fn try_parse(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref();

        if raw.is_empty() {
            return Err(RepositoryError::malformed_path(raw, "path is empty"));
        }
        if raw.starts_with('/') {
            return Err(RepositoryError::malformed_path(raw, "path must be relative"));
        }

        for (i, segment) in raw.split('/').enumerate() {
            match segment {
                "" => return Err(RepositoryError::malformed_path(raw, "empty path segment")),
                "." | ".." => {
                    return Err(RepositoryError::malformed_path(
                        raw,
                        format!("'{segment}' segments are not allowed"),
                    ));
                }
                METADATA_DIR if i == 0 => {
                    return Err(RepositoryError::malformed_path(
                        raw,
                        "path points inside the repository metadata",
                    ));
                }
                _ => {}
            }
        }

        Ok(Self {
            raw: raw.to_string(),
        })
    }

    /// Build from a filesystem path already relative to the working directory
    pub fn from_relative_path(path: &Path) -> Result<Self> {
        let display = path.to_string_lossy();
        let mut segments = Vec::new();

        for component in path.components() {
            match component {
                Component::Normal(segment) => segments.push(segment.to_str().ok_or_else(|| {
                    RepositoryError::malformed_path(display.as_ref(), "path is not valid UTF-8")
                })?),
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(RepositoryError::malformed_path(
                        display.as_ref(),
                        "path escapes the working directory",
                    ));
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(RepositoryError::malformed_path(
                        display.as_ref(),
                        "path must be relative",
                    ));
                }
            }
        }

        Self::try_parse(segments.join("/"))
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('/')
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Location of the file in the working directory rooted at `root`
    pub fn to_fs_path(&self, root: &Path) -> PathBuf {
        self.segments().fold(root.to_path_buf(), |path, segment| path.join(segment))
    }
}

impl AsRef<str> for TreePath {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
