//! Working directory access
//!
//! Reads and writes tracked files by [`TreePath`] and enumerates regular files, always
//! skipping the repository metadata directory.

use crate::artifacts::index::index_entry::EntryTime;
use crate::artifacts::snapshot::tree_path::{METADATA_DIR, TreePath};
use crate::error::{IoContext, RepositoryError, Result};
use bytes::Bytes;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    /// Turn a user-supplied path into a path relative to the working directory
    ///
    /// Absolute paths must point inside the working directory; relative paths are taken
    /// as relative to it.
    pub fn relative_path(&self, user_path: &Path) -> Result<TreePath> {
        if !user_path.is_absolute() {
            return TreePath::from_relative_path(user_path);
        }

        let normalized = Self::normalize(user_path);
        let relative = normalized.strip_prefix(&self.path).map_err(|_| {
            RepositoryError::malformed_path(
                user_path.to_string_lossy(),
                "path is outside the working directory",
            )
        })?;

        TreePath::from_relative_path(relative)
    }

    /// Like [`Workspace::relative_path`], but the working directory itself yields `None`
    pub fn pathspec(&self, user_path: &Path) -> Result<Option<TreePath>> {
        let normalized = Self::normalize(&self.path.join(user_path));

        if normalized.as_path() == &*self.path {
            return Ok(None);
        }

        self.relative_path(&normalized).map(Some)
    }

    fn normalize(path: &Path) -> PathBuf {
        path.components()
            .fold(PathBuf::new(), |mut normalized, component| {
                match component {
                    Component::CurDir => {}
                    Component::ParentDir => {
                        normalized.pop();
                    }
                    other => normalized.push(other),
                }
                normalized
            })
    }

    pub fn is_file(&self, path: &TreePath) -> bool {
        path.to_fs_path(&self.path).is_file()
    }

    pub fn is_dir(&self, path: &TreePath) -> bool {
        path.to_fs_path(&self.path).is_dir()
    }

    /// Every regular file below `root` (or the whole working directory), in path order
    ///
    /// A `root` naming a single file yields just that file.
    pub fn list_files(&self, root: Option<&TreePath>) -> Result<Vec<TreePath>> {
        let walk_root = match root {
            Some(root) => root.to_fs_path(&self.path),
            None => self.path.to_path_buf(),
        };

        if !walk_root.exists() {
            let display = root.map(TreePath::to_string).unwrap_or_default();
            return Err(RepositoryError::FileNotFound(display));
        }

        let metadata_path = self.metadata_path();
        let mut files = Vec::new();

        for entry in WalkDir::new(&walk_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.path() != metadata_path)
        {
            let entry = entry.map_err(|error| {
                let context = format!("unable to list {}", walk_root.display());
                match error.into_io_error() {
                    Some(source) => RepositoryError::Io { context, source },
                    None => RepositoryError::Io {
                        context,
                        source: std::io::ErrorKind::Other.into(),
                    },
                }
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&self.path) else {
                continue;
            };
            match TreePath::from_relative_path(relative) {
                Ok(path) => files.push(path),
                Err(error) => tracing::warn!(path = %relative.display(), %error, "skipping file"),
            }
        }

        Ok(files)
    }

    pub fn read_file(&self, path: &TreePath) -> Result<Bytes> {
        let file_path = path.to_fs_path(&self.path);

        match std::fs::read(&file_path) {
            Ok(content) => Ok(Bytes::from(content)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::FileNotFound(path.to_string()))
            }
            Err(source) => Err(RepositoryError::Io {
                context: format!("unable to read {}", file_path.display()),
                source,
            }),
        }
    }

    pub fn stat_mtime(&self, path: &TreePath) -> Result<EntryTime> {
        let file_path = path.to_fs_path(&self.path);

        match std::fs::metadata(&file_path).and_then(|metadata| metadata.modified()) {
            Ok(modified) => Ok(EntryTime::from(modified)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(RepositoryError::FileNotFound(path.to_string()))
            }
            Err(source) => Err(RepositoryError::Io {
                context: format!("unable to stat {}", file_path.display()),
                source,
            }),
        }
    }

    /// Overwrite the file at `path`, creating missing parent directories
    ///
    /// A file standing where a parent directory is needed, or a directory standing at
    /// `path`, is removed first. Returns the modification time after the write.
    pub fn write_file(&self, path: &TreePath, content: &[u8]) -> Result<EntryTime> {
        let file_path = path.to_fs_path(&self.path);

        if let Some(parent) = file_path.parent() {
            self.make_parent_dirs(parent)?;
        }
        if file_path.is_dir() {
            std::fs::remove_dir_all(&file_path)
                .io_context(|| format!("unable to remove directory {}", file_path.display()))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .io_context(|| format!("unable to open {}", file_path.display()))?;
        file.write_all(content)
            .io_context(|| format!("unable to write {}", file_path.display()))?;
        drop(file);

        self.stat_mtime(path)
    }

    fn make_parent_dirs(&self, dir_path: &Path) -> Result<()> {
        let mut current = self.path.to_path_buf();

        for component in dir_path.strip_prefix(&self.path).unwrap_or(dir_path).components() {
            current.push(component);

            if current.is_file() {
                std::fs::remove_file(&current)
                    .io_context(|| format!("unable to remove file {}", current.display()))?;
            }
            if !current.is_dir() {
                std::fs::create_dir(&current)
                    .io_context(|| format!("unable to create directory {}", current.display()))?;
            }
        }

        Ok(())
    }
}
