//! Repository context
//!
//! A [`Repository`] owns one working directory and its `.twig` metadata: object store,
//! staging index, refs and workspace. Every operation goes through a value of this
//! type, so nothing about the current repository lives in process-wide state.

use crate::areas::config::RepositoryConfig;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::snapshot::tree_editor::TreeEditor;
use crate::artifacts::snapshot::tree_path::METADATA_DIR;
use crate::error::{RepositoryError, Result};
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Assemble the areas of the repository rooted at `path` without touching the disk
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Self {
        let metadata_path = path.join(METADATA_DIR);

        Repository {
            path: path.to_path_buf().into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(Index::new(metadata_path.join("index").into_boxed_path())),
            database: Database::new(metadata_path.join("objects").into_boxed_path()),
            workspace: Workspace::new(path.to_path_buf().into_boxed_path()),
            refs: Refs::new(metadata_path.into_boxed_path()),
        }
    }

    /// Open an existing repository whose working directory is `path`
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let metadata_path = path.join(METADATA_DIR);
        if !metadata_path.is_dir() {
            return Err(RepositoryError::NotARepository {
                path: path.to_path_buf(),
                source: None,
            });
        }

        RepositoryConfig::load(&metadata_path.join("config"))?.check_format_version()?;
        tracing::debug!(path = %path.display(), "opened repository");

        Ok(Self::new(path, writer))
    }

    /// Open the repository containing `start`, looking at `start` and then its ancestors
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let root = Self::find_root(start).ok_or_else(|| RepositoryError::NotARepository {
            path: start.to_path_buf(),
            source: None,
        })?;

        Self::open(&root, writer)
    }

    fn find_root(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(METADATA_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn tree_editor(&self) -> TreeEditor<'_> {
        TreeEditor::new(&self.database)
    }
}
