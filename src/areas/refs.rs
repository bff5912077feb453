//! References: HEAD and branches
//!
//! ## File Format
//!
//! - `HEAD` holds either `ref: refs/heads/<branch>` or a 40-character digest (detached)
//! - `refs/heads/<branch>` holds the digest of the branch's head commit
//!
//! A branch file only exists once the branch has a commit.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::{IoContext, RepositoryError, Result};
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

pub const HEAD_REF_NAME: &str = "HEAD";

/// Current position in history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// HEAD follows a branch
    Branch(BranchName),
    /// HEAD holds a bare commit digest
    Detached(ObjectId),
}

impl std::fmt::Display for Head {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Head::Branch(branch) => write!(f, "ref: {}", branch.to_ref_path()),
            Head::Detached(oid) => write!(f, "{oid}"),
        }
    }
}

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (`.twig`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_REF_NAME)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    fn branch_path(&self, branch: &BranchName) -> PathBuf {
        self.path.join(branch.to_ref_path())
    }

    pub fn read_head(&self) -> Result<Head> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .io_context(|| format!("unable to read {}", head_path.display()))?;
        let content = content.trim();

        let symref = regex::Regex::new(SYMREF_REGEX)
            .ok()
            .and_then(|re| re.captures(content))
            .map(|captures| captures[1].to_string());

        match symref {
            Some(ref_path) => Ok(Head::Branch(BranchName::try_parse_ref_path(&ref_path)?)),
            None => ObjectId::try_parse(content)
                .map(Head::Detached)
                .ok_or_else(|| RepositoryError::corrupt(HEAD_REF_NAME, "invalid HEAD content")),
        }
    }

    /// Digest HEAD currently resolves to; `None` on a branch without commits
    pub fn head_oid(&self) -> Result<Option<ObjectId>> {
        match self.read_head()? {
            Head::Branch(branch) => self.read_branch(&branch),
            Head::Detached(oid) => Ok(Some(oid)),
        }
    }

    pub fn current_branch(&self) -> Result<Option<BranchName>> {
        match self.read_head()? {
            Head::Branch(branch) => Ok(Some(branch)),
            Head::Detached(_) => Ok(None),
        }
    }

    pub fn branch_exists(&self, branch: &BranchName) -> bool {
        self.branch_path(branch).is_file()
    }

    pub fn read_branch(&self, branch: &BranchName) -> Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch);
        if !branch_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .io_context(|| format!("unable to read ref {}", branch_path.display()))?;

        ObjectId::try_parse(content.trim())
            .map(Some)
            .ok_or_else(|| RepositoryError::corrupt(branch.to_ref_path(), "invalid ref content"))
    }

    pub fn update_branch(&self, branch: &BranchName, oid: &ObjectId) -> Result<()> {
        self.update_ref_file(&self.branch_path(branch), oid.as_ref())?;
        tracing::debug!(branch = %branch, oid = %oid, "updated branch");

        Ok(())
    }

    pub fn set_head(&self, head: &Head) -> Result<()> {
        self.update_ref_file(&self.head_path(), &head.to_string())?;
        tracing::debug!(head = %head, "updated HEAD");

        Ok(())
    }

    /// Write HEAD unless it already exists
    pub fn init_head(&self, branch: &BranchName) -> Result<()> {
        if self.head_path().exists() {
            return Ok(());
        }

        self.set_head(&Head::Branch(branch.clone()))
    }

    fn update_ref_file(&self, path: &Path, raw_ref: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .io_context(|| format!("unable to create directory {}", parent.display()))?;
        }

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .io_context(|| format!("unable to open ref file {}", path.display()))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)
            .io_context(|| format!("unable to lock ref file {}", path.display()))?;
        lock.deref_mut()
            .write_all(format!("{raw_ref}\n").as_bytes())
            .io_context(|| format!("unable to write ref file {}", path.display()))
    }
}
