//! Repository error kinds
//!
//! Every core operation returns [`Result`], which either succeeds or fails with exactly
//! one [`RepositoryError`]. Failures that originate in an underlying component
//! (filesystem, decompression, config parsing) keep it as their `source`, so the
//! whole cause chain reaches the caller.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;

/// Boxed underlying cause carried by some error kinds
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("not a twig repository: {path}")]
    NotARepository {
        path: PathBuf,
        #[source]
        source: Option<BoxedCause>,
    },

    #[error("unsupported repository format: {reason}")]
    UnsupportedFormat {
        reason: String,
        #[source]
        source: Option<BoxedCause>,
    },

    #[error("pathspec '{0}' did not match any files")]
    FileNotFound(String),

    #[error("pathspec '{0}' is not tracked")]
    NotTracked(String),

    #[error("'{0}' is already staged and unchanged")]
    NoOpStage(String),

    #[error("nothing to commit, staged tree is identical to HEAD")]
    NoChanges,

    #[error("cannot commit while HEAD is detached")]
    DetachedHead,

    #[error("branch '{0}' does not exist")]
    UnknownBranch(String),

    #[error("current branch does not have any commits yet")]
    NoCommitsYet,

    #[error("path '{0}' is not part of the HEAD commit")]
    PathNotInCommit(String),

    #[error(
        "the following untracked working tree files would be removed: {}",
        paths.join(", ")
    )]
    UntrackedInTheWay { paths: Vec<String> },

    #[error("malformed path '{path}': {reason}")]
    MalformedPath { path: String, reason: String },

    #[error("corrupt object {oid}: {reason}")]
    CorruptObject {
        oid: String,
        reason: String,
        #[source]
        source: Option<BoxedCause>,
    },

    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("short object id {prefix} is ambiguous, candidates: {}", candidates.join(", "))]
    AmbiguousRevision {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error("unknown revision '{0}'")]
    RevisionNotFound(String),

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

impl RepositoryError {
    pub fn malformed_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        RepositoryError::MalformedPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn corrupt(oid: impl ToString, reason: impl Into<String>) -> Self {
        RepositoryError::CorruptObject {
            oid: oid.to_string(),
            reason: reason.into(),
            source: None,
        }
    }

    pub fn corrupt_with(
        oid: impl ToString,
        reason: impl Into<String>,
        source: impl Into<BoxedCause>,
    ) -> Self {
        RepositoryError::CorruptObject {
            oid: oid.to_string(),
            reason: reason.into(),
            source: Some(source.into()),
        }
    }

    pub fn unsupported_format(reason: impl Into<String>) -> Self {
        RepositoryError::UnsupportedFormat {
            reason: reason.into(),
            source: None,
        }
    }
}

/// Attach a human-readable context to I/O failures
///
/// Mirrors `anyhow::Context` for the typed error: the `std::io::Error` is kept as the
/// source of the resulting [`RepositoryError::Io`].
pub trait IoContext<T> {
    fn io_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|source| RepositoryError::Io {
            context: context().into(),
            source,
        })
    }
}
