use crate::areas::database::Database;
use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{ANCESTOR_REGEX, MIN_ABBREVIATED_OID_LENGTH, PARENT_REGEX, REF_ALIASES};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::error::{RepositoryError, Result};

/// A revision expression naming a commit
///
/// Supported forms:
/// - `HEAD` and its alias `@`
/// - Branch names: `master`, `feature/x`
/// - Full digests (40 hex characters), taken as-is
/// - Abbreviated digests (4 to 39 hex characters) when no branch has that name
/// - Parent notation: `<revision>^`
/// - Ancestor notation: `<revision>~<n>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// HEAD, a branch name or a digest
    Ref(BranchName),
    /// The Nth ancestor of a revision (e.g., HEAD~3)
    Ancestor(Box<Revision>, usize),
    /// The parent of a revision (e.g., HEAD^)
    Parent(Box<Revision>),
}

impl Revision {
    pub fn try_parse(revision: &str) -> Result<Revision> {
        if let Some(base_rev) = Self::capture(PARENT_REGEX, revision, 1) {
            let base_revision = Self::try_parse(&base_rev)?;

            Ok(Revision::Parent(Box::new(base_revision)))
        } else if let Some(base_rev) = Self::capture(ANCESTOR_REGEX, revision, 1) {
            let generations = Self::capture(ANCESTOR_REGEX, revision, 2)
                .and_then(|generations| generations.parse::<usize>().ok())
                .ok_or_else(|| RepositoryError::RevisionNotFound(revision.to_string()))?;
            let base_revision = Self::try_parse(&base_rev)?;

            Ok(Revision::Ancestor(Box::new(base_revision), generations))
        } else {
            let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);
            let branch_name = BranchName::try_parse(resolved_name)
                .map_err(|_| RepositoryError::RevisionNotFound(revision.to_string()))?;

            Ok(Revision::Ref(branch_name))
        }
    }

    fn capture(pattern: &str, revision: &str, group: usize) -> Option<String> {
        regex::Regex::new(pattern)
            .ok()?
            .captures(revision)?
            .get(group)
            .map(|capture| capture.as_str().to_string())
    }

    /// Branch this revision names, if it is a plain name of an existing branch
    pub fn branch(&self, repository: &Repository) -> Option<BranchName> {
        match self {
            Revision::Ref(name)
                if name.as_ref() != HEAD_REF_NAME
                    && !ObjectId::is_full_hex(name.as_ref())
                    && repository.refs().branch_exists(name) =>
            {
                Some(name.clone())
            }
            _ => None,
        }
    }

    /// Commit digest this revision points at, `None` when it points nowhere
    pub fn resolve(&self, repository: &Repository) -> Result<Option<ObjectId>> {
        match self {
            Revision::Ref(name) => Self::resolve_ref(name, repository),
            Revision::Parent(base_revision) => match base_revision.resolve(repository)? {
                Some(oid) => nth_ancestor(repository.database(), &oid, 1),
                None => Ok(None),
            },
            Revision::Ancestor(base_revision, generations) => {
                match base_revision.resolve(repository)? {
                    Some(oid) => nth_ancestor(repository.database(), &oid, *generations),
                    None => Ok(None),
                }
            }
        }
    }

    fn resolve_ref(name: &BranchName, repository: &Repository) -> Result<Option<ObjectId>> {
        let name_str = name.as_ref();

        if name_str == HEAD_REF_NAME {
            return repository.refs().head_oid();
        }
        if let Some(oid) = ObjectId::try_parse(name_str) {
            return Ok(Some(oid));
        }
        if let Some(oid) = repository.refs().read_branch(name)? {
            return Ok(Some(oid));
        }
        if Self::looks_like_abbreviated_oid(name_str) {
            return Self::resolve_abbreviated_oid(name_str, repository.database());
        }

        Ok(None)
    }

    fn resolve_abbreviated_oid(prefix: &str, database: &Database) -> Result<Option<ObjectId>> {
        let prefix = prefix.to_ascii_lowercase();
        let mut commits = Vec::new();
        for oid in database.find_objects_by_prefix(&prefix)? {
            if database.object_type(&oid)? == ObjectType::Commit {
                commits.push(oid);
            }
        }

        match commits.len() {
            0 => Ok(None),
            1 => Ok(commits.pop()),
            _ => Err(RepositoryError::AmbiguousRevision {
                prefix,
                candidates: commits.iter().map(ObjectId::to_short_oid).collect(),
            }),
        }
    }

    pub fn looks_like_abbreviated_oid(s: &str) -> bool {
        (MIN_ABBREVIATED_OID_LENGTH..OBJECT_ID_LENGTH).contains(&s.len())
            && s.chars().all(|c| c.is_ascii_hexdigit())
    }
}

/// Walk `n` parent links from `start`; `None` if history ends first
pub fn nth_ancestor(database: &Database, start: &ObjectId, n: usize) -> Result<Option<ObjectId>> {
    let mut current = start.clone();

    for _ in 0..n {
        match database.load_commit(&current)?.parent() {
            Some(parent) => current = parent.clone(),
            None => return Ok(None),
        }
    }

    Ok(Some(current))
}
