use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::error::{RepositoryError, Result};

pub const REF_PREFIX: &str = "refs/heads/";

pub const DEFAULT_BRANCH: &str = "master";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(RepositoryError::UnknownBranch(name))
        }
    }

    pub fn is_valid(name: &str) -> bool {
        !name.is_empty()
            && regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
                .map(|re| !re.is_match(name))
                .unwrap_or(false)
    }

    /// Parse the target of a symbolic ref such as `refs/heads/master`
    pub fn try_parse_ref_path(ref_path: &str) -> Result<Self> {
        let name = ref_path
            .strip_prefix(REF_PREFIX)
            .ok_or_else(|| RepositoryError::UnknownBranch(ref_path.to_string()))?;

        Self::try_parse(name)
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }

    pub fn to_ref_path(&self) -> String {
        format!("{REF_PREFIX}{}", self.0)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
