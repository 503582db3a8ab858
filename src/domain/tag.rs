use crate::error::{GitPromoteError, Result};

/// Represents the annotated tag derived from a source branch name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a tag from an already-derived name
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Derive the tag name from a branch name.
    ///
    /// Takes everything after the first `/` as the tag name, so any
    /// single-level branch prefix works (`release/1.2.3` -> `1.2.3`,
    /// `hotfix/1.2.4` -> `1.2.4`). The prefix vocabulary is deliberately
    /// not checked; only the separator split matters.
    ///
    /// # Returns
    /// * `Ok(Tag)` - Branch contains a separator and a non-empty remainder
    /// * `Err` - No separator, or nothing after it
    pub fn from_branch(branch: &str) -> Result<Tag> {
        match branch.split_once('/') {
            Some((_, rest)) if !rest.is_empty() => Ok(Tag::new(rest)),
            Some(_) => Err(GitPromoteError::parse(format!(
                "Branch '{}' has nothing after its prefix",
                branch
            ))),
            None => Err(GitPromoteError::parse(format!(
                "Branch '{}' has no '<prefix>/<version>' form",
                branch
            ))),
        }
    }

    /// Message used for the annotated tag object (the tag name itself)
    pub fn annotation(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
