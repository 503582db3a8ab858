//! Version control abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations
//! the promotion sequence needs, allowing for a real system-git
//! implementation and a mock implementation for testing.
//!
//! Most code should depend on the [VcsClient] trait rather than concrete
//! implementations:
//!
//! - [system::SystemGit]: invokes the system `git` binary as subprocesses
//! - [mock::MockVcs]: scripted in-memory implementation for tests

pub mod mock;
pub mod system;

pub use mock::MockVcs;
pub use system::SystemGit;

use crate::error::Result;

/// The operations the promotion engine performs against a repository.
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result] and map command failures to
/// [crate::error::GitPromoteError::Tool] (or `Push` for remote pushes).
pub trait VcsClient: Send + Sync {
    /// Latest tag reachable from HEAD, or `None` if the repository has no
    /// tags at all. "No tags" is an explicit branch, not an error.
    fn latest_tag(&self) -> Result<Option<String>>;

    /// Checkout an existing local branch
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Merge `branch` into the currently checked-out branch, always
    /// creating a merge commit (no fast-forward)
    fn merge_no_ff(&self, branch: &str) -> Result<()>;

    /// Create an annotated tag at the current commit
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Stage a single file and commit it with the given message
    fn commit_file(&self, path: &str, message: &str) -> Result<()>;

    /// Delete a local branch
    fn delete_branch(&self, branch: &str) -> Result<()>;

    /// Push a branch to the remote
    fn push_branch(&self, remote: &str, branch: &str) -> Result<()>;

    /// Push all tags to the remote
    fn push_tags(&self, remote: &str) -> Result<()>;

    /// Delete a branch on the remote
    fn push_deletion(&self, remote: &str, branch: &str) -> Result<()>;
}
