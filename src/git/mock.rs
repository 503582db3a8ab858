use crate::error::{GitPromoteError, Result};
use crate::git::VcsClient;
use std::collections::HashSet;
use std::sync::Mutex;

/// Mock client for testing the promotion sequence without a real repository.
///
/// Records every operation in order, supports failure injection by
/// operation prefix, and models merge idempotence: merging a source that
/// was already merged into the same target records no new merge commit.
pub struct MockVcs {
    state: Mutex<State>,
}

struct State {
    current_branch: String,
    latest_tag: Option<String>,
    tags: Vec<String>,
    merged: HashSet<(String, String)>,
    merge_commits: Vec<(String, String)>,
    operations: Vec<String>,
    fail_on: Option<String>,
}

impl MockVcs {
    /// Create a new mock with no tags and `master` checked out
    pub fn new() -> Self {
        MockVcs {
            state: Mutex::new(State {
                current_branch: "master".to_string(),
                latest_tag: None,
                tags: Vec::new(),
                merged: HashSet::new(),
                merge_commits: Vec::new(),
                operations: Vec::new(),
                fail_on: None,
            }),
        }
    }

    /// Pretend the repository already carries this tag
    pub fn with_latest_tag(self, tag: impl Into<String>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let tag = tag.into();
            state.tags.push(tag.clone());
            state.latest_tag = Some(tag);
        }
        self
    }

    /// Fail the first operation whose log entry starts with `prefix`
    /// (e.g. `"tag"`, `"merge develop"`, `"push"`)
    pub fn set_fail_on(&self, prefix: impl Into<String>) {
        self.state.lock().unwrap().fail_on = Some(prefix.into());
    }

    /// Remove the injected failure (simulates external remediation)
    pub fn clear_fail(&self) {
        self.state.lock().unwrap().fail_on = None;
    }

    /// All operations recorded so far, in order
    pub fn operations(&self) -> Vec<String> {
        self.state.lock().unwrap().operations.clone()
    }

    /// Merge commits created, as (target, source) pairs
    pub fn merge_commits(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().merge_commits.clone()
    }

    /// Tags created (plus any seeded via [MockVcs::with_latest_tag])
    pub fn tags(&self) -> Vec<String> {
        self.state.lock().unwrap().tags.clone()
    }

    fn record(&self, op: String) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let should_fail = state
            .fail_on
            .as_ref()
            .is_some_and(|prefix| op.starts_with(prefix.as_str()));
        state.operations.push(op.clone());
        if should_fail {
            return Err(GitPromoteError::tool(format!("injected failure: {}", op)));
        }
        Ok(())
    }
}

impl Default for MockVcs {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsClient for MockVcs {
    fn latest_tag(&self) -> Result<Option<String>> {
        Ok(self.state.lock().unwrap().latest_tag.clone())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.record(format!("checkout {}", branch))?;
        self.state.lock().unwrap().current_branch = branch.to_string();
        Ok(())
    }

    fn merge_no_ff(&self, branch: &str) -> Result<()> {
        let target = self.state.lock().unwrap().current_branch.clone();
        self.record(format!("merge {} <- {}", target, branch))?;

        let mut state = self.state.lock().unwrap();
        let key = (target.clone(), branch.to_string());
        // Already-applied merges are no-ops, like real git
        if state.merged.insert(key) {
            state.merge_commits.push((target, branch.to_string()));
        }
        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.record(format!("tag {} -m {}", name, message))?;
        let mut state = self.state.lock().unwrap();
        state.tags.push(name.to_string());
        state.latest_tag = Some(name.to_string());
        Ok(())
    }

    fn commit_file(&self, path: &str, message: &str) -> Result<()> {
        self.record(format!("commit {} -m {}", path, message))
    }

    fn delete_branch(&self, branch: &str) -> Result<()> {
        self.record(format!("delete-branch {}", branch))
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("push {} {}", remote, branch))
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        self.record(format!("push {} --tags", remote))
    }

    fn push_deletion(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("push {} --delete {}", remote, branch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_operations() {
        let vcs = MockVcs::new();
        vcs.checkout("release/1.0.0").unwrap();
        vcs.checkout("master").unwrap();
        vcs.merge_no_ff("release/1.0.0").unwrap();

        let ops = vcs.operations();
        assert_eq!(ops[0], "checkout release/1.0.0");
        assert_eq!(ops[2], "merge master <- release/1.0.0");
    }

    #[test]
    fn test_mock_latest_tag() {
        let vcs = MockVcs::new();
        assert_eq!(vcs.latest_tag().unwrap(), None);

        let vcs = MockVcs::new().with_latest_tag("1.0.0");
        assert_eq!(vcs.latest_tag().unwrap(), Some("1.0.0".to_string()));
    }

    #[test]
    fn test_mock_tag_updates_latest() {
        let vcs = MockVcs::new();
        vcs.create_annotated_tag("1.2.3", "1.2.3").unwrap();
        assert_eq!(vcs.latest_tag().unwrap(), Some("1.2.3".to_string()));
        assert_eq!(vcs.tags(), vec!["1.2.3".to_string()]);
    }

    #[test]
    fn test_mock_merge_is_idempotent() {
        let vcs = MockVcs::new();
        vcs.checkout("master").unwrap();
        vcs.merge_no_ff("release/1.0.0").unwrap();
        vcs.merge_no_ff("release/1.0.0").unwrap();

        // Second merge of the same source into the same target is a no-op
        assert_eq!(vcs.merge_commits().len(), 1);

        vcs.checkout("develop").unwrap();
        vcs.merge_no_ff("release/1.0.0").unwrap();
        assert_eq!(vcs.merge_commits().len(), 2);
    }

    #[test]
    fn test_mock_failure_injection() {
        let vcs = MockVcs::new();
        vcs.set_fail_on("tag");

        vcs.checkout("master").unwrap();
        let err = vcs.create_annotated_tag("1.0.0", "1.0.0").unwrap_err();
        assert!(err.to_string().contains("injected failure"));

        vcs.clear_fail();
        assert!(vcs.create_annotated_tag("1.0.0", "1.0.0").is_ok());
    }

    #[test]
    fn test_mock_failure_injection_by_prefix() {
        let vcs = MockVcs::new();
        vcs.set_fail_on("merge develop");

        vcs.checkout("master").unwrap();
        assert!(vcs.merge_no_ff("release/1.0.0").is_ok());
        vcs.checkout("develop").unwrap();
        assert!(vcs.merge_no_ff("release/1.0.0").is_err());
    }
}
