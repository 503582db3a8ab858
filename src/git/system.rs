//! System git backend
//!
//! Invokes the system `git` binary as subprocesses. Local operations run
//! with an isolated environment; remote operations keep the host
//! environment so its credential mechanism works. Non-zero exits become
//! [GitPromoteError::Tool] (pushes become [GitPromoteError::Push]); stderr
//! is carried in the message.

use crate::error::{GitPromoteError, Result};
use crate::git::VcsClient;
use std::path::{Path, PathBuf};
use std::process::Command;

/// [VcsClient] implementation backed by the system `git` binary
pub struct SystemGit {
    /// Repository working directory
    repo_path: PathBuf,
}

impl SystemGit {
    /// Open a git repository at `path`.
    ///
    /// Performs one subprocess call to verify the path is inside a
    /// working tree.
    pub fn open(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .arg("-C")
            .arg(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitPromoteError::tool(format!(
                "Failed to open git repository at {}: {}",
                path.display(),
                stderr.trim()
            )));
        }

        Ok(SystemGit {
            repo_path: path.to_path_buf(),
        })
    }

    /// Create a git command for local operations, with an isolated
    /// environment.
    ///
    /// Pins the working directory with `-C`, clears the environment and
    /// whitelists only PATH and HOME so ambient CI variables can't change
    /// merge/tag behavior mid-sequence.
    fn git_cmd(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.repo_path);

        cmd.env_clear();
        if let Ok(path) = std::env::var("PATH") {
            cmd.env("PATH", path);
        }
        if let Ok(home) = std::env::var("HOME") {
            cmd.env("HOME", home);
        }

        cmd.arg("-c").arg("advice.detachedHead=false");
        cmd
    }

    /// Create a git command for remote operations, keeping the host
    /// environment.
    ///
    /// Credentials are the host's mechanism (ssh-agent, GIT_SSH_COMMAND,
    /// askpass helpers, ...), injected through environment variables that
    /// must reach the push subprocess intact.
    fn git_cmd_remote(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.repo_path);
        cmd
    }

    /// Run a git subcommand, mapping a non-zero exit to a Tool error
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.git_cmd().args(args).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitPromoteError::tool(format!(
                "git {}: {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Run a git push, mapping a non-zero exit to a Push error
    fn run_push(&self, args: &[&str]) -> Result<()> {
        let output = self.git_cmd_remote().args(args).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitPromoteError::push(format!(
                "git {}: {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        Ok(())
    }
}

impl VcsClient for SystemGit {
    fn latest_tag(&self) -> Result<Option<String>> {
        let output = self
            .git_cmd()
            .args(["describe", "--tags", "--abbrev=0"])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // An untagged repository is not an error for us
            if stderr.contains("No names found")
                || stderr.contains("No tags can describe")
                || stderr.contains("cannot describe")
            {
                return Ok(None);
            }
            return Err(GitPromoteError::tool(format!(
                "git describe --tags: {}",
                stderr.trim()
            )));
        }

        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if tag.is_empty() {
            Ok(None)
        } else {
            Ok(Some(tag))
        }
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", branch]).map(|_| ())
    }

    fn merge_no_ff(&self, branch: &str) -> Result<()> {
        self.run(&["merge", "--no-ff", "--no-edit", branch])
            .map(|_| ())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.run(&["tag", "-a", name, "-m", message]).map(|_| ())
    }

    fn commit_file(&self, path: &str, message: &str) -> Result<()> {
        self.run(&["add", path])?;
        self.run(&["commit", "-m", message]).map(|_| ())
    }

    fn delete_branch(&self, branch: &str) -> Result<()> {
        self.run(&["branch", "-D", branch]).map(|_| ())
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_push(&["push", remote, branch])
    }

    fn push_tags(&self, remote: &str) -> Result<()> {
        self.run_push(&["push", remote, "--tags"])
    }

    fn push_deletion(&self, remote: &str, branch: &str) -> Result<()> {
        self.run_push(&["push", remote, "--delete", branch])
    }
}
