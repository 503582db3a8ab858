use crate::config::ChangelogConfig;
use crate::error::{GitPromoteError, Result};
use crate::git::VcsClient;
use std::path::Path;
use std::process::Command;

/// Fallback "since" tag used when the repository carries no tags yet, so a
/// first-ever promotion still produces a changelog covering full history.
pub const INITIAL_TAG: &str = "0.0.0";

/// Versioned release notes produced for one promotion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    /// Tag the changelog is scoped after
    pub since_tag: String,
    /// Generated release notes text
    pub content: String,
}

/// External changelog generation, abstracted for testing
pub trait ChangelogTool: Send + Sync {
    /// Produce release notes covering commits after `since_tag`
    fn generate(&self, since_tag: &str) -> Result<String>;
}

/// [ChangelogTool] backed by a configured external command.
///
/// Runs the configured program with `{since}` in its arguments replaced by
/// the since-tag and captures stdout as the changelog content.
pub struct CommandChangelog {
    program: String,
    args: Vec<String>,
}

impl CommandChangelog {
    pub fn from_config(config: &ChangelogConfig) -> Self {
        CommandChangelog {
            program: config.command.clone(),
            args: config.args.clone(),
        }
    }
}

impl ChangelogTool for CommandChangelog {
    fn generate(&self, since_tag: &str) -> Result<String> {
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace("{since}", since_tag))
            .collect();

        let output = Command::new(&self.program).args(&args).output().map_err(|e| {
            GitPromoteError::tool(format!("Failed to run changelog command '{}': {}", self.program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitPromoteError::tool(format!(
                "Changelog command '{}' failed with exit code {}: {}",
                self.program,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Generate the changelog and commit it to the current branch.
///
/// The since-tag comes from the repository's latest tag; a repository with
/// no tags at all is an explicit branch defaulting to [INITIAL_TAG], not an
/// error. The content is written to the configured file and committed with
/// the configured fixed message. Tool or commit failure is fatal to the run.
pub fn generate_and_commit(
    client: &dyn VcsClient,
    tool: &dyn ChangelogTool,
    config: &ChangelogConfig,
) -> Result<Changelog> {
    let since_tag = match client.latest_tag()? {
        Some(tag) => tag,
        None => INITIAL_TAG.to_string(),
    };

    let content = tool.generate(&since_tag)?;

    std::fs::write(Path::new(&config.file), &content)?;
    client.commit_file(&config.file, &config.commit_message)?;

    Ok(Changelog { since_tag, content })
}
