use crate::error::{GitPromoteError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for git-promote.
///
/// Contains the branch line names, the remote, changelog generation
/// settings, and the optional notification hook.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub branches: BranchesConfig,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub notify: NotifyConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Names of the long-lived branch lines a promotion targets.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BranchesConfig {
    #[serde(default = "default_production_branch")]
    pub production: String,

    #[serde(default = "default_develop_branch")]
    pub develop: String,
}

fn default_production_branch() -> String {
    "master".to_string()
}

fn default_develop_branch() -> String {
    "develop".to_string()
}

impl Default for BranchesConfig {
    fn default() -> Self {
        BranchesConfig {
            production: default_production_branch(),
            develop: default_develop_branch(),
        }
    }
}

/// Configuration for changelog generation.
///
/// The command is run with `{since}` in its arguments replaced by the
/// latest tag (or "0.0.0" when the repository has none); its stdout
/// becomes the changelog content.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_file")]
    pub file: String,

    #[serde(default = "default_changelog_commit_message")]
    pub commit_message: String,

    #[serde(default = "default_changelog_command")]
    pub command: String,

    #[serde(default = "default_changelog_args")]
    pub args: Vec<String>,
}

fn default_changelog_file() -> String {
    "CHANGELOG.md".to_string()
}

fn default_changelog_commit_message() -> String {
    "docs: update changelog".to_string()
}

fn default_changelog_command() -> String {
    "git".to_string()
}

fn default_changelog_args() -> Vec<String> {
    vec![
        "log".to_string(),
        "--no-merges".to_string(),
        "--pretty=format:- %s".to_string(),
        "{since}..HEAD".to_string(),
    ]
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            file: default_changelog_file(),
            commit_message: default_changelog_commit_message(),
            command: default_changelog_command(),
            args: default_changelog_args(),
        }
    }
}

/// Configuration for the notification hook.
///
/// When a script is configured it is invoked once per event with
/// GIT_PROMOTE_* environment variables; without one, events are only
/// printed to the console.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct NotifyConfig {
    #[serde(default)]
    pub script: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branches: BranchesConfig::default(),
            remote: default_remote(),
            changelog: ChangelogConfig::default(),
            notify: NotifyConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitpromote.toml` in current directory
/// 3. `~/.config/.gitpromote.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - [GitPromoteError::Config] if a file exists but cannot be
///   read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        read_config_file(Path::new(path))?
    } else if Path::new("./gitpromote.toml").exists() {
        read_config_file(Path::new("./gitpromote.toml"))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitpromote.toml");
        if config_path.exists() {
            read_config_file(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| GitPromoteError::config(format!("Failed to parse configuration: {}", e)))
}

fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        GitPromoteError::config(format!("Failed to read {}: {}", path.display(), e))
    })
}
