// tests/config_test.rs
use git_promote::config::{load_config, Config};
use git_promote::GitPromoteError;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.branches.production, "master");
    assert_eq!(config.branches.develop, "develop");
    assert_eq!(config.remote, "origin");
}

#[test]
fn test_default_changelog_values() {
    let config = Config::default();
    assert_eq!(config.changelog.file, "CHANGELOG.md");
    assert_eq!(config.changelog.commit_message, "docs: update changelog");
    assert_eq!(config.changelog.command, "git");
    assert!(config
        .changelog
        .args
        .iter()
        .any(|arg| arg.contains("{since}")));
    assert!(config.notify.script.is_none());
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
remote = "upstream"

[branches]
production = "main"
develop = "dev"

[notify]
script = "/usr/local/bin/notify-slack.sh"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.branches.production, "main");
    assert_eq!(config.branches.develop, "dev");
    assert_eq!(
        config.notify.script,
        Some("/usr/local/bin/notify-slack.sh".to_string())
    );
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[changelog]
commit_message = "chore: changelog"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.changelog.commit_message, "chore: changelog");
    // Everything unspecified falls back to defaults
    assert_eq!(config.changelog.file, "CHANGELOG.md");
    assert_eq!(config.branches.production, "master");
    assert_eq!(config.remote, "origin");
}

#[test]
fn test_invalid_file_is_a_config_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"this is not toml = = =").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, GitPromoteError::Config(_)));
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_missing_explicit_file_is_a_config_error() {
    let err = load_config(Some("/nonexistent/gitpromote.toml")).unwrap_err();
    assert!(matches!(err, GitPromoteError::Config(_)));
    assert!(err.to_string().contains("/nonexistent/gitpromote.toml"));
}

#[test]
#[serial]
fn test_no_path_and_no_files_yields_defaults() {
    // Run the no-path chain from a clean cwd with the user config dir
    // pointed somewhere empty, so no file can be found anywhere
    let cwd_dir = tempfile::tempdir().unwrap();
    let config_home = tempfile::tempdir().unwrap();
    let original_dir = std::env::current_dir().unwrap();

    std::env::set_current_dir(cwd_dir.path()).unwrap();
    std::env::set_var("XDG_CONFIG_HOME", config_home.path());

    let result = load_config(None);

    std::env::remove_var("XDG_CONFIG_HOME");
    std::env::set_current_dir(original_dir).unwrap();

    assert_eq!(result.unwrap(), Config::default());
}

#[test]
#[serial]
fn test_no_path_picks_up_local_file() {
    let cwd_dir = tempfile::tempdir().unwrap();
    let config_home = tempfile::tempdir().unwrap();
    let original_dir = std::env::current_dir().unwrap();

    std::fs::write(
        cwd_dir.path().join("gitpromote.toml"),
        "remote = \"upstream\"\n",
    )
    .unwrap();

    std::env::set_current_dir(cwd_dir.path()).unwrap();
    std::env::set_var("XDG_CONFIG_HOME", config_home.path());

    let result = load_config(None);

    std::env::remove_var("XDG_CONFIG_HOME");
    std::env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.branches.production, "master");
}
