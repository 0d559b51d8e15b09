//! Tests for configuration defaults and overrides

use anyhow::Result;
use ci_janitor::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_victim_list() {
    let config = Config::from_toml("");

    assert_eq!(
        config.reaper.victims,
        vec!["bash", "cargo", "docker", "solana"],
        "Default sweep targets the fixed build tool names"
    );
}

#[test]
fn test_default_publish_settings() {
    let config = Config::from_toml("");

    assert_eq!(config.publish.toolchain_image, "solanalabs/rust");
    assert_eq!(config.publish.image_repo, "solanalabs/solana");
    assert_eq!(config.publish.staging_dir, "target/publish");
}

#[test]
fn test_victim_list_override() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("ci-janitor.toml");
    fs::write(
        &path,
        r#"
[reaper]
victims = ["node", "npm"]
"#,
    )?;

    let config = Config::from_toml(&fs::read_to_string(&path)?);

    assert_eq!(config.reaper.victims, vec!["node", "npm"]);
    // Untouched sections keep their defaults
    assert_eq!(config.publish.image_repo, "solanalabs/solana");
    Ok(())
}

#[test]
fn test_publish_override() -> Result<()> {
    let config = Config::from_toml(
        r#"
[publish]
toolchain_image = "rust:1.80"
image_repo = "example/app"
staging_dir = "/tmp/stage"
"#,
    );

    assert_eq!(config.publish.toolchain_image, "rust:1.80");
    assert_eq!(config.publish.image_repo, "example/app");
    assert_eq!(config.publish.staging_dir, "/tmp/stage");
    assert_eq!(
        config.reaper.victims.len(),
        4,
        "Reaper section keeps its defaults"
    );
    Ok(())
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let config = Config::from_toml("this is not toml {{{");

    assert_eq!(config.reaper.victims.len(), 4);
    assert_eq!(config.publish.image_repo, "solanalabs/solana");
}
