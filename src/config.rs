//! Configuration loading for ci-janitor

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reaper: ReaperConfig,
    pub publish: PublishConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReaperConfig {
    /// Executable names targeted by the orphan sweep
    pub victims: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Toolchain container image the release build runs inside
    pub toolchain_image: String,
    /// Registry repository the published image is tagged under
    pub image_repo: String,
    /// Local directory build artifacts are staged into
    pub staging_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reaper: ReaperConfig::default(),
            publish: PublishConfig::default(),
        }
    }
}

impl Default for ReaperConfig {
    fn default() -> Self {
        Self {
            victims: ["bash", "cargo", "docker", "solana"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            toolchain_image: "solanalabs/rust".to_string(),
            image_repo: "solanalabs/solana".to_string(),
            staging_dir: "target/publish".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let paths = [
            dirs::config_dir().map(|p| p.join("ci-janitor/config.toml")),
            dirs::home_dir().map(|p| p.join(".ci-janitor.toml")),
            Some(PathBuf::from("ci-janitor.toml")),
        ];

        for path in paths.into_iter().flatten() {
            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }

        Config::default()
    }

    /// Parse a config from TOML text, falling back to defaults on error
    pub fn from_toml(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }
}
