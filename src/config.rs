use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Extension of the files to rewrite, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Prefix marking output folders; subtrees with this prefix are never
    /// re-processed, and the output folder name is built from it.
    #[serde(default = "default_output_marker")]
    pub output_marker: String,
}

fn default_extension() -> String {
    "ts".to_string()
}

fn default_output_marker() -> String {
    "_output_".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            output_marker: default_output_marker(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(extension: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".termswap.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(extension) = extension {
            config.extension = extension.trim_start_matches('.').to_string();
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.extension != default_extension() {
            self.extension = other.extension;
        }
        if other.output_marker != default_output_marker() {
            self.output_marker = other.output_marker;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "termswap").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
