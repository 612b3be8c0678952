//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dirscript/dirscript.toml`
//! 3. Local config: `./.dirscript.toml`
//! 4. Environment variables: `DIRSCRIPT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;

/// Runtime settings for a dirscript invocation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Command file read when no override is passed on the command line
    pub command_file: PathBuf,
    /// Name of the (never printed) root directory
    pub root_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            command_file: PathBuf::from("commands.txt"),
            root_name: "root".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default(
                "command_file",
                defaults.command_file.to_string_lossy().to_string(),
            )?
            .set_default("root_name", defaults.root_name)?;

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                builder = builder.add_source(File::from(global));
            }
        }

        let local = Path::new(".dirscript.toml");
        if local.exists() {
            builder = builder.add_source(File::from(local.to_path_buf()));
        }

        builder = builder.add_source(Environment::with_prefix("DIRSCRIPT"));

        builder.build()?.try_deserialize()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dirscript")
            .map(|dirs| dirs.config_dir().join("dirscript.toml"))
    }
}
