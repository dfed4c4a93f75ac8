use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use globset::Glob;
use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Name of the configuration file looked up in the walked directory.
pub const CONFIG_FILE_NAME: &str = "geng.toml";

/// Root schema for geng.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Settings of the `interface` generator
    #[serde(default)]
    pub interface: InterfaceConfig,
}

/// `[interface]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceConfig {
    /// Glob patterns of files and directories to leave out of the walk
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse a geng.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse and validate a configuration.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    for pattern in &config.interface.exclude {
        Glob::new(pattern).map_err(|e| source_ctx.pattern_error(pattern, e))?;
    }

    Ok(config)
}

/// Represents a geng.toml file with both its location and parsed config.
#[derive(Debug)]
pub struct GengToml {
    path: PathBuf,
    config: Config,
}

impl GengToml {
    /// Open and parse a geng.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, config })
    }

    /// Open `<dir>/geng.toml` if it exists.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::open(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the file and return the parsed config.
    pub fn into_config(self) -> Config {
        self.config
    }
}
