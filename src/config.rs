use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_LANGUAGE_PREFIX: &str = "language-";

/// Files tried, in order, when no config path is given.
pub const CONFIG_CANDIDATES: &[&str] = &["codeclass.config.json", "config/codeclass.config.json"];

/// How a fence's meta string is cut into class names.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MetaSplit {
    /// Split on runs of whitespace; no empty tokens.
    #[default]
    Whitespace,
    /// Split on every single space; consecutive spaces yield empty tokens.
    Space,
}

impl FromStr for MetaSplit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "whitespace" => Ok(MetaSplit::Whitespace),
            "space" => Ok(MetaSplit::Space),
            _ => Err(Error::InvalidMetaSplit(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Extensions {
    #[serde(default = "default_true")]
    pub tables: bool,

    #[serde(default = "default_true")]
    pub strikethrough: bool,

    #[serde(default = "default_true")]
    pub tasklists: bool,

    #[serde(default)]
    pub footnotes: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Extensions {
            tables: true,
            strikethrough: true,
            tasklists: true,
            footnotes: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_language_prefix")]
    pub language_prefix: String,

    #[serde(default)]
    pub meta_split: MetaSplit,

    #[serde(default = "default_true")]
    pub annotate: bool,

    #[serde(default = "default_true")]
    pub promote: bool,

    #[serde(default)]
    pub extensions: Extensions,

    #[serde(default)]
    pub standalone: bool,
}

fn default_language_prefix() -> String {
    DEFAULT_LANGUAGE_PREFIX.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            language_prefix: default_language_prefix(),
            meta_split: MetaSplit::Whitespace,
            annotate: true,
            promote: true,
            extensions: Extensions::default(),
            standalone: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the first config file found under `dir`, or the defaults.
    pub fn discover(dir: &Path) -> Result<Config> {
        for candidate in CONFIG_CANDIDATES {
            let path: PathBuf = dir.join(candidate);
            if path.is_file() {
                log::debug!("using config {}", path.display());
                return Config::load(&path);
            }
        }
        Ok(Config::default())
    }
}
