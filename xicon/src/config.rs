use anyhow::{Context, Result};
use mipmap::{Color, Density};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = "icons.yaml";

/// Settings read from `icons.yaml`. Unset keys fall back to the built in
/// defaults; command line flags take precedence over both.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub res: Option<PathBuf>,
    pub color: Option<Color>,
    pub inset: Option<u32>,
    pub densities: Option<Vec<Density>>,
}

impl Config {
    /// Reads `explicit` if given, which then has to exist. Otherwise reads
    /// `icons.yaml` from the working directory when present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::open(path),
            None => Self::parse(DEFAULT_CONFIG),
        }
    }

    /// Like [`Config::open`], but a missing file yields the defaults.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Default::default());
        }
        Self::open(path)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Default::default());
        }
        let config = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }
}
