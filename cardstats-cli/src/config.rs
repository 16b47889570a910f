use anyhow::{Context, Result};
use cardstats_ingest::DEFAULT_TABLE_SELECTOR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{cardstats_home, ensure_cardstats_home};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub source: SourceSection,
    #[serde(default)]
    pub colors: ColorsSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSection {
    /// CSS selector for the statement table body
    pub selector: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorsSection {
    /// Fixed palette seed; random per run when unset
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSection {
    /// tracing filter used when RUST_LOG is not set
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceSection {
                selector: DEFAULT_TABLE_SELECTOR.to_string(),
            },
            colors: ColorsSection::default(),
            log: LogSection::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(cardstats_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = ensure_cardstats_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
