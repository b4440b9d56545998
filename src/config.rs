// src/config.rs
//! Run parameters: feed location, filters, destination and cell format.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::CellFormat;

pub const DEFAULT_FEED_URL: &str =
    "http://syndication.enterprise.websiteidx.com/feeds/BoojCodeTest.xml";
pub const DEFAULT_TARGET_YEAR: i32 = 2016;
pub const DEFAULT_TARGET_PHRASE: &str = "and";
pub const DEFAULT_OUTPUT_PATH: &str = "output_data/listings.csv";

pub const ENV_CONFIG_PATH: &str = "LISTING_REPORT_CONFIG";
pub const ENV_FEED_URL: &str = "LISTING_FEED_URL";
pub const ENV_TARGET_YEAR: &str = "LISTING_TARGET_YEAR";
pub const ENV_TARGET_PHRASE: &str = "LISTING_TARGET_PHRASE";
pub const ENV_OUTPUT_PATH: &str = "LISTING_OUTPUT_PATH";
pub const ENV_CELL_FORMAT: &str = "LISTING_CELL_FORMAT";

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}
fn default_target_year() -> i32 {
    DEFAULT_TARGET_YEAR
}
fn default_target_phrase() -> String {
    DEFAULT_TARGET_PHRASE.to_string()
}
fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// `http(s)://` URL or local path of the XML feed.
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_target_year")]
    pub target_year: i32,
    #[serde(default = "default_target_phrase")]
    pub target_phrase: String,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default)]
    pub cell_format: CellFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            target_year: default_target_year(),
            target_phrase: default_target_phrase(),
            output_path: default_output_path(),
            cell_format: CellFormat::default(),
        }
    }
}

impl RunConfig {
    /// Load from an explicit path. Supports TOML or JSON.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        parse_config(&content, &ext).with_context(|| format!("parsing {}", path.display()))
    }

    /// Resolve the config file, then apply env overrides:
    /// 1) `explicit` (first CLI argument)
    /// 2) $LISTING_REPORT_CONFIG
    /// 3) config/report.toml
    /// 4) config/report.json
    /// 5) built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let base = match explicit {
            Some(p) => Self::load_from(p)?,
            None => Self::load_default_file()?,
        };
        base.with_env_overrides()
    }

    fn load_default_file() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
        }
        let toml_p = PathBuf::from("config/report.toml");
        if toml_p.exists() {
            return Self::load_from(&toml_p);
        }
        let json_p = PathBuf::from("config/report.json");
        if json_p.exists() {
            return Self::load_from(&json_p);
        }
        Ok(Self::default())
    }

    /// Apply `LISTING_*` env vars on top of file/default values.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(v) = env_value(ENV_FEED_URL) {
            self.feed_url = v;
        }
        if let Some(v) = env_value(ENV_TARGET_YEAR) {
            self.target_year = v
                .trim()
                .parse()
                .with_context(|| format!("{ENV_TARGET_YEAR}=`{v}` is not a year"))?;
        }
        // An empty phrase is a valid value (keeps every listing).
        if let Ok(v) = std::env::var(ENV_TARGET_PHRASE) {
            self.target_phrase = v;
        }
        if let Some(v) = env_value(ENV_OUTPUT_PATH) {
            self.output_path = PathBuf::from(v);
        }
        if let Some(v) = env_value(ENV_CELL_FORMAT) {
            self.cell_format = v.parse().map_err(|e: String| anyhow!("{ENV_CELL_FORMAT}: {e}"))?;
        }
        Ok(self)
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_config(s: &str, hint_ext: &str) -> Result<RunConfig> {
    match hint_ext {
        "toml" => Ok(toml::from_str(s)?),
        "json" => Ok(serde_json::from_str(s)?),
        // No usable extension: JSON objects start with `{`, everything else is TOML.
        _ if s.trim_start().starts_with('{') => Ok(serde_json::from_str(s)?),
        _ => Ok(toml::from_str(s)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_and_json_fill_missing_fields_with_defaults() {
        let t = parse_config(
            r#"
target_year = 2015
cell_format = "delimited"
"#,
            "toml",
        )
        .unwrap();
        assert_eq!(t.target_year, 2015);
        assert_eq!(t.cell_format, CellFormat::Delimited);
        assert_eq!(t.feed_url, DEFAULT_FEED_URL);
        assert_eq!(t.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));

        let j = parse_config(r#"{"target_phrase": "pool"}"#, "").unwrap();
        assert_eq!(j.target_phrase, "pool");
        assert_eq!(j.target_year, DEFAULT_TARGET_YEAR);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config("target_yaer = 2016", "toml").is_err());
    }
}
