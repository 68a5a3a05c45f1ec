//! Configuration file (`agent-map.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "agent-map.toml";

/// Largest accepted chart width or height in pixels
pub const MAX_CHART_SIDE: u32 = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub chart: ChartConfig,
    pub export: ExportConfig,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Json,
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Json,
            path: PathBuf::from("data_store.json"),
        }
    }
}

/// Pie chart canvas size in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 480,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))?;
        let sides = [config.chart.width, config.chart.height];
        if sides.iter().any(|side| !(1..=MAX_CHART_SIDE).contains(side)) {
            return Err(Error::ConfigParseError(format!(
                "chart width and height must be between 1 and {MAX_CHART_SIDE}"
            )));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[store]
backend = "sqlite"
path = "records/map.db"

[chart]
width = 640
height = 400

[export]
dir = "out"
"#;
        let config = Config::parse(content).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Sqlite);
        assert_eq!(config.store.path, PathBuf::from("records/map.db"));
        assert_eq!(config.chart.width, 640);
        assert_eq!(config.export.dir, PathBuf::from("out"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::parse("[chart]\nwidth = 300\n").unwrap();
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.chart.width, 300);
        assert_eq!(config.chart.height, 480);
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::parse("[store]\nbackend = \"postgres\"\n"),
            Err(Error::ConfigParseError(_))
        ));
        assert!(matches!(
            Config::parse("[chart]\nwidth = 0\n"),
            Err(Error::ConfigParseError(_))
        ));
    }

    #[test]
    fn test_chart_size_is_bounded() {
        assert!(Config::parse("[chart]\nwidth = 10000\nheight = 10000\n").is_ok());
        assert!(matches!(
            Config::parse("[chart]\nheight = 10001\n"),
            Err(Error::ConfigParseError(_))
        ));
        assert!(matches!(
            Config::parse("[chart]\nwidth = 4294967295\n"),
            Err(Error::ConfigParseError(_))
        ));
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("sqlite".parse::<StoreBackend>().unwrap(), StoreBackend::Sqlite);
        assert!("mysql".parse::<StoreBackend>().is_err());
    }
}
