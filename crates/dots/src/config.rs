use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::grid::GridSpec;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "dots";

pub const VALID_KEYS: &str = "defaults.grid_size, defaults.theme, defaults.background";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<GridSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Image drawn behind the lattice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<PathBuf>,
}

/// Settings after applying command-line overrides on top of the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub grid: GridSpec,
    pub theme: String,
    pub background: Option<PathBuf>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `dots config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                tracing::warn!("using default config: {e}");
                Self::default()
            }
        }
    }

    /// A missing file quietly means defaults; a broken one is ignored with a warning.
    pub fn load_from_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("ignoring config: {e:#}");
            Self::default()
        })
    }

    /// The settings in effect, in the same shape as the config file.
    pub fn effective(&self) -> Self {
        let resolved = self.resolve(None, None);
        Self {
            defaults: Some(DefaultsConfig {
                grid_size: Some(resolved.grid),
                theme: Some(resolved.theme),
                background: resolved.background,
            }),
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# dots configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let defaults = self.defaults.get_or_insert_with(DefaultsConfig::default);
        match key {
            "defaults.grid_size" => {
                let grid: GridSpec = value
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid grid_size: {value}. {e}"))?;
                defaults.grid_size = Some(grid);
            }
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                defaults.theme = Some(value.to_string());
            }
            "defaults.background" => {
                if value.is_empty() {
                    defaults.background = None;
                } else {
                    defaults.background = Some(PathBuf::from(value));
                }
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {VALID_KEYS}"),
        }
        Ok(())
    }

    /// Merge command-line overrides with the file and built-in defaults.
    pub fn resolve(&self, grid: Option<GridSpec>, background: Option<PathBuf>) -> Resolved {
        let defaults = self.defaults.clone().unwrap_or_default();
        Resolved {
            grid: grid.or(defaults.grid_size).unwrap_or_default(),
            theme: defaults.theme.unwrap_or_else(|| "dark".to_string()),
            background: background.or(defaults.background),
        }
    }
}
