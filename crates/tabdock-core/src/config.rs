//! Tabdock configuration
//!
//! Stored as JSON. Every field is optional; missing fields take the
//! defaults of the standard five-slot bar.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tabdock_catalog::TabId;
use tabdock_layout::LayoutMetrics;
use tabdock_retention::RetentionPolicy;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default tab group and retention capacity
    pub retention: RetentionPolicy,
    /// Tab bar measurements
    pub layout: LayoutMetrics,
    /// Tabs shown in the bar, in order
    pub bar_tabs: Vec<TabId>,
    /// Container width used before the first resize
    pub initial_width: f32,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;

        tracing::info!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_json()?)?;

        tracing::info!(path = %path.display(), "Saved configuration");

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.retention.validate()?;

        if let Some(field) = self.layout.invalid_field() {
            return Err(CoreError::Config(format!(
                "layout.{} must be a finite, non-negative number",
                field
            )));
        }

        for (i, tab) in self.bar_tabs.iter().enumerate() {
            if self.bar_tabs[..i].contains(tab) {
                return Err(CoreError::Config(format!("bar tab listed twice: {}", tab)));
            }
        }

        if !self.initial_width.is_finite() {
            return Err(CoreError::Config("initial_width must be finite".to_string()));
        }

        Ok(())
    }

    /// Default location of the configuration file
    pub fn default_path() -> PathBuf {
        config_home()
            .map(|d| d.join("tabdock").join("config.json"))
            .unwrap_or_else(|| PathBuf::from(".tabdock/config.json"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            retention: RetentionPolicy::default(),
            layout: LayoutMetrics::default(),
            bar_tabs: TabId::ALL.to_vec(),
            initial_width: 375.0,
        }
    }
}

/// Per-user configuration root for the current platform
fn config_home() -> Option<PathBuf> {
    let var = |name: &str| std::env::var_os(name).map(PathBuf::from);

    if cfg!(target_os = "windows") {
        var("APPDATA")
    } else if cfg!(target_os = "macos") {
        var("HOME").map(|home| home.join("Library").join("Application Support"))
    } else {
        var("XDG_CONFIG_HOME")
            .filter(|dir| dir.is_absolute())
            .or_else(|| var("HOME").map(|home| home.join(".config")))
    }
}
