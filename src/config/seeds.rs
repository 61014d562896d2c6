//! Seed data loading from config.toml.
//!
//! The notifications defined in config.toml are pushed through the normal
//! `notify` path at startup, so they get store-assigned ids like any
//! runtime-produced entry. An optional `[settings]` table overrides
//! individual default settings.

use std::path::Path;

use serde::Deserialize;

use crate::errors::{Error, Result};
use crate::models::{NewNotification, Theme};
use crate::state::SettingsPatch;

/// Parsed contents of config.toml.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Notifications to show on first render.
    pub notifications: Vec<NewNotification>,
    /// Overrides for individual default settings.
    pub settings: Option<SettingsSeed>,
}

/// Settings overrides in TOML's snake_case convention. Converted to a
/// [`SettingsPatch`] before dispatch.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsSeed {
    pub theme: Option<Theme>,
    pub notifications: Option<bool>,
    pub auto_refresh: Option<bool>,
    pub refresh_interval: Option<u64>,
    pub items_per_page: Option<u32>,
    pub sidebar_collapsed: Option<bool>,
}

impl SettingsSeed {
    #[must_use]
    pub fn into_patch(self) -> SettingsPatch {
        SettingsPatch {
            theme: self.theme,
            notifications: self.notifications,
            auto_refresh: self.auto_refresh,
            refresh_interval: self.refresh_interval,
            items_per_page: self.items_per_page,
            sidebar_collapsed: self.sidebar_collapsed,
        }
    }
}

/// Loads seed data from a TOML file. A missing file yields empty seeds;
/// a present-but-unparseable file is an error.
pub fn load_seeds<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    let contents = match std::fs::read_to_string(path_ref) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No seed config at {:?}, starting without seeds", path_ref);
            return Ok(SeedConfig::default());
        }
        Err(e) => {
            return Err(Error::Config {
                message: format!("Failed to read seed config {path_ref:?}: {e}"),
            });
        }
    };

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {path_ref:?}: {e}"),
    })
}

/// Loads seed data from `CAMPUS_HUB_CONFIG`, defaulting to `./config.toml`.
pub fn load_default_seeds() -> Result<SeedConfig> {
    let path =
        std::env::var("CAMPUS_HUB_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    load_seeds(path)
}
