//! Catalog display configuration, read from `catalog.toml`.
//!
//! ```toml
//! [theme]
//! highlight_color = "#d6246c"
//! default_color = "#BFBFBF"
//! preview_icon_size = 14
//!
//! [platforms.mssql]
//! display_name = "SQL Server"
//! logo_url = "/assets/platforms/mssql.png"
//! ```

use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Icon colors and sizes shared by every descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,
    #[serde(default = "default_icon_color")]
    pub default_color: String,
    #[serde(default = "default_preview_icon_size")]
    pub preview_icon_size: u32,
}

fn default_highlight_color() -> String {
    "#d6246c".to_string()
}

fn default_icon_color() -> String {
    "#BFBFBF".to_string()
}

fn default_preview_icon_size() -> u32 {
    14
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            highlight_color: default_highlight_color(),
            default_color: default_icon_color(),
            preview_icon_size: default_preview_icon_size(),
        }
    }
}

/// Display metadata for one data platform, keyed by platform name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub platforms: BTreeMap<String, PlatformConfig>,
}

impl CatalogConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads config from `path`. A missing file yields defaults; an
    /// unreadable or invalid file yields defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No catalog config found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!(
                        platforms = config.platforms.len(),
                        "Loaded catalog config from {:?}", path
                    );
                    config
                }
                Err(e) => {
                    warn!("Invalid catalog config {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read catalog config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        for (field, color) in [
            ("theme.highlight_color", &self.theme.highlight_color),
            ("theme.default_color", &self.theme.default_color),
        ] {
            if !is_hex_color(color) {
                return Err(CatalogError::ConfigInvalid(format!(
                    "{field} must be a hex color, got {color:?}"
                )));
            }
        }
        if self.theme.preview_icon_size == 0 {
            return Err(CatalogError::ConfigInvalid(
                "theme.preview_icon_size must be positive".into(),
            ));
        }
        if let Some(name) = self.platforms.keys().find(|k| k.is_empty()) {
            return Err(CatalogError::ConfigInvalid(format!(
                "platform name must not be empty: {name:?}"
            )));
        }
        Ok(())
    }
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
fn is_hex_color(color: &str) -> bool {
    color.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}
