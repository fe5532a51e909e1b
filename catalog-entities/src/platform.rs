//! Data platform display metadata (names and logos).

use crate::CatalogConfig;
use crate::config::PlatformConfig;
use catalog_model::DataPlatform;
use catalog_types::{EntityKind, Urn};
use serde::Serialize;
use std::collections::BTreeMap;

/// Resolved display metadata for a platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMetadata {
    pub display_name: Option<String>,
    pub logo_url: Option<String>,
}

/// Resolves display metadata for a data platform.
pub trait PlatformMetadataLookup: Send + Sync {
    fn lookup(&self, platform: &DataPlatform) -> PlatformMetadata;
}

/// Reads whatever the platform payload itself carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityPlatformLookup;

impl PlatformMetadataLookup for EntityPlatformLookup {
    fn lookup(&self, platform: &DataPlatform) -> PlatformMetadata {
        PlatformMetadata {
            display_name: platform.display_name().map(str::to_string),
            logo_url: platform.logo_url().map(str::to_string),
        }
    }
}

/// Configured overrides per platform name, layered over the payload.
#[derive(Debug, Clone, Default)]
pub struct ConfigPlatformLookup {
    platforms: BTreeMap<String, PlatformConfig>,
}

impl ConfigPlatformLookup {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            platforms: config.platforms.clone(),
        }
    }
}

impl PlatformMetadataLookup for ConfigPlatformLookup {
    fn lookup(&self, platform: &DataPlatform) -> PlatformMetadata {
        let base = EntityPlatformLookup.lookup(platform);
        let Some(configured) = platform_name(platform).and_then(|n| self.platforms.get(&n)) else {
            return base;
        };
        PlatformMetadata {
            display_name: configured.display_name.clone().or(base.display_name),
            logo_url: configured.logo_url.clone().or(base.logo_url),
        }
    }
}

/// The platform's name, or the id segment of its `dataPlatform` URN.
pub fn platform_name(platform: &DataPlatform) -> Option<String> {
    if let Some(name) = platform.name.as_deref().filter(|n| !n.is_empty()) {
        return Some(name.to_string());
    }
    let urn = Urn::parse(&platform.urn).ok()?;
    (urn.kind() == Some(EntityKind::DataPlatform)).then(|| urn.key().to_string())
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize_first_letter_only(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
