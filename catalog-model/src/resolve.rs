//! Field resolution over the layered property model.
//!
//! Each resolver walks a fixed fallback order. Empty strings fall through
//! the same way missing values do.

use crate::CatalogEntity;
use serde::{Deserialize, Serialize};

/// Which property key a kind publishes its external link under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalUrlKey {
    #[default]
    ExternalUrl,
    SourceUrl,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// `properties.name`, then the legacy top-level `name`, then the URN.
pub fn resolve_display_name(entity: &CatalogEntity) -> String {
    resolve_lineage_name(entity).unwrap_or_else(|| entity.urn.clone())
}

/// `properties.name`, then the legacy top-level `name`. No URN fallback.
pub fn resolve_lineage_name(entity: &CatalogEntity) -> Option<String> {
    entity
        .properties
        .as_ref()
        .and_then(|p| non_empty(p.name.as_ref()))
        .or_else(|| non_empty(entity.name.as_ref()))
        .map(str::to_string)
}

/// `editableProperties.description`, then `properties.description`, then `""`.
pub fn resolve_description(entity: &CatalogEntity) -> String {
    entity
        .editable_properties
        .as_ref()
        .and_then(|p| non_empty(p.description.as_ref()))
        .or_else(|| {
            entity
                .properties
                .as_ref()
                .and_then(|p| non_empty(p.description.as_ref()))
        })
        .unwrap_or_default()
        .to_string()
}

pub fn resolve_external_url(entity: &CatalogEntity, key: ExternalUrlKey) -> Option<String> {
    let properties = entity.properties.as_ref()?;
    let url = match key {
        ExternalUrlKey::ExternalUrl => properties.external_url.as_ref(),
        ExternalUrlKey::SourceUrl => properties.source_url.as_ref(),
    };
    non_empty(url).map(str::to_string)
}
