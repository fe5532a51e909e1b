//! Renderer-facing view specifications.
//!
//! Descriptors produce these; UI layers consume them as JSON.

use crate::IconSpec;
use catalog_model::{
    CapabilitySet, CatalogEntity, DataPlatform, DataPlatformInstance, Deprecation, Domain,
    DomainAssociation, EditableProperties, EntityProperties, GlobalTags, GlossaryTerms, Owner,
    Ownership, OwnershipType, RelationshipKey, Status, resolve_description, resolve_display_name,
};
use catalog_types::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ── Profile page ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TabContent {
    Documentation,
    Properties,
    Children { relationship: RelationshipKey },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSpec {
    pub name: String,
    pub content: TabContent,
}

impl TabSpec {
    pub fn new(name: impl Into<String>, content: TabContent) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum SidebarSection {
    About,
    #[serde(rename_all = "camelCase")]
    Owners { default_owner_type: OwnershipType },
    #[serde(rename_all = "camelCase")]
    Tags { has_tags: bool, has_terms: bool },
    Domain,
    DataProduct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuItem {
    UpdateDeprecation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileViewSpec {
    pub urn: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub tabs: Vec<TabSpec>,
    pub sidebar: Vec<SidebarSection>,
    pub header_menu_items: BTreeSet<MenuItem>,
    pub capabilities: CapabilitySet,
}

impl ProfileViewSpec {
    pub fn tab_names(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.name.as_str()).collect()
    }
}

// ── Preview and search cards ─────────────────────────────────────

/// A highlighted match explaining why a search hit was returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchInsight {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One lineage path from the search origin to the hit, as URNs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityPath {
    pub path: Vec<String>,
}

/// A search result as returned by the search service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchHit {
    pub entity: CatalogEntity,
    pub insights: Vec<SearchInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<u32>,
    pub paths: Vec<EntityPath>,
}

impl SearchHit {
    pub fn new(entity: CatalogEntity) -> Self {
        Self {
            entity,
            ..Default::default()
        }
    }
}

/// A counted line under a card title, e.g. "3 Ssis Control Tasks".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub count: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSpec {
    pub url: String,
    pub urn: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_label: String,
    pub type_icon: IconSpec,
    pub owners: Vec<Owner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<GlobalTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_header: Vec<StatLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<Deprecation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub insights: Vec<SearchInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<EntityPath>,
}

impl PreviewSpec {
    /// A plain card for an entity whose kind has no registered descriptor:
    /// identity, ownership and tags only, no type icon glyph.
    pub fn reference(url: String, kind: EntityKind, entity: &CatalogEntity) -> Self {
        Self {
            url,
            urn: entity.urn.clone(),
            name: resolve_display_name(entity),
            description: resolve_description(entity),
            type_label: kind.as_str().to_string(),
            type_icon: IconSpec::default(),
            owners: entity.owners().to_vec(),
            tags: entity.global_tags.clone(),
            domain: entity.domain().cloned(),
            external_url: None,
            platform_name: None,
            logo_url: None,
            sub_header: Vec::new(),
            platform_instance_id: None,
            deprecation: None,
            insights: Vec::new(),
            degree: None,
            paths: Vec::new(),
        }
    }
}

// ── Child list tabs ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildListView {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub items: Vec<PreviewSpec>,
}

// ── Lineage ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageNode {
    pub urn: String,
    pub name: Option<String>,
    pub expanded_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub subtype: Option<String>,
    pub icon: Option<String>,
    pub platform: Option<DataPlatform>,
}

// ── Generic properties ───────────────────────────────────────────

/// The kind-agnostic view of an entity used by shared sidebar widgets,
/// with the kind's name and external URL overrides applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericEntityProperties {
    pub urn: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub name: Option<String>,
    pub external_url: Option<String>,
    pub description: String,
    pub properties: Option<EntityProperties>,
    pub editable_properties: Option<EditableProperties>,
    pub ownership: Option<Ownership>,
    pub global_tags: Option<GlobalTags>,
    pub glossary_terms: Option<GlossaryTerms>,
    pub domain: Option<DomainAssociation>,
    pub deprecation: Option<Deprecation>,
    pub status: Option<Status>,
    pub platform: Option<DataPlatform>,
    pub data_platform_instance: Option<DataPlatformInstance>,
}
