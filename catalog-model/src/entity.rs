use crate::fields::*;
use catalog_types::EntityKind;
use serde::{Deserialize, Deserializer, Serialize};

/// An SSIS catalog entity as handed over by the query layer.
///
/// Every field except `urn` is optional: the same struct carries a fully
/// loaded profile, a search hit, a lineage stub or a relationship child
/// with nothing but a URN. The JSON shape is the catalog's GraphQL shape
/// (camelCase), so payloads deserialize directly. A payload without a
/// non-empty `urn` is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntity {
    #[serde(deserialize_with = "non_empty_urn")]
    pub urn: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntityKind>,
    /// Legacy top-level name, filled from the key id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orchestrator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_ingested: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<EntityProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable_properties: Option<EditableProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership: Option<Ownership>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_tags: Option<GlobalTags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossary_terms: Option<GlossaryTerms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainAssociation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation: Option<Deprecation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institutional_memory: Option<InstitutionalMemory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_platform_instance: Option<DataPlatformInstance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<DataPlatform>,

    /// Owning package (control flows and data flows).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssis_package: Option<Box<CatalogEntity>>,
    /// Owning control flow (control tasks).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<Box<CatalogEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_output: Option<InputOutput>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_tasks: Option<EntityRelationships>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_control_flow: Option<EntityRelationships>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_data_flow: Option<EntityRelationships>,
}

fn non_empty_urn<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let urn = String::deserialize(deserializer)?;
    if urn.is_empty() {
        return Err(serde::de::Error::custom("urn must not be empty"));
    }
    Ok(urn)
}

impl CatalogEntity {
    /// A bare reference: URN and kind only.
    pub fn stub(urn: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            urn: urn.into(),
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn owners(&self) -> &[Owner] {
        self.ownership
            .as_ref()
            .map(|o| o.owners.as_slice())
            .unwrap_or_default()
    }

    pub fn domain(&self) -> Option<&Domain> {
        self.domain.as_ref()?.domain.as_ref()
    }

    pub fn platform_instance_id(&self) -> Option<&str> {
        self.data_platform_instance.as_ref()?.instance_id.as_deref()
    }

    pub fn ssis_package(&self) -> Option<&CatalogEntity> {
        self.ssis_package.as_deref()
    }

    pub fn flow(&self) -> Option<&CatalogEntity> {
        self.flow.as_deref()
    }

    pub fn platform(&self) -> Option<&DataPlatform> {
        self.platform.as_ref()
    }

    /// Returns true when the entity has been soft-deleted.
    pub fn is_removed(&self) -> bool {
        self.status.is_some_and(|s| s.removed)
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation.as_ref().is_some_and(|d| d.deprecated)
    }
}
