//! Typed aspects: the unit of storage and change for catalog entities.

use catalog_model::{
    DataPlatformInstance, Deprecation, GlobalTags, GlossaryTerms, InputOutput,
    InstitutionalMemory, Ownership, Status,
};
use catalog_types::AuditStamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fields shared by the four `*Info` aspects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfoFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<AuditStamp>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SsisPackageInfo {
    #[serde(flatten)]
    pub fields: InfoFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SsisControlFlowInfo {
    #[serde(flatten)]
    pub fields: InfoFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_urn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SsisControlTaskInfo {
    #[serde(flatten)]
    pub fields: InfoFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_flow_urn: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SsisDataFlowInfo {
    #[serde(flatten)]
    pub fields: InfoFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_task_urn: Option<String>,
}

/// UI-edited properties, stamped with who edited them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditablePropertiesAspect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<AuditStamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<AuditStamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domains {
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Aspect {
    SsisPackageInfo(SsisPackageInfo),
    SsisControlFlowInfo(SsisControlFlowInfo),
    SsisControlTaskInfo(SsisControlTaskInfo),
    SsisDataFlowInfo(SsisDataFlowInfo),
    EditableProperties(EditablePropertiesAspect),
    Ownership(Ownership),
    GlobalTags(GlobalTags),
    GlossaryTerms(GlossaryTerms),
    Domains(Domains),
    Deprecation(Deprecation),
    Status(Status),
    DataPlatformInstance(DataPlatformInstance),
    InputOutput(InputOutput),
    InstitutionalMemory(InstitutionalMemory),
}

impl Aspect {
    /// The catalog aspect name when attached to an entity of `entity_type`.
    /// Editable properties and input/output are named per entity type.
    pub fn name(&self, entity_type: &str) -> String {
        match self {
            Self::SsisPackageInfo(_) => "ssisPackageInfo".into(),
            Self::SsisControlFlowInfo(_) => "ssisControlFlowInfo".into(),
            Self::SsisControlTaskInfo(_) => "ssisControlTaskInfo".into(),
            Self::SsisDataFlowInfo(_) => "ssisDataFlowInfo".into(),
            Self::EditableProperties(_) => {
                format!("editable{}Properties", upper_first(entity_type))
            }
            Self::InputOutput(_) => format!("{entity_type}InputOutput"),
            Self::Ownership(_) => "ownership".into(),
            Self::GlobalTags(_) => "globalTags".into(),
            Self::GlossaryTerms(_) => "glossaryTerms".into(),
            Self::Domains(_) => "domains".into(),
            Self::Deprecation(_) => "deprecation".into(),
            Self::Status(_) => "status".into(),
            Self::DataPlatformInstance(_) => "dataPlatformInstance".into(),
            Self::InstitutionalMemory(_) => "institutionalMemory".into(),
        }
    }

    /// The common info fields, for any of the four `*Info` aspects.
    pub fn info_fields(&self) -> Option<&InfoFields> {
        match self {
            Self::SsisPackageInfo(i) => Some(&i.fields),
            Self::SsisControlFlowInfo(i) => Some(&i.fields),
            Self::SsisControlTaskInfo(i) => Some(&i.fields),
            Self::SsisDataFlowInfo(i) => Some(&i.fields),
            _ => None,
        }
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ingestion bookkeeping stored next to an aspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_observed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

/// An aspect as read back from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopedAspect {
    pub aspect: Aspect,
    #[serde(default)]
    pub system_metadata: SystemMetadata,
}

impl EnvelopedAspect {
    pub fn observed_at(aspect: Aspect, last_observed: i64) -> Self {
        Self {
            aspect,
            system_metadata: SystemMetadata {
                last_observed: Some(last_observed),
                run_id: None,
            },
        }
    }
}

impl From<Aspect> for EnvelopedAspect {
    fn from(aspect: Aspect) -> Self {
        Self {
            aspect,
            system_metadata: SystemMetadata::default(),
        }
    }
}
