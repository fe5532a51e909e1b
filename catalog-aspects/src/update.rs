//! UI update input → change proposals.

use crate::mapper::ssis_key;
use crate::{Aspect, AspectError, ChangeProposal, EditablePropertiesAspect};
use catalog_model::{
    Deprecation, GlobalTags, InstitutionalMemory, InstitutionalMemoryElement, Owner, Ownership,
    OwnershipSource, OwnershipSourceType, OwnershipType, TagAssociation,
};
use catalog_types::{AuditStamp, Urn};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerUpdate {
    pub owner: String,
    #[serde(rename = "type", default = "default_owner_type")]
    pub ownership_type: OwnershipType,
}

fn default_owner_type() -> OwnershipType {
    OwnershipType::TechnicalOwner
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnershipUpdate {
    pub owners: Vec<OwnerUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagsUpdate {
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeprecationUpdate {
    pub deprecated: bool,
    pub note: Option<String>,
    pub decommission_time: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstitutionalMemoryElementUpdate {
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstitutionalMemoryUpdate {
    pub elements: Vec<InstitutionalMemoryElementUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditablePropertiesUpdate {
    pub description: Option<String>,
}

/// A partial update from the catalog UI. Absent sections are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateInput {
    pub ownership: Option<OwnershipUpdate>,
    pub tags: Option<TagsUpdate>,
    pub deprecation: Option<DeprecationUpdate>,
    pub institutional_memory: Option<InstitutionalMemoryUpdate>,
    pub editable_properties: Option<EditablePropertiesUpdate>,
}

impl UpdateInput {
    pub fn is_empty(&self) -> bool {
        self.ownership.is_none()
            && self.tags.is_none()
            && self.deprecation.is_none()
            && self.institutional_memory.is_none()
            && self.editable_properties.is_none()
    }
}

/// Maps `input` to proposals for `urn`, stamped as `actor` now.
pub fn map_update(
    urn: &Urn,
    input: &UpdateInput,
    actor: &Urn,
) -> Result<Vec<ChangeProposal>, AspectError> {
    map_update_at(urn, input, AuditStamp::now(Some(actor.clone())))
}

/// Maps `input` to proposals for `urn` with an explicit audit stamp.
///
/// Proposals come out in a fixed order: ownership, tags, deprecation,
/// institutional memory, editable properties.
pub fn map_update_at(
    urn: &Urn,
    input: &UpdateInput,
    stamp: AuditStamp,
) -> Result<Vec<ChangeProposal>, AspectError> {
    ssis_key(urn)?;
    let mut proposals = Vec::with_capacity(5);

    if let Some(ownership) = &input.ownership {
        let owners = ownership
            .owners
            .iter()
            .map(|o| Owner {
                source: Some(OwnershipSource {
                    source_type: OwnershipSourceType::Manual,
                    url: None,
                }),
                ..Owner::new(o.owner.clone(), o.ownership_type)
            })
            .collect();
        proposals.push(ChangeProposal::upsert(
            urn.clone(),
            Aspect::Ownership(Ownership {
                owners,
                last_modified: Some(stamp.clone()),
            }),
        ));
    }

    if let Some(tags) = &input.tags {
        let tags = tags
            .tags
            .iter()
            .map(|tag| TagAssociation { tag: tag.clone() })
            .collect();
        proposals.push(ChangeProposal::upsert(
            urn.clone(),
            Aspect::GlobalTags(GlobalTags { tags }),
        ));
    }

    if let Some(deprecation) = &input.deprecation {
        proposals.push(ChangeProposal::upsert(
            urn.clone(),
            Aspect::Deprecation(Deprecation {
                deprecated: deprecation.deprecated,
                note: deprecation.note.clone(),
                decommission_time: deprecation.decommission_time,
                actor: stamp.actor.as_ref().map(Urn::to_string),
            }),
        ));
    }

    if let Some(memory) = &input.institutional_memory {
        let elements = memory
            .elements
            .iter()
            .map(|e| InstitutionalMemoryElement {
                url: e.url.clone(),
                description: e.description.clone(),
                created: Some(stamp.clone()),
            })
            .collect();
        proposals.push(ChangeProposal::upsert(
            urn.clone(),
            Aspect::InstitutionalMemory(InstitutionalMemory { elements }),
        ));
    }

    if let Some(editable) = &input.editable_properties {
        proposals.push(ChangeProposal::upsert(
            urn.clone(),
            Aspect::EditableProperties(EditablePropertiesAspect {
                description: editable.description.clone(),
                created: Some(stamp.clone()),
                last_modified: Some(stamp.clone()),
            }),
        ));
    }

    debug!(urn = %urn, proposals = proposals.len(), "Mapped update input");
    Ok(proposals)
}
