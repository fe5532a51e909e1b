use crate::Aspect;
use catalog_types::{ProposalId, Urn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    #[default]
    Upsert,
}

/// One aspect write against one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeProposal {
    pub id: ProposalId,
    pub entity_urn: Urn,
    pub entity_type: String,
    pub aspect_name: String,
    pub change_type: ChangeType,
    pub aspect: Aspect,
}

impl ChangeProposal {
    pub fn upsert(entity_urn: Urn, aspect: Aspect) -> Self {
        let entity_type = entity_urn.entity_type().to_string();
        Self {
            id: ProposalId::new(),
            aspect_name: aspect.name(&entity_type),
            entity_urn,
            entity_type,
            change_type: ChangeType::Upsert,
            aspect,
        }
    }
}
