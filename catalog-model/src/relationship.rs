//! Parent → child relationship projection for list tabs.

use crate::{CatalogEntity, EntityRelationships};
use catalog_types::EntityKind;
use serde::{Deserialize, Serialize};

/// Which relationship block of a parent to project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipKey {
    /// Control flow → control tasks.
    ChildTasks,
    /// Package → control flows.
    ChildControlFlow,
    /// Package → data flows.
    ChildDataFlow,
}

impl RelationshipKey {
    pub const fn parent_kind(&self) -> EntityKind {
        match self {
            Self::ChildTasks => EntityKind::SsisControlFlow,
            Self::ChildControlFlow | Self::ChildDataFlow => EntityKind::SsisPackage,
        }
    }

    pub const fn target_kind(&self) -> EntityKind {
        match self {
            Self::ChildTasks => EntityKind::SsisControlTask,
            Self::ChildControlFlow => EntityKind::SsisControlFlow,
            Self::ChildDataFlow => EntityKind::SsisDataFlow,
        }
    }

    /// The relationship block on `entity` this key reads.
    pub fn select<'a>(&self, entity: &'a CatalogEntity) -> Option<&'a EntityRelationships> {
        match self {
            Self::ChildTasks => entity.child_tasks.as_ref(),
            Self::ChildControlFlow => entity.child_control_flow.as_ref(),
            Self::ChildDataFlow => entity.child_data_flow.as_ref(),
        }
    }
}

/// Children of one parent, in upstream edge order, plus the declared total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChildList<'a> {
    pub items: Vec<&'a CatalogEntity>,
    pub total: u32,
}

impl ChildList<'_> {
    /// `singular` when exactly one child is declared, `plural` otherwise
    /// (including zero).
    pub fn label<'n>(&self, singular: &'n str, plural: &'n str) -> &'n str {
        if self.total == 1 { singular } else { plural }
    }

    pub fn title(&self, singular: &str, plural: &str) -> String {
        format!("Contains {} {}", self.total, self.label(singular, plural))
    }
}

/// Projects the parent's `key` relationship block into a [`ChildList`].
///
/// `total` is the upstream-declared total when present, else the number of
/// projected items. A missing parent or block yields an empty list.
pub fn project_children(parent: Option<&CatalogEntity>, key: RelationshipKey) -> ChildList<'_> {
    let Some(block) = parent.and_then(|p| key.select(p)) else {
        return ChildList::default();
    };

    let items: Vec<&CatalogEntity> = block
        .relationships
        .iter()
        .flatten()
        .filter_map(|edge| edge.entity.as_ref())
        .collect();
    let total = block
        .total
        .unwrap_or_else(|| u32::try_from(items.len()).unwrap_or(u32::MAX));

    ChildList { items, total }
}
