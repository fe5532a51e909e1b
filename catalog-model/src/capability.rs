use catalog_types::EntityKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An optional cross-cutting feature a kind may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapabilityTag {
    Owners,
    GlossaryTerms,
    Tags,
    Domains,
    Deprecation,
    SoftDelete,
}

impl CapabilityTag {
    pub const ALL: [CapabilityTag; 6] = [
        CapabilityTag::Owners,
        CapabilityTag::GlossaryTerms,
        CapabilityTag::Tags,
        CapabilityTag::Domains,
        CapabilityTag::Deprecation,
        CapabilityTag::SoftDelete,
    ];
}

/// The capabilities of one entity kind. Compared as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeSet<CapabilityTag>);

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        CapabilityTag::ALL.into_iter().collect()
    }

    pub fn contains(&self, tag: CapabilityTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn insert(&mut self, tag: CapabilityTag) -> bool {
        self.0.insert(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CapabilityTag> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CapabilityTag> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = CapabilityTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

const SSIS_CAPABILITIES: &[CapabilityTag] = &CapabilityTag::ALL;

/// Static capability table, one row per kind. Kinds owned elsewhere in the
/// catalog have no row here and get the empty set.
const CAPABILITY_TABLE: &[(EntityKind, &[CapabilityTag])] = &[
    (EntityKind::SsisControlFlow, SSIS_CAPABILITIES),
    (EntityKind::SsisControlTask, SSIS_CAPABILITIES),
    (EntityKind::SsisDataFlow, SSIS_CAPABILITIES),
    (EntityKind::SsisPackage, SSIS_CAPABILITIES),
];

pub fn capabilities_for(kind: EntityKind) -> CapabilitySet {
    CAPABILITY_TABLE
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, tags)| tags.iter().copied().collect())
        .unwrap_or_default()
}
