//! Entity payload model for SSIS catalog entities.
//!
//! Defines the data every descriptor consumes:
//! - [`CatalogEntity`]: the typed, all-optional entity payload (property layers,
//!   ownership, tags, parent links, relationship blocks)
//! - [`CapabilitySet`]: which cross-cutting features a kind supports
//! - field resolution ([`resolve_display_name`], [`resolve_description`], ...)
//! - [`project_children`]: parent/child relationship projection
//!
//! Every function here is total: missing data degrades to an empty or `None`
//! default, never an error.

mod capability;
mod entity;
mod fields;
mod relationship;
mod resolve;

pub use capability::{CapabilitySet, CapabilityTag, capabilities_for};
pub use entity::CatalogEntity;
pub use fields::{
    DataPlatform, DataPlatformInstance, DataPlatformProperties, Deprecation, Domain,
    DomainAssociation, EditableProperties, EntityProperties, EntityRelationships, GlobalTags,
    GlossaryTermAssociation, GlossaryTerms, InputOutput, InstitutionalMemory,
    InstitutionalMemoryElement, Owner, Ownership, OwnershipSource, OwnershipSourceType,
    OwnershipType, RelationshipDirection, RelationshipEdge, Status, TagAssociation,
};
pub use relationship::{ChildList, RelationshipKey, project_children};
pub use resolve::{
    ExternalUrlKey, resolve_description, resolve_display_name, resolve_external_url,
    resolve_lineage_name,
};
