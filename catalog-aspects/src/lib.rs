//! Aspect-level plumbing for SSIS catalog entities.
//!
//! - [`map_entity`]: stored aspects → [`catalog_model::CatalogEntity`]
//! - [`hydrate`]: stored aspects → search document
//! - [`map_update`]: UI update input → ordered [`ChangeProposal`]s
//! - ingestion builders ([`SsisPackageBuilder`] and friends) → proposals,
//!   delivered through an [`Emitter`]

mod aspect;
mod emit;
mod error;
mod hydrator;
mod ingest;
mod mapper;
mod proposal;
mod update;

pub use aspect::{
    Aspect, Domains, EditablePropertiesAspect, EnvelopedAspect, InfoFields, SsisControlFlowInfo,
    SsisControlTaskInfo, SsisDataFlowInfo, SsisPackageInfo, SystemMetadata,
};
pub use emit::{Emitter, JsonLinesEmitter, MemoryEmitter};
pub use error::AspectError;
pub use hydrator::{facet_fields, hydrate};
pub use ingest::{
    SsisBase, SsisControlFlowBuilder, SsisControlTaskBuilder, SsisDataFlowBuilder,
    SsisEntityBuilder, SsisPackageBuilder,
};
pub use mapper::map_entity;
pub use proposal::{ChangeProposal, ChangeType};
pub use update::{
    DeprecationUpdate, EditablePropertiesUpdate, InstitutionalMemoryElementUpdate,
    InstitutionalMemoryUpdate, OwnerUpdate, OwnershipUpdate, TagsUpdate, UpdateInput, map_update,
    map_update_at,
};

pub type Result<T> = std::result::Result<T, AspectError>;
