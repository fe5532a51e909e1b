//! Core type definitions for the SSIS catalog entities.
//!
//! This crate defines the identifier-level types every other catalog crate
//! depends on:
//! - [`EntityKind`]: the closed set of entity kinds the catalog knows about
//! - [`Urn`]: the `urn:li:<type>:<key>` identifier, including nested tuple keys
//! - SSIS entity keys ([`SsisPackageKey`] and friends) built on top of URNs
//! - [`AuditStamp`] and [`ProposalId`] for change proposals
//!
//! Nothing here knows about rendering; view-model code lives in
//! `catalog-entities`.

mod audit;
mod key;
mod kind;
mod urn;

pub use audit::{AuditStamp, ProposalId};
pub use key::{
    SsisControlFlowKey, SsisControlTaskKey, SsisDataFlowKey, SsisKey, SsisPackageKey,
    UNSPECIFIED,
};
pub use kind::EntityKind;
pub use urn::Urn;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid URN: {0}")]
    InvalidUrn(String),

    #[error("unsupported entity type: {0}")]
    UnsupportedEntityType(String),

    #[error("invalid {kind} key: {reason}")]
    InvalidKey { kind: EntityKind, reason: String },
}
