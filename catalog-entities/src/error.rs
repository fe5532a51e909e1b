//! Error types for the entities crate.

use catalog_types::EntityKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    ConfigInvalid(String),

    #[error("no descriptor registered for {0}")]
    UnknownKind(EntityKind),

    #[error("descriptor already registered for {0}")]
    AlreadyRegistered(EntityKind),
}
