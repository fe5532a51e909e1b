use thiserror::Error;

#[derive(Debug, Error)]
pub enum AspectError {
    #[error(transparent)]
    Types(#[from] catalog_types::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("aspect {aspect} not found for {urn}")]
    MissingAspect { urn: String, aspect: String },

    #[error("unsupported entity: {0}")]
    UnsupportedEntity(String),

    #[error("failed to emit {aspect} for {urn}")]
    Emit {
        urn: String,
        aspect: String,
        #[source]
        source: Box<AspectError>,
    },
}
