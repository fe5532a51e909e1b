#![allow(dead_code)]

use catalog_entities::{CatalogConfig, EntityRegistry};
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness. Set `RUST_LOG=debug` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn registry() -> EntityRegistry {
    init_tracing();
    EntityRegistry::with_ssis_entities(&CatalogConfig::default())
}
