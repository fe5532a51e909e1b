//! Entity descriptors for the SSIS catalog kinds.
//!
//! One [`SsisEntity`] implementation of [`EntityDescriptor`] serves all four
//! kinds (package, control flow, control task, data flow); the differences
//! live in the static [`KindConfig`] tables. The [`EntityRegistry`] maps
//! kinds to descriptors and is what generic profile, search and lineage
//! views talk to.

mod config;
mod descriptor;
mod error;
mod icon;
pub mod kinds;
mod platform;
mod registry;
mod view;

pub use config::{CatalogConfig, PlatformConfig, ThemeConfig};
pub use descriptor::{EntityDescriptor, SsisEntity};
pub use error::CatalogError;
pub use icon::{IconSpec, IconStyle};
pub use kinds::{Eligibility, KindConfig};
pub use platform::{
    ConfigPlatformLookup, EntityPlatformLookup, PlatformMetadata, PlatformMetadataLookup,
    capitalize_first_letter_only, platform_name,
};
pub use registry::EntityRegistry;
pub use view::{
    ChildListView, EntityPath, GenericEntityProperties, LineageNode, MenuItem, PreviewSpec,
    ProfileViewSpec, SearchHit, SearchInsight, SidebarSection, StatLine, TabContent, TabSpec,
};

pub type Result<T> = std::result::Result<T, CatalogError>;
