//! Kind → descriptor registry.
//!
//! Built once at startup, then shared read-only. Generic views go through
//! the registry so they never name a concrete kind.

use crate::descriptor::{EntityDescriptor, SsisEntity};
use crate::kinds::SSIS_KINDS;
use crate::platform::{ConfigPlatformLookup, EntityPlatformLookup, PlatformMetadataLookup};
use crate::view::{
    ChildListView, GenericEntityProperties, LineageNode, PreviewSpec, ProfileViewSpec, SearchHit,
};
use crate::{CatalogConfig, CatalogError, IconSpec, IconStyle};
use catalog_model::{CatalogEntity, RelationshipKey};
use catalog_types::EntityKind;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

static GLOBAL: OnceLock<EntityRegistry> = OnceLock::new();

pub struct EntityRegistry {
    descriptors: HashMap<EntityKind, Arc<dyn EntityDescriptor>>,
    platforms: Box<dyn PlatformMetadataLookup>,
}

impl std::fmt::Debug for EntityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.descriptors.keys().collect();
        kinds.sort();
        f.debug_struct("EntityRegistry")
            .field("kinds", &kinds)
            .finish_non_exhaustive()
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new(Box::new(EntityPlatformLookup))
    }
}

impl EntityRegistry {
    /// An empty registry using `platforms` for platform display metadata.
    pub fn new(platforms: Box<dyn PlatformMetadataLookup>) -> Self {
        Self {
            descriptors: HashMap::new(),
            platforms,
        }
    }

    /// A registry with the four SSIS descriptors, themed and with platform
    /// overrides from `config`.
    pub fn with_ssis_entities(config: &CatalogConfig) -> Self {
        let mut registry = Self::new(Box::new(ConfigPlatformLookup::new(config)));
        for kind_config in SSIS_KINDS {
            let descriptor = SsisEntity::new(kind_config, config.theme.clone());
            registry
                .descriptors
                .insert(kind_config.kind, Arc::new(descriptor));
        }
        info!(kinds = registry.descriptors.len(), "Entity registry initialized");
        registry
    }

    /// Installs `config`'s registry as the process-wide instance. Later
    /// calls return the registry installed first.
    pub fn init_global(config: &CatalogConfig) -> &'static EntityRegistry {
        GLOBAL.get_or_init(|| Self::with_ssis_entities(config))
    }

    /// The process-wide registry, initialized with default config on first use.
    pub fn global() -> &'static EntityRegistry {
        GLOBAL.get_or_init(|| Self::with_ssis_entities(&CatalogConfig::default()))
    }

    pub fn register(&mut self, descriptor: Arc<dyn EntityDescriptor>) -> Result<(), CatalogError> {
        let kind = descriptor.kind();
        if self.descriptors.contains_key(&kind) {
            return Err(CatalogError::AlreadyRegistered(kind));
        }
        info!(kind = %kind, path = descriptor.path_name(), "Entity descriptor registered");
        self.descriptors.insert(kind, descriptor);
        Ok(())
    }

    // ================================================================
    // Lookup
    // ================================================================

    pub fn get(&self, kind: EntityKind) -> Option<&dyn EntityDescriptor> {
        let found = self.descriptors.get(&kind).map(Arc::as_ref);
        if found.is_none() {
            debug!(kind = %kind, "No descriptor registered");
        }
        found
    }

    pub fn descriptor(&self, kind: EntityKind) -> Result<&dyn EntityDescriptor, CatalogError> {
        self.get(kind).ok_or(CatalogError::UnknownKind(kind))
    }

    /// Registered kinds in stable order.
    pub fn kinds(&self) -> Vec<EntityKind> {
        let mut kinds: Vec<_> = self.descriptors.keys().copied().collect();
        kinds.sort();
        kinds
    }

    pub fn searchable_kinds(&self) -> Vec<EntityKind> {
        self.kinds_where(|d| d.eligibility().searchable)
    }

    pub fn browsable_kinds(&self) -> Vec<EntityKind> {
        self.kinds_where(|d| d.eligibility().browsable)
    }

    pub fn lineage_kinds(&self) -> Vec<EntityKind> {
        self.kinds_where(|d| d.eligibility().lineage_enabled)
    }

    fn kinds_where(&self, pred: impl Fn(&dyn EntityDescriptor) -> bool) -> Vec<EntityKind> {
        self.kinds()
            .into_iter()
            .filter(|k| self.descriptors.get(k).is_some_and(|d| pred(d.as_ref())))
            .collect()
    }

    pub fn platforms(&self) -> &dyn PlatformMetadataLookup {
        self.platforms.as_ref()
    }

    // ================================================================
    // Identity
    // ================================================================

    /// `/{path_name}/{url-encoded urn}`. Unregistered kinds use the kind's
    /// wire name as the path segment.
    pub fn get_entity_url(&self, kind: EntityKind, urn: &str) -> String {
        let path = self.get(kind).map_or(kind.as_str(), |d| d.path_name());
        format!("/{}/{}", path, urlencoding::encode(urn))
    }

    pub fn get_icon(&self, kind: EntityKind, size: u32, style: IconStyle) -> Option<IconSpec> {
        self.get(kind).map(|d| d.icon(size, style, None))
    }

    pub fn get_entity_name(&self, kind: EntityKind) -> Option<&str> {
        self.get(kind).map(|d| d.entity_name())
    }

    pub fn get_collection_name(&self, kind: EntityKind) -> Option<&str> {
        self.get(kind).map(|d| d.collection_name())
    }

    pub fn get_display_name(&self, kind: EntityKind, entity: &CatalogEntity) -> String {
        self.get(kind)
            .map_or_else(|| entity.urn.clone(), |d| d.display_name(entity))
    }

    pub fn get_generic_entity_properties(
        &self,
        kind: EntityKind,
        entity: &CatalogEntity,
    ) -> Option<GenericEntityProperties> {
        self.get(kind).map(|d| d.generic_properties(entity))
    }

    // ================================================================
    // Rendering
    // ================================================================

    pub fn render_profile(&self, kind: EntityKind, urn: &str) -> Option<ProfileViewSpec> {
        self.get(kind).map(|d| d.build_profile_view(urn))
    }

    pub fn render_preview(&self, kind: EntityKind, entity: &CatalogEntity) -> Option<PreviewSpec> {
        self.get(kind).map(|d| d.build_preview_card(entity, self))
    }

    /// Dispatches on the hit entity's own `type`.
    pub fn render_search_result(&self, hit: &SearchHit) -> Option<PreviewSpec> {
        let kind = hit.entity.kind?;
        self.get(kind).map(|d| d.build_search_result_card(hit, self))
    }

    pub fn render_child_tab(
        &self,
        parent_kind: EntityKind,
        parent: Option<&CatalogEntity>,
        key: RelationshipKey,
    ) -> Option<ChildListView> {
        self.get(parent_kind)?.render_child_tab(parent, key, self)
    }

    pub fn lineage_node(&self, kind: EntityKind, entity: &CatalogEntity) -> Option<LineageNode> {
        self.get(kind)?.lineage_node(entity)
    }
}
