//! The entity descriptor contract and its SSIS implementation.

use crate::icon::build_icon;
use crate::kinds::{Eligibility, KindConfig, PlatformPath, PreviewExtra};
use crate::platform::{capitalize_first_letter_only, platform_name};
use crate::view::{
    ChildListView, GenericEntityProperties, LineageNode, MenuItem, PreviewSpec, ProfileViewSpec,
    SearchHit, SidebarSection, StatLine, TabContent, TabSpec,
};
use crate::{EntityRegistry, IconSpec, IconStyle, ThemeConfig};
use catalog_model::{
    CapabilitySet, CatalogEntity, DataPlatform, OwnershipType, RelationshipKey, capabilities_for,
    project_children, resolve_description, resolve_display_name, resolve_external_url,
    resolve_lineage_name,
};
use catalog_types::EntityKind;
use std::collections::BTreeSet;

/// Per-kind behavior consumed by generic profile, search and lineage views.
///
/// Every method is total: missing payload data degrades to documented
/// defaults rather than failing.
pub trait EntityDescriptor: Send + Sync {
    fn kind(&self) -> EntityKind;

    fn icon(&self, size: u32, style: IconStyle, color: Option<&str>) -> IconSpec;

    fn eligibility(&self) -> Eligibility;

    fn capabilities(&self) -> CapabilitySet;

    /// URL path segment for profile pages.
    fn path_name(&self) -> &str;

    fn entity_name(&self) -> &str;

    fn collection_name(&self) -> &str;

    fn autocomplete_field_name(&self) -> &str {
        "name"
    }

    fn display_name(&self, entity: &CatalogEntity) -> String {
        resolve_display_name(entity)
    }

    fn generic_properties(&self, entity: &CatalogEntity) -> GenericEntityProperties;

    fn build_profile_view(&self, urn: &str) -> ProfileViewSpec;

    fn build_preview_card(&self, entity: &CatalogEntity, registry: &EntityRegistry) -> PreviewSpec;

    fn build_search_result_card(&self, hit: &SearchHit, registry: &EntityRegistry)
    -> PreviewSpec;

    fn lineage_node(&self, entity: &CatalogEntity) -> Option<LineageNode>;

    /// Renders one relationship-backed list tab of `parent`.
    ///
    /// Returns `None` when `key` does not hang off this kind. Children whose
    /// kind has no registered descriptor still get a plain reference card,
    /// so the item count agrees with the title.
    fn render_child_tab(
        &self,
        parent: Option<&CatalogEntity>,
        key: RelationshipKey,
        registry: &EntityRegistry,
    ) -> Option<ChildListView> {
        if key.parent_kind() != self.kind() {
            return None;
        }
        let target = key.target_kind();
        let list = project_children(parent, key);
        let singular = registry.get_entity_name(target).unwrap_or(target.as_str());
        let plural = registry
            .get_collection_name(target)
            .unwrap_or(target.as_str());
        let items = list
            .items
            .iter()
            .map(|child| {
                let kind = child.kind.unwrap_or(target);
                registry.render_preview(kind, child).unwrap_or_else(|| {
                    PreviewSpec::reference(registry.get_entity_url(kind, &child.urn), kind, child)
                })
            })
            .collect();

        Some(ChildListView {
            title: list.title(singular, plural),
            kind: target,
            items,
        })
    }
}

/// The shared descriptor for the four SSIS kinds, parameterized by a
/// static [`KindConfig`].
#[derive(Debug, Clone)]
pub struct SsisEntity {
    config: &'static KindConfig,
    theme: ThemeConfig,
}

impl SsisEntity {
    pub fn new(config: &'static KindConfig, theme: ThemeConfig) -> Self {
        Self { config, theme }
    }

    pub fn config(&self) -> &'static KindConfig {
        self.config
    }

    fn lineage_platform<'a>(&self, entity: &'a CatalogEntity) -> Option<&'a DataPlatform> {
        match self.config.platform_path {
            PlatformPath::Own => entity.platform(),
            PlatformPath::Package => entity.ssis_package()?.platform(),
            PlatformPath::FlowPackage => entity.flow()?.ssis_package()?.platform(),
        }
    }

    fn base_card(&self, entity: &CatalogEntity, registry: &EntityRegistry) -> PreviewSpec {
        let mut card = PreviewSpec {
            url: registry.get_entity_url(self.config.kind, &entity.urn),
            urn: entity.urn.clone(),
            name: self.display_name(entity),
            description: resolve_description(entity),
            type_label: self.config.entity_name.to_string(),
            type_icon: self.icon(self.theme.preview_icon_size, IconStyle::Accent, None),
            owners: entity.owners().to_vec(),
            tags: entity.global_tags.clone(),
            domain: entity.domain().cloned(),
            external_url: resolve_external_url(entity, self.config.external_url_key),
            platform_name: None,
            logo_url: None,
            sub_header: Vec::new(),
            platform_instance_id: None,
            deprecation: None,
            insights: Vec::new(),
            degree: None,
            paths: Vec::new(),
        };

        match self.config.preview_extra {
            PreviewExtra::None => {}
            PreviewExtra::TaskCount => {
                let tasks = project_children(Some(entity), RelationshipKey::ChildTasks);
                if tasks.total > 0 {
                    let target = RelationshipKey::ChildTasks.target_kind();
                    let label = tasks.label(
                        registry.get_entity_name(target).unwrap_or(target.as_str()),
                        registry
                            .get_collection_name(target)
                            .unwrap_or(target.as_str()),
                    );
                    card.sub_header.push(StatLine {
                        count: tasks.total,
                        label: label.to_string(),
                    });
                }
            }
            PreviewExtra::Platform => {
                if let Some(platform) = entity.platform() {
                    let metadata = registry.platforms().lookup(platform);
                    card.platform_name = metadata.display_name.or_else(|| {
                        platform_name(platform).map(|n| capitalize_first_letter_only(&n))
                    });
                    card.logo_url = metadata.logo_url;
                }
            }
        }

        card
    }
}

impl EntityDescriptor for SsisEntity {
    fn kind(&self) -> EntityKind {
        self.config.kind
    }

    fn icon(&self, size: u32, style: IconStyle, color: Option<&str>) -> IconSpec {
        build_icon(self.config.glyph, size, style, color, &self.theme)
    }

    fn eligibility(&self) -> Eligibility {
        self.config.eligibility
    }

    fn capabilities(&self) -> CapabilitySet {
        capabilities_for(self.config.kind)
    }

    fn path_name(&self) -> &str {
        self.config.path_name
    }

    fn entity_name(&self) -> &str {
        self.config.entity_name
    }

    fn collection_name(&self) -> &str {
        self.config.collection_name
    }

    fn generic_properties(&self, entity: &CatalogEntity) -> GenericEntityProperties {
        GenericEntityProperties {
            urn: entity.urn.clone(),
            kind: self.config.kind,
            name: resolve_lineage_name(entity),
            external_url: resolve_external_url(entity, self.config.external_url_key),
            description: resolve_description(entity),
            properties: entity.properties.clone(),
            editable_properties: entity.editable_properties.clone(),
            ownership: entity.ownership.clone(),
            global_tags: entity.global_tags.clone(),
            glossary_terms: entity.glossary_terms.clone(),
            domain: entity.domain.clone(),
            deprecation: entity.deprecation.clone(),
            status: entity.status,
            platform: entity.platform.clone(),
            data_platform_instance: entity.data_platform_instance.clone(),
        }
    }

    fn build_profile_view(&self, urn: &str) -> ProfileViewSpec {
        let mut tabs = vec![
            TabSpec::new("Documentation", TabContent::Documentation),
            TabSpec::new("Properties", TabContent::Properties),
        ];
        tabs.extend(self.config.child_tabs.iter().map(|tab| {
            TabSpec::new(tab.name, TabContent::Children { relationship: tab.key })
        }));

        let mut sidebar = vec![
            SidebarSection::About,
            SidebarSection::Owners {
                default_owner_type: OwnershipType::TechnicalOwner,
            },
            SidebarSection::Tags {
                has_tags: true,
                has_terms: true,
            },
            SidebarSection::Domain,
        ];
        if self.config.data_product_section {
            sidebar.push(SidebarSection::DataProduct);
        }

        ProfileViewSpec {
            urn: urn.to_string(),
            kind: self.config.kind,
            tabs,
            sidebar,
            header_menu_items: BTreeSet::from([MenuItem::UpdateDeprecation]),
            capabilities: self.capabilities(),
        }
    }

    fn build_preview_card(&self, entity: &CatalogEntity, registry: &EntityRegistry) -> PreviewSpec {
        self.base_card(entity, registry)
    }

    fn build_search_result_card(
        &self,
        hit: &SearchHit,
        registry: &EntityRegistry,
    ) -> PreviewSpec {
        let entity = &hit.entity;
        PreviewSpec {
            platform_instance_id: entity.platform_instance_id().map(str::to_string),
            deprecation: entity.deprecation.clone(),
            insights: hit.insights.clone(),
            degree: hit.degree,
            paths: hit.paths.clone(),
            ..self.base_card(entity, registry)
        }
    }

    fn lineage_node(&self, entity: &CatalogEntity) -> Option<LineageNode> {
        if !self.config.eligibility.lineage_enabled {
            return None;
        }
        let platform = self.lineage_platform(entity);
        let name = resolve_lineage_name(entity);

        Some(LineageNode {
            urn: entity.urn.clone(),
            expanded_name: name.clone(),
            name,
            kind: self.config.kind,
            subtype: None,
            icon: platform
                .and_then(DataPlatform::logo_url)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            platform: platform.cloned(),
        })
    }
}
