//! Static per-kind configuration for the four SSIS entity kinds.
//!
//! The descriptor behavior is shared; only the values in [`KindConfig`]
//! differ between kinds.

use catalog_model::{ExternalUrlKey, RelationshipKey};
use catalog_types::EntityKind;
use serde::Serialize;

/// Which discovery surfaces a kind participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    pub searchable: bool,
    pub browsable: bool,
    pub lineage_enabled: bool,
}

/// A relationship-backed list tab on a profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildTab {
    pub name: &'static str,
    pub key: RelationshipKey,
}

/// Where a kind's lineage node finds its platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformPath {
    /// `entity.platform`
    Own,
    /// `entity.ssisPackage.platform`
    Package,
    /// `entity.flow.ssisPackage.platform`
    FlowPackage,
}

/// Kind-specific additions to preview and search cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewExtra {
    None,
    /// Child task count sub-header.
    TaskCount,
    /// Platform name and logo.
    Platform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindConfig {
    pub kind: EntityKind,
    pub path_name: &'static str,
    pub entity_name: &'static str,
    pub collection_name: &'static str,
    pub glyph: &'static str,
    pub eligibility: Eligibility,
    pub child_tabs: &'static [ChildTab],
    pub data_product_section: bool,
    pub external_url_key: ExternalUrlKey,
    pub platform_path: PlatformPath,
    pub preview_extra: PreviewExtra,
}

const GLYPH: &str = "share-alt";

pub const PACKAGE: KindConfig = KindConfig {
    kind: EntityKind::SsisPackage,
    path_name: "ssispackages",
    entity_name: "Ssis Package",
    collection_name: "Ssis Packages",
    glyph: GLYPH,
    eligibility: Eligibility {
        searchable: true,
        browsable: true,
        lineage_enabled: false,
    },
    child_tabs: &[
        ChildTab {
            name: "Control Flow",
            key: RelationshipKey::ChildControlFlow,
        },
        ChildTab {
            name: "Data Flow",
            key: RelationshipKey::ChildDataFlow,
        },
    ],
    data_product_section: true,
    external_url_key: ExternalUrlKey::SourceUrl,
    platform_path: PlatformPath::Own,
    preview_extra: PreviewExtra::Platform,
};

pub const CONTROL_FLOW: KindConfig = KindConfig {
    kind: EntityKind::SsisControlFlow,
    path_name: "ssiscontrolflow",
    entity_name: "Ssis Control Flow",
    collection_name: "Ssis Control Flows",
    glyph: GLYPH,
    eligibility: Eligibility {
        searchable: true,
        browsable: true,
        lineage_enabled: false,
    },
    child_tabs: &[ChildTab {
        name: "Tasks",
        key: RelationshipKey::ChildTasks,
    }],
    data_product_section: true,
    external_url_key: ExternalUrlKey::ExternalUrl,
    platform_path: PlatformPath::Package,
    preview_extra: PreviewExtra::TaskCount,
};

pub const CONTROL_TASK: KindConfig = KindConfig {
    kind: EntityKind::SsisControlTask,
    path_name: "ssiscontroltasks",
    entity_name: "Ssis Control Task",
    collection_name: "Ssis Control Tasks",
    glyph: GLYPH,
    eligibility: Eligibility {
        searchable: true,
        browsable: true,
        lineage_enabled: true,
    },
    child_tabs: &[],
    data_product_section: true,
    external_url_key: ExternalUrlKey::ExternalUrl,
    platform_path: PlatformPath::FlowPackage,
    preview_extra: PreviewExtra::None,
};

pub const DATA_FLOW: KindConfig = KindConfig {
    kind: EntityKind::SsisDataFlow,
    path_name: "ssisdataflow",
    entity_name: "Ssis Data Flow",
    collection_name: "Ssis Data Flows",
    glyph: GLYPH,
    eligibility: Eligibility {
        searchable: true,
        browsable: true,
        lineage_enabled: true,
    },
    child_tabs: &[],
    data_product_section: false,
    external_url_key: ExternalUrlKey::ExternalUrl,
    platform_path: PlatformPath::Package,
    preview_extra: PreviewExtra::None,
};

pub const SSIS_KINDS: [&KindConfig; 4] = [&CONTROL_FLOW, &CONTROL_TASK, &DATA_FLOW, &PACKAGE];

pub fn kind_config(kind: EntityKind) -> Option<&'static KindConfig> {
    SSIS_KINDS.into_iter().find(|c| c.kind == kind)
}
