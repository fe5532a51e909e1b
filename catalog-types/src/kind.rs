use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A distinct type of catalog object.
///
/// The four SSIS kinds are the ones this workspace registers descriptors for.
/// The rest are referenced by SSIS payloads (owners, tags, platforms, lineage
/// inputs) but owned elsewhere in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "ssisPackage")]
    SsisPackage,
    #[serde(rename = "ssisControlFlow")]
    SsisControlFlow,
    #[serde(rename = "ssisControlTask")]
    SsisControlTask,
    #[serde(rename = "ssisDataFlow")]
    SsisDataFlow,
    #[serde(rename = "dataPlatform")]
    DataPlatform,
    #[serde(rename = "dataset")]
    Dataset,
    #[serde(rename = "corpuser")]
    CorpUser,
    #[serde(rename = "corpGroup")]
    CorpGroup,
    #[serde(rename = "tag")]
    Tag,
    #[serde(rename = "glossaryTerm")]
    GlossaryTerm,
    #[serde(rename = "domain")]
    Domain,
}

impl EntityKind {
    /// The SSIS kinds, in registration order.
    pub const SSIS: [EntityKind; 4] = [
        EntityKind::SsisControlFlow,
        EntityKind::SsisControlTask,
        EntityKind::SsisDataFlow,
        EntityKind::SsisPackage,
    ];

    /// Catalog entity name, as it appears in URNs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SsisPackage => "ssisPackage",
            Self::SsisControlFlow => "ssisControlFlow",
            Self::SsisControlTask => "ssisControlTask",
            Self::SsisDataFlow => "ssisDataFlow",
            Self::DataPlatform => "dataPlatform",
            Self::Dataset => "dataset",
            Self::CorpUser => "corpuser",
            Self::CorpGroup => "corpGroup",
            Self::Tag => "tag",
            Self::GlossaryTerm => "glossaryTerm",
            Self::Domain => "domain",
        }
    }

    /// Returns true for the four SSIS kinds.
    #[must_use]
    pub const fn is_ssis(&self) -> bool {
        matches!(
            self,
            Self::SsisPackage | Self::SsisControlFlow | Self::SsisControlTask | Self::SsisDataFlow
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "ssisPackage" => Self::SsisPackage,
            "ssisControlFlow" => Self::SsisControlFlow,
            "ssisControlTask" => Self::SsisControlTask,
            "ssisDataFlow" => Self::SsisDataFlow,
            "dataPlatform" => Self::DataPlatform,
            "dataset" => Self::Dataset,
            "corpuser" => Self::CorpUser,
            "corpGroup" => Self::CorpGroup,
            "tag" => Self::Tag,
            "glossaryTerm" => Self::GlossaryTerm,
            "domain" => Self::Domain,
            other => return Err(crate::Error::UnsupportedEntityType(other.to_string())),
        };
        Ok(kind)
    }
}
