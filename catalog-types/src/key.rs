//! Typed keys for the four SSIS entity kinds.
//!
//! A key is the structured form of a URN. Child keys embed their parent's
//! key, so a control task always knows its flow, package and orchestrator.

use crate::{EntityKind, Error, Urn};
use serde::{Deserialize, Serialize};

/// Placeholder used by ingestion when orchestrator or cluster is not known.
pub const UNSPECIFIED: &str = "unspecified";

/// `urn:li:ssisPackage:(orchestrator,packageId,cluster)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsisPackageKey {
    pub orchestrator: String,
    pub ssis_package_id: String,
    pub cluster: String,
}

impl SsisPackageKey {
    pub fn new(
        orchestrator: impl Into<String>,
        ssis_package_id: impl Into<String>,
        cluster: impl Into<String>,
    ) -> Self {
        Self {
            orchestrator: orchestrator.into(),
            ssis_package_id: ssis_package_id.into(),
            cluster: cluster.into(),
        }
    }

    pub fn to_urn(&self) -> Urn {
        Urn::from_parts(
            EntityKind::SsisPackage.as_str(),
            &[&self.orchestrator, &self.ssis_package_id, &self.cluster],
        )
    }

    pub fn from_urn(urn: &Urn) -> crate::Result<Self> {
        expect_kind(urn, EntityKind::SsisPackage)?;
        match urn.parts().as_slice() {
            [orchestrator, id, cluster] => Ok(Self::new(*orchestrator, *id, *cluster)),
            parts => Err(invalid(
                EntityKind::SsisPackage,
                format!("expected 3 key parts, found {}", parts.len()),
            )),
        }
    }

    /// The data platform the package runs on; the orchestrator doubles as
    /// the platform name.
    pub fn platform_urn(&self) -> Urn {
        Urn::data_platform(&self.orchestrator)
    }
}

/// `urn:li:ssisControlFlow:(<packageUrn>,controlFlowId)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsisControlFlowKey {
    pub ssis_package: SsisPackageKey,
    pub control_flow_id: String,
}

impl SsisControlFlowKey {
    pub fn new(ssis_package: SsisPackageKey, control_flow_id: impl Into<String>) -> Self {
        Self {
            ssis_package,
            control_flow_id: control_flow_id.into(),
        }
    }

    pub fn to_urn(&self) -> Urn {
        Urn::from_parts(
            EntityKind::SsisControlFlow.as_str(),
            &[self.ssis_package.to_urn().to_string(), self.control_flow_id.clone()],
        )
    }

    pub fn from_urn(urn: &Urn) -> crate::Result<Self> {
        expect_kind(urn, EntityKind::SsisControlFlow)?;
        let (parent, id) = parent_and_id(urn, EntityKind::SsisControlFlow)?;
        Ok(Self::new(SsisPackageKey::from_urn(&parent)?, id))
    }
}

/// `urn:li:ssisControlTask:(<controlFlowUrn>,controlTaskId)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsisControlTaskKey {
    pub flow: SsisControlFlowKey,
    pub control_task_id: String,
}

impl SsisControlTaskKey {
    pub fn new(flow: SsisControlFlowKey, control_task_id: impl Into<String>) -> Self {
        Self {
            flow,
            control_task_id: control_task_id.into(),
        }
    }

    pub fn to_urn(&self) -> Urn {
        Urn::from_parts(
            EntityKind::SsisControlTask.as_str(),
            &[self.flow.to_urn().to_string(), self.control_task_id.clone()],
        )
    }

    pub fn from_urn(urn: &Urn) -> crate::Result<Self> {
        expect_kind(urn, EntityKind::SsisControlTask)?;
        let (parent, id) = parent_and_id(urn, EntityKind::SsisControlTask)?;
        Ok(Self::new(SsisControlFlowKey::from_urn(&parent)?, id))
    }
}

/// `urn:li:ssisDataFlow:(<packageUrn>,dataFlowId)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsisDataFlowKey {
    pub ssis_package: SsisPackageKey,
    pub data_flow_id: String,
}

impl SsisDataFlowKey {
    pub fn new(ssis_package: SsisPackageKey, data_flow_id: impl Into<String>) -> Self {
        Self {
            ssis_package,
            data_flow_id: data_flow_id.into(),
        }
    }

    pub fn to_urn(&self) -> Urn {
        Urn::from_parts(
            EntityKind::SsisDataFlow.as_str(),
            &[self.ssis_package.to_urn().to_string(), self.data_flow_id.clone()],
        )
    }

    pub fn from_urn(urn: &Urn) -> crate::Result<Self> {
        expect_kind(urn, EntityKind::SsisDataFlow)?;
        let (parent, id) = parent_and_id(urn, EntityKind::SsisDataFlow)?;
        Ok(Self::new(SsisPackageKey::from_urn(&parent)?, id))
    }
}

/// Any SSIS key, dispatched on the URN's entity type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SsisKey {
    Package(SsisPackageKey),
    ControlFlow(SsisControlFlowKey),
    ControlTask(SsisControlTaskKey),
    DataFlow(SsisDataFlowKey),
}

impl SsisKey {
    pub fn from_urn(urn: &Urn) -> crate::Result<Self> {
        match urn.kind() {
            Some(EntityKind::SsisPackage) => SsisPackageKey::from_urn(urn).map(Self::Package),
            Some(EntityKind::SsisControlFlow) => {
                SsisControlFlowKey::from_urn(urn).map(Self::ControlFlow)
            }
            Some(EntityKind::SsisControlTask) => {
                SsisControlTaskKey::from_urn(urn).map(Self::ControlTask)
            }
            Some(EntityKind::SsisDataFlow) => SsisDataFlowKey::from_urn(urn).map(Self::DataFlow),
            _ => Err(Error::UnsupportedEntityType(urn.entity_type().to_string())),
        }
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Package(_) => EntityKind::SsisPackage,
            Self::ControlFlow(_) => EntityKind::SsisControlFlow,
            Self::ControlTask(_) => EntityKind::SsisControlTask,
            Self::DataFlow(_) => EntityKind::SsisDataFlow,
        }
    }

    /// The kind-local id (package id, control flow id, ...).
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Package(k) => &k.ssis_package_id,
            Self::ControlFlow(k) => &k.control_flow_id,
            Self::ControlTask(k) => &k.control_task_id,
            Self::DataFlow(k) => &k.data_flow_id,
        }
    }

    /// The package this entity belongs to (itself, for packages).
    #[must_use]
    pub fn package(&self) -> &SsisPackageKey {
        match self {
            Self::Package(k) => k,
            Self::ControlFlow(k) => &k.ssis_package,
            Self::ControlTask(k) => &k.flow.ssis_package,
            Self::DataFlow(k) => &k.ssis_package,
        }
    }

    #[must_use]
    pub fn orchestrator(&self) -> &str {
        &self.package().orchestrator
    }

    pub fn to_urn(&self) -> Urn {
        match self {
            Self::Package(k) => k.to_urn(),
            Self::ControlFlow(k) => k.to_urn(),
            Self::ControlTask(k) => k.to_urn(),
            Self::DataFlow(k) => k.to_urn(),
        }
    }
}

fn expect_kind(urn: &Urn, kind: EntityKind) -> crate::Result<()> {
    if urn.entity_type() == kind.as_str() {
        Ok(())
    } else {
        Err(invalid(kind, format!("unexpected entity type {}", urn.entity_type())))
    }
}

fn parent_and_id(urn: &Urn, kind: EntityKind) -> crate::Result<(Urn, String)> {
    match urn.parts().as_slice() {
        [parent, id] => Ok((Urn::parse(parent)?, (*id).to_string())),
        parts => Err(invalid(kind, format!("expected 2 key parts, found {}", parts.len()))),
    }
}

fn invalid(kind: EntityKind, reason: String) -> Error {
    Error::InvalidKey { kind, reason }
}
