//! Ingestion-side builders that turn SSIS objects into change proposals.
//!
//! Every builder emits, in order: the info aspect, editable properties,
//! input/output (tasks and data flows only, optionally followed by a
//! `Status { removed: false }` for every inlet and outlet so they exist
//! in the catalog), ownership, and tags.

use crate::{
    Aspect, AspectError, ChangeProposal, EditablePropertiesAspect, Emitter, InfoFields,
    SsisControlFlowInfo, SsisControlTaskInfo, SsisDataFlowInfo, SsisPackageInfo,
};
use catalog_model::{
    GlobalTags, InputOutput, Owner, Ownership, OwnershipSource, OwnershipSourceType,
    OwnershipType, Status, TagAssociation,
};
use catalog_types::{
    AuditStamp, SsisControlFlowKey, SsisControlTaskKey, SsisDataFlowKey, SsisPackageKey,
    UNSPECIFIED, Urn,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

/// Fields every SSIS entity carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsisBase {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub properties: BTreeMap<String, String>,
    pub tags: BTreeSet<String>,
    /// User ids.
    pub owners: BTreeSet<String>,
    /// Group ids.
    pub group_owners: BTreeSet<String>,
}

impl SsisBase {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    fn info_fields(&self) -> InfoFields {
        InfoFields {
            name: Some(self.name.clone().unwrap_or_else(|| self.id.clone())),
            description: self.description.clone(),
            external_url: self.url.clone(),
            custom_properties: self.properties.clone(),
            ..Default::default()
        }
    }

    fn editable_aspect(&self) -> Aspect {
        Aspect::EditableProperties(EditablePropertiesAspect {
            description: self.description.clone(),
            ..Default::default()
        })
    }

    fn ownership_aspect(&self, orchestrator: &str) -> Aspect {
        let owner_urns: BTreeSet<String> = self
            .owners
            .iter()
            .map(|id| Urn::corp_user(id).to_string())
            .chain(self.group_owners.iter().map(|id| Urn::corp_group(id).to_string()))
            .collect();
        let owners = owner_urns
            .into_iter()
            .map(|urn| Owner {
                source: Some(OwnershipSource {
                    source_type: OwnershipSourceType::Service,
                    url: None,
                }),
                ..Owner::new(urn, OwnershipType::Developer)
            })
            .collect();

        Aspect::Ownership(Ownership {
            owners,
            last_modified: Some(AuditStamp::at(0, Some(Urn::corp_user(orchestrator)))),
        })
    }

    fn tags_aspect(&self) -> Aspect {
        // BTreeSet iteration is already sorted.
        Aspect::GlobalTags(GlobalTags {
            tags: self
                .tags
                .iter()
                .map(|t| TagAssociation {
                    tag: Urn::tag(t).to_string(),
                })
                .collect(),
        })
    }

    fn proposals(
        &self,
        urn: &Urn,
        orchestrator: &str,
        info: Aspect,
        io: Vec<ChangeProposal>,
    ) -> Vec<ChangeProposal> {
        let mut proposals = vec![
            ChangeProposal::upsert(urn.clone(), info),
            ChangeProposal::upsert(urn.clone(), self.editable_aspect()),
        ];
        proposals.extend(io);
        proposals.push(ChangeProposal::upsert(
            urn.clone(),
            self.ownership_aspect(orchestrator),
        ));
        proposals.push(ChangeProposal::upsert(urn.clone(), self.tags_aspect()));
        proposals
    }
}

fn io_proposals(
    urn: &Urn,
    io: InputOutput,
    inlets: &[Urn],
    outlets: &[Urn],
    materialize_iolets: bool,
) -> Vec<ChangeProposal> {
    let mut proposals = vec![ChangeProposal::upsert(urn.clone(), Aspect::InputOutput(io))];
    if materialize_iolets {
        proposals.extend(inlets.iter().chain(outlets).map(|iolet| {
            ChangeProposal::upsert(iolet.clone(), Aspect::Status(Status { removed: false }))
        }));
    }
    proposals
}

/// Common surface of the four builders.
pub trait SsisEntityBuilder {
    fn urn(&self) -> Urn;

    fn generate_proposals(&self, materialize_iolets: bool) -> Vec<ChangeProposal>;

    /// Emits every proposal (with iolet materialization) to `emitter`.
    /// Returns the number emitted.
    fn emit(&self, emitter: &mut dyn Emitter) -> Result<usize, AspectError> {
        let proposals = self.generate_proposals(true);
        for proposal in &proposals {
            emitter.emit(proposal).map_err(|e| AspectError::Emit {
                urn: proposal.entity_urn.to_string(),
                aspect: proposal.aspect_name.clone(),
                source: Box::new(e),
            })?;
        }
        info!(urn = %self.urn(), proposals = proposals.len(), "Entity emitted");
        Ok(proposals.len())
    }
}

// ── Package ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsisPackageBuilder {
    pub base: SsisBase,
    pub orchestrator: String,
    pub cluster: String,
}

impl SsisPackageBuilder {
    /// A package with unspecified orchestrator and cluster.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: SsisBase::new(id),
            orchestrator: UNSPECIFIED.to_string(),
            cluster: UNSPECIFIED.to_string(),
        }
    }

    pub fn orchestrator(mut self, orchestrator: impl Into<String>) -> Self {
        self.orchestrator = orchestrator.into();
        self
    }

    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = cluster.into();
        self
    }

    pub fn key(&self) -> SsisPackageKey {
        SsisPackageKey::new(&self.orchestrator, &self.base.id, &self.cluster)
    }
}

impl SsisEntityBuilder for SsisPackageBuilder {
    fn urn(&self) -> Urn {
        self.key().to_urn()
    }

    fn generate_proposals(&self, _materialize_iolets: bool) -> Vec<ChangeProposal> {
        let info = Aspect::SsisPackageInfo(SsisPackageInfo {
            fields: self.base.info_fields(),
        });
        self.base
            .proposals(&self.urn(), &self.orchestrator, info, Vec::new())
    }
}

// ── Control flow ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsisControlFlowBuilder {
    pub base: SsisBase,
    pub package: SsisPackageKey,
}

impl SsisControlFlowBuilder {
    pub fn new(package: SsisPackageKey, id: impl Into<String>) -> Self {
        Self {
            base: SsisBase::new(id),
            package,
        }
    }

    pub fn key(&self) -> SsisControlFlowKey {
        SsisControlFlowKey::new(self.package.clone(), &self.base.id)
    }
}

impl SsisEntityBuilder for SsisControlFlowBuilder {
    fn urn(&self) -> Urn {
        self.key().to_urn()
    }

    fn generate_proposals(&self, _materialize_iolets: bool) -> Vec<ChangeProposal> {
        let info = Aspect::SsisControlFlowInfo(SsisControlFlowInfo {
            fields: self.base.info_fields(),
            package_urn: Some(self.package.to_urn().to_string()),
        });
        self.base
            .proposals(&self.urn(), &self.package.orchestrator, info, Vec::new())
    }
}

// ── Control task ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsisControlTaskBuilder {
    pub base: SsisBase,
    pub flow: SsisControlFlowKey,
    pub task_type: String,
    pub input_control_tasks: Vec<Urn>,
    pub inlets: Vec<Urn>,
    pub outlets: Vec<Urn>,
}

impl SsisControlTaskBuilder {
    pub const DEFAULT_TASK_TYPE: &'static str = "SCRIPT";

    pub fn new(flow: SsisControlFlowKey, id: impl Into<String>) -> Self {
        Self {
            base: SsisBase::new(id),
            flow,
            task_type: Self::DEFAULT_TASK_TYPE.to_string(),
            input_control_tasks: Vec::new(),
            inlets: Vec::new(),
            outlets: Vec::new(),
        }
    }

    pub fn key(&self) -> SsisControlTaskKey {
        SsisControlTaskKey::new(self.flow.clone(), &self.base.id)
    }
}

impl SsisEntityBuilder for SsisControlTaskBuilder {
    fn urn(&self) -> Urn {
        self.key().to_urn()
    }

    fn generate_proposals(&self, materialize_iolets: bool) -> Vec<ChangeProposal> {
        let urn = self.urn();
        let info = Aspect::SsisControlTaskInfo(SsisControlTaskInfo {
            fields: self.base.info_fields(),
            control_flow_urn: Some(self.flow.to_urn().to_string()),
            task_type: Some(self.task_type.clone()),
        });
        let io = InputOutput {
            input_datasets: self.inlets.iter().map(Urn::to_string).collect(),
            output_datasets: self.outlets.iter().map(Urn::to_string).collect(),
            input_control_tasks: self.input_control_tasks.iter().map(Urn::to_string).collect(),
            containing_control_task: None,
        };
        let io = io_proposals(&urn, io, &self.inlets, &self.outlets, materialize_iolets);
        self.base
            .proposals(&urn, &self.flow.ssis_package.orchestrator, info, io)
    }
}

// ── Data flow ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsisDataFlowBuilder {
    pub base: SsisBase,
    pub package: SsisPackageKey,
    /// The control task that runs this data flow, if known.
    pub control_task: Option<Urn>,
    pub inlets: Vec<Urn>,
    pub outlets: Vec<Urn>,
}

impl SsisDataFlowBuilder {
    pub fn new(package: SsisPackageKey, id: impl Into<String>) -> Self {
        Self {
            base: SsisBase::new(id),
            package,
            control_task: None,
            inlets: Vec::new(),
            outlets: Vec::new(),
        }
    }

    pub fn key(&self) -> SsisDataFlowKey {
        SsisDataFlowKey::new(self.package.clone(), &self.base.id)
    }

    fn control_task_urn(&self) -> String {
        self.control_task
            .as_ref()
            .map_or_else(|| UNSPECIFIED.to_string(), Urn::to_string)
    }
}

impl SsisEntityBuilder for SsisDataFlowBuilder {
    fn urn(&self) -> Urn {
        self.key().to_urn()
    }

    fn generate_proposals(&self, materialize_iolets: bool) -> Vec<ChangeProposal> {
        let urn = self.urn();
        let info = Aspect::SsisDataFlowInfo(SsisDataFlowInfo {
            fields: self.base.info_fields(),
            control_task_urn: Some(self.control_task_urn()),
        });
        let io = InputOutput {
            input_datasets: self.inlets.iter().map(Urn::to_string).collect(),
            output_datasets: self.outlets.iter().map(Urn::to_string).collect(),
            input_control_tasks: Vec::new(),
            containing_control_task: Some(self.control_task_urn()),
        };
        let io = io_proposals(&urn, io, &self.inlets, &self.outlets, materialize_iolets);
        self.base
            .proposals(&urn, &self.package.orchestrator, info, io)
    }
}
