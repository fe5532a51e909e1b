use catalog_aspects::{
    Aspect, AspectError, ChangeProposal, Emitter, EnvelopedAspect, JsonLinesEmitter, MemoryEmitter,
    SsisControlFlowBuilder, SsisControlTaskBuilder, SsisDataFlowBuilder, SsisEntityBuilder,
    SsisPackageBuilder, map_entity,
};
use catalog_model::{OwnershipSourceType, OwnershipType, resolve_display_name};
use catalog_types::{SsisControlFlowKey, SsisPackageKey, Urn};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::io::{BufRead, BufReader, Seek};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn package_key() -> SsisPackageKey {
    SsisPackageKey::new("mssql", "load_dw", "PROD")
}

fn dataset(name: &str) -> Urn {
    Urn::parse(&format!("urn:li:dataset:(urn:li:dataPlatform:mssql,{name},PROD)")).unwrap()
}

fn aspect_names(proposals: &[ChangeProposal]) -> Vec<&str> {
    proposals.iter().map(|p| p.aspect_name.as_str()).collect()
}

// ── Package ──────────────────────────────────────────────────────

#[test]
fn package_defaults_to_unspecified() {
    let builder = SsisPackageBuilder::new("load_dw");
    assert_eq!(
        builder.urn().to_string(),
        "urn:li:ssisPackage:(unspecified,load_dw,unspecified)"
    );
}

#[test]
fn package_emits_info_editable_ownership_tags() {
    let builder = SsisPackageBuilder::new("load_dw")
        .orchestrator("mssql")
        .cluster("PROD");
    let proposals = builder.generate_proposals(true);
    assert_eq!(
        aspect_names(&proposals),
        vec!["ssisPackageInfo", "editableSsisPackageProperties", "ownership", "globalTags"]
    );

    let Aspect::SsisPackageInfo(info) = &proposals[0].aspect else {
        panic!("expected package info");
    };
    assert_eq!(info.fields.name.as_deref(), Some("load_dw"));
}

#[test]
fn ownership_merges_users_and_groups() {
    let mut builder = SsisPackageBuilder::new("p").orchestrator("mssql");
    builder.base.owners.insert("alice".into());
    builder.base.group_owners.insert("etl".into());

    let proposals = builder.generate_proposals(false);
    let Aspect::Ownership(ownership) = &proposals[2].aspect else {
        panic!("expected ownership");
    };
    let owners: Vec<&str> = ownership.owners.iter().map(|o| o.owner.as_str()).collect();
    assert_eq!(owners, vec!["urn:li:corpGroup:etl", "urn:li:corpuser:alice"]);
    for owner in &ownership.owners {
        assert_eq!(owner.ownership_type, Some(OwnershipType::Developer));
        assert_eq!(
            owner.source.as_ref().map(|s| s.source_type),
            Some(OwnershipSourceType::Service)
        );
    }
    let last_modified = ownership.last_modified.as_ref().unwrap();
    assert_eq!(last_modified.time, 0);
    assert_eq!(last_modified.actor, Some(Urn::corp_user("mssql")));
}

// ── Children ─────────────────────────────────────────────────────

#[test]
fn control_flow_links_package() {
    let mut builder = SsisControlFlowBuilder::new(package_key(), "main");
    builder.base.name = Some("Main".into());
    let proposals = builder.generate_proposals(true);

    assert_eq!(
        builder.urn().to_string(),
        "urn:li:ssisControlFlow:(urn:li:ssisPackage:(mssql,load_dw,PROD),main)"
    );
    assert_eq!(proposals.len(), 4);
    let Aspect::SsisControlFlowInfo(info) = &proposals[0].aspect else {
        panic!("expected control flow info");
    };
    assert_eq!(info.fields.name.as_deref(), Some("Main"));
    assert_eq!(
        info.package_urn.as_deref(),
        Some("urn:li:ssisPackage:(mssql,load_dw,PROD)")
    );
}

#[test]
fn control_task_materializes_iolets() {
    let flow = SsisControlFlowKey::new(package_key(), "main");
    let mut builder = SsisControlTaskBuilder::new(flow, "t1");
    builder.inlets = vec![dataset("orders")];
    builder.outlets = vec![dataset("dw_orders")];

    let proposals = builder.generate_proposals(true);
    assert_eq!(
        aspect_names(&proposals),
        vec![
            "ssisControlTaskInfo",
            "editableSsisControlTaskProperties",
            "ssisControlTaskInputOutput",
            "status",
            "status",
            "ownership",
            "globalTags",
        ]
    );
    assert_eq!(proposals[3].entity_urn, dataset("orders"));
    assert_eq!(proposals[4].entity_urn, dataset("dw_orders"));
    assert_eq!(proposals[3].entity_type, "dataset");

    let Aspect::SsisControlTaskInfo(info) = &proposals[0].aspect else {
        panic!("expected control task info");
    };
    assert_eq!(info.task_type.as_deref(), Some("SCRIPT"));

    let without = builder.generate_proposals(false);
    assert_eq!(without.len(), 5);
}

#[test]
fn control_task_ownership_uses_package_orchestrator() {
    let flow = SsisControlFlowKey::new(package_key(), "main");
    let builder = SsisControlTaskBuilder::new(flow, "t1");
    let proposals = builder.generate_proposals(false);
    let Aspect::Ownership(ownership) = &proposals[3].aspect else {
        panic!("expected ownership");
    };
    assert_eq!(
        ownership.last_modified.as_ref().and_then(|s| s.actor.clone()),
        Some(Urn::corp_user("mssql"))
    );
}

#[test]
fn data_flow_records_control_task() {
    let mut builder = SsisDataFlowBuilder::new(package_key(), "df");
    builder.inlets = vec![dataset("a")];
    let proposals = builder.generate_proposals(false);

    let Aspect::InputOutput(io) = &proposals[2].aspect else {
        panic!("expected input/output");
    };
    assert_eq!(io.input_datasets, vec![dataset("a").to_string()]);
    assert_eq!(io.containing_control_task.as_deref(), Some("unspecified"));
    assert_eq!(proposals[2].aspect_name, "ssisDataFlowInputOutput");
}

#[test]
fn emitted_aspects_map_back_to_entity() {
    let mut builder = SsisDataFlowBuilder::new(package_key(), "df");
    builder.base.name = Some("Load Facts".into());
    builder.base.tags.insert("nightly".into());

    let aspects: Vec<EnvelopedAspect> = builder
        .generate_proposals(false)
        .into_iter()
        .map(|p| p.aspect.into())
        .collect();
    let entity = map_entity(&builder.urn(), &aspects).unwrap();
    assert_eq!(resolve_display_name(&entity), "Load Facts");
    assert_eq!(entity.global_tags.unwrap().tags[0].tag, "urn:li:tag:nightly");
}

// ── Emitters ─────────────────────────────────────────────────────

#[test]
fn memory_emitter_collects_in_order() {
    init_tracing();
    let builder = SsisPackageBuilder::new("p").orchestrator("mssql");
    let mut emitter = MemoryEmitter::new();
    let count = builder.emit(&mut emitter).unwrap();

    assert_eq!(count, 4);
    assert_eq!(aspect_names(emitter.proposals()), aspect_names(&builder.generate_proposals(true)));
    assert!(emitter.latest(&builder.urn(), "ownership").is_ok());
    assert!(matches!(
        emitter.latest(&builder.urn(), "deprecation"),
        Err(AspectError::MissingAspect { .. })
    ));
    assert_eq!(emitter.for_entity(&builder.urn()).count(), 4);
}

#[test]
fn json_lines_emitter_writes_one_proposal_per_line() {
    init_tracing();
    let builder = SsisPackageBuilder::new("p").orchestrator("mssql");
    let mut emitter = JsonLinesEmitter::new(Vec::new());
    builder.emit(&mut emitter).unwrap();
    emitter.flush().unwrap();
    assert_eq!(emitter.written(), 4);

    let bytes = emitter.into_inner();
    let lines: Vec<ChangeProposal> = bytes
        .split(|b| *b == b'\n')
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_slice(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].aspect_name, "ssisPackageInfo");
    assert_eq!(lines[0].entity_urn, builder.urn());
}

#[test]
fn json_lines_emitter_writes_to_file() {
    init_tracing();
    let file = tempfile::tempfile().unwrap();
    let flow = SsisControlFlowKey::new(package_key(), "main");
    let mut builder = SsisControlTaskBuilder::new(flow, "t1");
    builder.outlets = vec![dataset("out")];

    let mut emitter = JsonLinesEmitter::new(file);
    let count = builder.emit(&mut emitter).unwrap();
    emitter.flush().unwrap();

    let mut file = emitter.into_inner();
    file.rewind().unwrap();
    let lines = BufReader::new(file).lines().count();
    assert_eq!(lines, count);
}

struct FailingEmitter;

impl Emitter for FailingEmitter {
    fn emit(&mut self, _proposal: &ChangeProposal) -> Result<(), AspectError> {
        Err(std::io::Error::other("sink closed").into())
    }
}

#[test]
fn emit_failure_names_the_aspect() {
    let builder = SsisPackageBuilder::new("p");
    let err = builder.emit(&mut FailingEmitter).unwrap_err();
    match err {
        AspectError::Emit { aspect, source, .. } => {
            assert_eq!(aspect, "ssisPackageInfo");
            assert!(matches!(*source, AspectError::Io(_)));
        }
        other => panic!("expected emit error, got {other:?}"),
    }
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn tags_are_emitted_sorted(tags in prop::collection::btree_set("[a-z]{1,8}", 0..8)) {
        let mut builder = SsisPackageBuilder::new("p");
        builder.base.tags = tags.clone();
        let proposals = builder.generate_proposals(false);
        let Aspect::GlobalTags(global) = &proposals[3].aspect else {
            panic!("expected tags");
        };
        let emitted: Vec<String> = global.tags.iter().map(|t| t.tag.clone()).collect();
        let mut sorted = emitted.clone();
        sorted.sort();
        prop_assert_eq!(&emitted, &sorted);
        prop_assert_eq!(emitted.len(), tags.len());
    }

    #[test]
    fn info_name_defaults_to_id(id in "[a-z0-9_]{1,12}") {
        let builder = SsisPackageBuilder::new(id.clone());
        let proposals = builder.generate_proposals(false);
        let Aspect::SsisPackageInfo(info) = &proposals[0].aspect else {
            panic!("expected package info");
        };
        prop_assert_eq!(info.fields.name.as_deref(), Some(id.as_str()));
    }
}
