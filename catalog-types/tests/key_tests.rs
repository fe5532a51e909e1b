use catalog_types::{
    AuditStamp, EntityKind, Error, ProposalId, SsisControlFlowKey, SsisControlTaskKey,
    SsisDataFlowKey, SsisKey, SsisPackageKey, Urn,
};
use pretty_assertions::assert_eq;

fn package() -> SsisPackageKey {
    SsisPackageKey::new("mssql", "load_dw", "PROD")
}

// ── Package ──────────────────────────────────────────────────────

#[test]
fn package_urn_format() {
    assert_eq!(
        package().to_urn().to_string(),
        "urn:li:ssisPackage:(mssql,load_dw,PROD)"
    );
}

#[test]
fn package_from_urn() {
    let urn = Urn::parse("urn:li:ssisPackage:(mssql,load_dw,PROD)").unwrap();
    assert_eq!(SsisPackageKey::from_urn(&urn).unwrap(), package());
}

#[test]
fn package_platform_is_orchestrator() {
    assert_eq!(
        package().platform_urn().to_string(),
        "urn:li:dataPlatform:mssql"
    );
}

#[test]
fn package_wrong_arity_is_invalid_key() {
    let urn = Urn::parse("urn:li:ssisPackage:(mssql,load_dw)").unwrap();
    let err = SsisPackageKey::from_urn(&urn).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidKey {
            kind: EntityKind::SsisPackage,
            ..
        }
    ));
}

#[test]
fn package_from_other_kind_is_rejected() {
    let urn = Urn::parse("urn:li:corpuser:jdoe").unwrap();
    assert!(SsisPackageKey::from_urn(&urn).is_err());
}

// ── Children ─────────────────────────────────────────────────────

#[test]
fn control_flow_urn_nests_package() {
    let key = SsisControlFlowKey::new(package(), "cf_main");
    assert_eq!(
        key.to_urn().to_string(),
        "urn:li:ssisControlFlow:(urn:li:ssisPackage:(mssql,load_dw,PROD),cf_main)"
    );
    assert_eq!(SsisControlFlowKey::from_urn(&key.to_urn()).unwrap(), key);
}

#[test]
fn control_task_urn_nests_flow() {
    let flow = SsisControlFlowKey::new(package(), "cf_main");
    let key = SsisControlTaskKey::new(flow, "truncate_stage");
    assert_eq!(
        key.to_urn().to_string(),
        "urn:li:ssisControlTask:(urn:li:ssisControlFlow:(urn:li:ssisPackage:(mssql,load_dw,PROD),cf_main),truncate_stage)"
    );
    assert_eq!(SsisControlTaskKey::from_urn(&key.to_urn()).unwrap(), key);
}

#[test]
fn data_flow_urn_nests_package() {
    let key = SsisDataFlowKey::new(package(), "df_customers");
    assert_eq!(SsisDataFlowKey::from_urn(&key.to_urn()).unwrap(), key);
}

#[test]
fn child_with_broken_parent_is_error() {
    let urn = Urn::parse("urn:li:ssisControlFlow:(not-a-urn,cf)").unwrap();
    assert!(SsisControlFlowKey::from_urn(&urn).is_err());
}

// ── SsisKey dispatch ─────────────────────────────────────────────

#[test]
fn ssis_key_dispatches_on_entity_type() {
    let flow = SsisControlFlowKey::new(package(), "cf_main");
    let task = SsisControlTaskKey::new(flow, "t1");
    let key = SsisKey::from_urn(&task.to_urn()).unwrap();

    assert_eq!(key.kind(), EntityKind::SsisControlTask);
    assert_eq!(key.id(), "t1");
    assert_eq!(key.package(), &package());
    assert_eq!(key.orchestrator(), "mssql");
    assert_eq!(key.to_urn(), task.to_urn());
}

#[test]
fn ssis_key_rejects_non_ssis() {
    let urn = Urn::data_platform("mssql");
    assert!(matches!(
        SsisKey::from_urn(&urn),
        Err(Error::UnsupportedEntityType(t)) if t == "dataPlatform"
    ));
}

// ── Kinds ────────────────────────────────────────────────────────

#[test]
fn kind_names_round_trip() {
    for kind in EntityKind::SSIS {
        assert!(kind.is_ssis());
        assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
    }
    assert!(!EntityKind::Dataset.is_ssis());
    assert!("ssisWhatever".parse::<EntityKind>().is_err());
}

#[test]
fn kind_serializes_as_entity_name() {
    let json = serde_json::to_string(&EntityKind::SsisDataFlow).unwrap();
    assert_eq!(json, "\"ssisDataFlow\"");
}

// ── Audit ────────────────────────────────────────────────────────

#[test]
fn proposal_ids_are_unique() {
    let a = ProposalId::new();
    let b = ProposalId::new();
    assert_ne!(a, b);
    assert_eq!(a.to_string().parse::<ProposalId>().unwrap(), a);
}

#[test]
fn audit_stamp_datetime() {
    let stamp = AuditStamp::at(0, Some(Urn::corp_user("datahub")));
    assert_eq!(stamp.datetime().unwrap().timestamp(), 0);
    let json = serde_json::to_value(&stamp).unwrap();
    assert_eq!(json["actor"], "urn:li:corpuser:datahub");
}
