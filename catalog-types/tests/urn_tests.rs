use catalog_types::{EntityKind, Urn};
use proptest::prelude::*;
use std::str::FromStr;

// ── Parsing ───────────────────────────────────────────────────────

#[test]
fn parse_plain_key() {
    let urn = Urn::parse("urn:li:corpuser:jdoe").unwrap();
    assert_eq!(urn.entity_type(), "corpuser");
    assert_eq!(urn.key(), "jdoe");
    assert_eq!(urn.kind(), Some(EntityKind::CorpUser));
    assert_eq!(urn.parts(), vec!["jdoe"]);
}

#[test]
fn parse_tuple_key() {
    let urn = Urn::parse("urn:li:ssisPackage:(mssql,load_dw,PROD)").unwrap();
    assert_eq!(urn.kind(), Some(EntityKind::SsisPackage));
    assert_eq!(urn.parts(), vec!["mssql", "load_dw", "PROD"]);
    assert_eq!(urn.part(2), Some("PROD"));
    assert_eq!(urn.part(3), None);
}

#[test]
fn parse_nested_tuple_key() {
    let urn =
        Urn::parse("urn:li:ssisControlFlow:(urn:li:ssisPackage:(mssql,load_dw,PROD),cf_main)")
            .unwrap();
    assert_eq!(
        urn.parts(),
        vec!["urn:li:ssisPackage:(mssql,load_dw,PROD)", "cf_main"]
    );
}

#[test]
fn parse_rejects_missing_prefix() {
    assert!(Urn::parse("ssisPackage:(a,b,c)").is_err());
    assert!(Urn::parse("urn:li:").is_err());
    assert!(Urn::parse("urn:li:corpuser:").is_err());
}

#[test]
fn parse_rejects_unbalanced_tuple() {
    assert!(Urn::parse("urn:li:ssisPackage:(a,b,c").is_err());
    assert!(Urn::parse("urn:li:ssisPackage:(a,(b,c)").is_err());
}

#[test]
fn unknown_entity_type_has_no_kind() {
    let urn = Urn::parse("urn:li:task:1").unwrap();
    assert_eq!(urn.kind(), None);
}

#[test]
fn from_str_matches_parse() {
    let a = Urn::from_str("urn:li:tag:pii").unwrap();
    let b = Urn::parse("urn:li:tag:pii").unwrap();
    assert_eq!(a, b);
}

// ── Constructors ─────────────────────────────────────────────────

#[test]
fn helper_constructors() {
    assert_eq!(Urn::corp_user("jdoe").to_string(), "urn:li:corpuser:jdoe");
    assert_eq!(Urn::corp_group("etl").to_string(), "urn:li:corpGroup:etl");
    assert_eq!(Urn::tag("pii").to_string(), "urn:li:tag:pii");
    assert_eq!(
        Urn::data_platform("mssql").to_string(),
        "urn:li:dataPlatform:mssql"
    );
}

#[test]
fn from_parts_builds_tuple() {
    let urn = Urn::from_parts("ssisPackage", &["mssql", "pkg", "DEV"]);
    assert_eq!(urn.to_string(), "urn:li:ssisPackage:(mssql,pkg,DEV)");
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn serializes_as_string() {
    let urn = Urn::tag("pii");
    let json = serde_json::to_string(&urn).unwrap();
    assert_eq!(json, "\"urn:li:tag:pii\"");
    let back: Urn = serde_json::from_str(&json).unwrap();
    assert_eq!(back, urn);
}

#[test]
fn deserialize_rejects_garbage() {
    let result: Result<Urn, _> = serde_json::from_str("\"not-a-urn\"");
    assert!(result.is_err());
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn tuple_parts_survive_display_and_parse(
        a in "[a-zA-Z0-9_]{1,12}",
        b in "[a-zA-Z0-9_]{1,12}",
        c in "[a-zA-Z0-9_]{1,12}",
    ) {
        let urn = Urn::from_parts("ssisPackage", &[&a, &b, &c]);
        let parsed = Urn::parse(&urn.to_string()).unwrap();
        prop_assert_eq!(parsed.parts(), vec![a.as_str(), b.as_str(), c.as_str()]);
    }
}
