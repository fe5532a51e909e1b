use catalog_model::{CatalogEntity, RelationshipKey, project_children};
use catalog_types::EntityKind;
use proptest::prelude::*;
use serde_json::json;

fn entity(value: serde_json::Value) -> CatalogEntity {
    serde_json::from_value(value).unwrap()
}

// ── Projection ───────────────────────────────────────────────────

#[test]
fn missing_parent_projects_empty() {
    let list = project_children(None, RelationshipKey::ChildTasks);
    assert!(list.items.is_empty());
    assert_eq!(list.total, 0);
}

#[test]
fn missing_block_projects_empty() {
    let parent = entity(json!({ "urn": "urn:li:task:1" }));
    let list = project_children(Some(&parent), RelationshipKey::ChildTasks);
    assert!(list.items.is_empty());
    assert_eq!(list.total, 0);
}

#[test]
fn declared_zero_total() {
    let parent = entity(json!({ "urn": "urn:li:task:1", "childTasks": { "total": 0 } }));
    let list = project_children(Some(&parent), RelationshipKey::ChildTasks);
    assert_eq!(list.total, 0);
    assert_eq!(
        list.title("Ssis Control Task", "Ssis Control Tasks"),
        "Contains 0 Ssis Control Tasks"
    );
}

#[test]
fn single_child_uses_singular() {
    let parent = entity(json!({
        "urn": "urn:li:task:1",
        "childTasks": { "total": 1, "relationships": [ { "entity": { "urn": "t1" } } ] }
    }));
    let list = project_children(Some(&parent), RelationshipKey::ChildTasks);
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].urn, "t1");
    assert_eq!(
        list.title("Ssis Control Task", "Ssis Control Tasks"),
        "Contains 1 Ssis Control Task"
    );
}

#[test]
fn items_keep_edge_order() {
    let parent = entity(json!({
        "urn": "p",
        "childControlFlow": { "relationships": [
            { "type": "IsPartOf", "entity": { "urn": "c" } },
            { "entity": { "urn": "a" } },
            { "entity": { "urn": "b" } }
        ] }
    }));
    let list = project_children(Some(&parent), RelationshipKey::ChildControlFlow);
    let urns: Vec<&str> = list.items.iter().map(|e| e.urn.as_str()).collect();
    assert_eq!(urns, vec!["c", "a", "b"]);
    assert_eq!(list.total, 3);
}

#[test]
fn declared_total_may_exceed_fetched_edges() {
    let parent = entity(json!({
        "urn": "p",
        "childDataFlow": { "total": 40, "relationships": [ { "entity": { "urn": "d1" } } ] }
    }));
    let list = project_children(Some(&parent), RelationshipKey::ChildDataFlow);
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.total, 40);
}

#[test]
fn edges_without_entity_are_skipped() {
    let parent = entity(json!({
        "urn": "p",
        "childTasks": { "relationships": [ { "entity": null }, { "entity": { "urn": "t2" } } ] }
    }));
    let list = project_children(Some(&parent), RelationshipKey::ChildTasks);
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.total, 1);
}

#[test]
fn null_relationships_is_empty() {
    let parent = entity(json!({ "urn": "p", "childTasks": { "total": 5, "relationships": null } }));
    let list = project_children(Some(&parent), RelationshipKey::ChildTasks);
    assert!(list.items.is_empty());
    assert_eq!(list.total, 5);
}

// ── Keys ─────────────────────────────────────────────────────────

#[test]
fn keys_know_their_kinds() {
    assert_eq!(RelationshipKey::ChildTasks.parent_kind(), EntityKind::SsisControlFlow);
    assert_eq!(RelationshipKey::ChildTasks.target_kind(), EntityKind::SsisControlTask);
    assert_eq!(RelationshipKey::ChildControlFlow.parent_kind(), EntityKind::SsisPackage);
    assert_eq!(RelationshipKey::ChildControlFlow.target_kind(), EntityKind::SsisControlFlow);
    assert_eq!(RelationshipKey::ChildDataFlow.target_kind(), EntityKind::SsisDataFlow);
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn label_is_singular_only_for_one(total in 0u32..10_000) {
        let parent = entity(json!({ "urn": "p", "childTasks": { "total": total } }));
        let list = project_children(Some(&parent), RelationshipKey::ChildTasks);
        let expected = if total == 1 { "one" } else { "many" };
        prop_assert_eq!(list.label("one", "many"), expected);
    }

    #[test]
    fn undeclared_total_counts_projected_items(count in 0usize..64) {
        let edges: Vec<_> = (0..count)
            .map(|i| json!({ "entity": { "urn": format!("t{i}") } }))
            .collect();
        let parent = entity(json!({ "urn": "p", "childTasks": { "relationships": edges } }));
        let list = project_children(Some(&parent), RelationshipKey::ChildTasks);
        prop_assert_eq!(list.items.len(), count);
        prop_assert_eq!(list.total as usize, count);
    }
}
