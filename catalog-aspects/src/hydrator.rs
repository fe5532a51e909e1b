//! Search-document hydration.

use crate::EnvelopedAspect;
use catalog_types::{EntityKind, SsisKey, Urn};
use serde_json::{Map, Value};
use tracing::{error, info};

const NAME: &str = "name";
const ORCHESTRATOR: &str = "orchestrator";
const SSIS_PACKAGE_ID: &str = "ssisPackageId";
const CLUSTER: &str = "cluster";
const CONTROL_FLOW_ID: &str = "controlFlowId";
const CONTROL_TASK_ID: &str = "controlTaskId";
const DATA_FLOW_ID: &str = "dataFlowId";

/// Builds the search document for `urn`.
///
/// Returns `None` for an unparseable URN or a kind with no hydrator. A key
/// that fails to parse still yields a document, without the key fields.
pub fn hydrate(urn: &str, aspects: &[EnvelopedAspect]) -> Option<Value> {
    let parsed = match Urn::parse(urn) {
        Ok(parsed) => parsed,
        Err(e) => {
            info!(urn, error = %e, "Invalid URN");
            return None;
        }
    };
    let kind = match parsed.kind() {
        Some(kind) if kind.is_ssis() => kind,
        _ => {
            error!(
                entity_type = parsed.entity_type(),
                urn, "Unable to find valid hydrator for entity type"
            );
            return None;
        }
    };

    let mut document = Map::new();
    document.insert("urn".into(), Value::from(urn));
    document.insert("type".into(), Value::from(kind.as_str()));

    if let Some(name) = aspects
        .iter()
        .find_map(|a| a.aspect.info_fields())
        .and_then(|info| info.name.clone())
    {
        document.insert(NAME.into(), Value::from(name));
    }

    match SsisKey::from_urn(&parsed) {
        Ok(key) => insert_key_fields(&mut document, &key),
        Err(e) => info!(urn, error = %e, "Failed to parse key for {}", kind),
    }

    Some(Value::Object(document))
}

fn insert_key_fields(document: &mut Map<String, Value>, key: &SsisKey) {
    match key {
        SsisKey::Package(k) => {
            document.insert(ORCHESTRATOR.into(), Value::from(k.orchestrator.as_str()));
            document.insert(SSIS_PACKAGE_ID.into(), Value::from(k.ssis_package_id.as_str()));
            document.insert(CLUSTER.into(), Value::from(k.cluster.as_str()));
        }
        SsisKey::ControlFlow(k) => {
            document.insert(CONTROL_FLOW_ID.into(), Value::from(k.control_flow_id.as_str()));
        }
        SsisKey::ControlTask(k) => {
            document.insert(CONTROL_TASK_ID.into(), Value::from(k.control_task_id.as_str()));
        }
        SsisKey::DataFlow(k) => {
            document.insert(DATA_FLOW_ID.into(), Value::from(k.data_flow_id.as_str()));
        }
    }
}

/// Search fields exposed as facets for `kind`.
pub fn facet_fields(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::SsisPackage => &[CLUSTER, ORCHESTRATOR],
        _ => &[],
    }
}
