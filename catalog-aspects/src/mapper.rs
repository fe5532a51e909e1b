//! Aspects → [`CatalogEntity`], the shape descriptors render.

use crate::{Aspect, AspectError, EnvelopedAspect, InfoFields};
use catalog_model::{
    CatalogEntity, DataPlatform, Domain, DomainAssociation, EditableProperties, EntityProperties,
};
use catalog_types::{EntityKind, SsisKey, SsisPackageKey, Urn};
use tracing::debug;

/// Builds the entity payload for `urn` from its stored aspects.
///
/// Key-derived fields (legacy name, parent links, package platform) come
/// from the URN itself, so an entity with no aspects still maps.
pub fn map_entity(urn: &Urn, aspects: &[EnvelopedAspect]) -> Result<CatalogEntity, AspectError> {
    let key = ssis_key(urn)?;
    let mut entity = CatalogEntity::stub(urn.to_string(), key.kind());
    apply_key(&mut entity, &key);

    for enveloped in aspects {
        apply_aspect(&mut entity, &key, &enveloped.aspect);
    }
    entity.last_ingested = aspects
        .iter()
        .filter_map(|a| a.system_metadata.last_observed)
        .max();

    debug!(urn = %urn, aspects = aspects.len(), "Mapped entity");
    Ok(entity)
}

pub(crate) fn ssis_key(urn: &Urn) -> Result<SsisKey, AspectError> {
    match urn.kind() {
        Some(kind) if kind.is_ssis() => Ok(SsisKey::from_urn(urn)?),
        _ => Err(AspectError::UnsupportedEntity(urn.to_string())),
    }
}

fn package_stub(key: &SsisPackageKey) -> CatalogEntity {
    let mut package = CatalogEntity::stub(key.to_urn().to_string(), EntityKind::SsisPackage);
    package.platform = Some(DataPlatform {
        urn: key.platform_urn().to_string(),
        ..Default::default()
    });
    package
}

fn apply_key(entity: &mut CatalogEntity, key: &SsisKey) {
    entity.name = Some(key.id().to_string());
    match key {
        SsisKey::Package(k) => {
            entity.orchestrator = Some(k.orchestrator.clone());
            entity.cluster = Some(k.cluster.clone());
            entity.platform = package_stub(k).platform;
        }
        SsisKey::ControlFlow(k) => {
            entity.ssis_package = Some(Box::new(package_stub(&k.ssis_package)));
        }
        SsisKey::ControlTask(k) => {
            let mut flow =
                CatalogEntity::stub(k.flow.to_urn().to_string(), EntityKind::SsisControlFlow);
            flow.ssis_package = Some(Box::new(package_stub(&k.flow.ssis_package)));
            entity.flow = Some(Box::new(flow));
        }
        SsisKey::DataFlow(k) => {
            entity.ssis_package = Some(Box::new(package_stub(&k.ssis_package)));
        }
    }
}

fn properties_from_info(info: &InfoFields, key: &SsisKey) -> EntityProperties {
    EntityProperties {
        name: Some(info.name.clone().unwrap_or_else(|| key.id().to_string())),
        description: info.description.clone(),
        external_url: info.external_url.clone(),
        source_url: info.source_url.clone(),
        created: info.created.as_ref().map(|c| c.time),
        project: None,
        custom_properties: info.custom_properties.clone(),
    }
}

fn apply_aspect(entity: &mut CatalogEntity, key: &SsisKey, aspect: &Aspect) {
    match aspect {
        Aspect::SsisPackageInfo(_)
        | Aspect::SsisControlFlowInfo(_)
        | Aspect::SsisControlTaskInfo(_)
        | Aspect::SsisDataFlowInfo(_) => {
            if let Some(info) = aspect.info_fields() {
                entity.properties = Some(properties_from_info(info, key));
            }
        }
        Aspect::EditableProperties(editable) => {
            entity.editable_properties = Some(EditableProperties {
                description: editable.description.clone(),
            });
        }
        Aspect::Ownership(ownership) => entity.ownership = Some(ownership.clone()),
        Aspect::GlobalTags(tags) => entity.global_tags = Some(tags.clone()),
        Aspect::GlossaryTerms(terms) => entity.glossary_terms = Some(terms.clone()),
        Aspect::Domains(domains) => {
            entity.domain = Some(DomainAssociation {
                domain: domains.domains.first().map(|urn| Domain {
                    urn: urn.clone(),
                    name: None,
                }),
            });
        }
        Aspect::Deprecation(deprecation) => entity.deprecation = Some(deprecation.clone()),
        Aspect::Status(status) => entity.status = Some(*status),
        Aspect::DataPlatformInstance(instance) => {
            entity.data_platform_instance = Some(instance.clone());
        }
        Aspect::InputOutput(io) => entity.input_output = Some(io.clone()),
        Aspect::InstitutionalMemory(memory) => {
            entity.institutional_memory = Some(memory.clone());
        }
    }
}
