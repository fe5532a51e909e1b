//! Proposal sinks.

use crate::{Aspect, AspectError, ChangeProposal};
use catalog_types::Urn;
use std::io::Write;
use tracing::debug;

pub trait Emitter {
    fn emit(&mut self, proposal: &ChangeProposal) -> Result<(), AspectError>;

    fn flush(&mut self) -> Result<(), AspectError> {
        Ok(())
    }
}

/// Collects proposals in memory, in emit order.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmitter {
    proposals: Vec<ChangeProposal>,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn proposals(&self) -> &[ChangeProposal] {
        &self.proposals
    }

    pub fn into_proposals(self) -> Vec<ChangeProposal> {
        self.proposals
    }

    pub fn for_entity<'a>(&'a self, urn: &'a Urn) -> impl Iterator<Item = &'a ChangeProposal> {
        self.proposals.iter().filter(move |p| &p.entity_urn == urn)
    }

    /// The most recently emitted `aspect_name` for `urn`.
    pub fn latest(&self, urn: &Urn, aspect_name: &str) -> Result<&Aspect, AspectError> {
        self.proposals
            .iter()
            .rev()
            .find(|p| &p.entity_urn == urn && p.aspect_name == aspect_name)
            .map(|p| &p.aspect)
            .ok_or_else(|| AspectError::MissingAspect {
                urn: urn.to_string(),
                aspect: aspect_name.to_string(),
            })
    }
}

impl Emitter for MemoryEmitter {
    fn emit(&mut self, proposal: &ChangeProposal) -> Result<(), AspectError> {
        self.proposals.push(proposal.clone());
        Ok(())
    }
}

/// Writes one JSON proposal per line.
#[derive(Debug)]
pub struct JsonLinesEmitter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Emitter for JsonLinesEmitter<W> {
    fn emit(&mut self, proposal: &ChangeProposal) -> Result<(), AspectError> {
        serde_json::to_writer(&mut self.writer, proposal)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        debug!(
            urn = %proposal.entity_urn,
            aspect = %proposal.aspect_name,
            "Proposal written"
        );
        Ok(())
    }

    fn flush(&mut self) -> Result<(), AspectError> {
        self.writer.flush()?;
        Ok(())
    }
}
