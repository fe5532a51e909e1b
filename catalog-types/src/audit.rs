//! Audit stamps and proposal identifiers for catalog writes.

use crate::Urn;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a change proposal.
/// Uses UUID v7 so proposals sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposalId(Uuid);

impl ProposalId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ProposalId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProposalId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Who changed something, and when (milliseconds since Unix epoch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStamp {
    pub time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Urn>,
}

impl AuditStamp {
    /// Stamp for `actor` at the current time.
    #[must_use]
    pub fn now(actor: Option<Urn>) -> Self {
        Self {
            time: Utc::now().timestamp_millis(),
            actor,
        }
    }

    #[must_use]
    pub fn at(time: i64, actor: Option<Urn>) -> Self {
        Self { time, actor }
    }

    /// The stamp time as a UTC datetime, if it is in range.
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.time).single()
    }
}
