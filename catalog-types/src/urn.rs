//! Catalog URNs.
//!
//! Every catalog object is addressed by `urn:li:<entityType>:<key>`. The key
//! is either a plain id (`urn:li:corpuser:jdoe`) or a parenthesized tuple
//! whose elements may themselves be URNs:
//!
//! ```text
//! urn:li:ssisControlFlow:(urn:li:ssisPackage:(mssql,load_dw,PROD),cf_main)
//! ```

use crate::{EntityKind, Error};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "urn:li:";

/// A parsed catalog URN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Urn {
    entity_type: String,
    key: String,
}

impl Urn {
    /// Creates a URN with a plain (non-tuple) key.
    pub fn new(entity_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            key: key.into(),
        }
    }

    /// Creates a URN whose key is the tuple `(p0,p1,...)`.
    pub fn from_parts<S: AsRef<str>>(entity_type: impl Into<String>, parts: &[S]) -> Self {
        let joined = parts.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        Self::new(entity_type, format!("({joined})"))
    }

    /// Parses a URN from its string form.
    pub fn parse(s: &str) -> crate::Result<Self> {
        let rest = s
            .strip_prefix(PREFIX)
            .ok_or_else(|| Error::InvalidUrn(s.to_string()))?;
        let (entity_type, key) = rest
            .split_once(':')
            .ok_or_else(|| Error::InvalidUrn(s.to_string()))?;
        if entity_type.is_empty() || key.is_empty() {
            return Err(Error::InvalidUrn(s.to_string()));
        }
        if key.starts_with('(') && !balanced(key) {
            return Err(Error::InvalidUrn(s.to_string()));
        }
        Ok(Self::new(entity_type, key))
    }

    pub fn corp_user(id: &str) -> Self {
        Self::new(EntityKind::CorpUser.as_str(), id)
    }

    pub fn corp_group(id: &str) -> Self {
        Self::new(EntityKind::CorpGroup.as_str(), id)
    }

    pub fn tag(name: &str) -> Self {
        Self::new(EntityKind::Tag.as_str(), name)
    }

    pub fn data_platform(name: &str) -> Self {
        Self::new(EntityKind::DataPlatform.as_str(), name)
    }

    /// The raw entity type segment.
    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// The entity kind, if it is one the catalog knows.
    #[must_use]
    pub fn kind(&self) -> Option<EntityKind> {
        self.entity_type.parse().ok()
    }

    /// The raw key, including parentheses for tuple keys.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Splits a tuple key into its top-level parts. A plain key yields
    /// a single part.
    #[must_use]
    pub fn parts(&self) -> Vec<&str> {
        let Some(inner) = self
            .key
            .strip_prefix('(')
            .and_then(|k| k.strip_suffix(')'))
        else {
            return vec![self.key.as_str()];
        };

        let mut parts = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;
        for (i, c) in inner.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    parts.push(&inner[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        parts.push(&inner[start..]);
        parts
    }

    /// Returns the part at `index`, or `None` when the key is shorter.
    #[must_use]
    pub fn part(&self, index: usize) -> Option<&str> {
        self.parts().get(index).copied()
    }
}

fn balanced(key: &str) -> bool {
    let mut depth = 0i64;
    for c in key.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0 && key.ends_with(')')
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}:{}", self.entity_type, self.key)
    }
}

impl FromStr for Urn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Urn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Urn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
