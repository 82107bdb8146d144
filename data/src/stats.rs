//! Stat pool resource (species typing and base stats)

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::type_table::canonical_tag;
use crate::{ResourceError, ResourceKind, Result, from_json};

/// Six base stats as listed in the stat pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStatsRecord {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

/// One species in the stat pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatPoolEntry {
    pub name: String,

    /// One or two type tags, canonicalized on parse
    #[serde(rename = "type", alias = "types")]
    pub types: Vec<String>,

    #[serde(rename = "stat", alias = "stats", alias = "baseStats")]
    pub stats: BaseStatsRecord,
}

/// Parse and validate the stat pool
///
/// Names must be unique and non-empty, every entry needs one or two known
/// type tags, and base HP must be positive.
pub fn parse_stat_pool(json: &str) -> Result<Vec<StatPoolEntry>> {
    let mut entries: Vec<StatPoolEntry> = from_json(ResourceKind::StatPool, json)?;

    let mut seen = HashSet::new();
    for entry in &mut entries {
        if entry.name.trim().is_empty() {
            return Err(invalid("entry with an empty name".to_string()));
        }
        if !seen.insert(entry.name.clone()) {
            return Err(invalid(format!("duplicate entry '{}'", entry.name)));
        }
        if entry.types.is_empty() || entry.types.len() > 2 {
            return Err(invalid(format!(
                "'{}' has {} types, expected 1 or 2",
                entry.name,
                entry.types.len()
            )));
        }
        for tag in &mut entry.types {
            let canonical = canonical_tag(tag).ok_or_else(|| {
                invalid(format!("'{}' has unknown type '{}'", entry.name, tag))
            })?;
            *tag = canonical.to_string();
        }
        if entry.stats.hp == 0 {
            return Err(invalid(format!("'{}' has a base HP of 0", entry.name)));
        }
    }

    Ok(entries)
}

fn invalid(reason: String) -> ResourceError {
    ResourceError::invalid(ResourceKind::StatPool, reason)
}
