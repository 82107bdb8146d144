//! Move dex resource (move name -> type, category, base power)

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::type_table::canonical_tag;
use crate::{ResourceError, ResourceKind, Result, from_json};

/// Normalize a name to its lookup ID: lowercase ASCII alphanumerics only
///
/// "U-turn", "u turn" and "uturn" all map to "uturn".
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// One move as stored in the move dex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Type tag, canonicalized on parse
    #[serde(rename = "type")]
    pub move_type: String,

    /// "Physical", "Special" or "Status", canonicalized on parse
    pub category: String,

    #[serde(rename = "basePower", alias = "base_power", alias = "power", default)]
    pub base_power: u16,
}

/// A resolved lookup: display name plus record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry<'a> {
    pub name: &'a str,
    pub record: &'a MoveRecord,
}

/// Move lookup keyed by normalized ID
#[derive(Debug, Clone, Default)]
pub struct MoveDex {
    entries: HashMap<String, (String, MoveRecord)>,
}

impl MoveDex {
    /// Look a move up by any spelling of its name
    pub fn get(&self, name: &str) -> Option<MoveEntry<'_>> {
        self.entries
            .get(&to_id(name))
            .map(|(name, record)| MoveEntry { name, record })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&to_id(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MoveEntry<'_>> {
        self.entries
            .values()
            .map(|(name, record)| MoveEntry { name, record })
    }

    /// Add or replace a move
    pub fn insert(&mut self, name: impl Into<String>, record: MoveRecord) {
        let name = name.into();
        self.entries.insert(to_id(&name), (name, record));
    }
}

impl FromIterator<(String, MoveRecord)> for MoveDex {
    fn from_iter<I: IntoIterator<Item = (String, MoveRecord)>>(iter: I) -> Self {
        let mut dex = MoveDex::default();
        for (name, record) in iter {
            dex.insert(name, record);
        }
        dex
    }
}

/// Parse and validate the move dex
///
/// Keys are display names. Two keys that normalize to the same ID are
/// rejected, as are unknown type tags and categories.
pub fn parse_move_dex(json: &str) -> Result<MoveDex> {
    let raw: BTreeMap<String, MoveRecord> = from_json(ResourceKind::MoveDex, json)?;

    let mut dex = MoveDex::default();
    for (name, mut record) in raw {
        if to_id(&name).is_empty() {
            return Err(invalid(format!("move name '{name}' has no alphanumeric characters")));
        }
        if dex.contains(&name) {
            return Err(invalid(format!("move '{name}' is listed twice")));
        }
        record.move_type = canonical_tag(&record.move_type)
            .ok_or_else(|| invalid(format!("'{name}' has unknown type '{}'", record.move_type)))?
            .to_string();
        record.category = canonical_category(&record.category)
            .ok_or_else(|| {
                invalid(format!("'{name}' has unknown category '{}'", record.category))
            })?
            .to_string();
        dex.insert(name, record);
    }

    Ok(dex)
}

fn canonical_category(category: &str) -> Option<&'static str> {
    match category.trim().to_ascii_lowercase().as_str() {
        "physical" => Some("Physical"),
        "special" => Some("Special"),
        "status" => Some("Status"),
        _ => None,
    }
}

fn invalid(reason: String) -> ResourceError {
    ResourceError::invalid(ResourceKind::MoveDex, reason)
}
