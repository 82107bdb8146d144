//! Usage pool resource (candidate movesets from usage statistics)

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{ResourceError, ResourceKind, Result, from_json};

/// Ability as listed in usage data: a single name or a list ordered by usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AbilityField {
    One(String),
    Many(Vec<String>),
}

impl AbilityField {
    /// The ability to calculate with (first listed for a list)
    pub fn primary(&self) -> Option<&str> {
        let name = match self {
            AbilityField::One(name) => Some(name.as_str()),
            AbilityField::Many(names) => names.first().map(String::as_str),
        };
        name.filter(|name| !name.trim().is_empty())
    }
}

/// Held item as listed in usage data: a single name or item -> usage percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemField {
    One(String),
    Weighted(BTreeMap<String, f64>),
}

impl ItemField {
    /// The item to calculate with (most used for a weighted map)
    pub fn primary(&self) -> Option<&str> {
        let name = match self {
            ItemField::One(name) => Some(name.as_str()),
            ItemField::Weighted(items) => items
                .iter()
                .filter(|(name, _)| !name.eq_ignore_ascii_case("other"))
                .max_by(|a, b| a.1.total_cmp(b.1).then_with(|| b.0.cmp(a.0)))
                .map(|(name, _)| name.as_str()),
        };
        name.filter(|name| !name.trim().is_empty())
    }
}

/// One candidate in the usage pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEntry {
    #[serde(default)]
    pub rank: Option<u32>,

    pub name: String,

    #[serde(default)]
    pub safe_name: Option<String>,

    /// Usage percent within the format
    #[serde(default)]
    pub usage: f64,

    /// Known moves with their usage weight
    #[serde(default)]
    pub moves: BTreeMap<String, f64>,

    #[serde(default)]
    pub ability: Option<AbilityField>,

    #[serde(default, rename = "items", alias = "item")]
    pub item: Option<ItemField>,

    /// Spread text, e.g. "Nature: Adamant EVs: 4/252/0/0/0/252"
    #[serde(default)]
    pub spread: Option<String>,
}

impl UsageEntry {
    pub fn ability(&self) -> Option<&str> {
        self.ability.as_ref().and_then(AbilityField::primary)
    }

    pub fn item(&self) -> Option<&str> {
        self.item.as_ref().and_then(ItemField::primary)
    }

    pub fn spread(&self) -> SpreadRecord {
        self.spread.as_deref().map(parse_spread).unwrap_or_default()
    }
}

/// Nature and EVs pulled out of a spread string; either may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpreadRecord {
    pub nature: Option<String>,
    /// hp/atk/def/spa/spd/spe, each capped at 252
    pub evs: Option<[u8; 6]>,
}

/// Parse a spread string of the form "Nature: Adamant EVs: 4/252/0/0/0/252"
///
/// Labels are case-insensitive. A part that cannot be read is left as None
/// rather than failing the whole entry.
pub fn parse_spread(text: &str) -> SpreadRecord {
    let lower = text.to_ascii_lowercase();

    let nature = value_after(text, &lower, "nature:")
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty());

    let evs = value_after(text, &lower, "evs:").and_then(|rest| {
        let digits: String = rest
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '/')
            .collect();
        let values: Vec<u16> = digits
            .split('/')
            .map(|v| v.parse::<u16>())
            .collect::<std::result::Result<_, _>>()
            .ok()?;
        let values: [u16; 6] = values.try_into().ok()?;
        Some(values.map(|v| v.min(252) as u8))
    });

    SpreadRecord { nature, evs }
}

fn value_after<'a>(text: &'a str, lower: &str, label: &str) -> Option<&'a str> {
    let start = lower.find(label)? + label.len();
    Some(text[start..].trim_start())
}

/// Parse and validate the usage pool
///
/// Names must be unique and non-empty; move weights and usage percents must
/// be finite and non-negative.
pub fn parse_usage_pool(json: &str) -> Result<Vec<UsageEntry>> {
    let entries: Vec<UsageEntry> = from_json(ResourceKind::UsagePool, json)?;

    let mut seen = HashSet::new();
    for entry in &entries {
        if entry.name.trim().is_empty() {
            return Err(invalid("entry with an empty name".to_string()));
        }
        if !seen.insert(entry.name.as_str()) {
            return Err(invalid(format!("duplicate entry '{}'", entry.name)));
        }
        if !entry.usage.is_finite() || entry.usage < 0.0 {
            return Err(invalid(format!(
                "'{}' has usage {}, expected a non-negative percent",
                entry.name, entry.usage
            )));
        }
        if let Some((mv, weight)) = entry
            .moves
            .iter()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(invalid(format!(
                "'{}' lists move '{}' with weight {}",
                entry.name, mv, weight
            )));
        }
    }

    Ok(entries)
}

fn invalid(reason: String) -> ResourceError {
    ResourceError::invalid(ResourceKind::UsagePool, reason)
}
