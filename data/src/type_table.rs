//! Type-effectiveness table resource

use std::collections::BTreeMap;

use crate::{ResourceError, ResourceKind, Result, from_json};

/// The 18 type tags, in chart order
pub const TYPE_TAGS: [&str; 18] = [
    "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

/// Attacking type -> defending type -> multiplier, keyed by canonical tag
pub type TypeTable = BTreeMap<String, BTreeMap<String, f64>>;

/// Resolve a type tag case-insensitively to its canonical spelling
pub fn canonical_tag(tag: &str) -> Option<&'static str> {
    let tag = tag.trim();
    TYPE_TAGS
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(tag))
}

/// Parse and validate a type table
///
/// Every one of the 18 tags must appear as a row, and every row must carry
/// all 18 tags as columns. Multipliers must be finite and non-negative.
pub fn parse_type_table(json: &str) -> Result<TypeTable> {
    let raw: BTreeMap<String, BTreeMap<String, f64>> = from_json(ResourceKind::TypeTable, json)?;

    let mut table = TypeTable::new();
    for (attacking, row) in raw {
        let attacking = canonical(&attacking)?;
        let mut columns = BTreeMap::new();
        for (defending, multiplier) in row {
            let defending = canonical(&defending)?;
            if !multiplier.is_finite() || multiplier < 0.0 {
                return Err(invalid(format!(
                    "multiplier {multiplier} for {attacking} -> {defending} must be a non-negative number"
                )));
            }
            if columns.insert(defending.to_string(), multiplier).is_some() {
                return Err(invalid(format!("duplicate column {defending} in row {attacking}")));
            }
        }
        if table.insert(attacking.to_string(), columns).is_some() {
            return Err(invalid(format!("duplicate row for {attacking}")));
        }
    }

    for tag in TYPE_TAGS {
        let row = table
            .get(tag)
            .ok_or_else(|| invalid(format!("missing row for {tag}")))?;
        if let Some(missing) = TYPE_TAGS.iter().find(|col| !row.contains_key(**col)) {
            return Err(invalid(format!("row {tag} is missing column {missing}")));
        }
    }

    Ok(table)
}

fn canonical(tag: &str) -> Result<&'static str> {
    canonical_tag(tag).ok_or_else(|| invalid(format!("unknown type tag '{tag}'")))
}

fn invalid(reason: String) -> ResourceError {
    ResourceError::invalid(ResourceKind::TypeTable, reason)
}
