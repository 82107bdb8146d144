//! Candidate pool: usage entries joined with their stat-pool records

use std::collections::{HashMap, HashSet};

use counterdex_data::{StatPoolEntry, UsageEntry};
use tracing::{debug, warn};

use super::combatant::Combatant;
use crate::error::EngineError;

/// Why a usage entry did not become a candidate
#[derive(Debug, Clone, PartialEq)]
pub enum ExclusionReason {
    /// No stat-pool entry with the same name
    MissingStats,
    /// The joined record could not form a combatant
    InvalidRecord(EngineError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exclusion {
    pub name: String,
    pub reason: ExclusionReason,
}

/// Ordered collection of unique candidates
///
/// Order follows the usage pool, which lists entries by usage rank.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    candidates: Vec<Combatant>,
    names: HashSet<String>,
    excluded: Vec<Exclusion>,
}

impl CandidatePool {
    /// Join the usage pool to the stat pool by exact name
    ///
    /// Entries that cannot be joined are excluded, never fatal.
    pub fn join(stat_pool: &[StatPoolEntry], usage_pool: &[UsageEntry]) -> Self {
        let by_name: HashMap<&str, &StatPoolEntry> =
            stat_pool.iter().map(|s| (s.name.as_str(), s)).collect();

        let mut pool = Self::default();
        for usage in usage_pool {
            let Some(stats) = by_name.get(usage.name.as_str()) else {
                debug!(name = %usage.name, "no stat-pool entry, excluding");
                pool.exclude(&usage.name, ExclusionReason::MissingStats);
                continue;
            };
            match Combatant::from_records(stats, Some(usage)) {
                Ok(combatant) => pool.push(combatant),
                Err(e) => {
                    warn!(name = %usage.name, error = %e, "invalid candidate record, excluding");
                    pool.exclude(&usage.name, ExclusionReason::InvalidRecord(e));
                }
            }
        }

        if !pool.excluded.is_empty() {
            debug!(
                candidates = pool.candidates.len(),
                excluded = pool.excluded.len(),
                "candidate pool joined"
            );
        }
        pool
    }

    fn push(&mut self, combatant: Combatant) {
        if !self.names.insert(combatant.name.clone()) {
            debug!(name = %combatant.name, "duplicate candidate ignored");
            return;
        }
        self.candidates.push(combatant);
    }

    fn exclude(&mut self, name: &str, reason: ExclusionReason) {
        self.excluded.push(Exclusion {
            name: name.to_string(),
            reason,
        });
    }

    pub fn candidates(&self) -> &[Combatant] {
        &self.candidates
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.candidates.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Combatant> {
        self.candidates.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Usage entries left out of the pool
    pub fn excluded(&self) -> &[Exclusion] {
        &self.excluded
    }
}

#[cfg(test)]
mod tests {
    use counterdex_data::BaseStatsRecord;

    use super::*;

    fn stat(name: &str, types: &[&str]) -> StatPoolEntry {
        StatPoolEntry {
            name: name.into(),
            types: types.iter().map(|t| t.to_string()).collect(),
            stats: BaseStatsRecord {
                hp: 80,
                atk: 80,
                def: 80,
                spa: 80,
                spd: 80,
                spe: 80,
            },
        }
    }

    fn usage(name: &str, rank: u32) -> UsageEntry {
        UsageEntry {
            rank: Some(rank),
            name: name.into(),
            safe_name: None,
            usage: 10.0,
            moves: Default::default(),
            ability: None,
            item: None,
            spread: None,
        }
    }

    #[test]
    fn test_join_keeps_usage_order() {
        let stats = vec![stat("Amoonguss", &["Grass", "Poison"]), stat("Incineroar", &["Fire", "Dark"])];
        let pool = CandidatePool::join(&stats, &[usage("Incineroar", 1), usage("Amoonguss", 2)]);
        let names: Vec<_> = pool.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Incineroar", "Amoonguss"]);
        assert!(pool.excluded().is_empty());
    }

    #[test]
    fn test_join_excludes_missing_stats() {
        let stats = vec![stat("Amoonguss", &["Grass", "Poison"])];
        let pool = CandidatePool::join(&stats, &[usage("Amoonguss", 1), usage("Missingno", 2)]);
        assert_eq!(pool.len(), 1);
        assert_eq!(
            pool.excluded(),
            &[Exclusion {
                name: "Missingno".into(),
                reason: ExclusionReason::MissingStats
            }]
        );
    }

    #[test]
    fn test_join_excludes_invalid_records() {
        let stats = vec![stat("Glitch", &["Cosmic"])];
        let pool = CandidatePool::join(&stats, &[usage("Glitch", 1)]);
        assert!(pool.is_empty());
        assert!(matches!(
            pool.excluded()[0].reason,
            ExclusionReason::InvalidRecord(EngineError::UnknownType(_))
        ));
    }

    #[test]
    fn test_stat_only_species_are_not_candidates() {
        let stats = vec![stat("Amoonguss", &["Grass", "Poison"]), stat("Pikachu", &["Electric"])];
        let pool = CandidatePool::join(&stats, &[usage("Amoonguss", 1)]);
        assert_eq!(pool.len(), 1);
        assert!(pool.get("Pikachu").is_none());
    }

    #[test]
    fn test_join_keeps_first_duplicate() {
        let stats = vec![stat("Amoonguss", &["Grass", "Poison"]), stat("Incineroar", &["Fire", "Dark"])];
        let usage_pool = [usage("Amoonguss", 1), usage("Incineroar", 2), usage("Amoonguss", 3)];
        let pool = CandidatePool::join(&stats, &usage_pool);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get("Amoonguss").unwrap().usage.unwrap().rank, Some(1));
    }
}
