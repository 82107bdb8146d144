//! Read-only tables every analysis shares

use std::collections::HashMap;
use std::sync::Arc;

use counterdex_data::{
    MoveDex, ResourceError, ResourceKind, StatPoolEntry, TypeTable, UsageEntry,
};

use crate::error::EngineError;
use crate::types::{CandidatePool, Combatant, TypeChart};

/// The four static resources in engine form
///
/// Built once after loading and never mutated.
#[derive(Debug, Clone)]
pub struct Tables {
    chart: Arc<TypeChart>,
    moves: MoveDex,
    stat_pool: Vec<StatPoolEntry>,
    usage_pool: Vec<UsageEntry>,
    stat_index: HashMap<String, usize>,
    usage_index: HashMap<String, usize>,
}

impl Tables {
    /// Assemble from parsed resources; a type table that cannot form a
    /// full chart is reported against that resource
    pub fn new(
        stat_pool: Vec<StatPoolEntry>,
        usage_pool: Vec<UsageEntry>,
        type_table: &TypeTable,
        moves: MoveDex,
    ) -> Result<Self, ResourceError> {
        let chart = TypeChart::from_table(type_table)
            .map_err(|e| e.into_resource_error(ResourceKind::TypeTable))?;
        Ok(Self::from_parts(Arc::new(chart), stat_pool, usage_pool, moves))
    }

    pub fn from_parts(
        chart: Arc<TypeChart>,
        stat_pool: Vec<StatPoolEntry>,
        usage_pool: Vec<UsageEntry>,
        moves: MoveDex,
    ) -> Self {
        let stat_index = index(&stat_pool, |s| &s.name);
        let usage_index = index(&usage_pool, |u| &u.name);
        Self {
            chart,
            moves,
            stat_pool,
            usage_pool,
            stat_index,
            usage_index,
        }
    }

    pub fn chart(&self) -> &Arc<TypeChart> {
        &self.chart
    }

    pub fn moves(&self) -> &MoveDex {
        &self.moves
    }

    pub fn stat_pool(&self) -> &[StatPoolEntry] {
        &self.stat_pool
    }

    pub fn usage_pool(&self) -> &[UsageEntry] {
        &self.usage_pool
    }

    /// Look a combatant up by exact name
    ///
    /// Needs a stat-pool entry; usage data is attached when present.
    pub fn combatant(&self, name: &str) -> Result<Combatant, EngineError> {
        let stats = self
            .stat_index
            .get(name)
            .map(|i| &self.stat_pool[*i])
            .ok_or_else(|| EngineError::UnknownCombatant(name.to_string()))?;
        let usage = self.usage_index.get(name).map(|i| &self.usage_pool[*i]);
        Combatant::from_records(stats, usage)
    }

    /// Candidates present in both pools
    pub fn candidate_pool(&self) -> CandidatePool {
        CandidatePool::join(&self.stat_pool, &self.usage_pool)
    }
}

fn index<T>(entries: &[T], name: impl Fn(&T) -> &String) -> HashMap<String, usize> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| (name(e).clone(), i))
        .collect()
}
