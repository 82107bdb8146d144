//! AnalysisSession - recomputes the counter matrix whenever an input changes

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use super::config::EngineConfig;
use super::tables::Tables;
use crate::calc::Estimator;
use crate::error::EngineError;
use crate::query::{CounterMatrixBuilder, CounterQuery, CounterResult, Heatmap};
use crate::types::{CandidatePool, Combatant, FieldState, Move, RankVector};

/// Name given to the placeholder move when the target knows none
pub const NO_MOVE: &str = "(no move)";

/// One complete result set and the inputs it was computed from
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Input generation this snapshot belongs to
    pub generation: u64,
    pub target: Combatant,
    pub mv: Move,
    pub field: FieldState,
    pub ranks: RankVector,
    pub results: Vec<CounterResult>,
}

/// Holds the current inputs and the latest result set
///
/// Every setter bumps the generation and rebuilds all results from scratch;
/// a snapshot from an older generation is never installed.
#[derive(Debug)]
pub struct AnalysisSession {
    tables: Arc<Tables>,
    config: EngineConfig,
    estimator: Estimator,

    // === Inputs ===
    target: Option<Combatant>,
    /// Explicit move choice; None means the target's default move
    move_name: Option<String>,
    field: FieldState,
    ranks: RankVector,
    pool: CandidatePool,

    // === Output ===
    generation: u64,
    snapshot: Option<Snapshot>,
}

impl AnalysisSession {
    /// Create a session over the full candidate pool, with no target yet
    pub fn new(tables: Arc<Tables>, config: EngineConfig) -> Self {
        let estimator = Estimator::new(
            config.estimator,
            Arc::clone(tables.chart()),
            config.stat_model(),
        );
        let pool = tables.candidate_pool();
        Self {
            tables,
            config,
            estimator,
            target: None,
            move_name: None,
            field: FieldState::new(),
            ranks: RankVector::default(),
            pool,
            generation: 0,
            snapshot: None,
        }
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    /// Current input generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // === Inputs ===

    /// Select the target by name; the move choice resets to its default
    pub fn set_target(&mut self, name: &str) -> Result<Option<&Snapshot>, EngineError> {
        let target = self.tables.combatant(name)?;
        self.target = Some(target);
        self.move_name = None;
        Ok(self.refresh())
    }

    /// Select the target's move; None returns to the default
    pub fn set_move(&mut self, name: Option<String>) -> Option<&Snapshot> {
        self.move_name = name;
        self.refresh()
    }

    pub fn set_field(&mut self, field: FieldState) -> Option<&Snapshot> {
        self.field = field;
        self.refresh()
    }

    pub fn set_ranks(&mut self, ranks: RankVector) -> Option<&Snapshot> {
        self.ranks = ranks;
        self.refresh()
    }

    pub fn set_pool(&mut self, pool: CandidatePool) -> Option<&Snapshot> {
        self.pool = pool;
        self.refresh()
    }

    pub fn target(&self) -> Option<&Combatant> {
        self.target.as_ref()
    }

    pub fn field(&self) -> FieldState {
        self.field
    }

    pub fn ranks(&self) -> RankVector {
        self.ranks
    }

    /// The move the target attacks with under the current inputs
    ///
    /// An explicit choice wins; otherwise the target's first known move by
    /// name. Unknown names resolve to a 0 power Normal move.
    pub fn selected_move(&self) -> Option<Move> {
        let target = self.target.as_ref()?;
        let name = self
            .move_name
            .as_deref()
            .or_else(|| target.move_names().next())
            .unwrap_or(NO_MOVE);
        Some(Move::resolve(self.tables.moves(), name))
    }

    // === Computation ===

    /// Compute a snapshot for the current inputs without installing it
    pub fn compute(&self) -> Option<Snapshot> {
        let target = self.target.clone()?;
        let mv = self.selected_move()?;
        let started = Instant::now();

        let query = CounterQuery {
            target: &target,
            mv: &mv,
            field: &self.field,
            ranks: self.ranks,
        };
        let results = CounterMatrixBuilder::new(&self.estimator, self.tables.moves())
            .with_min_base_power(self.config.min_base_power)
            .build(&query, &self.pool);

        info!(
            generation = self.generation,
            target = %target.name,
            mv = %mv.name,
            candidates = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "analysis computed"
        );

        Some(Snapshot {
            generation: self.generation,
            target,
            mv,
            field: self.field,
            ranks: self.ranks,
            results,
        })
    }

    /// Install a snapshot if it belongs to the current generation
    ///
    /// Returns false (and drops the snapshot) when inputs changed after it
    /// was computed.
    pub fn accept(&mut self, snapshot: Snapshot) -> bool {
        if snapshot.generation != self.generation {
            debug!(
                stale = snapshot.generation,
                current = self.generation,
                "discarding stale snapshot"
            );
            return false;
        }
        self.snapshot = Some(snapshot);
        true
    }

    fn refresh(&mut self) -> Option<&Snapshot> {
        self.generation += 1;
        self.snapshot = None;
        if let Some(snapshot) = self.compute() {
            self.accept(snapshot);
        }
        self.snapshot.as_ref()
    }

    // === Output ===

    /// Latest snapshot, if a target is selected
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Latest results; empty until a target is selected
    pub fn results(&self) -> &[CounterResult] {
        self.snapshot
            .as_ref()
            .map(|s| s.results.as_slice())
            .unwrap_or(&[])
    }

    /// Heatmap of the latest results at the configured resolution
    pub fn heatmap(&self) -> Heatmap {
        Heatmap::bin(self.results(), self.config.resolution)
    }
}
