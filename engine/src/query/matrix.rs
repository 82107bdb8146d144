//! Counter matrix: hits to KO and hits endured for every candidate

use counterdex_data::MoveDex;
use tracing::debug;

use super::move_select::{MIN_BASE_POWER, MoveSelector};
use crate::calc::{DamageEstimator, HitCount};
use crate::types::{CandidatePool, Combatant, FieldState, Move, RankVector, Type, rank_multiplier};

/// One candidate's standing against the target
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CounterResult {
    pub name: String,
    /// Hits the candidate needs to KO the target
    pub x: HitCount,
    /// Hits of the target's move the candidate survives
    pub y: HitCount,
    pub speed_faster: bool,
    pub types: Vec<Type>,
    /// Move the candidate KOs the target with, if any qualifies
    pub best_move: Option<String>,
}

/// Frozen inputs for one build
#[derive(Debug, Clone, Copy)]
pub struct CounterQuery<'a> {
    pub target: &'a Combatant,
    /// The target's selected move
    pub mv: &'a Move,
    pub field: &'a FieldState,
    pub ranks: RankVector,
}

/// Maps every candidate in a pool to a [`CounterResult`]
#[derive(Debug)]
pub struct CounterMatrixBuilder<'a, E: ?Sized> {
    estimator: &'a E,
    dex: &'a MoveDex,
    min_base_power: u16,
}

impl<'a, E: DamageEstimator + ?Sized> CounterMatrixBuilder<'a, E> {
    pub fn new(estimator: &'a E, dex: &'a MoveDex) -> Self {
        Self {
            estimator,
            dex,
            min_base_power: MIN_BASE_POWER,
        }
    }

    pub fn with_min_base_power(mut self, min_base_power: u16) -> Self {
        self.min_base_power = min_base_power;
        self
    }

    /// Build results for the whole pool, in pool order
    pub fn build(&self, query: &CounterQuery<'_>, pool: &CandidatePool) -> Vec<CounterResult> {
        let results: Vec<_> = pool.iter().map(|c| self.evaluate(query, c)).collect();
        debug!(
            target = %query.target.name,
            mv = %query.mv.name,
            candidates = results.len(),
            "counter matrix built"
        );
        results
    }

    /// Result for a single candidate
    pub fn evaluate(&self, query: &CounterQuery<'_>, candidate: &Combatant) -> CounterResult {
        let selector = MoveSelector::new(self.estimator, self.dex)
            .with_min_base_power(self.min_base_power);
        let best = selector.best_move(
            candidate,
            &candidate.moves,
            query.target,
            query.field,
            query.ranks.ko_delta(),
        );

        let endured = self.estimator.hits_to_ko(
            query.target,
            candidate,
            query.mv,
            query.field,
            query.ranks.endure_delta(),
        );

        CounterResult {
            name: candidate.name.clone(),
            x: HitCount::from_raw(best.hits),
            y: HitCount::from_raw(endured),
            speed_faster: is_faster(candidate, query.target, &query.ranks),
            types: candidate.types.clone(),
            best_move: best.name().map(str::to_string),
        }
    }
}

/// Whether the candidate outspeeds the target
///
/// The target's base speed is scaled by the speed-rank difference
/// (meta minus counter); the candidate must strictly exceed it.
pub fn is_faster(candidate: &Combatant, target: &Combatant, ranks: &RankVector) -> bool {
    let target_speed = f64::from(target.base_stats.spe) * rank_multiplier(ranks.speed_delta());
    f64::from(candidate.base_stats.spe) > target_speed
}
