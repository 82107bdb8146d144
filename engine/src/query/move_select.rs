//! Picking a candidate's best attacking move against the target

use std::cmp::Ordering;
use std::collections::BTreeMap;

use counterdex_data::MoveDex;
use tracing::trace;

use crate::calc::{CANNOT_KO, DamageEstimator};
use crate::types::{Combatant, FieldState, Move};

/// Moves weaker than this are never considered attacking options
pub const MIN_BASE_POWER: u16 = 40;

/// Result of move selection: the chosen move, if any, and its hit count
#[derive(Debug, Clone, PartialEq)]
pub struct BestMove {
    pub mv: Option<Move>,
    pub hits: f64,
}

impl BestMove {
    pub fn none() -> Self {
        Self {
            mv: None,
            hits: CANNOT_KO,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.mv.as_ref().map(|m| m.name.as_str())
    }
}

/// Chooses among a candidate's known moves
#[derive(Debug)]
pub struct MoveSelector<'a, E: ?Sized> {
    estimator: &'a E,
    dex: &'a MoveDex,
    min_base_power: u16,
}

impl<'a, E: DamageEstimator + ?Sized> MoveSelector<'a, E> {
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

    /// Lowest hit count wins; ties go to the higher base power, then the
    /// smaller name. Moves under the power threshold are skipped.
    pub fn best_move(
        &self,
        attacker: &Combatant,
        candidate_moves: &BTreeMap<String, f64>,
        target: &Combatant,
        field: &FieldState,
        rank_delta: i8,
    ) -> BestMove {
        let mut best = BestMove::none();

        for name in candidate_moves.keys() {
            let mv = Move::resolve(self.dex, name);
            if mv.base_power < self.min_base_power {
                trace!(attacker = %attacker.name, mv = %mv.name, power = mv.base_power, "below power threshold");
                continue;
            }
            let hits = self
                .estimator
                .hits_to_ko(attacker, target, &mv, field, rank_delta);

            let better = match &best.mv {
                None => true,
                Some(current) => compare(hits, &mv, best.hits, current) == Ordering::Less,
            };
            if better {
                best = BestMove { mv: Some(mv), hits };
            }
        }

        best
    }
}

fn compare(hits: f64, mv: &Move, other_hits: f64, other: &Move) -> Ordering {
    hits.total_cmp(&other_hits)
        .then_with(|| other.base_power.cmp(&mv.base_power))
        .then_with(|| mv.name.cmp(&other.name))
}
