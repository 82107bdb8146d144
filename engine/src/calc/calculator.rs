//! Boundary to a battle calculator: attacker, defender, move and field in,
//! a damage-roll range out

use thiserror::Error;

use crate::types::{Combatant, FieldState, Move};

/// Everything a calculator needs for one attack
#[derive(Debug, Clone, Copy)]
pub struct DamageRequest<'a> {
    pub attacker: &'a Combatant,
    pub defender: &'a Combatant,
    pub mv: &'a Move,
    pub field: &'a FieldState,
}

impl<'a> DamageRequest<'a> {
    pub fn new(
        attacker: &'a Combatant,
        defender: &'a Combatant,
        mv: &'a Move,
        field: &'a FieldState,
    ) -> Self {
        Self {
            attacker,
            defender,
            mv,
            field,
        }
    }
}

/// Lowest and highest damage roll, with the defender's max HP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
    pub defender_hp: u32,
}

impl DamageRange {
    pub fn new(min: u32, max: u32, defender_hp: u32) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
            defender_hp,
        }
    }

    /// A range for a move that deals no damage
    pub fn none(defender_hp: u32) -> Self {
        Self::new(0, 0, defender_hp)
    }

    /// Midpoint of the two ends
    pub fn average(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }
}

/// The calculator could not produce an estimate for this request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unresolvable damage calculation: {0}")]
pub struct Unresolvable(pub String);

/// A damage calculator the estimators can delegate to
///
/// Implementations never see rank stages; those are applied to the average
/// afterwards.
pub trait BattleCalculator {
    fn damage_range(&self, request: &DamageRequest<'_>) -> Result<DamageRange, Unresolvable>;
}

impl<C: BattleCalculator + ?Sized> BattleCalculator for &C {
    fn damage_range(&self, request: &DamageRequest<'_>) -> Result<DamageRange, Unresolvable> {
        (**self).damage_range(request)
    }
}
