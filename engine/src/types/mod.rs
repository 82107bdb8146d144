//! Domain types for counter analysis

mod combatant;
mod conditions;
mod field;
mod moves;
mod pokemon_type;
mod pool;
mod stages;
mod stats;

pub use combatant::{Combatant, UsageInfo};
pub use conditions::{Terrain, Weather};
pub use field::FieldState;
pub use moves::{Category, Move};
pub use pokemon_type::{Type, TypeChart};
pub use pool::{CandidatePool, Exclusion, ExclusionReason};
pub use stages::{MAX_STAGE, MIN_STAGE, RankVector, Stages, clamp_stage, rank_multiplier};
pub use stats::{
    BaseStats, DEFAULT_IV, DEFAULT_LEVEL, Nature, Stat, StatModel, StatSpread, Stats, calc_hp,
    calc_stat,
};
