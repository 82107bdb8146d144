//! Analysis queries over a candidate pool
//!
//! Move selection, the counter matrix, heatmap binning, result filters and
//! type matchup helpers.

mod binning;
mod filter;
mod matchup;
mod matrix;
mod move_select;

pub use binning::{DEFAULT_RESOLUTION, Heatmap, bin};
pub use filter::{filter_by_matchup, filter_by_types};
pub use matchup::{
    // Type-level queries
    TypeMatchup,
    best_type_advantage,
    immunities,
    resistances,
    type_matchup,
    weaknesses,
};
pub use matrix::{CounterMatrixBuilder, CounterQuery, CounterResult, is_faster};
pub use move_select::{BestMove, MIN_BASE_POWER, MoveSelector};
