//! Counter analysis engine for competitive Pokemon.
//!
//! Given a target, the move it attacks with, the field and both sides' stat
//! ranks, this crate scores every candidate in a usage pool on two axes:
//! how many hits the candidate needs to KO the target, and how many hits of
//! the target's move it survives.
//!
//! # Overview
//!
//! `counterdex-engine` sits between `counterdex-data` (resource records) and
//! the command line:
//!
//! ```text
//! counterdex-data (records + validation)
//!        │
//!        ▼
//! counterdex-engine (domain types + analysis) ← THIS CRATE
//!        │
//!        └─> counterdex-cli (loading, output)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`], [`TypeChart`] - types and the effectiveness table
//! - [`Stages`], [`RankVector`] - rank modifiers (-6 to +6) for both sides
//! - [`Weather`], [`Terrain`], [`FieldState`] - field conditions
//! - [`Combatant`], [`Move`], [`CandidatePool`] - who fights with what
//!
//! ## Calculation
//! - [`BattleCalculator`] - damage-roll boundary, with [`StandardCalculator`]
//! - [`DamageEstimator`] - hits to KO, via [`CalculatorEstimator`] or [`FormulaEstimator`]
//!
//! ## Analysis
//! - [`CounterMatrixBuilder`] - one [`CounterResult`] per candidate
//! - [`Heatmap`] - 6x6 binning of results
//! - [`AnalysisSession`] - rebuilds everything when an input changes
//!
//! # Example Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use counterdex_engine::{AnalysisSession, EngineConfig, FieldState, Tables, Weather};
//!
//! let tables = Arc::new(Tables::new(stat_pool, usage_pool, &type_table, moves)?);
//! let mut session = AnalysisSession::new(tables, EngineConfig::default());
//!
//! session.set_target("Flutter Mane")?;
//! session.set_field(FieldState::new().with_weather(Weather::Sun));
//!
//! for result in session.results() {
//!     println!("{}: {} to KO, survives {}", result.name, result.x, result.y);
//! }
//! ```

pub mod calc;
pub mod error;
pub mod query;
pub mod session;
pub mod types;

// Re-export main types at crate root for convenience
pub use calc::{
    BattleCalculator, CANNOT_KO, CalculatorEstimator, DamageEstimator, DamageRange,
    DamageRequest, Estimator, EstimatorKind, FormulaEstimator, HitCount, StandardCalculator,
    Unresolvable,
};
pub use error::EngineError;
pub use query::{
    BestMove, CounterMatrixBuilder, CounterQuery, CounterResult, Heatmap, MoveSelector,
    TypeMatchup, bin, filter_by_matchup, filter_by_types,
};
pub use session::{AnalysisSession, EngineConfig, Snapshot, Tables};
pub use types::{
    BaseStats, CandidatePool, Category, Combatant, FieldState, Move, Nature, RankVector, Stages,
    Stat, StatModel, StatSpread, Terrain, Type, TypeChart, Weather, rank_multiplier,
};
