//! Damage calculation and hits-to-KO estimation

mod calculator;
mod estimator;
mod hits;
mod modifier;
mod standard;

pub use calculator::{BattleCalculator, DamageRange, DamageRequest, Unresolvable};
pub use estimator::{
    CalculatorEstimator, DamageEstimator, Estimator, EstimatorKind, FormulaEstimator, MEAN_ROLL,
    hits_from_average,
};
pub use hits::{CANNOT_KO, DISPLAY_CAP, HitCount};
pub use modifier::{Modifier, base_damage, pokeround};
pub use standard::{MIN_ROLL, StandardCalculator};
