//! Engine tunables

use crate::calc::EstimatorKind;
use crate::query::{DEFAULT_RESOLUTION, MIN_BASE_POWER};
use crate::types::{DEFAULT_LEVEL, StatModel};

/// Settings an analysis runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Level every combatant is evaluated at
    pub level: u8,

    /// Moves below this base power are skipped by move selection
    pub min_base_power: u16,

    /// Heatmap grid size
    pub resolution: usize,

    pub estimator: EstimatorKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            min_base_power: MIN_BASE_POWER,
            resolution: DEFAULT_RESOLUTION,
            estimator: EstimatorKind::default(),
        }
    }
}

impl EngineConfig {
    pub fn stat_model(&self) -> StatModel {
        StatModel::new(self.level)
    }
}
