use counterdex_data::{ResourceError, ResourceKind};
use thiserror::Error;

use crate::types::Type;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Unknown type tag: {0}")]
    UnknownType(String),

    #[error("{name} has {count} types, expected 1 or 2")]
    InvalidTypeCount { name: String, count: usize },

    #[error("Type chart is missing {attacking} -> {defending}")]
    IncompleteTypeChart { attacking: Type, defending: Type },

    #[error("Type chart multiplier {value} for {attacking} -> {defending} is not a non-negative number")]
    InvalidMultiplier {
        attacking: Type,
        defending: Type,
        value: f64,
    },

    #[error("Unknown combatant: {0}")]
    UnknownCombatant(String),

    #[error("Unknown weather or terrain: {0}")]
    UnknownCondition(String),

    #[error("Unknown move category: {0}")]
    UnknownCategory(String),
}

impl EngineError {
    /// Attribute a construction failure to the resource it came from
    pub fn into_resource_error(self, resource: ResourceKind) -> ResourceError {
        ResourceError::invalid(resource, self.to_string())
    }
}
