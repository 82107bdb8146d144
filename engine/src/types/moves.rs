//! Moves as the estimators see them

use counterdex_data::{MoveDex, MoveRecord};
use tracing::debug;

use super::pokemon_type::Type;
use crate::error::EngineError;

/// Damage category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Category {
    Physical,
    Special,
    Status,
}

impl Category {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "physical" => Some(Category::Physical),
            "special" => Some(Category::Special),
            "status" => Some(Category::Status),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Physical => "Physical",
            Category::Special => "Special",
            Category::Status => "Status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Move {
    pub name: String,
    pub move_type: Type,
    pub category: Category,
    pub base_power: u16,
}

impl Move {
    pub fn new(
        name: impl Into<String>,
        move_type: Type,
        category: Category,
        base_power: u16,
    ) -> Self {
        Self {
            name: name.into(),
            move_type,
            category,
            base_power,
        }
    }

    /// Stand-in for a move missing from the dex: Normal, Physical, 0 power
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::new(name, Type::Normal, Category::Physical, 0)
    }

    pub fn from_record(name: impl Into<String>, record: &MoveRecord) -> Result<Self, EngineError> {
        let name = name.into();
        let move_type = Type::parse(&record.move_type)?;
        let category = Category::from_name(&record.category)
            .ok_or_else(|| EngineError::UnknownCategory(record.category.clone()))?;
        Ok(Self::new(name, move_type, category, record.base_power))
    }

    /// Look a move up in the dex, falling back to [`Move::unknown`]
    pub fn resolve(dex: &MoveDex, name: &str) -> Self {
        let Some(entry) = dex.get(name) else {
            debug!(name, "move not in dex, treating as 0 power Normal");
            return Self::unknown(name);
        };
        Self::from_record(entry.name, entry.record).unwrap_or_else(|e| {
            debug!(name, error = %e, "unusable dex entry");
            Self::unknown(name)
        })
    }

    /// Whether the move can deal damage at all
    pub fn is_damaging(&self) -> bool {
        self.category != Category::Status && self.base_power > 0
    }
}
