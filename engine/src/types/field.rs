//! Field state shared by every calculation in one analysis

use super::conditions::{Terrain, Weather};
use crate::error::EngineError;

/// Weather and terrain in effect; both default to none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldState {
    /// Current weather condition
    pub weather: Option<Weather>,

    /// Current terrain
    pub terrain: Option<Terrain>,
}

impl FieldState {
    /// Create a new empty field state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = Some(terrain);
        self
    }

    /// Parse weather and terrain names as entered by a user
    ///
    /// "clear", "none" and the empty string mean no condition; anything else
    /// that is not a known condition is an error.
    pub fn from_names(weather: &str, terrain: &str) -> Result<Self, EngineError> {
        Ok(Self {
            weather: parse_optional(weather, Weather::from_name)?,
            terrain: parse_optional(terrain, Terrain::from_name)?,
        })
    }

    /// Reset all field conditions
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if any condition is active
    pub fn has_any_condition(&self) -> bool {
        self.weather.is_some() || self.terrain.is_some()
    }
}

fn parse_optional<T>(name: &str, parse: fn(&str) -> Option<T>) -> Result<Option<T>, EngineError> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("clear")
        || trimmed.eq_ignore_ascii_case("none")
    {
        return Ok(None);
    }
    parse(trimmed)
        .map(Some)
        .ok_or_else(|| EngineError::UnknownCondition(name.to_string()))
}
