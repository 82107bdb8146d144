//! Combatants: the target and every candidate in the pool

use std::collections::BTreeMap;

use counterdex_data::{StatPoolEntry, UsageEntry, to_id};

use super::pokemon_type::Type;
use super::stats::{BaseStats, StatModel, StatSpread, Stats};
use crate::error::EngineError;

/// Usage metadata carried from the usage pool
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UsageInfo {
    pub rank: Option<u32>,
    /// Usage percent within the format
    pub percent: f64,
}

/// One combatant with everything the estimators need
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    /// Unique display name
    pub name: String,

    /// One or two types
    pub types: Vec<Type>,

    pub base_stats: BaseStats,

    /// Ability the calculator sees, if any
    pub ability: Option<String>,

    /// Held item the calculator sees, if any
    pub item: Option<String>,

    pub spread: StatSpread,

    /// Known moves with their usage weight
    pub moves: BTreeMap<String, f64>,

    /// Present when the combatant appears in the usage pool
    pub usage: Option<UsageInfo>,
}

impl Combatant {
    /// Create a combatant with default spread and no ability, item or moves
    pub fn new(
        name: impl Into<String>,
        types: Vec<Type>,
        base_stats: BaseStats,
    ) -> Result<Self, EngineError> {
        let name = name.into();
        if types.is_empty() || types.len() > 2 {
            return Err(EngineError::InvalidTypeCount {
                name,
                count: types.len(),
            });
        }
        Ok(Self {
            name,
            types,
            base_stats,
            ability: None,
            item: None,
            spread: StatSpread::default(),
            moves: BTreeMap::new(),
            usage: None,
        })
    }

    /// Join a stat-pool entry with its usage-pool entry, if it has one
    pub fn from_records(
        stats: &StatPoolEntry,
        usage: Option<&UsageEntry>,
    ) -> Result<Self, EngineError> {
        let types = stats
            .types
            .iter()
            .map(|tag| Type::parse(tag))
            .collect::<Result<Vec<_>, _>>()?;
        let mut combatant = Self::new(stats.name.clone(), types, stats.stats.into())?;

        if let Some(usage) = usage {
            combatant.ability = usage.ability().map(str::to_string);
            combatant.item = usage.item().map(str::to_string);
            combatant.spread = StatSpread::from_record(&usage.spread());
            combatant.moves = usage.moves.clone();
            combatant.usage = Some(UsageInfo {
                rank: usage.rank,
                percent: usage.usage,
            });
        }

        Ok(combatant)
    }

    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    /// Effective stats under the given model
    pub fn stats(&self, model: &StatModel) -> Stats {
        model.stats(&self.base_stats, &self.spread)
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    /// Ability check, ignoring case and punctuation
    pub fn has_ability(&self, name: &str) -> bool {
        self.ability.as_deref().is_some_and(|a| to_id(a) == to_id(name))
    }

    /// Item check, ignoring case and punctuation
    pub fn has_item(&self, name: &str) -> bool {
        self.item.as_deref().is_some_and(|i| to_id(i) == to_id(name))
    }

    /// Known move names in name order
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use counterdex_data::{BaseStatsRecord, ItemField, AbilityField};

    use super::*;
    use crate::types::Nature;

    fn stat_entry() -> StatPoolEntry {
        StatPoolEntry {
            name: "Garchomp".into(),
            types: vec!["Dragon".into(), "Ground".into()],
            stats: BaseStatsRecord {
                hp: 108,
                atk: 130,
                def: 95,
                spa: 80,
                spd: 85,
                spe: 102,
            },
        }
    }

    #[test]
    fn test_from_records_without_usage() {
        let c = Combatant::from_records(&stat_entry(), None).unwrap();
        assert_eq!(c.types, vec![Type::Dragon, Type::Ground]);
        assert_eq!(c.base_stats.atk, 130);
        assert!(c.moves.is_empty());
        assert_eq!(c.ability, None);
        assert_eq!(c.usage, None);
    }

    #[test]
    fn test_from_records_with_usage() {
        let usage = UsageEntry {
            rank: Some(3),
            name: "Garchomp".into(),
            safe_name: None,
            usage: 21.5,
            moves: [("Earthquake".to_string(), 95.0)].into_iter().collect(),
            ability: Some(AbilityField::Many(vec!["Rough Skin".into(), "Sand Veil".into()])),
            item: Some(ItemField::One("Choice Band".into())),
            spread: Some("Nature: Jolly EVs: 0/252/0/0/4/252".into()),
        };
        let c = Combatant::from_records(&stat_entry(), Some(&usage)).unwrap();
        assert_eq!(c.ability.as_deref(), Some("Rough Skin"));
        assert!(c.has_item("choice band"));
        assert_eq!(c.spread.nature, Nature::Jolly);
        assert_eq!(c.spread.evs[1], 252);
        assert_eq!(c.move_names().collect::<Vec<_>>(), vec!["Earthquake"]);
        assert_eq!(c.usage.unwrap().rank, Some(3));
    }

    #[test]
    fn test_type_count_is_checked() {
        let base = BaseStats::new(50, 50, 50, 50, 50, 50);
        assert!(Combatant::new("Nothing", vec![], base).is_err());
        assert!(Combatant::new("Three", vec![Type::Fire, Type::Water, Type::Grass], base).is_err());
        assert!(Combatant::new("One", vec![Type::Fire], base).is_ok());
    }

    #[test]
    fn test_has_ability_ignores_case() {
        let base = BaseStats::new(50, 50, 50, 50, 50, 50);
        let c = Combatant::new("Azumarill", vec![Type::Water, Type::Fairy], base)
            .unwrap()
            .with_ability("Huge Power");
        assert!(c.has_ability("hugepower"));
        assert!(!c.has_ability("Pure Power"));
    }
}
