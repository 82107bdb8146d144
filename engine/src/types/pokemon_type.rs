//! Type tags and the type-effectiveness chart

use counterdex_data::TypeTable;

use crate::error::EngineError;

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Parse a type tag (case-insensitive)
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Parse a type tag, reporting unknown tags as an error
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        Self::from_tag(s).ok_or_else(|| EngineError::UnknownType(s.to_string()))
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attacking-type x defending-type multiplier lookup
///
/// Row = attacking type, column = defending type. Lookups are not assumed
/// symmetric. Built once from the type-table resource and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    cells: [[f64; 18]; 18],
}

impl TypeChart {
    /// The Gen 6+ chart
    pub fn standard() -> Self {
        let mut cells = [[1.0; 18]; 18];
        for (row, source) in cells.iter_mut().zip(STANDARD_CHART.iter()) {
            for (cell, value) in row.iter_mut().zip(source.iter()) {
                *cell = f64::from(*value);
            }
        }
        Self { cells }
    }

    /// Build a chart from the type-table resource
    ///
    /// Every type must appear as a row and as a column of every row.
    pub fn from_table(table: &TypeTable) -> Result<Self, EngineError> {
        let mut cells = [[0.0; 18]; 18];
        for attacking in Type::ALL {
            let row = table.get(attacking.as_str());
            for defending in Type::ALL {
                let value = row
                    .and_then(|r| r.get(defending.as_str()))
                    .copied()
                    .ok_or(EngineError::IncompleteTypeChart {
                        attacking,
                        defending,
                    })?;
                if !value.is_finite() || value < 0.0 {
                    return Err(EngineError::InvalidMultiplier {
                        attacking,
                        defending,
                        value,
                    });
                }
                cells[attacking as usize][defending as usize] = value;
            }
        }
        Ok(Self { cells })
    }

    /// Multiplier of one attacking type against one defending type
    pub fn multiplier(&self, attacking: Type, defending: Type) -> f64 {
        self.cells[attacking as usize][defending as usize]
    }

    /// Multiplier against a (possibly dual-typed) defender: the product of
    /// the per-type factors
    pub fn effectiveness(&self, attacking: Type, defenders: &[Type]) -> f64 {
        defenders
            .iter()
            .map(|t| self.multiplier(attacking, *t))
            .product()
    }

    /// Best multiplier any of the attacker's own types achieves against the
    /// defender. Empty attacker typing is neutral.
    pub fn best_effectiveness(&self, attackers: &[Type], defenders: &[Type]) -> f64 {
        attackers
            .iter()
            .map(|t| self.effectiveness(*t, defenders))
            .reduce(f64::max)
            .unwrap_or(1.0)
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}

/// 18x18 type effectiveness chart
/// Row = attacking type, Column = defending type
/// Values: 0.0 = immune, 0.5 = not very effective, 1.0 = neutral, 2.0 = super effective
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
static STANDARD_CHART: [[f32; 18]; 18] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
    // Fire attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
    // Water attacking
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Electric attacking
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Grass attacking
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
    // Ice attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
    // Fighting attacking
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
    // Poison attacking
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
    // Ground attacking
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
    // Flying attacking
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Psychic attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
    // Bug attacking
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
    // Rock attacking
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Ghost attacking
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
    // Dragon attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
    // Dark attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
    // Steel attacking
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
    // Fairy attacking
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn table_from(chart: &TypeChart) -> TypeTable {
        Type::ALL
            .iter()
            .map(|a| {
                let row: BTreeMap<String, f64> = Type::ALL
                    .iter()
                    .map(|d| (d.as_str().to_string(), chart.multiplier(*a, *d)))
                    .collect();
                (a.as_str().to_string(), row)
            })
            .collect()
    }

    #[test]
    fn test_type_effectiveness_super_effective() {
        let chart = TypeChart::standard();
        assert_eq!(chart.multiplier(Type::Fire, Type::Grass), 2.0);
        assert_eq!(chart.multiplier(Type::Water, Type::Fire), 2.0);
        assert_eq!(chart.multiplier(Type::Electric, Type::Water), 2.0);
        assert_eq!(chart.multiplier(Type::Fighting, Type::Normal), 2.0);
    }

    #[test]
    fn test_type_effectiveness_immune() {
        let chart = TypeChart::standard();
        assert_eq!(chart.multiplier(Type::Normal, Type::Ghost), 0.0);
        assert_eq!(chart.multiplier(Type::Electric, Type::Ground), 0.0);
        assert_eq!(chart.multiplier(Type::Ground, Type::Flying), 0.0);
        assert_eq!(chart.multiplier(Type::Dragon, Type::Fairy), 0.0);
    }

    #[test]
    fn test_chart_is_not_symmetric() {
        let chart = TypeChart::standard();
        assert_eq!(chart.multiplier(Type::Fire, Type::Grass), 2.0);
        assert_eq!(chart.multiplier(Type::Grass, Type::Fire), 0.5);
    }

    #[test]
    fn test_type_effectiveness_multi() {
        let chart = TypeChart::standard();
        // Fire vs Grass/Steel = 4x
        assert_eq!(chart.effectiveness(Type::Fire, &[Type::Grass, Type::Steel]), 4.0);
        // Fire vs Water/Rock = 0.25x
        assert_eq!(chart.effectiveness(Type::Fire, &[Type::Water, Type::Rock]), 0.25);
        // Ground vs Flying/Steel = 0x (immune)
        assert_eq!(chart.effectiveness(Type::Ground, &[Type::Flying, Type::Steel]), 0.0);
    }

    #[test]
    fn test_best_effectiveness() {
        let chart = TypeChart::standard();
        // Water/Ground attacking Fire/Steel: Water 2x, Ground 4x
        let best = chart.best_effectiveness(&[Type::Water, Type::Ground], &[Type::Fire, Type::Steel]);
        assert_eq!(best, 4.0);
        assert_eq!(chart.best_effectiveness(&[], &[Type::Fire]), 1.0);
    }

    #[test]
    fn test_from_table_round_trips_standard() {
        let standard = TypeChart::standard();
        let rebuilt = TypeChart::from_table(&table_from(&standard)).unwrap();
        assert_eq!(rebuilt, standard);
    }

    #[test]
    fn test_from_table_accepts_custom_multiplier() {
        let mut table = table_from(&TypeChart::standard());
        table.get_mut("Fire").unwrap().insert("Grass".into(), 1.25);
        let chart = TypeChart::from_table(&table).unwrap();
        assert_eq!(chart.multiplier(Type::Fire, Type::Grass), 1.25);
    }

    #[test]
    fn test_from_table_missing_entry() {
        let mut table = table_from(&TypeChart::standard());
        table.get_mut("Ice").unwrap().remove("Dragon");
        assert_eq!(
            TypeChart::from_table(&table),
            Err(EngineError::IncompleteTypeChart {
                attacking: Type::Ice,
                defending: Type::Dragon
            })
        );
    }

    #[test]
    fn test_type_from_tag() {
        assert_eq!(Type::from_tag("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_tag("fire"), Some(Type::Fire));
        assert_eq!(Type::from_tag("FIRE"), Some(Type::Fire));
        assert_eq!(Type::from_tag("unknown"), None);
        assert!(Type::parse("unknown").is_err());
    }

    #[test]
    fn test_all_types() {
        assert_eq!(Type::all().len(), 18);
        assert_eq!(Type::all()[0], Type::Normal);
        assert_eq!(Type::all()[17], Type::Fairy);
    }
}
