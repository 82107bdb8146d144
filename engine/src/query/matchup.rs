//! Type matchup helpers

use crate::types::{Type, TypeChart};

/// Coarse matchup of one typing against another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TypeMatchup {
    /// Some attacker type hits super effectively
    Advantage,
    Neutral,
    /// The attacker's best type is resisted or blocked
    Disadvantage,
}

impl TypeMatchup {
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier > 1.0 {
            TypeMatchup::Advantage
        } else if multiplier < 1.0 {
            TypeMatchup::Disadvantage
        } else {
            TypeMatchup::Neutral
        }
    }
}

/// Best effectiveness any of the attacker's own types achieves against the
/// defender's typing
pub fn best_type_advantage(attacker_types: &[Type], defender_types: &[Type], chart: &TypeChart) -> f64 {
    chart.best_effectiveness(attacker_types, defender_types)
}

/// Classify the attacker's typing against the defender's
pub fn type_matchup(attacker_types: &[Type], defender_types: &[Type], chart: &TypeChart) -> TypeMatchup {
    TypeMatchup::from_multiplier(best_type_advantage(attacker_types, defender_types, chart))
}

/// Get all types that are super effective against the defender
pub fn weaknesses(defender_types: &[Type], chart: &TypeChart) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| chart.effectiveness(*t, defender_types) > 1.0)
        .collect()
}

/// Get all types that the defender resists (0 < effectiveness < 1)
pub fn resistances(defender_types: &[Type], chart: &TypeChart) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| {
            let eff = chart.effectiveness(*t, defender_types);
            eff > 0.0 && eff < 1.0
        })
        .collect()
}

/// Get all types that the defender is immune to
pub fn immunities(defender_types: &[Type], chart: &TypeChart) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| chart.effectiveness(*t, defender_types) == 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_type_advantage() {
        let chart = TypeChart::standard();
        // Ground/Steel into Fire: Ground is 2x
        let best = best_type_advantage(&[Type::Steel, Type::Ground], &[Type::Fire], &chart);
        assert!((best - 2.0).abs() < 0.001);
        // Grass into Fire/Flying: 0.25x
        let worst = best_type_advantage(&[Type::Grass], &[Type::Fire, Type::Flying], &chart);
        assert!((worst - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_type_matchup() {
        let chart = TypeChart::standard();
        assert_eq!(type_matchup(&[Type::Water], &[Type::Fire], &chart), TypeMatchup::Advantage);
        assert_eq!(type_matchup(&[Type::Normal], &[Type::Fire], &chart), TypeMatchup::Neutral);
        assert_eq!(type_matchup(&[Type::Normal], &[Type::Ghost], &chart), TypeMatchup::Disadvantage);
        // One good type is enough
        assert_eq!(
            type_matchup(&[Type::Normal, Type::Dark], &[Type::Ghost], &chart),
            TypeMatchup::Advantage
        );
    }

    #[test]
    fn test_weaknesses() {
        // Steel type is weak to Fire, Fighting, Ground
        let chart = TypeChart::standard();
        let weak = weaknesses(&[Type::Steel], &chart);
        assert!(weak.contains(&Type::Fire));
        assert!(weak.contains(&Type::Fighting));
        assert!(weak.contains(&Type::Ground));
        assert_eq!(weak.len(), 3);
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground (Swampert) is only weak to Grass (4x)
        let chart = TypeChart::standard();
        assert_eq!(weaknesses(&[Type::Water, Type::Ground], &chart), vec![Type::Grass]);
    }

    #[test]
    fn test_resistances() {
        let chart = TypeChart::standard();
        let resists = resistances(&[Type::Steel], &chart);
        assert!(resists.contains(&Type::Normal));
        assert!(resists.contains(&Type::Fairy));
        // Fire is a weakness, Poison an immunity
        assert!(!resists.contains(&Type::Fire));
        assert!(!resists.contains(&Type::Poison));
    }

    #[test]
    fn test_immunities() {
        let chart = TypeChart::standard();
        let immune = immunities(&[Type::Ghost], &chart);
        assert_eq!(immune, vec![Type::Normal, Type::Fighting]);
    }
}
