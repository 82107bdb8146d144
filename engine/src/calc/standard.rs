//! Built-in single-target damage calculator

use std::sync::Arc;

use tracing::trace;

use super::calculator::{BattleCalculator, DamageRange, DamageRequest, Unresolvable};
use super::modifier::{Modifier, base_damage};
use crate::types::{Category, Combatant, FieldState, Move, StatModel, Terrain, Type, TypeChart, Weather};

/// Lowest random roll, in percent
pub const MIN_ROLL: u32 = 85;

/// Current-generation damage calculator over a shared type chart
///
/// Covers weather, terrain, STAB, a handful of common items and abilities.
/// Unrecognized items and abilities have no effect.
#[derive(Debug, Clone)]
pub struct StandardCalculator {
    chart: Arc<TypeChart>,
    model: StatModel,
}

impl StandardCalculator {
    pub fn new(chart: Arc<TypeChart>, model: StatModel) -> Self {
        Self { chart, model }
    }

    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    pub fn model(&self) -> StatModel {
        self.model
    }

    /// Chart effectiveness, zeroed by immunity abilities
    fn effectiveness(&self, defender: &Combatant, mv: &Move) -> f64 {
        if ability_grants_immunity(defender, mv.move_type) {
            trace!(defender = %defender.name, mv = %mv.name, "immune through ability");
            return 0.0;
        }
        self.chart.effectiveness(mv.move_type, &defender.types)
    }
}

impl BattleCalculator for StandardCalculator {
    fn damage_range(&self, request: &DamageRequest<'_>) -> Result<DamageRange, Unresolvable> {
        let DamageRequest {
            attacker,
            defender,
            mv,
            field,
        } = *request;

        if attacker.types.is_empty() || defender.types.is_empty() {
            return Err(Unresolvable(format!(
                "{} vs {}: combatant without types",
                attacker.name, defender.name
            )));
        }
        if mv.category == Category::Status && mv.base_power > 0 {
            return Err(Unresolvable(format!(
                "{} is a status move with base power {}",
                mv.name, mv.base_power
            )));
        }

        let attacker_stats = attacker.stats(&self.model);
        let defender_stats = defender.stats(&self.model);
        let defender_hp = defender_stats.hp;
        if defender_hp == 0 || attacker_stats.hp == 0 {
            return Err(Unresolvable(format!(
                "{} vs {}: zero HP",
                attacker.name, defender.name
            )));
        }

        if !mv.is_damaging() {
            return Ok(DamageRange::none(defender_hp));
        }
        let effectiveness = self.effectiveness(defender, mv);
        if effectiveness == 0.0 {
            return Ok(DamageRange::none(defender_hp));
        }

        let power = terrain_modifier(field, mv.move_type)
            .apply(u32::from(mv.base_power))
            .max(1);

        let physical = mv.category == Category::Physical;
        let (mut attack, mut defense) = if physical {
            (attacker_stats.atk, defender_stats.def)
        } else {
            (attacker_stats.spa, defender_stats.spd)
        };
        attack = attack_modifiers(attacker, defender, mv, physical)
            .into_iter()
            .fold(attack, |value, m| m.apply(value));
        defense = defense_modifiers(defender, field, physical)
            .into_iter()
            .fold(defense, |value, m| m.apply(value))
            .max(1);

        let base = weather_modifier(field, mv.move_type).apply(base_damage(
            self.model.level,
            power,
            attack,
            defense,
        ));

        let stab = if attacker.has_type(mv.move_type) {
            if attacker.has_ability("Adaptability") {
                Modifier::DOUBLE
            } else {
                Modifier::ONE_POINT_FIVE
            }
        } else {
            Modifier::ONE
        };
        let finals = final_modifier(attacker, effectiveness);

        let roll = |percent: u32| {
            let damage = base * percent / 100;
            let damage = stab.apply(damage);
            let damage = (f64::from(damage) * effectiveness).floor() as u32;
            finals.apply(damage).max(1)
        };

        let range = DamageRange::new(roll(MIN_ROLL), roll(100), defender_hp);
        trace!(
            attacker = %attacker.name,
            defender = %defender.name,
            mv = %mv.name,
            min = range.min,
            max = range.max,
            "damage range"
        );
        Ok(range)
    }
}

fn ability_grants_immunity(defender: &Combatant, move_type: Type) -> bool {
    let abilities: &[&str] = match move_type {
        Type::Ground => &["Levitate"],
        Type::Fire => &["Flash Fire"],
        Type::Water => &["Water Absorb", "Storm Drain"],
        Type::Electric => &["Volt Absorb", "Lightning Rod", "Motor Drive"],
        Type::Grass => &["Sap Sipper"],
        _ => &[],
    };
    abilities.iter().any(|a| defender.has_ability(a))
}

fn terrain_modifier(field: &FieldState, move_type: Type) -> Modifier {
    match (field.terrain, move_type) {
        (Some(Terrain::Electric), Type::Electric)
        | (Some(Terrain::Grassy), Type::Grass)
        | (Some(Terrain::Psychic), Type::Psychic) => Modifier::ONE_POINT_THREE,
        (Some(Terrain::Misty), Type::Dragon) => Modifier::HALF,
        _ => Modifier::ONE,
    }
}

fn weather_modifier(field: &FieldState, move_type: Type) -> Modifier {
    match (field.weather, move_type) {
        (Some(Weather::Sun), Type::Fire) | (Some(Weather::Rain), Type::Water) => {
            Modifier::ONE_POINT_FIVE
        }
        (Some(Weather::Sun), Type::Water) | (Some(Weather::Rain), Type::Fire) => Modifier::HALF,
        _ => Modifier::ONE,
    }
}

fn attack_modifiers(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    physical: bool,
) -> Vec<Modifier> {
    let mut mods = Vec::new();
    if physical && (attacker.has_ability("Huge Power") || attacker.has_ability("Pure Power")) {
        mods.push(Modifier::DOUBLE);
    }
    if physical && attacker.has_item("Choice Band") {
        mods.push(Modifier::ONE_POINT_FIVE);
    }
    if !physical && attacker.has_item("Choice Specs") {
        mods.push(Modifier::ONE_POINT_FIVE);
    }
    if defender.has_ability("Thick Fat") && matches!(mv.move_type, Type::Fire | Type::Ice) {
        mods.push(Modifier::HALF);
    }
    mods
}

fn defense_modifiers(defender: &Combatant, field: &FieldState, physical: bool) -> Vec<Modifier> {
    let mut mods = Vec::new();
    if physical {
        if field.weather == Some(Weather::Snow) && defender.has_type(Type::Ice) {
            mods.push(Modifier::ONE_POINT_FIVE);
        }
    } else {
        if field.weather == Some(Weather::Sand) && defender.has_type(Type::Rock) {
            mods.push(Modifier::ONE_POINT_FIVE);
        }
        if defender.has_item("Assault Vest") {
            mods.push(Modifier::ONE_POINT_FIVE);
        }
    }
    mods
}

fn final_modifier(attacker: &Combatant, effectiveness: f64) -> Modifier {
    let mut modifier = Modifier::ONE;
    if attacker.has_item("Life Orb") {
        modifier = modifier.chain(Modifier::LIFE_ORB);
    }
    if attacker.has_item("Expert Belt") && effectiveness > 1.0 {
        modifier = modifier.chain(Modifier::ONE_POINT_TWO);
    }
    modifier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BaseStats;

    fn calculator() -> StandardCalculator {
        StandardCalculator::new(Arc::new(TypeChart::standard()), StatModel::default())
    }

    fn mon(name: &str, types: Vec<Type>, base: BaseStats) -> Combatant {
        Combatant::new(name, types, base).unwrap()
    }

    fn attacker() -> Combatant {
        mon("Attacker", vec![Type::Normal], BaseStats::new(100, 100, 100, 100, 100, 100))
    }

    fn defender() -> Combatant {
        mon("Defender", vec![Type::Water], BaseStats::new(100, 100, 50, 100, 50, 100))
    }

    fn range(a: &Combatant, d: &Combatant, mv: &Move, field: &FieldState) -> DamageRange {
        calculator()
            .damage_range(&DamageRequest::new(a, d, mv, field))
            .unwrap()
    }

    #[test]
    fn test_neutral_physical_range() {
        let mv = Move::new("Strike", Type::Fighting, Category::Physical, 100);
        let r = range(&attacker(), &defender(), &mv, &FieldState::new());
        assert_eq!(r.defender_hp, 175);
        assert_eq!(r.max, 77);
        assert_eq!(r.min, 65);
    }

    #[test]
    fn test_stab_and_super_effective() {
        let a = mon("Sparky", vec![Type::Electric], BaseStats::new(100, 100, 100, 100, 100, 100));
        let mv = Move::new("Bolt", Type::Electric, Category::Special, 100);
        let r = range(&a, &defender(), &mv, &FieldState::new());
        // 77 * 1.5 = 115.5 rounds down to 115, then * 2
        assert_eq!(r.max, 230);
    }

    #[test]
    fn test_status_and_zero_power_deal_nothing() {
        let status = Move::new("Protect", Type::Normal, Category::Status, 0);
        let r = range(&attacker(), &defender(), &status, &FieldState::new());
        assert_eq!((r.min, r.max), (0, 0));

        let r = range(&attacker(), &defender(), &Move::unknown("???"), &FieldState::new());
        assert_eq!((r.min, r.max), (0, 0));
    }

    #[test]
    fn test_type_immunity() {
        let ghost = mon("Ghost", vec![Type::Ghost], BaseStats::new(100, 100, 100, 100, 100, 100));
        let mv = Move::new("Body Slam", Type::Normal, Category::Physical, 85);
        let r = range(&attacker(), &ghost, &mv, &FieldState::new());
        assert_eq!(r.max, 0);
    }

    #[test]
    fn test_ability_immunity() {
        let floater = defender().with_ability("Levitate");
        let mv = Move::new("Earthquake", Type::Ground, Category::Physical, 100);
        assert_eq!(range(&attacker(), &floater, &mv, &FieldState::new()).max, 0);
    }

    #[test]
    fn test_weather_boosts_and_weakens() {
        let mv = Move::new("Flamethrower", Type::Fire, Category::Special, 90);
        let target = mon("Target", vec![Type::Normal], BaseStats::new(100, 100, 100, 100, 100, 100));
        let clear = range(&attacker(), &target, &mv, &FieldState::new()).max;
        let sun = range(&attacker(), &target, &mv, &FieldState::new().with_weather(Weather::Sun)).max;
        let rain = range(&attacker(), &target, &mv, &FieldState::new().with_weather(Weather::Rain)).max;
        assert!(sun > clear);
        assert!(rain < clear);
    }

    #[test]
    fn test_terrain_boost() {
        let mv = Move::new("Psychic", Type::Psychic, Category::Special, 90);
        let target = mon("Target", vec![Type::Normal], BaseStats::new(100, 100, 100, 100, 100, 100));
        let plain = range(&attacker(), &target, &mv, &FieldState::new()).max;
        let boosted = range(
            &attacker(),
            &target,
            &mv,
            &FieldState::new().with_terrain(Terrain::Psychic),
        )
        .max;
        assert!(boosted > plain);
    }

    #[test]
    fn test_items_and_abilities() {
        let mv = Move::new("Strike", Type::Fighting, Category::Physical, 100);
        let plain = range(&attacker(), &defender(), &mv, &FieldState::new()).max;
        let banded = range(&attacker().with_item("Choice Band"), &defender(), &mv, &FieldState::new()).max;
        let huge = range(&attacker().with_ability("Huge Power"), &defender(), &mv, &FieldState::new()).max;
        let unknown = range(&attacker().with_item("Mystery Rock"), &defender(), &mv, &FieldState::new()).max;
        assert!(banded > plain);
        assert!(huge > banded);
        assert_eq!(unknown, plain);
    }

    #[test]
    fn test_status_move_with_power_is_unresolvable() {
        let mv = Move::new("Odd", Type::Normal, Category::Status, 50);
        let result = calculator().damage_range(&DamageRequest::new(
            &attacker(),
            &defender(),
            &mv,
            &FieldState::new(),
        ));
        assert!(result.is_err());
    }
}
