//! Hits-to-KO estimation strategies

use std::sync::Arc;

use tracing::debug;

use super::calculator::{BattleCalculator, DamageRequest};
use super::hits::CANNOT_KO;
use super::modifier::base_damage;
use super::standard::StandardCalculator;
use crate::types::{Category, Combatant, FieldState, Move, StatModel, TypeChart, rank_multiplier};

/// Mean of the 85%..100% random band
pub const MEAN_ROLL: f64 = 0.925;

/// Estimates how many uses of `mv` it takes `attacker` to KO `defender`
///
/// The result is unclamped; callers turn it into a [`super::HitCount`].
/// Cases that cannot KO report [`CANNOT_KO`].
pub trait DamageEstimator {
    fn hits_to_ko(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        mv: &Move,
        field: &FieldState,
        rank_delta: i8,
    ) -> f64;
}

impl<E: DamageEstimator + ?Sized> DamageEstimator for &E {
    fn hits_to_ko(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        mv: &Move,
        field: &FieldState,
        rank_delta: i8,
    ) -> f64 {
        (**self).hits_to_ko(attacker, defender, mv, field, rank_delta)
    }
}

/// Defender HP over rank-scaled average damage, or [`CANNOT_KO`]
pub fn hits_from_average(defender_hp: u32, average: f64, rank_delta: i8) -> f64 {
    let scaled = average * rank_multiplier(rank_delta);
    if scaled.is_nan() || scaled <= 0.0 {
        return CANNOT_KO;
    }
    let hits = f64::from(defender_hp) / scaled;
    if hits.is_finite() && hits >= 0.0 {
        hits
    } else {
        CANNOT_KO
    }
}

/// Delegates to a [`BattleCalculator`] and averages its roll range
#[derive(Debug, Clone)]
pub struct CalculatorEstimator<C> {
    calculator: C,
}

impl<C: BattleCalculator> CalculatorEstimator<C> {
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }
}

impl<C: BattleCalculator> DamageEstimator for CalculatorEstimator<C> {
    fn hits_to_ko(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        mv: &Move,
        field: &FieldState,
        rank_delta: i8,
    ) -> f64 {
        if mv.base_power == 0 {
            return CANNOT_KO;
        }
        let request = DamageRequest::new(attacker, defender, mv, field);
        match self.calculator.damage_range(&request) {
            Ok(range) => hits_from_average(range.defender_hp, range.average(), rank_delta),
            Err(e) => {
                debug!(
                    attacker = %attacker.name,
                    defender = %defender.name,
                    mv = %mv.name,
                    error = %e,
                    "calculator could not resolve"
                );
                CANNOT_KO
            }
        }
    }
}

/// Closed-form estimate: base damage with STAB and chart effectiveness at
/// the mean roll. Ignores the field, items and abilities.
#[derive(Debug, Clone)]
pub struct FormulaEstimator {
    chart: Arc<TypeChart>,
    model: StatModel,
}

impl FormulaEstimator {
    pub fn new(chart: Arc<TypeChart>, model: StatModel) -> Self {
        Self { chart, model }
    }

    /// Mean damage of one use, before ranks
    pub fn average_damage(&self, attacker: &Combatant, defender: &Combatant, mv: &Move) -> f64 {
        if !mv.is_damaging() {
            return 0.0;
        }
        let effectiveness = self.chart.effectiveness(mv.move_type, &defender.types);
        if effectiveness == 0.0 {
            return 0.0;
        }

        let a = attacker.stats(&self.model);
        let d = defender.stats(&self.model);
        let (attack, defense) = match mv.category {
            Category::Physical => (a.atk, d.def),
            _ => (a.spa, d.spd),
        };
        let base = base_damage(self.model.level, u32::from(mv.base_power), attack, defense);
        let stab = if attacker.has_type(mv.move_type) { 1.5 } else { 1.0 };

        f64::from(base) * stab * effectiveness * MEAN_ROLL
    }
}

impl DamageEstimator for FormulaEstimator {
    fn hits_to_ko(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        mv: &Move,
        _field: &FieldState,
        rank_delta: i8,
    ) -> f64 {
        if mv.base_power == 0 {
            return CANNOT_KO;
        }
        let hp = defender.stats(&self.model).hp;
        hits_from_average(hp, self.average_damage(attacker, defender, mv), rank_delta)
    }
}

/// Which estimator an analysis runs with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EstimatorKind {
    #[default]
    Calculator,
    Formula,
}

impl EstimatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimatorKind::Calculator => "calculator",
            EstimatorKind::Formula => "formula",
        }
    }
}

impl std::fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Either built-in estimator, chosen at configuration time
#[derive(Debug, Clone)]
pub enum Estimator {
    Calculator(CalculatorEstimator<StandardCalculator>),
    Formula(FormulaEstimator),
}

impl Estimator {
    pub fn new(kind: EstimatorKind, chart: Arc<TypeChart>, model: StatModel) -> Self {
        match kind {
            EstimatorKind::Calculator => Estimator::Calculator(CalculatorEstimator::new(
                StandardCalculator::new(chart, model),
            )),
            EstimatorKind::Formula => Estimator::Formula(FormulaEstimator::new(chart, model)),
        }
    }

    pub fn kind(&self) -> EstimatorKind {
        match self {
            Estimator::Calculator(_) => EstimatorKind::Calculator,
            Estimator::Formula(_) => EstimatorKind::Formula,
        }
    }
}

impl DamageEstimator for Estimator {
    fn hits_to_ko(
        &self,
        attacker: &Combatant,
        defender: &Combatant,
        mv: &Move,
        field: &FieldState,
        rank_delta: i8,
    ) -> f64 {
        match self {
            Estimator::Calculator(e) => e.hits_to_ko(attacker, defender, mv, field, rank_delta),
            Estimator::Formula(e) => e.hits_to_ko(attacker, defender, mv, field, rank_delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{DamageRange, Unresolvable};
    use crate::types::{BaseStats, Terrain, Type, Weather};

    fn mon(name: &str, types: Vec<Type>, base: BaseStats) -> Combatant {
        Combatant::new(name, types, base).unwrap()
    }

    fn attacker() -> Combatant {
        mon("Attacker", vec![Type::Normal], BaseStats::new(100, 100, 100, 100, 100, 100))
    }

    fn target() -> Combatant {
        mon("Target", vec![Type::Water], BaseStats::new(100, 100, 50, 100, 50, 100))
    }

    fn strike() -> Move {
        Move::new("Strike", Type::Fighting, Category::Physical, 100)
    }

    fn both() -> [Estimator; 2] {
        let chart = Arc::new(TypeChart::standard());
        [
            Estimator::new(EstimatorKind::Calculator, chart.clone(), StatModel::default()),
            Estimator::new(EstimatorKind::Formula, chart, StatModel::default()),
        ]
    }

    /// Calculator stub returning a fixed result
    struct Fixed(Result<DamageRange, Unresolvable>);

    impl BattleCalculator for Fixed {
        fn damage_range(&self, _: &DamageRequest<'_>) -> Result<DamageRange, Unresolvable> {
            self.0.clone()
        }
    }

    #[test]
    fn test_two_to_three_hits() {
        for estimator in both() {
            let hits = estimator.hits_to_ko(&attacker(), &target(), &strike(), &FieldState::new(), 0);
            assert!((2.0..3.0).contains(&hits), "{:?}: {hits}", estimator.kind());
        }
    }

    #[test]
    fn test_calculator_hits_value() {
        let [calc, _] = both();
        let hits = calc.hits_to_ko(&attacker(), &target(), &strike(), &FieldState::new(), 0);
        // 175 HP over an average of (65 + 77) / 2
        assert!((hits - 175.0 / 71.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_power_cannot_ko() {
        for estimator in both() {
            let hits = estimator.hits_to_ko(
                &attacker(),
                &target(),
                &Move::unknown("Nothing"),
                &FieldState::new(),
                6,
            );
            assert_eq!(hits, CANNOT_KO);
        }
    }

    #[test]
    fn test_immunity_cannot_ko() {
        let ghost = mon("Ghost", vec![Type::Ghost], BaseStats::new(50, 50, 50, 50, 50, 50));
        let slam = Move::new("Body Slam", Type::Normal, Category::Physical, 120);
        for estimator in both() {
            assert_eq!(
                estimator.hits_to_ko(&attacker(), &ghost, &slam, &FieldState::new(), 6),
                CANNOT_KO
            );
        }
    }

    #[test]
    fn test_rank_scales_average_once() {
        let [calc, _] = both();
        let base = calc.hits_to_ko(&attacker(), &target(), &strike(), &FieldState::new(), 0);
        let boosted = calc.hits_to_ko(&attacker(), &target(), &strike(), &FieldState::new(), 2);
        let dropped = calc.hits_to_ko(&attacker(), &target(), &strike(), &FieldState::new(), -2);
        assert!((boosted - base / 2.0).abs() < 0.001);
        assert!((dropped - base * 2.0).abs() < 0.001);
    }

    #[test]
    fn test_formula_ignores_field() {
        let [_, formula] = both();
        let fire = Move::new("Flamethrower", Type::Fire, Category::Special, 90);
        let clear = formula.hits_to_ko(&attacker(), &target(), &fire, &FieldState::new(), 0);
        let sun = formula.hits_to_ko(
            &attacker(),
            &target(),
            &fire,
            &FieldState::new().with_weather(Weather::Sun),
            0,
        );
        assert_eq!(clear, sun);
    }

    #[test]
    fn test_calculator_passes_field_through() {
        // The range already encodes the field; nothing is applied on top
        let estimator = CalculatorEstimator::new(Fixed(Ok(DamageRange::new(60, 70, 180))));
        let expected = 180.0 / 65.0;

        let weathers = std::iter::once(None).chain(Weather::ALL.map(Some));
        for weather in weathers {
            let terrains = std::iter::once(None).chain(Terrain::ALL.map(Some));
            for terrain in terrains {
                let field = FieldState { weather, terrain };
                let hits = estimator.hits_to_ko(&attacker(), &target(), &strike(), &field, 0);
                assert!((hits - expected).abs() < 0.001, "{field:?}: {hits}");
            }
        }
    }

    #[test]
    fn test_unresolvable_is_cannot_ko() {
        let estimator = CalculatorEstimator::new(Fixed(Err(Unresolvable("no data".into()))));
        let hits = estimator.hits_to_ko(&attacker(), &target(), &strike(), &FieldState::new(), 0);
        assert_eq!(hits, CANNOT_KO);
    }

    #[test]
    fn test_zero_range_is_cannot_ko() {
        let estimator = CalculatorEstimator::new(Fixed(Ok(DamageRange::none(100))));
        let hits = estimator.hits_to_ko(&attacker(), &target(), &strike(), &FieldState::new(), 0);
        assert_eq!(hits, CANNOT_KO);
    }

    #[test]
    fn test_hits_from_average() {
        assert!((hits_from_average(100, 50.0, 0) - 2.0).abs() < 0.001);
        assert!((hits_from_average(100, 50.0, 6) - 0.5).abs() < 0.001);
        assert_eq!(hits_from_average(100, 0.0, 0), CANNOT_KO);
        assert_eq!(hits_from_average(100, f64::NAN, 0), CANNOT_KO);
    }
}
