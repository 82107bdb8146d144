//! Rank (stat stage) modifiers for the meta and counter sides

/// Lowest and highest rank
pub const MIN_STAGE: i8 = -6;
pub const MAX_STAGE: i8 = 6;

/// Clamp any integer rank into -6..=+6
pub fn clamp_stage(value: i32) -> i8 {
    value.clamp(i32::from(MIN_STAGE), i32::from(MAX_STAGE)) as i8
}

/// Multiplier for a rank
/// +1 = 1.5x, +2 = 2x, ..., +6 = 4x
/// -1 = 0.67x, -2 = 0.5x, ..., -6 = 0.25x
pub fn rank_multiplier(stage: i8) -> f64 {
    let stage = i32::from(stage.clamp(MIN_STAGE, MAX_STAGE));
    if stage >= 0 {
        f64::from(2 + stage) / 2.0
    } else {
        2.0 / f64::from(2 - stage)
    }
}

/// Attack, defense and speed ranks for one side (-6 to +6)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Stages {
    pub attack: i8,
    pub defense: i8,
    pub speed: i8,
}

impl Stages {
    /// Create stages, clamping each to -6..+6
    pub fn clamped(attack: i32, defense: i32, speed: i32) -> Self {
        Self {
            attack: clamp_stage(attack),
            defense: clamp_stage(defense),
            speed: clamp_stage(speed),
        }
    }
}

/// Ranks for both sides of the analysis
///
/// "meta" is the selected target, "counter" is every candidate. Only the
/// difference between the two sides matters for each measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankVector {
    pub meta: Stages,
    pub counter: Stages,
}

impl RankVector {
    pub fn new(meta: Stages, counter: Stages) -> Self {
        Self { meta, counter }
    }

    /// Build from [meta atk, meta def, meta spe, counter atk, counter def, counter spe]
    pub fn from_array(ranks: [i32; 6]) -> Self {
        Self {
            meta: Stages::clamped(ranks[0], ranks[1], ranks[2]),
            counter: Stages::clamped(ranks[3], ranks[4], ranks[5]),
        }
    }

    /// Rank applied when a candidate attacks the target
    pub fn ko_delta(&self) -> i8 {
        clamp_stage(i32::from(self.counter.attack) - i32::from(self.meta.defense))
    }

    /// Rank applied when the target attacks a candidate
    pub fn endure_delta(&self) -> i8 {
        clamp_stage(i32::from(self.meta.attack) - i32::from(self.counter.defense))
    }

    /// Rank applied to the target's speed before comparing with a candidate
    pub fn speed_delta(&self) -> i8 {
        clamp_stage(i32::from(self.meta.speed) - i32::from(self.counter.speed))
    }
}
