//! Base stats, natures, spreads and the effective-stat model

use counterdex_data::{BaseStatsRecord, SpreadRecord};

/// Default level for every calculation
pub const DEFAULT_LEVEL: u8 = 50;

/// Default individual value for every stat
pub const DEFAULT_IV: u8 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    fn index(self) -> usize {
        self as usize
    }
}

/// Species base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl BaseStats {
    pub fn new(hp: u16, atk: u16, def: u16, spa: u16, spd: u16, spe: u16) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

impl From<BaseStatsRecord> for BaseStats {
    fn from(r: BaseStatsRecord) -> Self {
        Self::new(r.hp, r.atk, r.def, r.spa, r.spd, r.spe)
    }
}

/// Effective (in-battle, unboosted) stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl Stats {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Nature {
    #[default]
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    /// Parse a nature name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        let nature = match s.trim().to_ascii_lowercase().as_str() {
            "hardy" => Nature::Hardy,
            "lonely" => Nature::Lonely,
            "brave" => Nature::Brave,
            "adamant" => Nature::Adamant,
            "naughty" => Nature::Naughty,
            "bold" => Nature::Bold,
            "docile" => Nature::Docile,
            "relaxed" => Nature::Relaxed,
            "impish" => Nature::Impish,
            "lax" => Nature::Lax,
            "timid" => Nature::Timid,
            "hasty" => Nature::Hasty,
            "serious" => Nature::Serious,
            "jolly" => Nature::Jolly,
            "naive" => Nature::Naive,
            "modest" => Nature::Modest,
            "mild" => Nature::Mild,
            "quiet" => Nature::Quiet,
            "bashful" => Nature::Bashful,
            "rash" => Nature::Rash,
            "calm" => Nature::Calm,
            "gentle" => Nature::Gentle,
            "sassy" => Nature::Sassy,
            "careful" => Nature::Careful,
            "quirky" => Nature::Quirky,
            _ => return None,
        };
        Some(nature)
    }

    /// Boosted and lowered stat, or None for neutral natures
    pub fn effect(self) -> Option<(Stat, Stat)> {
        use Stat::*;
        match self {
            Nature::Hardy | Nature::Docile | Nature::Serious | Nature::Bashful | Nature::Quirky => {
                None
            }
            Nature::Lonely => Some((Atk, Def)),
            Nature::Brave => Some((Atk, Spe)),
            Nature::Adamant => Some((Atk, Spa)),
            Nature::Naughty => Some((Atk, Spd)),
            Nature::Bold => Some((Def, Atk)),
            Nature::Relaxed => Some((Def, Spe)),
            Nature::Impish => Some((Def, Spa)),
            Nature::Lax => Some((Def, Spd)),
            Nature::Timid => Some((Spe, Atk)),
            Nature::Hasty => Some((Spe, Def)),
            Nature::Jolly => Some((Spe, Spa)),
            Nature::Naive => Some((Spe, Spd)),
            Nature::Modest => Some((Spa, Atk)),
            Nature::Mild => Some((Spa, Def)),
            Nature::Quiet => Some((Spa, Spe)),
            Nature::Rash => Some((Spa, Spd)),
            Nature::Calm => Some((Spd, Atk)),
            Nature::Gentle => Some((Spd, Def)),
            Nature::Sassy => Some((Spd, Spe)),
            Nature::Careful => Some((Spd, Spa)),
        }
    }

    /// Modifier in tenths: 11 boosted, 9 lowered, 10 otherwise
    pub fn tenths(self, stat: Stat) -> u32 {
        match self.effect() {
            Some((up, _)) if up == stat => 11,
            Some((_, down)) if down == stat => 9,
            _ => 10,
        }
    }

    pub fn modifier(self, stat: Stat) -> f64 {
        f64::from(self.tenths(stat)) / 10.0
    }
}

/// Nature, effort values and individual values for one combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatSpread {
    pub nature: Nature,
    /// hp/atk/def/spa/spd/spe
    pub evs: [u8; 6],
    pub ivs: [u8; 6],
}

impl Default for StatSpread {
    fn default() -> Self {
        Self {
            nature: Nature::default(),
            evs: [0; 6],
            ivs: [DEFAULT_IV; 6],
        }
    }
}

impl StatSpread {
    /// Build from a parsed spread record. Unknown natures and missing EVs
    /// fall back to the defaults.
    pub fn from_record(record: &SpreadRecord) -> Self {
        let defaults = Self::default();
        Self {
            nature: record
                .nature
                .as_deref()
                .and_then(Nature::from_name)
                .unwrap_or(defaults.nature),
            evs: record.evs.unwrap_or(defaults.evs),
            ivs: defaults.ivs,
        }
    }

    pub fn ev(&self, stat: Stat) -> u8 {
        self.evs[stat.index()]
    }

    pub fn iv(&self, stat: Stat) -> u8 {
        self.ivs[stat.index()]
    }
}

/// floor((2*base + iv + floor(ev/4)) * level / 100) + level + 10
pub fn calc_hp(base: u16, iv: u8, ev: u8, level: u8) -> u32 {
    let level = u32::from(level);
    core_value(base, iv, ev, level) + level + 10
}

/// floor((floor((2*base + iv + floor(ev/4)) * level / 100) + 5) * nature)
pub fn calc_stat(base: u16, iv: u8, ev: u8, level: u8, nature_tenths: u32) -> u32 {
    (core_value(base, iv, ev, u32::from(level)) + 5) * nature_tenths / 10
}

fn core_value(base: u16, iv: u8, ev: u8, level: u32) -> u32 {
    (2 * u32::from(base) + u32::from(iv) + u32::from(ev) / 4) * level / 100
}

/// Maps base stats and a spread to effective stats at a fixed level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatModel {
    pub level: u8,
}

impl Default for StatModel {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }
}

impl StatModel {
    pub fn new(level: u8) -> Self {
        Self { level }
    }

    pub fn stats(&self, base: &BaseStats, spread: &StatSpread) -> Stats {
        let stat = |s: Stat| {
            calc_stat(
                base.get(s),
                spread.iv(s),
                spread.ev(s),
                self.level,
                spread.nature.tenths(s),
            )
        };
        Stats {
            hp: calc_hp(base.hp, spread.iv(Stat::Hp), spread.ev(Stat::Hp), self.level),
            atk: stat(Stat::Atk),
            def: stat(Stat::Def),
            spa: stat(Stat::Spa),
            spd: stat(Stat::Spd),
            spe: stat(Stat::Spe),
        }
    }
}
