//! Fixed-point damage modifiers (4096 = 1.0x)

/// A fixed-point damage modifier (4096 scale)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Modifier(pub u16);

impl Modifier {
    pub const ONE: Self = Self(4096);
    pub const HALF: Self = Self(2048);
    pub const DOUBLE: Self = Self(8192);
    pub const ONE_POINT_FIVE: Self = Self(6144);
    pub const ONE_POINT_TWO: Self = Self(4915);
    pub const ONE_POINT_THREE: Self = Self(5325);
    /// Life Orb uses 5324 rather than the rounded 5325
    pub const LIFE_ORB: Self = Self(5324);

    /// Apply to a value with pokeRound
    pub fn apply(self, value: u32) -> u32 {
        if self == Self::ONE {
            return value;
        }
        pokeround(u64::from(value) * u64::from(self.0), 4096)
    }

    /// Combine with another modifier, rounding the intermediate product
    pub fn chain(self, other: Self) -> Self {
        let combined = pokeround(u64::from(self.0) * u64::from(other.0), 4096);
        Self(combined.min(u32::from(u16::MAX)) as u16)
    }
}

impl Default for Modifier {
    fn default() -> Self {
        Self::ONE
    }
}

/// Round to nearest, with an exact half rounding down
pub fn pokeround(value: u64, divisor: u64) -> u32 {
    let quotient = value / divisor;
    let remainder = value % divisor;
    let rounded = if remainder > divisor / 2 {
        quotient + 1
    } else {
        quotient
    };
    rounded.min(u64::from(u32::MAX)) as u32
}

/// floor(floor(floor(2L/5 + 2) * BP * A / D) / 50) + 2
pub fn base_damage(level: u8, base_power: u32, attack: u32, defense: u32) -> u32 {
    let level_factor = u64::from(level) * 2 / 5 + 2;
    let defense = u64::from(defense.max(1));
    let scaled = level_factor * u64::from(base_power) * u64::from(attack) / defense;
    (scaled / 50 + 2).min(u64::from(u32::MAX)) as u32
}
