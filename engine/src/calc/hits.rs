//! Hit counts as displayed: a number below five, or "5+"

/// Raw value reported when a move cannot KO (above the display cap)
pub const CANNOT_KO: f64 = 6.0;

/// Hit counts at or above this are shown as "5+"
pub const DISPLAY_CAP: f64 = 5.0;

/// A clamped hit count
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitCount {
    /// Finite count in (0, 5)
    Hits(f64),
    FivePlus,
}

impl HitCount {
    /// Clamp a raw estimator value. Anything at or above the cap, and
    /// anything non-finite or non-positive, becomes "5+".
    pub fn from_raw(raw: f64) -> Self {
        if raw.is_finite() && raw > 0.0 && raw < DISPLAY_CAP {
            HitCount::Hits(raw)
        } else {
            HitCount::FivePlus
        }
    }

    pub fn is_five_plus(&self) -> bool {
        matches!(self, HitCount::FivePlus)
    }

    /// The count, or None for "5+"
    pub fn value(&self) -> Option<f64> {
        match self {
            HitCount::Hits(v) => Some(*v),
            HitCount::FivePlus => None,
        }
    }

    /// Position on a chart axis; "5+" sits at the cap
    pub fn axis_value(&self) -> f64 {
        self.value().unwrap_or(DISPLAY_CAP)
    }

    /// Bucket index for unit-width bins, the last bin open-ended
    pub fn bucket(&self, resolution: usize) -> usize {
        let last = resolution.saturating_sub(1);
        match self {
            HitCount::Hits(v) => (v.floor() as usize).min(last),
            HitCount::FivePlus => last,
        }
    }
}

impl std::fmt::Display for HitCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HitCount::Hits(v) => write!(f, "{v:.2}"),
            HitCount::FivePlus => write!(f, "5+"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HitCount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HitCount::Hits(v) => serializer.serialize_f64(*v),
            HitCount::FivePlus => serializer.serialize_str("5+"),
        }
    }
}
