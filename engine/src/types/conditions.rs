//! Weather and terrain conditions

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Snow,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Weather::Sun, Weather::Rain, Weather::Sand, Weather::Snow];

    /// Parse a weather name. "Clear", "none" and unknown names give None.
    pub fn from_name(s: &str) -> Option<Self> {
        // Normalize: lowercase and remove spaces
        let normalized = s.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "sunnyday" | "sun" | "harshsunlight" => Some(Weather::Sun),
            "raindance" | "rain" => Some(Weather::Rain),
            "sandstorm" | "sand" => Some(Weather::Sand),
            "snow" | "snowscape" | "hail" => Some(Weather::Snow),
            _ => None,
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sun => "Sun",
            Weather::Rain => "Rain",
            Weather::Sand => "Sandstorm",
            Weather::Snow => "Snow",
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terrain conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Terrain {
    Electric,
    Grassy,
    Misty,
    Psychic,
}

impl Terrain {
    pub const ALL: [Terrain; 4] = [
        Terrain::Electric,
        Terrain::Grassy,
        Terrain::Misty,
        Terrain::Psychic,
    ];

    /// Parse a terrain name, with or without the "Terrain" suffix
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized = s.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "electricterrain" | "electric" => Some(Terrain::Electric),
            "grassyterrain" | "grassy" => Some(Terrain::Grassy),
            "mistyterrain" | "misty" => Some(Terrain::Misty),
            "psychicterrain" | "psychic" => Some(Terrain::Psychic),
            _ => None,
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Terrain::Electric => "Electric Terrain",
            Terrain::Grassy => "Grassy Terrain",
            Terrain::Misty => "Misty Terrain",
            Terrain::Psychic => "Psychic Terrain",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_from_name() {
        assert_eq!(Weather::from_name("Sun"), Some(Weather::Sun));
        assert_eq!(Weather::from_name("Sandstorm"), Some(Weather::Sand));
        assert_eq!(Weather::from_name("rain dance"), Some(Weather::Rain));
        assert_eq!(Weather::from_name("hail"), Some(Weather::Snow));
        assert_eq!(Weather::from_name("Clear"), None);
    }

    #[test]
    fn test_terrain_from_name() {
        assert_eq!(Terrain::from_name("Electric"), Some(Terrain::Electric));
        assert_eq!(Terrain::from_name("Psychic Terrain"), Some(Terrain::Psychic));
        assert_eq!(Terrain::from_name("none"), None);
    }
}
