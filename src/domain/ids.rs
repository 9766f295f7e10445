use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broadcast region identifier. The backend only knows these six buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionId {
    NorthAmerica,
    Europe,
    Asia,
    Oceania,
    Africa,
    SouthAmerica,
}

impl RegionId {
    pub const ALL: [RegionId; 6] = [
        RegionId::NorthAmerica,
        RegionId::Europe,
        RegionId::Asia,
        RegionId::Oceania,
        RegionId::Africa,
        RegionId::SouthAmerica,
    ];

    /// Wire form used in query strings and JSON bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            RegionId::NorthAmerica => "north_america",
            RegionId::Europe => "europe",
            RegionId::Asia => "asia",
            RegionId::Oceania => "oceania",
            RegionId::Africa => "africa",
            RegionId::SouthAmerica => "south_america",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(pub String);

impl FromStr for RegionId {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == norm)
            .ok_or_else(|| UnknownRegion(s.to_owned()))
    }
}

/// Server-assigned channel id (a UUID string on the current backend).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ChannelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parses_loose_spellings() {
        assert_eq!("europe".parse::<RegionId>(), Ok(RegionId::Europe));
        assert_eq!(
            "North-America".parse::<RegionId>(),
            Ok(RegionId::NorthAmerica)
        );
        assert_eq!(
            "south america".parse::<RegionId>(),
            Ok(RegionId::SouthAmerica)
        );
        assert!("antarctica".parse::<RegionId>().is_err());
    }

    #[test]
    fn region_serde_uses_snake_case() {
        let json = serde_json::to_string(&RegionId::SouthAmerica).expect("serialize");
        assert_eq!(json, "\"south_america\"");
        let back: RegionId = serde_json::from_str("\"north_america\"").expect("deserialize");
        assert_eq!(back, RegionId::NorthAmerica);
    }

    #[test]
    fn region_index_matches_all_order() {
        for (i, r) in RegionId::ALL.iter().enumerate() {
            assert_eq!(r.index(), i);
        }
    }
}
