//! Fixed region catalog shown on the world map.

use super::ids::RegionId;
use super::model::RegionCount;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionInfo {
    pub id: RegionId,
    pub name: &'static str,
    /// Marker position on the map canvas.
    pub lon: f64,
    pub lat: f64,
}

pub const REGION_CATALOG: [RegionInfo; 6] = [
    RegionInfo {
        id: RegionId::NorthAmerica,
        name: "North America",
        lon: -100.0,
        lat: 45.0,
    },
    RegionInfo {
        id: RegionId::Europe,
        name: "Europe",
        lon: 15.0,
        lat: 52.0,
    },
    RegionInfo {
        id: RegionId::Asia,
        name: "Asia",
        lon: 95.0,
        lat: 40.0,
    },
    RegionInfo {
        id: RegionId::Oceania,
        name: "Oceania",
        lon: 140.0,
        lat: -25.0,
    },
    RegionInfo {
        id: RegionId::Africa,
        name: "Africa",
        lon: 20.0,
        lat: 5.0,
    },
    RegionInfo {
        id: RegionId::SouthAmerica,
        name: "South America",
        lon: -60.0,
        lat: -15.0,
    },
];

pub fn region_info(id: RegionId) -> &'static RegionInfo {
    &REGION_CATALOG[id.index()]
}

/// Per-region channel counts, 0 until the gateway says otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionCounts([u32; 6]);

impl RegionCounts {
    pub fn get(&self, id: RegionId) -> u32 {
        self.0[id.index()]
    }

    /// Replaces every count with the latest response. Regions the server
    /// omitted have no channels.
    pub fn apply(&mut self, counts: &[RegionCount]) {
        self.0 = [0; 6];
        for c in counts {
            self.0[c.region.index()] = c.channel_count;
        }
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}
