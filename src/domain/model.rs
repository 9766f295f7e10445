use super::ids::{ChannelId, RegionId};
use chrono::{DateTime, Duration, Utc};

/// Program category. The mapping to a display colour lives in the TUI styles
/// and is a total match, so a new variant fails to compile until it gets one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    News,
    Sports,
    Movie,
    Series,
    Documentary,
    Entertainment,
    Music,
    Kids,
}

impl ProgramType {
    pub const ALL: [ProgramType; 8] = [
        ProgramType::News,
        ProgramType::Sports,
        ProgramType::Movie,
        ProgramType::Series,
        ProgramType::Documentary,
        ProgramType::Entertainment,
        ProgramType::Music,
        ProgramType::Kids,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProgramType::News => "news",
            ProgramType::Sports => "sports",
            ProgramType::Movie => "movie",
            ProgramType::Series => "series",
            ProgramType::Documentary => "documentary",
            ProgramType::Entertainment => "entertainment",
            ProgramType::Music => "music",
            ProgramType::Kids => "kids",
        }
    }

    /// Upper-case badge text shown next to titles.
    pub fn badge(self) -> &'static str {
        match self {
            ProgramType::News => "NEWS",
            ProgramType::Sports => "SPORTS",
            ProgramType::Movie => "MOVIE",
            ProgramType::Series => "SERIES",
            ProgramType::Documentary => "DOC",
            ProgramType::Entertainment => "SHOW",
            ProgramType::Music => "MUSIC",
            ProgramType::Kids => "KIDS",
        }
    }
}

impl std::str::FromStr for ProgramType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown program type: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionCount {
    pub region: RegionId,
    pub channel_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub id: ChannelId,
    pub number: u32,
    pub name: String,
    pub description: String,
    pub region: RegionId,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ProgramType,
    pub duration_minutes: u32,
    pub genre: Option<String>,
    pub rating: Option<String>,
    pub season_number: Option<u32>,
    pub episode_number: Option<u32>,
    pub release_year: Option<i32>,
    pub thumbnail_url: Option<String>,
}

impl Program {
    /// `S1E5`, `S2`, `E3` or nothing, depending on what the backend filled in.
    pub fn season_episode(&self) -> Option<String> {
        match (self.season_number, self.episode_number) {
            (Some(s), Some(e)) => Some(format!("S{s}E{e}")),
            (Some(s), None) => Some(format!("S{s}")),
            (None, Some(e)) => Some(format!("E{e}")),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub id: String,
    pub channel_id: ChannelId,
    pub program: Program,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl ScheduleEntry {
    pub fn derived_end(start: DateTime<Utc>, duration_minutes: u32) -> DateTime<Utc> {
        start + Duration::minutes(i64::from(duration_minutes))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub program: Program,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Server-computed, clamped to `0.0..=100.0`.
    pub progress_percentage: f64,
    pub time_remaining_minutes: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpNext {
    pub program: Program,
    pub start_time: Option<DateTime<Utc>>,
}

/// Current + next program snapshot for one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveGuideRow {
    pub channel: Channel,
    pub current: Option<NowPlaying>,
    pub next: Option<UpNext>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(season: Option<u32>, episode: Option<u32>) -> Program {
        Program {
            id: "p".to_owned(),
            title: "Detective Series".to_owned(),
            description: String::new(),
            kind: ProgramType::Series,
            duration_minutes: 45,
            genre: None,
            rating: None,
            season_number: season,
            episode_number: episode,
            release_year: None,
            thumbnail_url: None,
        }
    }

    #[test]
    fn season_episode_label() {
        assert_eq!(program(Some(1), Some(5)).season_episode().as_deref(), Some("S1E5"));
        assert_eq!(program(Some(2), None).season_episode().as_deref(), Some("S2"));
        assert_eq!(program(None, Some(3)).season_episode().as_deref(), Some("E3"));
        assert_eq!(program(None, None).season_episode(), None);
    }

    #[test]
    fn program_type_parses_case_insensitively() {
        assert_eq!("Movie".parse::<ProgramType>(), Ok(ProgramType::Movie));
        assert!("soap".parse::<ProgramType>().is_err());
    }

    #[test]
    fn derived_end_adds_duration() {
        let start = DateTime::parse_from_rfc3339("2025-01-01T23:30:00Z")
            .expect("ts")
            .with_timezone(&Utc);
        let end = ScheduleEntry::derived_end(start, 45);
        assert_eq!(end.to_rfc3339(), "2025-01-02T00:15:00+00:00");
    }
}
