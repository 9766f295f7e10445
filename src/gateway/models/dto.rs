use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MessageResp {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RegionCountInfo {
    pub region: String,
    #[serde(default)]
    pub channel_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct ChannelInfo {
    pub id: String,
    pub channel_number: i64,
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub description: String,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProgramInfo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub duration_minutes: i64,
    pub rating: Option<String>,
    pub genre: Option<String>,
    pub episode_number: Option<i64>,
    pub season_number: Option<i64>,
    pub release_year: Option<i32>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentShowInfo {
    pub channel: ChannelInfo,
    pub current_program: Option<ProgramInfo>,
    pub next_program: Option<ProgramInfo>,
    pub current_start_time: Option<String>,
    pub current_end_time: Option<String>,
    pub next_start_time: Option<String>,
    #[serde(default)]
    pub progress_percentage: f64,
    #[serde(default)]
    pub time_remaining_minutes: i64,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleInfo {
    pub id: String,
    pub channel_id: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub program: ProgramInfo,
}
