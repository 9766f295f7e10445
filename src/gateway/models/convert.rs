use crate::domain::{
    Channel, ChannelId, LiveGuideRow, NowPlaying, Program, ProgramType, RegionCount, RegionId,
    ScheduleEntry, UpNext,
};
use chrono::{DateTime, NaiveDateTime, Utc};

use super::dto::{ChannelInfo, CurrentShowInfo, ProgramInfo, RegionCountInfo, ScheduleInfo};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("response parse failed: {0}")]
    BadJson(#[from] serde_json::Error),
    #[error("bad timestamp in {field}: {value}")]
    BadTimestamp { field: &'static str, value: String },
    #[error("unknown region: {0}")]
    UnknownRegion(String),
    #[error("unknown program type: {0}")]
    UnknownProgramType(String),
}

/// Parses a backend timestamp. The API serializes naive UTC datetimes, so a
/// value without an offset is taken as UTC.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, ModelError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|_| ModelError::BadTimestamp {
            field,
            value: value.to_owned(),
        })
}

fn parse_opt_timestamp(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ModelError> {
    value.map(|v| parse_timestamp(field, v)).transpose()
}

fn to_u32(v: i64) -> u32 {
    u32::try_from(v.max(0)).unwrap_or(u32::MAX)
}

fn opt_u32(v: Option<i64>) -> Option<u32> {
    v.map(to_u32)
}

fn parse_region(s: &str) -> Result<RegionId, ModelError> {
    s.parse::<RegionId>()
        .map_err(|_| ModelError::UnknownRegion(s.to_owned()))
}

/// Counts for unknown regions are dropped; the map has nowhere to show them.
pub fn to_region_counts(items: Vec<RegionCountInfo>) -> Vec<RegionCount> {
    items
        .into_iter()
        .filter_map(|c| match parse_region(&c.region) {
            Ok(region) => Some(RegionCount {
                region,
                channel_count: to_u32(c.channel_count),
            }),
            Err(e) => {
                tracing::warn!(err = %e, "skipping region count");
                None
            }
        })
        .collect()
}

pub fn to_channel(c: ChannelInfo) -> Result<Channel, ModelError> {
    Ok(Channel {
        region: parse_region(&c.region)?,
        id: ChannelId(c.id),
        number: to_u32(c.channel_number),
        name: c.name,
        description: c.description,
        language: c.language,
        timezone: c.timezone,
        logo_url: c.logo_url,
    })
}

pub fn to_channels(items: Vec<ChannelInfo>) -> Result<Vec<Channel>, ModelError> {
    items.into_iter().map(to_channel).collect()
}

pub fn to_program(p: ProgramInfo) -> Result<Program, ModelError> {
    let kind = p
        .kind
        .parse::<ProgramType>()
        .map_err(|_| ModelError::UnknownProgramType(p.kind.clone()))?;
    Ok(Program {
        id: p.id,
        title: p.title,
        description: p.description,
        kind,
        duration_minutes: to_u32(p.duration_minutes),
        genre: p.genre,
        rating: p.rating,
        season_number: opt_u32(p.season_number),
        episode_number: opt_u32(p.episode_number),
        release_year: p.release_year,
        thumbnail_url: p.thumbnail_url,
    })
}

pub fn to_programs(items: Vec<ProgramInfo>) -> Result<Vec<Program>, ModelError> {
    items.into_iter().map(to_program).collect()
}

pub fn to_live_guide_row(s: CurrentShowInfo) -> Result<LiveGuideRow, ModelError> {
    let channel = to_channel(s.channel)?;
    let current = match s.current_program {
        Some(p) => Some(NowPlaying {
            program: to_program(p)?,
            start_time: parse_opt_timestamp(
                "current_start_time",
                s.current_start_time.as_deref(),
            )?,
            end_time: parse_opt_timestamp("current_end_time", s.current_end_time.as_deref())?,
            progress_percentage: if s.progress_percentage.is_finite() {
                s.progress_percentage.clamp(0.0, 100.0)
            } else {
                0.0
            },
            time_remaining_minutes: to_u32(s.time_remaining_minutes),
        }),
        None => None,
    };
    let next = match s.next_program {
        Some(p) => Some(UpNext {
            program: to_program(p)?,
            start_time: parse_opt_timestamp("next_start_time", s.next_start_time.as_deref())?,
        }),
        None => None,
    };
    Ok(LiveGuideRow {
        channel,
        current,
        next,
    })
}

pub fn to_live_guide(items: Vec<CurrentShowInfo>) -> Result<Vec<LiveGuideRow>, ModelError> {
    items.into_iter().map(to_live_guide_row).collect()
}

pub fn to_schedule_entry(s: ScheduleInfo) -> Result<ScheduleEntry, ModelError> {
    let program = to_program(s.program)?;
    let start_time = parse_timestamp("start_time", &s.start_time)?;
    let end_time = match s.end_time.as_deref() {
        Some(v) => parse_timestamp("end_time", v)?,
        None => ScheduleEntry::derived_end(start_time, program.duration_minutes),
    };
    Ok(ScheduleEntry {
        id: s.id,
        channel_id: ChannelId(s.channel_id),
        program,
        start_time,
        end_time,
    })
}

pub fn to_schedule(items: Vec<ScheduleInfo>) -> Result<Vec<ScheduleEntry>, ModelError> {
    items.into_iter().map(to_schedule_entry).collect()
}
