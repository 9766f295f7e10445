//! Text formatting shared by the TUI and the plain-text CLI output.

use crate::domain::ScheduleEntry;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use std::fmt::Display;

/// `3:05 PM` in the viewer's local time, `-` when unknown.
pub(crate) fn fmt_time_12h(time: Option<DateTime<Utc>>) -> String {
    fmt_time_12h_in(time, &Local)
}

pub(crate) fn fmt_time_12h_in<Tz>(time: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match time {
        Some(t) => t.with_timezone(tz).format("%-I:%M %p").to_string(),
        None => "-".to_owned(),
    }
}

pub(crate) fn fmt_time_range(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> String {
    format!("{} - {}", fmt_time_12h(start), fmt_time_12h(end))
}

/// `45 min`, `1h`, `2h 15m`.
pub(crate) fn fmt_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Entries grouped by the local calendar date of their start. Groups appear in
/// order of first occurrence and keep the received order inside each group.
pub(crate) fn group_by_date<'a, Tz: TimeZone>(
    entries: &'a [ScheduleEntry],
    tz: &Tz,
) -> Vec<(NaiveDate, Vec<&'a ScheduleEntry>)> {
    let mut groups: Vec<(NaiveDate, Vec<&ScheduleEntry>)> = Vec::new();
    for entry in entries {
        let date = entry.start_time.with_timezone(tz).date_naive();
        match groups.iter_mut().find(|(d, _)| *d == date) {
            Some((_, items)) => items.push(entry),
            None => groups.push((date, vec![entry])),
        }
    }
    groups
}

/// `Monday, January 6`.
pub(crate) fn date_header(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChannelId, Program, ProgramType};
    use chrono::FixedOffset;

    fn entry(id: &str, y: i32, m: u32, d: u32, h: u32, kind: ProgramType) -> ScheduleEntry {
        let start = Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap();
        ScheduleEntry {
            id: id.to_owned(),
            channel_id: ChannelId::new("c1"),
            program: Program {
                id: format!("p-{id}"),
                title: format!("Show {id}"),
                description: String::new(),
                kind,
                duration_minutes: 60,
                genre: None,
                rating: None,
                season_number: None,
                episode_number: None,
                release_year: None,
                thumbnail_url: None,
            },
            start_time: start,
            end_time: ScheduleEntry::derived_end(start, 60),
        }
    }

    #[test]
    fn twelve_hour_clock() {
        let t = Utc.with_ymd_and_hms(2025, 1, 6, 15, 5, 0).unwrap();
        assert_eq!(fmt_time_12h_in(Some(t), &Utc), "3:05 PM");
        let t = Utc.with_ymd_and_hms(2025, 1, 6, 0, 30, 0).unwrap();
        assert_eq!(fmt_time_12h_in(Some(t), &Utc), "12:30 AM");
    }

    #[test]
    fn missing_time_is_a_dash() {
        assert_eq!(fmt_time_12h_in(None, &Utc), "-");
        assert_eq!(fmt_time_12h(None), "-");
    }

    #[test]
    fn durations() {
        assert_eq!(fmt_duration(45), "45 min");
        assert_eq!(fmt_duration(60), "1h");
        assert_eq!(fmt_duration(135), "2h 15m");
    }

    #[test]
    fn two_dates_make_two_groups_in_order() {
        let entries = vec![
            entry("a", 2025, 1, 6, 20, ProgramType::News),
            entry("b", 2025, 1, 6, 22, ProgramType::Movie),
            entry("c", 2025, 1, 7, 1, ProgramType::Kids),
        ];
        let groups = group_by_date(&entries, &Utc);
        assert_eq!(groups.len(), 2);
        assert_eq!(date_header(groups[0].0), "Monday, January 6");
        assert_eq!(date_header(groups[1].0), "Tuesday, January 7");
        let ids: Vec<&str> = groups[0].1.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(groups[1].1[0].id, "c");
    }

    #[test]
    fn grouping_uses_the_local_date() {
        let entries = vec![
            entry("a", 2025, 1, 6, 20, ProgramType::News),
            entry("b", 2025, 1, 6, 23, ProgramType::News),
        ];
        // 23:00 UTC is already the 7th at UTC+2.
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let groups = group_by_date(&entries, &tz);
        assert_eq!(groups.len(), 2);
        assert_eq!(date_header(groups[1].0), "Tuesday, January 7");
    }
}
