//! Plain-text output for the non-interactive subcommands.

use crate::domain::{LiveGuideRow, Program, REGION_CATALOG, RegionCount, RegionCounts, ScheduleEntry};
use crate::ui::format::{date_header, fmt_duration, fmt_time_12h, fmt_time_range, group_by_date};
use chrono::Local;
use std::fmt::Write;

pub fn regions(counts: &[RegionCount]) -> String {
    let mut table = RegionCounts::default();
    table.apply(counts);

    let mut out = String::new();
    for info in &REGION_CATALOG {
        let _ = writeln!(out, "{:<15} {:>4}", info.name, table.get(info.id));
    }
    let _ = writeln!(out, "{:<15} {:>4}", "Total", table.total());
    out
}

pub fn live_guide(rows: &[LiveGuideRow]) -> String {
    if rows.is_empty() {
        return "No channels in this region\n".to_owned();
    }
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "{:>3}  {}", row.channel.number, row.channel.name);
        match &row.current {
            Some(now) => {
                let _ = writeln!(
                    out,
                    "     [{}] {}  {}  {:.0}%  {} min left",
                    now.program.kind.badge(),
                    now.program.title,
                    fmt_time_range(now.start_time, now.end_time),
                    now.progress_percentage,
                    now.time_remaining_minutes,
                );
            }
            None => {
                let _ = writeln!(out, "     No program information");
            }
        }
        if let Some(next) = &row.next {
            let _ = writeln!(
                out,
                "     Next: {} at {}",
                next.program.title,
                fmt_time_12h(next.start_time)
            );
        }
    }
    out
}

pub fn schedule(entries: &[ScheduleEntry]) -> String {
    if entries.is_empty() {
        return "No scheduled programs\n".to_owned();
    }
    let mut out = String::new();
    for (date, items) in group_by_date(entries, &Local) {
        let _ = writeln!(out, "{}", date_header(date));
        for e in items {
            let _ = writeln!(
                out,
                "  {:>8}  {:<8} [{}] {}",
                fmt_time_12h(Some(e.start_time)),
                fmt_duration(e.program.duration_minutes),
                e.program.kind.badge(),
                e.program.title,
            );
        }
    }
    out
}

pub fn programs(items: &[Program]) -> String {
    let mut out = String::new();
    for p in items {
        let mut line = format!(
            "[{}] {} ({})",
            p.kind.badge(),
            p.title,
            fmt_duration(p.duration_minutes)
        );
        if let Some(se) = p.season_episode() {
            let _ = write!(line, " {se}");
        }
        if let Some(year) = p.release_year {
            let _ = write!(line, " {year}");
        }
        let _ = writeln!(out, "{line}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Channel, ChannelId, ProgramType, RegionId};

    #[test]
    fn regions_table_defaults_missing_to_zero() {
        let text = regions(&[RegionCount {
            region: RegionId::Europe,
            channel_count: 12,
        }]);
        assert!(text.contains("Europe            12"));
        assert!(text.contains("Asia               0"));
        assert!(text.contains("Total             12"));
    }

    #[test]
    fn guide_placeholder_for_empty_slot() {
        let rows = vec![LiveGuideRow {
            channel: Channel {
                id: ChannelId::new("c1"),
                number: 5,
                name: "Five".to_owned(),
                description: String::new(),
                region: RegionId::Africa,
                language: None,
                timezone: None,
                logo_url: None,
            },
            current: None,
            next: None,
        }];
        let text = live_guide(&rows);
        assert!(text.contains("  5  Five"));
        assert!(text.contains("No program information"));
    }

    #[test]
    fn programs_list_shows_badge_and_episode() {
        let p = Program {
            id: "p1".to_owned(),
            title: "Deep Sea".to_owned(),
            description: String::new(),
            kind: ProgramType::Documentary,
            duration_minutes: 50,
            genre: None,
            rating: None,
            season_number: Some(1),
            episode_number: Some(3),
            release_year: None,
            thumbnail_url: None,
        };
        assert_eq!(programs(&[p]), "[DOC] Deep Sea (50 min) S1E3\n");
    }
}
