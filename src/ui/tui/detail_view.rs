use super::layout::inner;
use super::styles::{badge_style, dim, focus_style};
use crate::app::DetailSnapshot;
use crate::domain::{ScheduleEntry, region_info};
use crate::ui::format::{date_header, fmt_duration, fmt_time_12h, group_by_date};
use chrono::Local;
use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub(super) const BACK_LABEL: &str = "[Back]";

pub(super) fn draw_detail(f: &mut Frame, area: Rect, state: &DetailSnapshot) {
    let region = region_info(state.region);
    let title = match &state.channel {
        Some(c) => format!("{} {} ({})", c.number, c.name, region.name),
        None => format!("Schedule ({})", region.name),
    };

    let mut lines = vec![Line::styled(BACK_LABEL, focus_style(true))];
    if let Some(c) = &state.channel {
        let mut meta = Vec::new();
        if let Some(lang) = &c.language {
            meta.push(lang.clone());
        }
        if let Some(tz) = &c.timezone {
            meta.push(tz.clone());
        }
        if !meta.is_empty() {
            lines.push(Line::styled(meta.join(" · "), dim()));
        }
        if !c.description.is_empty() {
            lines.push(Line::raw(c.description.clone()));
        }
    }
    lines.push(Line::raw(""));

    if state.entries.is_empty() {
        lines.push(Line::styled("No scheduled programs", dim()));
    } else {
        let visible = &state.entries[state.scroll.min(state.entries.len())..];
        for (date, entries) in group_by_date(visible, &Local) {
            lines.push(Line::styled(
                date_header(date),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
            for entry in entries {
                lines.extend(entry_lines(entry));
            }
            lines.push(Line::raw(""));
        }
    }

    let body = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(body, area);
}

fn entry_lines(entry: &ScheduleEntry) -> Vec<Line<'static>> {
    let p = &entry.program;
    let mut out = vec![Line::from(vec![
        Span::styled(
            format!("{:>8}  ", fmt_time_12h(Some(entry.start_time))),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{:<8} ", fmt_duration(p.duration_minutes)), dim()),
        Span::styled(format!(" {} ", p.kind.badge()), badge_style(p.kind)),
        Span::raw(" "),
        Span::raw(p.title.clone()),
    ])];
    if !p.description.is_empty() {
        out.push(Line::styled(format!("          {}", p.description), dim()));
    }

    let mut extras = Vec::new();
    if let Some(genre) = &p.genre {
        extras.push(genre.clone());
    }
    if let Some(rating) = &p.rating {
        extras.push(format!("Rated {rating}"));
    }
    if let Some(se) = p.season_episode() {
        extras.push(se);
    }
    if !extras.is_empty() {
        out.push(Line::styled(format!("          {}", extras.join(" · ")), dim()));
    }
    out
}

/// True when a click lands on the back label.
pub(super) fn back_hit(area: Rect, column: u16, row: u16) -> bool {
    let body = inner(area);
    row == body.y && column >= body.x && column < body.x + BACK_LABEL.width() as u16
}
