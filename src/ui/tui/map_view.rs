use super::layout::{MapLayout, contains, inner, split_map};
use super::styles::{dim, focus_style};
use super::widgets::list_state;
use crate::app::MapSnapshot;
use crate::domain::{REGION_CATALOG, RegionId, RegionInfo};
use ratatui::{
    Frame,
    prelude::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders, List, ListItem,
        canvas::{Canvas, Map, MapResolution},
    },
};
use unicode_width::UnicodeWidthStr;

const X_BOUNDS: [f64; 2] = [-180.0, 180.0];
const Y_BOUNDS: [f64; 2] = [-90.0, 90.0];

fn marker_label(info: &RegionInfo, count: u32) -> String {
    format!("● {count} {}", info.name)
}

/// Terminal cell where a canvas label at (lon, lat) starts.
fn marker_cell(area: Rect, lon: f64, lat: f64) -> (u16, u16) {
    let width = X_BOUNDS[1] - X_BOUNDS[0];
    let height = Y_BOUNDS[1] - Y_BOUNDS[0];
    let x = ((lon - X_BOUNDS[0]) * f64::from(area.width.saturating_sub(1)) / width) as u16;
    let y = ((Y_BOUNDS[1] - lat) * f64::from(area.height.saturating_sub(1)) / height) as u16;
    (area.x + x, area.y + y)
}

pub(super) fn draw_map(f: &mut Frame, area: Rect, state: &MapSnapshot) {
    let MapLayout { map, list } = split_map(area);

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("World"))
        .marker(Marker::Braille)
        .x_bounds(X_BOUNDS)
        .y_bounds(Y_BOUNDS)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();
            for info in &REGION_CATALOG {
                let label = marker_label(info, state.counts.get(info.id));
                let style = if info.id == state.cursor {
                    focus_style(true)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                ctx.print(info.lon, info.lat, Line::styled(label, style));
            }
        });
    f.render_widget(canvas, map);

    let items: Vec<ListItem> = REGION_CATALOG
        .iter()
        .enumerate()
        .map(|(i, info)| {
            let count = state.counts.get(info.id);
            let style = if count == 0 { dim() } else { Style::default() };
            ListItem::new(Line::styled(
                format!("{}  {:<15} {:>4}", i + 1, info.name, count),
                style,
            ))
        })
        .collect();
    let regions = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Regions (1-6, Enter)"),
        )
        .highlight_style(focus_style(true))
        .highlight_symbol("> ");
    let mut st = list_state(state.cursor.index());
    f.render_stateful_widget(regions, list, &mut st);
}

/// Region under a click: either a map marker label or a side-list row.
pub(super) fn region_at(area: Rect, state: &MapSnapshot, column: u16, row: u16) -> Option<RegionId> {
    let MapLayout { map, list } = split_map(area);

    let list_inner = inner(list);
    if contains(list_inner, column, row) {
        let idx = usize::from(row - list_inner.y);
        return REGION_CATALOG.get(idx).map(|info| info.id);
    }

    let map_inner = inner(map);
    if !contains(map_inner, column, row) {
        return None;
    }
    REGION_CATALOG.iter().find_map(|info| {
        let (x, y) = marker_cell(map_inner, info.lon, info.lat);
        let width = marker_label(info, state.counts.get(info.id)).width() as u16;
        (row == y && column >= x && column < x.saturating_add(width)).then_some(info.id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RegionCount, RegionCounts};
    use ratatui::{Terminal, backend::TestBackend};

    fn snapshot(counts: &[RegionCount]) -> MapSnapshot {
        let mut c = RegionCounts::default();
        c.apply(counts);
        MapSnapshot {
            counts: c,
            cursor: RegionId::NorthAmerica,
        }
    }

    fn rendered_rows(state: &MapSnapshot) -> Vec<String> {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| draw_map(f, f.area(), state))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    /// Count shown in the side-list row for `name`.
    fn list_count(rows: &[String], name: &str) -> Option<String> {
        rows.iter().find_map(|row| {
            let segments: Vec<&str> = row.split('│').collect();
            let list = segments.get(segments.len().checked_sub(2)?)?;
            list.contains(name)
                .then(|| list.split_whitespace().last().map(str::to_owned))
                .flatten()
        })
    }

    #[test]
    fn side_list_shows_counts_with_zero_default() {
        let state = snapshot(&[RegionCount {
            region: RegionId::Europe,
            channel_count: 12,
        }]);
        let rows = rendered_rows(&state);

        assert_eq!(list_count(&rows, "Europe").as_deref(), Some("12"));
        for name in ["North America", "Asia", "Oceania", "Africa", "South America"] {
            assert_eq!(list_count(&rows, name).as_deref(), Some("0"), "{name}");
        }
    }

    #[test]
    fn map_marker_carries_count_and_name() {
        let state = snapshot(&[RegionCount {
            region: RegionId::Europe,
            channel_count: 12,
        }]);
        let content = rendered_rows(&state).concat();
        assert!(content.contains("12 Europe"));
        assert!(content.contains("0 Asia"));
    }

    #[test]
    fn clicks_resolve_to_regions() {
        let area = Rect::new(0, 0, 120, 30);
        let state = snapshot(&[]);
        let MapLayout { map, list } = split_map(area);

        // Third row of the side list is Asia.
        let list_inner = inner(list);
        assert_eq!(
            region_at(area, &state, list_inner.x + 2, list_inner.y + 2),
            Some(RegionId::Asia)
        );

        let europe = &REGION_CATALOG[RegionId::Europe.index()];
        let (x, y) = marker_cell(inner(map), europe.lon, europe.lat);
        assert_eq!(region_at(area, &state, x + 1, y), Some(RegionId::Europe));
        assert_eq!(region_at(area, &state, 0, 0), None);
    }
}
