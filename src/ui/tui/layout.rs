use ratatui::layout::{Constraint, Direction, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 4;
const REGION_LIST_WIDTH: u16 = 32;

pub(super) struct CanvasLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub(super) struct MapLayout {
    pub map: Rect,
    pub list: Rect,
}

pub(super) fn split_canvas(canvas: Rect) -> CanvasLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(canvas);

    CanvasLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

pub(super) fn split_map(body: Rect) -> MapLayout {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(REGION_LIST_WIDTH)])
        .split(body);

    MapLayout {
        map: cols[0],
        list: cols[1],
    }
}

/// Area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && column < area.x.saturating_add(area.width)
        && row < area.y.saturating_add(area.height)
}
