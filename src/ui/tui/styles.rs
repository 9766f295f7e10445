use crate::domain::ProgramType;
use ratatui::style::{Color, Modifier, Style};

pub(super) fn focus_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

pub(super) fn program_type_color(kind: ProgramType) -> Color {
    match kind {
        ProgramType::News => Color::Red,
        ProgramType::Sports => Color::Green,
        ProgramType::Movie => Color::Magenta,
        ProgramType::Series => Color::Blue,
        ProgramType::Documentary => Color::Yellow,
        ProgramType::Entertainment => Color::LightMagenta,
        ProgramType::Music => Color::Cyan,
        ProgramType::Kids => Color::LightGreen,
    }
}

pub(super) fn badge_style(kind: ProgramType) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(program_type_color(kind))
        .add_modifier(Modifier::BOLD)
}

/// Progress fill colour: red from 80%, yellow from 60%, green below.
pub(super) fn progress_color(percentage: f64) -> Color {
    if percentage >= 80.0 {
        Color::Red
    } else if percentage >= 60.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

pub(super) fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}
