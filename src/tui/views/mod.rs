use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Cell;

mod habits;
mod help;
mod languages;
mod loading;
mod overview;
mod repos;
mod windows;

pub use habits::draw_habits_view;
pub use help::draw_help_overlay;
pub use languages::draw_languages_view;
pub use loading::draw_loading_view;
pub use overview::draw_overview;
pub use repos::draw_repos_view;
pub use windows::draw_windows_view;

use super::draw::{label_style, value_style};

/// Convenience helper to build a styled table header cell.
pub(crate) fn header_cell(text: &str, color: Color) -> Cell<'static> {
    Cell::from(text.to_string()).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Truncate a string to `max` chars with an ellipsis when necessary.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    } else {
        s.to_string()
    }
}

/// A `label  value` line used by the card panels.
pub(crate) fn stat_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style()),
        Span::styled(value.to_string(), value_style()),
    ])
}
