use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::projection::Dashboard;

use super::stat_line;

/// Render one column per contribution window.
pub fn draw_windows_view(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let count = dashboard.windows.len().max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area);

    for (window, column) in dashboard.windows.iter().zip(columns.iter()) {
        let lines = vec![
            stat_line("Total commits", &window.total_commits),
            stat_line("Weekend activity", &window.weekend_activity),
            Line::from(""),
            stat_line("Best day", &window.best_day),
            stat_line("On that day", &window.best_day_commits),
            Line::from(""),
            stat_line("Avg per day", &window.average_per_day),
            stat_line("Most active day", &window.most_active_day),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .block(Block::default().title(window.title.clone()).borders(Borders::ALL)),
            *column,
        );
    }
}
