use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::projection::Dashboard;

use super::stat_line;

pub fn draw_habits_view(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let h = &dashboard.habits;
    let habits = vec![
        stat_line("Most active day (overall)", &h.most_active_day),
        stat_line("Last 6 months", &h.weekend_share),
        Line::from(""),
        stat_line("Longest streak", &h.longest_streak),
        stat_line("Current streak", &h.current_streak),
        Line::from(""),
        stat_line("Weekday vs weekend", &h.weekday_vs_weekend),
        Line::from(""),
        stat_line("Active years", &h.active_years),
    ];
    f.render_widget(
        Paragraph::new(habits).block(Block::default().title("Coding Habits").borders(Borders::ALL)),
        chunks[0],
    );

    let hl = &dashboard.headline;
    let trend = vec![
        stat_line("This year", &hl.current_year),
        stat_line("Year over year", &hl.year_over_year),
        stat_line("Quarter over quarter", &hl.quarter_over_quarter),
        stat_line("Half over half", &hl.half_over_half),
        stat_line("Issues / pull requests", &format!("{} · {}", hl.closed, hl.open)),
    ];
    f.render_widget(
        Paragraph::new(trend).block(Block::default().title("Trend").borders(Borders::ALL)),
        chunks[1],
    );
}
