use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::centered_rect;

/// Draw the modal help overlay listing views and shortcuts.
pub fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let block = Block::default().title("Help").borders(Borders::ALL);
    let help_area = centered_rect(70, 80, area);

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "ghstats - Help",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Views:",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Tab         Next view (Overview/Habits/Windows/Repos/Languages)"),
        Line::from("  Shift+Tab   Previous view"),
        Line::from("  1-5         Jump to a view"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Repos:",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  j/k or ↑/↓  Move selection"),
        Line::from("  g/G         Jump to first/last"),
        Line::from("  PgUp/PgDn   Move by 10 items"),
        Line::from("  l           Cycle list (top/maintained/all)"),
        Line::from("  /           Filter by name, language or description"),
        Line::from("  c           Copy repository URL"),
        Line::from("  Mouse       Scroll with wheel"),
        Line::from("  Esc         Cancel filter / close help"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "General:",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from("  h, F1       Toggle this help"),
        Line::from("  q           Quit application"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press 'h' or 'Esc' to close this help",
            Style::default().fg(Color::Gray),
        )]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(help_paragraph, help_area);
}
