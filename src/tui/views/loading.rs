use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::loader::LoadState;
use crate::tui::centered_rect;
use crate::tui::draw::spinner_frame;

/// Persistent loading indicator. Stays up for as long as no snapshot is ready.
pub fn draw_loading_view(f: &mut Frame, area: Rect, load: &LoadState, tick: usize) {
    let popup = centered_rect(50, 30, area);
    f.render_widget(Clear, popup);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner_frame(tick), Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled("Loading...", Style::default().fg(Color::Gray)),
        ]),
    ];
    if let Some(reason) = load.reason() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("snapshot unavailable: {reason}"),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("q to quit", Style::default().fg(Color::DarkGray))));

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL)),
        popup,
    );
}
