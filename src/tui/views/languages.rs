use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::projection::Dashboard;
use crate::tui::draw::{language_style, share_bar};

use super::header_cell;

const BAR_WIDTH: usize = 30;

pub fn draw_languages_view(f: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let block = Block::default().title("Language Distribution").borders(Borders::ALL);

    if dashboard.languages.is_empty() {
        f.render_widget(Paragraph::new("No language data").block(block), area);
        return;
    }

    let rows: Vec<Row> = dashboard
        .languages
        .iter()
        .map(|row| {
            let style = language_style(row.color.as_deref());
            Row::new(vec![
                Cell::from(row.language.clone()).style(style),
                Cell::from(row.percentage.clone()).style(Style::default().fg(Color::White)),
                Cell::from(share_bar(row.share, BAR_WIDTH)).style(style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(BAR_WIDTH as u16 + 2),
        ],
    )
    .header(Row::new([
        header_cell("Language", Color::Yellow),
        header_cell("Share", Color::Yellow),
        header_cell("", Color::Yellow),
    ]))
    .block(block);
    f.render_widget(table, area);
}
