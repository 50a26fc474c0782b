use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::cli::RepoList;
use crate::tui::draw::language_style;
use crate::tui::input::{current_cards, selected_card};
use crate::tui::layout::visible_range;
use crate::tui::state::App;

use super::overview::repo_card_lines;
use super::{header_cell, truncate};

/// Render the repository table for the active list plus a detail panel for the selection.
pub fn draw_repos_view(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let cards = current_cards(app);
    let state = &app.state;
    let height = chunks[0].height.saturating_sub(3) as usize;
    let range = visible_range(state.filtered_indices.len(), state.selected, height);

    let rows: Vec<Row> = state.filtered_indices[range.clone()]
        .iter()
        .enumerate()
        .filter_map(|(offset, &i)| cards.get(i).map(|card| (range.start + offset, i, card)))
        .map(|(position, i, card)| {
            let is_selected = position == state.selected;
            let rank = card.rank.unwrap_or(i + 1);
            let slug_style = if is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let slug = if is_selected {
                format!("{} ◄", truncate(&card.slug, 34))
            } else {
                truncate(&card.slug, 36)
            };
            Row::new(vec![
                Cell::from(format!("#{rank}")).style(Style::default().fg(Color::Blue)),
                Cell::from(slug).style(slug_style),
                Cell::from(card.language.clone()).style(language_style(card.language_color.as_deref())),
                Cell::from(card.stars.clone()).style(Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();

    let list_name = match state.repo_list {
        RepoList::Top => "Active repos",
        RepoList::Maintained => "Actively maintained",
        RepoList::All => "All repositories",
    };
    let title = if state.search_mode || !state.search_query.is_empty() {
        format!("{list_name} (filter: {})", state.search_query)
    } else {
        format!("{list_name} ({})", state.filtered_indices.len())
    };

    let mut table_state = TableState::default();
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Percentage(55),
            Constraint::Length(14),
            Constraint::Length(10),
        ],
    )
    .header(Row::new([
        header_cell("#", Color::Yellow),
        header_cell("Repository", Color::Yellow),
        header_cell("Language", Color::Green),
        header_cell("Stars", Color::Cyan),
    ]))
    .block(Block::default().title(title).borders(Borders::ALL));
    f.render_stateful_widget(table, chunks[0], &mut table_state);

    match selected_card(app) {
        Some(card) => f.render_widget(
            Paragraph::new(repo_card_lines(card))
                .wrap(Wrap { trim: true })
                .block(Block::default().title("Details").borders(Borders::ALL)),
            chunks[1],
        ),
        None => f.render_widget(
            Paragraph::new("No repository selected")
                .block(Block::default().title("Details").borders(Borders::ALL)),
            chunks[1],
        ),
    }
}
