use crate::projection::RepoCard;
use crate::repos::select;

use super::state::App;

/// Cards of the repository list currently shown on the Repos tab.
pub fn current_cards(app: &App) -> &[RepoCard] {
    match &app.dashboard {
        Some(dashboard) => select(dashboard, app.state.repo_list),
        None => &[],
    }
}

pub fn reset_filter(app: &mut App) {
    app.state.search_query.clear();
    app.state.filtered_indices = (0..current_cards(app).len()).collect();
    app.state.selected = 0;
}

pub fn apply_search_filter(app: &mut App) {
    let query = app.state.search_query.to_lowercase();
    let filtered: Vec<usize> = current_cards(app)
        .iter()
        .enumerate()
        .filter(|(_, card)| {
            query.is_empty()
                || card.slug.to_lowercase().contains(&query)
                || card.language.to_lowercase().contains(&query)
                || card.description.to_lowercase().contains(&query)
        })
        .map(|(i, _)| i)
        .collect();
    app.state.filtered_indices = filtered;
    ensure_selection_in_filtered(app);
}

/// `selected` indexes into `filtered_indices`; keep it in range.
pub fn ensure_selection_in_filtered(app: &mut App) {
    let len = app.state.filtered_indices.len();
    if len == 0 {
        app.state.selected = 0;
    } else if app.state.selected >= len {
        app.state.selected = len - 1;
    }
}

pub fn selected_card(app: &App) -> Option<&RepoCard> {
    let index = *app.state.filtered_indices.get(app.state.selected)?;
    current_cards(app).get(index)
}

pub fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text.to_string()).map_err(|e| e.to_string())
}
