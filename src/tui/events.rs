use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

use super::input::{
    apply_search_filter, copy_to_clipboard, ensure_selection_in_filtered, reset_filter,
    selected_card,
};
use super::state::{App, ViewMode};

const PAGE: usize = 10;

/// Handle a keyboard event, returning `true` if the loop should exit.
pub fn handle_key_events(key_event: KeyEvent, app: &mut App) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    // Only quitting is possible until the snapshot arrives.
    if app.dashboard.is_none() {
        return matches!(key_event.code, KeyCode::Char('q') | KeyCode::Esc);
    }

    if app.state.search_mode {
        handle_search_input(key_event.code, app);
        return false;
    }

    match key_event.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('h') | KeyCode::F(1) => app.state.show_help = !app.state.show_help,
        KeyCode::Esc => app.state.show_help = false,
        KeyCode::Tab => app.state.next_tab(),
        KeyCode::BackTab => app.state.previous_tab(),
        KeyCode::Char(c @ '1'..='5') => {
            app.state.tab_index = (c as usize) - ('1' as usize);
        }
        _ if app.state.view_mode() == ViewMode::Repos => handle_repo_keys(key_event.code, app),
        _ => {}
    }

    false
}

fn handle_repo_keys(code: KeyCode, app: &mut App) {
    let len = app.state.filtered_indices.len();
    match code {
        KeyCode::Char('/') => {
            app.state.search_mode = true;
            app.state.search_query.clear();
        }
        KeyCode::Char('l') => {
            app.state.next_repo_list();
            reset_filter(app);
        }
        KeyCode::Char('c') => copy_selected_url(app),
        KeyCode::Up | KeyCode::Char('k') => {
            app.state.selected = app.state.selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.state.selected + 1 < len {
                app.state.selected += 1;
            }
        }
        KeyCode::Home | KeyCode::Char('g') => app.state.selected = 0,
        KeyCode::End | KeyCode::Char('G') => app.state.selected = len.saturating_sub(1),
        KeyCode::PageUp => app.state.selected = app.state.selected.saturating_sub(PAGE),
        KeyCode::PageDown => {
            app.state.selected = std::cmp::min(app.state.selected + PAGE, len.saturating_sub(1));
        }
        _ => {}
    }
}

/// Handle repository search keystrokes, applying the filter on every change.
pub fn handle_search_input(code: KeyCode, app: &mut App) {
    match code {
        KeyCode::Esc => {
            app.state.search_mode = false;
            reset_filter(app);
        }
        KeyCode::Enter => {
            app.state.search_mode = false;
            apply_search_filter(app);
        }
        KeyCode::Backspace => {
            app.state.search_query.pop();
            apply_search_filter(app);
        }
        KeyCode::Char(c) => {
            app.state.search_query.push(c);
            apply_search_filter(app);
        }
        _ => {}
    }
}

fn copy_selected_url(app: &mut App) {
    let Some(card) = selected_card(app) else {
        return;
    };
    let (url, slug) = (card.url.clone(), card.slug.clone());
    match copy_to_clipboard(&url) {
        Ok(()) => app.state.set_status(format!("Copied: {slug}")),
        Err(err) => app.state.set_status(format!("Clipboard error: {err}")),
    }
}

/// Mouse wheel moves the repository selection.
pub fn handle_mouse_event(mouse_event: MouseEvent, app: &mut App) {
    if app.state.view_mode() != ViewMode::Repos {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => {
            app.state.selected = app.state.selected.saturating_sub(1);
        }
        MouseEventKind::ScrollDown => {
            app.state.selected += 1;
            ensure_selection_in_filtered(app);
        }
        _ => {}
    }
}
