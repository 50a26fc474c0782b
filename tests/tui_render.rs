use std::path::PathBuf;
use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ghstats::cli::RepoList;
use ghstats::tui::{draw_frame, handle_key_events, poll_load, selected_card, App, ViewMode};
use ghstats::{load, GhstatsError, LoadMode, SnapshotSource};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn ada_app() -> App {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("ada.json");
    App::ready(load(&SnapshotSource::File(path)).unwrap())
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| draw_frame(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_key_events(KeyEvent::new(code, KeyModifiers::NONE), app)
}

#[test]
fn pending_app_draws_loading_indicator() {
    let mut app = App::new();
    app.on_failed("snapshot missing");
    let screen = render(&app);

    assert!(screen.contains("Loading..."));
    assert!(screen.contains("snapshot missing"));
    assert!(!screen.contains("Overview"));
}

#[test]
fn only_quit_works_before_load() {
    let mut app = App::new();
    assert!(!press(&mut app, KeyCode::Tab));
    assert_eq!(app.state.tab_index, 0);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn every_tab_renders() {
    let mut app = ada_app();
    let expectations = [
        (ViewMode::Overview, "1,234 ⭐"),
        (ViewMode::Habits, "66.7% / 33.3%"),
        (ViewMode::Windows, "Last 6 months"),
        (ViewMode::Repos, "ada/engine"),
        (ViewMode::Languages, "Rust"),
    ];

    for (i, (mode, needle)) in expectations.into_iter().enumerate() {
        app.state.tab_index = i;
        assert_eq!(app.state.view_mode(), mode);
        let screen = render(&app);
        assert!(screen.contains("Ada Lovelace"), "tab {i}");
        assert!(screen.contains(needle), "tab {i} missing {needle}");
    }
}

#[test]
fn tab_keys_cycle_views() {
    let mut app = ada_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state.view_mode(), ViewMode::Habits);
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.state.view_mode(), ViewMode::Languages);
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.state.view_mode(), ViewMode::Repos);
}

#[test]
fn repo_navigation_and_search() {
    let mut app = ada_app();
    press(&mut app, KeyCode::Char('4'));

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(selected_card(&app).unwrap().slug, "ada/notes");
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.state.selected, 1);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(selected_card(&app).unwrap().slug, "ada/engine");

    press(&mut app, KeyCode::Char('/'));
    for c in "ada/n".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    assert!(!app.state.search_mode);
    assert_eq!(app.state.filtered_indices, vec![1]);
    assert_eq!(selected_card(&app).unwrap().slug, "ada/notes");

    // Typing 'q' while searching edits the query instead of quitting.
    press(&mut app, KeyCode::Char('/'));
    assert!(!press(&mut app, KeyCode::Char('q')));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state.filtered_indices, vec![0, 1]);
}

#[test]
fn list_key_switches_repository_list() {
    let mut app = ada_app();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('l'));

    assert_eq!(app.state.repo_list, RepoList::Maintained);
    assert_eq!(app.state.filtered_indices, vec![0]);
    assert!(render(&app).contains("Actively maintained"));
}

#[test]
fn help_overlay_toggles() {
    let mut app = ada_app();
    press(&mut app, KeyCode::Char('h'));
    assert!(app.state.show_help);
    let screen = render(&app);
    assert!(screen.contains("Help"));
    assert!(screen.contains("Scroll with wheel"));
    press(&mut app, KeyCode::Esc);
    assert!(!app.state.show_help);
}

#[test]
fn poll_load_resolves_once() {
    let (tx, rx) = mpsc::channel();
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("ada.json");
    tx.send(load(&SnapshotSource::File(path))).unwrap();

    let mut app = App::new();
    poll_load(&mut app, &rx, LoadMode::Lenient).unwrap();
    assert!(app.load.is_ready());
    assert!(app.dashboard.is_some());

    drop(tx);
    poll_load(&mut app, &rx, LoadMode::Lenient).unwrap();
    assert!(app.load.is_ready());
}

#[test]
fn poll_load_failure_depends_on_mode() {
    let (tx, rx) = mpsc::channel();
    tx.send(Err(GhstatsError::EmptySnapshot)).unwrap();
    let mut app = App::new();
    poll_load(&mut app, &rx, LoadMode::Lenient).unwrap();
    assert!(!app.load.is_ready());
    assert_eq!(app.load.reason(), Some("Snapshot is empty"));
    // The reason reaches the user through the loading panel.
    assert!(render(&app).contains("snapshot unavailable: Snapshot is empty"));

    let (tx, rx) = mpsc::channel();
    tx.send(Err(GhstatsError::EmptySnapshot)).unwrap();
    let mut app = App::new();
    assert!(poll_load(&mut app, &rx, LoadMode::Strict).is_err());
}
