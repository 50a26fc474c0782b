use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::{Frame, Terminal};

use crate::config::Config;
use crate::error::Result;
use crate::loader::{spawn_load, LoadMode};
use crate::model::GitHubData;

use super::events::{handle_key_events, handle_mouse_event};
use super::state::{App, ViewMode, TAB_TITLES};
use super::views::{
    draw_habits_view, draw_help_overlay, draw_languages_view, draw_loading_view, draw_overview,
    draw_repos_view, draw_windows_view,
};

const TICK: Duration = Duration::from_millis(200);
const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn run(config: &Config) -> Result<()> {
    let rx = spawn_load(config.source.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let mut app = App::new();
    let result = event_loop(&mut terminal, &mut app, &rx, config.mode);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &Receiver<Result<Arc<GitHubData>>>,
    mode: LoadMode,
) -> Result<()> {
    loop {
        poll_load(app, rx, mode)?;
        terminal.draw(|f| draw_frame(f, app))?;

        if poll(TICK)? {
            match read()? {
                Event::Key(key_event) => {
                    if handle_key_events(key_event, app) {
                        break;
                    }
                }
                Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
                _ => {}
            }
        }

        app.state.tick = app.state.tick.wrapping_add(1);
        if let Some((_, at)) = &app.state.status_message {
            if at.elapsed() > STATUS_TTL {
                app.state.status_message = None;
            }
        }
    }
    Ok(())
}

/// Pick up the one-shot load result if it has arrived. Strict mode aborts on failure,
/// lenient mode keeps the loading screen up with the reason attached. Nothing is
/// logged here: the terminal belongs to the alternate screen.
pub fn poll_load(
    app: &mut App,
    rx: &Receiver<Result<Arc<GitHubData>>>,
    mode: LoadMode,
) -> Result<()> {
    if app.load.is_ready() {
        return Ok(());
    }
    match rx.try_recv() {
        Ok(Ok(data)) => app.on_loaded(data),
        Ok(Err(e)) => match mode {
            LoadMode::Strict => return Err(e),
            LoadMode::Lenient => app.on_failed(e.to_string()),
        },
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            if app.load.reason().is_none() {
                app.on_failed("loader stopped without a result");
            }
        }
    }
    Ok(())
}

pub fn draw_frame(f: &mut Frame, app: &App) {
    let size = f.size();

    let Some(dashboard) = &app.dashboard else {
        draw_loading_view(f, size, &app.load, app.state.tick);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    let tabs = Tabs::new(TAB_TITLES.to_vec())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("ghstats · {}", dashboard.header.name)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.state.tab_index);
    f.render_widget(tabs, chunks[0]);

    match app.state.view_mode() {
        ViewMode::Overview => draw_overview(f, chunks[1], dashboard),
        ViewMode::Habits => draw_habits_view(f, chunks[1], dashboard),
        ViewMode::Windows => draw_windows_view(f, chunks[1], dashboard),
        ViewMode::Repos => draw_repos_view(f, chunks[1], app),
        ViewMode::Languages => draw_languages_view(f, chunks[1], dashboard),
    }

    let status = match &app.state.status_message {
        Some((message, _)) => Span::styled(message.clone(), Style::default().fg(Color::Green)),
        None if app.state.search_mode => Span::styled(
            format!("/{}", app.state.search_query),
            Style::default().fg(Color::Yellow),
        ),
        None => Span::styled(
            "Tab switch view · h help · q quit",
            Style::default().fg(Color::DarkGray),
        ),
    };
    f.render_widget(Paragraph::new(Line::from(status)), chunks[2]);

    if app.state.show_help {
        draw_help_overlay(f, size);
    }
}
