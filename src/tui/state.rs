use std::sync::Arc;
use std::time::Instant;

use crate::cli::RepoList;
use crate::loader::LoadState;
use crate::model::GitHubData;
use crate::projection::{project, Dashboard};

pub const TAB_TITLES: [&str; 5] = ["Overview", "Habits", "Windows", "Repos", "Languages"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Overview,
    Habits,
    Windows,
    Repos,
    Languages,
}

impl ViewMode {
    pub fn from_tab(index: usize) -> Self {
        match index {
            1 => ViewMode::Habits,
            2 => ViewMode::Windows,
            3 => ViewMode::Repos,
            4 => ViewMode::Languages,
            _ => ViewMode::Overview,
        }
    }
}

pub struct TuiState {
    pub tab_index: usize,
    pub show_help: bool,
    pub repo_list: RepoList,
    pub selected: usize,
    pub search_query: String,
    pub search_mode: bool,
    pub filtered_indices: Vec<usize>,
    pub status_message: Option<(String, Instant)>,
    pub tick: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            tab_index: 0,
            show_help: false,
            repo_list: RepoList::Top,
            selected: 0,
            search_query: String::new(),
            search_mode: false,
            filtered_indices: Vec::new(),
            status_message: None,
            tick: 0,
        }
    }
}

impl TuiState {
    pub fn view_mode(&self) -> ViewMode {
        ViewMode::from_tab(self.tab_index)
    }

    pub fn next_tab(&mut self) {
        self.tab_index = (self.tab_index + 1) % TAB_TITLES.len();
    }

    pub fn previous_tab(&mut self) {
        self.tab_index = if self.tab_index == 0 {
            TAB_TITLES.len() - 1
        } else {
            self.tab_index - 1
        };
    }

    pub fn next_repo_list(&mut self) {
        self.repo_list = match self.repo_list {
            RepoList::Top => RepoList::Maintained,
            RepoList::Maintained => RepoList::All,
            RepoList::All => RepoList::Top,
        };
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }
}

/// Load lifecycle plus the projection computed once when the snapshot arrives.
pub struct App {
    pub load: LoadState,
    pub dashboard: Option<Dashboard>,
    pub state: TuiState,
}

impl App {
    pub fn new() -> Self {
        Self {
            load: LoadState::default(),
            dashboard: None,
            state: TuiState::default(),
        }
    }

    pub fn ready(data: Arc<GitHubData>) -> Self {
        let mut app = Self::new();
        app.on_loaded(data);
        app
    }

    pub fn on_loaded(&mut self, data: Arc<GitHubData>) {
        if !self.load.resolve(Arc::clone(&data)) {
            return;
        }
        self.dashboard = Some(project(&data));
        super::input::reset_filter(self);
    }

    pub fn on_failed(&mut self, reason: impl Into<String>) {
        self.load.fail(reason);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
