use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info, warn};

use crate::error::{GhstatsError, Result};
use crate::model::GitHubData;
use crate::validate::{has_errors, validate, Violation};

/// Snapshot compiled into the binary, used when no other source is given.
pub const BUNDLED_SNAPSHOT: &str = include_str!("../data/github-data.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    Bundled,
    File(PathBuf),
    Stdin,
}

impl SnapshotSource {
    /// `-` selects stdin, a missing argument selects the bundled snapshot.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(str::trim) {
            None | Some("") => SnapshotSource::Bundled,
            Some("-") => SnapshotSource::Stdin,
            Some(path) => SnapshotSource::File(PathBuf::from(path)),
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            SnapshotSource::Bundled => Ok(BUNDLED_SNAPSHOT.to_string()),
            SnapshotSource::File(path) => Ok(std::fs::read_to_string(path)?),
            SnapshotSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

impl fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotSource::Bundled => write!(f, "bundled snapshot"),
            SnapshotSource::File(path) => write!(f, "{}", path.display()),
            SnapshotSource::Stdin => write!(f, "stdin"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Errors propagate to the caller.
    Strict,
    /// Errors are logged and the state stays pending.
    Lenient,
}

/// Two-state load lifecycle. `Ready` is terminal.
#[derive(Debug, Clone)]
pub enum LoadState {
    Pending { reason: Option<String> },
    Ready(Arc<GitHubData>),
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState::Pending { reason: None }
    }
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn data(&self) -> Option<&Arc<GitHubData>> {
        match self {
            LoadState::Ready(data) => Some(data),
            LoadState::Pending { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            LoadState::Pending { reason } => reason.as_deref(),
            LoadState::Ready(_) => None,
        }
    }

    /// Move to `Ready`. Returns false and leaves the state alone if it was already ready.
    pub fn resolve(&mut self, data: Arc<GitHubData>) -> bool {
        if self.is_ready() {
            debug!("snapshot already loaded, ignoring second resolve");
            return false;
        }
        *self = LoadState::Ready(data);
        true
    }

    /// Record why the load failed. A ready state is never downgraded.
    pub fn fail(&mut self, reason: impl Into<String>) {
        if let LoadState::Pending { reason: slot } = self {
            *slot = Some(reason.into());
        }
    }
}

pub fn parse_snapshot(payload: &str) -> Result<GitHubData> {
    if payload.trim().is_empty() {
        return Err(GhstatsError::EmptySnapshot);
    }
    Ok(serde_json::from_str(payload)?)
}

/// Parse and validate in one step; error-severity violations reject the snapshot.
pub fn accept_snapshot(payload: &str) -> Result<(GitHubData, Vec<Violation>)> {
    let data = parse_snapshot(payload)?;
    let violations = validate(&data);
    if has_errors(&violations) {
        let errors: Vec<Violation> = violations.into_iter().filter(Violation::is_error).collect();
        return Err(GhstatsError::Schema(errors));
    }
    for v in &violations {
        warn!(path = %v.path, "{}", v.message);
    }
    Ok((data, violations))
}

pub fn load(source: &SnapshotSource) -> Result<Arc<GitHubData>> {
    let payload = source.read()?;
    let (data, _) = accept_snapshot(&payload)?;
    info!(%source, username = %data.profile.username, "snapshot loaded");
    Ok(Arc::new(data))
}

/// Load once, showing a spinner on stderr while reading.
pub fn load_with_progress(source: &SnapshotSource, show_progress: bool) -> Result<Arc<GitHubData>> {
    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Loading...");
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = load(source);
    pb.finish_and_clear();
    result
}

/// Resolve a load into a lifecycle state according to `mode`.
pub fn load_state(source: &SnapshotSource, mode: LoadMode, show_progress: bool) -> Result<LoadState> {
    let mut state = LoadState::default();
    match load_with_progress(source, show_progress) {
        Ok(data) => {
            state.resolve(data);
        }
        Err(e) => match mode {
            LoadMode::Strict => return Err(e),
            LoadMode::Lenient => {
                error!(%source, "snapshot unavailable: {e}");
                state.fail(e.to_string());
            }
        },
    }
    Ok(state)
}

/// Fire-once background load. The receiver yields exactly one message.
pub fn spawn_load(source: SnapshotSource) -> Receiver<Result<Arc<GitHubData>>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = load(&source);
        if tx.send(result).is_err() {
            debug!("load finished after the receiver went away");
        }
    });
    rx
}
