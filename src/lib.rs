pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod loader;
pub mod logging;
pub mod model;
pub mod projection;
pub mod repos;
pub mod show;
pub mod tui;
pub mod validate;

pub use error::{GhstatsError, Result};
pub use loader::{load, parse_snapshot, LoadMode, LoadState, SnapshotSource};
pub use model::GitHubData;
pub use projection::{project, Dashboard};
