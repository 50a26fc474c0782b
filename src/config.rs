use std::env;

use crate::cli::CommonArgs;
use crate::error::{GhstatsError, Result};
use crate::loader::{LoadMode, SnapshotSource};

pub const DATA_ENV: &str = "GHSTATS_DATA";
pub const STRICT_ENV: &str = "GHSTATS_STRICT";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SnapshotSource,
    pub mode: LoadMode,
    pub color: bool,
    pub show_progress: bool,
}

impl Config {
    /// Command-line arguments win, then the process environment.
    pub fn from_args(common: &CommonArgs) -> Result<Self> {
        Self::resolve(common, |key| env::var(key).ok())
    }

    pub fn resolve(common: &CommonArgs, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data = common.data.clone().or_else(|| lookup(DATA_ENV));
        let source = SnapshotSource::from_arg(data.as_deref());

        let strict = if common.strict {
            true
        } else {
            match lookup(STRICT_ENV) {
                Some(v) => parse_bool(STRICT_ENV, &v)?,
                None => false,
            }
        };

        let color = !common.no_color && lookup(NO_COLOR_ENV).map_or(true, |v| v.is_empty());

        Ok(Self {
            source,
            mode: if strict { LoadMode::Strict } else { LoadMode::Lenient },
            color,
            show_progress: !common.quiet,
        })
    }

    /// Only ever turns colors off; terminal detection decides otherwise.
    pub fn apply_color(&self) {
        if !self.color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(GhstatsError::Config(format!("{key} must be a boolean, got '{other}'"))),
    }
}
