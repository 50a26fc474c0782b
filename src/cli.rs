use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::logging::LogTarget;

#[derive(Parser)]
#[command(name = "ghstats")]
#[command(about = "Personal GitHub statistics dashboard rendered from a pre-generated snapshot")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Path to the snapshot JSON, '-' for stdin (default: bundled snapshot)")]
    pub data: Option<String>,

    #[arg(long, global = true, help = "Fail on a missing or invalid snapshot instead of showing the loading state")]
    pub strict: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, short, global = true, help = "Hide the loading spinner")]
    pub quiet: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RepoList {
    /// Ranked actively used repositories
    Top,
    /// Actively maintained repositories
    Maintained,
    /// Every repository in the snapshot
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the dashboard to the terminal
    Show {
        #[arg(long, help = "Output the projected dashboard as JSON")]
        json: bool,

        #[arg(long, conflicts_with = "json", help = "Output ranked repository cards as NDJSON")]
        ndjson: bool,
    },
    /// Open the interactive dashboard
    #[command(alias = "ui", alias = "interactive")]
    Tui,
    /// Write the dashboard as a static HTML page or JSON document
    Export {
        #[arg(long, help = "Export HTML (default)")]
        html: bool,

        #[arg(long, conflicts_with = "html", help = "Export JSON")]
        json: bool,

        #[arg(long, short, help = "Output file (default: stdout)")]
        output: Option<PathBuf>,
    },
    /// List repositories from the snapshot
    Repos {
        #[arg(long, value_enum, default_value_t = RepoList::Top, help = "Which repository list to show")]
        list: RepoList,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Validate the snapshot against the data contract
    Check {
        #[arg(long, help = "Output violations as JSON")]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn log_target(&self) -> LogTarget {
        match self.command {
            Commands::Tui => LogTarget::Discard,
            _ => LogTarget::Stderr,
        }
    }

    pub fn execute(self) -> Result<()> {
        let config = Config::from_args(&self.common)?;
        config.apply_color();

        match self.command {
            Commands::Show { json, ndjson } => crate::show::exec(&config, json, ndjson),
            Commands::Tui => crate::tui::run(&config).map_err(|e| anyhow::anyhow!(e)),
            Commands::Export { html: _, json, output } => {
                crate::export::exec(&config, json, output.as_deref())
            }
            Commands::Repos { list, json } => crate::repos::exec(&config, list, json),
            Commands::Check { json } => crate::check::exec(&config, json),
        }
    }
}
