use std::io::{self, Write};

use anyhow::Context;
use console::style;

use crate::cli::RepoList;
use crate::config::Config;
use crate::loader::load_state;
use crate::projection::{project, Dashboard, RepoCard};
use crate::show::write_loading;

pub fn exec(config: &Config, list: RepoList, json: bool) -> anyhow::Result<()> {
    let state = load_state(&config.source, config.mode, config.show_progress)
        .with_context(|| format!("Failed to load {}", config.source))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(data) = state.data() else {
        write_loading(&mut out, &state)?;
        return Ok(());
    };
    let dashboard = project(data);
    let cards = select(&dashboard, list);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(cards)?)?;
    } else {
        output_table(&mut out, cards)?;
    }
    Ok(())
}

pub fn select(dashboard: &Dashboard, list: RepoList) -> &[RepoCard] {
    match list {
        RepoList::Top => &dashboard.active_repos,
        RepoList::Maintained => &dashboard.maintained_repos,
        RepoList::All => &dashboard.all_repos,
    }
}

pub fn output_table<W: Write>(out: &mut W, cards: &[RepoCard]) -> io::Result<()> {
    if cards.is_empty() {
        writeln!(out, "No repositories to display")?;
        return Ok(());
    }

    let slug_width = cards.iter().map(|c| c.slug.chars().count()).max().unwrap_or(0).max(10);

    writeln!(
        out,
        "{:>4}  {:<slug_width$}  {:<12}  {:>10}  {}",
        style("#").bold(),
        style("Repository").bold(),
        style("Language").bold(),
        style("Stars").bold(),
        style("Activity").bold(),
    )?;
    writeln!(out, "{}", "─".repeat(slug_width + 48))?;

    for (i, card) in cards.iter().enumerate() {
        let rank = card.rank.unwrap_or(i + 1);
        writeln!(
            out,
            "{:>4}  {:<slug_width$}  {:<12}  {:>10}  {}",
            rank,
            card.slug,
            card.language,
            card.stars,
            style(&card.activity).dim()
        )?;
    }

    Ok(())
}
