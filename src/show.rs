use std::io::{self, Write};

use anyhow::Context;
use chrono::Utc;
use console::style;

use crate::config::Config;
use crate::loader::{load_state, LoadState};
use crate::model::{DashboardOutput, SCHEMA_VERSION};
use crate::projection::{project, Dashboard, RepoCard, WindowCard};

const RULE_WIDTH: usize = 60;

pub fn exec(config: &Config, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let state = load_state(&config.source, config.mode, config.show_progress)
        .with_context(|| format!("Failed to load {}", config.source))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(data) = state.data() else {
        write_loading(&mut out, &state)?;
        return Ok(());
    };
    let dashboard = project(data);

    if json {
        output_json(&mut out, &dashboard, &config.source.to_string())?;
    } else if ndjson {
        output_ndjson(&mut out, &dashboard)?;
    } else {
        write_dashboard(&mut out, &dashboard)?;
    }

    Ok(())
}

pub fn output_json<W: Write>(out: &mut W, dashboard: &Dashboard, source: &str) -> anyhow::Result<()> {
    let output = DashboardOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        source: source.to_string(),
        dashboard: dashboard.clone(),
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

pub fn output_ndjson<W: Write>(out: &mut W, dashboard: &Dashboard) -> anyhow::Result<()> {
    for card in &dashboard.active_repos {
        writeln!(out, "{}", serde_json::to_string(card)?)?;
    }
    Ok(())
}

/// The persistent loading indicator shown while no snapshot is available.
pub fn write_loading<W: Write>(out: &mut W, state: &LoadState) -> io::Result<()> {
    writeln!(out, "{}", style("Loading...").dim())?;
    if let Some(reason) = state.reason() {
        writeln!(out, "{} {}", style("snapshot unavailable:").yellow(), reason)?;
    }
    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style(title).bold())?;
    writeln!(out, "{}", "─".repeat(RULE_WIDTH))
}

fn field<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {:<24} {}", style(label).dim(), value)
}

pub fn write_dashboard<W: Write>(out: &mut W, d: &Dashboard) -> io::Result<()> {
    let h = &d.header;
    writeln!(out, "{}", style(&h.name).bold().cyan())?;
    if let Some(bio) = &h.bio {
        writeln!(out, "{bio}")?;
    }
    writeln!(out, "GitHub: {}", style(&h.github_url).underlined())?;
    if let Some(blog) = &h.blog {
        writeln!(out, "Blog or Portfolio: {}", style(blog).underlined())?;
    }
    let details: Vec<&str> = [h.location.as_deref(), h.company.as_deref(), h.twitter.as_deref()]
        .into_iter()
        .flatten()
        .chain(std::iter::once(h.joined.as_str()))
        .collect();
    writeln!(out, "{}", style(details.join(" · ")).dim())?;

    let hl = &d.headline;
    section(out, "Overview")?;
    field(out, "TOTAL CONTRIBUTIONS", &style(&hl.total_contributions).bold().to_string())?;
    field(out, "", &style(&hl.year_over_year).green().to_string())?;
    field(out, "This year", &hl.current_year)?;
    field(out, "Quarter / half", &format!("{} · {}", hl.quarter_over_quarter, hl.half_over_half))?;
    field(out, "ISSUES / PULL REQUESTS", &style(&hl.issues_and_prs).bold().to_string())?;
    field(out, "", &format!("{} · {}", hl.closed, hl.open))?;
    field(out, "AVERAGE COMMITS", &hl.average_commits)?;
    field(out, "BEST REPO STAR COUNT", &hl.best_repo_stars)?;
    match (&hl.best_repo_slug, &hl.best_repo_url) {
        (Some(slug), Some(url)) => field(out, "", &format!("{slug} ({url})"))?,
        _ => field(out, "", &hl.best_repo_name)?,
    }

    if let Some(card) = &d.most_active_repo {
        section(out, "Most Active This Month")?;
        write_repo_card(out, card)?;
    }

    let habits = &d.habits;
    section(out, "Coding Habits")?;
    field(out, "Most active day", &habits.most_active_day)?;
    field(out, "", &habits.weekend_share)?;
    field(out, "Longest streak", &habits.longest_streak)?;
    field(out, "Current streak", &habits.current_streak)?;
    field(out, "Weekday vs weekend", &habits.weekday_vs_weekend)?;
    field(out, "Active years", &habits.active_years)?;

    section(out, "Contribution Window")?;
    for window in &d.windows {
        write_window(out, window)?;
    }

    let s = &d.sidebar;
    section(out, "Profile")?;
    field(out, "Public repositories", &format!("{} ({})", s.public_repos, s.actively_maintained))?;
    field(out, "Total stars", &s.total_stars)?;
    field(out, "Followers", &format!("{} · {}", s.followers, s.following))?;
    field(out, "Public gists", &s.public_gists)?;
    field(out, "First commit on GitHub", &s.first_commit)?;
    field(out, "", &s.coding_years)?;

    section(out, "Active Repos")?;
    if d.active_repos.is_empty() {
        writeln!(out, "  {}", style("No active repositories").dim())?;
    }
    for card in &d.active_repos {
        write_repo_card(out, card)?;
    }

    if !d.languages.is_empty() {
        section(out, "Languages")?;
        for row in &d.languages {
            let width = ((row.share / 100.0) * 30.0).round().clamp(0.0, 30.0) as usize;
            writeln!(
                out,
                "  {:<16} {:>6} {}",
                row.language,
                row.percentage,
                style("█".repeat(width)).green()
            )?;
        }
    }

    Ok(())
}

fn write_window<W: Write>(out: &mut W, w: &WindowCard) -> io::Result<()> {
    writeln!(out, "  {}", style(&w.title).bold())?;
    field(out, "Total Commits", &w.total_commits)?;
    field(out, "Weekend Activity", &w.weekend_activity)?;
    field(out, "Best Day", &format!("{} ({})", w.best_day, w.best_day_commits))?;
    field(out, "Avg per day", &w.average_per_day)?;
    field(out, "Most active day", &w.most_active_day)
}

pub fn write_repo_card<W: Write>(out: &mut W, card: &RepoCard) -> io::Result<()> {
    let badge = card.badge.as_deref().map(|b| format!(" [{b}]")).unwrap_or_default();
    writeln!(out, "  {}{}", style(&card.slug).bold().cyan(), style(badge).blue())?;
    writeln!(out, "    {}", card.description)?;
    writeln!(
        out,
        "    {} · {} · {} · {}",
        style(&card.language).magenta(),
        card.stars,
        card.forks,
        style(&card.activity).dim()
    )?;
    writeln!(out, "    {}", style(&card.url).dim())
}
