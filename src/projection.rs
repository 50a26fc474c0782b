//! Display-ready view of a snapshot.
//!
//! Every optional field of [`GitHubData`] is resolved to its fallback here, so
//! renderers only ever deal with plain strings and numbers.

use serde::Serialize;

use crate::format::{self, NOT_AVAILABLE, NO_DESCRIPTION};
use crate::model::{non_empty, GitHubData, PeriodMetrics, SanitizedRepo, TOP_REPOS_LIMIT};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub header: Header,
    pub headline: Headline,
    pub most_active_repo: Option<RepoCard>,
    pub habits: Habits,
    pub windows: Vec<WindowCard>,
    pub sidebar: Sidebar,
    pub active_repos: Vec<RepoCard>,
    pub maintained_repos: Vec<RepoCard>,
    pub all_repos: Vec<RepoCard>,
    pub languages: Vec<LanguageRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub github_url: String,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub twitter: Option<String>,
    pub joined: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Headline {
    pub total_contributions: String,
    pub current_year: String,
    pub year_over_year: String,
    pub quarter_over_quarter: String,
    pub half_over_half: String,
    pub issues_and_prs: String,
    pub closed: String,
    pub open: String,
    pub average_commits: String,
    pub best_repo_stars: String,
    pub best_repo_name: String,
    pub best_repo_slug: Option<String>,
    pub best_repo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Habits {
    pub most_active_day: String,
    pub weekend_share: String,
    pub longest_streak: String,
    pub current_streak: String,
    pub weekday_vs_weekend: String,
    pub active_years: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowCard {
    pub title: String,
    pub total_commits: String,
    pub weekend_activity: String,
    pub best_day: String,
    pub best_day_commits: String,
    pub average_per_day: String,
    pub most_active_day: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    pub public_repos: String,
    pub actively_maintained: String,
    pub total_stars: String,
    pub followers: String,
    pub following: String,
    pub public_gists: String,
    pub first_commit: String,
    pub coding_years: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoCard {
    pub rank: Option<usize>,
    pub slug: String,
    pub url: String,
    pub description: String,
    pub language: String,
    pub language_color: Option<String>,
    pub stars: String,
    pub star_count: u64,
    pub forks: String,
    pub activity: String,
    pub pinned: bool,
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRow {
    pub language: String,
    pub percentage: String,
    pub share: f64,
    pub color: Option<String>,
}

pub fn project(data: &GitHubData) -> Dashboard {
    let contributions = &data.contributions;

    Dashboard {
        header: project_header(data),
        headline: project_headline(data),
        most_active_repo: data
            .most_active_repo_this_month
            .as_ref()
            .map(|repo| repo_card(repo, None, Some("Most used this month".to_string()))),
        habits: project_habits(data),
        windows: contributions
            .windows()
            .into_iter()
            .map(|(title, period)| window_card(title, period))
            .collect(),
        sidebar: project_sidebar(data),
        active_repos: data
            .top_actively_used_repos
            .iter()
            .take(TOP_REPOS_LIMIT)
            .enumerate()
            .map(|(i, repo)| repo_card(repo, Some(i + 1), Some(format!("#{}", i + 1))))
            .collect(),
        maintained_repos: data
            .actively_maintained_repos
            .iter()
            .map(|repo| repo_card(repo, None, None))
            .collect(),
        all_repos: data
            .sanitized_repos_data
            .iter()
            .map(|repo| {
                let badge = repo.is_pinned.then(|| "Pinned".to_string());
                repo_card(repo, None, badge)
            })
            .collect(),
        languages: data
            .language_distribution
            .iter()
            .map(|entry| LanguageRow {
                language: entry.language.clone(),
                percentage: format!("{}%", format::rate(entry.percentage)),
                share: entry.percentage,
                color: non_empty(entry.color.as_deref()).map(str::to_string),
            })
            .collect(),
    }
}

fn project_header(data: &GitHubData) -> Header {
    let profile = &data.profile;
    let name = non_empty(profile.name.as_deref())
        .unwrap_or(profile.username.as_str())
        .to_string();

    Header {
        username: profile.username.clone(),
        name,
        bio: non_empty(profile.bio.as_deref()).map(str::to_string),
        avatar: non_empty(profile.avatar.as_deref()).map(str::to_string),
        github_url: data.github_url(),
        blog: non_empty(profile.blog.as_deref()).map(str::to_string),
        location: non_empty(profile.location.as_deref()).map(str::to_string),
        company: non_empty(profile.company.as_deref()).map(str::to_string),
        twitter: format::twitter_handle(profile.twitter.as_deref()),
        joined: format::month_year(profile.created_at.as_deref())
            .map(|d| format!("Joined {d}"))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

fn project_headline(data: &GitHubData) -> Headline {
    let c = &data.contributions;
    let total = c.issues.total.saturating_add(c.pull_requests.total);
    let closed = c.issues.closed.saturating_add(c.pull_requests.closed);
    let open = c.issues.open().saturating_add(c.pull_requests.open());
    let best = data.best_repo.as_ref();

    Headline {
        total_contributions: format::count(c.total),
        current_year: format::count(c.current_year),
        year_over_year: format!("{} vs last year", format::delta(c.year_over_year_change_percentage)),
        quarter_over_quarter: format!(
            "{} vs last quarter",
            format::delta(c.quarter_over_quarter_change_percentage)
        ),
        half_over_half: format!("{} vs last half", format::delta(c.half_over_half_change_percentage)),
        issues_and_prs: format::count(total),
        closed: format!("{} closed", format::count(closed)),
        open: format!("{} open", format::count(open)),
        average_commits: format!("{} / day", format::rate(c.overall.average_daily_commits)),
        best_repo_stars: format::stars(best.map(|r| r.stars).unwrap_or(0)),
        best_repo_name: best
            .map(|r| r.name.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        best_repo_slug: best.map(SanitizedRepo::slug),
        best_repo_url: best.map(SanitizedRepo::url),
    }
}

fn project_habits(data: &GitHubData) -> Habits {
    let c = &data.contributions;
    let recent = &c.last_6_months;

    let weekday_vs_weekend = match recent.weekday_weekend_breakdown {
        Some(b) => match (b.weekday, b.weekend) {
            (Some(weekday), Some(weekend)) => {
                format!("{} / {}", format::percent(weekday), format::percent(weekend))
            }
            _ => NOT_AVAILABLE.to_string(),
        },
        None => NOT_AVAILABLE.to_string(),
    };

    let active_years = if c.active_years.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        c.active_years.join(" · ")
    };

    Habits {
        most_active_day: format::or_na(c.overall.most_active_day.as_deref()),
        weekend_share: format!("{} weekend", format::percent(recent.weekend_percentage)),
        longest_streak: format::days(c.longest_streak),
        current_streak: format::days(c.current_streak),
        weekday_vs_weekend,
        active_years,
    }
}

fn window_card(title: &str, period: &PeriodMetrics) -> WindowCard {
    let best = period.best_commit.as_ref();
    WindowCard {
        title: title.to_string(),
        total_commits: format::count(period.recent_contributions),
        weekend_activity: format::percent(period.weekend_percentage),
        best_day: format::or_na(best.map(|b| b.date.as_str())),
        best_day_commits: format::commits(best.map(|b| b.count).unwrap_or(0)),
        average_per_day: format!("{} commits", format::rate(period.average_daily_commits)),
        most_active_day: format::or_na(period.most_active_day.as_deref()),
    }
}

fn project_sidebar(data: &GitHubData) -> Sidebar {
    let profile = &data.profile;
    let c = &data.contributions;

    Sidebar {
        public_repos: format::count(profile.public_repos),
        actively_maintained: format!(
            "{} actively maintained",
            format::count(data.actively_maintained_repos.len() as u64)
        ),
        total_stars: format::stars(data.total_stars),
        followers: format::count(profile.followers),
        following: format!("Following {}", format::count(profile.following)),
        public_gists: format::count(profile.public_gists),
        first_commit: format::first_commit_date(c.first_commit_date.as_deref()),
        coding_years: format::or_na(c.coding_years.as_deref()),
    }
}

pub fn repo_card(repo: &SanitizedRepo, rank: Option<usize>, badge: Option<String>) -> RepoCard {
    RepoCard {
        rank,
        slug: repo.slug(),
        url: repo.url(),
        description: repo.description().unwrap_or(NO_DESCRIPTION).to_string(),
        language: repo.language().unwrap_or(NOT_AVAILABLE).to_string(),
        language_color: non_empty(repo.language_color.as_deref()).map(str::to_string),
        stars: format::stars(repo.stars),
        star_count: repo.stars,
        forks: format!("{} forks", format::count(repo.forks)),
        activity: format::or_na(repo.activity_duration.as_deref()),
        pinned: repo.is_pinned,
        badge,
    }
}
