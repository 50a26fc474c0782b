use serde::Serialize;
use std::fmt;

use crate::model::{ClosedCount, GitHubData, PeriodMetrics, SanitizedRepo, TOP_REPOS_LIMIT};

const BREAKDOWN_TOLERANCE: f64 = 1.0;
const LANGUAGE_SUM_TOLERANCE: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub path: String,
    pub message: String,
    pub severity: Severity,
}

impl Violation {
    fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into(), severity: Severity::Error }
    }

    fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into(), severity: Severity::Warning }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

pub fn has_errors(violations: &[Violation]) -> bool {
    violations.iter().any(Violation::is_error)
}

/// Check every invariant of the snapshot contract. Negative counts never get
/// here: they fail deserialization into unsigned fields.
pub fn validate(data: &GitHubData) -> Vec<Violation> {
    let mut out = Vec::new();

    if data.profile.username.trim().is_empty() {
        out.push(Violation::error("profile.username", "must not be empty"));
    }

    let contributions = &data.contributions;
    check_closed(&mut out, "contributions.issues", &contributions.issues);
    check_closed(&mut out, "contributions.pullRequests", &contributions.pull_requests);

    check_period(&mut out, "contributions.last6Months", &contributions.last_6_months);
    check_period(&mut out, "contributions.last1Year", &contributions.last_1_year);
    check_period(&mut out, "contributions.overall", &contributions.overall);

    let mut previous: Option<&str> = None;
    for year in &contributions.active_years {
        if let Some(prev) = previous {
            if year.as_str() <= prev {
                out.push(Violation::error(
                    "contributions.activeYears",
                    format!("must be ascending and unique, found {year} after {prev}"),
                ));
                break;
            }
        }
        previous = Some(year.as_str());
    }

    check_languages(&mut out, data);
    check_aggregates(&mut out, data);

    out
}

fn check_closed(out: &mut Vec<Violation>, path: &str, count: &ClosedCount) {
    if count.closed > count.total {
        out.push(Violation::error(
            format!("{path}.closed"),
            format!("closed ({}) exceeds total ({})", count.closed, count.total),
        ));
    }
}

fn check_percentage(out: &mut Vec<Violation>, path: String, value: f64) -> bool {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        out.push(Violation::error(path, format!("percentage {value} outside 0..=100")));
        return false;
    }
    true
}

fn check_period(out: &mut Vec<Violation>, path: &str, period: &PeriodMetrics) {
    check_percentage(out, format!("{path}.weekendPercentage"), period.weekend_percentage);

    let rate = period.average_daily_commits;
    if !rate.is_finite() || rate < 0.0 {
        out.push(Violation::error(
            format!("{path}.averageDailyCommits"),
            format!("must be a non-negative number, found {rate}"),
        ));
    }

    let Some(breakdown) = period.weekday_weekend_breakdown else {
        return;
    };
    let breakdown_path = format!("{path}.weekdayWeekendBreakdown");
    let weekday_ok = breakdown
        .weekday
        .map(|v| check_percentage(out, format!("{breakdown_path}.weekday"), v));
    let weekend_ok = breakdown
        .weekend
        .map(|v| check_percentage(out, format!("{breakdown_path}.weekend"), v));

    if let (Some(true), Some(true), Some(weekday), Some(weekend)) =
        (weekday_ok, weekend_ok, breakdown.weekday, breakdown.weekend)
    {
        let sum = weekday + weekend;
        if (sum - 100.0).abs() > BREAKDOWN_TOLERANCE {
            out.push(Violation::warning(
                breakdown_path,
                format!("weekday + weekend = {sum}, expected 100"),
            ));
        }
    }
}

fn check_languages(out: &mut Vec<Violation>, data: &GitHubData) {
    let mut all_in_range = true;
    for (i, entry) in data.language_distribution.iter().enumerate() {
        all_in_range &= check_percentage(
            out,
            format!("languageDistribution[{i}].percentage"),
            entry.percentage,
        );
    }

    if all_in_range && !data.language_distribution.is_empty() {
        let sum: f64 = data.language_distribution.iter().map(|l| l.percentage).sum();
        if (sum - 100.0).abs() > LANGUAGE_SUM_TOLERANCE {
            out.push(Violation::warning(
                "languageDistribution",
                format!("percentages sum to {sum:.1}, expected about 100"),
            ));
        }
    }
}

fn check_aggregates(out: &mut Vec<Violation>, data: &GitHubData) {
    let repos = &data.sanitized_repos_data;

    if repos.is_empty() {
        if data.best_repo.is_some() {
            out.push(Violation::error("bestRepo", "present while sanitizedReposData is empty"));
        }
        if data.most_active_repo_this_month.is_some() {
            out.push(Violation::error(
                "mostActiveRepoThisMonth",
                "present while sanitizedReposData is empty",
            ));
        }
    } else {
        check_membership(out, data, "bestRepo", data.best_repo.iter());
        check_membership(
            out,
            data,
            "mostActiveRepoThisMonth",
            data.most_active_repo_this_month.iter(),
        );
        check_membership(out, data, "activelyMaintainedRepos", data.actively_maintained_repos.iter());
        check_membership(out, data, "topActivelyUsedRepos", data.top_actively_used_repos.iter());
    }

    if let Some(best) = &data.best_repo {
        if let Some(top) = repos.iter().max_by_key(|r| r.stars) {
            if top.stars > best.stars {
                out.push(Violation::warning(
                    "bestRepo",
                    format!(
                        "{} has {} stars but {} has {}",
                        best.slug(),
                        best.stars,
                        top.slug(),
                        top.stars
                    ),
                ));
            }
        }
    }

    if data.top_actively_used_repos.len() > TOP_REPOS_LIMIT {
        out.push(Violation::warning(
            "topActivelyUsedRepos",
            format!(
                "{} entries, only the first {TOP_REPOS_LIMIT} are shown",
                data.top_actively_used_repos.len()
            ),
        ));
    }

    let star_sum = repos.iter().map(|r| r.stars).fold(0u64, u64::saturating_add);
    if !repos.is_empty() && star_sum != data.total_stars {
        out.push(Violation::warning(
            "totalStars",
            format!("{} differs from the repository sum {star_sum}", data.total_stars),
        ));
    }
}

fn check_membership<'a>(
    out: &mut Vec<Violation>,
    data: &GitHubData,
    path: &str,
    entries: impl Iterator<Item = &'a SanitizedRepo>,
) {
    for repo in entries {
        if data.find_repo(repo).is_none() {
            out.push(Violation::warning(
                path,
                format!("{} is not in sanitizedReposData", repo.slug()),
            ));
        }
    }
}
