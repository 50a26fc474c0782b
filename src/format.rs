use chrono::{DateTime, NaiveDate};
use thousands::Separable;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description";

/// Thousands-grouped integer, e.g. `1234` -> `1,234`.
pub fn count(n: u64) -> String {
    n.separate_with_commas()
}

/// One decimal place, the way rates are shown everywhere on the dashboard.
pub fn rate(value: f64) -> String {
    format!("{:.1}", finite_or_zero(value))
}

/// Percentage without the sign: at most one decimal, trailing `.0` dropped.
pub fn percent(value: f64) -> String {
    let rounded = (finite_or_zero(value) * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}%", rounded as i64)
    } else {
        format!("{rounded:.1}%")
    }
}

/// Signed change label; a missing delta reads as `+0%`.
pub fn delta(value: Option<f64>) -> String {
    let v = (value.map(finite_or_zero).unwrap_or(0.0) * 10.0).round() / 10.0;
    if v < 0.0 {
        format!("-{}", percent(-v))
    } else {
        format!("+{}", percent(v))
    }
}

pub fn stars(n: u64) -> String {
    format!("{} ⭐", count(n))
}

pub fn days(n: u64) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", count(n))
    }
}

pub fn commits(n: u64) -> String {
    format!("{} commits", count(n))
}

pub fn or_na(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Drops the leading weekday word of a date such as `Mon Jan 01 2018`.
pub fn first_commit_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };
    let rest: Vec<&str> = raw.split(' ').skip(1).collect();
    if rest.is_empty() {
        raw.to_string()
    } else {
        rest.join(" ")
    }
}

/// `Mar 2015` from an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
pub fn month_year(value: Option<&str>) -> Option<String> {
    let raw = value.map(str::trim).filter(|s| !s.is_empty())?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.format("%b %Y").to_string());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%b %Y").to_string())
}

pub fn twitter_handle(value: Option<&str>) -> Option<String> {
    let raw = value.map(str::trim).filter(|s| !s.is_empty())?;
    Some(format!("@{}", raw.trim_start_matches('@')))
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
