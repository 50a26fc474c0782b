use std::fs;
use std::path::PathBuf;

use ghstats::parse_snapshot;
use ghstats::validate::{has_errors, validate, Severity, Violation};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn fixture_value(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn violations_for(value: &Value) -> Vec<Violation> {
    validate(&parse_snapshot(&value.to_string()).unwrap())
}

fn paths(violations: &[Violation], severity: Severity) -> Vec<&str> {
    violations
        .iter()
        .filter(|v| v.severity == severity)
        .map(|v| v.path.as_str())
        .collect()
}

#[test]
fn well_formed_fixtures_have_no_errors() {
    assert!(!has_errors(&violations_for(&fixture_value("ada.json"))));
    assert!(violations_for(&fixture_value("minimal.json")).is_empty());
}

#[test]
fn closed_above_total_is_an_error() {
    let violations = violations_for(&fixture_value("closed_exceeds_total.json"));
    assert_eq!(paths(&violations, Severity::Error), vec!["contributions.issues.closed"]);
}

#[test]
fn pull_request_counts_are_checked_too() {
    let mut value = fixture_value("ada.json");
    value["contributions"]["pullRequests"] = json!({ "total": 1, "closed": 2 });

    let violations = violations_for(&value);
    assert_eq!(
        paths(&violations, Severity::Error),
        vec!["contributions.pullRequests.closed"]
    );
}

#[test]
fn percentages_must_stay_in_range() {
    let mut value = fixture_value("ada.json");
    value["contributions"]["overall"]["weekendPercentage"] = json!(120.0);
    value["languageDistribution"][0]["percentage"] = json!(-3.0);

    let violations = violations_for(&value);
    assert_eq!(
        paths(&violations, Severity::Error),
        vec![
            "contributions.overall.weekendPercentage",
            "languageDistribution[0].percentage",
        ]
    );
}

#[test]
fn negative_daily_average_is_an_error() {
    let mut value = fixture_value("ada.json");
    value["contributions"]["last1Year"]["averageDailyCommits"] = json!(-0.5);

    let violations = violations_for(&value);
    assert_eq!(
        paths(&violations, Severity::Error),
        vec!["contributions.last1Year.averageDailyCommits"]
    );
}

#[test]
fn lopsided_breakdown_is_only_a_warning() {
    let mut value = fixture_value("ada.json");
    value["contributions"]["last6Months"]["weekdayWeekendBreakdown"] =
        json!({ "weekday": 50.0, "weekend": 20.0 });

    let violations = violations_for(&value);
    assert!(!has_errors(&violations));
    assert_eq!(
        paths(&violations, Severity::Warning),
        vec!["contributions.last6Months.weekdayWeekendBreakdown"]
    );
}

#[test]
fn active_years_must_ascend() {
    let mut value = fixture_value("ada.json");
    value["contributions"]["activeYears"] = json!(["2024", "2023"]);

    let violations = violations_for(&value);
    assert_eq!(paths(&violations, Severity::Error), vec!["contributions.activeYears"]);
}

#[test]
fn best_repo_without_repositories_is_an_error() {
    let mut value = fixture_value("ada.json");
    value["sanitizedReposData"] = json!([]);
    value["activelyMaintainedRepos"] = json!([]);
    value["topActivelyUsedRepos"] = json!([]);

    let violations = violations_for(&value);
    assert_eq!(paths(&violations, Severity::Error), vec!["bestRepo"]);
}

#[test]
fn best_repo_must_have_the_most_stars() {
    let mut value = fixture_value("ada.json");
    value["sanitizedReposData"][1]["stars"] = json!(5000);

    let violations = violations_for(&value);
    assert!(!has_errors(&violations));
    assert!(paths(&violations, Severity::Warning).contains(&"bestRepo"));
}

#[test]
fn unknown_list_members_are_warnings() {
    let mut value = fixture_value("ada.json");
    value["topActivelyUsedRepos"][0]["name"] = json!("ghost-repo");

    let violations = violations_for(&value);
    assert!(!has_errors(&violations));
    assert!(paths(&violations, Severity::Warning).contains(&"topActivelyUsedRepos"));
}

#[test]
fn violation_display_includes_path() {
    let violations = violations_for(&fixture_value("closed_exceeds_total.json"));
    assert_eq!(
        violations[0].to_string(),
        "contributions.issues.closed: closed (9) exceeds total (3)"
    );
}

#[test]
fn empty_username_is_an_error() {
    let mut value = fixture_value("ada.json");
    value["profile"]["username"] = json!("  ");

    let violations = violations_for(&value);
    assert_eq!(paths(&violations, Severity::Error), vec!["profile.username"]);
}

#[test]
fn total_stars_mismatch_is_a_warning() {
    let mut value = fixture_value("ada.json");
    value["totalStars"] = json!(1);

    let violations = violations_for(&value);
    assert!(!has_errors(&violations));
    assert_eq!(paths(&violations, Severity::Warning), vec!["totalStars"]);
}

#[test]
fn language_sum_outside_tolerance_is_a_warning() {
    let mut value = fixture_value("ada.json");
    value["languageDistribution"] = json!([
        { "language": "Rust", "percentage": 60.0 },
        { "language": "Go", "percentage": 30.0 }
    ]);

    let violations = violations_for(&value);
    assert!(!has_errors(&violations));
    assert_eq!(paths(&violations, Severity::Warning), vec!["languageDistribution"]);
}

#[test]
fn language_sum_within_tolerance_passes() {
    let mut value = fixture_value("ada.json");
    value["languageDistribution"] = json!([
        { "language": "Rust", "percentage": 60.0 },
        { "language": "Go", "percentage": 39.0 }
    ]);

    assert!(violations_for(&value).is_empty());
}

#[test]
fn more_than_six_top_repos_is_a_warning() {
    let mut value = fixture_value("ada.json");
    let engine = value["sanitizedReposData"][0].clone();
    value["topActivelyUsedRepos"] = Value::Array(vec![engine; 7]);

    let violations = violations_for(&value);
    assert!(!has_errors(&violations));
    assert_eq!(paths(&violations, Severity::Warning), vec!["topActivelyUsedRepos"]);
}

#[test]
fn huge_star_counts_do_not_overflow_the_sum() {
    let mut value = fixture_value("ada.json");
    let half = u64::MAX / 2 + 1;
    value["sanitizedReposData"][0]["stars"] = json!(half);
    value["sanitizedReposData"][1]["stars"] = json!(half);

    let violations = violations_for(&value);
    assert!(!has_errors(&violations));
    assert!(paths(&violations, Severity::Warning).contains(&"totalStars"));
}
