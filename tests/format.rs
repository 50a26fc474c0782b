use ghstats::format;
use pretty_assertions::assert_eq;

#[test]
fn counts_are_grouped_by_thousands() {
    assert_eq!(format::count(0), "0");
    assert_eq!(format::count(999), "999");
    assert_eq!(format::count(1_234_567), "1,234,567");
    assert_eq!(format::stars(1234), "1,234 ⭐");
}

#[test]
fn percentages_drop_trailing_zero() {
    assert_eq!(format::percent(25.0), "25%");
    assert_eq!(format::percent(33.33), "33.3%");
    assert_eq!(format::percent(f64::NAN), "0%");
}

#[test]
fn deltas_are_signed_once() {
    assert_eq!(format::delta(None), "+0%");
    assert_eq!(format::delta(Some(12.0)), "+12%");
    assert_eq!(format::delta(Some(-5.0)), "-5%");
    assert_eq!(format::delta(Some(-0.04)), "+0%");
}

#[test]
fn day_counts_are_pluralised() {
    assert_eq!(format::days(1), "1 day");
    assert_eq!(format::days(0), "0 days");
    assert_eq!(format::days(1500), "1,500 days");
}

#[test]
fn first_commit_date_drops_the_weekday() {
    assert_eq!(format::first_commit_date(Some("Mon Jan 01 2018")), "Jan 01 2018");
    assert_eq!(format::first_commit_date(Some("2018")), "2018");
    assert_eq!(format::first_commit_date(None), "N/A");
}

#[test]
fn month_year_accepts_timestamps_and_dates() {
    assert_eq!(format::month_year(Some("2015-03-04T10:00:00Z")).as_deref(), Some("Mar 2015"));
    assert_eq!(format::month_year(Some("2020-11-30")).as_deref(), Some("Nov 2020"));
    assert_eq!(format::month_year(Some("yesterday")), None);
}

#[test]
fn blank_text_reads_as_not_available() {
    assert_eq!(format::or_na(Some("  ")), "N/A");
    assert_eq!(format::or_na(Some("Friday")), "Friday");
    assert_eq!(format::twitter_handle(Some("@ada")).as_deref(), Some("@ada"));
    assert_eq!(format::twitter_handle(Some("")), None);
}
