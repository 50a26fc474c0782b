use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use ghstats::cli::CommonArgs;
use ghstats::config::Config;
use ghstats::loader::{accept_snapshot, load_state, spawn_load};
use ghstats::{load, parse_snapshot, GhstatsError, LoadMode, LoadState, SnapshotSource};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn source_from_argument() {
    assert_eq!(SnapshotSource::from_arg(None), SnapshotSource::Bundled);
    assert_eq!(SnapshotSource::from_arg(Some("")), SnapshotSource::Bundled);
    assert_eq!(SnapshotSource::from_arg(Some("-")), SnapshotSource::Stdin);
    assert_eq!(
        SnapshotSource::from_arg(Some("data.json")),
        SnapshotSource::File(PathBuf::from("data.json"))
    );
}

#[test]
fn bundled_snapshot_loads_cleanly() {
    let data = load(&SnapshotSource::Bundled).unwrap();
    assert!(!data.profile.username.is_empty());

    let (_, violations) = accept_snapshot(&SnapshotSource::Bundled.read().unwrap()).unwrap();
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn empty_payload_is_rejected() {
    assert!(matches!(parse_snapshot("  \n"), Err(GhstatsError::EmptySnapshot)));
}

#[test]
fn malformed_payload_is_a_serde_error() {
    let payload = fs::read_to_string(fixture("malformed.json")).unwrap();
    assert!(matches!(parse_snapshot(&payload), Err(GhstatsError::Serde(_))));
}

#[test]
fn negative_counts_fail_to_parse() {
    let payload = fs::read_to_string(fixture("minimal.json"))
        .unwrap()
        .replace("\"username\": \"ghost\"", "\"username\": \"ghost\", \"followers\": -1");
    assert!(parse_snapshot(&payload).is_err());
}

#[test]
fn schema_errors_reject_the_whole_snapshot() {
    let payload = fs::read_to_string(fixture("closed_exceeds_total.json")).unwrap();
    match accept_snapshot(&payload) {
        Err(GhstatsError::Schema(violations)) => {
            assert!(violations.iter().any(|v| v.path == "contributions.issues.closed"));
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let source = SnapshotSource::File(dir.path().join("absent.json"));
    assert!(matches!(load(&source), Err(GhstatsError::Io(_))));
}

#[test]
fn lenient_load_stays_pending_with_reason() {
    let source = SnapshotSource::File(fixture("malformed.json"));
    let state = load_state(&source, LoadMode::Lenient, false).unwrap();

    assert!(!state.is_ready());
    assert!(state.data().is_none());
    assert!(state.reason().is_some());
}

#[test]
fn strict_load_propagates_errors() {
    let source = SnapshotSource::File(fixture("malformed.json"));
    assert!(load_state(&source, LoadMode::Strict, false).is_err());
}

#[test]
fn ready_is_terminal() {
    let first = load(&SnapshotSource::File(fixture("ada.json"))).unwrap();
    let second = load(&SnapshotSource::File(fixture("minimal.json"))).unwrap();

    let mut state = LoadState::default();
    assert!(state.resolve(Arc::clone(&first)));
    assert!(!state.resolve(second));
    state.fail("late failure");

    assert!(state.is_ready());
    assert_eq!(state.reason(), None);
    assert_eq!(state.data().unwrap().profile.username, "ada");
}

#[test]
fn failure_then_success_resolves() {
    let data = load(&SnapshotSource::File(fixture("ada.json"))).unwrap();

    let mut state = LoadState::default();
    state.fail("first attempt failed");
    assert_eq!(state.reason(), Some("first attempt failed"));
    assert!(state.resolve(data));
    assert!(state.is_ready());
}

#[test]
fn background_load_delivers_once() {
    let rx = spawn_load(SnapshotSource::File(fixture("ada.json")));
    let data = rx.recv_timeout(Duration::from_secs(5)).unwrap().unwrap();

    assert_eq!(data.profile.username, "ada");
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn config_prefers_arguments_over_environment() {
    let args = CommonArgs {
        data: Some("cli.json".to_string()),
        strict: false,
        no_color: false,
        quiet: true,
    };
    let config = Config::resolve(&args, |key| match key {
        "GHSTATS_DATA" => Some("env.json".to_string()),
        "GHSTATS_STRICT" => Some("yes".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.source, SnapshotSource::File(PathBuf::from("cli.json")));
    assert_eq!(config.mode, LoadMode::Strict);
    assert!(config.color);
    assert!(!config.show_progress);
}

#[test]
fn config_defaults_to_bundled_lenient() {
    let config = Config::resolve(&CommonArgs::default(), |_| None).unwrap();

    assert_eq!(config.source, SnapshotSource::Bundled);
    assert_eq!(config.mode, LoadMode::Lenient);
    assert!(config.color);
}

#[test]
fn config_reads_no_color_and_data_from_environment() {
    let config = Config::resolve(&CommonArgs::default(), |key| match key {
        "GHSTATS_DATA" => Some("-".to_string()),
        "NO_COLOR" => Some("1".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.source, SnapshotSource::Stdin);
    assert!(!config.color);
}

#[test]
fn config_rejects_unparseable_strict_flag() {
    let result = Config::resolve(&CommonArgs::default(), |key| {
        (key == "GHSTATS_STRICT").then(|| "maybe".to_string())
    });
    assert!(matches!(result, Err(GhstatsError::Config(_))));
}
