//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use bodbot::core::models::{Report, TaskRecord};
use bodbot::core::services::Registry;
use bodbot::output::{LookupResult, OutputMode, SyncSummary};

use crate::common::fixtures::{IOS_SHEET, PSI_SHEET};
use crate::common::mocks::MockFetcher;

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// SyncSummary Tests
// =============================================================================

#[tokio::test]
async fn sync_summary_reports_each_class() {
    let fetcher = MockFetcher::new()
        .with_sheet("u:psi", PSI_SHEET)
        .with_sheet("u:ios", IOS_SHEET)
        .with_status("u:gone", 404);
    let mut registry = Registry::new();
    registry.add_source("psi", "u:psi");
    registry.add_source("gone", "u:gone");
    registry.add_source("ios", "u:ios");
    let report = registry.sync_all(&fetcher).await;

    let summary = SyncSummary::new(&registry, &report);

    assert_eq!(summary.failures(), 1);
    let psi = &summary.classes[0];
    assert!(psi.ok);
    assert_eq!(psi.students, 3);
    assert_eq!(psi.tasks, 3);
    assert!(psi.synced_at.is_some());

    let gone = &summary.classes[1];
    assert!(!gone.ok);
    assert!(gone.synced_at.is_none());
    assert!(gone.error.as_deref().unwrap().contains("404"));

    assert_eq!(summary.classes[2].name, "ios");
}

#[tokio::test]
async fn sync_summary_serialization() {
    let fetcher = MockFetcher::new().with_status("u:gone", 500);
    let mut registry = Registry::new();
    registry.add_source("gone", "u:gone");
    let report = registry.sync_all(&fetcher).await;

    let json = serde_json::to_value(SyncSummary::new(&registry, &report)).unwrap();

    let class = &json["classes"][0];
    assert_eq!(class["name"], "gone");
    assert_eq!(class["ok"], false);
    assert_eq!(class["students"], 0);
    assert!(class.get("synced_at").is_none());
    assert!(class["error"].is_string());
}

// =============================================================================
// LookupResult Tests
// =============================================================================

#[test]
fn lookup_result_found_serialization() {
    let report = Report {
        class: "psi".to_string(),
        tasks: vec![TaskRecord::new("hw1", 5, Some(2), None)],
    };

    let json = serde_json::to_value(LookupResult::new("xnovak00", Some(report))).unwrap();

    assert_eq!(json["login"], "xnovak00");
    assert_eq!(json["found"], true);
    assert_eq!(json["class"], "psi");
    assert_eq!(json["tasks"][0]["name"], "hw1");
    assert_eq!(json["tasks"][0]["min"], 2);
    assert!(json["tasks"][0]["max"].is_null());
}

#[test]
fn lookup_result_not_found_serialization() {
    let result = LookupResult::new("nobody", None);

    let json = serde_json::to_value(&result).unwrap();

    assert!(!result.found);
    assert_eq!(json["found"], false);
    assert!(json.get("class").is_none());
    assert_eq!(json["tasks"], serde_json::json!([]));
}
