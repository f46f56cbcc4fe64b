//! Tests for classes and the registry
//!
//! Covers lookup precedence across classes, sync failure isolation and the
//! snapshot guarantees the bot depends on.

use std::sync::Arc;

use bodbot::bot::render;
use bodbot::core::models::TaskRecord;
use bodbot::core::ports::FetchError;
use bodbot::core::services::{Registry, Source, SyncError};

use crate::common::fixtures::{BOB_SHEET, IOS_SHEET, PSI_SHEET};
use crate::common::mocks::MockFetcher;

const PSI: &str = "https://sheets.example.org/psi.csv";
const IOS: &str = "https://sheets.example.org/ios.csv";
const BOB: &str = "https://sheets.example.org/bob.csv";

fn registry(classes: &[(&str, &str)]) -> Registry {
    let mut registry = Registry::new();
    for (name, url) in classes {
        registry.add_source(*name, *url);
    }
    registry
}

// =============================================================================
// End-to-end lookup
// =============================================================================

#[tokio::test]
async fn bob_gets_hw1_only() {
    let fetcher = MockFetcher::new().with_sheet(BOB, BOB_SHEET);
    let registry = registry(&[("bob", BOB)]);
    assert!(registry.sync_all(&fetcher).await.is_success());

    let report = registry.lookup("bob").expect("bob is in the sheet");
    assert_eq!(report.tasks, vec![TaskRecord::new("hw1", 5, Some(1), Some(10))]);
    assert_eq!(render::plain_summary(&report.tasks), "hw1: 5 min: 1, max: 10");
}

#[tokio::test]
async fn lookup_is_case_insensitive() {
    let fetcher = MockFetcher::new().with_sheet(PSI, PSI_SHEET);
    let registry = registry(&[("psi", PSI)]);
    registry.sync_all(&fetcher).await;

    let lower = registry.lookup("xnovak00").unwrap();
    let upper = registry.lookup("XNOVAK00").unwrap();
    let mixed = registry.lookup("xNoVaK00").unwrap();
    assert_eq!(lower.tasks, upper.tasks);
    assert_eq!(lower.tasks, mixed.tasks);
}

// =============================================================================
// Precedence
// =============================================================================

#[tokio::test]
async fn first_configured_class_wins() {
    let fetcher = MockFetcher::new().with_sheet(PSI, PSI_SHEET).with_sheet(IOS, IOS_SHEET);

    let psi_first = registry(&[("psi", PSI), ("ios", IOS)]);
    psi_first.sync_all(&fetcher).await;
    assert_eq!(psi_first.lookup("xnovak00").unwrap().class, "psi");

    let ios_first = registry(&[("ios", IOS), ("psi", PSI)]);
    ios_first.sync_all(&fetcher).await;
    assert_eq!(ios_first.lookup("xnovak00").unwrap().class, "ios");
}

#[tokio::test]
async fn present_student_with_no_points_shadows_later_classes() {
    let empty = "login,hw1\nXSVOBO02,\n";
    let fetcher = MockFetcher::new().with_sheet(PSI, empty).with_sheet(IOS, IOS_SHEET);
    let registry = registry(&[("psi", PSI), ("ios", IOS)]);
    registry.sync_all(&fetcher).await;

    let report = registry.lookup("xsvobo02").unwrap();
    assert_eq!(report.class, "psi");
    assert!(report.tasks.is_empty());
}

#[tokio::test]
async fn students_unique_to_later_classes_are_found() {
    let fetcher = MockFetcher::new().with_sheet(PSI, PSI_SHEET).with_sheet(IOS, IOS_SHEET);
    let registry = registry(&[("psi", PSI), ("ios", IOS)]);
    registry.sync_all(&fetcher).await;

    assert_eq!(registry.lookup("xsvobo02").unwrap().class, "ios");
    assert!(registry.lookup("nobody").is_none());
}

// =============================================================================
// Sync failures
// =============================================================================

#[tokio::test]
async fn failing_class_does_not_stop_the_others() {
    let fetcher = MockFetcher::new()
        .with_sheet(PSI, PSI_SHEET)
        .with_status(BOB, 500)
        .with_sheet(IOS, IOS_SHEET);
    let registry = registry(&[("psi", PSI), ("bob", BOB), ("ios", IOS)]);

    let report = registry.sync_all(&fetcher).await;

    assert_eq!(report.synced, ["psi", "ios"]);
    assert_eq!(report.failed.len(), 1);
    assert!(matches!(
        report.error_for("bob"),
        Some(SyncError::Fetch(FetchError::Status { status: 500, .. }))
    ));
    assert_eq!(fetcher.requests(), [PSI, BOB, IOS]);
    assert!(registry.lookup("xsvobo02").is_some());
}

#[tokio::test]
async fn malformed_sheet_is_a_parse_failure() {
    let fetcher = MockFetcher::new().with_sheet(PSI, "login,hw1\nBOB,lots\n");
    let registry = registry(&[("psi", PSI)]);

    let report = registry.sync_all(&fetcher).await;

    assert!(matches!(report.error_for("psi"), Some(SyncError::Parse(_))));
    assert!(registry.lookup("bob").is_none());
}

#[tokio::test]
async fn failed_resync_keeps_serving_previous_sheet() {
    let fetcher = MockFetcher::new().with_sheet(PSI, PSI_SHEET);
    fetcher.push(
        PSI,
        Err(FetchError::Timeout {
            url: PSI.to_string(),
        }),
    );
    let source = Source::new("psi", PSI);

    source.sync(&fetcher).await.unwrap();
    let before = source.snapshot();
    assert!(source.sync(&fetcher).await.is_err());

    assert!(Arc::ptr_eq(&before, &source.snapshot()));
    assert_eq!(source.lookup("xdvora01").unwrap().len(), 3);
}

#[tokio::test]
async fn resync_replaces_the_whole_sheet() {
    let fetcher = MockFetcher::new()
        .with_sheet(PSI, "login,hw1\nALICE,1\nBOB,2\n")
        .with_sheet(PSI, "login,hw2\nBOB,7\n");
    let source = Source::new("psi", PSI);

    source.sync(&fetcher).await.unwrap();
    let old = source.snapshot();
    source.sync(&fetcher).await.unwrap();

    assert!(source.lookup("alice").is_none());
    assert_eq!(source.lookup("bob").unwrap(), vec![TaskRecord::new("hw2", 7, None, None)]);
    // Readers holding the old snapshot still see the old sheet
    assert_eq!(old.sheet.records_for("ALICE").unwrap().len(), 1);
}

#[tokio::test]
async fn unsynced_registry_knows_nobody() {
    let registry = registry(&[("psi", PSI)]);

    assert!(registry.lookup("xnovak00").is_none());
    assert!(registry.sources().all(|s| s.synced_at().is_none()));
}
