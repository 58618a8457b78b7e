use bibstack_console::{details_block, BuildInfo, IssueReport, ISSUE_TITLE_PREFIX, ISSUE_TRACKER_URL};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn info() -> BuildInfo {
    BuildInfo::new("BibStack", "1.8.1")
        .with_os_version("15.1")
        .with_rust_version("1.91.0")
}

// ── Title ────────────────────────────────────────────────────────

#[test]
fn title_is_prefix_plus_fourteen_digit_stamp() {
    let at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 34, 56).unwrap();
    let report = IssueReport::new(&info(), at);
    assert_eq!(report.title(), "Automatic Bug Report-20260806123456");
}

#[test]
fn title_stamp_is_always_fourteen_digits() {
    // Single-digit month, day, hour, minute, second must all be padded.
    let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let report = IssueReport::new(&info(), at);

    let stamp = report.title().strip_prefix(ISSUE_TITLE_PREFIX).unwrap();
    assert_eq!(stamp.len(), 14);
    assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(stamp, "20260102030405");
}

// ── Body ─────────────────────────────────────────────────────────

#[test]
fn body_lists_product_and_host_metadata() {
    let at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    let report = IssueReport::new(&info(), at);

    assert!(report.body().starts_with("BibStack 1.8.1\n"));
    assert!(report.body().contains("1.8.1"));
    assert!(report.body().contains(std::env::consts::OS));
    assert!(report.body().contains(std::env::consts::ARCH));
    assert!(report.body().contains("Rust 1.91.0"));
}

#[test]
fn body_ends_with_blank_line() {
    let at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
    let report = IssueReport::new(&info(), at);
    assert!(report.body().ends_with("\n\n"));
}

// ── URL ──────────────────────────────────────────────────────────

#[test]
fn url_points_at_tracker_with_both_parameters() {
    let at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 34, 56).unwrap();
    let report = IssueReport::new(&info(), at);

    assert!(report
        .url()
        .starts_with(&format!("{ISSUE_TRACKER_URL}?title=")));
    assert!(report.url().contains("&body="));
    assert!(report
        .url()
        .contains("title=Automatic%20Bug%20Report-20260806123456"));
}

#[test]
fn url_has_no_raw_whitespace() {
    let at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 34, 56).unwrap();
    let report = IssueReport::new(&info(), at);
    assert!(!report.url().contains(' '));
    assert!(!report.url().contains('\n'));
}

// ── Details block ────────────────────────────────────────────────

#[test]
fn details_block_wraps_messages_in_collapsible_fence() {
    let block = details_block("line one\nline two");
    assert_eq!(
        block,
        "<details>\n<summary>Detail information:</summary>\n\n```\nline one\nline two\n```\n\n</details>"
    );
}

#[test]
fn details_block_with_empty_log() {
    let block = details_block("");
    assert!(block.starts_with("<details>\n<summary>Detail information:</summary>"));
    assert!(block.ends_with("</details>"));
}
