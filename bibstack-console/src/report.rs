//! Assembly of the pre-filled issue-tracker report.

use crate::build_info::BuildInfo;
use chrono::{DateTime, Utc};

/// Issue-tracker "new issue" endpoint for automatic bug reports.
pub const ISSUE_TRACKER_URL: &str = "https://github.com/BibStackApp/BibStack/issues/new";

/// Title prefix for automatic bug reports.
pub const ISSUE_TITLE_PREFIX: &str = "Automatic Bug Report-";

/// A pre-filled issue report: title, body, and the tracker URL carrying
/// both as query parameters.
///
/// Assembly is pure; the side effects (browser, clipboard) live in
/// [`ConsoleModel::report_issue`](crate::ConsoleModel::report_issue).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReport {
    title: String,
    body: String,
    url: String,
}

impl IssueReport {
    /// Builds the report for the given build metadata at the given instant.
    ///
    /// The title carries a 14-digit `yyyyMMddHHmmss` stamp; the body lists
    /// product, version, and host metadata, terminated by a blank line for
    /// the user's own text.
    #[must_use]
    pub fn new(info: &BuildInfo, at: DateTime<Utc>) -> Self {
        let title = format!("{ISSUE_TITLE_PREFIX}{}", at.format("%Y%m%d%H%M%S"));
        let body = format!(
            "{} {}\n{} {} {}\nRust {}\n\n",
            info.product, info.version, info.os, info.os_version, info.arch, info.rust_version
        );
        let url = format!(
            "{ISSUE_TRACKER_URL}?title={}&body={}",
            urlencoding::encode(&title),
            urlencoding::encode(&body)
        );
        Self { title, body, url }
    }

    /// The issue title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The issue body template.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The tracker URL with title and body pre-filled.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Wraps the joined log text in the collapsible block the user pastes into
/// the opened issue page.
#[must_use]
pub fn details_block(joined_messages: &str) -> String {
    format!(
        "<details>\n<summary>Detail information:</summary>\n\n```\n{joined_messages}\n```\n\n</details>"
    )
}
