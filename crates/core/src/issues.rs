//! Heuristic on-page issue detection.
//!
//! Four deterministic checks run in a fixed order, each contributing at
//! most one issue. The order is part of the output contract so callers
//! can assert on the list directly.

use serde::Serialize;

use crate::Document;

/// Text shorter than this many characters is flagged as thin content.
const MIN_CONTENT_CHARS: usize = 300;

/// How serious an issue is, both for display and as a scoring weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// A single detected issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub issue: String,
    pub description: String,
    pub severity: Severity,
}

impl Issue {
    fn new(issue: &str, description: String, severity: Severity) -> Self {
        Self { issue: issue.to_string(), description, severity }
    }
}

/// Runs the heuristic checks against a document.
///
/// Checks, in output order:
/// 1. plain text shorter than 300 characters (High)
/// 2. missing `<h1>` (High) or more than one `<h1>` (Medium)
/// 3. images with an explicitly empty `alt=""` attribute (Medium);
///    images with no `alt` attribute at all are not counted
/// 4. URL not starting with `https` (High)
pub fn detect_issues(doc: &Document, text: &str, url: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if text.chars().count() < MIN_CONTENT_CHARS {
        issues.push(Issue::new(
            "Content length is too short",
            format!("Page has only {} characters of text content", text.chars().count()),
            Severity::High,
        ));
    }

    let h1_count = doc.select("h1").map(|els| els.len()).unwrap_or(0);
    if h1_count == 0 {
        issues.push(Issue::new(
            "No H1 tag found",
            "Page should have exactly one H1 tag".to_string(),
            Severity::High,
        ));
    } else if h1_count > 1 {
        issues.push(Issue::new(
            "Multiple H1 tags found",
            format!("Page has {} H1 tags, expected one", h1_count),
            Severity::Medium,
        ));
    }

    let empty_alt_count = doc
        .select("img")
        .map(|els| {
            els.iter()
                .filter(|img| img.attr("alt").is_some_and(|alt| alt.is_empty()))
                .count()
        })
        .unwrap_or(0);
    if empty_alt_count > 0 {
        issues.push(Issue::new(
            "Images without alt text",
            format!("{} image(s) have an empty alt attribute", empty_alt_count),
            Severity::Medium,
        ));
    }

    if !url.starts_with("https") {
        issues.push(Issue::new(
            "Not using HTTPS",
            "Page is served over an insecure connection".to_string(),
            Severity::High,
        ));
    }

    issues
}
