//! Weighted SEO score.

use crate::issues::{Issue, Severity};
use crate::meta::MetaTags;

/// Penalty per issue by severity.
fn issue_penalty(severity: Severity) -> i32 {
    match severity {
        Severity::High => 10,
        Severity::Medium => 5,
        Severity::Low => 2,
    }
}

/// Combines issues, word count, and meta tag presence into a 0-100 score.
///
/// Starts from 100 and subtracts: 10/5/2 per High/Medium/Low issue, 10 for
/// fewer than 300 words (5 for fewer than 600), 10 for a missing
/// `description` meta tag, and 5 for missing `keywords`. Clamped at 0.
/// A meta tag recorded with an empty string counts as present.
///
/// Pure function: same inputs, same score.
pub fn compute_score(issues: &[Issue], word_count: usize, meta_tags: &MetaTags) -> u32 {
    let mut score: i32 = 100;

    for issue in issues {
        score -= issue_penalty(issue.severity);
    }

    if word_count < 300 {
        score -= 10;
    } else if word_count < 600 {
        score -= 5;
    }

    if meta_tags.description.is_none() {
        score -= 10;
    }
    if meta_tags.keywords.is_none() {
        score -= 5;
    }

    score.max(0) as u32
}
