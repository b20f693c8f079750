//! Whole-page analysis: one report from one document.
//!
//! This module ties the independent analyses together. The concurrent
//! entry point parses once, extracts text, then fans the four analyses
//! out as short-lived blocking workers sharing the parsed tree read-only;
//! all four complete before the score is computed.

use serde::Serialize;

use crate::issues::{Issue, detect_issues};
use crate::lexical::{KeywordCount, top_keywords, word_count};
use crate::meta::{MetaTags, inspect_meta};
use crate::score::compute_score;
use crate::{Document, extract_text};

/// The complete analysis of one page.
///
/// Every field is derived fresh from the fetched markup; nothing is
/// cached or carried across requests.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    /// The analyzed URL.
    pub url: String,

    /// Total word count of the extracted text.
    pub word_count: usize,

    /// Top keywords by occurrence, descending.
    pub keywords: Vec<KeywordCount>,

    /// Title and description/keywords meta tags.
    pub meta_tags: MetaTags,

    /// Detected issues in fixed check order.
    pub seo_issues: Vec<Issue>,

    /// Weighted 0-100 score.
    pub seo_score: u32,
}

/// Analyzes an already-parsed document sequentially.
///
/// Library entry point for offline callers; the same pipeline as
/// [`analyze_html`] without the fan-out.
pub fn analyze_document(doc: &Document, url: &str) -> PageReport {
    let text = extract_text(doc);

    let word_count = word_count(&text);
    let keywords = top_keywords(&text);
    let meta_tags = inspect_meta(doc);
    let seo_issues = detect_issues(doc, &text, url);

    let seo_score = compute_score(&seo_issues, word_count, &meta_tags);

    PageReport {
        url: url.to_string(),
        word_count,
        keywords,
        meta_tags,
        seo_issues,
        seo_score,
    }
}

/// A report together with the plain text it was derived from.
///
/// The text is retained so callers can take the content-quality excerpt
/// without re-extracting it.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct AnalyzedPage {
    pub report: PageReport,
    pub text: String,
}

/// Parses markup and analyzes it with the four analyses run concurrently.
///
/// The word count, keyword table, meta inspection, and issue detection
/// are independent pure computations over the parsed tree and extracted
/// text, so they run as four blocking worker tasks joined together. The
/// workers only read request-scoped immutable inputs; no locking is
/// involved. The score is computed after all four complete.
///
/// # Errors
///
/// Returns [`SeoscopeError::TaskFailed`] if a worker task is cancelled or
/// panics. Parsing itself is lenient and does not fail.
///
/// [`SeoscopeError::TaskFailed`]: crate::SeoscopeError::TaskFailed
#[cfg(feature = "fetch")]
pub async fn analyze_html(html: &str, url: &str) -> crate::Result<AnalyzedPage> {
    use std::sync::Arc;

    use tokio::task::spawn_blocking;

    use crate::SeoscopeError;

    fn task_failed(e: tokio::task::JoinError) -> SeoscopeError {
        SeoscopeError::TaskFailed(e.to_string())
    }

    let doc = Arc::new(Document::parse(html));
    let text: Arc<str> = Arc::from(extract_text(&doc));
    let url = url.to_string();

    let (words, keywords, meta_tags, seo_issues) = tokio::join!(
        spawn_blocking({
            let text = Arc::clone(&text);
            move || word_count(&text)
        }),
        spawn_blocking({
            let text = Arc::clone(&text);
            move || top_keywords(&text)
        }),
        spawn_blocking({
            let doc = Arc::clone(&doc);
            move || inspect_meta(&doc)
        }),
        spawn_blocking({
            let doc = Arc::clone(&doc);
            let text = Arc::clone(&text);
            let url = url.clone();
            move || detect_issues(&doc, &text, &url)
        }),
    );

    let words = words.map_err(task_failed)?;
    let keywords = keywords.map_err(task_failed)?;
    let meta_tags = meta_tags.map_err(task_failed)?;
    let seo_issues = seo_issues.map_err(task_failed)?;

    let seo_score = compute_score(&seo_issues, words, &meta_tags);

    Ok(AnalyzedPage {
        report: PageReport {
            url,
            word_count: words,
            keywords,
            meta_tags,
            seo_issues,
            seo_score,
        },
        text: text.to_string(),
    })
}
