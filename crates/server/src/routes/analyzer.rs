//! The analyzer endpoint: GET /analyzer?url=...

use axum::{
    extract::{Query, State},
    response::Json,
};
use seoscope_core::{PageReport, analyze_html, content_excerpt, evaluate_content, fetch_url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::Result;
use crate::server::AppState;

/// Query parameters for the analyzer endpoint.
#[derive(Debug, Deserialize)]
pub struct AnalyzerParams {
    url: String,
}

/// The complete analyzer response: on-page metrics plus the best-effort
/// content evaluation.
#[derive(Debug, Serialize)]
pub struct AnalyzerResponse {
    #[serde(flatten)]
    report: PageReport,
    content_evaluation: Value,
}

/// GET /analyzer - fetch a page, analyze it, and evaluate its content.
///
/// The page fetch and the on-page analysis are load-bearing: any failure
/// there fails the request. The content evaluation is best-effort and
/// degrades to an inline error object, so the core metrics are always
/// returned when the page was fetchable.
pub async fn analyze_page(
    State(state): State<AppState>,
    Query(params): Query<AnalyzerParams>,
) -> Result<Json<AnalyzerResponse>> {
    let url = params.url;

    let html = fetch_url(&url, &state.fetch).await.inspect_err(|e| {
        warn!(url = %url, error = %e, "page fetch failed");
    })?;

    let analyzed = analyze_html(&html, &url).await.inspect_err(|e| {
        warn!(url = %url, error = %e, "analysis failed");
    })?;

    let excerpt = content_excerpt(&analyzed.text);
    let content_evaluation = evaluate_content(&state.evaluator, excerpt, &url).await;

    info!(
        url = %url,
        score = analyzed.report.seo_score,
        issues = analyzed.report.seo_issues.len(),
        "analysis complete"
    );

    Ok(Json(AnalyzerResponse { report: analyzed.report, content_evaluation }))
}
