//! Content quality evaluation through an external chat-completion API.
//!
//! The evaluator sends a text excerpt to OpenRouter and relays the model's
//! structured verdict. It is strictly best-effort: every failure mode is
//! converted into an inline error object, so a broken or unreachable LLM
//! never fails the page analysis that carries it.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Fixed error label for every evaluator failure.
const ERROR_LABEL: &str = "Failed to evaluate content quality";

/// Default chat-completion endpoint.
const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model used for content evaluation.
const DEFAULT_MODEL: &str = "nousresearch/hermes-3-llama-3.1-405b";

/// How much of the page text is sent for evaluation, in characters.
const EXCERPT_CHARS: usize = 1000;

const SYSTEM_PROMPT: &str = "You are an SEO content quality evaluator. \
    Assess the provided page text for search-engine and reader value.";

/// Configuration for the content quality evaluator.
///
/// The endpoint and model are configurable so tests can point the
/// evaluator at a local stub; production callers use the defaults.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// OpenRouter API key. When absent, evaluation short-circuits to an
    /// error object without a network call.
    pub api_key: Option<String>,
    /// Application name sent as the `X-Title` header.
    pub app_name: String,
    /// Chat-completion endpoint URL.
    pub endpoint: String,
    /// Model identifier.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            app_name: "seoscope".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: 30,
        }
    }
}

impl EvaluatorConfig {
    /// Builds a config from the process environment.
    ///
    /// Reads `OPENROUTER_API_KEY` and `YOUR_APP_NAME`. A missing key is
    /// not an error here; the server logs it at startup and the first
    /// evaluation reports it inline.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENROUTER_API_KEY").ok(),
            app_name: env::var("YOUR_APP_NAME").unwrap_or_else(|_| "seoscope".to_string()),
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Takes the leading evaluation excerpt of a page's text.
///
/// Truncates to 1000 characters on a character boundary; shorter texts
/// pass through whole.
pub fn content_excerpt(text: &str) -> &str {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

fn error_value(details: impl Into<String>) -> Value {
    json!({ "error": ERROR_LABEL, "details": details.into() })
}

fn user_prompt(excerpt: &str) -> String {
    format!(
        "Evaluate the following page content for SEO quality. Score readability, \
         relevance, and engagement from 0 to 10 each, give an overall score from \
         0 to 100, and list concrete improvement suggestions. Reply with a JSON \
         object only, using the keys \"readability\", \"relevance\", \
         \"engagement\", \"overall_score\", and \"suggestions\".\n\n\
         Content:\n{excerpt}"
    )
}

/// Evaluates a content excerpt via the configured chat-completion API.
///
/// Returns the model's verdict parsed as structured data, or an error
/// object `{"error": ..., "details": ...}`. This function never returns
/// `Err` and never panics past its boundary; the caller always receives a
/// usable value.
pub async fn evaluate_content(config: &EvaluatorConfig, excerpt: &str, url: &str) -> Value {
    let Some(api_key) = &config.api_key else {
        return error_value("OPENROUTER_API_KEY is not set");
    };

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
    {
        Ok(client) => client,
        Err(e) => return error_value(format!("failed to build HTTP client: {e}")),
    };

    let body = ChatRequest {
        model: &config.model,
        messages: vec![
            ChatMessage { role: "system", content: SYSTEM_PROMPT.to_string() },
            ChatMessage { role: "user", content: user_prompt(excerpt) },
        ],
    };

    let response = match client
        .post(config.endpoint.as_str())
        .header("Authorization", format!("Bearer {api_key}"))
        .header("HTTP-Referer", url)
        .header("X-Title", &config.app_name)
        .json(&body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return error_value(format!("request failed: {e}")),
    };

    let status = response.status();
    if !status.is_success() {
        return error_value(format!("evaluation API returned HTTP status {}", status.as_u16()));
    }

    let envelope: ChatResponse = match response.json().await {
        Ok(envelope) => envelope,
        Err(e) => return error_value(format!("malformed response envelope: {e}")),
    };

    let Some(choice) = envelope.choices.first() else {
        return error_value("response contained no choices");
    };

    match serde_json::from_str::<Value>(&choice.message.content) {
        Ok(verdict) => verdict,
        Err(e) => error_value(format!("model reply was not valid JSON: {e}")),
    }
}
