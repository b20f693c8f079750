pub mod analysis;
pub mod error;
#[cfg(feature = "fetch")]
pub mod evaluate;
pub mod extract;
pub mod fetch;
pub mod issues;
pub mod lexical;
pub mod meta;
pub mod parse;
pub mod score;

pub use analysis::{PageReport, analyze_document};
#[cfg(feature = "fetch")]
pub use analysis::{AnalyzedPage, analyze_html};
pub use error::{Result, SeoscopeError};
#[cfg(feature = "fetch")]
pub use evaluate::{EvaluatorConfig, content_excerpt, evaluate_content};
pub use extract::extract_text;
pub use fetch::FetchConfig;
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{fetch_file, fetch_stdin};
pub use issues::{Issue, Severity, detect_issues};
pub use lexical::{KeywordCount, top_keywords, word_count};
pub use meta::{MetaTags, inspect_meta};
pub use parse::{Document, Element};
pub use score::compute_score;
