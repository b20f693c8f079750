//! Plain-text extraction from a parsed document.
//!
//! The analyzer works over the visible prose of a page, not its markup.
//! Extraction favors headings and paragraphs; documents that carry their
//! text elsewhere fall back to a whole-document text walk.

use crate::Document;

/// Selector matching the elements that carry a page's prose.
const PROSE_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p";

/// Extracts plain text from a document for analysis.
///
/// Concatenates the text content of all heading (`h1`-`h6`) and paragraph
/// elements in document order, separated by single spaces. If the document
/// has no such elements, falls back to every stripped text node in the
/// document, space-joined.
///
/// The result is never null: a document with no text at all yields an
/// empty string.
///
/// # Example
///
/// ```rust
/// use seoscope_core::{Document, extract_text};
///
/// let doc = Document::parse("<h1>Title</h1><p>Body text.</p>");
/// assert_eq!(extract_text(&doc), "Title Body text.");
/// ```
pub fn extract_text(doc: &Document) -> String {
    let from_prose = doc
        .select(PROSE_SELECTOR)
        .map(|elements| {
            elements
                .iter()
                .map(|el| el.text().trim().to_string())
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    if from_prose.is_empty() { doc.text_content() } else { from_prose }
}
