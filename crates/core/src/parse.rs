//! HTML parsing and DOM queries.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and navigating the DOM tree using CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use seoscope_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let title = doc.title();
//! let paragraphs = doc.select("p.content").unwrap();
//! ```

use scraper::{Html, Selector};

use crate::{Result, SeoscopeError};

/// Represents a parsed HTML document.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors. Parsing is lenient: malformed markup is recovered
/// rather than rejected, so construction never fails.
///
/// The underlying tree uses scraper's `atomic` feature, so a Document is
/// `Send + Sync` and can be shared read-only across the analysis workers.
///
/// # Example
///
/// ```rust
/// use seoscope_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html);
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seoscope_core::parse::Document;
    ///
    /// let doc = Document::parse("<html><body><h1>Title</h1></body></html>");
    /// ```
    pub fn parse(html: &str) -> Self {
        let html = Html::parse_document(html);
        Self { html }
    }

    /// Selects elements using a CSS selector.
    ///
    /// Elements are returned in document order.
    ///
    /// # Arguments
    ///
    /// * `selector` - A CSS selector string (e.g., "p.content", "#main", "h1")
    ///
    /// # Errors
    ///
    /// Returns [`SeoscopeError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seoscope_core::parse::Document;
    ///
    /// let doc = Document::parse(r#"<p class="content">First</p><p class="content">Second</p>"#);
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| SeoscopeError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the title of the document.
    ///
    /// Returns the content of the first `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Gets all text content from the document.
    ///
    /// Returns every text node in the document, trimmed and joined with
    /// single spaces. Whitespace-only nodes are dropped.
    pub fn text_content(&self) -> String {
        self.html
            .root_element()
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A wrapper around scraper's ElementRef for easier DOM access.
///
/// Element represents a single node in the HTML document tree and provides
/// methods for accessing its attributes and text content.
///
/// # Example
///
/// ```rust
/// use seoscope_core::parse::Document;
///
/// let doc = Document::parse(r#"<a href="https://example.com">Link text</a>"#);
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "Link text");
/// assert_eq!(link.attr("href"), Some("https://example.com"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    ///
    /// # Arguments
    ///
    /// * `name` - The attribute name (e.g., "href", "content", "alt")
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Gets the tag name of this element.
    ///
    /// Returns the lowercase tag name (e.g., "div", "meta", "img").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }
}
