//! Title and meta tag inspection.

use serde::Serialize;

use crate::Document;

/// The meta tags the analyzer cares about.
///
/// `title` is the text of the first `<title>` element. `description` and
/// `keywords` come from `<meta name=...>` elements; a tag whose `content`
/// attribute is missing records an empty string, which still counts as
/// present for scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaTags {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

/// Inspects a document's title and meta tags.
///
/// `<meta>` elements are processed in document order and later occurrences
/// overwrite earlier ones, so a duplicated `description` resolves to the
/// last value in the document. The `name` attribute is matched
/// case-insensitively.
pub fn inspect_meta(doc: &Document) -> MetaTags {
    let mut tags = MetaTags { title: doc.title(), ..Default::default() };

    if let Ok(elements) = doc.select("meta") {
        for el in &elements {
            let Some(name) = el.attr("name") else { continue };
            let content = el.attr("content").unwrap_or("").to_string();

            match name.to_lowercase().as_str() {
                "description" => tags.description = Some(content),
                "keywords" => tags.keywords = Some(content),
                _ => {}
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_full_head() {
        let doc = Document::parse(
            r#"
            <html><head>
                <title>Page Title</title>
                <meta name="description" content="A description.">
                <meta name="keywords" content="one, two">
            </head><body></body></html>
        "#,
        );
        let tags = inspect_meta(&doc);

        assert_eq!(tags.title, Some("Page Title".to_string()));
        assert_eq!(tags.description, Some("A description.".to_string()));
        assert_eq!(tags.keywords, Some("one, two".to_string()));
    }

    #[test]
    fn test_missing_tags_are_absent() {
        let doc = Document::parse("<html><body><p>no head to speak of</p></body></html>");
        let tags = inspect_meta(&doc);

        assert_eq!(tags.title, None);
        assert_eq!(tags.description, None);
        assert_eq!(tags.keywords, None);
    }

    #[test]
    fn test_duplicate_description_last_wins() {
        let doc = Document::parse(
            r#"
            <head>
                <meta name="description" content="first">
                <meta name="description" content="second">
            </head>
        "#,
        );
        let tags = inspect_meta(&doc);
        assert_eq!(tags.description, Some("second".to_string()));
    }

    #[test]
    fn test_name_attribute_case_insensitive() {
        let doc = Document::parse(r#"<head><meta name="Description" content="cased"></head>"#);
        let tags = inspect_meta(&doc);
        assert_eq!(tags.description, Some("cased".to_string()));
    }

    #[test]
    fn test_missing_content_records_empty_string() {
        let doc = Document::parse(r#"<head><meta name="keywords"></head>"#);
        let tags = inspect_meta(&doc);
        assert_eq!(tags.keywords, Some(String::new()));
    }

    #[test]
    fn test_unrelated_meta_ignored() {
        let doc = Document::parse(r#"<head><meta name="viewport" content="width=device-width"></head>"#);
        let tags = inspect_meta(&doc);
        assert_eq!(tags, MetaTags::default());
    }
}
