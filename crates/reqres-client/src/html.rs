// crates/reqres-client/src/html.rs
// ============================================================================
// Module: HTML Error Page Parsing
// Description: Extraction of title and body text from service error pages.
// Purpose: Assert on the HTML document returned for malformed request bodies.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The service answers malformed request bodies with an Express-style HTML
//! document instead of JSON: the error name sits in `<title>` and the message
//! in `<pre>`. The parser scans for exactly those two elements; it is not a
//! general HTML parser and does not need to be, since the page shape is fixed
//! by the upstream framework.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Error page parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlParseError {
    /// A required element was not found in the document.
    #[error("html element <{element}> not found in error page")]
    MissingElement {
        /// Name of the missing element.
        element: String,
    },
}

// ============================================================================
// SECTION: Types
// ============================================================================

/// Parsed service error page.
///
/// # Invariants
/// - Fields hold entity-decoded, whitespace-trimmed element text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    /// Text of the `<title>` element.
    pub title: String,
    /// Text of the `<pre>` element.
    pub message: String,
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a service error page, extracting the title and message text.
///
/// # Errors
///
/// Returns [`HtmlParseError::MissingElement`] when the document lacks a
/// `<title>` or `<pre>` element.
pub fn parse_error_page(document: &str) -> Result<ErrorPage, HtmlParseError> {
    let title = element_text(document, "title").ok_or_else(|| HtmlParseError::MissingElement {
        element: "title".to_owned(),
    })?;
    let message = element_text(document, "pre").ok_or_else(|| HtmlParseError::MissingElement {
        element: "pre".to_owned(),
    })?;
    Ok(ErrorPage {
        title,
        message,
    })
}

/// Extracts the inner text of the first complete `tag` element.
///
/// Matching is ASCII case-insensitive and tolerates attributes on the opening
/// tag. `tag` must be lowercase.
fn element_text(document: &str, tag: &str) -> Option<String> {
    let lower = document.to_ascii_lowercase();
    let open_prefix = format!("<{tag}");
    let mut search_from = 0;
    let open_idx = loop {
        let idx = lower[search_from..].find(&open_prefix)? + search_from;
        let boundary = idx + open_prefix.len();
        match lower.as_bytes().get(boundary) {
            Some(b'>' | b' ' | b'\t' | b'\r' | b'\n' | b'/') => break idx,
            _ => search_from = boundary,
        }
    };
    let content_start = lower[open_idx..].find('>')? + open_idx + 1;
    let close_tag = format!("</{tag}");
    let close_idx = lower[content_start..].find(&close_tag)? + content_start;
    Some(decode_entities(&document[content_start..close_idx]).trim().to_owned())
}

/// Decodes the named entities the upstream framework emits.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

// ============================================================================
// SECTION: Tests
// ============================================================================
