//! Parses an HTML byte stream and yields the canonical absolute URLs
//! that should be followed from the enclosing page.

use crate::url_util::canonicalize_href;
use select::document::Document;
use select::predicate::Name;

/// Extracts followable links from `body`, resolved against
/// `page_scheme_host` (e.g. `"https://example.com"`, no trailing slash,
/// no path).
///
/// Returns an empty vector if the body cannot be parsed as HTML -- this
/// is non-fatal; the caller's own Result still reports success, only
/// expansion is skipped.
pub fn extract_links(body: &str, page_scheme_host: &str) -> Vec<String> {
    let document = Document::from(body);

    document
        .find(Name("a"))
        .filter_map(|node| node.attr("href"))
        .filter_map(|href| {
            let canonical = canonicalize_href(href, page_scheme_host);
            if canonical.is_none() && href.starts_with("//") {
                log::debug!("skipping protocol-relative link: {}", href);
            }
            canonical
        })
        .collect()
}
