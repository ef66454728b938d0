//! Canonical URL handling.
//!
//! The Visited Set, and every probe, key on the string produced here --
//! never on a raw `href` attribute.

use url::Url;

/// The `(scheme, host)` pair that fences recursion to one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameHost {
    pub scheme: String,
    pub host: String,
}

impl SameHost {
    pub fn matches(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => {
                parsed.scheme() == self.scheme && parsed.host_str() == Some(self.host.as_str())
            }
            Err(_) => false,
        }
    }
}

/// Parses a seed or absolute URL and checks it carries a non-empty scheme
/// and host.
pub fn parse_validated(raw: &str) -> Result<Url, crate::Error> {
    if raw.trim().is_empty() {
        return Err(crate::Error::EmptySeed(raw.to_string()));
    }
    let url = Url::parse(raw).map_err(|e| crate::Error::InvalidSeed(raw.to_string(), e))?;
    if url.host_str().is_none() || url.scheme().is_empty() {
        return Err(crate::Error::MissingHost(raw.to_string()));
    }
    Ok(url)
}

pub fn same_host_of(url: &Url) -> SameHost {
    SameHost {
        scheme: url.scheme().to_string(),
        host: url.host_str().unwrap_or_default().to_string(),
    }
}

/// Resolves an `href` found on `page_url` into a canonical absolute URL.
/// Returns `None` for anything that should not be followed
/// (protocol-relative, non-absolute, unparseable).
pub fn canonicalize_href(href: &str, page_scheme_host: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    if href.starts_with("//") {
        return None;
    }
    if let Some(rest) = href.strip_prefix('/') {
        let trimmed = rest.strip_suffix('/').unwrap_or(rest);
        return Some(format!("{}/{}", page_scheme_host, trimmed));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_passes_through() {
        assert_eq!(
            canonicalize_href("https://example.com/a", "https://seed.example"),
            Some("https://example.com/a".to_string())
        );
    }

    #[test]
    fn root_relative_joins_and_strips_trailing_slash() {
        assert_eq!(
            canonicalize_href("/docs/", "https://seed.example"),
            Some("https://seed.example/docs".to_string())
        );
    }

    #[test]
    fn protocol_relative_is_skipped() {
        assert_eq!(canonicalize_href("//cdn.example/x", "https://seed.example"), None);
    }

    #[test]
    fn anchor_only_is_skipped() {
        assert_eq!(canonicalize_href("#section", "https://seed.example"), None);
    }

    #[test]
    fn mailto_is_skipped() {
        assert_eq!(
            canonicalize_href("mailto:a@example.com", "https://seed.example"),
            None
        );
    }

    #[test]
    fn validated_seed_rejects_empty() {
        assert!(parse_validated("").is_err());
    }

    #[test]
    fn validated_seed_rejects_schemeless() {
        assert!(parse_validated("example.com/foo").is_err());
    }

    #[test]
    fn validated_seed_accepts_absolute() {
        assert!(parse_validated("https://example.com").is_ok());
    }

    #[test]
    fn same_host_matches_scheme_and_host() {
        let u = parse_validated("https://example.com/a").unwrap();
        let sh = same_host_of(&u);
        assert!(sh.matches("https://example.com/other"));
        assert!(!sh.matches("http://example.com/other"));
        assert!(!sh.matches("https://other.com/"));
    }
}
