//! URL normalization and metadata extraction.

use crate::core::error::{Error, Result};
use crate::core::types::UrlMetadata;
use url::Url;

/// Query parameters stripped during normalization.
const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "ref",
    "source",
];

/// Normalize a raw URL string.
///
/// Prepends `https://` when no scheme prefix is present, then strips the
/// fixed set of tracking parameters. Fails with [`Error::InvalidUrl`] when
/// the string cannot be parsed even after scheme normalization.
pub fn normalize(input: &str) -> Result<Url> {
    let with_scheme = if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let mut url = Url::parse(&with_scheme).map_err(|e| Error::invalid_url(input, e))?;
    strip_tracking_params(&mut url);
    Ok(url)
}

fn strip_tracking_params(url: &mut Url) {
    if url.query().is_none() {
        return;
    }

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if retained.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(retained);
    }
}

/// Extract structural metadata from a normalized URL.
pub fn extract(url: &Url) -> UrlMetadata {
    let domain = url.host_str().unwrap_or("").to_string();
    let labels: Vec<&str> = domain.split('.').collect();
    let tld = format!(".{}", labels.last().copied().unwrap_or(""));
    let subdomain_count = labels.len().saturating_sub(2) as u32;

    UrlMetadata {
        domain,
        tld,
        subdomain_count,
        path: url.path().to_string(),
        query_params: url.query_pairs().map(|(key, _)| key.into_owned()).collect(),
        protocol: format!("{}:", url.scheme()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_prepended() {
        let url = normalize("example.com/path").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_existing_scheme_kept() {
        let url = normalize("http://example.com").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = normalize("http://").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_tracking_params_stripped() {
        let url = normalize("https://example.com/page?utm_source=mail&id=7&ref=x").unwrap();
        assert_eq!(url.query(), Some("id=7"));
    }

    #[test]
    fn test_all_params_stripped_drops_query() {
        let url = normalize("https://example.com/page?utm_source=mail&utm_medium=cpc").unwrap();
        assert_eq!(url.query(), None);
        assert!(!url.as_str().contains('?'));
    }

    #[test]
    fn test_metadata_basic() {
        let url = normalize("https://mail.login.example.co/inbox?id=1").unwrap();
        let meta = extract(&url);
        assert_eq!(meta.domain, "mail.login.example.co");
        assert_eq!(meta.tld, ".co");
        assert_eq!(meta.subdomain_count, 2);
        assert_eq!(meta.path, "/inbox");
        assert_eq!(meta.query_params, vec!["id"]);
        assert_eq!(meta.protocol, "https:");
    }

    #[test]
    fn test_metadata_bare_domain() {
        let url = normalize("example.com").unwrap();
        let meta = extract(&url);
        assert_eq!(meta.subdomain_count, 0);
        assert_eq!(meta.path, "/");
        assert!(meta.query_params.is_empty());
    }

    #[test]
    fn test_metadata_ip_host() {
        let url = normalize("http://192.168.10.1/admin").unwrap();
        let meta = extract(&url);
        assert_eq!(meta.domain, "192.168.10.1");
        // Dotted-quad labels count like any other host
        assert_eq!(meta.subdomain_count, 2);
    }
}
