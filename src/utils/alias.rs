//! Alias policy for caller-chosen and URL-derived aliases.
//!
//! Auto-generated aliases come from [`crate::utils::base62`] and only need the
//! [`is_reserved`] check.
//! Everything else passes through [`validate_alias`] before it reaches storage.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Maximum alias length accepted from callers.
pub const MAX_ALIAS_LEN: usize = 64;

/// Aliases that would shadow service routes.
const RESERVED_ALIASES: &[&str] = &["health", "shortenUrl", "customShortenUrl"];

/// RFC 3986 unreserved characters.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").expect("alias regex is valid"));

/// Derives the default alias from the last non-empty `/`-separated segment of a URL.
///
/// Returns `None` when the URL has no non-empty segment.
///
/// # Examples
///
/// ```
/// use alias_shortener::utils::alias::alias_from_url;
///
/// assert_eq!(alias_from_url("https://example.com/docs/intro"), Some("intro"));
/// assert_eq!(alias_from_url("https://example.com/docs/"), Some("docs"));
/// assert_eq!(alias_from_url("///"), None);
/// ```
pub fn alias_from_url(url: &str) -> Option<&str> {
    url.split('/').rev().find(|segment| !segment.is_empty())
}

/// Validates an alias chosen by a caller or derived from a URL.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `.`, `_`, `~`, `-`
/// - Cannot be `.` or `..`
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LEN {
        return Err(AppError::bad_request(
            format!("Alias must be 1-{MAX_ALIAS_LEN} characters"),
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Alias can only contain letters, digits, '.', '_', '~' and '-'",
            json!({ "alias": alias }),
        ));
    }

    if alias == "." || alias == ".." {
        return Err(AppError::bad_request(
            "Alias cannot be a dot segment",
            json!({ "alias": alias }),
        ));
    }

    if is_reserved(alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

/// Returns true if `alias` would be shadowed by a service route.
pub fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

/// Joins a short domain and an alias into a shortened reference.
pub fn join_short_url(domain: &str, alias: &str) -> String {
    format!("{}/{}", domain.trim_end_matches('/'), alias)
}

/// Reduces a lookup token to a bare alias.
///
/// Tokens that are full shortened URLs on `default_domain` are stripped down to
/// their alias; anything else is returned unchanged.
pub fn canonical_alias<'a>(token: &'a str, default_domain: &str) -> &'a str {
    let prefix = default_domain.trim_end_matches('/');
    token
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_from_url_takes_last_segment() {
        assert_eq!(alias_from_url("https://example.com/b"), Some("b"));
        assert_eq!(
            alias_from_url("https://example.com/blog/post.html"),
            Some("post.html")
        );
    }

    #[test]
    fn test_alias_from_url_skips_trailing_slashes() {
        assert_eq!(alias_from_url("https://example.com/blog//"), Some("blog"));
        assert_eq!(alias_from_url("https://example.com/"), Some("example.com"));
    }

    #[test]
    fn test_alias_from_url_without_segments() {
        assert_eq!(alias_from_url(""), None);
        assert_eq!(alias_from_url("/"), None);
    }

    #[test]
    fn test_validate_accepts_common_aliases() {
        for alias in ["promo", "4c93", "my-link", "release_2.0", "a~b", "x"] {
            assert!(validate_alias(alias).is_ok(), "{alias} should be valid");
        }
    }

    #[test]
    fn test_validate_rejects_empty() {
        let err = validate_alias("").unwrap_err();
        assert!(err.to_string().contains("1-64 characters"));
    }

    #[test]
    fn test_validate_rejects_too_long() {
        let alias = "a".repeat(MAX_ALIAS_LEN + 1);
        assert!(validate_alias(&alias).is_err());
        assert!(validate_alias(&alias[..MAX_ALIAS_LEN]).is_ok());
    }

    #[test]
    fn test_validate_rejects_reserved_characters() {
        for alias in ["page?x=1", "a/b", "with space", "hash#tag", "ünï"] {
            let err = validate_alias(alias).unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }), "{alias}");
        }
    }

    #[test]
    fn test_validate_rejects_dot_segments() {
        assert!(validate_alias(".").is_err());
        assert!(validate_alias("..").is_err());
    }

    #[test]
    fn test_validate_all_reserved_aliases() {
        for &reserved in RESERVED_ALIASES {
            assert!(
                validate_alias(reserved).is_err(),
                "Reserved alias '{}' should be invalid",
                reserved
            );
        }
    }

    #[test]
    fn test_join_short_url() {
        assert_eq!(join_short_url("http://short.ly", "promo"), "http://short.ly/promo");
        assert_eq!(join_short_url("https://go.acme.io/", "x"), "https://go.acme.io/x");
    }

    #[test]
    fn test_canonical_alias_strips_default_domain() {
        assert_eq!(canonical_alias("http://short.ly/4c93", "http://short.ly"), "4c93");
        assert_eq!(canonical_alias("http://short.ly/4c93", "http://short.ly/"), "4c93");
    }

    #[test]
    fn test_canonical_alias_keeps_bare_alias() {
        assert_eq!(canonical_alias("promo", "http://short.ly"), "promo");
        assert_eq!(canonical_alias("http://short.ly/", "http://short.ly"), "http://short.ly/");
        assert_eq!(
            canonical_alias("https://other.io/promo", "http://short.ly"),
            "https://other.io/promo"
        );
    }
}
