//! Classification of URL and domain strings.
//!
//! Every function here is total: malformed input yields `false`, never an
//! error. Callers that need a loud failure use the extractors in
//! [`crate::compose`] instead.

use crate::decode::decode_url;
use crate::patterns::{DOMAIN_PATTERN, IPV4_PATTERN, URL_PATTERN};
use crate::types::UriParts;

/// Check whether `s` is shaped like a dotted-quad IPv4 literal.
///
/// Syntactic only: groups are 0-3 digits with no 0-255 bounding, and the
/// separator matches any character, so `999.999.999.999` passes.
///
/// # Examples
///
/// ```
/// use urlkit::is_string_ipv4;
///
/// assert!(is_string_ipv4("255.0.12.123"));
/// assert!(!is_string_ipv4("2333.123.12.1"));
/// ```
pub fn is_string_ipv4(s: &str) -> bool {
    IPV4_PATTERN.is_match(s)
}

/// Check whether `s` is a valid domain name.
///
/// A candidate whose last dot-separated label parses as an integer is
/// rejected up front; that catches bare IPs and zone-only fragments.
/// Otherwise the domain pattern applies: case-insensitive, Unicode-aware
/// (non-ASCII labels are accepted directly, no IDNA conversion here), or
/// the literal `localhost`.
///
/// # Examples
///
/// ```
/// use urlkit::is_string_domain;
///
/// assert!(is_string_domain("www.en.hello.world.co.uk"));
/// assert!(is_string_domain("привет.рф"));
/// assert!(is_string_domain("localhost"));
/// assert!(!is_string_domain("127.0.0.1"));
/// assert!(!is_string_domain("gooooogle.com/"));
/// ```
pub fn is_string_domain(s: &str) -> bool {
    if parses_as_integer(last_label(s)) {
        return false;
    }
    DOMAIN_PATTERN.is_match(s)
}

/// Check whether `url` is a valid URL in formal terms.
///
/// The candidate is first run through [`decode_url`] so that an
/// internationalized host is judged in its ASCII-Compatible form, then
/// matched against the URL pattern: explicit `http`/`https`/`ftp`/`ftps`
/// scheme, a real host, optional port, optional path or query. Unknown
/// schemes (`chrome://...`) and hosts with stray spaces are rejected.
///
/// # Examples
///
/// ```
/// use urlkit::is_string_url;
///
/// assert!(is_string_url("http://localhost"));
/// assert!(is_string_url("http://привет.рф/"));
/// assert!(!is_string_url("chrome://hello.com/"));
/// assert!(!is_string_url("test.com/test/test"));
/// ```
pub fn is_string_url(url: &str) -> bool {
    URL_PATTERN.is_match(&decode_url(url))
}

/// Check whether `s` is either a valid URL or a valid domain.
pub fn is_url_or_domain_valid(s: &str) -> bool {
    is_string_url(s) || is_string_domain(s)
}

/// Check whether `url` names exactly a domain and nothing more.
///
/// True iff `url` is a valid URL, its authority is itself a valid domain,
/// its path is empty or `/`, and it carries no query string.
///
/// # Examples
///
/// ```
/// use urlkit::is_url_domain;
///
/// assert!(is_url_domain("http://i.ua/"));
/// assert!(!is_url_domain("http://привет.рф?t=5"));
/// ```
pub fn is_url_domain(url: &str) -> bool {
    if !is_string_url(url) {
        return false;
    }

    let parts = UriParts::parse(url);
    if !is_string_domain(parts.netloc) {
        return false;
    }

    (parts.path.is_empty() || parts.path == "/") && parts.query.is_empty()
}

fn last_label(s: &str) -> &str {
    s.rsplit('.').next().unwrap_or(s)
}

/// Integer in the loose sense: optional sign, ASCII digits, surrounding
/// whitespace tolerated, any length (no numeric-overflow cliff).
fn parses_as_integer(label: &str) -> bool {
    let trimmed = label.trim();
    let digits = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_last_label_rejected() {
        assert!(!is_string_domain("gooooogle.45"));
        assert!(!is_string_domain("127.0.0.1"));
        // Longer than any machine integer, still numeric.
        assert!(!is_string_domain("x.99999999999999999999999999"));
    }

    #[test]
    fn test_underscore_labels() {
        // `\w` admits underscores in the URL pattern...
        assert!(is_string_url("http://__asd__ads.com/"));
        // ...but `[^\W_]` keeps them out of the domain pattern.
        assert!(!is_string_domain("__asd.com"));
    }

    #[test]
    fn test_url_rejects_short_top_labels() {
        assert!(!is_string_url("http://a.a.a/"));
        assert!(is_string_url("http://ru.ru"));
    }

    #[test]
    fn test_trailing_slash_repetitions() {
        assert!(is_string_url("http://localhost////"));
    }

    #[test]
    fn test_ipv4_boundaries() {
        assert!(is_string_ipv4("0.0.0.0"));
        assert!(is_string_ipv4("999.999.999.999"));
        assert!(!is_string_ipv4(""));
        assert!(!is_string_ipv4("1.123.12.-"));
        assert!(!is_string_ipv4("233.a.12.1"));
    }
}
