//! Core transformations: protocol, `www`, and trailing-slash handling.
//!
//! All functions here are total and return a new `String`; outputs of one
//! compose as inputs to the others without re-validation.

use crate::patterns::WWW_PATTERN;
use crate::types::UriParts;

/// Strip the first occurrence of `https://`, then of `http://`.
///
/// Checking `https://` first keeps an `http://` strip from leaving a
/// dangling `s`. Surrounding whitespace is preserved.
///
/// # Examples
///
/// ```
/// use urlkit::remove_http;
///
/// assert_eq!(remove_http("https://www.ya.ru/test"), "www.ya.ru/test");
/// assert_eq!(remove_http("  http://www.ya.ru"), "  www.ya.ru");
/// assert_eq!(remove_http("ya.ru  "), "ya.ru  ");
/// ```
pub fn remove_http(url: &str) -> String {
    url.replacen("https://", "", 1).replacen("http://", "", 1)
}

/// Strip every trailing `/`. Safe on the empty string.
///
/// # Examples
///
/// ```
/// use urlkit::remove_last_slash;
///
/// assert_eq!(remove_last_slash("http://www.test.com////"), "http://www.test.com");
/// assert_eq!(remove_last_slash(""), "");
/// ```
pub fn remove_last_slash(s: &str) -> String {
    s.trim_end_matches('/').to_string()
}

/// Drop a leading `www.` label, keeping the scheme when one is present.
///
/// Only inputs matching `^(https?://)?www\.` change; anything else comes
/// back unchanged. Case-sensitive, like the pattern.
///
/// # Examples
///
/// ```
/// use urlkit::remove_www;
///
/// assert_eq!(remove_www("http://www.ya.ru/test"), "http://ya.ru/test");
/// assert_eq!(remove_www("www.test.www.hello.com"), "test.www.hello.com");
/// assert_eq!(remove_www("ya.ru"), "ya.ru");
/// ```
pub fn remove_www(url: &str) -> String {
    match WWW_PATTERN.captures(url) {
        Some(caps) => {
            let scheme = caps.get(1).map_or("", |m| m.as_str());
            format!("{}{}", scheme, &caps[2])
        }
        None => url.to_string(),
    }
}

/// Trim whitespace, then strip protocol, trailing slashes, and `www.`,
/// in that fixed order. Idempotent: cleaning a clean URL is a no-op.
///
/// # Examples
///
/// ```
/// use urlkit::full_clean_url;
///
/// assert_eq!(full_clean_url("   http://www.привет.рф/"), "привет.рф");
/// assert_eq!(full_clean_url("www.atape.net/test/"), "atape.net/test");
/// ```
pub fn full_clean_url(url: &str) -> String {
    let url = url.trim();
    let url = remove_http(url);
    let url = remove_last_slash(&url);
    remove_www(&url)
}

/// Strip protocol and trailing slashes only: no trim, no `www` removal.
pub fn clear_http_and_last_slash(url: &str) -> String {
    remove_last_slash(&remove_http(url))
}

/// Toggle the trailing slash of a trimmed URL.
///
/// With `encoded` set the literal `%2F` suffix is toggled instead of `/`:
/// removed when present, appended otherwise. Applying twice with the same
/// flag returns the trimmed original.
///
/// # Examples
///
/// ```
/// use urlkit::toggle_last_url_slash;
///
/// assert_eq!(toggle_last_url_slash("http://test.com/page", false), "http://test.com/page/");
/// assert_eq!(toggle_last_url_slash("test.com%2Ftest%2F ", true), "test.com%2Ftest");
/// ```
pub fn toggle_last_url_slash(url: &str, encoded: bool) -> String {
    let trimmed = url.trim();
    let slash = if encoded { "%2F" } else { "/" };

    match trimmed.strip_suffix(slash) {
        Some(head) => head.to_string(),
        None => format!("{trimmed}{slash}"),
    }
}

/// Toggle the `www.` prefix of the host inside a URL or URI string.
///
/// The host token is the authority when present, else the first path
/// segment. The toggled token is spliced over the *first* occurrence of
/// the original, so a host string recurring in the path stays untouched.
///
/// # Examples
///
/// ```
/// use urlkit::toggle_url_www;
///
/// assert_eq!(toggle_url_www("http://atape.net/"), "http://www.atape.net/");
/// assert_eq!(toggle_url_www("www.atape.net/page"), "atape.net/page");
/// assert_eq!(toggle_url_www("hell.com/hell.com"), "www.hell.com/hell.com");
/// ```
pub fn toggle_url_www(url: &str) -> String {
    let host = UriParts::parse(url).host_token();

    let toggled = match host.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => host[4..].to_string(),
        _ => format!("www.{host}"),
    };

    url.replacen(host, &toggled, 1)
}
