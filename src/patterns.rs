//! Compiled validation patterns, constructed once and shared by every call.
//!
//! The character classes and quantifiers here are acceptance-boundary
//! contracts, not incidental detail: the IPv4 pattern's unescaped `.` and
//! its lack of 0-255 bounding, and the domain pattern's top-label length
//! bounds, are all load-bearing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Generic URL shape: explicit `http(s)`/`ftp(s)` scheme, then a dotted
/// hostname (ASCII or Unicode word characters), `localhost`, or a dotted
/// quad, an optional port, and an optional path/query tail.
pub(crate) static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+",
        r"(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
        r"|(?:[\w](?:[\w-]{0,61}[\w])?\.)+(?:[\w]{2,6}\.?|[\w-]{2,}\.?)",
        r"|localhost",
        r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
        r"(?::\d+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("Invalid URL pattern")
});

/// Domain shape: dotted labels with hyphens only mid-label and a top
/// label of 2+ characters, or the literal `localhost`. The `[^\W_]`
/// classes are the Unicode-aware arm: word characters minus underscore.
pub(crate) static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+",
        r"(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
        r"|(?:[^\W_](?:[^\W_-]{0,61}[^\W_])?\.)+(?:[^\W_]{2,6}\.?|[^\W_-]{2,}\.?)",
        r"|localhost)$",
    ))
    .expect("Invalid domain pattern")
});

/// IPv4 shape: four groups of 0-3 digits. The separator is an unescaped
/// `.` (any character) and group values are not bounded to 0-255; both
/// are preserved permissive behavior, not oversights to fix.
pub(crate) static IPV4_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{0,3}.[0-9]{0,3}.[0-9]{0,3}.[0-9]{0,3}$").expect("Invalid IPv4 pattern")
});

/// Optional scheme followed by a literal `www.` prefix; case-sensitive.
pub(crate) static WWW_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://)?www\.(.+)").expect("Invalid www pattern"));
