//! Structural helpers built on the classifiers: authority extraction,
//! URL splitting, reference resolution, internal-link detection, and the
//! domain-zone heuristics.

use url::Url;

use crate::clean::{full_clean_url, remove_www};
use crate::error::UrlkitError;
use crate::types::UriParts;
use crate::validate::is_string_url;

/// Extract the authority of a valid URL, verbatim.
///
/// The returned component keeps its case and any `www.` prefix exactly as
/// written in `url`.
///
/// # Errors
///
/// [`UrlkitError::InvalidUrl`] when `url` fails [`is_string_url`].
///
/// # Examples
///
/// ```
/// use urlkit::get_url_domain;
///
/// assert_eq!(get_url_domain("https://www.a.cc").unwrap(), "www.a.cc");
/// assert!(get_url_domain("i.ua/").is_err());
/// ```
pub fn get_url_domain(url: &str) -> Result<String, UrlkitError> {
    if !is_string_url(url) {
        return Err(UrlkitError::invalid_url(url));
    }
    Ok(UriParts::parse(url).netloc.to_string())
}

/// Split a valid URL into `(domain, remainder)`.
///
/// The domain comes from [`get_url_domain`], `www.`-stripped when
/// `clean_domain` is set. The remainder is everything after the *last*
/// occurrence of the domain substring in the original URL, so a path that
/// repeats the domain name splits at the repetition, not before it.
///
/// # Errors
///
/// [`UrlkitError::InvalidUrl`] when `url` fails [`is_string_url`].
///
/// # Examples
///
/// ```
/// use urlkit::split_url;
///
/// let (domain, uri) = split_url("http://domain.zone/section?p=2", true).unwrap();
/// assert_eq!(domain, "domain.zone");
/// assert_eq!(uri, "/section?p=2");
///
/// let (domain, uri) = split_url("https://www.test.com/hello?t=5&r=6#anchor", false).unwrap();
/// assert_eq!(domain, "www.test.com");
/// assert_eq!(uri, "/hello?t=5&r=6#anchor");
/// ```
pub fn split_url(url: &str, clean_domain: bool) -> Result<(String, String), UrlkitError> {
    let domain = get_url_domain(url)?;
    let domain = if clean_domain {
        remove_www(&domain)
    } else {
        domain
    };

    let remainder = url.split(domain.as_str()).last().unwrap_or("").to_string();
    Ok((domain, remainder))
}

/// Resolve a relative reference against a base URL per RFC 3986.
///
/// Handles `..`, `.`, absolute paths, and the empty reference (same
/// document).
///
/// # Errors
///
/// [`UrlkitError::InvalidUrl`] when `baseurl` fails [`is_string_url`] or
/// the resolution itself is impossible.
///
/// # Examples
///
/// ```
/// use urlkit::make_absolute_url;
///
/// assert_eq!(
///     make_absolute_url("file2.html", "http://domain.com/part/file1.html").unwrap(),
///     "http://domain.com/part/file2.html",
/// );
/// assert_eq!(
///     make_absolute_url("../../test.html", "http://d.com/a/b/test.html").unwrap(),
///     "http://d.com/test.html",
/// );
/// ```
pub fn make_absolute_url(relative: &str, baseurl: &str) -> Result<String, UrlkitError> {
    if !is_string_url(baseurl) {
        return Err(UrlkitError::invalid_url(baseurl));
    }

    let base = Url::parse(baseurl).map_err(|_| UrlkitError::invalid_url(baseurl))?;
    let resolved = base
        .join(relative)
        .map_err(|_| UrlkitError::invalid_url(relative))?;
    Ok(resolved.to_string())
}

/// Decide whether `link`, found on a page of `domain`, points inside it.
///
/// A link that is not itself a full URL is relative and therefore always
/// internal. A full URL is internal iff, after cleaning both sides with
/// [`full_clean_url`] (resolving a URL-form `domain` through
/// [`get_url_domain`] first), the cleaned domain sits at the very start
/// of the cleaned link.
///
/// # Examples
///
/// ```
/// use urlkit::is_link_internal;
///
/// assert!(is_link_internal("", "http://i.ua/section/?p1=3&p2=1"));
/// assert!(is_link_internal("https://ya.ru/", "http://ya.ru/section/?p1=3&p2=1"));
/// assert!(!is_link_internal("http://i.ua", "http://ya.ru/section/"));
/// ```
pub fn is_link_internal(link: &str, domain: &str) -> bool {
    let url = link.trim();
    if !is_string_url(url) {
        // Relative references are same-site by construction.
        return true;
    }

    let clean_link = full_clean_url(url);

    let domain = if is_string_url(domain) {
        match get_url_domain(domain) {
            Ok(extracted) => extracted,
            Err(_) => return false,
        }
    } else {
        domain.to_string()
    };
    let clean_domain = full_clean_url(&domain);

    clean_link.starts_with(&clean_domain)
}

/// The root domain zone: the last `.`-label of the host token, verbatim.
///
/// # Examples
///
/// ```
/// use urlkit::get_root_domain_zone;
///
/// assert_eq!(get_root_domain_zone("rada.gov.ua/testpage"), "ua");
/// assert_eq!(get_root_domain_zone("http://привет.рф"), "рф");
/// ```
pub fn get_root_domain_zone(url: &str) -> String {
    let host = UriParts::parse(url).host_token();
    host.rsplit('.').next().unwrap_or("").to_string()
}

/// Approximate the domain zone without a public-suffix list.
///
/// Starting from the last label of the host token, labels are collected
/// right to left while their length is 2 or 3 characters, and the walk
/// stops at the first label outside those bounds. This captures
/// multi-part zones like `co.uk` or `com.ua`, but it is an approximation,
/// not authoritative: a 3-letter second-level name folds into the zone.
///
/// # Examples
///
/// ```
/// use urlkit::get_domain_zone;
///
/// assert_eq!(get_domain_zone("rada.gov.ua/"), "gov.ua");
/// assert_eq!(get_domain_zone("http://www.google.com.ua/"), "com.ua");
/// assert_eq!(get_domain_zone("https://www.atape.net/testpage"), "net");
/// ```
pub fn get_domain_zone(url: &str) -> String {
    let host = UriParts::parse(url).host_token();
    let labels: Vec<&str> = host.split('.').collect();

    let mut zone: Vec<&str> = Vec::new();
    if let Some((last, rest)) = labels.split_last() {
        zone.push(last);
        for label in rest.iter().rev() {
            let chars = label.chars().count();
            if chars > 1 && chars < 4 {
                zone.push(label);
            } else {
                break;
            }
        }
    }

    zone.reverse();
    zone.join(".")
}
