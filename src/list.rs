//! Line-oriented bulk parsing with fail-fast validation.

use tracing::debug;

use crate::error::UrlkitError;
use crate::types::UriParts;
use crate::validate::{is_string_domain, is_string_url};

/// Parse one URL per line out of `text`.
///
/// Lines are trimmed and empty lines dropped; every remaining line must
/// pass [`is_string_url`].
///
/// # Errors
///
/// [`UrlkitError::InvalidUrl`] for the first invalid line, carrying its
/// 0-based index (counted after the empty-line drop) and content.
///
/// # Examples
///
/// ```
/// use urlkit::parse_url_list;
///
/// let urls = parse_url_list(" http://test.com/some-page/ \n\n https://test2.com?q=     \r\n");
/// assert_eq!(
///     urls.unwrap(),
///     vec!["http://test.com/some-page/", "https://test2.com?q="],
/// );
/// ```
pub fn parse_url_list(text: &str) -> Result<Vec<String>, UrlkitError> {
    let urls: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for (index, url) in urls.iter().enumerate() {
        if !is_string_url(url) {
            debug!(index, value = %url, "URL list rejected");
            return Err(UrlkitError::invalid_url_at(index, *url));
        }
    }

    Ok(urls.into_iter().map(str::to_string).collect())
}

/// Parse one domain per line out of `text`.
///
/// Lines are trimmed and empty lines dropped. Each line is split
/// syntactically: a present authority is the domain, otherwise the first
/// `/`-delimited path segment is. The extracted domain must pass
/// [`is_string_domain`], and the extracted forms are what gets returned.
///
/// # Errors
///
/// [`UrlkitError::InvalidDomain`] for the first invalid line, carrying
/// its 0-based index and the extracted value.
///
/// # Examples
///
/// ```
/// use urlkit::parse_domain_list;
///
/// let domains = parse_domain_list("google.com\nhttp://yandex.ru/page\nпривет.рф\n");
/// assert_eq!(domains.unwrap(), vec!["google.com", "yandex.ru", "привет.рф"]);
/// ```
pub fn parse_domain_list(text: &str) -> Result<Vec<String>, UrlkitError> {
    let lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    let mut domains = Vec::new();
    for (index, line) in lines.enumerate() {
        let parts = UriParts::parse(line);
        let domain = if !parts.netloc.is_empty() {
            parts.netloc
        } else if !parts.path.is_empty() {
            parts.path.split('/').next().unwrap_or("")
        } else {
            line
        };

        if !is_string_domain(domain) {
            debug!(index, value = %domain, "domain list rejected");
            return Err(UrlkitError::invalid_domain_at(index, domain));
        }
        domains.push(domain.to_string());
    }

    Ok(domains)
}
