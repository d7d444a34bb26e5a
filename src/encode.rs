//! Percent-encoding with an empty safe set.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except ASCII alphanumerics and the unreserved marks gets
/// escaped; in particular every reserved character, `/` included.
const EMPTY_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Percent-encode `s` as a URL parameter value.
///
/// The string's UTF-8 bytes are encoded with an empty safe set, so the
/// result is pure ASCII and survives embedding anywhere in a URL.
///
/// # Examples
///
/// ```
/// use urlkit::urlencode_string;
///
/// assert_eq!(urlencode_string("hello world"), "hello%20world");
/// assert_eq!(
///     urlencode_string("http://привет.рф"),
///     "http%3A%2F%2F%D0%BF%D1%80%D0%B8%D0%B2%D0%B5%D1%82.%D1%80%D1%84",
/// );
/// ```
pub fn urlencode_string(s: &str) -> String {
    utf8_percent_encode(s, EMPTY_SAFE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters_are_escaped() {
        assert_eq!(urlencode_string("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
    }

    #[test]
    fn test_unreserved_marks_survive() {
        assert_eq!(urlencode_string("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(urlencode_string(""), "");
    }
}
