//! IDNA normalization of URL authorities.

use crate::types::UriParts;

/// Re-encode the authority of `url` into its ASCII-Compatible form.
///
/// The input is split syntactically; when an authority is present and
/// carries non-ASCII labels it is converted through IDNA, and the first
/// occurrence of the original authority substring is spliced over with
/// the converted form. The splice is first-occurrence on purpose: a host
/// string that recurs later in the path must stay untouched.
///
/// ASCII-only authorities pass through unchanged, as does anything IDNA
/// rejects. Total: malformed input comes back as-is, which is what lets
/// `is_string_url` lean on this for garbage input.
///
/// # Examples
///
/// ```
/// use urlkit::decode_url;
///
/// assert_eq!(
///     decode_url("http://привет.рф/hello"),
///     "http://xn--b1agh1afp.xn--p1ai/hello",
/// );
/// assert_eq!(
///     decode_url("http://hello-world.com/page"),
///     "http://hello-world.com/page",
/// );
/// ```
pub fn decode_url(url: &str) -> String {
    let netloc = UriParts::parse(url).netloc;
    if netloc.is_empty() || netloc.is_ascii() {
        return url.to_string();
    }

    match idna::domain_to_ascii(netloc) {
        Ok(ascii) => url.replacen(netloc, &ascii, 1),
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idna_converts_authority_only() {
        assert_eq!(
            decode_url("http://алло.укр/алло-тест"),
            "http://xn--80awam.xn--j1amh/алло-тест"
        );
    }

    #[test]
    fn test_ascii_authority_is_untouched() {
        assert_eq!(decode_url("http://Test.COM/Path"), "http://Test.COM/Path");
        assert_eq!(decode_url("ftp://ru.ru"), "ftp://ru.ru");
    }

    #[test]
    fn test_no_authority_is_untouched() {
        assert_eq!(decode_url("привет.рф"), "привет.рф");
        assert_eq!(decode_url(""), "");
    }
}
