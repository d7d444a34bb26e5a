//! The ephemeral URI decomposition used throughout the crate.

/// A syntactic, non-validating split of a URI-like string.
///
/// This is deliberately *not* a URL parser: it accepts well-formed and
/// malformed candidates alike and never fails. A scheme-less input lands
/// entirely in `path`; an empty input produces all-empty parts. Semantic
/// validation is the classifiers' job.
///
/// All fields borrow from the input string, so a part can be located
/// again inside the original by substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriParts<'a> {
    /// Scheme as written (case preserved), without the trailing `:`.
    pub scheme: &'a str,
    /// Authority (`host[:port]`) between `//` and the next `/`, `?` or `#`.
    pub netloc: &'a str,
    /// Path: everything after the authority, up to `?` or `#`.
    pub path: &'a str,
    /// Query string without the leading `?`.
    pub query: &'a str,
    /// Fragment without the leading `#`.
    pub fragment: &'a str,
}

impl<'a> UriParts<'a> {
    /// Split `input` into scheme, authority, path, query, and fragment.
    ///
    /// The authority is only recognized after a literal `//`; without it
    /// the remainder is treated as path-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlkit::UriParts;
    ///
    /// let parts = UriParts::parse("https://www.test.com/hello?t=5#anchor");
    /// assert_eq!(parts.scheme, "https");
    /// assert_eq!(parts.netloc, "www.test.com");
    /// assert_eq!(parts.path, "/hello");
    /// assert_eq!(parts.query, "t=5");
    /// assert_eq!(parts.fragment, "anchor");
    ///
    /// let relative = UriParts::parse("hell.com/hell.com");
    /// assert_eq!(relative.netloc, "");
    /// assert_eq!(relative.path, "hell.com/hell.com");
    /// ```
    pub fn parse(input: &'a str) -> Self {
        let mut rest = input;

        let mut scheme = "";
        if let Some(colon) = rest.find(':') {
            if is_scheme(&rest[..colon]) {
                scheme = &rest[..colon];
                rest = &rest[colon + 1..];
            }
        }

        let mut netloc = "";
        if let Some(after) = rest.strip_prefix("//") {
            let end = after
                .find(|c| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after.len());
            netloc = &after[..end];
            rest = &after[end..];
        }

        let mut fragment = "";
        if let Some((head, frag)) = rest.split_once('#') {
            rest = head;
            fragment = frag;
        }

        let mut query = "";
        if let Some((head, q)) = rest.split_once('?') {
            rest = head;
            query = q;
        }

        Self {
            scheme,
            netloc,
            path: rest,
            query,
            fragment,
        }
    }

    /// The host-like token: the authority when present, otherwise the
    /// first `/`-delimited segment of the path.
    pub fn host_token(&self) -> &'a str {
        if !self.netloc.is_empty() {
            self.netloc
        } else {
            self.path.split('/').next().unwrap_or("")
        }
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
