//! Error types for the extractor functions.

use thiserror::Error;

/// Errors raised when an extractor's input fails validation.
///
/// Classifier functions (`is_string_url` and friends) never return these:
/// they report a boolean verdict on malformed input. Only the functions
/// that *require* a valid URL or domain fail, and they fail loudly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlkitError {
    /// The input is not a syntactically valid URL.
    #[error("not a valid URL: {value}{}", line_suffix(.line))]
    InvalidUrl {
        /// The offending value.
        value: String,
        /// 0-based line index, set by the list parsers.
        line: Option<usize>,
    },

    /// The input is not a syntactically valid domain.
    #[error("not a valid domain: {value}{}", line_suffix(.line))]
    InvalidDomain {
        /// The offending value.
        value: String,
        /// 0-based line index, set by the list parsers.
        line: Option<usize>,
    },
}

impl UrlkitError {
    pub fn invalid_url(value: impl Into<String>) -> Self {
        Self::InvalidUrl {
            value: value.into(),
            line: None,
        }
    }

    pub fn invalid_url_at(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidUrl {
            value: value.into(),
            line: Some(line),
        }
    }

    pub fn invalid_domain_at(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidDomain {
            value: value.into(),
            line: Some(line),
        }
    }

    /// The offending value carried for diagnostics.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidUrl { value, .. } | Self::InvalidDomain { value, .. } => value,
        }
    }

    /// The 0-based line index, when the error came from a list parser.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidUrl { line, .. } | Self::InvalidDomain { line, .. } => *line,
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(index) => format!(" on line {index}"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            UrlkitError::invalid_url("i.ua/").to_string(),
            "not a valid URL: i.ua/"
        );

        assert_eq!(
            UrlkitError::invalid_domain_at(3, "not a domain").to_string(),
            "not a valid domain: not a domain on line 3"
        );
    }

    #[test]
    fn test_error_accessors() {
        let err = UrlkitError::invalid_url_at(0, "not-valid-url");
        assert_eq!(err.value(), "not-valid-url");
        assert_eq!(err.line(), Some(0));

        let err = UrlkitError::invalid_url("x");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(UrlkitError::invalid_url("a"), UrlkitError::invalid_url("a"));
        assert_ne!(
            UrlkitError::invalid_url("a"),
            UrlkitError::invalid_url_at(0, "a")
        );
    }
}
