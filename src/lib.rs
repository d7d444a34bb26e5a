//! urlkit - pure string-level URL and domain helpers.
//!
//! A collection of stateless transformation and validation functions over
//! URL and domain strings: normalization (protocol/`www`/trailing-slash
//! stripping), classification, structural splitting, IDNA and
//! percent-encoding, and fail-fast list parsing. Every function takes a
//! string (or two) and returns a string, boolean, or tuple; the handful
//! that require valid input return a [`UrlkitError`].
//!
//! # Design
//!
//! - **Classifiers never fail.** `is_string_url`, `is_string_domain` and
//!   friends answer `false` on malformed input, however malformed.
//! - **Extractors fail loudly.** `get_url_domain`, `split_url`,
//!   `make_absolute_url`, and the list parsers error when their
//!   precondition is unmet; pre-validate with a classifier to avoid the
//!   error path.
//! - **Outputs compose.** Any transformation's output is a valid input to
//!   the others, and the "clean" operations are idempotent.
//!
//! There is no network I/O, no configuration, and no shared mutable
//! state: the compiled patterns are immutable after first use and every
//! function is safe to call from any number of threads.
//!
//! # Quick Start
//!
//! ```
//! use urlkit::{full_clean_url, get_domain_zone, is_string_url, split_url};
//!
//! assert!(is_string_url("https://www.example.com/page/"));
//! assert!(!is_string_url("chrome://hello.com/"));
//!
//! assert_eq!(full_clean_url("  https://www.example.com/page/  "), "example.com/page");
//! assert_eq!(get_domain_zone("rada.gov.ua/"), "gov.ua");
//!
//! let (domain, remainder) = split_url("http://domain.zone/section?p=2", true)?;
//! assert_eq!(domain, "domain.zone");
//! assert_eq!(remainder, "/section?p=2");
//! # Ok::<(), urlkit::UrlkitError>(())
//! ```

pub mod clean;
pub mod compose;
pub mod decode;
pub mod encode;
pub mod error;
pub mod list;
pub mod text;
pub mod types;
pub mod validate;

mod patterns;

// Classification
pub use validate::{
    is_string_domain, is_string_ipv4, is_string_url, is_url_domain, is_url_or_domain_valid,
};

// Transformations
pub use clean::{
    clear_http_and_last_slash, full_clean_url, remove_http, remove_last_slash, remove_www,
    toggle_last_url_slash, toggle_url_www,
};

// Structural helpers
pub use compose::{
    get_domain_zone, get_root_domain_zone, get_url_domain, is_link_internal, make_absolute_url,
    split_url,
};

// Encoding and decoding primitives
pub use decode::decode_url;
pub use encode::urlencode_string;
pub use text::decode_string;

// Bulk parsing
pub use list::{parse_domain_list, parse_url_list};

// Supporting types
pub use error::UrlkitError;
pub use types::UriParts;
