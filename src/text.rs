//! Best-effort decoding of raw bytes into text.

use std::borrow::Cow;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

/// Encodings tried in frequency order before statistical detection.
///
/// ASCII is a strict subset of UTF-8, so a separate ASCII attempt can
/// never succeed once UTF-8 has failed and is folded into this entry.
static POPULAR_ENCODINGS: &[&Encoding] = &[UTF_8];

/// Decode bytes of unknown origin into text, without ever failing hard.
///
/// Attempts the fixed priority list first, then decodes with the best
/// guess of a statistical detector. `None` means no attempt produced
/// valid text; callers keep the original bytes in that case. Input that
/// is already valid UTF-8 comes back borrowed and unchanged.
///
/// This primitive underlies URL and domain classification so that
/// non-text input degrades instead of crashing.
///
/// # Examples
///
/// ```
/// use urlkit::decode_string;
///
/// assert_eq!(decode_string(b"hello").as_deref(), Some("hello"));
/// assert_eq!(
///     decode_string("привет.рф".as_bytes()).as_deref(),
///     Some("привет.рф"),
/// );
/// ```
pub fn decode_string(bytes: &[u8]) -> Option<Cow<'_, str>> {
    for encoding in POPULAR_ENCODINGS {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            return Some(text);
        }
    }

    // Everything on the priority list failed; fall back to statistical
    // detection over the whole input.
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let guess = detector.guess(None, true);
    debug!(encoding = guess.name(), "statistical decode fallback");
    guess.decode_without_bom_handling_and_without_replacement(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passes_through_borrowed() {
        let decoded = decode_string("test.com/страница".as_bytes()).unwrap();
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "test.com/страница");
    }

    #[test]
    fn test_ascii_is_covered_by_utf8() {
        assert_eq!(decode_string(b"www.example.com").as_deref(), Some("www.example.com"));
    }

    #[test]
    fn test_detector_fallback_yields_text() {
        // "Съешь же ещё этих мягких французских булок" in windows-1251:
        // invalid as UTF-8, so only the detector path can decode it.
        let cp1251: &[u8] = &[
            0xD1, 0xFA, 0xE5, 0xF8, 0xFC, 0x20, 0xE6, 0xE5, 0x20, 0xE5, 0xF9, 0xB8, 0x20, 0xFD,
            0xF2, 0xE8, 0xF5, 0x20, 0xEC, 0xFF, 0xE3, 0xEA, 0xE8, 0xF5, 0x20, 0xF4, 0xF0, 0xE0,
            0xED, 0xF6, 0xF3, 0xE7, 0xF1, 0xEA, 0xE8, 0xF5, 0x20, 0xE1, 0xF3, 0xEB, 0xEE, 0xEA,
        ];
        assert!(std::str::from_utf8(cp1251).is_err());

        let decoded = decode_string(cp1251);
        assert!(decoded.is_some());
    }

    #[test]
    fn test_never_panics_on_garbage() {
        let _ = decode_string(&[0xFF, 0xFE, 0x00, 0x81, 0x98]);
        let _ = decode_string(b"");
    }
}
