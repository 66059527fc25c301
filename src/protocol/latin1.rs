//! # ISO-8859-1 Text Encoding
//!
//! Converts Unicode strings to the single-byte Latin-1 encoding the NCR 7167
//! character ROM maps by default. ASCII (U+0000–U+007F) passes through
//! unchanged; the Latin-1 supplement (U+00A0–U+00FF) maps directly to bytes
//! 0xA0–0xFF. Characters outside Latin-1 are replaced with `?` and logged.
//!
//! This is the encoding for *printable text only*. Bar code data is framed
//! separately as plain 7-bit ASCII (see [`super::barcode`]) — the device
//! reads bar code payloads before codepage translation.
//!
//! The codepage is not configurable: the 7167 command set documents no
//! alternate code page selection for the base character ROM.

use tracing::warn;

/// Encode a Unicode string as ISO-8859-1 bytes.
///
/// - U+0000–U+00FF: passed through as a single byte
/// - Anything else: replaced with `?`, warning logged
///
/// ## Example
///
/// ```
/// use recibo::protocol::latin1;
///
/// assert_eq!(latin1::encode("Total"), b"Total");
/// assert_eq!(latin1::encode("Café"), &[b'C', b'a', b'f', 0xE9]);
/// assert_eq!(latin1::encode("€"), b"?");
/// ```
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        let cp = ch as u32;
        if cp <= 0xFF {
            out.push(cp as u8);
        } else {
            warn!(
                character = %ch,
                codepoint = format!("U+{cp:04X}"),
                "latin1: unmapped character, replacing with '?'"
            );
            out.push(b'?');
        }
    }
    out
}
