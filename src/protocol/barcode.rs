//! # Bar Code Commands
//!
//! Bar code printing on the NCR 7167 receipt station.
//!
//! ## Framing
//!
//! The print command is NUL-terminated rather than length-prefixed:
//!
//! ```text
//! GS k <type> <ascii data...> NUL
//! 1D 6B  n     ...             00
//! ```
//!
//! Bar code data is raw 7-bit ASCII — it bypasses the Latin-1 codepage used
//! for printable text ([`super::latin1`]), since the device consumes the
//! payload before character ROM translation. Which characters are legal
//! within ASCII depends on the symbology (Code39 is uppercase alphanumeric
//! plus a few symbols, ITF is digits only, ...); the printer rejects
//! symbology violations itself, this layer only enforces the framing rules.
//!
//! Height is set separately with `GS h n` and persists across prints.

use crate::error::PrinterError;

use super::catalog;
use super::commands::{GS, NUL};

/// Bar code symbologies and their type codes for `GS k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BarCodeType {
    UpcA = 0,
    UpcE = 1,
    /// JAN-13 / EAN-13
    Ean13 = 2,
    /// JAN-8 / EAN-8
    Ean8 = 3,
    Code39 = 4,
    /// Interleaved 2 of 5
    Itf = 5,
    Codabar = 6,
    Code93 = 9,
    Code128 = 10,
    Pdf417 = 75,
}

/// # Print Bar Code (GS k type data NUL)
///
/// ## Errors
///
/// `InvalidParameter` if `data` is empty or contains non-ASCII characters;
/// nothing is produced on failure.
///
/// ## Example
///
/// ```
/// use recibo::protocol::barcode::{self, BarCodeType};
///
/// let cmd = barcode::bar_code(BarCodeType::Code39, "A12345").unwrap();
/// assert_eq!(&cmd[..3], &[0x1D, 0x6B, 4]);
/// assert_eq!(*cmd.last().unwrap(), 0x00);
/// ```
pub fn bar_code(ty: BarCodeType, data: &str) -> Result<Vec<u8>, PrinterError> {
    if data.is_empty() {
        return Err(PrinterError::InvalidParameter {
            command: "print_bar_code",
            name: "data_len",
            value: 0,
            min: 1,
            max: u16::MAX,
        });
    }
    if let Some(ch) = data.chars().find(|ch| !ch.is_ascii()) {
        // Codepoints above u16::MAX are clamped for reporting; anything
        // past 0x7F fails regardless.
        return Err(PrinterError::InvalidParameter {
            command: "print_bar_code",
            name: "data",
            value: (ch as u32).min(u16::MAX as u32) as u16,
            min: 0x00,
            max: 0x7F,
        });
    }

    let mut out = Vec::with_capacity(4 + data.len());
    out.push(GS);
    out.push(0x6B);
    out.push(ty as u8);
    out.extend_from_slice(data.as_bytes());
    out.push(NUL);
    Ok(out)
}

/// # Set Bar Code Height (GS h n)
///
/// Height in dots, `1..=255`. Applies to all subsequent bar codes until
/// changed or the printer is initialized.
#[inline]
pub fn bar_code_height(height: u16) -> Result<Vec<u8>, PrinterError> {
    catalog::BAR_CODE_HEIGHT.encode(&[height])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_code_framing() {
        let cmd = bar_code(BarCodeType::Code39, "HELLO").unwrap();
        let mut expected = vec![0x1D, 0x6B, 4];
        expected.extend_from_slice(b"HELLO");
        expected.push(0x00);
        assert_eq!(cmd, expected);
    }

    #[test]
    fn test_type_codes() {
        assert_eq!(BarCodeType::UpcA as u8, 0);
        assert_eq!(BarCodeType::Ean13 as u8, 2);
        assert_eq!(BarCodeType::Code39 as u8, 4);
        assert_eq!(BarCodeType::Code128 as u8, 10);
        assert_eq!(BarCodeType::Pdf417 as u8, 75);
    }

    #[test]
    fn test_empty_data_fails() {
        assert!(matches!(
            bar_code(BarCodeType::Code128, ""),
            Err(PrinterError::InvalidParameter {
                name: "data_len",
                ..
            })
        ));
    }

    #[test]
    fn test_non_ascii_data_fails() {
        assert!(matches!(
            bar_code(BarCodeType::Code128, "café"),
            Err(PrinterError::InvalidParameter { name: "data", .. })
        ));
    }

    #[test]
    fn test_height() {
        assert_eq!(bar_code_height(80).unwrap(), vec![0x1D, 0x68, 80]);
        assert!(bar_code_height(0).is_err());
        assert!(bar_code_height(256).is_err());
    }

    #[test]
    fn test_digits_only_symbology_data_accepted_as_ascii() {
        // Symbology-level rules are the printer's problem; ASCII framing is ours.
        assert!(bar_code(BarCodeType::Itf, "0123456789").is_ok());
    }
}
