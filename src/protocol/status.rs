//! # Status Byte Decoding
//!
//! The printer answers `GS 0x05` with a single status byte. The manual
//! defines *different bit groupings depending on which status byte the
//! device is transmitting* — the same bit value means different things in
//! the printer-information byte and the error-information byte:
//!
//! | Bit  | Printer information | Error information |
//! |------|---------------------|-------------------|
//! | 0x04 | cash drawer open    | —                 |
//! | 0x08 | RS-232 busy         | knife error       |
//! | 0x20 | receipt cover open  | receipt paper out |
//! | 0x40 | feed button pressed | (paper-low mask)  |
//! | 0x60 | —                   | receipt paper low |
//!
//! These groupings are preserved exactly, not merged: the caller must know
//! which byte type is in play (it follows from which status was requested)
//! and pick [`decode_printer_info`] or [`decode_error_info`] accordingly.
//!
//! ## Paper low vs paper out
//!
//! Paper low is a *mask*, `0x60`, which is a superset of the paper-out bit
//! `0x20`. The manual reads paper low as `(status & 0x60) != 0` — so an
//! out-of-paper byte also reads as low, and a byte with only `0x40` set
//! reads low but not out. A naive single-bit decode conflates the two;
//! this one keeps the manual's grouping.
//!
//! Flags are derived fresh on every decode and never cached: the physical
//! state can change between polls. Decoding never fails — every byte value
//! is a valid, if unusual, bit pattern.

// Printer information byte bits
/// Cash drawer open (printer information byte)
pub const CASH_DRAWER_OPEN: u8 = 0x04;
/// RS-232 busy (printer information byte)
pub const RS232_BUSY: u8 = 0x08;
/// Receipt cover open (printer information byte)
pub const RECEIPT_COVER_OPEN: u8 = 0x20;
/// Paper feed button pressed (printer information byte)
pub const PAPER_FEED_BUTTON_PRESSED: u8 = 0x40;

// Error information byte bits
/// Knife error (error information byte)
pub const KNIFE_ERROR: u8 = 0x08;
/// Receipt paper out (error information byte)
pub const RECEIPT_PAPER_OUT: u8 = 0x20;
/// Receipt paper low mask (error information byte) — superset of
/// [`RECEIPT_PAPER_OUT`], tested as `(status & mask) != 0`
pub const RECEIPT_PAPER_LOW: u8 = 0x60;

/// Decoded status flags.
///
/// Each decode fills only the flags its byte context defines; the rest stay
/// `false`. Produced by [`decode_printer_info`] / [`decode_error_info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFlags {
    /// Cash drawer is open (printer information)
    pub drawer_open: bool,
    /// RS-232 interface reports busy (printer information)
    pub busy: bool,
    /// Receipt cover is open (printer information)
    pub cover_open: bool,
    /// Paper feed button is pressed (printer information)
    pub feed_button: bool,
    /// Knife error (error information)
    pub knife_error: bool,
    /// Receipt paper is out (error information)
    pub paper_out: bool,
    /// Receipt paper is low, including out (error information)
    pub paper_low: bool,
}

/// Decode a printer-information status byte.
pub fn decode_printer_info(status: u8) -> StatusFlags {
    StatusFlags {
        drawer_open: status & CASH_DRAWER_OPEN != 0,
        busy: status & RS232_BUSY != 0,
        cover_open: status & RECEIPT_COVER_OPEN != 0,
        feed_button: status & PAPER_FEED_BUTTON_PRESSED != 0,
        ..StatusFlags::default()
    }
}

/// Decode an error-information status byte.
///
/// `paper_low` uses the manual's mask semantics: any bit of `0x60`.
pub fn decode_error_info(status: u8) -> StatusFlags {
    StatusFlags {
        knife_error: status & KNIFE_ERROR != 0,
        paper_out: status & RECEIPT_PAPER_OUT != 0,
        paper_low: status & RECEIPT_PAPER_LOW != 0,
        ..StatusFlags::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_byte_all_false() {
        assert_eq!(decode_printer_info(0x00), StatusFlags::default());
        assert_eq!(decode_error_info(0x00), StatusFlags::default());
    }

    #[test]
    fn test_printer_info_cover_open() {
        let flags = decode_printer_info(0x20);
        assert!(flags.cover_open);
        assert!(!flags.drawer_open);
        assert!(!flags.busy);
        assert!(!flags.feed_button);
        assert!(!flags.paper_out);
        assert!(!flags.paper_low);
    }

    #[test]
    fn test_printer_info_combined() {
        let flags = decode_printer_info(0x04 | 0x08 | 0x40);
        assert!(flags.drawer_open);
        assert!(flags.busy);
        assert!(flags.feed_button);
        assert!(!flags.cover_open);
    }

    #[test]
    fn test_error_info_paper_out_implies_low() {
        // 0x20 is inside the 0x60 low mask
        let flags = decode_error_info(0x20);
        assert!(flags.paper_out);
        assert!(flags.paper_low);
    }

    #[test]
    fn test_error_info_low_without_out() {
        let flags = decode_error_info(0x40);
        assert!(flags.paper_low);
        assert!(!flags.paper_out);
    }

    #[test]
    fn test_error_info_full_low_mask() {
        let flags = decode_error_info(0x60);
        assert!(flags.paper_low);
        assert!(flags.paper_out);
    }

    #[test]
    fn test_error_info_knife() {
        let flags = decode_error_info(0x08);
        assert!(flags.knife_error);
        // 0x08 means busy only in the *printer* information byte
        assert!(!flags.busy);
    }

    #[test]
    fn test_every_byte_decodes() {
        for b in 0..=255u8 {
            let _ = decode_printer_info(b);
            let _ = decode_error_info(b);
        }
    }
}
