//! # NCR 7167 Protocol Commands
//!
//! This module implements the command set of the NCR 7167 two-station POS
//! printer, as documented in the NCR 7167 Owner's Manual. The same escape
//! grammar is shared by the whole 7156/7167 family.
//!
//! ## Protocol Overview
//!
//! The command set mixes three framings:
//!
//! - **Single-byte control codes**: `LF`, `DLE` (clear), `RS`/`FS` (station
//!   select), `DC2`/`DC3` (double-wide on/off)
//! - **ESC sequences**: `ESC @`, `ESC d n`, `ESC p 0 on off`, ...
//! - **GS sequences**: `GS V m`, `GS k type data NUL`, `GS 0x05`, ...
//!
//! All parameters in this command set are single unsigned bytes appended
//! after the prefix in declared order; there are no multi-byte integers and
//! therefore no endianness concerns.
//!
//! ## Two Stations, One Channel
//!
//! The printer has independent receipt and slip mechanisms sharing one
//! serial channel. `RS`/`FS` select which station subsequent print data goes
//! to. There is no "query current station" command: the active station is
//! device-side state this layer can set but never observe, so nothing here
//! tracks it.
//!
//! ## Reference
//!
//! NCR 7167 Two-Station POS Printer Owner's Manual, chapter "Communication"
//! and the command tables in "Programming".

use crate::error::PrinterError;

use super::catalog;

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Multi-byte commands begin with ESC (0x1B) followed by a sub-opcode.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Prefix for the extended family: paper cut, bar codes, status requests.
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// NUL - terminator byte for bar code data
pub const NUL: u8 = 0x00;

/// XON (DC1) - transmit-on byte used by software flow control
pub const XON: u8 = 0x11;

/// XOFF (DC3) - transmit-off byte used by software flow control
///
/// Note 0x13 doubles as the single-wide control code when sent as a command;
/// the device distinguishes the two by flow-control configuration.
pub const XOFF: u8 = 0x13;

// ============================================================================
// SINGLE-BYTE CONTROL CODES
// ============================================================================

/// Clear printer (DLE, 0x10): discard the line buffer and recover from
/// most error states without a full reset.
pub const CLEAR_PRINTER: u8 = 0x10;

/// Print and feed one line (LF, 0x0A): print the line buffer, advance
/// paper by the current line spacing.
pub const PRINT_AND_FEED_ONE_LINE: u8 = 0x0A;

/// Select receipt station (RS, 0x1E)
pub const SELECT_RECEIPT_STATION: u8 = 0x1E;

/// Select slip station (FS, 0x1C)
pub const SELECT_SLIP_STATION: u8 = 0x1C;

/// Select double-wide characters (DC2, 0x12)
pub const SELECT_DOUBLE_WIDE: u8 = 0x12;

/// Select single-wide characters (DC3, 0x13)
pub const SELECT_SINGLE_WIDE: u8 = 0x13;

// ============================================================================
// CHARACTER PITCH (characters per line, by paper width)
// ============================================================================

/// Standard pitch on 80 mm receipt paper: 44 columns
pub const PITCH_STANDARD_80MM: u8 = 44;
/// Compressed pitch on 80 mm receipt paper: 56 columns
pub const PITCH_COMPRESSED_80MM: u8 = 56;
/// Standard pitch on 58 mm receipt paper: 32 columns
pub const PITCH_STANDARD_58MM: u8 = 32;
/// Compressed pitch on 58 mm receipt paper: 42 columns
pub const PITCH_COMPRESSED_58MM: u8 = 42;
/// Standard pitch on the slip station: 45 columns
pub const PITCH_STANDARD_SLIP: u8 = 45;
/// Compressed pitch on the slip station: 55 columns
pub const PITCH_COMPRESSED_SLIP: u8 = 55;

// ============================================================================
// INITIALIZATION AND BUFFER CONTROL
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Behavior
///
/// Clears the print buffer and resets print characteristics (emphasized,
/// underline, character width, line spacing) to defaults. The device takes
/// up to a second to settle after this command; [`crate::printer::PrinterSession::initialize`]
/// blocks for that documented latency.
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Clear Printer (DLE)
///
/// Discards buffered print data without a full reset. Unlike `ESC @` this
/// does not touch print characteristics and needs no settle delay.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 10    |
/// | Decimal | 16    |
#[inline]
pub fn clear() -> Vec<u8> {
    vec![CLEAR_PRINTER]
}

// ============================================================================
// STATION SELECTION
// ============================================================================

/// Select the receipt station (RS). Subsequent print data goes to the
/// receipt tape until the slip station is selected.
#[inline]
pub fn select_receipt_station() -> Vec<u8> {
    vec![SELECT_RECEIPT_STATION]
}

/// Select the slip station (FS). Subsequent print data goes to the slip
/// form until the receipt station is selected.
#[inline]
pub fn select_slip_station() -> Vec<u8> {
    vec![SELECT_SLIP_STATION]
}

// ============================================================================
// PAPER MOVEMENT
// ============================================================================

/// Print the line buffer and feed one line (LF).
#[inline]
pub fn print_and_feed_line() -> Vec<u8> {
    vec![PRINT_AND_FEED_ONE_LINE]
}

/// # Print and Feed n Lines (ESC d n)
///
/// Prints any buffered data, then feeds `lines` lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC d n  |
/// | Hex     | 1B 64 n  |
/// | Decimal | 27 100 n |
///
/// ## Errors
///
/// `InvalidParameter` unless `1 <= lines <= 255`.
///
/// ## Example
///
/// ```
/// use recibo::protocol::commands;
///
/// assert_eq!(commands::feed_lines(3).unwrap(), vec![0x1B, 0x64, 3]);
/// assert!(commands::feed_lines(0).is_err());
/// ```
#[inline]
pub fn feed_lines(lines: u16) -> Result<Vec<u8>, PrinterError> {
    catalog::FEED_LINES.encode(&[lines])
}

/// # Set Line Spacing (ESC 3 n)
///
/// Sets line spacing in 1/406" units on the receipt station (1/144" on the
/// slip station — the unit is a property of the selected station, not of
/// this command).
#[inline]
pub fn set_line_spacing(spacing: u16) -> Result<Vec<u8>, PrinterError> {
    catalog::LINE_SPACING.encode(&[spacing])
}

/// Set line spacing to the 1/6" default (ESC 2).
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1B 32 |
#[inline]
pub fn set_default_line_spacing() -> Vec<u8> {
    vec![ESC, b'2']
}

// ============================================================================
// PAPER CUT
// ============================================================================

/// # Cut Paper (GS V m)
///
/// Cuts the receipt. `m = 0` is a full cut, `m = 1` a partial cut that
/// leaves a hinge so the receipt does not fall.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | GS V m  |
/// | Hex     | 1D 56 m |
///
/// The knife is optional hardware on this printer family; sending this to a
/// knifeless configuration raises the knife-error status bit.
#[inline]
pub fn cut_paper(full: bool) -> Vec<u8> {
    vec![GS, 0x56, if full { 0 } else { 1 }]
}

// ============================================================================
// CASH DRAWER
// ============================================================================

/// # Open Cash Drawer (ESC p 0 on off)
///
/// Fires the cash drawer solenoid on connector pin 2.
///
/// ## Protocol Details
///
/// | Format  | Bytes            |
/// |---------|------------------|
/// | ASCII   | ESC p NUL on off |
/// | Hex     | 1B 70 00 on off  |
///
/// ## Parameters
///
/// - `on_time`: energize duration in 2 ms units (0-255)
/// - `off_time`: delay before the next drawer pulse, 2 ms units (0-255)
///
/// 55/55 (110 ms on) is the timing recommended for NCR drawers.
#[inline]
pub fn open_cash_drawer(on_time: u16, off_time: u16) -> Result<Vec<u8>, PrinterError> {
    catalog::OPEN_CASH_DRAWER.encode(&[on_time, off_time])
}

// ============================================================================
// STATUS
// ============================================================================

/// # Request Printer Status (GS ENQ)
///
/// Asks the printer to transmit one status byte.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1D 05 |
///
/// The reply arrives on the same serial channel after a short device delay;
/// see [`crate::printer::PrinterSession::request_status`] for the bounded
/// wait, and [`super::status`] for decoding the reply byte.
#[inline]
pub fn request_status() -> Vec<u8> {
    vec![GS, 0x05]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_clear() {
        assert_eq!(clear(), vec![0x10]);
    }

    #[test]
    fn test_station_select() {
        assert_eq!(select_receipt_station(), vec![0x1E]);
        assert_eq!(select_slip_station(), vec![0x1C]);
    }

    #[test]
    fn test_print_and_feed_line() {
        assert_eq!(print_and_feed_line(), vec![0x0A]);
    }

    #[test]
    fn test_feed_lines() {
        assert_eq!(feed_lines(1).unwrap(), vec![0x1B, 0x64, 0x01]);
        assert_eq!(feed_lines(255).unwrap(), vec![0x1B, 0x64, 0xFF]);
    }

    #[test]
    fn test_feed_lines_rejects_out_of_range() {
        assert!(feed_lines(0).is_err());
        assert!(feed_lines(256).is_err());
    }

    #[test]
    fn test_line_spacing() {
        assert_eq!(set_line_spacing(24).unwrap(), vec![0x1B, 0x33, 24]);
        assert_eq!(set_default_line_spacing(), vec![0x1B, 0x32]);
    }

    #[test]
    fn test_cut_paper() {
        assert_eq!(cut_paper(true), vec![0x1D, 0x56, 0x00]);
        assert_eq!(cut_paper(false), vec![0x1D, 0x56, 0x01]);
    }

    #[test]
    fn test_open_cash_drawer() {
        assert_eq!(
            open_cash_drawer(55, 55).unwrap(),
            vec![0x1B, 0x70, 0x00, 55, 55]
        );
        assert!(open_cash_drawer(256, 0).is_err());
    }

    #[test]
    fn test_request_status() {
        assert_eq!(request_status(), vec![0x1D, 0x05]);
    }

    #[test]
    fn test_pitch_constants() {
        assert_eq!(PITCH_STANDARD_80MM, 44);
        assert_eq!(PITCH_COMPRESSED_80MM, 56);
        assert_eq!(PITCH_STANDARD_SLIP, 45);
    }
}
