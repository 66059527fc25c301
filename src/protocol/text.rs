//! # Print Characteristic Commands
//!
//! Text styling for the NCR 7167: emphasized, underline, character width
//! and pitch. Styles are sticky — each stays in effect until turned off or
//! until `ESC @` resets the printer.
//!
//! ## Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Emphasized | ESC E n | **Bold** strike |
//! | Underline | ESC - n | Underlined text |
//! | Double wide | DC2 / DC3 | 2x horizontal pitch |
//! | Pitch | ESC SYN n | Characters per line |
//!
//! Double-wide glyphs consume twice the horizontal pitch, so a 44-column
//! receipt line holds 22 double-wide characters. The receipt layout code in
//! [`crate::receipt`] accounts for this when centering.

use crate::error::PrinterError;

use super::catalog;
use super::commands::{ESC, SELECT_DOUBLE_WIDE, SELECT_SINGLE_WIDE};

// ============================================================================
// PRINT MODE BITS (ESC ! n)
// ============================================================================

/// Bit values for the combined select-print-modes command (`ESC ! n`).
/// Bits not listed must be zero.
pub mod modes {
    /// Standard character pitch
    pub const STANDARD_PITCH: u8 = 0x00;
    /// Compressed character pitch
    pub const COMPRESSED_PITCH: u8 = 0x01;
    /// Emphasized (bold)
    pub const EMPHASIZED: u8 = 0x08;
    /// Double height
    pub const DOUBLE_HEIGHT: u8 = 0x10;
    /// Double width
    pub const DOUBLE_WIDTH: u8 = 0x20;
    /// Underline
    pub const UNDERLINE: u8 = 0x80;
}

/// # Select Print Modes (ESC ! n)
///
/// Sets several characteristics at once from the bits in [`modes`].
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1B 21 n |
#[inline]
pub fn select_print_modes(bits: u8) -> Vec<u8> {
    vec![ESC, b'!', bits]
}

// ============================================================================
// INDIVIDUAL STYLES
// ============================================================================

/// # Emphasized Mode (ESC E n)
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1B 45 n |
///
/// `n = 1` enables, `n = 0` disables.
///
/// ## Example
///
/// ```
/// use recibo::protocol::text;
///
/// assert_eq!(text::emphasized(true), vec![0x1B, 0x45, 0x01]);
/// assert_eq!(text::emphasized(false), vec![0x1B, 0x45, 0x00]);
/// ```
#[inline]
pub fn emphasized(enable: bool) -> Vec<u8> {
    vec![ESC, b'E', enable as u8]
}

/// # Underline Mode (ESC - n)
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1B 2D n |
///
/// `n = 1` enables, `n = 0` disables. Underline does not span the padding
/// the printer inserts for tabs.
#[inline]
pub fn underline(enable: bool) -> Vec<u8> {
    vec![ESC, b'-', enable as u8]
}

/// # Double-Wide Characters (DC2 / DC3)
///
/// Single control codes, not ESC sequences:
///
/// | State | Byte |
/// |-------|------|
/// | On    | 0x12 |
/// | Off   | 0x13 |
#[inline]
pub fn double_wide(enable: bool) -> Vec<u8> {
    vec![if enable {
        SELECT_DOUBLE_WIDE
    } else {
        SELECT_SINGLE_WIDE
    }]
}

/// # Select Character Pitch (ESC SYN n)
///
/// Sets characters per line. Use the pitch constants in
/// [`super::commands`] (44/56 for 80 mm paper, 32/42 for 58 mm, 45/55 for
/// the slip station).
///
/// ## Errors
///
/// `InvalidParameter` unless `1 <= pitch <= 255`.
#[inline]
pub fn character_pitch(pitch: u16) -> Result<Vec<u8>, PrinterError> {
    catalog::CHARACTER_PITCH.encode(&[pitch])
}

// ============================================================================
// TESTS
// ============================================================================
