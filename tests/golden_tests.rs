//! # Golden Tests
//!
//! These tests pin the exact byte sequences the library puts on the wire and
//! the exact text the layout engine produces. The NCR 7167 does what the
//! bytes say, not what the code intends, so every command builder is checked
//! against a hand-written hex expectation taken from the printer manual.
//!
//! ## Test Coverage
//!
//! - **Fixed commands**: single-byte and ESC/GS sequences with no parameters
//! - **Parametrized commands**: prefix plus validated parameter bytes, at the
//!   edges of each legal range
//! - **Layout**: centering, item lines, and full receipt-width output
//! - **Status decoding**: printer-info and error-info byte interpretations

use pretty_assertions::assert_eq;
use recibo::protocol::barcode::{self, BarCodeType};
use recibo::protocol::status::{decode_error_info, decode_printer_info};
use recibo::protocol::{catalog, commands, latin1, text};
use recibo::receipt::{RECEIPT_WIDTH, center, item_line, rule};

// ============================================================================
// FIXED COMMANDS
// ============================================================================

#[test]
fn golden_fixed_commands() {
    assert_eq!(commands::init(), vec![0x1B, 0x40]);
    assert_eq!(commands::clear(), vec![0x10]);
    assert_eq!(commands::print_and_feed_line(), vec![0x0A]);
    assert_eq!(commands::select_receipt_station(), vec![0x1E]);
    assert_eq!(commands::select_slip_station(), vec![0x1C]);
    assert_eq!(commands::set_default_line_spacing(), vec![0x1B, 0x32]);
    assert_eq!(commands::request_status(), vec![0x1D, 0x05]);
}

#[test]
fn golden_cut_variants() {
    assert_eq!(commands::cut_paper(true), vec![0x1D, 0x56, 0x00]);
    assert_eq!(commands::cut_paper(false), vec![0x1D, 0x56, 0x01]);
}

#[test]
fn golden_style_toggles() {
    assert_eq!(text::emphasized(true), vec![0x1B, 0x45, 0x01]);
    assert_eq!(text::emphasized(false), vec![0x1B, 0x45, 0x00]);
    assert_eq!(text::underline(true), vec![0x1B, 0x2D, 0x01]);
    assert_eq!(text::underline(false), vec![0x1B, 0x2D, 0x00]);
    assert_eq!(text::double_wide(true), vec![0x12]);
    assert_eq!(text::double_wide(false), vec![0x13]);
}

#[test]
fn golden_print_mode_bits() {
    assert_eq!(text::select_print_modes(0x00), vec![0x1B, 0x21, 0x00]);
    let combined = text::modes::EMPHASIZED | text::modes::DOUBLE_WIDTH;
    assert_eq!(text::select_print_modes(combined), vec![0x1B, 0x21, 0x28]);
}

// ============================================================================
// PARAMETRIZED COMMANDS
// ============================================================================

#[test]
fn golden_feed_lines_range() {
    assert_eq!(commands::feed_lines(1).unwrap(), vec![0x1B, 0x64, 0x01]);
    assert_eq!(commands::feed_lines(255).unwrap(), vec![0x1B, 0x64, 0xFF]);
    assert!(commands::feed_lines(0).is_err());
    assert!(commands::feed_lines(256).is_err());
}

#[test]
fn golden_line_spacing() {
    assert_eq!(
        commands::set_line_spacing(0).unwrap(),
        vec![0x1B, 0x33, 0x00]
    );
    assert_eq!(
        commands::set_line_spacing(64).unwrap(),
        vec![0x1B, 0x33, 0x40]
    );
    assert!(commands::set_line_spacing(256).is_err());
}

#[test]
fn golden_character_pitch() {
    assert_eq!(
        text::character_pitch(commands::PITCH_STANDARD_80MM as u16).unwrap(),
        vec![0x1B, 0x16, 44]
    );
    assert_eq!(
        text::character_pitch(commands::PITCH_COMPRESSED_80MM as u16).unwrap(),
        vec![0x1B, 0x16, 56]
    );
    assert!(text::character_pitch(0).is_err());
}

#[test]
fn golden_cash_drawer_pulse() {
    assert_eq!(
        commands::open_cash_drawer(55, 55).unwrap(),
        vec![0x1B, 0x70, 0x00, 55, 55]
    );
    assert_eq!(
        commands::open_cash_drawer(0, 255).unwrap(),
        vec![0x1B, 0x70, 0x00, 0x00, 0xFF]
    );
    assert!(commands::open_cash_drawer(256, 55).is_err());
}

#[test]
fn golden_bar_codes() {
    let mut expected = vec![0x1D, 0x6B, 0x00];
    expected.extend(b"012345678905");
    expected.push(0x00);
    assert_eq!(
        barcode::bar_code(BarCodeType::UpcA, "012345678905").unwrap(),
        expected
    );

    let mut expected = vec![0x1D, 0x6B, 0x04];
    expected.extend(b"TX1001");
    expected.push(0x00);
    assert_eq!(
        barcode::bar_code(BarCodeType::Code39, "TX1001").unwrap(),
        expected
    );

    assert_eq!(
        barcode::bar_code_height(80).unwrap(),
        vec![0x1D, 0x68, 80]
    );
    assert!(barcode::bar_code(BarCodeType::Code39, "").is_err());
    assert!(barcode::bar_code(BarCodeType::Code39, "caf\u{e9}").is_err());
}

/// Every catalog template agrees with the corresponding direct builder.
#[test]
fn golden_catalog_matches_builders() {
    assert_eq!(
        catalog::FEED_LINES.encode(&[7]).unwrap(),
        commands::feed_lines(7).unwrap()
    );
    assert_eq!(
        catalog::CUT_PAPER.encode(&[0]).unwrap(),
        commands::cut_paper(true)
    );
    assert_eq!(
        catalog::OPEN_CASH_DRAWER.encode(&[55, 55]).unwrap(),
        commands::open_cash_drawer(55, 55).unwrap()
    );
    assert_eq!(
        catalog::EMPHASIZED.encode(&[1]).unwrap(),
        text::emphasized(true)
    );
    assert_eq!(
        catalog::UNDERLINE.encode(&[0]).unwrap(),
        text::underline(false)
    );
    assert_eq!(
        catalog::LINE_SPACING.encode(&[32]).unwrap(),
        commands::set_line_spacing(32).unwrap()
    );
    assert_eq!(
        catalog::CHARACTER_PITCH.encode(&[44]).unwrap(),
        text::character_pitch(44).unwrap()
    );
    assert_eq!(
        catalog::BAR_CODE_HEIGHT.encode(&[162]).unwrap(),
        barcode::bar_code_height(162).unwrap()
    );
}

/// Builders are pure: repeated calls produce identical bytes.
#[test]
fn golden_encoding_is_deterministic() {
    assert_eq!(commands::init(), commands::init());
    assert_eq!(
        commands::feed_lines(9).unwrap(),
        commands::feed_lines(9).unwrap()
    );
    assert_eq!(
        barcode::bar_code(BarCodeType::Code128, "ABC123").unwrap(),
        barcode::bar_code(BarCodeType::Code128, "ABC123").unwrap()
    );
}

// ============================================================================
// TEXT ENCODING
// ============================================================================

#[test]
fn golden_latin1_text() {
    assert_eq!(latin1::encode("Cafe"), b"Cafe".to_vec());
    assert_eq!(latin1::encode("Caf\u{e9}"), vec![0x43, 0x61, 0x66, 0xE9]);
    // Outside Latin-1 becomes a literal question mark
    assert_eq!(latin1::encode("10\u{20ac}"), vec![0x31, 0x30, 0x3F]);
}

// ============================================================================
// LAYOUT
// ============================================================================

#[test]
fn golden_centering() {
    assert_eq!(center("ABC", 10), "   ABC");
    assert_eq!(center("ABCDEFGHIJK", 5), "ABCDE");
    assert_eq!(
        center("THANK YOU!", RECEIPT_WIDTH),
        "                 THANK YOU!"
    );
}

#[test]
fn golden_item_lines() {
    assert_eq!(item_line("Milk", "$3.00", 12), "Milk   $3.00");
    assert_eq!(
        item_line("Milk", "$3.00", RECEIPT_WIDTH),
        "Milk                                   $3.00"
    );
}

#[test]
fn golden_rules() {
    assert_eq!(rule('=', 8), "========");
    assert_eq!(rule('-', RECEIPT_WIDTH).len(), RECEIPT_WIDTH);
}

// ============================================================================
// STATUS DECODING
// ============================================================================

#[test]
fn golden_printer_info_bytes() {
    let flags = decode_printer_info(0x00);
    assert!(!flags.drawer_open && !flags.busy && !flags.cover_open);

    let flags = decode_printer_info(0x2C);
    assert!(flags.drawer_open);
    assert!(flags.busy);
    assert!(flags.cover_open);
    assert!(!flags.feed_button);
}

#[test]
fn golden_error_info_bytes() {
    let flags = decode_error_info(0x08);
    assert!(flags.knife_error);
    assert!(!flags.busy); // 0x08 means the knife in this byte, not busy

    let flags = decode_error_info(0x20);
    assert!(flags.paper_out);
    assert!(flags.paper_low); // the low mask is a superset of out

    let flags = decode_error_info(0x40);
    assert!(!flags.paper_out);
    assert!(flags.paper_low);
}
