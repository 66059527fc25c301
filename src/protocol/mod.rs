//! # NCR 7167 Protocol Implementation
//!
//! Low-level command builders for the NCR 7167 two-station POS printer.
//! Everything in this module is a pure function of its inputs: builders
//! return exact byte sequences (or fail validation) and own no I/O.
//!
//! ## Module Structure
//!
//! - [`commands`]: catalog constants and basic commands (init, clear,
//!   stations, feed, cut, cash drawer, status request)
//! - [`catalog`]: parametrized command templates with declared ranges
//! - [`text`]: print characteristics (emphasized, underline, width, pitch)
//! - [`barcode`]: bar code framing and height
//! - [`latin1`]: ISO-8859-1 encoding for printable text
//! - [`status`]: status byte decoding
//!
//! ## Usage Example
//!
//! ```
//! use recibo::protocol::{commands, latin1, text};
//!
//! // Build a styled line by hand
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::emphasized(true));
//! data.extend(latin1::encode("TOTAL  $48.31"));
//! data.extend(commands::print_and_feed_line());
//! data.extend(text::emphasized(false));
//! data.extend(commands::cut_paper(true));
//!
//! // Send `data` through a PrinterSession...
//! ```
//!
//! ## Protocol Reference
//!
//! NCR 7167 Two-Station POS Printer Owner's Manual.

pub mod barcode;
pub mod catalog;
pub mod commands;
pub mod latin1;
pub mod status;
pub mod text;
