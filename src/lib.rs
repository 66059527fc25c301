//! # Recibo - NCR 7167 POS Printer Library
//!
//! Recibo is a Rust library for driving the NCR 7167 two-station
//! point-of-sale printer over RS-232C. It provides:
//!
//! - **Protocol implementation**: ESC/POS-style command builders and a
//!   validated parametrized-command catalog
//! - **Status decoding**: drawer, cover, knife, and paper sensor flags
//! - **Session management**: a connect/disconnect state machine with
//!   device settle timing
//! - **Receipt layout**: 44-column formatting and a chaining receipt builder
//!
//! ## Quick Start
//!
//! ```no_run
//! use recibo::{
//!     printer::{ConnectionConfig, PrinterSession, Station},
//!     receipt::ReceiptBuilder,
//!     transport::SerialChannel,
//! };
//!
//! // Open connection to printer
//! let config = ConnectionConfig::new("/dev/ttyUSB0");
//! let mut session: PrinterSession<SerialChannel> = PrinterSession::new(config);
//! session.connect()?;
//!
//! // Reset to power-on defaults, then select the receipt station
//! session.initialize()?;
//! session.select_station(Station::Receipt)?;
//!
//! // Print a formatted receipt
//! ReceiptBuilder::new(&mut session)
//!     .header("CORNER GROCERY", Some("123 Main Street"))?
//!     .item("Milk", "$3.00")?
//!     .item("Bread", "$2.50")?
//!     .total("TOTAL:", "$5.50")?
//!     .footer(Some("TX1001"), None)?
//!     .complete()?;
//!
//! session.disconnect();
//! # Ok::<(), recibo::PrinterError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Command builders, command catalog, status decoding |
//! | [`printer`] | Connection configuration and session state machine |
//! | [`receipt`] | Fixed-width layout and the receipt builder |
//! | [`transport`] | Byte channel abstraction and the serial backend |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Currently tested with:
//! - NCR 7167 (two-station: 80mm receipt + slip, RS-232C, 9600 8N1 XON/XOFF)
//!
//! Other NCR 7167-series printers sharing the command set should work with
//! appropriate configuration adjustments.

pub mod error;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod transport;

// Re-exports for convenience
pub use error::PrinterError;
pub use printer::{ConnectionConfig, PrinterSession};
pub use transport::SerialChannel;
