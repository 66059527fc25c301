//! # Printer Session and Configuration
//!
//! The stateful half of the library: [`ConnectionConfig`] describes the
//! serial link, [`PrinterSession`] drives it.

pub mod config;
pub mod session;

pub use config::{ConnectionConfig, FlowControl, InterfaceType, Parity, Station};
pub use session::{PrinterSession, SessionState};
