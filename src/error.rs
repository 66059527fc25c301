//! # Error Types
//!
//! This module defines error types used throughout the recibo library.
//!
//! Every printer operation returns `Result<_, PrinterError>`. The variants
//! mirror the ways a POS printer session can fail, so callers can match on
//! the category instead of parsing message strings:
//!
//! - `Configuration` / `InvalidParameter`: caller input is wrong, fix and retry
//! - `Connection`: the serial port could not be opened
//! - `NotConnected`: an operation was attempted before `connect()`
//! - `Transport` / `NoResponse`: the link failed mid-session
//!
//! There is no retry policy at this layer. A failed write or an absent status
//! reply is surfaced immediately; whether to reconnect or retry is the
//! caller's decision.

use thiserror::Error;

/// Main error type for recibo operations
#[derive(Debug, Error)]
pub enum PrinterError {
    /// Missing or invalid connection parameters (e.g. empty port name)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The serial port could not be opened
    #[error("Connection error: {0}")]
    Connection(String),

    /// An operation that requires an open session was called while disconnected
    #[error("Printer is not connected (operation: {operation})")]
    NotConnected {
        /// Name of the operation that was attempted
        operation: &'static str,
    },

    /// I/O failure while sending or flushing on an open channel.
    ///
    /// The session remains Connected after this error; the caller decides
    /// whether to disconnect and reconnect.
    #[error("Transport error during {operation}: {message}")]
    Transport {
        /// Name of the operation that failed
        operation: &'static str,
        /// Underlying failure description
        message: String,
    },

    /// A status request produced no reply byte within the settle window
    #[error("No status response from printer")]
    NoResponse,

    /// A command parameter is outside its documented range
    #[error("Invalid parameter for {command}: {name}={value} (valid {min}..={max})")]
    InvalidParameter {
        /// Command the parameter belongs to
        command: &'static str,
        /// Parameter name from the command template
        name: &'static str,
        /// The offending value
        value: u16,
        /// Lower bound (inclusive)
        min: u16,
        /// Upper bound (inclusive)
        max: u16,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
