//! # Transport Layer
//!
//! The protocol layer talks to the printer through the [`ByteChannel`]
//! trait and never touches a serial API directly. [`serial::SerialChannel`]
//! is the production implementation; tests substitute an in-memory mock.
//!
//! A channel is exclusively owned by one `PrinterSession` from `connect`
//! until `disconnect` — no sharing, no pooling.

pub mod serial;

use std::io;

use crate::error::PrinterError;
use crate::printer::ConnectionConfig;

/// A bidirectional byte channel to the printer.
///
/// Semantics required of implementations:
///
/// - [`write_all`](Self::write_all) writes the full buffer or fails — a
///   short write must surface as an error, never as partial success.
/// - [`read_available`](Self::read_available) is a non-blocking peek of
///   currently buffered input; it returns an empty vec when nothing is
///   pending.
/// - [`close`](Self::close) is best-effort; the session logs a failure and
///   transitions to Disconnected regardless.
/// - Blocking is bounded only by the configured timeout
///   ([`ConnectionConfig::timeout_ms`]); no method retries internally.
pub trait ByteChannel {
    /// Open a channel with the given connection settings.
    fn open(config: &ConnectionConfig) -> Result<Self, PrinterError>
    where
        Self: Sized;

    /// Write the full buffer, or fail.
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Flush buffered output to the device.
    fn flush(&mut self) -> io::Result<()>;

    /// Read whatever input bytes are currently buffered, without blocking.
    fn read_available(&mut self) -> io::Result<Vec<u8>>;

    /// Release the channel. Best-effort.
    fn close(&mut self) -> io::Result<()>;
}

pub use serial::{SerialChannel, available_ports};
