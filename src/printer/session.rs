//! # Printer Session
//!
//! Stateful façade over a [`ByteChannel`]: lifecycle, command dispatch,
//! status queries, and the high-level operations callers actually use.
//!
//! ## State Machine
//!
//! ```text
//! Disconnected --connect()--> Connected --disconnect()--> Disconnected
//! ```
//!
//! Every command-sending and status operation requires Connected; calling
//! one while Disconnected is a programming/configuration error
//! ([`PrinterError::NotConnected`]), not a transient fault. `connect()` on
//! an already-connected session is a logged no-op; `disconnect()` is
//! idempotent and always reaches Disconnected, even if closing the channel
//! fails.
//!
//! ## Blocking and Concurrency
//!
//! All operations are synchronous. A few insert fixed settle delays for
//! documented device latencies (1 s after `ESC @`, 100 ms before reading a
//! status reply); the configured transport timeout is otherwise the only
//! bound on blocking. The session has no internal locking: one caller
//! thread drives one session at a time, and concurrent calls on the same
//! session must be serialized by the caller. There is no retry policy at
//! this layer.
//!
//! ## Example
//!
//! ```no_run
//! use recibo::printer::{ConnectionConfig, PrinterSession};
//! use recibo::transport::SerialChannel;
//!
//! let config = ConnectionConfig::new("/dev/ttyUSB0");
//! let mut session: PrinterSession<SerialChannel> = PrinterSession::new(config);
//! session.connect()?;
//! session.initialize()?;
//! session.print_line("Hello from the receipt station")?;
//! session.cut_paper(true)?;
//! session.disconnect();
//! # Ok::<(), recibo::PrinterError>(())
//! ```

use std::thread;
use std::time::Duration;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::error::PrinterError;
use crate::protocol::{barcode, commands, latin1, status, text};
use crate::transport::ByteChannel;

use super::config::{ConnectionConfig, Station};

/// Delay after opening the port, letting the link stabilize (ms)
const CONNECT_SETTLE_MS: u64 = 100;

/// Delay after `ESC @`, the device's documented reset latency (ms)
const INIT_SETTLE_MS: u64 = 1000;

/// Bounded wait for a status reply byte; one fixed delay, not a poll loop (ms)
const STATUS_SETTLE_MS: u64 = 100;

/// Pause between initialize and the diagnostic lines during self test (ms)
const SELF_TEST_PAUSE_MS: u64 = 500;

/// Default cash drawer pulse timing: 55 × 2 ms = 110 ms on-time, as
/// recommended for NCR drawers.
const DRAWER_DEFAULT_TIMING: u16 = 55;

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected,
}

/// A session with one physical printer.
///
/// Generic over the [`ByteChannel`] transport; production code uses
/// [`crate::transport::SerialChannel`], tests use an in-memory mock. The
/// channel is exclusively owned by the session between `connect` and
/// `disconnect`.
pub struct PrinterSession<C: ByteChannel> {
    config: ConnectionConfig,
    channel: Option<C>,
}

impl<C: ByteChannel> PrinterSession<C> {
    /// Create a session for the given configuration. Starts Disconnected;
    /// the config is fixed for the life of the session.
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            channel: None,
        }
    }

    /// The configuration this session was created with.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        if self.channel.is_some() {
            SessionState::Connected
        } else {
            SessionState::Disconnected
        }
    }

    /// Whether the session is connected.
    pub fn is_connected(&self) -> bool {
        self.channel.is_some()
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Open the channel and transition to Connected.
    ///
    /// A no-op (logged) if already connected. Fails with
    /// [`PrinterError::Configuration`] when the port name is empty and
    /// [`PrinterError::Connection`] when the channel cannot be opened; the
    /// session stays Disconnected on failure.
    pub fn connect(&mut self) -> Result<(), PrinterError> {
        if self.channel.is_some() {
            warn!("printer is already connected");
            return Ok(());
        }
        if self.config.port_name.is_empty() {
            return Err(PrinterError::Configuration(
                "Port name is not configured".to_string(),
            ));
        }

        let channel = C::open(&self.config)?;
        self.channel = Some(channel);

        info!(port = %self.config.port_name, "connected to printer");

        // Let the link stabilize before the first command
        thread::sleep(Duration::from_millis(CONNECT_SETTLE_MS));
        Ok(())
    }

    /// Close the channel and transition to Disconnected.
    ///
    /// Idempotent. A channel-close failure is logged but never blocks the
    /// state transition — cleanup is best-effort.
    pub fn disconnect(&mut self) {
        let Some(mut channel) = self.channel.take() else {
            return;
        };
        if let Err(e) = channel.close() {
            warn!(error = %e, "error while closing printer channel");
        }
        info!("disconnected from printer");
    }

    // ========================================================================
    // COMMAND DISPATCH
    // ========================================================================

    /// Write `command` to the channel in one atomic write, then flush.
    ///
    /// Requires Connected. A short write or I/O failure surfaces as
    /// [`PrinterError::Transport`]; the session stays Connected and the
    /// caller decides whether to disconnect.
    pub fn send_command(&mut self, command: &[u8]) -> Result<(), PrinterError> {
        self.send("send_command", command)
    }

    /// Internal dispatch carrying the high-level operation name for errors.
    fn send(&mut self, operation: &'static str, command: &[u8]) -> Result<(), PrinterError> {
        let channel = self
            .channel
            .as_mut()
            .ok_or(PrinterError::NotConnected { operation })?;

        debug!(operation, len = command.len(), "sending command");

        channel
            .write_all(command)
            .map_err(|e| PrinterError::Transport {
                operation,
                message: e.to_string(),
            })?;
        channel.flush().map_err(|e| PrinterError::Transport {
            operation,
            message: format!("flush failed: {e}"),
        })
    }

    // ========================================================================
    // TEXT
    // ========================================================================

    /// Send text without a line feed, encoded as Latin-1. Empty text is a
    /// no-op.
    pub fn send_text(&mut self, txt: &str) -> Result<(), PrinterError> {
        if txt.is_empty() {
            return Ok(());
        }
        let bytes = latin1::encode(txt);
        self.send("send_text", &bytes)
    }

    /// Print a line of text: Latin-1 payload followed by LF, sent as one
    /// write.
    pub fn print_line(&mut self, txt: &str) -> Result<(), PrinterError> {
        let mut bytes = latin1::encode(txt);
        bytes.extend(commands::print_and_feed_line());
        self.send("print_line", &bytes)
    }

    /// Print an empty line (just a line feed).
    pub fn empty_line(&mut self) -> Result<(), PrinterError> {
        self.send("empty_line", &commands::print_and_feed_line())
    }

    // ========================================================================
    // PRINTER CONTROL
    // ========================================================================

    /// Initialize the printer (`ESC @`), then block for the device's
    /// documented reset settle time (1 s).
    pub fn initialize(&mut self) -> Result<(), PrinterError> {
        info!("initializing printer");
        self.send("initialize", &commands::init())?;
        thread::sleep(Duration::from_millis(INIT_SETTLE_MS));
        Ok(())
    }

    /// Discard buffered print data (DLE clear).
    pub fn clear(&mut self) -> Result<(), PrinterError> {
        self.send("clear", &commands::clear())
    }

    /// Select the receipt or slip station. Write-only: the device holds the
    /// active-station state, this layer does not track it.
    pub fn select_station(&mut self, station: Station) -> Result<(), PrinterError> {
        debug!(?station, "selecting station");
        let cmd = match station {
            Station::Receipt => commands::select_receipt_station(),
            Station::Slip => commands::select_slip_station(),
        };
        self.send("select_station", &cmd)
    }

    /// Feed `lines` lines (1-255).
    pub fn feed_paper(&mut self, lines: u16) -> Result<(), PrinterError> {
        let cmd = commands::feed_lines(lines)?;
        self.send("feed_paper", &cmd)
    }

    /// Cut the receipt — full cut or partial (hinged) cut.
    pub fn cut_paper(&mut self, full: bool) -> Result<(), PrinterError> {
        debug!(full, "cutting paper");
        self.send("cut_paper", &commands::cut_paper(full))
    }

    /// Fire the cash drawer with the recommended 110 ms pulse.
    pub fn open_cash_drawer(&mut self) -> Result<(), PrinterError> {
        self.open_cash_drawer_with(DRAWER_DEFAULT_TIMING, DRAWER_DEFAULT_TIMING)
    }

    /// Fire the cash drawer with explicit pulse timing in 2 ms units.
    pub fn open_cash_drawer_with(
        &mut self,
        on_time: u16,
        off_time: u16,
    ) -> Result<(), PrinterError> {
        debug!(on_time, off_time, "opening cash drawer");
        let cmd = commands::open_cash_drawer(on_time, off_time)?;
        self.send("open_cash_drawer", &cmd)
    }

    // ========================================================================
    // PRINT CHARACTERISTICS
    // ========================================================================

    /// Enable or disable emphasized (bold) print.
    pub fn set_emphasized(&mut self, enable: bool) -> Result<(), PrinterError> {
        self.send("set_emphasized", &text::emphasized(enable))
    }

    /// Enable or disable underline.
    pub fn set_underline(&mut self, enable: bool) -> Result<(), PrinterError> {
        self.send("set_underline", &text::underline(enable))
    }

    /// Enable or disable double-wide characters.
    pub fn set_double_wide(&mut self, enable: bool) -> Result<(), PrinterError> {
        self.send("set_double_wide", &text::double_wide(enable))
    }

    /// Set characters per line; see the pitch constants in
    /// [`crate::protocol::commands`].
    pub fn set_character_pitch(&mut self, pitch: u16) -> Result<(), PrinterError> {
        let cmd = text::character_pitch(pitch)?;
        self.send("set_character_pitch", &cmd)
    }

    /// Set line spacing (1/406" units on the receipt station).
    pub fn set_line_spacing(&mut self, spacing: u16) -> Result<(), PrinterError> {
        let cmd = commands::set_line_spacing(spacing)?;
        self.send("set_line_spacing", &cmd)
    }

    /// Restore the 1/6" default line spacing.
    pub fn set_default_line_spacing(&mut self) -> Result<(), PrinterError> {
        self.send("set_line_spacing", &commands::set_default_line_spacing())
    }

    // ========================================================================
    // BAR CODES
    // ========================================================================

    /// Print a bar code. `data` must be non-empty ASCII.
    pub fn print_bar_code(
        &mut self,
        ty: barcode::BarCodeType,
        data: &str,
    ) -> Result<(), PrinterError> {
        debug!(?ty, data, "printing bar code");
        let cmd = barcode::bar_code(ty, data)?;
        self.send("print_bar_code", &cmd)
    }

    /// Set bar code height in dots (1-255).
    pub fn set_bar_code_height(&mut self, height: u16) -> Result<(), PrinterError> {
        let cmd = barcode::bar_code_height(height)?;
        self.send("set_bar_code_height", &cmd)
    }

    // ========================================================================
    // STATUS
    // ========================================================================

    /// Request the printer's status byte.
    ///
    /// Sends `GS 0x05`, waits one fixed settle delay (100 ms) for the
    /// device to answer, then reads buffered input. Fails with
    /// [`PrinterError::NoResponse`] if nothing arrived. The returned byte is
    /// decoded by the caller with [`status::decode_printer_info`] or
    /// [`status::decode_error_info`] depending on which byte type the
    /// device is configured to transmit — flags are derived fresh per
    /// request, never cached.
    pub fn request_status(&mut self) -> Result<u8, PrinterError> {
        self.send("request_status", &commands::request_status())?;

        thread::sleep(Duration::from_millis(STATUS_SETTLE_MS));

        let channel = self.channel.as_mut().ok_or(PrinterError::NotConnected {
            operation: "request_status",
        })?;
        let reply = channel
            .read_available()
            .map_err(|e| PrinterError::Transport {
                operation: "request_status",
                message: e.to_string(),
            })?;

        reply.first().copied().ok_or(PrinterError::NoResponse)
    }

    /// Whether receipt paper is present (error-information byte grouping).
    pub fn is_paper_present(&mut self) -> Result<bool, PrinterError> {
        let byte = self.request_status()?;
        Ok(!status::decode_error_info(byte).paper_out)
    }

    /// Whether receipt paper is low, including out (error-information byte
    /// grouping — the low mask is a superset of the out bit).
    pub fn is_paper_low(&mut self) -> Result<bool, PrinterError> {
        let byte = self.request_status()?;
        Ok(status::decode_error_info(byte).paper_low)
    }

    // ========================================================================
    // SELF TEST
    // ========================================================================

    /// Print a fixed diagnostic script exercising each formatting mode.
    ///
    /// Scenario: initialize, pause, select the receipt station, print
    /// labeled diagnostic lines (date, port, baud), one line per formatting
    /// mode, a completion line, feed, then attempt a cut. The cut is the
    /// one tolerated failure — cutting hardware is optional.
    pub fn perform_self_test(&mut self) -> Result<(), PrinterError> {
        info!("performing printer self test");

        self.initialize()?;
        thread::sleep(Duration::from_millis(SELF_TEST_PAUSE_MS));

        self.select_station(Station::Receipt)?;
        self.print_line("=== NCR 7167 PRINTER TEST ===")?;
        self.empty_line()?;
        self.print_line(&format!(
            "Date: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ))?;
        self.print_line(&format!("Port: {}", self.config.port_name))?;
        self.print_line(&format!("Baud Rate: {}", self.config.baud_rate))?;
        self.empty_line()?;

        self.set_emphasized(true)?;
        self.print_line("EMPHASIZED TEXT")?;
        self.set_emphasized(false)?;

        self.set_underline(true)?;
        self.print_line("UNDERLINED TEXT")?;
        self.set_underline(false)?;

        self.set_double_wide(true)?;
        self.print_line("DOUBLE WIDE")?;
        self.set_double_wide(false)?;

        self.empty_line()?;
        self.print_line("Test completed successfully!")?;

        self.feed_paper(3)?;

        if let Err(e) = self.cut_paper(true) {
            debug!(error = %e, "paper cutting not available or failed");
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn channel_mut(&mut self) -> Option<&mut C> {
        self.channel.as_mut()
    }
}

// ============================================================================
// TESTS
// ============================================================================
