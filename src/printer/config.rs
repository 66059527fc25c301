//! # Connection Configuration
//!
//! Serial link settings for an NCR 7167 session.
//!
//! ## Defaults
//!
//! The manual's factory RS-232C settings:
//!
//! | Setting | Default |
//! |---------|---------|
//! | Baud rate | 9600 |
//! | Data bits | 8 |
//! | Stop bits | 1 |
//! | Parity | None |
//! | Flow control | XON/XOFF |
//! | Timeout | 5000 ms |
//! | Interface | RS-232C |
//!
//! The configuration is immutable once a session connects; change settings
//! by disconnecting and building a new config.
//!
//! ## Usage
//!
//! ```
//! use recibo::printer::ConnectionConfig;
//!
//! let config = ConnectionConfig::new("/dev/ttyUSB0")
//!     .baud_rate(19200)
//!     .timeout_ms(2000);
//! assert_eq!(config.data_bits, 8);
//! ```

use serde::{Deserialize, Serialize};

/// Default baud rate (manual factory setting)
pub const DEFAULT_BAUD_RATE: u32 = 9600;
/// Default data bits
pub const DEFAULT_DATA_BITS: u8 = 8;
/// Default stop bits
pub const DEFAULT_STOP_BITS: u8 = 1;
/// Default transport timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Flow control modes supported by the printer's serial interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowControl {
    /// No flow control
    None,
    /// Software flow control (XON/XOFF bytes in-band)
    #[default]
    XonXoff,
    /// Hardware flow control (DTR/DSR lines)
    DtrDsr,
}

/// Serial parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    #[default]
    None,
    Odd,
    Even,
}

/// Physical interface variant. USB models expose a CDC serial port, so the
/// session drives both identically; this field exists for caller-facing
/// tooling and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceType {
    #[default]
    Rs232c,
    Usb,
}

/// The two print mechanisms. Selecting a station is itself a command; the
/// device, not this library, holds which station is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Station {
    /// Receipt tape (continuous roll, auto-knife)
    Receipt,
    /// Slip form (inserted document)
    Slip,
}

/// Serial connection settings for a printer session.
///
/// Built with [`ConnectionConfig::new`] plus builder-style setters. All
/// fields are public for inspection; mutating them after `connect()` has no
/// effect on the open channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Serial port identifier (e.g. "/dev/ttyUSB0", "COM3")
    pub port_name: String,
    /// Baud rate
    pub baud_rate: u32,
    /// Data bits (5-8)
    pub data_bits: u8,
    /// Stop bits (1-2)
    pub stop_bits: u8,
    /// Parity
    pub parity: Parity,
    /// Transport timeout in milliseconds — the only bound on how long a
    /// blocking operation may take
    pub timeout_ms: u64,
    /// Flow control mode
    pub flow_control: FlowControl,
    /// Physical interface variant
    pub interface_type: InterfaceType,
}

impl ConnectionConfig {
    /// Create a configuration for `port_name` with manual defaults
    /// (9600-8-N-1, 5000 ms timeout, XON/XOFF).
    pub fn new(port_name: impl Into<String>) -> Self {
        Self {
            port_name: port_name.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            data_bits: DEFAULT_DATA_BITS,
            stop_bits: DEFAULT_STOP_BITS,
            parity: Parity::None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            flow_control: FlowControl::XonXoff,
            interface_type: InterfaceType::Rs232c,
        }
    }

    /// Set the baud rate.
    pub fn baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Set the number of data bits (5-8).
    pub fn data_bits(mut self, data_bits: u8) -> Self {
        self.data_bits = data_bits;
        self
    }

    /// Set the number of stop bits (1-2).
    pub fn stop_bits(mut self, stop_bits: u8) -> Self {
        self.stop_bits = stop_bits;
        self
    }

    /// Set the parity.
    pub fn parity(mut self, parity: Parity) -> Self {
        self.parity = parity;
        self
    }

    /// Set the transport timeout in milliseconds.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the flow control mode.
    pub fn flow_control(mut self, flow_control: FlowControl) -> Self {
        self.flow_control = flow_control;
        self
    }

    /// Set the physical interface variant.
    pub fn interface_type(mut self, interface_type: InterfaceType) -> Self {
        self.interface_type = interface_type;
        self
    }
}

impl Default for ConnectionConfig {
    /// A default config with an *empty port name* — `connect()` rejects it
    /// until a port is set.
    fn default() -> Self {
        Self::new("")
    }
}

// ============================================================================
// TESTS
// ============================================================================
