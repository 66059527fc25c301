//! # Serial Port Channel
//!
//! [`ByteChannel`] implementation over a physical serial port (RS-232C or a
//! USB CDC port), built on the `serialport` crate.
//!
//! ## Flow Control
//!
//! The printer's manual offers XON/XOFF (software, in-band 0x11/0x13 bytes)
//! and DTR/DSR (hardware lines). `serialport` exposes software flow control
//! directly; its hardware mode drives the modem-control lines, which is the
//! closest available mapping for DTR/DSR cabling.
//!
//! ## Timeouts
//!
//! The configured timeout applies to blocking reads and writes at the OS
//! level. It is the only bound on how long a session operation can block —
//! the session itself never polls or retries.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::{DataBits, Parity, SerialPort, StopBits};
use tracing::debug;

use crate::error::PrinterError;
use crate::printer::{ConnectionConfig, FlowControl};

use super::ByteChannel;

/// A serial port channel to the printer.
pub struct SerialChannel {
    port: Box<dyn SerialPort>,
}

impl ByteChannel for SerialChannel {
    fn open(config: &ConnectionConfig) -> Result<Self, PrinterError> {
        let data_bits = match config.data_bits {
            5 => DataBits::Five,
            6 => DataBits::Six,
            7 => DataBits::Seven,
            8 => DataBits::Eight,
            other => {
                return Err(PrinterError::Configuration(format!(
                    "Unsupported data bits: {other} (valid: 5-8)"
                )));
            }
        };
        let stop_bits = match config.stop_bits {
            1 => StopBits::One,
            2 => StopBits::Two,
            other => {
                return Err(PrinterError::Configuration(format!(
                    "Unsupported stop bits: {other} (valid: 1-2)"
                )));
            }
        };
        let parity = match config.parity {
            crate::printer::Parity::None => Parity::None,
            crate::printer::Parity::Odd => Parity::Odd,
            crate::printer::Parity::Even => Parity::Even,
        };
        let flow_control = match config.flow_control {
            FlowControl::None => serialport::FlowControl::None,
            FlowControl::XonXoff => serialport::FlowControl::Software,
            FlowControl::DtrDsr => serialport::FlowControl::Hardware,
        };

        let port = serialport::new(&config.port_name, config.baud_rate)
            .data_bits(data_bits)
            .stop_bits(stop_bits)
            .parity(parity)
            .flow_control(flow_control)
            .timeout(Duration::from_millis(config.timeout_ms))
            .open()
            .map_err(|e| {
                PrinterError::Connection(format!(
                    "Failed to open serial port {}: {}",
                    config.port_name, e
                ))
            })?;

        debug!(port = %config.port_name, baud = config.baud_rate, "serial port opened");
        Ok(Self { port })
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.port.write_all(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.port.flush()
    }

    fn read_available(&mut self) -> io::Result<Vec<u8>> {
        let pending = self.port.bytes_to_read().map_err(io::Error::from)?;
        if pending == 0 {
            return Ok(Vec::new());
        }
        let mut buf = vec![0u8; pending as usize];
        self.port.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn close(&mut self) -> io::Result<()> {
        // The OS handle is released when the port is dropped; flushing is
        // the only explicit cleanup the serial API offers.
        self.port.flush()
    }
}

/// Enumerate serial port identifiers on this machine.
///
/// Used by caller-facing tooling to present a port picker; the protocol
/// layer itself never calls this.
pub fn available_ports() -> Result<Vec<String>, PrinterError> {
    let ports = serialport::available_ports()
        .map_err(|e| PrinterError::Connection(format!("Port enumeration failed: {e}")))?;
    Ok(ports.into_iter().map(|p| p.port_name).collect())
}
