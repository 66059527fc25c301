//! # Parametrized Command Templates
//!
//! Parametrized NCR 7167 commands share one shape: a fixed prefix (one or two
//! escape bytes plus a sub-opcode), followed by parameters sent as single
//! unsigned bytes in declared order. This module captures that shape as
//! constant data so the builders in [`super::commands`], [`super::text`] and
//! [`super::barcode`] all validate against the same declared ranges, and so
//! tests can check encoded output against the template rather than against a
//! second hand-typed byte list.
//!
//! Parameters here are unsigned but taken as `u16` so an out-of-range value
//! like 256 is representable and can be reported with its bounds instead of
//! being silently wrapped by an `as u8` cast.

use crate::error::PrinterError;

use super::commands::{ESC, GS};

/// Declared range for one template parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamRange {
    /// Parameter name, used in `InvalidParameter` errors
    pub name: &'static str,
    /// Lower bound (inclusive)
    pub min: u16,
    /// Upper bound (inclusive)
    pub max: u16,
}

impl ParamRange {
    const fn new(name: &'static str, min: u16, max: u16) -> Self {
        Self { name, min, max }
    }
}

/// A parametrized command template: prefix bytes plus parameter declarations.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// Command name, used in `InvalidParameter` errors
    pub name: &'static str,
    /// Fixed prefix bytes (escape byte(s) + sub-opcode)
    pub prefix: &'static [u8],
    /// Parameter declarations, in wire order
    pub params: &'static [ParamRange],
}

impl Template {
    /// Validate `values` against the declared ranges.
    ///
    /// Fails with [`PrinterError::InvalidParameter`] on the first value
    /// outside its range. `values` must have one entry per declared
    /// parameter; arity is a caller bug, not runtime input, so it is
    /// asserted rather than returned as an error.
    pub fn validate(&self, values: &[u16]) -> Result<(), PrinterError> {
        assert_eq!(
            values.len(),
            self.params.len(),
            "template {} takes {} parameter(s)",
            self.name,
            self.params.len()
        );
        for (range, &value) in self.params.iter().zip(values) {
            if value < range.min || value > range.max {
                return Err(PrinterError::InvalidParameter {
                    command: self.name,
                    name: range.name,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    /// Encode the command: prefix bytes followed by each parameter as a
    /// single unsigned byte, in declared order. Validation happens first;
    /// nothing is produced for out-of-range input.
    pub fn encode(&self, values: &[u16]) -> Result<Vec<u8>, PrinterError> {
        self.validate(values)?;
        let mut out = Vec::with_capacity(self.prefix.len() + values.len());
        out.extend_from_slice(self.prefix);
        out.extend(values.iter().map(|&v| v as u8));
        Ok(out)
    }
}

// ============================================================================
// TEMPLATE TABLE
// ============================================================================

/// Print and feed n lines (ESC d n), n in 1..=255
pub const FEED_LINES: Template = Template {
    name: "feed_lines",
    prefix: &[ESC, 0x64],
    params: &[ParamRange::new("lines", 1, 255)],
};

/// Open cash drawer (ESC p 0x00 on off), timing in 2 ms units
pub const OPEN_CASH_DRAWER: Template = Template {
    name: "open_cash_drawer",
    prefix: &[ESC, 0x70, 0x00],
    params: &[
        ParamRange::new("on_time", 0, 255),
        ParamRange::new("off_time", 0, 255),
    ],
};

/// Cut paper (GS V m), m = 0 full / 1 partial
pub const CUT_PAPER: Template = Template {
    name: "cut_paper",
    prefix: &[GS, 0x56],
    params: &[ParamRange::new("mode", 0, 1)],
};

/// Select emphasized mode (ESC E n), n = 0 off / 1 on
pub const EMPHASIZED: Template = Template {
    name: "set_emphasized",
    prefix: &[ESC, 0x45],
    params: &[ParamRange::new("enable", 0, 1)],
};

/// Select underline mode (ESC - n), n = 0 off / 1 on
pub const UNDERLINE: Template = Template {
    name: "set_underline",
    prefix: &[ESC, 0x2D],
    params: &[ParamRange::new("enable", 0, 1)],
};

/// Set line spacing (ESC 3 n), units of 1/406" on the receipt station
pub const LINE_SPACING: Template = Template {
    name: "set_line_spacing",
    prefix: &[ESC, 0x33],
    params: &[ParamRange::new("spacing", 0, 255)],
};

/// Select character pitch (ESC SYN n), characters per line
pub const CHARACTER_PITCH: Template = Template {
    name: "set_character_pitch",
    prefix: &[ESC, 0x16],
    params: &[ParamRange::new("pitch", 1, 255)],
};

/// Set bar code height (GS h n), height in dots
pub const BAR_CODE_HEIGHT: Template = Template {
    name: "set_bar_code_height",
    prefix: &[GS, 0x68],
    params: &[ParamRange::new("height", 1, 255)],
};

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_in_range() {
        assert_eq!(FEED_LINES.encode(&[3]).unwrap(), vec![0x1B, 0x64, 0x03]);
        assert_eq!(FEED_LINES.encode(&[255]).unwrap(), vec![0x1B, 0x64, 0xFF]);
    }

    #[test]
    fn test_encode_multi_param_order() {
        let bytes = OPEN_CASH_DRAWER.encode(&[55, 110]).unwrap();
        assert_eq!(bytes, vec![0x1B, 0x70, 0x00, 55, 110]);
    }

    #[test]
    fn test_below_range_fails() {
        let err = FEED_LINES.encode(&[0]).unwrap_err();
        match err {
            PrinterError::InvalidParameter {
                command,
                name,
                value,
                min,
                max,
            } => {
                assert_eq!(command, "feed_lines");
                assert_eq!(name, "lines");
                assert_eq!(value, 0);
                assert_eq!(min, 1);
                assert_eq!(max, 255);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_above_range_fails() {
        assert!(matches!(
            BAR_CODE_HEIGHT.encode(&[256]),
            Err(PrinterError::InvalidParameter { value: 256, .. })
        ));
    }

    #[test]
    fn test_cut_mode_range() {
        assert!(CUT_PAPER.encode(&[0]).is_ok());
        assert!(CUT_PAPER.encode(&[1]).is_ok());
        assert!(CUT_PAPER.encode(&[2]).is_err());
    }

    #[test]
    #[should_panic(expected = "takes 1 parameter")]
    fn test_arity_mismatch_panics() {
        let _ = FEED_LINES.encode(&[1, 2]);
    }
}
