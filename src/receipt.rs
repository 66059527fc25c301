//! # Receipt Layout
//!
//! Fixed-width text layout for the receipt station, plus a builder that
//! drives a [`PrinterSession`] line by line.
//!
//! ## Layout Model
//!
//! The receipt station prints 44 columns at standard pitch. Double-wide
//! glyphs consume twice the horizontal pitch, so double-wide lines are laid
//! out at 22 columns. The layout functions are pure: they shape strings,
//! the session does the sending.
//!
//! Lines are flushed to the device as they are composed — the builder keeps
//! no buffer beyond the current line, so there is no batching and no
//! rollback. A receipt interrupted by an error has already printed its
//! earlier lines.
//!
//! ## Example
//!
//! ```no_run
//! use recibo::printer::{ConnectionConfig, PrinterSession};
//! use recibo::protocol::barcode::BarCodeType;
//! use recibo::receipt::ReceiptBuilder;
//! use recibo::transport::SerialChannel;
//!
//! let mut session: PrinterSession<SerialChannel> =
//!     PrinterSession::new(ConnectionConfig::new("/dev/ttyUSB0"));
//! session.connect()?;
//! session.initialize()?;
//!
//! ReceiptBuilder::new(&mut session)
//!     .header("CORNER GROCERY", Some("123 Main Street"))?
//!     .item("Milk", "$3.00")?
//!     .item("Bread", "$2.50")?
//!     .separator()?
//!     .total("TOTAL:", "$5.50")?
//!     .bar_code(BarCodeType::Code39, "TX1001")?
//!     .footer(Some("TX1001"), Some("2026-08-30 14:31:00"))?
//!     .complete()?;
//! # Ok::<(), recibo::PrinterError>(())
//! ```

use tracing::debug;

use crate::error::PrinterError;
use crate::printer::PrinterSession;
use crate::protocol::barcode::BarCodeType;
use crate::transport::ByteChannel;

/// Columns per line at standard pitch on 80 mm receipt paper
pub const RECEIPT_WIDTH: usize = 44;

/// Columns per line in double-wide mode (glyphs take twice the pitch)
pub const DOUBLE_WIDE_WIDTH: usize = 22;

/// Lines fed before cutting in [`ReceiptBuilder::complete`]
const COMPLETE_FEED_LINES: u16 = 3;

// ============================================================================
// LAYOUT FUNCTIONS
// ============================================================================

/// Center `text` in a line of `width` columns.
///
/// Text at or over `width` is truncated to exactly `width` — tail dropped,
/// no ellipsis. Otherwise the text is left-padded by `(width - len) / 2`
/// spaces; the integer-division remainder lands on the right implicitly,
/// since the line is simply left shorter than `width`.
///
/// ## Example
///
/// ```
/// use recibo::receipt::center;
///
/// assert_eq!(center("ABC", 10), "   ABC");
/// assert_eq!(center("ABCDEFGHIJK", 5), "ABCDE");
/// ```
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let padding = (width - len) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

/// Lay out a description with a right-flush price in `width` columns.
///
/// When description and price together reach `width`, the description is
/// truncated to `width - len(price) - 1` characters (clamped at zero) so at
/// least one space separates the two. The gap is then padded so the price
/// ends exactly at column `width`.
///
/// ## Example
///
/// ```
/// use recibo::receipt::item_line;
///
/// let line = item_line("Milk", "$3.00", 12);
/// assert_eq!(line, "Milk   $3.00");
/// assert_eq!(line.len(), 12);
/// ```
pub fn item_line(description: &str, price: &str, width: usize) -> String {
    let price_len = price.chars().count();
    let desc: String = if description.chars().count() + price_len >= width {
        let max_desc = width.saturating_sub(price_len + 1);
        description.chars().take(max_desc).collect()
    } else {
        description.to_string()
    };
    let spaces = width.saturating_sub(desc.chars().count() + price_len);
    format!("{}{}{}", desc, " ".repeat(spaces), price)
}

/// A full-width line of one repeated character.
pub fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

// ============================================================================
// RECEIPT BUILDER
// ============================================================================

/// Builds a formatted receipt against a connected session.
///
/// Each method composes one or more 44-column lines (22 in double-wide
/// sections) and sends them immediately. Methods chain through
/// `Result<&mut Self, _>`:
///
/// ```no_run
/// # use recibo::printer::{ConnectionConfig, PrinterSession};
/// # use recibo::receipt::ReceiptBuilder;
/// # use recibo::transport::SerialChannel;
/// # let mut session: PrinterSession<SerialChannel> =
/// #     PrinterSession::new(ConnectionConfig::new("/dev/ttyUSB0"));
/// ReceiptBuilder::new(&mut session)
///     .line("plain")?
///     .separator()?
///     .item("Coffee", "$2.25")?;
/// # Ok::<(), recibo::PrinterError>(())
/// ```
pub struct ReceiptBuilder<'a, C: ByteChannel> {
    session: &'a mut PrinterSession<C>,
}

impl<'a, C: ByteChannel> ReceiptBuilder<'a, C> {
    /// Wrap a session. The session should be connected and initialized.
    pub fn new(session: &'a mut PrinterSession<C>) -> Self {
        Self { session }
    }

    /// Store header: double-wide centered name, optional centered address,
    /// then a full-width `=` rule.
    pub fn header(
        &mut self,
        store_name: &str,
        address: Option<&str>,
    ) -> Result<&mut Self, PrinterError> {
        self.session.set_double_wide(true)?;
        self.session
            .print_line(&center(store_name, DOUBLE_WIDE_WIDTH))?;
        self.session.set_double_wide(false)?;

        if let Some(address) = address.filter(|a| !a.is_empty()) {
            self.session.print_line(&center(address, RECEIPT_WIDTH))?;
        }

        self.session.print_line(&rule('=', RECEIPT_WIDTH))?;
        Ok(self)
    }

    /// A centered line.
    pub fn center_line(&mut self, text: &str) -> Result<&mut Self, PrinterError> {
        self.session.print_line(&center(text, RECEIPT_WIDTH))?;
        Ok(self)
    }

    /// A plain left-aligned line.
    pub fn line(&mut self, text: &str) -> Result<&mut Self, PrinterError> {
        self.session.print_line(text)?;
        Ok(self)
    }

    /// An empty line.
    pub fn empty_line(&mut self) -> Result<&mut Self, PrinterError> {
        self.session.print_line("")?;
        Ok(self)
    }

    /// A full-width `-` separator.
    pub fn separator(&mut self) -> Result<&mut Self, PrinterError> {
        self.session.print_line(&rule('-', RECEIPT_WIDTH))?;
        Ok(self)
    }

    /// An itemized line: description left, price right-flush.
    pub fn item(&mut self, description: &str, price: &str) -> Result<&mut Self, PrinterError> {
        self.session
            .print_line(&item_line(description, price, RECEIPT_WIDTH))?;
        Ok(self)
    }

    /// An emphasized (bold) line.
    pub fn emphasize(&mut self, text: &str) -> Result<&mut Self, PrinterError> {
        self.session.set_emphasized(true)?;
        self.session.print_line(text)?;
        self.session.set_emphasized(false)?;
        Ok(self)
    }

    /// An underlined line.
    pub fn underline(&mut self, text: &str) -> Result<&mut Self, PrinterError> {
        self.session.set_underline(true)?;
        self.session.print_line(text)?;
        self.session.set_underline(false)?;
        Ok(self)
    }

    /// A double-wide centered line (22 columns).
    pub fn double_wide(&mut self, text: &str) -> Result<&mut Self, PrinterError> {
        self.session.set_double_wide(true)?;
        self.session.print_line(&center(text, DOUBLE_WIDE_WIDTH))?;
        self.session.set_double_wide(false)?;
        Ok(self)
    }

    /// A bar code, followed by a blank line of clearance.
    pub fn bar_code(&mut self, ty: BarCodeType, data: &str) -> Result<&mut Self, PrinterError> {
        self.session.print_bar_code(ty, data)?;
        self.session.print_line("")?;
        Ok(self)
    }

    /// Total line: a full-width `=` rule, then the label/amount line in
    /// emphasized print.
    pub fn total(&mut self, label: &str, amount: &str) -> Result<&mut Self, PrinterError> {
        self.session.print_line(&rule('=', RECEIPT_WIDTH))?;
        self.session.set_emphasized(true)?;
        self.session
            .print_line(&item_line(label, amount, RECEIPT_WIDTH))?;
        self.session.set_emphasized(false)?;
        Ok(self)
    }

    /// Footer: `=` rule, centered thank-you, then optional transaction-id
    /// and date/time lines verbatim.
    pub fn footer(
        &mut self,
        transaction_id: Option<&str>,
        date_time: Option<&str>,
    ) -> Result<&mut Self, PrinterError> {
        self.session.print_line(&rule('=', RECEIPT_WIDTH))?;
        self.session
            .print_line(&center("THANK YOU!", RECEIPT_WIDTH))?;

        if let Some(id) = transaction_id {
            self.session.print_line(&format!("Trans ID: {id}"))?;
        }
        if let Some(dt) = date_time {
            self.session.print_line(&format!("Date/Time: {dt}"))?;
        }
        Ok(self)
    }

    /// Terminal step: feed 3 lines, then attempt a full cut.
    ///
    /// A cut failure is swallowed, not propagated — cutting hardware is
    /// optional on some configurations and must never abort an otherwise
    /// successful receipt. This is the library's sole suppressed-error
    /// site.
    pub fn complete(&mut self) -> Result<&mut Self, PrinterError> {
        self.session.feed_paper(COMPLETE_FEED_LINES)?;

        if let Err(e) = self.session.cut_paper(true) {
            debug!(error = %e, "paper cut failed at end of receipt, continuing");
        }
        Ok(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
