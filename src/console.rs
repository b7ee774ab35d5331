//! Sink-injected text helpers: styled messages, leveled log lines,
//! and ASCII figure drawing.
//!
//! Nothing here writes to stdout directly; every printing helper takes
//! an `io::Write` sink so tests capture output in a `Vec<u8>` and
//! applications pass `std::io::stdout()`. These helpers are
//! diagnostics, not part of any computational contract.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::MathError;

/// Style of a formatted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageStyle {
    fn prefix(self) -> &'static str {
        match self {
            MessageStyle::Info => "[INFO]",
            MessageStyle::Success => "[OK]",
            MessageStyle::Warning => "[WARN]",
            MessageStyle::Error => "[ERROR]",
        }
    }
}

/// Formats a message with its style prefix.
///
/// # Examples
/// ```
/// use mathkit::console::{format_message, MessageStyle};
/// assert_eq!(format_message("done", MessageStyle::Success), "[OK] done");
/// ```
pub fn format_message(message: &str, style: MessageStyle) -> String {
    format!("{} {}", style.prefix(), message)
}

/// Log level for [`log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Writes one leveled log line with an epoch-milliseconds timestamp
/// prefix: `[<millis>] LEVEL message`.
pub fn log<W: Write>(sink: &mut W, level: LogLevel, message: &str) -> io::Result<()> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    writeln!(sink, "[{millis}] {} {message}", level.label())
}

/// Draws a `width` × `height` rectangle of `symbol` characters.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if either dimension is zero.
/// I/O failures from the sink surface as
/// [`MathError::UnsupportedOperation`] carrying the OS message.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// mathkit::console::draw_rectangle(&mut out, 3, 2, '*').unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "***\n***\n");
/// ```
pub fn draw_rectangle<W: Write>(
    sink: &mut W,
    width: usize,
    height: usize,
    symbol: char,
) -> Result<(), MathError> {
    if width == 0 || height == 0 {
        return Err(MathError::InvalidRange(format!(
            "rectangle dimensions must be positive, got {width}x{height}"
        )));
    }
    let row: String = std::iter::repeat(symbol).take(width).collect();
    for _ in 0..height {
        writeln!(sink, "{row}").map_err(io_error)?;
    }
    Ok(())
}

/// Draws a left-aligned triangle of `symbol` characters, one more per
/// row, `height` rows tall.
///
/// # Errors
/// Same conditions as [`draw_rectangle`].
///
/// # Examples
/// ```
/// let mut out = Vec::new();
/// mathkit::console::draw_triangle(&mut out, 3, '#').unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "#\n##\n###\n");
/// ```
pub fn draw_triangle<W: Write>(sink: &mut W, height: usize, symbol: char) -> Result<(), MathError> {
    if height == 0 {
        return Err(MathError::InvalidRange(
            "triangle height must be positive".into(),
        ));
    }
    for row in 1..=height {
        let line: String = std::iter::repeat(symbol).take(row).collect();
        writeln!(sink, "{line}").map_err(io_error)?;
    }
    Ok(())
}

fn io_error(e: io::Error) -> MathError {
    MathError::UnsupportedOperation(format!("sink write failed: {e}"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_prefixes() {
        assert_eq!(format_message("hi", MessageStyle::Info), "[INFO] hi");
        assert_eq!(format_message("hi", MessageStyle::Success), "[OK] hi");
        assert_eq!(format_message("hi", MessageStyle::Warning), "[WARN] hi");
        assert_eq!(format_message("hi", MessageStyle::Error), "[ERROR] hi");
    }

    #[test]
    fn test_log_line_shape() {
        let mut out = Vec::new();
        log(&mut out, LogLevel::Warn, "low precision").unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with('['));
        assert!(line.contains("] WARN low precision"));
        assert!(line.ends_with('\n'));
        // timestamp parses as an integer
        let millis = &line[1..line.find(']').unwrap()];
        assert!(millis.parse::<u128>().is_ok());
    }

    #[test]
    fn test_draw_rectangle() {
        let mut out = Vec::new();
        draw_rectangle(&mut out, 4, 2, '*').unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "****\n****\n");

        assert!(matches!(
            draw_rectangle(&mut Vec::new(), 0, 2, '*'),
            Err(MathError::InvalidRange(_))
        ));
        assert!(matches!(
            draw_rectangle(&mut Vec::new(), 2, 0, '*'),
            Err(MathError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_draw_triangle() {
        let mut out = Vec::new();
        draw_triangle(&mut out, 4, '#').unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#\n##\n###\n####\n");

        assert!(matches!(
            draw_triangle(&mut Vec::new(), 0, '#'),
            Err(MathError::InvalidRange(_))
        ));
    }
}
