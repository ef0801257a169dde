//! Decoder for the device → host wire format.
//!
//! Wire format, one event per line:
//! ```text
//! <ASCII decimal command code>\n
//! ```
//! optionally surrounded by whitespace. No acknowledgement, no framing
//! beyond line boundaries, no checksums — the receiver firmware is a
//! trusted, single-purpose peer.

use thiserror::Error;

/// Errors that can occur while decoding a received line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The line is not a valid non-negative decimal integer
    /// (empty, non-digit characters, not UTF-8, or out of range).
    #[error("malformed command code {raw:?}")]
    MalformedCode { raw: String },
}

/// Decodes one line from the receiver into a command code.
///
/// The bytes are interpreted as UTF-8 text, trimmed of surrounding
/// whitespace, and parsed as a base-10 `u32`.
///
/// # Errors
///
/// Returns [`ProtocolError::MalformedCode`] on any parse failure. The
/// daemon treats this as fatal: the firmware never emits garbage, so a
/// malformed line means the link itself is broken.
pub fn decode_code(line: &[u8]) -> Result<u32, ProtocolError> {
    let malformed = || ProtocolError::MalformedCode {
        raw: String::from_utf8_lossy(line).into_owned(),
    };

    let text = std::str::from_utf8(line).map_err(|_| malformed())?;
    text.trim().parse::<u32>().map_err(|_| malformed())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_decimal() {
        assert_eq!(decode_code(b"12"), Ok(12));
        assert_eq!(decode_code(b"0"), Ok(0));
        assert_eq!(decode_code(b"4294967295"), Ok(u32::MAX));
    }

    #[test]
    fn test_decode_trims_surrounding_whitespace() {
        assert_eq!(decode_code(b"  42  "), Ok(42));
        assert_eq!(decode_code(b"\t7\r"), Ok(7));
    }

    #[test]
    fn test_decode_empty_line_is_malformed() {
        // Arrange / Act
        let result = decode_code(b"");

        // Assert
        assert_eq!(
            result,
            Err(ProtocolError::MalformedCode { raw: String::new() })
        );
    }

    #[test]
    fn test_decode_whitespace_only_is_malformed() {
        assert!(decode_code(b"   ").is_err());
    }

    #[test]
    fn test_decode_non_digit_is_malformed() {
        assert!(decode_code(b"abc").is_err());
        assert!(decode_code(b"12x").is_err());
        assert!(decode_code(b"-5").is_err());
    }

    #[test]
    fn test_decode_overflow_is_malformed() {
        // One past u32::MAX
        assert!(decode_code(b"4294967296").is_err());
    }

    #[test]
    fn test_decode_invalid_utf8_is_malformed() {
        assert!(decode_code(&[0xFF, 0xFE]).is_err());
    }

    #[test]
    fn test_malformed_error_carries_the_raw_line() {
        let err = decode_code(b"junk").unwrap_err();
        assert_eq!(
            err,
            ProtocolError::MalformedCode {
                raw: "junk".to_string()
            }
        );
    }
}
