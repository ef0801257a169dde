//! Line reassembly for the receiver's serial stream.
//!
//! Serial reads return whatever bytes happen to be in the driver buffer,
//! so a single `read()` may deliver half a line, or several lines at
//! once. `LineFramer` buffers raw chunks and hands back only complete
//! newline-terminated lines; the trailing `\n` (and a `\r` before it,
//! if the firmware uses CRLF) is stripped.

/// Accumulates raw serial chunks and yields complete lines.
#[derive(Debug, Default)]
pub struct LineFramer {
    buf: Vec<u8>,
}

impl LineFramer {
    /// Creates an empty framer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `chunk` to the internal buffer and returns every line
    /// completed by it, oldest first. Bytes after the last newline stay
    /// buffered until a later chunk completes them.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Vec<u8>> {
        self.buf.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.buf.drain(..=pos).collect();
            line.pop(); // the '\n' itself
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            lines.push(line);
        }
        lines
    }

    /// Number of buffered bytes not yet forming a complete line.
    pub fn pending_len(&self) -> usize {
        self.buf.len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_whole_line_yields_one_line() {
        // Arrange
        let mut framer = LineFramer::new();

        // Act
        let lines = framer.push(b"12\n");

        // Assert
        assert_eq!(lines, vec![b"12".to_vec()]);
        assert_eq!(framer.pending_len(), 0);
    }

    #[test]
    fn test_push_partial_chunks_assembles_line_across_reads() {
        // Arrange
        let mut framer = LineFramer::new();

        // Act
        let first = framer.push(b"1");
        let second = framer.push(b"2");
        let third = framer.push(b"\n");

        // Assert
        assert!(first.is_empty());
        assert!(second.is_empty());
        assert_eq!(third, vec![b"12".to_vec()]);
    }

    #[test]
    fn test_push_multiple_lines_in_one_chunk() {
        // Arrange
        let mut framer = LineFramer::new();

        // Act
        let lines = framer.push(b"12\n7\n250\n");

        // Assert
        assert_eq!(
            lines,
            vec![b"12".to_vec(), b"7".to_vec(), b"250".to_vec()]
        );
    }

    #[test]
    fn test_push_strips_carriage_return_before_newline() {
        // Arrange: Arduino's Serial.println terminates lines with CRLF
        let mut framer = LineFramer::new();

        // Act
        let lines = framer.push(b"42\r\n");

        // Assert
        assert_eq!(lines, vec![b"42".to_vec()]);
    }

    #[test]
    fn test_trailing_bytes_stay_buffered() {
        // Arrange
        let mut framer = LineFramer::new();

        // Act
        let lines = framer.push(b"12\n25");

        // Assert
        assert_eq!(lines, vec![b"12".to_vec()]);
        assert_eq!(framer.pending_len(), 2);

        // The buffered tail is completed by the next chunk.
        let more = framer.push(b"0\n");
        assert_eq!(more, vec![b"250".to_vec()]);
    }

    #[test]
    fn test_empty_line_is_yielded_as_empty() {
        // A bare newline is still a line boundary; the decoder rejects it.
        let mut framer = LineFramer::new();
        let lines = framer.push(b"\n");
        assert_eq!(lines, vec![Vec::<u8>::new()]);
    }
}
