//! Buffered byte-at-a-time adapter over a [`Read`] implementation.
//!
//! The scanner pulls one byte at a time with a distinguishable end-of-stream
//! signal. This wraps any `Read` in a `BufReader` so OS-level reads happen
//! in bulk while the scanner still consumes one byte at a time.

use std::io::{self, BufReader, Read};

/// Byte-at-a-time view over a buffered reader.
pub struct ByteSource<R> {
    inner: BufReader<R>,
}

impl<R: Read> ByteSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
        }
    }

    /// Pulls the next byte, or `Ok(None)` at a clean end-of-stream.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            return match self.inner.read(&mut byte) {
                Ok(0) => Ok(None),
                Ok(_) => Ok(Some(byte[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => Err(err),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn yields_bytes_in_order_then_none() {
        let mut source = ByteSource::new(Cursor::new(b"abc".to_vec()));
        assert_eq!(source.next_byte().unwrap(), Some(b'a'));
        assert_eq!(source.next_byte().unwrap(), Some(b'b'));
        assert_eq!(source.next_byte().unwrap(), Some(b'c'));
        assert_eq!(source.next_byte().unwrap(), None);
        assert_eq!(source.next_byte().unwrap(), None);
    }

    #[test]
    fn empty_source_yields_none_immediately() {
        let mut source = ByteSource::new(Cursor::new(Vec::new()));
        assert_eq!(source.next_byte().unwrap(), None);
    }
}
