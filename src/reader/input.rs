//! Byte producer feeding the reader.

/// Source of raw document bytes.
///
/// The reader pulls chunks through [`read`](InputStream::read) and calls
/// [`close`](InputStream::close) exactly once when it is dropped. A read
/// of 0 bytes signals end of input; errors abort the parse.
///
/// Every [`std::io::Read`] implementor is an `InputStream` with a no-op
/// `close`. Sources that need an explicit teardown (a decompressor
/// flushing its dictionary, a container holding a file handle open)
/// implement the trait directly.
pub trait InputStream {
    /// Fill `buf` with up to `buf.len()` bytes, returning the count
    /// written. 0 means end of input.
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize>;

    /// Release the underlying source. Called exactly once.
    fn close(&mut self) {}
}

impl<R: std::io::Read> InputStream for R {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        std::io::Read::read(self, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_read_is_an_input_stream() {
        let mut cursor = std::io::Cursor::new(b"abc".to_vec());
        let mut buf = [0u8; 8];
        let n = InputStream::read(&mut cursor, &mut buf).unwrap();
        assert_eq!(&buf[..n], b"abc");
        assert_eq!(InputStream::read(&mut cursor, &mut buf).unwrap(), 0);
    }
}
