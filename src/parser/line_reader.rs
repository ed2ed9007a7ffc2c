use std::io::{self, Bytes, Read};

const NEWLINE: u8 = b'\n';

/// Pulls newline-terminated lines out of a byte source, one byte at a time
pub struct LineReader<R> {
    bytes: Bytes<R>,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader {
            bytes: reader.bytes(),
        }
    }

    /// Read bytes until a newline occurs
    ///
    /// The newline is kept at the end of the returned line. If the source
    /// ends before a newline, whatever was read is returned as is. Once the
    /// source is exhausted the empty string is returned.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = Vec::new();

        for byte in self.bytes.by_ref() {
            let byte = byte?;
            line.push(byte);
            if byte == NEWLINE {
                break;
            }
        }

        String::from_utf8(line).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
