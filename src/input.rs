//! Line Input
//!
//! Line iterator shared by the table loader and the command script reader.
//! Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.

use std::io::{self, BufRead};

/// Iterator over the lines of a reader, decoded lossily
///
/// Strips the `\n` or `\r\n` terminator. Only real I/O failures are
/// yielded as errors.
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }

                let line = match String::from_utf8(std::mem::take(&mut self.buf)) {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::debug!(
                            "Line {} is not valid UTF-8, decoding lossily",
                            self.line_number
                        );
                        String::from_utf8_lossy(e.as_bytes()).into_owned()
                    }
                };
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Lossy counterpart of [`BufRead::lines`]
pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines::new(reader)
}
