use std::io::{self, Write};

/// Writes everything to two sinks, e.g. the terminal and an answers file.
#[derive(Debug)]
pub struct TeeWriter<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}
