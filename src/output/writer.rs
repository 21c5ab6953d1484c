use std::io::{self, Write};

/// Writes newline-terminated console messages to the wrapped sink.
pub struct LineWriter<W> {
    inner: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line() -> io::Result<()> {
        let mut writer = LineWriter::new(Vec::new());
        writer.write_line("first")?;
        writer.write_line("second")?;
        assert_eq!(writer.into_inner(), b"first\nsecond\n");
        Ok(())
    }
}
