//! Line sink.

use std::io::{self, Write};

/// Writes one value per line to an underlying writer.
///
/// The sink is the external "output" capability of the walkthrough: the
/// pipeline only hands it names, it decides where they go.
#[derive(Debug)]
pub struct LineSink<W> {
    writer: W,
    lines: usize,
}

impl<W: Write> LineSink<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Writes `line` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns the writer's error.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.lines += 1;
        tracing::trace!(line, "wrote line");
        Ok(())
    }

    /// Number of lines written so far.
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Flushes and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the writer's flush error.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
