//! Terminal text sink.
//!
//! Repaints a single terminal line in place: carriage return, clear line,
//! prefix, text, then a block cursor. Used by the binary as the rendering
//! surface for the hero and welcome typewriters.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::ports::TextSink;

const CLEAR_LINE: &str = "\r\x1b[2K";
const CURSOR: &str = "▌";

/// Writes each render over the previous one on the same line.
pub struct TerminalSink<W: Write + Send> {
    out: Mutex<W>,
    prefix: String,
}

impl TerminalSink<io::Stdout> {
    /// Sink on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            prefix: String::new(),
        }
    }

    /// Text shown before the typewriter output, e.g. a label.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Ends the repainted line so later output starts on a fresh one.
    pub fn finish_line(&self) -> io::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "terminal sink lock poisoned"))?;
        writeln!(out)?;
        out.flush()
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn paint(&self, text: &str) -> io::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "terminal sink lock poisoned"))?;
        write!(out, "{}{}{}{}", CLEAR_LINE, self.prefix, text, CURSOR)?;
        out.flush()
    }
}

impl<W: Write + Send> TextSink for TerminalSink<W> {
    fn render(&self, text: &str) {
        if let Err(e) = self.paint(text) {
            tracing::trace!("Terminal render failed: {}", e);
        }
    }
}
