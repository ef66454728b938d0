//! Per-run output redirection (`withStdout`/`withDebug`/`withQuiet`).
//! Deliberately separate from the global `log`/`env_logger`
//! wiring in the binaries: several `Check` calls can be in flight at
//! once (e.g. concurrent requests to the HTTP facade), each wanting its
//! own normal/debug destination, while `log`/`env_logger` only supports
//! one process-wide sink.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Sink(Arc<Mutex<Box<dyn Write + Send>>>);

impl Sink {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self(Arc::new(Mutex::new(writer)))
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }

    pub fn discard() -> Self {
        Self::new(Box::new(io::sink()))
    }

    pub fn write_line(&self, line: &str) {
        let mut w = self.0.lock().expect("sink mutex poisoned");
        let _ = writeln!(w, "{}", line);
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Sink(..)")
    }
}
