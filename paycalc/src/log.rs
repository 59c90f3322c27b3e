//! Logging for the salary calculator.
//!
//! The router and the app log through `tracing`. In the browser, [`setup`]
//! installs a `tracing-subscriber` fmt layer whose output goes to the devtools
//! console, one console message per event. The level comes from
//! [`AppConfig::log_level`](crate::AppConfig) using
//! [`EnvFilter`](tracing_subscriber::EnvFilter) directive syntax.

use std::io;

/// Collects one formatted event and hands it to `emit` when dropped.
pub struct LineWriter<F: Fn(&str)> {
    buf: Vec<u8>,
    emit: F,
}

impl<F: Fn(&str)> LineWriter<F> {
    /// A writer that calls `emit` with the buffered text on drop.
    pub fn new(emit: F) -> Self {
        Self {
            buf: Vec::new(),
            emit,
        }
    }
}

impl<F: Fn(&str)> io::Write for LineWriter<F> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<F: Fn(&str)> Drop for LineWriter<F> {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();

        if !line.is_empty() {
            (self.emit)(line);
        }
    }
}

impl<F: Fn(&str)> std::fmt::Debug for LineWriter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineWriter")
            .field("buffered", &self.buf.len())
            .finish()
    }
}

/// Build the filter for `level`, falling back to `info` when it does not parse.
pub fn filter(level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_new(level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// Install the console subscriber. Call once, before the router is created.
#[cfg(target_arch = "wasm32")]
pub fn setup(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let console_log = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_writer(|| LineWriter::new(|line: &str| web_sys::console::log_1(&line.into())));

    tracing_subscriber::registry()
        .with(filter(level))
        .with(console_log)
        .try_init()
}
