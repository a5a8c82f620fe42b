//! Logging capability injected into the loader and the bootstrapper.
//!
//! The functions in this crate never touch a global logger directly. They take
//! a `&dyn Logger`, and the caller decides where the messages go. Installing a
//! `tracing` subscriber (and tearing it down) is the caller's job.

use std::sync::Arc;

/// Sink for informational messages.
pub trait Logger: Send + Sync {
    /// Record one informational message.
    fn info(&self, message: &str);
}

/// Forwards every message to `tracing::info!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "summ_core", "{message}");
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}

/// Logger that keeps messages in memory, for assertions in unit tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingLogger {
    messages: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingLogger {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
