//! Common test utilities shared by the integration tests.
//!
//! - Test fixtures (sample project layouts)
//! - A logger that records messages for assertions

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

use std::sync::Mutex;
use summ_core::logging::Logger;

/// Logger that keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .expect("Logger mutex poisoned")
            .clone()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .expect("Logger mutex poisoned")
            .push(message.to_string());
    }
}
