use crate::ports::LoggerPort;

/// Native logger implementation emitting `tracing` events.
///
/// Nothing is printed unless the embedding binary installs a subscriber.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "chat_sw", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "chat_sw", "{message}");
    }
}
