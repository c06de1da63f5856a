/// Logger port - provides logging capabilities across platforms.
///
/// - WASM: Console API (console.log, console.error)
/// - Native: `tracing` events
pub trait LoggerPort: Send + Sync {
    /// Log an informational message.
    fn log(&self, message: &str);

    /// Log an error message.
    fn error(&self, message: &str);
}
