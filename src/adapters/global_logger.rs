/// Global logger instance - the implementation is selected at compile time from the
/// target architecture (browser console on wasm, `tracing` on native).

use crate::ports::LoggerPort;
use once_cell::sync::Lazy;

#[cfg(target_arch = "wasm32")]
use crate::adapters::wasm::ConsoleLogger;
#[cfg(not(target_arch = "wasm32"))]
use crate::adapters::native::ConsoleLogger;

static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

/// Get the global logger instance.
#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}
