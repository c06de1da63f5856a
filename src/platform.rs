/// Platform - dependency injection container for the ambient ports.
///
/// The logger is a `&'static` reference; the configuration is a snapshot taken when the
/// platform is created, so one event is handled against one consistent config.

use crate::config::{self, WorkerConfig};
use crate::ports::LoggerPort;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    config: WorkerConfig,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            config: config::config(),
        }
    }

    pub fn with_config(config: WorkerConfig) -> Self {
        Self {
            logger: crate::adapters::logger(),
            config,
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Logs only when `debug` is enabled.
    pub fn debug(&self, message: &str) {
        if self.config.debug {
            self.logger.log(message);
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
