/// WASM adapters - implementations using service worker APIs.

pub mod console_logger;
pub mod error_conversions;
pub mod notification;
pub mod service_worker;

pub use console_logger::ConsoleLogger;
pub use notification::WebNotification;
pub use service_worker::{ServiceWorkerHost, WebWindowClient};
