/// Ports module - the capabilities the worker needs from its host.
///
/// The domain handlers only talk to these traits, so they run the same way against the
/// browser service worker scope and against the in-memory recording host.

pub mod clients;
pub mod lifecycle;
pub mod logger;
pub mod notification;

pub use clients::{ClientsPort, WindowClientPort};
pub use lifecycle::LifecyclePort;
pub use logger::LoggerPort;
pub use notification::NotificationPort;
