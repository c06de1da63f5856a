pub mod error;
pub mod lifecycle;
pub mod notification;

pub use error::WorkerError;
