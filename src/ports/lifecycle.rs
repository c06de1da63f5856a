use crate::domain::error::WorkerError;
use async_trait::async_trait;

/// Worker lifecycle signals (`skipWaiting`, `clients.claim`).
#[async_trait(?Send)]
pub trait LifecyclePort {
    /// Activate this worker version without waiting for older versions' clients to close.
    fn skip_waiting(&self) -> Result<(), WorkerError>;

    /// Take control of every page already open in scope.
    async fn claim_clients(&self) -> Result<(), WorkerError>;
}
