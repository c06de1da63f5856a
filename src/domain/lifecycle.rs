use crate::domain::error::WorkerError;
use crate::ports::LifecyclePort;

/// `install`: take over from any active version right away.
pub fn handle_install(lifecycle: &dyn LifecyclePort) -> Result<(), WorkerError> {
    lifecycle.skip_waiting()
}

/// `activate`: control pages that were opened before this version.
pub async fn handle_activate(lifecycle: &dyn LifecyclePort) -> Result<(), WorkerError> {
    lifecycle.claim_clients().await
}
