use crate::domain::error::WorkerError;
use crate::domain::notification::ClientMessage;
use async_trait::async_trait;
use futures::future::LocalBoxFuture;

/// A single open application window.
pub trait WindowClientPort {
    fn id(&self) -> String;

    /// Issues the focus request immediately; the returned future settles with the host's
    /// answer.
    fn focus(&self) -> LocalBoxFuture<'static, Result<(), WorkerError>>;

    fn post_message(&self, message: &ClientMessage) -> Result<(), WorkerError>;
}

#[async_trait(?Send)]
pub trait ClientsPort {
    /// Open clients of type "window", in host order.
    async fn match_windows(
        &self,
        include_uncontrolled: bool,
    ) -> Result<Vec<Box<dyn WindowClientPort>>, WorkerError>;

    fn supports_open_window(&self) -> bool;

    async fn open_window(&self, url: &str) -> Result<(), WorkerError>;
}
