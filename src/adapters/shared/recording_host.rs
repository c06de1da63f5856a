use crate::domain::error::WorkerError;
use crate::domain::notification::{ClientMessage, NotificationData};
use crate::ports::{ClientsPort, LifecyclePort, NotificationPort, WindowClientPort};
use async_trait::async_trait;
use futures::future::{self, FutureExt, LocalBoxFuture};
use parking_lot::Mutex;
use std::sync::Arc;

/// A host side effect, in the order it was requested.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    SkipWaiting,
    ClaimClients,
    CloseNotification,
    MatchWindows { include_uncontrolled: bool },
    Focus(String),
    PostMessage {
        client_id: String,
        message: serde_json::Value,
    },
    OpenWindow(String),
}

type CallLog = Arc<Mutex<Vec<HostCall>>>;

/// In-memory host that records every call made through the ports.
///
/// Windows are identified by id and returned by `match_windows` in insertion order.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    calls: CallLog,
    windows: Vec<String>,
    open_window_supported: bool,
    fail_open_window: bool,
    fail_focus: bool,
    fail_match: bool,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            windows: Vec::new(),
            open_window_supported: true,
            fail_open_window: false,
            fail_focus: false,
            fail_match: false,
        }
    }

    pub fn with_windows<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.windows = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn without_open_window(mut self) -> Self {
        self.open_window_supported = false;
        self
    }

    pub fn failing_open_window(mut self) -> Self {
        self.fail_open_window = true;
        self
    }

    pub fn failing_focus(mut self) -> Self {
        self.fail_focus = true;
        self
    }

    pub fn failing_match(mut self) -> Self {
        self.fail_match = true;
        self
    }

    /// A notification whose `close` is recorded on this host.
    pub fn notification(&self, data: NotificationData) -> RecordingNotification {
        RecordingNotification {
            calls: self.calls.clone(),
            data,
        }
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    /// Posted messages as `(client_id, message)` pairs.
    pub fn messages(&self) -> Vec<(String, serde_json::Value)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::PostMessage { client_id, message } => {
                    Some((client_id.clone(), message.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::OpenWindow(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().push(call);
    }
}

#[async_trait(?Send)]
impl LifecyclePort for RecordingHost {
    fn skip_waiting(&self) -> Result<(), WorkerError> {
        self.record(HostCall::SkipWaiting);
        Ok(())
    }

    async fn claim_clients(&self) -> Result<(), WorkerError> {
        self.record(HostCall::ClaimClients);
        Ok(())
    }
}

#[async_trait(?Send)]
impl ClientsPort for RecordingHost {
    async fn match_windows(
        &self,
        include_uncontrolled: bool,
    ) -> Result<Vec<Box<dyn WindowClientPort>>, WorkerError> {
        self.record(HostCall::MatchWindows {
            include_uncontrolled,
        });
        if self.fail_match {
            return Err(WorkerError::host_error("matchAll rejected"));
        }

        Ok(self
            .windows
            .iter()
            .map(|id| {
                Box::new(RecordingWindow {
                    id: id.clone(),
                    calls: self.calls.clone(),
                    fail_focus: self.fail_focus,
                }) as Box<dyn WindowClientPort>
            })
            .collect())
    }

    fn supports_open_window(&self) -> bool {
        self.open_window_supported
    }

    async fn open_window(&self, url: &str) -> Result<(), WorkerError> {
        self.record(HostCall::OpenWindow(url.to_string()));
        if self.fail_open_window {
            return Err(WorkerError::host_error("openWindow rejected"));
        }
        Ok(())
    }
}

pub struct RecordingWindow {
    id: String,
    calls: CallLog,
    fail_focus: bool,
}

impl WindowClientPort for RecordingWindow {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn focus(&self) -> LocalBoxFuture<'static, Result<(), WorkerError>> {
        self.calls.lock().push(HostCall::Focus(self.id.clone()));
        let answer = if self.fail_focus {
            Err(WorkerError::host_error("focus rejected"))
        } else {
            Ok(())
        };
        future::ready(answer).boxed_local()
    }

    fn post_message(&self, message: &ClientMessage) -> Result<(), WorkerError> {
        let message = serde_json::to_value(message)
            .map_err(|e| WorkerError::serialization_error(e.to_string()))?;
        self.calls.lock().push(HostCall::PostMessage {
            client_id: self.id.clone(),
            message,
        });
        Ok(())
    }
}

pub struct RecordingNotification {
    calls: CallLog,
    data: NotificationData,
}

impl NotificationPort for RecordingNotification {
    fn close(&self) {
        self.calls.lock().push(HostCall::CloseNotification);
    }

    fn data(&self) -> NotificationData {
        self.data.clone()
    }
}
