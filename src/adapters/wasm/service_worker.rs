use crate::domain::error::WorkerError;
use crate::domain::notification::ClientMessage;
use crate::global::service_worker_scope;
use crate::ports::{ClientsPort, LifecyclePort, WindowClientPort};
use async_trait::async_trait;
use futures::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ClientQueryOptions, ClientType, ServiceWorkerGlobalScope, WindowClient};

/// Host ports backed by the running `ServiceWorkerGlobalScope`.
#[derive(Clone)]
pub struct ServiceWorkerHost {
    scope: ServiceWorkerGlobalScope,
}

impl ServiceWorkerHost {
    pub fn new(scope: ServiceWorkerGlobalScope) -> Self {
        Self { scope }
    }

    pub fn from_global() -> Result<Self, WorkerError> {
        Ok(Self::new(service_worker_scope()?))
    }
}

#[async_trait(?Send)]
impl LifecyclePort for ServiceWorkerHost {
    fn skip_waiting(&self) -> Result<(), WorkerError> {
        // The returned promise resolves immediately and can be ignored.
        let _ = self.scope.skip_waiting()?;
        Ok(())
    }

    async fn claim_clients(&self) -> Result<(), WorkerError> {
        JsFuture::from(self.scope.clients().claim()).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl ClientsPort for ServiceWorkerHost {
    async fn match_windows(
        &self,
        include_uncontrolled: bool,
    ) -> Result<Vec<Box<dyn WindowClientPort>>, WorkerError> {
        let options = ClientQueryOptions::new();
        options.set_type(ClientType::Window);
        options.set_include_uncontrolled(include_uncontrolled);

        let matched =
            JsFuture::from(self.scope.clients().match_all_with_options(&options)).await?;
        let matched: js_sys::Array = matched.dyn_into()?;

        matched
            .iter()
            .map(|client| -> Result<Box<dyn WindowClientPort>, WorkerError> {
                let client: WindowClient = client.dyn_into()?;
                Ok(Box::new(WebWindowClient::new(client)))
            })
            .collect()
    }

    fn supports_open_window(&self) -> bool {
        js_sys::Reflect::get(&self.scope.clients(), &JsValue::from_str("openWindow"))
            .map(|open_window| open_window.is_function())
            .unwrap_or(false)
    }

    async fn open_window(&self, url: &str) -> Result<(), WorkerError> {
        JsFuture::from(self.scope.clients().open_window(url)).await?;
        Ok(())
    }
}

pub struct WebWindowClient {
    client: WindowClient,
}

impl WebWindowClient {
    pub fn new(client: WindowClient) -> Self {
        Self { client }
    }
}

/// Serializes a message into the plain object posted to a window.
pub fn message_to_js(message: &ClientMessage) -> Result<JsValue, WorkerError> {
    serde_wasm_bindgen::to_value(message)
        .map_err(|e| WorkerError::serialization_error(format!("Failed to serialize: {}", e)))
}

impl WindowClientPort for WebWindowClient {
    fn id(&self) -> String {
        self.client.id()
    }

    fn focus(&self) -> LocalBoxFuture<'static, Result<(), WorkerError>> {
        let requested = self.client.focus();
        async move {
            JsFuture::from(requested?).await?;
            Ok::<(), WorkerError>(())
        }
        .boxed_local()
    }

    fn post_message(&self, message: &ClientMessage) -> Result<(), WorkerError> {
        let js_value = message_to_js(message)?;
        self.client.post_message(&js_value)?;
        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_message_to_js_shape() {
        let value = message_to_js(&ClientMessage::open_chat("alice")).unwrap();
        let action = js_sys::Reflect::get(&value, &JsValue::from_str("action")).unwrap();
        let sender = js_sys::Reflect::get(&value, &JsValue::from_str("sender")).unwrap();
        assert_eq!(action.as_string().as_deref(), Some("open_chat"));
        assert_eq!(sender.as_string().as_deref(), Some("alice"));
    }

    #[wasm_bindgen_test]
    fn test_host_unavailable_outside_service_worker() {
        assert!(matches!(
            ServiceWorkerHost::from_global(),
            Err(WorkerError::ScopeUnavailable(_))
        ));
    }
}
