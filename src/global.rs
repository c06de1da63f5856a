use crate::domain::error::WorkerError;
use wasm_bindgen::JsCast;
use web_sys::ServiceWorkerGlobalScope;

pub fn service_worker_scope() -> Result<ServiceWorkerGlobalScope, WorkerError> {
    js_sys::global()
        .dyn_into::<ServiceWorkerGlobalScope>()
        .map_err(|_| WorkerError::scope_unavailable("not running in a ServiceWorkerGlobalScope"))
}
