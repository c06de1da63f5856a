use crate::domain::error::WorkerError;
use wasm_bindgen::JsValue;

/// Conversion from JsValue to WorkerError for host rejections
impl From<JsValue> for WorkerError {
    fn from(err: JsValue) -> Self {
        WorkerError::host_error(
            err.as_string()
                .unwrap_or_else(|| format!("{:?}", err)),
        )
    }
}

/// Conversion from WorkerError to JsValue for the WASM boundary
impl From<WorkerError> for JsValue {
    fn from(error: WorkerError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
