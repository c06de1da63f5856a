use crate::config::{self as worker_config, WorkerConfig};
use crate::domain::error::WorkerError;
use wasm_bindgen::prelude::*;

/// Replaces the worker configuration. Missing fields take their defaults.
#[wasm_bindgen]
pub fn configure(config: JsValue) -> Result<(), JsValue> {
    let config: WorkerConfig = if config.is_undefined() || config.is_null() {
        WorkerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| WorkerError::invalid_config(e.to_string()))?
    };
    worker_config::set_config(config)?;
    Ok(())
}

/// Current configuration as a plain object.
#[wasm_bindgen(js_name = currentConfig)]
pub fn current_config() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&worker_config::config())
        .map_err(|e| WorkerError::serialization_error(e.to_string()).into())
}
