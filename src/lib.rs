// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod global;

pub use config::WorkerConfig;
pub use domain::notification::{ClickOutcome, ClientMessage, NotificationData};
pub use domain::WorkerError;
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
