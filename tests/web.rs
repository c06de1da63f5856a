#![cfg(target_arch = "wasm32")]
extern crate wasm_bindgen_test;

use chat_sw::facades::wasm::config::{configure, current_config};
use chat_sw::facades::wasm::listeners::register_listeners;
use chat_sw::WorkerConfig;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_configure_round_trips_through_js() {
    let requested = WorkerConfig {
        app_root: "/messages".to_string(),
        include_uncontrolled: true,
        debug: false,
    };
    configure(to_value(&requested).unwrap()).unwrap();

    let current: WorkerConfig = from_value(current_config().unwrap()).unwrap();
    assert_eq!(current, requested);

    configure(JsValue::UNDEFINED).unwrap();
    let reset: WorkerConfig = from_value(current_config().unwrap()).unwrap();
    assert_eq!(reset, WorkerConfig::default());
}

#[wasm_bindgen_test]
fn test_configure_rejects_empty_root() {
    let object = js_sys::Object::new();
    js_sys::Reflect::set(&object, &"appRoot".into(), &"".into()).unwrap();

    let err = configure(object.into()).unwrap_err();
    assert!(err.as_string().unwrap().contains("appRoot"));
}

#[wasm_bindgen_test]
fn test_register_listeners_requires_service_worker_scope() {
    let err = register_listeners().unwrap_err();
    assert!(err.as_string().unwrap().starts_with("Scope Unavailable"));
}
