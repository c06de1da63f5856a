use crate::adapters::wasm::{ServiceWorkerHost, WebNotification};
use crate::domain::lifecycle::{handle_activate, handle_install};
use crate::domain::notification::handle_notification_click;
use crate::global::service_worker_scope;
use crate::platform::Platform;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{ExtendableEvent, NotificationEvent};

#[wasm_bindgen(js_name = onInstall)]
pub fn on_install(_event: ExtendableEvent) -> Result<(), JsValue> {
    let platform = Platform::new();
    let host = ServiceWorkerHost::from_global()?;

    handle_install(&host)?;
    platform.debug("install: skipWaiting requested");
    Ok(())
}

#[wasm_bindgen(js_name = onActivate)]
pub fn on_activate(event: ExtendableEvent) -> Result<(), JsValue> {
    let platform = Platform::new();
    let host = ServiceWorkerHost::from_global()?;

    let promise = future_to_promise(async move {
        handle_activate(&host).await?;
        platform.debug("activate: clients claimed");
        Ok(JsValue::UNDEFINED)
    });
    event.wait_until(&promise)?;
    Ok(())
}

/// Closes the clicked notification and routes it to a window. The routing future is
/// handed to `waitUntil` so the worker stays alive until it settles.
#[wasm_bindgen(js_name = onNotificationClick)]
pub fn on_notification_click(event: NotificationEvent) -> Result<(), JsValue> {
    let platform = Platform::new();
    let host = ServiceWorkerHost::from_global()?;
    let notification = WebNotification::new(event.notification());

    let promise = future_to_promise(async move {
        let outcome =
            handle_notification_click(&notification, &host, platform.config()).await?;
        platform.debug(&format!("notificationclick: {}", outcome));
        Ok(JsValue::UNDEFINED)
    });
    event.wait_until(&promise)?;
    Ok(())
}

/// Attaches the handlers to the global scope. Must run during the worker's initial
/// script evaluation, so only bootstraps that instantiate the module synchronously
/// can use it; the others forward events to the `on*` exports.
#[wasm_bindgen(js_name = registerListeners)]
pub fn register_listeners() -> Result<(), JsValue> {
    let platform = Platform::new();
    let scope = service_worker_scope()?;

    let on_install_listener = Closure::wrap(Box::new(|event: ExtendableEvent| {
        if let Err(e) = on_install(event) {
            Platform::new()
                .logger()
                .error(&format!("install handler failed: {:?}", e));
        }
    }) as Box<dyn FnMut(_)>);
    scope.add_event_listener_with_callback(
        "install",
        on_install_listener.as_ref().unchecked_ref(),
    )?;
    on_install_listener.forget();

    let on_activate_listener = Closure::wrap(Box::new(|event: ExtendableEvent| {
        if let Err(e) = on_activate(event) {
            Platform::new()
                .logger()
                .error(&format!("activate handler failed: {:?}", e));
        }
    }) as Box<dyn FnMut(_)>);
    scope.add_event_listener_with_callback(
        "activate",
        on_activate_listener.as_ref().unchecked_ref(),
    )?;
    on_activate_listener.forget();

    let on_click_listener = Closure::wrap(Box::new(|event: NotificationEvent| {
        if let Err(e) = on_notification_click(event) {
            Platform::new()
                .logger()
                .error(&format!("notificationclick handler failed: {:?}", e));
        }
    }) as Box<dyn FnMut(_)>);
    scope.add_event_listener_with_callback(
        "notificationclick",
        on_click_listener.as_ref().unchecked_ref(),
    )?;
    on_click_listener.forget();

    platform.debug("service worker listeners registered");
    Ok(())
}
