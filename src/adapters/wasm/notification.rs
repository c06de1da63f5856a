use crate::domain::notification::NotificationData;
use crate::ports::NotificationPort;
use wasm_bindgen::JsValue;
use web_sys::Notification;

pub struct WebNotification {
    notification: Notification,
}

impl WebNotification {
    pub fn new(notification: Notification) -> Self {
        Self { notification }
    }
}

/// Reads a notification `data` value; anything unreadable yields an empty payload.
pub fn parse_notification_data(value: &JsValue) -> NotificationData {
    if !value.is_object() || js_sys::Array::is_array(value) {
        return NotificationData::default();
    }
    serde_wasm_bindgen::from_value(value.clone()).unwrap_or_default()
}

impl NotificationPort for WebNotification {
    fn close(&self) {
        self.notification.close();
    }

    fn data(&self) -> NotificationData {
        parse_notification_data(&self.notification.data())
    }
}
