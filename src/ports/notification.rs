use crate::domain::notification::NotificationData;

/// The notification a click event refers to.
pub trait NotificationPort {
    fn close(&self);

    fn data(&self) -> NotificationData;
}
