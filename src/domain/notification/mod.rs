pub mod routing;
pub mod types;

pub use routing::handle_notification_click;
pub use types::{ClickOutcome, ClientAction, ClientMessage, NotificationData};
