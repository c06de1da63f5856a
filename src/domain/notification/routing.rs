use super::types::{ClickOutcome, ClientMessage};
use crate::config::WorkerConfig;
use crate::domain::error::WorkerError;
use crate::ports::{ClientsPort, NotificationPort};

/// Routes a notification click to an open window, or opens one.
///
/// The notification is always closed first. With at least one window open, the first
/// one (host order) is focused and, when the payload names a sender, receives a single
/// `open_chat` message. The message does not wait on the focus result. With none open,
/// `config.app_root` is opened if the host can; a rejected open is swallowed. Match,
/// focus and post failures are returned as is.
pub async fn handle_notification_click(
    notification: &dyn NotificationPort,
    clients: &dyn ClientsPort,
    config: &WorkerConfig,
) -> Result<ClickOutcome, WorkerError> {
    notification.close();
    let data = notification.data();

    let windows = clients.match_windows(config.include_uncontrolled).await?;

    if let Some(window) = windows.first() {
        let focusing = window.focus();

        let messaged = match data.sender() {
            Some(sender) => {
                window.post_message(&ClientMessage::open_chat(sender))?;
                true
            }
            None => false,
        };
        focusing.await?;

        return Ok(ClickOutcome::Focused {
            client_id: window.id(),
            messaged,
        });
    }

    if !clients.supports_open_window() {
        return Ok(ClickOutcome::OpenUnsupported);
    }

    match clients.open_window(&config.app_root).await {
        Ok(()) => Ok(ClickOutcome::Opened),
        Err(_) => Ok(ClickOutcome::OpenFailed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::shared::{HostCall, RecordingHost};
    use crate::domain::notification::NotificationData;
    use crate::platform::Platform;
    use futures::executor::block_on;
    use serde_json::json;

    fn click(host: &RecordingHost, data: NotificationData) -> Result<ClickOutcome, WorkerError> {
        let notification = host.notification(data);
        block_on(handle_notification_click(
            &notification,
            host,
            &WorkerConfig::default(),
        ))
    }

    #[test]
    fn test_focuses_first_window_without_sender() {
        let host = RecordingHost::new().with_windows(["w1", "w2"]);

        let outcome = click(&host, NotificationData::default()).unwrap();

        assert_eq!(
            outcome,
            ClickOutcome::Focused {
                client_id: "w1".to_string(),
                messaged: false
            }
        );
        assert_eq!(
            host.calls(),
            vec![
                HostCall::CloseNotification,
                HostCall::MatchWindows {
                    include_uncontrolled: false
                },
                HostCall::Focus("w1".to_string()),
            ]
        );
    }

    #[test]
    fn test_posts_open_chat_to_first_window_only() {
        let host = RecordingHost::new().with_windows(["w1", "w2"]);

        click(&host, NotificationData::for_sender("alice")).unwrap();

        assert_eq!(
            host.messages(),
            vec![(
                "w1".to_string(),
                json!({ "action": "open_chat", "sender": "alice" })
            )]
        );
        assert!(!host.calls().iter().any(|c| matches!(c, HostCall::OpenWindow(_))));
    }

    #[test]
    fn test_opens_root_when_no_window() {
        let host = RecordingHost::new();

        let outcome = click(&host, NotificationData::for_sender("alice")).unwrap();

        assert_eq!(outcome, ClickOutcome::Opened);
        assert_eq!(host.opened_urls(), vec!["/".to_string()]);
        assert!(host.messages().is_empty());
    }

    #[test]
    fn test_open_unsupported_is_silent() {
        let host = RecordingHost::new().without_open_window();

        let outcome = click(&host, NotificationData::default()).unwrap();

        assert_eq!(outcome, ClickOutcome::OpenUnsupported);
        assert!(host.opened_urls().is_empty());
    }

    #[test]
    fn test_open_rejection_is_swallowed() {
        let host = RecordingHost::new().failing_open_window();

        let outcome = click(&host, NotificationData::default()).unwrap();

        assert_eq!(outcome, ClickOutcome::OpenFailed);
        assert_eq!(host.opened_urls(), vec!["/".to_string()]);
    }

    #[test]
    fn test_focus_failure_still_posts_message() {
        let host = RecordingHost::new().with_windows(["w1"]).failing_focus();

        let result = click(&host, NotificationData::for_sender("alice"));

        assert!(matches!(result, Err(WorkerError::HostError(_))));
        assert_eq!(
            host.calls(),
            vec![
                HostCall::CloseNotification,
                HostCall::MatchWindows {
                    include_uncontrolled: false
                },
                HostCall::Focus("w1".to_string()),
                HostCall::PostMessage {
                    client_id: "w1".to_string(),
                    message: json!({ "action": "open_chat", "sender": "alice" }),
                },
            ]
        );
    }

    #[test]
    fn test_match_failure_propagates_after_close() {
        let host = RecordingHost::new().failing_match();

        let result = click(&host, NotificationData::default());

        assert!(result.is_err());
        assert_eq!(host.calls()[0], HostCall::CloseNotification);
        assert!(host.opened_urls().is_empty());
    }

    #[test]
    fn test_configured_root_and_uncontrolled() {
        let host = RecordingHost::new();
        let platform = Platform::with_config(WorkerConfig {
            app_root: "/chat/".to_string(),
            include_uncontrolled: true,
            ..WorkerConfig::default()
        });
        let notification = host.notification(NotificationData::default());

        block_on(handle_notification_click(
            &notification,
            &host,
            platform.config(),
        ))
        .unwrap();

        assert_eq!(
            host.calls(),
            vec![
                HostCall::CloseNotification,
                HostCall::MatchWindows {
                    include_uncontrolled: true
                },
                HostCall::OpenWindow("/chat/".to_string()),
            ]
        );
    }
}
