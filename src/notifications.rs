//! Desktop notifications. Only macOS is supported; elsewhere these are no-ops
//! and the in-app modal is the only signal.

#[cfg(target_os = "macos")]
use std::process::Command;

/// Notify that a pomodoro session has ended
pub fn notify_time_up(message: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "dayplan - Pomodoro""#,
            message.replace('"', "\\\"")
        );

        if let Err(error) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::debug!(%error, "osascript notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = message;
    }
}
