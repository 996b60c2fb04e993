//! Platform notification command construction.
//!
//! Always a program plus an argv list, never an interpolated shell string.
//! The title and body this crate sends are fixed constants, so the osascript
//! source below embeds them without any quoting concerns.

/// One external command, ready to hand to a
/// [`CommandRunner`](ah_core::CommandRunner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Name of the notifier binary for the current platform.
pub fn notifier_program() -> &'static str {
    if cfg!(target_os = "macos") {
        "osascript"
    } else {
        "notify-send"
    }
}

/// Build the desktop-notification command for the current platform.
#[cfg(target_os = "macos")]
pub fn notify_command(title: &str, body: &str) -> NotifyCommand {
    NotifyCommand {
        program: "osascript".to_string(),
        args: vec![
            "-e".to_string(),
            format!(r#"display notification "{body}" with title "{title}""#),
        ],
    }
}

/// Build the desktop-notification command for the current platform.
#[cfg(not(target_os = "macos"))]
pub fn notify_command(title: &str, body: &str) -> NotifyCommand {
    NotifyCommand {
        program: "notify-send".to_string(),
        args: vec![title.to_string(), body.to_string()],
    }
}
