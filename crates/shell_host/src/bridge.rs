//! Command-bridge models shared by the webview transport and the runtime.

use std::{future::Future, pin::Pin};

/// Object-safe boxed future used by host command services.
///
/// Futures are local (no `Send` bound): all host communication runs on the
/// single-threaded webview event loop.
pub type HostCommandFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Window-control commands exposed by the native host.
///
/// The wire name of each command is stable and must match the native host's
/// registered handlers; see [`WindowCommand::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowCommand {
    /// Minimize the main window.
    Minimize,
    /// Toggle between maximized and restored window state.
    ToggleMaximize,
    /// Close the main window and terminate the host process.
    Close,
    /// Hide the main window into the system tray.
    HideToTray,
    /// Show and focus the main window from the system tray.
    ShowFromTray,
    /// Toggle OS-level fullscreen for the main window.
    ToggleFullscreen,
    /// Shrink the main window to its fixed mini geometry.
    SetMiniSize,
    /// Reload the webview content.
    Refresh,
}

impl WindowCommand {
    /// All window commands, in wire-table order.
    pub const ALL: [WindowCommand; 8] = [
        Self::Minimize,
        Self::ToggleMaximize,
        Self::Close,
        Self::HideToTray,
        Self::ShowFromTray,
        Self::ToggleFullscreen,
        Self::SetMiniSize,
        Self::Refresh,
    ];

    /// Returns the stable wire name registered on the native host.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minimize => "minimize_window",
            Self::ToggleMaximize => "toggle_maximize",
            Self::Close => "close_window",
            Self::HideToTray => "hide_to_tray",
            Self::ShowFromTray => "show_from_tray",
            Self::ToggleFullscreen => "toggle_fullscreen",
            Self::SetMiniSize => "set_mini_size",
            Self::Refresh => "refresh_app",
        }
    }
}

/// Typed failure produced when a host command rejects.
///
/// Bridge adapters never let a host rejection escape as a panic or a raw JS
/// exception; every failure is flattened into this shape with the wire name of
/// the failed command attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeFailure {
    /// Wire name of the command that failed.
    pub command: &'static str,
    /// Host- or transport-reported cause.
    pub cause: String,
}

impl BridgeFailure {
    /// Creates a failure for `command` with the given cause.
    pub fn new(command: &'static str, cause: impl Into<String>) -> Self {
        Self {
            command,
            cause: cause.into(),
        }
    }
}

impl std::fmt::Display for BridgeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "host command `{}` failed: {}", self.command, self.cause)
    }
}

impl std::error::Error for BridgeFailure {}
