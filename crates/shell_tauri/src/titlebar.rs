//! Title-bar window-control command handlers.
//!
//! Handlers return `Result<(), String>` so the webview bridge observes every
//! failure; the UI keeps its last-known-good state and decides whether to
//! retry.

use tauri::{AppHandle, Manager, Window};

use crate::tray::TRAY_ID;

const MINI_WIDTH: u32 = 593;
const MINI_HEIGHT: u32 = 370;

/// Minimizes the main window.
#[tauri::command]
pub fn minimize_window(window: Window) -> Result<(), String> {
    window
        .minimize()
        .map_err(|err| format!("minimize failed: {err}"))
}

/// Toggles between maximized and restored window state.
#[tauri::command]
pub fn toggle_maximize(window: Window) -> Result<(), String> {
    let maximized = window
        .is_maximized()
        .map_err(|err| format!("maximized-state query failed: {err}"))?;
    if maximized {
        window
            .unmaximize()
            .map_err(|err| format!("unmaximize failed: {err}"))
    } else {
        window
            .maximize()
            .map_err(|err| format!("maximize failed: {err}"))
    }
}

/// Closes the main window and terminates the host process.
#[tauri::command]
pub fn close_window(app: AppHandle, window: Window) -> Result<(), String> {
    let _ = app.remove_tray_by_id(TRAY_ID);
    window.close().map_err(|err| format!("close failed: {err}"))?;
    app.exit(0);
    Ok(())
}

/// Hides the main window into the system tray.
#[tauri::command]
pub fn hide_to_tray(window: Window) -> Result<(), String> {
    window
        .hide()
        .map_err(|err| format!("hide to tray failed: {err}"))
}

/// Shows and focuses the main window from the system tray.
#[tauri::command]
pub fn show_from_tray(window: Window) -> Result<(), String> {
    window
        .show()
        .map_err(|err| format!("show from tray failed: {err}"))?;
    window
        .set_focus()
        .map_err(|err| format!("focus after show failed: {err}"))
}

/// Toggles OS-level fullscreen for the main window.
#[tauri::command]
pub fn toggle_fullscreen(window: Window) -> Result<(), String> {
    let fullscreen = window
        .is_fullscreen()
        .map_err(|err| format!("fullscreen-state query failed: {err}"))?;
    window
        .set_fullscreen(!fullscreen)
        .map_err(|err| format!("set fullscreen failed: {err}"))
}

/// Shrinks the main window to its fixed mini geometry.
#[tauri::command]
pub fn set_mini_size(window: Window) -> Result<(), String> {
    window
        .set_size(tauri::PhysicalSize::new(MINI_WIDTH, MINI_HEIGHT))
        .map_err(|err| format!("set mini size failed: {err}"))
}

/// Reloads the webview content of the main window.
#[tauri::command]
pub fn refresh_app(app: AppHandle) -> Result<(), String> {
    let webview = app
        .get_webview_window("main")
        .ok_or_else(|| "main window not found".to_string())?;
    webview
        .eval("window.location.reload()")
        .map_err(|err| format!("reload failed: {err}"))
}

/// Forwards a UI log line into the host log.
#[tauri::command]
pub fn log_message(message: String) {
    log::info!(target: "webview", "{message}");
}
