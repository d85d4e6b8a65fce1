//! System-tray setup for the desktop host.

use tauri::{
    menu::{Menu, MenuItem},
    tray::TrayIconBuilder,
    Manager,
};

/// Stable id of the shell's single tray icon.
pub const TRAY_ID: &str = "main";

/// Installs the tray icon with its Open/Minimize/Maximize/Quit menu.
///
/// An existing tray with the same id is replaced; dev hot-reload re-runs
/// setup.
pub fn setup_system_tray(app: &tauri::App) -> tauri::Result<()> {
    if app.tray_by_id(TRAY_ID).is_some() {
        let _ = app.remove_tray_by_id(TRAY_ID);
    }

    let open = MenuItem::with_id(app, "open", "Open", true, None::<&str>)?;
    let minimize = MenuItem::with_id(app, "minimize", "Minimize", true, None::<&str>)?;
    let maximize = MenuItem::with_id(app, "maximize", "Maximize", true, None::<&str>)?;
    let quit = MenuItem::with_id(app, "quit", "Quit", true, None::<&str>)?;
    let menu = Menu::with_items(app, &[&open, &minimize, &maximize, &quit])?;

    let mut tray = TrayIconBuilder::with_id(TRAY_ID)
        .menu(&menu)
        .tooltip("Webview Shell")
        .on_menu_event(|app, event| {
            let Some(window) = app.get_webview_window("main") else {
                log::warn!("tray menu event with no main window");
                return;
            };
            match event.id.as_ref() {
                "open" => {
                    let _ = window.show();
                    let _ = window.set_focus();
                }
                "minimize" => {
                    let _ = window.minimize();
                }
                "maximize" => {
                    let _ = window.maximize();
                }
                "quit" => {
                    let _ = app.remove_tray_by_id(TRAY_ID);
                    app.exit(0);
                }
                _ => {}
            }
        });
    if let Some(icon) = app.default_window_icon() {
        tray = tray.icon(icon.clone());
    }
    tray.build(app)?;

    Ok(())
}
