//! Native-bridge and window-chrome state management for the webview shell.
//!
//! Controllers are pure reducers over owned state (`chrome`, `connectivity`,
//! `theme`) plus an asynchronous effect executor (`effects`) that runs their
//! side-effect intents against the [`shell_host`] service bundle. The
//! presentational layer reads the state and dispatches actions; it never
//! mutates state directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod chrome;
pub mod connectivity;
pub mod devtools;
pub mod effects;
pub mod model;
pub mod persistence;
pub mod theme;

pub use chrome::{reduce_chrome, ChromeAction, ChromeEffect};
pub use connectivity::{reduce_connectivity, ConnectivityEvent};
pub use devtools::{DevToolsSession, DEVTOOLS_SESSION_TIMEOUT_MS, DEVTOOLS_URL};
pub use effects::{
    dispatch_chrome, dispatch_theme, run_chrome_effect, run_theme_effect,
};
pub use model::{
    ChromeState, ConnectivityState, CustomPalette, NetworkDialogState, PalettePatch,
    PreferenceSnapshot, ThemeMode,
};
pub use persistence::{
    load_custom_palette, load_preference_snapshot, load_theme_mode, persist_custom_palette,
    persist_theme_mode, PreferenceError, CUSTOM_PALETTE_KEY, THEME_MODE_KEY,
};
pub use theme::{reduce_theme, ThemeAction, ThemeEffect};
