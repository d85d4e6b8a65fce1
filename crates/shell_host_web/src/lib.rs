//! Webview (`wasm32`) implementations of the [`shell_host`] service contracts.
//!
//! This crate is the concrete webview-side wiring layer: the Tauri IPC command
//! bridge, `localStorage` preferences, the ambient connectivity watch, the
//! external-URL opener, the `setTimeout` timer, and the console log sink.
//!
//! Bridge bindings live under `bridge/` with a shared wasm/non-wasm transport
//! split in `bridge::interop`; non-wasm builds get deterministic fallbacks so
//! adapter behavior stays testable off-target.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
mod bridge;
pub mod connectivity;
pub mod external_url;
pub mod logging;
pub mod storage;
pub mod system_info;
pub mod timer;
pub mod window_control;

pub use adapters::{
    build_host_services, host_strategy_name, prefs_store, selected_host_strategy,
    system_info_service, window_control_service, SystemInfoAdapter, WindowControlAdapter,
};
pub use bridge::{get_network_details, greet, log_message, window_command};
pub use connectivity::{current_online, ConnectivityWatch};
pub use external_url::WebExternalUrlService;
pub use logging::init_console_logging;
pub use storage::local_prefs::WebPrefsStore;
pub use system_info::TauriSystemInfoService;
pub use timer::WebTimerService;
pub use window_control::TauriWindowControlService;
