//! Typed host-domain contracts and shared models for the webview shell.
//!
//! This crate is the API-first boundary between the shell's state layer and the
//! native host process. It exposes the command-bridge models (window commands,
//! bridge failures, network snapshots), the host service traits used by the
//! runtime controllers, and in-memory/no-op implementations for stubbed hosts
//! and tests. Concrete webview transport lives in `shell_host_web` and the
//! native side behind `shell_tauri`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bridge;
pub mod external_url;
pub mod host;
pub mod network;
pub mod storage;
pub mod system_info;
pub mod time;
pub mod timer;
pub mod window;

pub use bridge::{BridgeFailure, HostCommandFuture, WindowCommand};
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use network::{NetworkInterfaceInfo, NetworkSnapshot};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use system_info::{MemorySystemInfoService, NoopSystemInfoService, SystemInfoService};
pub use time::unix_time_ms_now;
pub use timer::{ImmediateTimerService, TimerFuture, TimerService};
pub use window::{MemoryWindowControlService, NoopWindowControlService, WindowControlService};
