//! Compile-time host-strategy selection and adapter factories.

use std::rc::Rc;

use shell_host::{
    BridgeFailure, HostCommandFuture, HostServices, HostStrategy, NetworkSnapshot,
    NoopSystemInfoService, NoopWindowControlService, SystemInfoService, WindowCommand,
    WindowControlService,
};

use crate::{
    TauriSystemInfoService, TauriWindowControlService, WebExternalUrlService, WebPrefsStore,
    WebTimerService,
};

/// Returns the compile-time selected host strategy for the active build.
///
/// The default build targets the Tauri desktop webview; the `host-stub`
/// feature swaps in no-op native services for plain-browser development.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::BrowserStub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::DesktopTauri
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum erasing the concrete window-control backend.
#[derive(Debug, Clone, Copy)]
pub enum WindowControlAdapter {
    /// Tauri command transport.
    DesktopTauri(TauriWindowControlService),
    /// No-op stub for plain-browser development.
    BrowserStub(NoopWindowControlService),
}

impl WindowControlService for WindowControlAdapter {
    fn request(&self, command: WindowCommand) -> HostCommandFuture<'_, Result<(), BridgeFailure>> {
        match self {
            Self::DesktopTauri(service) => service.request(command),
            Self::BrowserStub(service) => service.request(command),
        }
    }
}

/// Adapter enum erasing the concrete system-information backend.
#[derive(Debug, Clone, Copy)]
pub enum SystemInfoAdapter {
    /// Tauri command transport.
    DesktopTauri(TauriSystemInfoService),
    /// No-op stub for plain-browser development.
    BrowserStub(NoopSystemInfoService),
}

impl SystemInfoService for SystemInfoAdapter {
    fn network_details(&self) -> HostCommandFuture<'_, Result<NetworkSnapshot, BridgeFailure>> {
        match self {
            Self::DesktopTauri(service) => service.network_details(),
            Self::BrowserStub(service) => service.network_details(),
        }
    }

    fn greet<'a>(&'a self, name: &'a str) -> HostCommandFuture<'a, Result<String, BridgeFailure>> {
        match self {
            Self::DesktopTauri(service) => service.greet(name),
            Self::BrowserStub(service) => service.greet(name),
        }
    }
}

/// Returns the window-control service for the selected strategy.
pub fn window_control_service() -> WindowControlAdapter {
    match selected_host_strategy() {
        HostStrategy::DesktopTauri => {
            WindowControlAdapter::DesktopTauri(TauriWindowControlService)
        }
        HostStrategy::BrowserStub => WindowControlAdapter::BrowserStub(NoopWindowControlService),
    }
}

/// Returns the system-information service for the selected strategy.
pub fn system_info_service() -> SystemInfoAdapter {
    match selected_host_strategy() {
        HostStrategy::DesktopTauri => SystemInfoAdapter::DesktopTauri(TauriSystemInfoService),
        HostStrategy::BrowserStub => SystemInfoAdapter::BrowserStub(NoopSystemInfoService),
    }
}

/// Returns the preference store; `localStorage` under every strategy.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Builds the full host-service bundle for the active composition.
pub fn build_host_services() -> HostServices {
    HostServices {
        window_controls: Rc::new(window_control_service()),
        system_info: Rc::new(system_info_service()),
        external_urls: Rc::new(WebExternalUrlService),
        prefs: Rc::new(prefs_store()),
        timers: Rc::new(WebTimerService),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "host-stub"))]
    #[test]
    fn default_build_selects_the_desktop_transport() {
        assert_eq!(selected_host_strategy(), HostStrategy::DesktopTauri);
        assert_eq!(host_strategy_name(), "desktop-tauri");
        assert!(matches!(
            window_control_service(),
            WindowControlAdapter::DesktopTauri(_)
        ));
    }

    #[cfg(feature = "host-stub")]
    #[test]
    fn stub_build_selects_noop_native_services() {
        assert_eq!(selected_host_strategy(), HostStrategy::BrowserStub);
        assert!(matches!(
            system_info_service(),
            SystemInfoAdapter::BrowserStub(_)
        ));
    }

    #[test]
    fn bundle_carries_the_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
    }
}
