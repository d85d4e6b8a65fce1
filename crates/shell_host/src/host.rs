//! Shared host-bundle models for webview and stub runtime composition.

use std::rc::Rc;

use crate::{
    ExternalUrlService, ImmediateTimerService, NoopExternalUrlService, NoopPrefsStore,
    NoopSystemInfoService, NoopWindowControlService, PrefsStore, SystemInfoService, TimerService,
    WindowControlService,
};

/// Stable host strategy selected for the current build/runtime composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Webview hosted inside the Tauri desktop process.
    DesktopTauri,
    /// Plain-browser development composition with stubbed native services.
    BrowserStub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DesktopTauri => "desktop-tauri",
            Self::BrowserStub => "browser-stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the shell controllers.
///
/// All environment-specific service selection happens before this bundle
/// crosses into `shell_runtime`, keeping the controllers decoupled from
/// webview and native transport details.
#[derive(Clone)]
pub struct HostServices {
    /// Window-control command channel to the native host.
    pub window_controls: Rc<dyn WindowControlService>,
    /// System-information command channel to the native host.
    pub system_info: Rc<dyn SystemInfoService>,
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Durable preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Delayed wake-up scheduling.
    pub timers: Rc<dyn TimerService>,
    /// Stable strategy identifier for diagnostics and policy.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle of no-op services for the given strategy.
    ///
    /// Baseline composition for stubbed hosts; tests usually replace
    /// individual services with their `Memory*` counterparts.
    pub fn noop(host_strategy: HostStrategy) -> Self {
        Self {
            window_controls: Rc::new(NoopWindowControlService),
            system_info: Rc::new(NoopSystemInfoService),
            external_urls: Rc::new(NoopExternalUrlService),
            prefs: Rc::new(NoopPrefsStore),
            timers: Rc::new(ImmediateTimerService),
            host_strategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_tokens_are_stable() {
        assert_eq!(HostStrategy::DesktopTauri.as_str(), "desktop-tauri");
        assert_eq!(HostStrategy::BrowserStub.as_str(), "browser-stub");
    }

    #[test]
    fn noop_bundle_carries_the_requested_strategy() {
        let services = HostServices::noop(HostStrategy::BrowserStub);
        assert_eq!(services.host_strategy, HostStrategy::BrowserStub);
    }
}
