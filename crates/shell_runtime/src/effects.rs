//! Asynchronous effect execution against the host service bundle.

use std::collections::VecDeque;

use shell_host::{HostServices, NetworkSnapshot, WindowCommand};

use crate::{
    chrome::{reduce_chrome, ChromeAction, ChromeEffect},
    devtools::DEVTOOLS_URL,
    model::{ChromeState, ConnectivityState, PreferenceSnapshot},
    persistence,
    theme::{reduce_theme, ThemeAction, ThemeEffect},
};

/// Runs one chrome effect and returns the follow-up action, if any.
///
/// Host-call failures never escape: they are logged and either swallowed
/// (window commands keep last-known-good state) or converted into a degraded
/// follow-up action (network fetches, blocked dev-tools opens).
pub async fn run_chrome_effect(
    services: &HostServices,
    connectivity: ConnectivityState,
    effect: ChromeEffect,
) -> Option<ChromeAction> {
    match effect {
        ChromeEffect::InvokeWindowCommand(command) => {
            match services.window_controls.request(command).await {
                Ok(()) if command == WindowCommand::ToggleMaximize => {
                    Some(ChromeAction::MaximizeToggled)
                }
                Ok(()) => None,
                Err(err) => {
                    log::warn!("{err}");
                    None
                }
            }
        }
        ChromeEffect::OpenDevToolsUrl { session_id } => {
            match services.external_urls.open_url(DEVTOOLS_URL).await {
                Ok(()) => None,
                Err(err) => {
                    log::warn!("dev-tools viewer open failed: {err}");
                    Some(ChromeAction::DevToolsOpenFailed { session_id })
                }
            }
        }
        ChromeEffect::ScheduleDevToolsClear {
            session_id,
            delay_ms,
        } => {
            services.timers.sleep_ms(delay_ms).await;
            Some(ChromeAction::DevToolsTimeoutElapsed { session_id })
        }
        ChromeEffect::FetchNetworkDetails { seq } => {
            let snapshot = match services.system_info.network_details().await {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    log::warn!("{err}; falling back to local network status");
                    NetworkSnapshot::degraded(connectivity.online)
                }
            };
            Some(ChromeAction::NetworkSnapshotLoaded { seq, snapshot })
        }
    }
}

/// Dispatches a chrome action and drives its effects to completion.
///
/// Effects run sequentially in emission order, so a scheduled dev-tools clear
/// is awaited before this returns. That matches stub composition and tests;
/// the webview composition spawns each effect on the event loop instead and
/// feeds follow-up actions back through [`reduce_chrome`] as they resolve.
pub async fn dispatch_chrome(
    state: &mut ChromeState,
    services: &HostServices,
    connectivity: ConnectivityState,
    action: ChromeAction,
) {
    let mut pending = VecDeque::from([action]);
    while let Some(action) = pending.pop_front() {
        for effect in reduce_chrome(state, action) {
            if let Some(follow_up) = run_chrome_effect(services, connectivity, effect).await {
                pending.push_back(follow_up);
            }
        }
    }
}

/// Runs one theme persist effect; failures are logged and non-fatal.
pub async fn run_theme_effect(
    services: &HostServices,
    state: &PreferenceSnapshot,
    effect: ThemeEffect,
) {
    match effect {
        ThemeEffect::PersistMode => {
            if let Err(err) =
                persistence::persist_theme_mode(services.prefs.as_ref(), state.mode).await
            {
                log::warn!("persist theme mode failed: {err}");
            }
        }
        ThemeEffect::PersistPalette => {
            if let Err(err) =
                persistence::persist_custom_palette(services.prefs.as_ref(), &state.palette).await
            {
                log::warn!("persist custom palette failed: {err}");
            }
        }
    }
}

/// Dispatches a theme action, persisting synchronously after the mutation.
pub async fn dispatch_theme(
    state: &mut PreferenceSnapshot,
    services: &HostServices,
    action: ThemeAction,
) {
    for effect in reduce_theme(state, action) {
        run_theme_effect(services, state, effect).await;
    }
}
