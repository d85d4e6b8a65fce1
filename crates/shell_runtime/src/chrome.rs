//! Window-chrome controller: actions, side-effect intents, and transitions.

use shell_host::{NetworkSnapshot, WindowCommand};

use crate::{
    devtools::{DevToolsSession, DEVTOOLS_SESSION_TIMEOUT_MS},
    model::ChromeState,
};

/// Actions accepted by [`reduce_chrome`] to mutate [`ChromeState`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChromeAction {
    /// A title-bar control asked for a window command.
    RequestWindowCommand(WindowCommand),
    /// The host acknowledged a `toggle_maximize` command.
    MaximizeToggled,
    /// A title-bar control asked to open the external dev-tools viewer.
    RequestDevTools,
    /// Opening the dev-tools viewer was refused (popup blocked).
    DevToolsOpenFailed {
        /// Session the failed open belonged to.
        session_id: u64,
    },
    /// The dev-tools session timeout fired.
    DevToolsTimeoutElapsed {
        /// Session the timeout was scheduled for.
        session_id: u64,
    },
    /// The network-details dialog was opened.
    OpenNetworkDialog,
    /// The network-details dialog was closed.
    CloseNetworkDialog,
    /// A network fetch resolved (host data or degraded fallback).
    NetworkSnapshotLoaded {
        /// Sequence number the fetch was issued with.
        seq: u64,
        /// Resolved snapshot.
        snapshot: NetworkSnapshot,
    },
}

/// Side-effect intents emitted by [`reduce_chrome`] for the effect executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeEffect {
    /// Send one window command over the bridge.
    InvokeWindowCommand(WindowCommand),
    /// Open the external dev-tools viewer URL.
    OpenDevToolsUrl {
        /// Session the open belongs to.
        session_id: u64,
    },
    /// Schedule the dev-tools session clear.
    ScheduleDevToolsClear {
        /// Session to clear when the delay elapses.
        session_id: u64,
        /// Delay before the clear, in milliseconds.
        delay_ms: u32,
    },
    /// Fetch a network snapshot, tagged with its sequence number.
    FetchNetworkDetails {
        /// Sequence number identifying this fetch.
        seq: u64,
    },
}

/// Applies a [`ChromeAction`] to the chrome state and collects side effects.
///
/// This is the authoritative transition engine for the title-bar chrome:
/// window commands stay optimistic (state changes only on acknowledged
/// results), the dev-tools session clears exactly once, and network fetch
/// resolutions are applied in issue order with stale results discarded.
pub fn reduce_chrome(state: &mut ChromeState, action: ChromeAction) -> Vec<ChromeEffect> {
    let mut effects = Vec::new();
    match action {
        ChromeAction::RequestWindowCommand(command) => {
            effects.push(ChromeEffect::InvokeWindowCommand(command));
        }
        ChromeAction::MaximizeToggled => {
            state.is_maximized = !state.is_maximized;
        }
        ChromeAction::RequestDevTools => {
            if let Some(session) = state.devtools {
                // Join the live session; the original timeout keeps running.
                effects.push(ChromeEffect::OpenDevToolsUrl {
                    session_id: session.id,
                });
            } else {
                let session_id = state.next_devtools_session_id;
                state.next_devtools_session_id += 1;
                state.devtools = Some(DevToolsSession::start(session_id));
                effects.push(ChromeEffect::OpenDevToolsUrl { session_id });
                effects.push(ChromeEffect::ScheduleDevToolsClear {
                    session_id,
                    delay_ms: DEVTOOLS_SESSION_TIMEOUT_MS,
                });
            }
        }
        ChromeAction::DevToolsOpenFailed { session_id }
        | ChromeAction::DevToolsTimeoutElapsed { session_id } => {
            if state.devtools.map(|session| session.id) == Some(session_id) {
                state.devtools = None;
            }
        }
        ChromeAction::OpenNetworkDialog => {
            if !state.network.open {
                state.network.open = true;
                state.network.loading = true;
                state.network.issued_seq += 1;
                effects.push(ChromeEffect::FetchNetworkDetails {
                    seq: state.network.issued_seq,
                });
            }
        }
        ChromeAction::CloseNetworkDialog => {
            state.network.open = false;
            state.network.loading = false;
            state.network.snapshot = None;
            // Outstanding fetches from this dialog session become stale.
            state.network.applied_seq = state.network.issued_seq;
        }
        ChromeAction::NetworkSnapshotLoaded { seq, snapshot } => {
            if state.network.open && seq > state.network.applied_seq {
                state.network.snapshot = Some(snapshot);
                state.network.applied_seq = seq;
                if seq == state.network.issued_seq {
                    state.network.loading = false;
                }
            }
        }
    }
    effects
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use shell_host::NetworkInterfaceInfo;

    use super::*;

    fn loaded(seq: u64, online: bool) -> ChromeAction {
        ChromeAction::NetworkSnapshotLoaded {
            seq,
            snapshot: NetworkSnapshot::degraded(online),
        }
    }

    #[test]
    fn window_command_request_emits_invoke_without_touching_state() {
        let mut state = ChromeState::default();
        let effects = reduce_chrome(
            &mut state,
            ChromeAction::RequestWindowCommand(WindowCommand::ToggleMaximize),
        );
        assert_eq!(
            effects,
            vec![ChromeEffect::InvokeWindowCommand(
                WindowCommand::ToggleMaximize
            )]
        );
        assert!(!state.is_maximized);
    }

    #[test]
    fn acknowledged_maximize_toggles_flip_and_flip_back() {
        let mut state = ChromeState::default();
        reduce_chrome(&mut state, ChromeAction::MaximizeToggled);
        assert!(state.is_maximized);
        reduce_chrome(&mut state, ChromeAction::MaximizeToggled);
        assert!(!state.is_maximized);
    }

    #[test]
    fn first_devtools_request_starts_session_and_schedules_single_clear() {
        let mut state = ChromeState::default();
        let effects = reduce_chrome(&mut state, ChromeAction::RequestDevTools);

        assert!(state.devtools_session_active());
        assert_eq!(
            effects,
            vec![
                ChromeEffect::OpenDevToolsUrl { session_id: 1 },
                ChromeEffect::ScheduleDevToolsClear {
                    session_id: 1,
                    delay_ms: DEVTOOLS_SESSION_TIMEOUT_MS,
                },
            ]
        );
    }

    #[test]
    fn repeat_devtools_request_joins_session_without_restarting_timeout() {
        let mut state = ChromeState::default();
        reduce_chrome(&mut state, ChromeAction::RequestDevTools);
        let effects = reduce_chrome(&mut state, ChromeAction::RequestDevTools);

        assert_eq!(effects, vec![ChromeEffect::OpenDevToolsUrl { session_id: 1 }]);
        assert!(state.devtools_session_active());

        // The single scheduled clear ends the joined session.
        reduce_chrome(&mut state, ChromeAction::DevToolsTimeoutElapsed { session_id: 1 });
        assert!(!state.devtools_session_active());
    }

    #[test]
    fn stale_devtools_timeout_does_not_clear_a_newer_session() {
        let mut state = ChromeState::default();
        reduce_chrome(&mut state, ChromeAction::RequestDevTools);
        reduce_chrome(&mut state, ChromeAction::DevToolsTimeoutElapsed { session_id: 1 });
        reduce_chrome(&mut state, ChromeAction::RequestDevTools);

        reduce_chrome(&mut state, ChromeAction::DevToolsTimeoutElapsed { session_id: 1 });
        assert!(state.devtools_session_active());
        reduce_chrome(&mut state, ChromeAction::DevToolsTimeoutElapsed { session_id: 2 });
        assert!(!state.devtools_session_active());
    }

    #[test]
    fn blocked_popup_clears_the_session_immediately() {
        let mut state = ChromeState::default();
        reduce_chrome(&mut state, ChromeAction::RequestDevTools);
        reduce_chrome(&mut state, ChromeAction::DevToolsOpenFailed { session_id: 1 });
        assert!(!state.devtools_session_active());
    }

    #[test]
    fn opening_dialog_issues_one_fetch_and_reopen_is_a_noop() {
        let mut state = ChromeState::default();
        let effects = reduce_chrome(&mut state, ChromeAction::OpenNetworkDialog);
        assert_eq!(effects, vec![ChromeEffect::FetchNetworkDetails { seq: 1 }]);
        assert!(state.network.open);
        assert!(state.network.loading);

        let effects = reduce_chrome(&mut state, ChromeAction::OpenNetworkDialog);
        assert_eq!(effects, Vec::new());
        assert_eq!(state.network.issued_seq, 1);
    }

    #[test]
    fn resolution_applies_and_clears_loading_for_newest_fetch() {
        let mut state = ChromeState::default();
        reduce_chrome(&mut state, ChromeAction::OpenNetworkDialog);

        let snapshot = NetworkSnapshot {
            online: true,
            interfaces: vec![NetworkInterfaceInfo {
                name: "eth0".to_string(),
                ip: "10.0.0.5".to_string(),
            }],
            internet_accessible: true,
            ssid: None,
            signal_strength: None,
        };
        reduce_chrome(
            &mut state,
            ChromeAction::NetworkSnapshotLoaded {
                seq: 1,
                snapshot: snapshot.clone(),
            },
        );

        assert!(!state.network.loading);
        assert_eq!(state.network.snapshot, Some(snapshot));
    }

    #[test]
    fn stale_resolution_never_overwrites_a_newer_snapshot() {
        let mut state = ChromeState::default();
        reduce_chrome(&mut state, ChromeAction::OpenNetworkDialog);
        reduce_chrome(&mut state, ChromeAction::CloseNetworkDialog);
        reduce_chrome(&mut state, ChromeAction::OpenNetworkDialog);
        assert_eq!(state.network.issued_seq, 2);

        reduce_chrome(&mut state, loaded(2, true));
        let applied = state.network.snapshot.clone();

        // The first dialog session's fetch resolves late.
        reduce_chrome(&mut state, loaded(1, false));
        assert_eq!(state.network.snapshot, applied);
        assert!(!state.network.loading);
    }

    #[test]
    fn resolution_after_close_is_discarded() {
        let mut state = ChromeState::default();
        reduce_chrome(&mut state, ChromeAction::OpenNetworkDialog);
        reduce_chrome(&mut state, ChromeAction::CloseNetworkDialog);

        reduce_chrome(&mut state, loaded(1, true));
        assert_eq!(state.network.snapshot, None);
        assert!(!state.network.loading);
    }

    #[test]
    fn close_clears_the_displayed_snapshot() {
        let mut state = ChromeState::default();
        reduce_chrome(&mut state, ChromeAction::OpenNetworkDialog);
        reduce_chrome(&mut state, loaded(1, true));
        assert!(state.network.snapshot.is_some());

        reduce_chrome(&mut state, ChromeAction::CloseNetworkDialog);
        assert_eq!(state.network.snapshot, None);
        assert!(!state.network.open);
    }

    #[test]
    fn older_but_fresh_resolution_applies_while_newest_is_outstanding() {
        let mut state = ChromeState::default();
        reduce_chrome(&mut state, ChromeAction::OpenNetworkDialog);
        // A second fetch is issued while the first is outstanding (re-entrant
        // open is a no-op, so drive the counter the way a refetch would).
        state.network.issued_seq += 1;
        state.network.loading = true;

        reduce_chrome(&mut state, loaded(1, false));
        assert!(state.network.snapshot.is_some());
        assert!(state.network.loading, "newest fetch is still outstanding");

        reduce_chrome(&mut state, loaded(2, true));
        assert!(!state.network.loading);
        assert_eq!(state.network.applied_seq, 2);
    }
}
