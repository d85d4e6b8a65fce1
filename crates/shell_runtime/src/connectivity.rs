//! Ambient connectivity tracking.

use crate::model::ConnectivityState;

/// Online/offline transition reported by the runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityEvent {
    /// The environment reported a usable network.
    NetworkAvailable,
    /// The environment reported network loss.
    NetworkLost,
}

/// Applies one ambient transition; binary, last-write-wins, no debouncing.
///
/// Rapid flapping produces rapid state changes on purpose: the monitor
/// mirrors the ambient signal directly.
pub fn reduce_connectivity(state: &mut ConnectivityState, event: ConnectivityEvent) {
    state.online = matches!(event, ConnectivityEvent::NetworkAvailable);
}
