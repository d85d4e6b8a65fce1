//! Network snapshot models crossing the command bridge.

use serde::{Deserialize, Serialize};

/// One network interface with its display-ready address string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterfaceInfo {
    /// OS interface name.
    pub name: String,
    /// IPv4 address, or a comma-joined list when the interface has several.
    pub ip: String,
}

/// Point-in-time network state reported by the native host.
///
/// Field names are the wire format of the `get_network_details` command and
/// must stay snake_case for host compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Whether any usable interface is present.
    pub online: bool,
    /// Enumerated interfaces, in host order.
    pub interfaces: Vec<NetworkInterfaceInfo>,
    /// Whether an internet reachability probe succeeded.
    pub internet_accessible: bool,
    /// Connected Wi-Fi network name, when the platform exposes one.
    pub ssid: Option<String>,
    /// Wi-Fi signal strength, when the platform exposes one.
    pub signal_strength: Option<i32>,
}

impl NetworkSnapshot {
    /// Best-effort snapshot synthesized locally when the host probe fails.
    ///
    /// Carries the ambient online/offline status and nothing else; internet
    /// accessibility is reported pessimistically.
    pub fn degraded(online: bool) -> Self {
        Self {
            online,
            interfaces: Vec::new(),
            internet_accessible: false,
            ssid: None,
            signal_strength: None,
        }
    }
}
