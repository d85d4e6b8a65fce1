//! Tauri command-backed system-information service.

use shell_host::{BridgeFailure, HostCommandFuture, NetworkSnapshot, SystemInfoService};

#[derive(Debug, Clone, Copy, Default)]
/// Desktop system-information service backed by Tauri command transport.
pub struct TauriSystemInfoService;

impl SystemInfoService for TauriSystemInfoService {
    fn network_details(&self) -> HostCommandFuture<'_, Result<NetworkSnapshot, BridgeFailure>> {
        Box::pin(async move { crate::bridge::get_network_details().await })
    }

    fn greet<'a>(&'a self, name: &'a str) -> HostCommandFuture<'a, Result<String, BridgeFailure>> {
        Box::pin(async move { crate::bridge::greet(name).await })
    }
}
