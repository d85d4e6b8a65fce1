//! Tauri command-backed window-control service.

use shell_host::{BridgeFailure, HostCommandFuture, WindowCommand, WindowControlService};

#[derive(Debug, Clone, Copy, Default)]
/// Desktop window-control service backed by Tauri command transport.
pub struct TauriWindowControlService;

impl WindowControlService for TauriWindowControlService {
    fn request(&self, command: WindowCommand) -> HostCommandFuture<'_, Result<(), BridgeFailure>> {
        Box::pin(async move { crate::bridge::window_command(command).await })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_adapter_matches_bridge_fallback_behavior() {
        let service = TauriWindowControlService;
        let service_obj: &dyn WindowControlService = &service;

        let err = block_on(service_obj.request(WindowCommand::HideToTray))
            .expect_err("non-wasm transport should fail");
        assert_eq!(err.command, "hide_to_tray");
    }
}
