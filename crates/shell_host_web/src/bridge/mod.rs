//! Typed command-bridge wrappers over the Tauri IPC transport.
//!
//! Every wrapper resolves to the command's typed payload or a
//! [`BridgeFailure`] carrying the wire name; JS rejections are flattened to
//! strings inside the interop layer and never escape as exceptions.

mod interop;

use shell_host::{BridgeFailure, NetworkSnapshot, WindowCommand};

/// Sends one window-control command to the native host.
pub async fn window_command(command: WindowCommand) -> Result<(), BridgeFailure> {
    interop::invoke_unit(command.name())
        .await
        .map_err(|cause| BridgeFailure::new(command.name(), cause))
}

/// Fetches a fresh network snapshot from the native host.
pub async fn get_network_details() -> Result<NetworkSnapshot, BridgeFailure> {
    interop::invoke_network_details()
        .await
        .map_err(|cause| BridgeFailure::new("get_network_details", cause))
}

/// Round-trips a greeting through the native host.
pub async fn greet(name: &str) -> Result<String, BridgeFailure> {
    interop::invoke_greet(name)
        .await
        .map_err(|cause| BridgeFailure::new("greet", cause))
}

/// Forwards a UI log line into the native host's log.
pub async fn log_message(message: &str) -> Result<(), BridgeFailure> {
    interop::invoke_log_message(message)
        .await
        .map_err(|cause| BridgeFailure::new("log_message", cause))
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_window_commands_fail_with_command_name_attached() {
        for command in WindowCommand::ALL {
            let err = block_on(window_command(command)).expect_err("non-wasm bridge should fail");
            assert_eq!(err.command, command.name());
            assert!(err.cause.contains("wasm32"), "unexpected cause: {}", err.cause);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_typed_commands_fail_with_their_wire_names() {
        let err = block_on(get_network_details()).expect_err("network details should fail");
        assert_eq!(err.command, "get_network_details");

        let err = block_on(greet("shell")).expect_err("greet should fail");
        assert_eq!(err.command, "greet");

        let err = block_on(log_message("boot")).expect_err("log_message should fail");
        assert_eq!(err.command, "log_message");
    }
}
