//! Shared command-bridge transport for webview and non-wasm builds.
//!
//! This module routes calls to target-specific implementations while keeping a
//! uniform API for the typed bridge wrappers above it.

use shell_host::NetworkSnapshot;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn invoke_unit(command: &str) -> Result<(), String> {
    imp::invoke_unit(command).await
}

pub async fn invoke_network_details() -> Result<NetworkSnapshot, String> {
    imp::invoke_network_details().await
}

pub async fn invoke_greet(name: &str) -> Result<String, String> {
    imp::invoke_greet(name).await
}

pub async fn invoke_log_message(message: &str) -> Result<(), String> {
    imp::invoke_log_message(message).await
}
