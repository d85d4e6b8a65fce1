//! System-information host-service contracts.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use crate::{
    bridge::{BridgeFailure, HostCommandFuture},
    network::{NetworkInterfaceInfo, NetworkSnapshot},
};

/// Host service for system-information queries.
pub trait SystemInfoService {
    /// Fetches a fresh network snapshot from the host.
    fn network_details(&self) -> HostCommandFuture<'_, Result<NetworkSnapshot, BridgeFailure>>;

    /// Round-trips a greeting through the host process.
    fn greet<'a>(&'a self, name: &'a str) -> HostCommandFuture<'a, Result<String, BridgeFailure>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op system-information service for stubbed hosts.
pub struct NoopSystemInfoService;

impl SystemInfoService for NoopSystemInfoService {
    fn network_details(&self) -> HostCommandFuture<'_, Result<NetworkSnapshot, BridgeFailure>> {
        Box::pin(async { Ok(NetworkSnapshot::degraded(false)) })
    }

    fn greet<'a>(&'a self, name: &'a str) -> HostCommandFuture<'a, Result<String, BridgeFailure>> {
        Box::pin(async move { Ok(format!("Hello, {name}!")) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory system-information service with scriptable network results.
///
/// Scripted results are consumed in FIFO order, one per fetch; when the queue
/// is empty, a fixed loopback-only snapshot is returned.
pub struct MemorySystemInfoService {
    scripted: Rc<RefCell<VecDeque<Result<NetworkSnapshot, String>>>>,
}

impl MemorySystemInfoService {
    /// Queues the outcome of the next unanswered network fetch.
    pub fn push_network_result(&self, result: Result<NetworkSnapshot, String>) {
        self.scripted.borrow_mut().push_back(result);
    }

    fn placeholder_snapshot() -> NetworkSnapshot {
        NetworkSnapshot {
            online: true,
            interfaces: vec![NetworkInterfaceInfo {
                name: "lo0".to_string(),
                ip: "127.0.0.1".to_string(),
            }],
            internet_accessible: false,
            ssid: None,
            signal_strength: None,
        }
    }
}

impl SystemInfoService for MemorySystemInfoService {
    fn network_details(&self) -> HostCommandFuture<'_, Result<NetworkSnapshot, BridgeFailure>> {
        Box::pin(async move {
            match self.scripted.borrow_mut().pop_front() {
                Some(Ok(snapshot)) => Ok(snapshot),
                Some(Err(cause)) => Err(BridgeFailure::new("get_network_details", cause)),
                None => Ok(Self::placeholder_snapshot()),
            }
        })
    }

    fn greet<'a>(&'a self, name: &'a str) -> HostCommandFuture<'a, Result<String, BridgeFailure>> {
        Box::pin(async move { Ok(format!("Hello, {name}! You've been greeted from Rust!")) })
    }
}
