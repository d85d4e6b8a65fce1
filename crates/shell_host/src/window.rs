//! Window-control host-service contracts.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::bridge::{BridgeFailure, HostCommandFuture, WindowCommand};

/// Host service that issues window-control commands to the native process.
///
/// Every request is independent: the service keeps no correlation state across
/// calls, and two concurrent requests may resolve in either order.
pub trait WindowControlService {
    /// Sends one window-control command and resolves once the host acted on it.
    fn request(&self, command: WindowCommand) -> HostCommandFuture<'_, Result<(), BridgeFailure>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op window-control service for stubbed hosts and baseline tests.
pub struct NoopWindowControlService;

impl WindowControlService for NoopWindowControlService {
    fn request(&self, _command: WindowCommand) -> HostCommandFuture<'_, Result<(), BridgeFailure>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory window-control service that records requests and can be scripted
/// to fail specific commands.
pub struct MemoryWindowControlService {
    requested: Rc<RefCell<Vec<WindowCommand>>>,
    failures: Rc<RefCell<HashMap<WindowCommand, String>>>,
}

impl MemoryWindowControlService {
    /// Scripts `command` to fail with `cause` on every subsequent request.
    pub fn fail_command(&self, command: WindowCommand, cause: impl Into<String>) {
        self.failures.borrow_mut().insert(command, cause.into());
    }

    /// Clears a previously scripted failure for `command`.
    pub fn restore_command(&self, command: WindowCommand) {
        self.failures.borrow_mut().remove(&command);
    }

    /// Returns every command requested so far, in order.
    pub fn requested(&self) -> Vec<WindowCommand> {
        self.requested.borrow().clone()
    }
}

impl WindowControlService for MemoryWindowControlService {
    fn request(&self, command: WindowCommand) -> HostCommandFuture<'_, Result<(), BridgeFailure>> {
        Box::pin(async move {
            self.requested.borrow_mut().push(command);
            match self.failures.borrow().get(&command) {
                Some(cause) => Err(BridgeFailure::new(command.name(), cause.clone())),
                None => Ok(()),
            }
        })
    }
}
