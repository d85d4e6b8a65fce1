//! Bounded-lifetime dev-tools session model.

use shell_host::unix_time_ms_now;

/// External viewer URL opened for a dev-tools session.
pub const DEVTOOLS_URL: &str = "https://devtools.crabnebula.dev/dash/127.0.0.1/3033";

/// How long the session indicator stays up without any completion signal.
pub const DEVTOOLS_SESSION_TIMEOUT_MS: u32 = 5_000;

/// One dev-tools session indicator.
///
/// The session is a heuristic: the shell has no signal that the external
/// viewer actually connected, so the indicator ends on the first of a blocked
/// open or the fixed timeout. Repeated open requests while a session is live
/// join it rather than starting a new one, so the timeout is never restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevToolsSession {
    /// Session id matched against timeout and open-failure signals.
    pub id: u64,
    /// Unix timestamp (ms) when the session started.
    pub started_at_unix_ms: u64,
}

impl DevToolsSession {
    /// Starts a session with the given id, stamped with the current time.
    pub fn start(id: u64) -> Self {
        Self {
            id,
            started_at_unix_ms: unix_time_ms_now(),
        }
    }
}
