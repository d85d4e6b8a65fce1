//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening URLs in a new browsing context outside the shell.
pub trait ExternalUrlService {
    /// Opens a URL; fire-and-forget beyond the open itself succeeding.
    ///
    /// A blocked popup is reported as an error so callers can clear any
    /// pending session indicator immediately.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for stubbed hosts.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory external URL service that records opened URLs and can simulate a
/// blocked popup.
pub struct MemoryExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
    blocked: Rc<RefCell<bool>>,
}

impl MemoryExternalUrlService {
    /// Makes every subsequent open fail as if the popup were blocked.
    pub fn block_popups(&self) {
        *self.blocked.borrow_mut() = true;
    }

    /// Returns every URL opened so far, in order.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if *self.blocked.borrow() {
                return Err("popup blocked".to_string());
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_service_records_urls_until_blocked() {
        let service = MemoryExternalUrlService::default();
        block_on(service.open_url("https://example.test/a")).expect("open");
        service.block_popups();
        let err = block_on(service.open_url("https://example.test/b"))
            .expect_err("blocked popup should fail");
        assert_eq!(err, "popup blocked");
        assert_eq!(service.opened(), vec!["https://example.test/a".to_string()]);
    }
}
