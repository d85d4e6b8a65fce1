//! External URL adapter for webview contexts.

use shell_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Opens URLs in a new browsing context via `window.open`.
///
/// A refused popup surfaces as an error so callers can clear any pending
/// session indicator immediately; nothing else comes back through this
/// channel.
pub struct WebExternalUrlService;

impl WebExternalUrlService {
    fn open(self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            let opened = window
                .open_with_url_and_target(url, "_blank")
                .map_err(|e| format!("window.open failed: {e:?}"))?;
            if opened.is_none() {
                return Err(format!("popup blocked for {url}"));
            }
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Ok(())
        }
    }
}

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        let service = *self;
        Box::pin(async move { service.open(url) })
    }
}
