//! `setTimeout`-backed timer service for webview contexts.

use shell_host::{TimerFuture, TimerService};

#[cfg(target_arch = "wasm32")]
mod imp {
    use js_sys::Promise;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    #[wasm_bindgen(inline_js = r#"
export function jsSleep(delayMs) {
  return new Promise((resolve) => setTimeout(resolve, delayMs));
}
"#)]
    extern "C" {
        #[wasm_bindgen(js_name = jsSleep)]
        fn js_sleep(delay_ms: u32) -> Promise;
    }

    pub async fn sleep_ms(delay_ms: u32) {
        // A setTimeout promise only resolves; the error arm is unreachable.
        let _ = JsFuture::from(js_sleep(delay_ms)).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub async fn sleep_ms(_delay_ms: u32) {}
}

#[derive(Debug, Clone, Copy, Default)]
/// Webview timer backed by `setTimeout`.
///
/// On non-wasm targets the sleep resolves immediately; the shell only runs
/// timers inside the webview.
pub struct WebTimerService;

impl TimerService for WebTimerService {
    fn sleep_ms(&self, delay_ms: u32) -> TimerFuture<'_> {
        Box::pin(imp::sleep_ms(delay_ms))
    }
}
