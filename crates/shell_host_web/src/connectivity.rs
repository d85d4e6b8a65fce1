//! Ambient online/offline watcher for the title-bar presentation.

#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

/// Returns the environment's current online status.
///
/// Outside a browser context this defaults to online, matching the
/// `navigator.onLine` initial value.
pub fn current_online() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|w| w.navigator().on_line())
            .unwrap_or(true)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

#[cfg(target_arch = "wasm32")]
struct Listeners {
    window: web_sys::Window,
    online: Closure<dyn FnMut()>,
    offline: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for Listeners {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("online", self.online.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("offline", self.offline.as_ref().unchecked_ref());
    }
}

/// Subscription to the environment's `online`/`offline` transition events.
///
/// The watch lives for the lifetime of the title-bar presentation and
/// detaches both listeners when dropped. There is no polling and no
/// debouncing: every ambient transition reaches the callback.
pub struct ConnectivityWatch {
    #[cfg(target_arch = "wasm32")]
    _listeners: Listeners,
}

impl ConnectivityWatch {
    /// Attaches the watch; `on_change` receives the new online status.
    ///
    /// # Errors
    ///
    /// Returns an error when the browser window is unavailable or a listener
    /// cannot be registered. On non-wasm targets the watch is inert and
    /// always attaches.
    pub fn attach(on_change: impl FnMut(bool) + 'static) -> Result<Self, String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window =
                web_sys::window().ok_or_else(|| "browser window unavailable".to_string())?;
            let handler = Rc::new(RefCell::new(on_change));

            let online = {
                let handler = Rc::clone(&handler);
                Closure::<dyn FnMut()>::new(move || (handler.borrow_mut())(true))
            };
            let offline = {
                let handler = Rc::clone(&handler);
                Closure::<dyn FnMut()>::new(move || (handler.borrow_mut())(false))
            };

            window
                .add_event_listener_with_callback("online", online.as_ref().unchecked_ref())
                .map_err(|e| format!("attach online listener failed: {e:?}"))?;
            window
                .add_event_listener_with_callback("offline", offline.as_ref().unchecked_ref())
                .map_err(|e| format!("attach offline listener failed: {e:?}"))?;

            Ok(Self {
                _listeners: Listeners {
                    window,
                    online,
                    offline,
                },
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = on_change;
            Ok(Self {})
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_watch_attaches_inert_and_reports_online() {
        let watch = ConnectivityWatch::attach(|_online| {}).expect("attach watch");
        assert!(current_online());
        drop(watch);
    }
}
