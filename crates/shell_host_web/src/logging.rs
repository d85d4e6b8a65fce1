//! Console-backed sink for the `log` facade.

use log::{LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());

        #[cfg(target_arch = "wasm32")]
        {
            use log::Level;

            let value = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&value),
                Level::Warn => web_sys::console::warn_1(&value),
                Level::Info => web_sys::console::info_1(&value),
                Level::Debug | Level::Trace => web_sys::console::log_1(&value),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("{} {line}", record.level());
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger as the process-wide `log` sink.
///
/// Idempotent: a second call (or a logger installed by a host harness first)
/// leaves the existing sink in place.
pub fn init_console_logging(max_level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent_and_logging_does_not_panic() {
        init_console_logging(LevelFilter::Info);
        init_console_logging(LevelFilter::Debug);
        log::warn!("connectivity flapped");
    }
}
