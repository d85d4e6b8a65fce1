//! Preference persistence: startup hydration and per-key saves.

use serde::de::DeserializeOwned;
use shell_host::{save_pref_with, PrefsStore};
use thiserror::Error;

use crate::model::{CustomPalette, PreferenceSnapshot, ThemeMode};

/// Storage key for the theme mode token.
pub const THEME_MODE_KEY: &str = "themeMode";
/// Storage key for the serialized custom palette record.
pub const CUSTOM_PALETTE_KEY: &str = "customTheme";

/// Errors loading one stored preference entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// The underlying store failed.
    #[error("preference store failed for `{key}`: {cause}")]
    Store {
        /// Storage key involved.
        key: &'static str,
        /// Store-reported cause.
        cause: String,
    },
    /// The stored payload is not valid JSON for the expected shape.
    #[error("stored preference `{key}` is malformed: {cause}")]
    Malformed {
        /// Storage key involved.
        key: &'static str,
        /// Parser-reported cause.
        cause: String,
    },
}

async fn load_entry<S, T>(store: &S, key: &'static str) -> Result<Option<T>, PreferenceError>
where
    S: PrefsStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = store
        .load_pref(key)
        .await
        .map_err(|cause| PreferenceError::Store { key, cause })?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|err| PreferenceError::Malformed {
            key,
            cause: err.to_string(),
        })
}

/// Loads the stored theme mode, if present and well-formed.
///
/// # Errors
///
/// Returns a [`PreferenceError`] when the store fails or the payload is
/// malformed.
pub async fn load_theme_mode<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<Option<ThemeMode>, PreferenceError> {
    load_entry(store, THEME_MODE_KEY).await
}

/// Loads the stored custom palette, if present and well-formed.
///
/// # Errors
///
/// Returns a [`PreferenceError`] when the store fails or the payload is
/// malformed.
pub async fn load_custom_palette<S: PrefsStore + ?Sized>(
    store: &S,
) -> Result<Option<CustomPalette>, PreferenceError> {
    load_entry(store, CUSTOM_PALETTE_KEY).await
}

/// Loads the startup preference snapshot, failing closed to built-in defaults.
///
/// Each entry degrades independently: a malformed palette does not discard a
/// valid mode. Failures are logged and never abort startup.
pub async fn load_preference_snapshot<S: PrefsStore + ?Sized>(store: &S) -> PreferenceSnapshot {
    let mode = match load_theme_mode(store).await {
        Ok(Some(mode)) => mode,
        Ok(None) => ThemeMode::default(),
        Err(err) => {
            log::warn!("theme mode load failed, using default: {err}");
            ThemeMode::default()
        }
    };
    let palette = match load_custom_palette(store).await {
        Ok(Some(palette)) => palette,
        Ok(None) => CustomPalette::default(),
        Err(err) => {
            log::warn!("custom palette load failed, using default: {err}");
            CustomPalette::default()
        }
    };
    PreferenceSnapshot { mode, palette }
}

/// Persists the theme mode under its own key.
///
/// # Errors
///
/// Returns an error when serialization or the store save fails.
pub async fn persist_theme_mode<S: PrefsStore + ?Sized>(
    store: &S,
    mode: ThemeMode,
) -> Result<(), String> {
    save_pref_with(store, THEME_MODE_KEY, &mode).await
}

/// Persists the custom palette under its own key.
///
/// # Errors
///
/// Returns an error when serialization or the store save fails.
pub async fn persist_custom_palette<S: PrefsStore + ?Sized>(
    store: &S,
    palette: &CustomPalette,
) -> Result<(), String> {
    save_pref_with(store, CUSTOM_PALETTE_KEY, palette).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use shell_host::MemoryPrefsStore;

    use super::*;

    #[test]
    fn empty_store_loads_builtin_defaults() {
        let store = MemoryPrefsStore::default();
        let snapshot = block_on(load_preference_snapshot(&store));
        assert_eq!(snapshot, PreferenceSnapshot::default());
        assert_eq!(snapshot.mode, ThemeMode::Light);
        assert_eq!(snapshot.palette.primary, "#ff00ff");
    }

    #[test]
    fn malformed_entries_fail_closed_to_defaults() {
        let store = MemoryPrefsStore::default();
        store.seed(THEME_MODE_KEY, "\"sepia\"");
        store.seed(CUSTOM_PALETTE_KEY, "{\"primary\":");

        let snapshot = block_on(load_preference_snapshot(&store));
        assert_eq!(snapshot, PreferenceSnapshot::default());
    }

    #[test]
    fn entries_degrade_independently() {
        let store = MemoryPrefsStore::default();
        store.seed(THEME_MODE_KEY, "\"dark\"");
        store.seed(CUSTOM_PALETTE_KEY, "not-json");

        let snapshot = block_on(load_preference_snapshot(&store));
        assert_eq!(snapshot.mode, ThemeMode::Dark);
        assert_eq!(snapshot.palette, CustomPalette::default());
    }

    #[test]
    fn saving_a_just_loaded_snapshot_is_byte_identical() {
        let store = MemoryPrefsStore::default();
        block_on(persist_theme_mode(&store, ThemeMode::Custom)).expect("persist mode");
        block_on(persist_custom_palette(&store, &CustomPalette::default()))
            .expect("persist palette");

        let stored_mode = store.raw(THEME_MODE_KEY).expect("stored mode");
        let stored_palette = store.raw(CUSTOM_PALETTE_KEY).expect("stored palette");

        let snapshot = block_on(load_preference_snapshot(&store));
        block_on(persist_theme_mode(&store, snapshot.mode)).expect("re-persist mode");
        block_on(persist_custom_palette(&store, &snapshot.palette)).expect("re-persist palette");

        assert_eq!(store.raw(THEME_MODE_KEY).expect("mode"), stored_mode);
        assert_eq!(store.raw(CUSTOM_PALETTE_KEY).expect("palette"), stored_palette);
    }

    #[test]
    fn keys_are_persisted_independently() {
        let store = MemoryPrefsStore::default();
        block_on(persist_theme_mode(&store, ThemeMode::Dark)).expect("persist mode");

        assert_eq!(store.raw(THEME_MODE_KEY).as_deref(), Some("\"dark\""));
        assert_eq!(store.raw(CUSTOM_PALETTE_KEY), None);
    }

    #[test]
    fn typed_loaders_distinguish_missing_from_malformed() {
        let store = MemoryPrefsStore::default();
        assert_eq!(block_on(load_theme_mode(&store)).expect("load"), None);

        store.seed(THEME_MODE_KEY, "42");
        let err = block_on(load_theme_mode(&store)).expect_err("malformed mode");
        assert!(matches!(
            err,
            PreferenceError::Malformed {
                key: THEME_MODE_KEY,
                ..
            }
        ));
    }
}
