//! State models owned by the shell runtime controllers.

use serde::{Deserialize, Serialize};
use shell_host::NetworkSnapshot;

use crate::devtools::DevToolsSession;

/// Active palette source for the presentational layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Built-in light palette.
    Light,
    /// Built-in dark palette.
    Dark,
    /// User-edited custom palette.
    Custom,
}

impl ThemeMode {
    /// Returns the mode the title-bar theme toggle advances to.
    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Custom,
            Self::Custom => Self::Light,
        }
    }

    /// Returns the persisted string token for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Custom => "custom",
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

/// User-editable palette backing [`ThemeMode::Custom`].
///
/// Serialized camelCase: the stored record layout predates this crate and is
/// shared with earlier builds of the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPalette {
    /// Accent color.
    pub primary: String,
    /// Window background color.
    pub background_default: String,
    /// Raised-surface background color.
    pub background_paper: String,
    /// Primary text color.
    pub text_primary: String,
    /// Secondary text color.
    pub text_secondary: String,
}

impl CustomPalette {
    /// Applies a partial update, overwriting only the fields the patch carries.
    pub fn merge(&mut self, patch: PalettePatch) {
        if let Some(primary) = patch.primary {
            self.primary = primary;
        }
        if let Some(background_default) = patch.background_default {
            self.background_default = background_default;
        }
        if let Some(background_paper) = patch.background_paper {
            self.background_paper = background_paper;
        }
        if let Some(text_primary) = patch.text_primary {
            self.text_primary = text_primary;
        }
        if let Some(text_secondary) = patch.text_secondary {
            self.text_secondary = text_secondary;
        }
    }
}

impl Default for CustomPalette {
    fn default() -> Self {
        Self {
            primary: "#ff00ff".to_string(),
            background_default: "#1a0033".to_string(),
            background_paper: "#2a0044".to_string(),
            text_primary: "#ffffff".to_string(),
            text_secondary: "#cccccc".to_string(),
        }
    }
}

/// Field-level partial update for [`CustomPalette`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PalettePatch {
    /// New accent color, when present.
    pub primary: Option<String>,
    /// New window background color, when present.
    pub background_default: Option<String>,
    /// New raised-surface background color, when present.
    pub background_paper: Option<String>,
    /// New primary text color, when present.
    pub text_primary: Option<String>,
    /// New secondary text color, when present.
    pub text_secondary: Option<String>,
}

/// Durable theme preferences; always fully defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSnapshot {
    /// Active palette source.
    pub mode: ThemeMode,
    /// Custom palette backing the `custom` mode.
    pub palette: CustomPalette,
}

/// Ambient online/offline status mirrored from the runtime environment.
///
/// Never set by application logic; the connectivity monitor is its only
/// writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityState {
    /// Latest known online status.
    pub online: bool,
}

impl Default for ConnectivityState {
    fn default() -> Self {
        // Browsers report `navigator.onLine = true` until told otherwise.
        Self { online: true }
    }
}

/// Network-details dialog state, including fetch sequencing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkDialogState {
    /// Whether the dialog is open.
    pub open: bool,
    /// Whether the newest issued fetch is still outstanding.
    pub loading: bool,
    /// Snapshot currently on display, if any.
    pub snapshot: Option<NetworkSnapshot>,
    /// Sequence number of the newest issued fetch; 0 when none was issued.
    pub issued_seq: u64,
    /// Highest sequence number whose result was applied; 0 when none was.
    pub applied_seq: u64,
}

/// UI-visible window-chrome state.
///
/// `is_maximized` is optimistic: it flips only after a successful
/// `toggle_maximize` round-trip and is never confirmed against the actual
/// host window, so it can diverge if the window manager intervenes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeState {
    /// Local guess at the host window's maximized state.
    pub is_maximized: bool,
    /// Active dev-tools session indicator, if one is running.
    pub devtools: Option<DevToolsSession>,
    /// Network-details dialog state.
    pub network: NetworkDialogState,
    /// Next dev-tools session id to allocate.
    pub next_devtools_session_id: u64,
}

impl ChromeState {
    /// Returns whether the dev-tools session indicator is currently shown.
    pub fn devtools_session_active(&self) -> bool {
        self.devtools.is_some()
    }
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            is_maximized: false,
            devtools: None,
            network: NetworkDialogState::default(),
            next_devtools_session_id: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_mode_cycle_visits_all_modes_and_wraps() {
        assert_eq!(ThemeMode::Light.next(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.next(), ThemeMode::Custom);
        assert_eq!(ThemeMode::Custom.next(), ThemeMode::Light);
    }

    #[test]
    fn theme_mode_serializes_to_lowercase_tokens() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Custom] {
            let raw = serde_json::to_string(&mode).expect("serialize mode");
            assert_eq!(raw, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn palette_merge_overwrites_only_patched_fields() {
        let mut palette = CustomPalette::default();
        palette.merge(PalettePatch {
            primary: Some("#00ffcc".to_string()),
            ..PalettePatch::default()
        });

        assert_eq!(palette.primary, "#00ffcc");
        let defaults = CustomPalette::default();
        assert_eq!(palette.background_default, defaults.background_default);
        assert_eq!(palette.background_paper, defaults.background_paper);
        assert_eq!(palette.text_primary, defaults.text_primary);
        assert_eq!(palette.text_secondary, defaults.text_secondary);
    }

    #[test]
    fn palette_storage_layout_is_camel_case() {
        let rendered = serde_json::to_value(CustomPalette::default()).expect("serialize palette");
        assert_eq!(rendered["backgroundDefault"], "#1a0033");
        assert_eq!(rendered["textSecondary"], "#cccccc");
    }
}
