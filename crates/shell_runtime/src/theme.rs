//! Theme-preference controller: actions, persist intents, and transitions.

use crate::model::{PalettePatch, PreferenceSnapshot, ThemeMode};

/// Actions accepted by [`reduce_theme`] to mutate the preference snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeAction {
    /// Select a specific mode.
    SetMode(ThemeMode),
    /// Advance the title-bar toggle (light → dark → custom → light).
    CycleMode,
    /// Merge a partial palette update.
    UpdatePalette(PalettePatch),
    /// Replace the whole snapshot from loaded storage; emits no persists.
    Hydrate(PreferenceSnapshot),
}

/// Persist intents emitted by [`reduce_theme`] for the effect executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEffect {
    /// Persist the current mode under its own key.
    PersistMode,
    /// Persist the current palette under its own key.
    PersistPalette,
}

/// Applies a [`ThemeAction`] and collects the persist intents.
///
/// Every user mutation persists immediately; hydration never does, so loading
/// stored state cannot rewrite it.
pub fn reduce_theme(state: &mut PreferenceSnapshot, action: ThemeAction) -> Vec<ThemeEffect> {
    let mut effects = Vec::new();
    match action {
        ThemeAction::SetMode(mode) => {
            state.mode = mode;
            effects.push(ThemeEffect::PersistMode);
        }
        ThemeAction::CycleMode => {
            state.mode = state.mode.next();
            effects.push(ThemeEffect::PersistMode);
        }
        ThemeAction::UpdatePalette(patch) => {
            state.palette.merge(patch);
            effects.push(ThemeEffect::PersistPalette);
        }
        ThemeAction::Hydrate(snapshot) => {
            *state = snapshot;
        }
    }
    effects
}
