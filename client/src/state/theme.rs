//! Theme preference model and resolver.
//!
//! DESIGN
//! ======
//! `ThemeResolver` is the only writer of `ThemePreference`. Persistence and
//! the OS color-scheme signal sit behind `PreferenceStore` and
//! `ColorSchemeSignal`, so browser adapters in `util` and in-memory doubles
//! share the same resolution rules. Consumers observe changes through the
//! subscriber list instead of reading shared mutable state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the persisted preference slot.
pub const STORAGE_KEY: &str = "hodl-theme";

/// Attribute written on `<html>` when [`ThemeAttribute::DataTheme`] is used.
pub const DATA_THEME_ATTRIBUTE: &str = "data-theme";

/// Visual mode chosen by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Mirror the OS-level preference.
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete mode actually applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ResolvedTheme> for ThemeMode {
    fn from(value: ResolvedTheme) -> Self {
        match value {
            ResolvedTheme::Light => Self::Light,
            ResolvedTheme::Dark => Self::Dark,
        }
    }
}

/// Persisted record: what the user chose and what it rendered as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub chosen: ThemeMode,
    pub resolved: ResolvedTheme,
}

impl ThemePreference {
    /// Non-personalized preference used for the server render and the first
    /// hydration pass, before storage and the OS signal are consulted.
    #[must_use]
    pub fn provisional(default_mode: ThemeMode) -> Self {
        let resolved = match default_mode {
            ThemeMode::Dark => ResolvedTheme::Dark,
            ThemeMode::Light | ThemeMode::System => ResolvedTheme::Light,
        };
        Self { chosen: default_mode, resolved }
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::provisional(ThemeMode::System)
    }
}

/// How the resolved mode is exposed on the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeAttribute {
    /// `class="light"` / `class="dark"`.
    #[default]
    Class,
    /// `data-theme="light"` / `data-theme="dark"`.
    DataTheme,
}

impl ThemeAttribute {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::DataTheme => DATA_THEME_ATTRIBUTE,
        }
    }
}

/// Resolver configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeOptions {
    pub storage_key: String,
    pub attribute: ThemeAttribute,
    pub default_mode: ThemeMode,
    /// Suppress color-scheme transitions for the frame in which the mode flips.
    pub disable_transition_on_change: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            attribute: ThemeAttribute::Class,
            default_mode: ThemeMode::System,
            disable_transition_on_change: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("stored preference is corrupt: {0}")]
    Corrupt(String),
    #[error("failed to write preference: {0}")]
    Write(String),
}

/// Single named slot holding the serialized [`ThemePreference`].
pub trait PreferenceStore {
    /// Returns `Ok(None)` when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the slot cannot be read or decoded.
    fn load(&self) -> Result<Option<ThemePreference>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the slot cannot be written.
    fn save(&mut self, preference: &ThemePreference) -> Result<(), StorageError>;
}

/// OS-level light/dark preference.
pub trait ColorSchemeSignal {
    /// `None` when the environment exposes no preference (headless, SSR).
    fn current(&self) -> Option<ResolvedTheme>;

    /// Invoke `callback` on every OS preference change until the returned
    /// guard is dropped.
    fn watch(&self, callback: Box<dyn Fn(ResolvedTheme)>) -> SystemWatch;
}

/// Guard for an OS preference subscription. Dropping it unsubscribes.
pub struct SystemWatch {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl SystemWatch {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Guard for a signal that never fires.
    #[must_use]
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for SystemWatch {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for SystemWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemWatch").field("active", &self.is_active()).finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Outcome of a mode change, delivered to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub previous: ResolvedTheme,
    pub preference: ThemePreference,
    /// True when transitions must be disabled for the frame applying this change.
    pub suppress_transitions: bool,
}

impl ThemeChange {
    #[must_use]
    pub fn flips(&self) -> bool {
        self.previous != self.preference.resolved
    }
}

type Subscriber = Box<dyn Fn(&ThemeChange)>;

/// Owns the current [`ThemePreference`] and resolves it against the OS signal.
pub struct ThemeResolver<S, O> {
    options: ThemeOptions,
    store: S,
    signal: O,
    preference: ThemePreference,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S, O> ThemeResolver<S, O>
where
    S: PreferenceStore,
    O: ColorSchemeSignal,
{
    pub fn new(options: ThemeOptions, store: S, signal: O) -> Self {
        let preference = ThemePreference::provisional(options.default_mode);
        Self { options, store, signal, preference, subscribers: Vec::new(), next_subscription: 0 }
    }

    /// Load the persisted choice and resolve it.
    ///
    /// Missing, unreadable or corrupt storage falls back to the configured
    /// default mode without raising.
    pub fn initialize(&mut self) -> ThemePreference {
        let chosen = match self.store.load() {
            Ok(Some(stored)) => stored.chosen,
            Ok(None) => self.options.default_mode,
            Err(err) => {
                log::warn!("theme preference unreadable, using {}: {err}", self.options.default_mode);
                self.options.default_mode
            }
        };
        self.preference = ThemePreference { chosen, resolved: self.resolve_mode(chosen) };
        self.preference
    }

    /// Resolve `preference` against the live OS signal.
    #[must_use]
    pub fn resolve(&self, preference: &ThemePreference) -> ResolvedTheme {
        self.resolve_mode(preference.chosen)
    }

    fn resolve_mode(&self, mode: ThemeMode) -> ResolvedTheme {
        match mode {
            ThemeMode::Light => ResolvedTheme::Light,
            ThemeMode::Dark => ResolvedTheme::Dark,
            ThemeMode::System => self.signal.current().unwrap_or(ResolvedTheme::Light),
        }
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    #[must_use]
    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    /// Record an explicit user choice, persist it and notify subscribers.
    ///
    /// A failed write is logged; the in-memory preference still changes.
    pub fn set_mode(&mut self, mode: ThemeMode) -> ThemeChange {
        let previous = self.preference.resolved;
        self.preference = ThemePreference { chosen: mode, resolved: self.resolve_mode(mode) };
        if let Err(err) = self.store.save(&self.preference) {
            log::warn!("failed to persist theme preference: {err}");
        }
        let change = self.change_from(previous);
        self.notify(&change);
        change
    }

    /// Apply an OS preference change. Ignored unless the user chose `system`.
    pub fn handle_system_change(&mut self, scheme: ResolvedTheme) -> Option<ThemeChange> {
        if self.preference.chosen != ThemeMode::System || self.preference.resolved == scheme {
            return None;
        }
        let previous = self.preference.resolved;
        self.preference.resolved = scheme;
        let change = self.change_from(previous);
        self.notify(&change);
        Some(change)
    }

    /// Forward OS preference changes to `callback` until the guard drops.
    pub fn subscribe_to_system_change(&self, callback: impl Fn(ResolvedTheme) + 'static) -> SystemWatch {
        self.signal.watch(Box::new(callback))
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&ThemeChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn change_from(&self, previous: ResolvedTheme) -> ThemeChange {
        let flips = previous != self.preference.resolved;
        ThemeChange {
            previous,
            preference: self.preference,
            suppress_transitions: flips && self.options.disable_transition_on_change,
        }
    }

    fn notify(&self, change: &ThemeChange) {
        for (_, subscriber) in &self.subscribers {
            subscriber(change);
        }
    }
}
