//! Preference slot adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both adapters store the JSON encoding of `ThemePreference` under one key,
//! the same format the head bootstrap script reads before first paint.

#[cfg(test)]
#[path = "preference_store_test.rs"]
mod preference_store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::theme::{PreferenceStore, StorageError, ThemePreference};

/// Serialize a preference for the storage slot.
///
/// # Errors
///
/// Returns [`StorageError::Write`] if serialization fails.
pub fn encode(preference: &ThemePreference) -> Result<String, StorageError> {
    serde_json::to_string(preference).map_err(|e| StorageError::Write(e.to_string()))
}

/// Parse the storage slot contents.
///
/// # Errors
///
/// Returns [`StorageError::Corrupt`] for anything that is not a valid record.
pub fn decode(raw: &str) -> Result<ThemePreference, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string()))
}

/// In-memory slot. Clones share the same slot, which lets separate resolver
/// instances stand in for separate sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw contents, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(raw.into()))) }
    }

    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<ThemePreference>, StorageError> {
        self.slot.borrow().as_deref().map(decode).transpose()
    }

    fn save(&mut self, preference: &ThemePreference) -> Result<(), StorageError> {
        let raw = encode(preference)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }
}

/// `localStorage`-backed slot. Outside the browser it reports
/// [`StorageError::Unavailable`], which the resolver treats as "no preference".
#[derive(Clone, Debug)]
pub struct BrowserStore {
    key: String,
}

impl BrowserStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl PreferenceStore for BrowserStore {
    fn load(&self) -> Result<Option<ThemePreference>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let raw = storage.get_item(&self.key).map_err(|_| StorageError::Unavailable)?;
            raw.as_deref().map(decode).transpose()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn save(&mut self, preference: &ThemePreference) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let raw = encode(preference)?;
            storage
                .set_item(&self.key, &raw)
                .map_err(|_| StorageError::Write(format!("localStorage rejected `{}`", self.key)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = preference;
            Err(StorageError::Unavailable)
        }
    }
}
