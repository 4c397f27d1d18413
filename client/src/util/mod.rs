//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, media
//! queries, the document root) from the theme and shell logic so both can be
//! exercised natively in tests.

pub mod color_scheme;
pub mod no_flash;
pub mod preference_store;
pub mod site_embed;
