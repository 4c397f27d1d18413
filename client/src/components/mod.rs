//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell chrome (header, footer, theme toggle), the theme context provider
//! and head emission. Header and footer read site settings from context and
//! take no props from the shell.

pub mod document_head;
pub mod footer;
pub mod header;
pub mod shell;
pub mod theme_provider;
pub mod theme_toggle;
