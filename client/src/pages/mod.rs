//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages render inside the shell's content slot and declare their own head
//! metadata through `DocumentHead`.

pub mod home;
pub mod not_found;
