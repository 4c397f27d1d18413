//! Application state owned by the shell.
//!
//! DESIGN
//! ======
//! Theme state has a single writer (`ThemeResolver::set_mode`) and is
//! observed through subscriptions; components see it through `ThemeContext`.

pub mod theme;
pub mod theme_session;
