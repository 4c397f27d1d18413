//! Live theme session: resolver + document root + OS subscription.
//!
//! DESIGN
//! ======
//! Resolution is two-phase. The server and the first hydration pass render a
//! provisional preference; `ThemeSession::start` then initializes the
//! resolver against real storage and the OS signal, applies the result to the
//! document root, and reports it through `on_change` so reactive state can
//! reconcile. Every later change flows through the resolver's subscriber list.

#[cfg(test)]
#[path = "theme_session_test.rs"]
mod theme_session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::theme::{
    ColorSchemeSignal, PreferenceStore, ResolvedTheme, SystemWatch, ThemeChange, ThemeMode, ThemePreference,
    ThemeResolver,
};
use crate::util::color_scheme::ThemeRoot;

pub struct ThemeSession<S, O> {
    resolver: Rc<RefCell<ThemeResolver<S, O>>>,
    _system_watch: SystemWatch,
}

impl<S, O> ThemeSession<S, O>
where
    S: PreferenceStore + 'static,
    O: ColorSchemeSignal + 'static,
{
    /// Initialize `resolver`, apply the resolved mode to `root` without any
    /// transition, and keep both in sync until the session is dropped.
    pub fn start<R, F>(mut resolver: ThemeResolver<S, O>, mut root: R, on_change: F) -> Self
    where
        R: ThemeRoot + 'static,
        F: Fn(ThemePreference) + 'static,
    {
        let preference = resolver.initialize();
        root.apply(preference.resolved, false);
        on_change(preference);

        let root = RefCell::new(root);
        resolver.subscribe(move |change: &ThemeChange| {
            root.borrow_mut().apply(change.preference.resolved, change.suppress_transitions);
            on_change(change.preference);
        });

        let resolver = Rc::new(RefCell::new(resolver));
        let weak = Rc::downgrade(&resolver);
        let system_watch = resolver.borrow().subscribe_to_system_change(move |scheme| {
            if let Some(resolver) = weak.upgrade() {
                resolver.borrow_mut().handle_system_change(scheme);
            }
        });

        Self { resolver, _system_watch: system_watch }
    }

    pub fn set_mode(&self, mode: ThemeMode) -> ThemeChange {
        self.resolver.borrow_mut().set_mode(mode)
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.resolver.borrow().preference()
    }

    /// Resolve the current choice against the live OS signal.
    #[must_use]
    pub fn resolve(&self) -> ResolvedTheme {
        let resolver = self.resolver.borrow();
        resolver.resolve(&resolver.preference())
    }
}
