//! OS color-scheme signal and document-root theme application.
//!
//! Reads `prefers-color-scheme` through `matchMedia`, listens for changes, and
//! writes the resolved mode onto `<html>`. Requires a browser environment;
//! SSR and native test builds get inert fallbacks.
//!
//! TRADE-OFFS
//! ==========
//! Transition suppression injects a temporary stylesheet and removes it on the
//! next timer tick. The forced style recalculation in between makes the new
//! colors land without animating.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::state::theme::{ColorSchemeSignal, ResolvedTheme, SystemWatch, ThemeAttribute};

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Stylesheet injected for the single frame in which the theme flips.
pub const NO_TRANSITION_CSS: &str =
    "*,*::before,*::after{-webkit-transition:none!important;transition:none!important}";

/// Something that carries the theme indicator (the `<html>` element in a browser).
pub trait ThemeRoot {
    fn apply(&mut self, theme: ResolvedTheme, suppress_transitions: bool);
}

type Listener = Rc<dyn Fn(ResolvedTheme)>;

#[derive(Default)]
struct ManualState {
    current: Option<ResolvedTheme>,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Signal driven by hand. Clones share state, so a test or host can keep a
/// handle and flip the preference while a resolver owns another clone.
#[derive(Clone, Default)]
pub struct ManualSignal {
    state: Rc<RefCell<ManualState>>,
}

impl ManualSignal {
    #[must_use]
    pub fn new(current: Option<ResolvedTheme>) -> Self {
        let state = ManualState { current, ..ManualState::default() };
        Self { state: Rc::new(RefCell::new(state)) }
    }

    /// Change the preference and notify watchers. The last call wins.
    pub fn set(&self, scheme: ResolvedTheme) {
        let listeners: Vec<Listener> = {
            let mut state = self.state.borrow_mut();
            state.current = Some(scheme);
            state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(scheme);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl ColorSchemeSignal for ManualSignal {
    fn current(&self) -> Option<ResolvedTheme> {
        self.state.borrow().current
    }

    fn watch(&self, callback: Box<dyn Fn(ResolvedTheme)>) -> SystemWatch {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, Rc::from(callback)));
            id
        };
        let weak: Weak<RefCell<ManualState>> = Rc::downgrade(&self.state);
        SystemWatch::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.retain(|(existing, _)| *existing != id);
            }
        })
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")` in the browser.
pub struct MediaQuerySignal {
    #[cfg(feature = "hydrate")]
    query: Option<web_sys::MediaQueryList>,
}

impl MediaQuerySignal {
    #[must_use]
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let query = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
            if query.is_none() {
                log::debug!("matchMedia unavailable; system theme resolves to light");
            }
            Self { query }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }
}

impl Default for MediaQuerySignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    fn current(&self) -> Option<ResolvedTheme> {
        #[cfg(feature = "hydrate")]
        {
            self.query.as_ref().map(|mq| ResolvedTheme::from_prefers_dark(mq.matches()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn watch(&self, callback: Box<dyn Fn(ResolvedTheme)>) -> SystemWatch {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let Some(query) = self.query.clone() else {
                return SystemWatch::inert();
            };
            let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |event: web_sys::MediaQueryListEvent| {
                    callback(ResolvedTheme::from_prefers_dark(event.matches()));
                },
            );
            if query
                .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("failed to watch {DARK_SCHEME_QUERY}");
                return SystemWatch::inert();
            }
            SystemWatch::new(move || {
                let _ = query.remove_event_listener_with_callback("change", handler.as_ref().unchecked_ref());
                drop(handler);
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = callback;
            SystemWatch::inert()
        }
    }
}

/// The `<html>` element of the current document.
#[derive(Clone, Copy, Debug)]
pub struct BrowserRoot {
    attribute: ThemeAttribute,
}

impl BrowserRoot {
    #[must_use]
    pub fn new(attribute: ThemeAttribute) -> Self {
        Self { attribute }
    }
}

impl ThemeRoot for BrowserRoot {
    fn apply(&mut self, theme: ResolvedTheme, suppress_transitions: bool) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(doc) = window.document() else {
                return;
            };
            let Some(root) = doc.document_element() else {
                return;
            };

            let blocker = if suppress_transitions { inject_transition_blocker(&doc) } else { None };
            write_theme_attribute(&root, self.attribute, theme);

            if let Some(style) = blocker {
                // Force a style recalculation so the flip lands with transitions off.
                if let Some(body) = doc.body() {
                    let _ = window.get_computed_style(&body);
                }
                gloo_timers::callback::Timeout::new(1, move || style.remove()).forget();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (theme, suppress_transitions, self.attribute);
        }
    }
}

#[cfg(feature = "hydrate")]
fn inject_transition_blocker(doc: &web_sys::Document) -> Option<web_sys::Element> {
    let style = doc.create_element("style").ok()?;
    style.set_text_content(Some(NO_TRANSITION_CSS));
    doc.head()?.append_child(&style).ok()?;
    Some(style)
}

#[cfg(feature = "hydrate")]
fn write_theme_attribute(root: &web_sys::Element, attribute: ThemeAttribute, theme: ResolvedTheme) {
    match attribute {
        ThemeAttribute::Class => {
            let classes = root.class_list();
            let _ = classes.remove_2(ResolvedTheme::Light.as_str(), ResolvedTheme::Dark.as_str());
            let _ = classes.add_1(theme.as_str());
        }
        ThemeAttribute::DataTheme => {
            let _ = root.set_attribute(attribute.name(), theme.as_str());
        }
    }
}
