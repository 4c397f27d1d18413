use super::*;

use crate::state::theme::ThemeOptions;
use crate::util::color_scheme::ManualSignal;
use crate::util::preference_store::{MemoryStore, decode};

type Frames = Rc<RefCell<Vec<(ResolvedTheme, bool)>>>;

#[derive(Clone, Default)]
struct RecordingRoot {
    frames: Frames,
}

impl ThemeRoot for RecordingRoot {
    fn apply(&mut self, theme: ResolvedTheme, suppress_transitions: bool) {
        self.frames.borrow_mut().push((theme, suppress_transitions));
    }
}

fn start(
    store: &MemoryStore,
    os: &ManualSignal,
) -> (ThemeSession<MemoryStore, ManualSignal>, Frames, Rc<RefCell<Vec<ThemePreference>>>) {
    let root = RecordingRoot::default();
    let frames = Rc::clone(&root.frames);
    let reported = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&reported);
    let resolver = ThemeResolver::new(ThemeOptions::default(), store.clone(), os.clone());
    let session = ThemeSession::start(resolver, root, move |pref| sink.borrow_mut().push(pref));
    (session, frames, reported)
}

#[test]
fn first_load_follows_dark_os_without_transition() {
    let os = ManualSignal::new(Some(ResolvedTheme::Dark));
    let (session, frames, reported) = start(&MemoryStore::new(), &os);

    assert_eq!(*frames.borrow(), vec![(ResolvedTheme::Dark, false)]);
    assert_eq!(session.preference().chosen, ThemeMode::System);
    assert_eq!(reported.borrow().last().map(|p| p.resolved), Some(ResolvedTheme::Dark));
}

#[test]
fn set_mode_light_flips_with_transitions_suppressed() {
    let store = MemoryStore::new();
    let os = ManualSignal::new(Some(ResolvedTheme::Dark));
    let (session, frames, _) = start(&store, &os);

    session.set_mode(ThemeMode::Light);

    assert_eq!(frames.borrow().last().copied(), Some((ResolvedTheme::Light, true)));
    let stored = decode(&store.raw().expect("preference persisted")).expect("valid record");
    assert_eq!(stored, ThemePreference { chosen: ThemeMode::Light, resolved: ResolvedTheme::Light });
}

#[test]
fn os_change_reaches_root_while_following_system() {
    let os = ManualSignal::new(Some(ResolvedTheme::Light));
    let (session, frames, reported) = start(&MemoryStore::new(), &os);

    os.set(ResolvedTheme::Dark);

    assert_eq!(session.resolve(), ResolvedTheme::Dark);
    assert_eq!(session.preference().resolved, ResolvedTheme::Dark);
    assert_eq!(frames.borrow().last().copied(), Some((ResolvedTheme::Dark, true)));
    assert_eq!(reported.borrow().len(), 2);
}

#[test]
fn os_change_does_not_touch_explicit_choice() {
    let store = MemoryStore::new();
    let os = ManualSignal::new(Some(ResolvedTheme::Light));
    let (session, frames, _) = start(&store, &os);
    session.set_mode(ThemeMode::Light);
    let applied = frames.borrow().len();

    os.set(ResolvedTheme::Dark);

    assert_eq!(frames.borrow().len(), applied);
    assert_eq!(session.preference().resolved, ResolvedTheme::Light);
    let stored = decode(&store.raw().expect("preference persisted")).expect("valid record");
    assert_eq!(stored.chosen, ThemeMode::Light);
}

#[test]
fn os_change_is_not_persisted() {
    let store = MemoryStore::new();
    let os = ManualSignal::new(Some(ResolvedTheme::Light));
    let (_session, _, _) = start(&store, &os);

    os.set(ResolvedTheme::Dark);

    assert!(store.raw().is_none());
}

#[test]
fn dropping_session_releases_os_listener() {
    let os = ManualSignal::new(Some(ResolvedTheme::Light));
    let (session, frames, _) = start(&MemoryStore::new(), &os);
    assert_eq!(os.listener_count(), 1);

    drop(session);
    os.set(ResolvedTheme::Dark);

    assert_eq!(os.listener_count(), 0);
    assert_eq!(frames.borrow().len(), 1);
}

#[test]
fn restored_choice_applies_on_start() {
    let store = MemoryStore::with_raw(r#"{"chosen":"dark","resolved":"dark"}"#);
    let os = ManualSignal::new(Some(ResolvedTheme::Light));
    let (session, frames, _) = start(&store, &os);

    assert_eq!(*frames.borrow(), vec![(ResolvedTheme::Dark, false)]);
    assert_eq!(session.preference().chosen, ThemeMode::Dark);
}
