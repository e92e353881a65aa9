//! Acceptance tests: theme, music, gallery, and resume.

use crate::audio::{AudioError, AudioHandle};
use crate::preferences::{load_theme, PreferenceError, PreferenceStore, DARK_MODE_KEY};
use crate::state::{FocusSection, ImageProbe, ThemeMode};
use crate::test_harness::AcceptanceTestHarness;
use crate::view::Collaborators;
use crossterm::event::{KeyCode, KeyModifiers};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<HashMap<String, bool>>>);

impl PreferenceStore for SharedStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.borrow().get(key).copied()
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PreferenceError> {
        self.0.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get_bool(&self, _key: &str) -> Option<bool> {
        None
    }

    fn set_bool(&mut self, _key: &str, _value: bool) -> Result<(), PreferenceError> {
        Err(PreferenceError::Write {
            path: "/readonly/preferences.json".into(),
            source: std::io::Error::other("read-only file system"),
        })
    }
}

#[derive(Clone, Default)]
struct CountingAudio {
    plays: Rc<RefCell<usize>>,
    refuse: bool,
}

impl AudioHandle for CountingAudio {
    fn play(&mut self) -> Result<(), AudioError> {
        *self.plays.borrow_mut() += 1;
        if self.refuse {
            Err(AudioError::Unavailable)
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) {}

    fn set_loop(&mut self, _looping: bool) {}

    fn set_volume(&mut self, _volume: f32) {}
}

/// Plays until the shared flag says the track ran out.
#[derive(Clone, Default)]
struct FiniteTrack {
    ended: Rc<Cell<bool>>,
    plays: Rc<Cell<usize>>,
}

impl AudioHandle for FiniteTrack {
    fn play(&mut self) -> Result<(), AudioError> {
        self.plays.set(self.plays.get() + 1);
        self.ended.set(false);
        Ok(())
    }

    fn pause(&mut self) {}

    fn set_loop(&mut self, _looping: bool) {}

    fn set_volume(&mut self, _volume: f32) {}

    fn poll(&mut self) -> bool {
        !self.ended.get()
    }
}

struct OnlyMochi;

impl ImageProbe for OnlyMochi {
    fn can_load(&self, path: &Path) -> bool {
        path.ends_with("mochi.jpg")
    }
}

struct AllLoad;

impl ImageProbe for AllLoad {
    fn can_load(&self, _path: &Path) -> bool {
        true
    }
}

#[test]
fn theme_survives_restart() {
    // GIVEN: a fresh preference store
    let store = SharedStore::default();
    let mut harness = AcceptanceTestHarness::with_collaborators(Collaborators {
        preferences: Box::new(store.clone()),
        ..Collaborators::silent()
    })
    .expect("harness builds");

    // WHEN: the user switches to dark mode
    harness.send_key(KeyCode::Char('d'));
    assert_eq!(harness.state().theme, ThemeMode::Dark);
    assert!(harness
        .render_to_string()
        .contains("d: Switch to light mode"));

    // THEN: the next launch reads dark mode back
    assert_eq!(store.get_bool(DARK_MODE_KEY), Some(true));
    assert_eq!(load_theme(&store), ThemeMode::Dark);
}

#[test]
fn theme_toggle_works_when_store_is_read_only() {
    let mut harness = AcceptanceTestHarness::with_collaborators(Collaborators {
        preferences: Box::new(ReadOnlyStore),
        ..Collaborators::silent()
    })
    .expect("harness builds");

    harness.send_key(KeyCode::Char('d'));

    assert_eq!(harness.state().theme, ThemeMode::Dark);
    assert!(harness.state().status.is_none(), "write failure is silent");
}

#[test]
fn refused_music_retries_on_next_toggle() {
    let audio = CountingAudio {
        refuse: true,
        ..CountingAudio::default()
    };
    let plays = Rc::clone(&audio.plays);
    let mut harness = AcceptanceTestHarness::with_collaborators(Collaborators {
        audio: Box::new(audio),
        ..Collaborators::silent()
    })
    .expect("harness builds");

    harness.send_key(KeyCode::Char('m'));
    assert!(!harness.state().music.is_playing());

    harness.send_key(KeyCode::Char('m'));
    assert!(!harness.state().music.is_playing());
    assert_eq!(*plays.borrow(), 2, "each toggle tries again");
}

#[test]
fn music_marker_shown_while_playing() {
    let mut harness = AcceptanceTestHarness::with_collaborators(Collaborators {
        audio: Box::new(CountingAudio::default()),
        ..Collaborators::silent()
    })
    .expect("harness builds");

    harness.send_key(KeyCode::Char('m'));
    assert!(harness.render_to_string().contains('♪'));

    harness.send_key(KeyCode::Char('m'));
    assert!(!harness.render_to_string().contains('♪'));
}

#[test]
fn finished_track_turns_music_off() {
    // GIVEN: music playing
    let track = FiniteTrack::default();
    let mut harness = AcceptanceTestHarness::with_collaborators(Collaborators {
        audio: Box::new(track.clone()),
        ..Collaborators::silent()
    })
    .expect("harness builds");
    harness.send_key(KeyCode::Char('m'));
    assert!(!harness.advance(Duration::from_millis(250)));
    assert!(harness.state().music.is_playing());

    // WHEN: the player stops on its own
    track.ended.set(true);

    // THEN: the next tick notices and the marker goes away
    assert!(harness.advance(Duration::from_millis(250)));
    assert!(!harness.state().music.is_playing());
    let text = harness.render_to_string();
    assert!(!text.contains('♪'));
    assert!(text.contains("Music ended"));

    // THEN: a single press starts it again
    harness.send_key(KeyCode::Char('m'));
    assert!(harness.state().music.is_playing());
    assert_eq!(track.plays.get(), 2);
}

#[test]
fn gallery_hides_missing_cats() {
    let mut harness = AcceptanceTestHarness::with_collaborators(Collaborators {
        probe: Box::new(OnlyMochi),
        ..Collaborators::silent()
    })
    .expect("harness builds");

    harness.send_key(KeyCode::Char('c'));

    let gallery = &harness.state().gallery;
    assert!(gallery.is_visible());
    assert_eq!(gallery.visible_count(), 1);
    let text = harness.render_to_string();
    assert!(text.contains("mochi.jpg"));
    assert!(text.contains("1 / 1"));
}

#[test]
fn gallery_browsing_wraps_and_swallows_other_keys() {
    let mut harness = AcceptanceTestHarness::with_collaborators(Collaborators {
        probe: Box::new(AllLoad),
        ..Collaborators::silent()
    })
    .expect("harness builds");
    harness.send_key(KeyCode::Char('c'));
    let count = harness.state().gallery.visible_count();

    harness.send_key(KeyCode::Left);
    assert_eq!(harness.state().gallery.selected_index(), count - 1);

    harness.send_keys(&[KeyCode::Tab, KeyCode::Char('m'), KeyCode::Char('?')]);
    assert_eq!(harness.state().focus, FocusSection::About);
    assert!(!harness.state().music.is_playing());
    assert!(!harness.state().help_visible);

    harness.send_key(KeyCode::Char('c'));
    assert!(!harness.state().gallery.is_visible());
}

#[test]
fn missing_resume_is_reported_not_fatal() {
    let mut harness = AcceptanceTestHarness::builtin().expect("harness builds");

    assert!(!harness.send_key(KeyCode::Char('r')));

    assert!(harness.is_running());
    assert!(harness.render_to_string().contains("No resume configured"));
}

#[test]
fn ctrl_c_quits_from_anywhere() {
    let mut harness = AcceptanceTestHarness::builtin().expect("harness builds");
    harness.send_key(KeyCode::Char('?'));

    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!harness.is_running());
}
