use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::{Action, Key};

/// Poll for terminal input with timeout, translated into an `Action`.
/// Returns `Ok(None)` on timeout or for input the controller ignores.
pub fn poll_action(timeout: Duration) -> std::io::Result<Option<Action>> {
    if event::poll(timeout)? {
        Ok(translate(event::read()?))
    } else {
        Ok(None)
    }
}

/// Maps a raw crossterm event to the action it stands for.
pub fn translate(event: Event) -> Option<Action> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::trace!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            translate_key(key_event).map(Action::Key)
        }
        Event::Resize(width, height) => Some(Action::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Key> {
    match (key_event.modifiers, key_event.code) {
        // Ctrl+C quits; raw mode swallows SIGINT
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::Quit),
        (_, KeyCode::Char('q')) => Some(Key::Quit),
        (_, KeyCode::Enter) => Some(Key::Enter),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(Key::Down),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(Key::Up),
        (_, KeyCode::PageUp | KeyCode::Char('u')) => Some(Key::PageUp),
        (_, KeyCode::PageDown | KeyCode::Char('d')) => Some(Key::PageDown),
        _ => None,
    }
}
