//! Keyboard mapping from Zellij keys to application events.
//!
//! Global bindings (`Ctrl+b`, `Ctrl+p`, `Ctrl+t`, `Ctrl+s`, `Esc`) apply in
//! both views; everything else depends on the active [`ViewMode`]. Keys held
//! with modifiers other than `Shift` are never typed into the preview.
//!
//! # Example
//!
//! ```rust
//! use formshell::app::{keys::map_key, Event, ViewMode};
//! use zellij_tile::prelude::{BareKey, KeyWithModifier};
//!
//! let tab = KeyWithModifier::new(BareKey::Tab);
//! assert_eq!(map_key(ViewMode::Builder, &tab), Some(Event::ToggleView));
//! assert_eq!(map_key(ViewMode::Preview, &tab), Some(Event::NextField));
//! ```

use super::handler::Event;
use super::modes::{ViewMode, THEMES};
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an event for the active view.
#[must_use]
pub fn map_key(view: ViewMode, key: &KeyWithModifier) -> Option<Event> {
    tracing::trace!(bare_key = ?key.bare_key, view = %view, "key event");

    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('b') => Some(Event::SwitchView(ViewMode::Builder)),
            BareKey::Char('p') => Some(Event::SwitchView(ViewMode::Preview)),
            BareKey::Char('t') => Some(Event::CycleTheme),
            BareKey::Char('s') => Some(Event::Save),
            _ => None,
        };
    }

    if !shift_at_most(key) {
        return None;
    }

    if key.bare_key == BareKey::Esc {
        return Some(Event::CloseFocus);
    }

    match view {
        ViewMode::Builder => map_builder_key(key),
        ViewMode::Preview => map_preview_key(key),
    }
}

fn shift_at_most(key: &KeyWithModifier) -> bool {
    key.key_modifiers
        .iter()
        .all(|modifier| *modifier == KeyModifier::Shift)
}

fn map_builder_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Event::SwitchTheme(THEMES.get(index)?.id)
        }
        BareKey::Char('t') => Event::CycleTheme,
        BareKey::Char('p') | BareKey::Tab => Event::ToggleView,
        BareKey::Char('r') => Event::ReloadForm,
        BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

fn map_preview_key(key: &KeyWithModifier) -> Option<Event> {
    Some(match key.bare_key {
        BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
        BareKey::Tab | BareKey::Down => Event::NextField,
        BareKey::Up => Event::PrevField,
        BareKey::Left | BareKey::Right => Event::Toggle,
        BareKey::Enter => Event::Submit,
        BareKey::Backspace => Event::Backspace,
        BareKey::Char(c) => Event::Char(c),
        _ => return None,
    })
}
