//! Screen configuration and key bindings
//!
//! Everything the screen needs to know about sizes, labels and keys is held in
//! a [`ScreenConfig`] that the caller builds once and hands to the screen.
//! There are no process-wide key tables.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Widest the whole screen is ever drawn, in columns
pub const MAX_WIDTH: u16 = 80;

/// Width the form is rendered at, in columns
pub const FIELD_WIDTH: u16 = 45;

/// A short key/description pair shown in help lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub desc: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, desc: impl Into<String>) -> Self {
        KeyHint {
            key: key.into(),
            desc: desc.into(),
        }
    }
}

/// One logical action bound to one or more key chords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    chords: Vec<(KeyCode, KeyModifiers)>,
    hint: KeyHint,
}

impl KeyBinding {
    pub fn new(chords: &[(KeyCode, KeyModifiers)], key: &str, desc: &str) -> Self {
        KeyBinding {
            chords: chords.to_vec(),
            hint: KeyHint::new(key, desc),
        }
    }

    /// Whether `key` is one of this binding's chords.
    ///
    /// Shift is ignored for character keys since terminals disagree on
    /// whether to report it alongside an uppercase letter.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.chords.iter().any(|(code, mods)| {
            if *code != key.code {
                return false;
            }
            match code {
                KeyCode::Char(_) => {
                    key.modifiers.difference(KeyModifiers::SHIFT)
                        == mods.difference(KeyModifiers::SHIFT)
                }
                _ => key.modifiers == *mods,
            }
        })
    }

    pub fn hint(&self) -> &KeyHint {
        &self.hint
    }
}

/// Keys the screen intercepts before the form sees them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    /// Leave the current session without a result
    pub quit: KeyBinding,
    /// Cancel the whole interaction
    pub interrupt: KeyBinding,
    pub scroll_up: KeyBinding,
    pub scroll_down: KeyBinding,
    pub page_up: KeyBinding,
    pub page_down: KeyBinding,
    pub top: KeyBinding,
    pub bottom: KeyBinding,
}

impl KeyMap {
    /// Whether `key` belongs to the documentation viewport
    pub fn is_viewport_key(&self, key: &KeyEvent) -> bool {
        [
            &self.scroll_up,
            &self.scroll_down,
            &self.page_up,
            &self.page_down,
            &self.top,
            &self.bottom,
        ]
        .iter()
        .any(|binding| binding.matches(key))
    }

    /// Hints for the keys the screen owns, in display order
    pub fn hints(&self) -> Vec<KeyHint> {
        vec![
            KeyHint::new("pgup/pgdn", "scroll docs"),
            self.quit.hint().clone(),
            self.interrupt.hint().clone(),
        ]
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let shift = KeyModifiers::SHIFT;
        KeyMap {
            quit: KeyBinding::new(&[(KeyCode::Char('q'), ctrl)], "ctrl+q", "restart"),
            interrupt: KeyBinding::new(&[(KeyCode::Char('c'), ctrl)], "ctrl+c", "cancel"),
            scroll_up: KeyBinding::new(
                &[(KeyCode::Up, shift), (KeyCode::Char('k'), ctrl)],
                "shift+↑",
                "doc up",
            ),
            scroll_down: KeyBinding::new(
                &[(KeyCode::Down, shift), (KeyCode::Char('j'), ctrl)],
                "shift+↓",
                "doc down",
            ),
            page_up: KeyBinding::new(
                &[(KeyCode::PageUp, none), (KeyCode::Char('u'), ctrl)],
                "pgup",
                "doc page up",
            ),
            page_down: KeyBinding::new(
                &[(KeyCode::PageDown, none), (KeyCode::Char('d'), ctrl)],
                "pgdn",
                "doc page down",
            ),
            top: KeyBinding::new(&[(KeyCode::Home, ctrl)], "ctrl+home", "doc top"),
            bottom: KeyBinding::new(&[(KeyCode::End, ctrl)], "ctrl+end", "doc bottom"),
        }
    }
}

/// Labels for the "result is invalid, what now?" prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmText {
    pub title: String,
    pub description: String,
    /// Label of the choice that goes back to the form
    pub affirmative: String,
    /// Label of the choice that stops the interaction
    pub negative: String,
}

impl Default for ConfirmText {
    fn default() -> Self {
        ConfirmText {
            title: String::from("Nothing to do"),
            description: String::from(
                "missing valid selections, did you toggle all programs off?",
            ),
            affirmative: String::from("I didn't mean to, take me back"),
            negative: String::from("yes, stop exec"),
        }
    }
}

/// Sizes, labels and keys of the form screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Shown in the header boundary while the form has no errors
    pub title: String,
    /// Shown above the documentation viewport
    pub doc_title: String,
    pub field_width: u16,
    pub max_width: u16,
    pub keys: KeyMap,
    pub confirm: ConfirmText,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            title: String::from("formpane"),
            doc_title: String::from("Documentation"),
            field_width: FIELD_WIDTH,
            max_width: MAX_WIDTH,
            keys: KeyMap::default(),
            confirm: ConfirmText::default(),
        }
    }
}

impl ScreenConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_doc_title(mut self, title: impl Into<String>) -> Self {
        self.doc_title = title.into();
        self
    }

    pub fn with_field_width(mut self, width: u16) -> Self {
        self.field_width = width;
        self
    }

    pub fn with_max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    pub fn with_keys(mut self, keys: KeyMap) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_confirm(mut self, confirm: ConfirmText) -> Self {
        self.confirm = confirm;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_matches_modifiers() {
        let keys = KeyMap::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);

        assert!(keys.interrupt.matches(&ctrl_c));
        assert!(!keys.interrupt.matches(&plain_c));
        assert!(!keys.quit.matches(&ctrl_c));
    }

    #[test]
    fn test_viewport_keys() {
        let keys = KeyMap::default();
        let page_down = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        let shift_down = KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT);

        assert!(keys.is_viewport_key(&page_down));
        assert!(keys.is_viewport_key(&shift_down));
        // Plain arrows belong to the form
        assert!(!keys.is_viewport_key(&down));
    }

    #[test]
    fn test_builder() {
        let config = ScreenConfig::default()
            .with_title("deploy")
            .with_field_width(30);
        assert_eq!(config.title, "deploy");
        assert_eq!(config.field_width, 30);
        assert_eq!(config.max_width, MAX_WIDTH);
    }
}
