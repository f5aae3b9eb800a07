//! Type-safe key bindings with help metadata.
//!
//! A [`Binding`] groups the key codes that trigger an action together with
//! the short help text describing it. Components match incoming
//! [`bubbletea_rs::KeyMsg`] events against their bindings instead of
//! comparing raw key codes inline, which keeps keymaps configurable and
//! help output consistent.

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help metadata for a key binding.
#[derive(Debug, Clone, Default)]
pub struct Help {
    /// Short key label, e.g. `"↑"`.
    pub key: String,
    /// Action description, e.g. `"move up"`.
    pub desc: String,
}

/// A single action bound to one or more key codes.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::key::Binding;
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let up = Binding::new(vec![KeyCode::Up]).with_help("↑", "previous suggestion");
/// let msg = KeyMsg { key: KeyCode::Up, modifiers: KeyModifiers::NONE };
/// assert!(up.matches(&msg));
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text to the binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Enables or disables the binding; disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding participates in matching.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// The help metadata for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether a key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.contains(&msg.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_matches_any_bound_code() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(b.matches(&key(KeyCode::Up)));
        assert!(b.matches(&key(KeyCode::Char('k'))));
        assert!(!b.matches(&key(KeyCode::Down)));
    }

    #[test]
    fn test_disabled_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]);
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter)));
        b.set_enabled(true);
        assert!(b.matches(&key(KeyCode::Enter)));
    }

    #[test]
    fn test_help_text() {
        let b = Binding::new(vec![KeyCode::Esc]).with_help("esc", "close");
        assert_eq!(b.help().key, "esc");
        assert_eq!(b.help().desc, "close");
    }
}
