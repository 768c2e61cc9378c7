//! Keystroke filter for the card-number field.
//!
//! Runs before a key reaches the field: digits and editing or navigation
//! keys go through, everything else is dropped. It is a first line of
//! defence only; [`format_input`](crate::format::format_input) still cleans
//! whatever ends up in the field (pasted text, for example).

/// A key pressed while the card-number field has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Tab (focus change).
    Tab,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Enter (form submit).
    Enter,
    /// Any other named key, such as `F5` or `Escape`.
    Other(String),
}

impl Key {
    /// Parses a key name as reported by a UI toolkit.
    ///
    /// Single characters become [`Key::Char`]; known names map to their
    /// variant; anything else becomes [`Key::Other`].
    ///
    /// # Example
    ///
    /// ```
    /// use card_form::keys::Key;
    ///
    /// assert_eq!(Key::from_name("7"), Key::Char('7'));
    /// assert_eq!(Key::from_name("Backspace"), Key::Backspace);
    /// assert_eq!(Key::from_name("F5"), Key::Other("F5".to_string()));
    /// ```
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::Char(c);
        }

        match name {
            "Backspace" => Self::Backspace,
            "Delete" => Self::Delete,
            "Tab" => Self::Tab,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Returns true if the key may reach the card-number field.
///
/// # Example
///
/// ```
/// use card_form::keys::{accepts, Key};
///
/// assert!(accepts(&Key::Char('4')));
/// assert!(accepts(&Key::Backspace));
/// assert!(!accepts(&Key::Char('a')));
/// assert!(!accepts(&Key::Char(' ')));
/// ```
pub fn accepts(key: &Key) -> bool {
    match key {
        Key::Char(c) => c.is_ascii_digit(),
        Key::Backspace
        | Key::Delete
        | Key::Tab
        | Key::ArrowLeft
        | Key::ArrowRight
        | Key::Home
        | Key::End
        | Key::Enter => true,
        Key::Other(_) => false,
    }
}

/// Feeds each character of `typed` through the filter and keeps the accepted ones.
///
/// # Example
///
/// ```
/// use card_form::keys::filter_keystrokes;
///
/// assert_eq!(filter_keystrokes("41a1 1x1"), "41111");
/// ```
pub fn filter_keystrokes(typed: &str) -> String {
    typed.chars().filter(|&c| accepts(&Key::Char(c))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_accepted() {
        for c in '0'..='9' {
            assert!(accepts(&Key::Char(c)));
        }
    }

    #[test]
    fn test_other_characters_are_rejected() {
        for c in ['a', 'Z', ' ', '-', '.', '+', 'e', '٣'] {
            assert!(!accepts(&Key::Char(c)), "{c:?} should be rejected");
        }
    }

    #[test]
    fn test_editing_keys_are_accepted() {
        for key in [
            Key::Backspace,
            Key::Delete,
            Key::Tab,
            Key::ArrowLeft,
            Key::ArrowRight,
            Key::Home,
            Key::End,
            Key::Enter,
        ] {
            assert!(accepts(&key), "{key:?} should be accepted");
        }
    }

    #[test]
    fn test_unknown_named_keys_are_rejected() {
        assert!(!accepts(&Key::from_name("Escape")));
        assert!(!accepts(&Key::from_name("F12")));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Key::from_name("Delete"), Key::Delete);
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_name(" "), Key::Char(' '));
        assert_eq!(Key::from_name(""), Key::Other(String::new()));
    }

    #[test]
    fn test_filter_keystrokes() {
        assert_eq!(filter_keystrokes("4111 1111"), "41111111");
        assert_eq!(filter_keystrokes("abc"), "");
        assert_eq!(filter_keystrokes(""), "");
    }
}
