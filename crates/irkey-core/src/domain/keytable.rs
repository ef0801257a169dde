//! The key table: an immutable mapping from IR command codes to
//! keyboard shortcut actions, built once at startup from the config
//! file and read-only for the rest of the process lifetime.

use std::collections::HashMap;

/// The action bound to one remote-control button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAction {
    /// Shortcut string handed to the injection tool (e.g. `"XF86AudioMute"`
    /// or `"ctrl+alt+t"`). Never empty.
    pub shortcut: String,
    /// Free-form note from the config file. May be empty.
    pub comment: String,
}

impl KeyAction {
    /// Convenience constructor, mostly for tests.
    pub fn new(shortcut: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            shortcut: shortcut.into(),
            comment: comment.into(),
        }
    }
}

/// Mapping from command code to [`KeyAction`].
#[derive(Debug, Clone, Default)]
pub struct KeyTable {
    entries: HashMap<u32, KeyAction>,
}

impl KeyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `code` to `action`. A later definition for the same code
    /// replaces the earlier one (plain map insertion, as in the config
    /// format: last definition wins). Returns the replaced action, if any.
    pub fn insert(&mut self, code: u32, action: KeyAction) -> Option<KeyAction> {
        self.entries.insert(code, action)
    }

    /// Looks up the action bound to `code`.
    pub fn get(&self, code: u32) -> Option<&KeyAction> {
        self.entries.get(&code)
    }

    /// Number of bound codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no codes are bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        // Arrange
        let mut table = KeyTable::new();

        // Act
        table.insert(12, KeyAction::new("space", "play/pause"));

        // Assert
        let action = table.get(12).expect("code 12 must be present");
        assert_eq!(action.shortcut, "space");
        assert_eq!(action.comment, "play/pause");
    }

    #[test]
    fn test_get_unmapped_code_returns_none() {
        let table = KeyTable::new();
        assert!(table.get(7).is_none());
    }

    #[test]
    fn test_lookup_is_idempotent() {
        // Arrange
        let mut table = KeyTable::new();
        table.insert(5, KeyAction::new("Escape", ""));

        // Act
        let first = table.get(5).cloned();
        let second = table.get(5).cloned();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_later_insert_for_same_code_wins() {
        // Arrange
        let mut table = KeyTable::new();
        table.insert(5, KeyAction::new("Escape", "quit"));

        // Act
        let replaced = table.insert(5, KeyAction::new("Return", ""));

        // Assert
        assert_eq!(replaced, Some(KeyAction::new("Escape", "quit")));
        assert_eq!(table.get(5), Some(&KeyAction::new("Return", "")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut table = KeyTable::new();
        assert!(table.is_empty());

        table.insert(1, KeyAction::new("a", ""));
        table.insert(2, KeyAction::new("b", ""));
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }
}
