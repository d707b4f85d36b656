//! Card registry - definition lookup.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};

/// Registry of card definitions for a game.
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    definitions: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous one with the
    /// same ID.
    pub fn register(&mut self, definition: CardDefinition) {
        self.definitions.insert(definition.id, definition);
    }

    /// Look up a definition.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.definitions.get(&id)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over all definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.definitions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::definition::{Rank, Suit};

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        let id = CardId::suited(Rank::Four, Suit::Clubs);
        registry.register(CardDefinition::new(
            id,
            "Four of Clubs",
            Rank::Four,
            Some(Suit::Clubs),
        ));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(id).map(|d| d.name.as_str()), Some("Four of Clubs"));
        assert!(registry.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = CardRegistry::new();
        let id = CardId::new(0);
        registry.register(CardDefinition::new(id, "First", Rank::Two, Some(Suit::Clubs)));
        registry.register(CardDefinition::new(id, "Second", Rank::Two, Some(Suit::Clubs)));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(id).map(|d| d.name.as_str()), Some("Second"));
    }
}
