//! The Action Sequence Pile.
//!
//! During the ASP phase players alternately commit cards face-down
//! onto a shared pile. Placing the first-player token closes the pile;
//! no further cards may be committed. The pile then resolves strictly
//! last-in-first-out: for each entry, the player who committed it
//! chooses its disposition (reveal, discard, or place in the wall).
//!
//! Cards on the pile are owned by the pile: they are removed from the
//! zone manager on commit and re-enter a zone on resolution.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, PlayerId};

/// One committed card on the pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileEntry {
    /// The player who committed the card (and chooses its disposition).
    pub player: PlayerId,
    /// The committed card.
    pub card: EntityId,
}

/// The Action Sequence Pile: a LIFO stack of committed cards.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionPile {
    entries: Vec<PileEntry>,
    closed: bool,
}

impl ActionPile {
    /// Create an empty, open pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a card onto the pile.
    ///
    /// Panics if the pile is closed; the rules layer never commits to
    /// a closed pile.
    pub fn commit(&mut self, player: PlayerId, card: EntityId) {
        assert!(!self.closed, "Cannot commit to a closed pile");
        self.entries.push(PileEntry { player, card });
    }

    /// Close the pile (the first-player token was placed on it).
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Whether the pile has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The entry that resolves next (most recently committed).
    #[must_use]
    pub fn top(&self) -> Option<PileEntry> {
        self.entries.last().copied()
    }

    /// Pop the top entry for resolution.
    pub fn pop(&mut self) -> Option<PileEntry> {
        self.entries.pop()
    }

    /// Number of unresolved entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pile has no unresolved entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All unresolved entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[PileEntry] {
        &self.entries
    }

    /// Reset to an empty, open pile for the next round.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.closed = false;
    }

    /// Cards currently held by the pile.
    pub fn cards(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entries.iter().map(|e| e.card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut pile = ActionPile::new();
        pile.commit(PlayerId::new(0), EntityId(10));
        pile.commit(PlayerId::new(1), EntityId(11));
        pile.commit(PlayerId::new(0), EntityId(12));
        pile.close();

        assert_eq!(pile.pop().map(|e| e.card), Some(EntityId(12)));
        assert_eq!(pile.pop().map(|e| e.card), Some(EntityId(11)));
        assert_eq!(pile.pop().map(|e| e.card), Some(EntityId(10)));
        assert_eq!(pile.pop(), None);
    }

    #[test]
    fn test_entries_track_owner() {
        let mut pile = ActionPile::new();
        pile.commit(PlayerId::new(1), EntityId(10));

        let top = pile.top().unwrap();
        assert_eq!(top.player, PlayerId::new(1));
        assert_eq!(top.card, EntityId(10));
        assert_eq!(pile.len(), 1);
    }

    #[test]
    fn test_close() {
        let mut pile = ActionPile::new();
        assert!(!pile.is_closed());
        pile.close();
        assert!(pile.is_closed());
    }

    #[test]
    #[should_panic(expected = "closed pile")]
    fn test_commit_after_close_panics() {
        let mut pile = ActionPile::new();
        pile.close();
        pile.commit(PlayerId::new(0), EntityId(10));
    }

    #[test]
    fn test_reset() {
        let mut pile = ActionPile::new();
        pile.commit(PlayerId::new(0), EntityId(10));
        pile.close();

        pile.reset();

        assert!(pile.is_empty());
        assert!(!pile.is_closed());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut pile = ActionPile::new();
        pile.commit(PlayerId::new(0), EntityId(10));
        pile.close();

        let bytes = bincode::serialize(&pile).unwrap();
        let back: ActionPile = bincode::deserialize(&bytes).unwrap();

        assert_eq!(back.len(), 1);
        assert!(back.is_closed());
        assert_eq!(back.top(), pile.top());
    }
}
