//! Card instances - runtime card state.
//!
//! `CardInstance` is a specific card in a specific game: damage taken,
//! remaining action points, facing. Location is tracked solely by the
//! zone manager (or the pile, while committed) so a card can never be
//! in two places.

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::{EntityId, PlayerId};

/// A card instance in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Reference to the card definition.
    pub card_id: CardId,

    /// The player whose deck this card came from. Cards never change
    /// hands in JaDoK.
    pub owner: PlayerId,

    /// Face-down (deck, wall, committed pile cards).
    pub face_down: bool,

    /// Damage accumulated; at `damage_points` the card is destroyed.
    pub damage_taken: u32,

    /// Remaining action points this round.
    pub action_points: u32,

    /// Set when this character attacks and never cleared; the Ace of
    /// Spades placement ability destroys flagged characters.
    pub has_attacked: bool,

    /// Copied from the definition at spawn (Ace of Hearts).
    pub ranged_magic_immune: bool,
}

impl CardInstance {
    /// Create a face-down instance with no damage and no action
    /// points; the spawner copies initial stats from the definition.
    #[must_use]
    pub fn new(entity_id: EntityId, card_id: CardId, owner: PlayerId) -> Self {
        Self {
            entity_id,
            card_id,
            owner,
            face_down: true,
            damage_taken: 0,
            action_points: 0,
            has_attacked: false,
            ranged_magic_immune: false,
        }
    }

    /// Apply damage. Returns the new total.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.damage_taken += amount;
        self.damage_taken
    }

    /// Spend one action point.
    ///
    /// Returns false (and changes nothing) if none remain.
    pub fn spend_action_point(&mut self) -> bool {
        if self.action_points == 0 {
            return false;
        }
        self.action_points -= 1;
        true
    }
}
