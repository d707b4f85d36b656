//! Entity identification.
//!
//! Every game object (player or card) has a unique `EntityId`.
//!
//! ## ID Layout
//!
//! - `0..player_count`: reserved for players
//! - `player_count..`: card instances
//!
//! Action pointers are plain `EntityId`s, so "draw two cards for the
//! opponent" can point at a player the same way "attack that card"
//! points at a card.

use serde::{Deserialize, Serialize};

/// Unique identifier for any game entity.
///
/// Players and cards share the ID space. Use `is_player(player_count)`
/// to check which kind an ID refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID for a player.
    ///
    /// ```
    /// use jadok::core::{EntityId, PlayerId};
    ///
    /// let entity = EntityId::player(PlayerId::new(1));
    /// assert_eq!(entity.0, 1);
    /// assert!(entity.is_player(2));
    /// ```
    #[must_use]
    pub const fn player(id: super::PlayerId) -> Self {
        Self(id.0 as u32)
    }

    /// Get the first entity ID available for non-player entities.
    #[must_use]
    pub const fn first_non_player(player_count: usize) -> u32 {
        player_count as u32
    }

    /// Check if this entity ID refers to a player.
    #[must_use]
    pub const fn is_player(self, player_count: usize) -> bool {
        self.0 < player_count as u32
    }

    /// Convert to a `PlayerId` if this is a player entity.
    ///
    /// ```
    /// use jadok::core::{EntityId, PlayerId};
    ///
    /// assert_eq!(EntityId(1).as_player(2), Some(PlayerId::new(1)));
    /// assert_eq!(EntityId(5).as_player(2), None);
    /// ```
    #[must_use]
    pub fn as_player(self, player_count: usize) -> Option<super::PlayerId> {
        if self.is_player(player_count) {
            Some(super::PlayerId::new(self.0 as u8))
        } else {
            None
        }
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
