//! Zone identity and the zone manager.
//!
//! Each player owns six zones. All of them are ordered: decks and
//! walls for obvious reasons (draws and wall damage come off the top),
//! the rest so that display and iteration are stable across replays.
//!
//! The manager tracks card locations and ordered movement. It does not
//! know about game rules like the wall capacity; the rules layer
//! enforces those.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{EntityId, GameRng, PlayerId};

/// The kind of a player zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Face-down draw pile.
    Deck,
    /// Private hand.
    Hand,
    /// Face-down defensive wall; damage reveals from the top.
    Wall,
    /// Battlement zone, behind the wall.
    Battlement,
    /// Field zone, in the open.
    Field,
    /// Public discard pile.
    Discard,
}

impl ZoneKind {
    /// All zone kinds, in display order.
    pub const ALL: [ZoneKind; 6] = [
        ZoneKind::Deck,
        ZoneKind::Hand,
        ZoneKind::Wall,
        ZoneKind::Battlement,
        ZoneKind::Field,
        ZoneKind::Discard,
    ];
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoneKind::Deck => "deck",
            ZoneKind::Hand => "hand",
            ZoneKind::Wall => "wall",
            ZoneKind::Battlement => "battlement",
            ZoneKind::Field => "field",
            ZoneKind::Discard => "discard",
        };
        f.write_str(name)
    }
}

/// A concrete zone: a kind owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zone {
    pub owner: PlayerId,
    pub kind: ZoneKind,
}

impl Zone {
    #[must_use]
    pub const fn new(owner: PlayerId, kind: ZoneKind) -> Self {
        Self { owner, kind }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}'s {}", self.owner, self.kind)
    }
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Add to top of zone (end of the order vec).
    Top,
    /// Add to bottom of zone.
    Bottom,
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use jadok::core::{EntityId, PlayerId};
/// use jadok::zones::{Zone, ZoneKind, ZoneManager, ZonePosition};
///
/// let mut manager = ZoneManager::new(2);
/// let deck = Zone::new(PlayerId::new(0), ZoneKind::Deck);
///
/// manager.add_to_zone(EntityId(10), deck, ZonePosition::Top);
/// manager.add_to_zone(EntityId(11), deck, ZonePosition::Top);
///
/// assert_eq!(manager.top_card(deck), Some(EntityId(11)));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ZoneManager {
    /// Card locations: entity -> zone.
    locations: FxHashMap<EntityId, Zone>,

    /// Ordered card lists, one per zone. Index 0 is the bottom, the
    /// last index is the top.
    zone_order: FxHashMap<Zone, Vec<EntityId>>,
}

impl ZoneManager {
    /// Create a zone manager with all zones for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        let mut zone_order = FxHashMap::default();
        for player in PlayerId::all(player_count) {
            for kind in ZoneKind::ALL {
                zone_order.insert(Zone::new(player, kind), Vec::new());
            }
        }
        Self {
            locations: FxHashMap::default(),
            zone_order,
        }
    }

    /// Add a card to a zone.
    ///
    /// Panics if the entity is already tracked; cards enter the
    /// manager exactly once and move with `move_to_zone` after that.
    pub fn add_to_zone(&mut self, entity: EntityId, zone: Zone, position: ZonePosition) {
        if self.locations.contains_key(&entity) {
            panic!("Entity {:?} already exists in zone manager", entity);
        }

        self.locations.insert(entity, zone);
        let order = self.zone_order.entry(zone).or_default();
        match position {
            ZonePosition::Top => order.push(entity),
            ZonePosition::Bottom => order.insert(0, entity),
        }
    }

    /// Move a card from its current zone to another.
    ///
    /// Returns the old zone, or `None` if the card wasn't tracked.
    pub fn move_to_zone(
        &mut self,
        entity: EntityId,
        new_zone: Zone,
        position: ZonePosition,
    ) -> Option<Zone> {
        let old_zone = self.locations.get(&entity).copied()?;

        if let Some(order) = self.zone_order.get_mut(&old_zone) {
            order.retain(|&e| e != entity);
        }

        self.locations.insert(entity, new_zone);
        let order = self.zone_order.entry(new_zone).or_default();
        match position {
            ZonePosition::Top => order.push(entity),
            ZonePosition::Bottom => order.insert(0, entity),
        }

        Some(old_zone)
    }

    /// Remove a card from the manager entirely (it moves onto the
    /// action pile, which tracks it until resolution).
    ///
    /// Returns the zone it was in, or `None` if not tracked.
    pub fn remove(&mut self, entity: EntityId) -> Option<Zone> {
        let zone = self.locations.remove(&entity)?;
        if let Some(order) = self.zone_order.get_mut(&zone) {
            order.retain(|&e| e != entity);
        }
        Some(zone)
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn zone_of(&self, entity: EntityId) -> Option<Zone> {
        self.locations.get(&entity).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, entity: EntityId, zone: Zone) -> bool {
        self.locations.get(&entity) == Some(&zone)
    }

    /// Get cards in a zone, bottom to top.
    #[must_use]
    pub fn cards_in(&self, zone: Zone) -> &[EntityId] {
        self.zone_order.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.zone_order.get(&zone).map_or(0, Vec::len)
    }

    /// Get the top card of a zone.
    #[must_use]
    pub fn top_card(&self, zone: Zone) -> Option<EntityId> {
        self.zone_order.get(&zone)?.last().copied()
    }

    /// Remove and return the top card of a zone.
    pub fn pop_top(&mut self, zone: Zone) -> Option<EntityId> {
        let order = self.zone_order.get_mut(&zone)?;
        let entity = order.pop()?;
        self.locations.remove(&entity);
        Some(entity)
    }

    /// Shuffle a zone.
    pub fn shuffle_zone(&mut self, zone: Zone, rng: &mut GameRng) {
        if let Some(order) = self.zone_order.get_mut(&zone) {
            rng.shuffle(order);
        }
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager contains an entity.
    #[must_use]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.locations.contains_key(&entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Zone {
        Zone::new(PlayerId::new(0), ZoneKind::Deck)
    }

    fn wall() -> Zone {
        Zone::new(PlayerId::new(0), ZoneKind::Wall)
    }

    #[test]
    fn test_add_and_get() {
        let mut manager = ZoneManager::new(2);

        manager.add_to_zone(EntityId(10), deck(), ZonePosition::Top);
        manager.add_to_zone(EntityId(11), deck(), ZonePosition::Top);

        assert_eq!(manager.zone_of(EntityId(10)), Some(deck()));
        assert_eq!(manager.zone_of(EntityId(99)), None);
        assert!(manager.is_in_zone(EntityId(10), deck()));
        assert_eq!(manager.zone_size(deck()), 2);
    }

    #[test]
    fn test_ordering() {
        let mut manager = ZoneManager::new(2);

        manager.add_to_zone(EntityId(10), deck(), ZonePosition::Top);
        manager.add_to_zone(EntityId(11), deck(), ZonePosition::Bottom);
        manager.add_to_zone(EntityId(12), deck(), ZonePosition::Top);

        assert_eq!(
            manager.cards_in(deck()),
            &[EntityId(11), EntityId(10), EntityId(12)]
        );
        assert_eq!(manager.top_card(deck()), Some(EntityId(12)));
    }

    #[test]
    fn test_move_between_zones() {
        let mut manager = ZoneManager::new(2);

        manager.add_to_zone(EntityId(10), deck(), ZonePosition::Top);
        let old = manager.move_to_zone(EntityId(10), wall(), ZonePosition::Top);

        assert_eq!(old, Some(deck()));
        assert_eq!(manager.zone_of(EntityId(10)), Some(wall()));
        assert_eq!(manager.zone_size(deck()), 0);
        assert_eq!(manager.zone_size(wall()), 1);
    }

    #[test]
    fn test_remove() {
        let mut manager = ZoneManager::new(2);

        manager.add_to_zone(EntityId(10), wall(), ZonePosition::Top);
        let removed = manager.remove(EntityId(10));

        assert_eq!(removed, Some(wall()));
        assert!(!manager.contains(EntityId(10)));
        assert_eq!(manager.zone_size(wall()), 0);
    }

    #[test]
    fn test_pop_top() {
        let mut manager = ZoneManager::new(2);

        manager.add_to_zone(EntityId(10), deck(), ZonePosition::Top);
        manager.add_to_zone(EntityId(11), deck(), ZonePosition::Top);

        assert_eq!(manager.pop_top(deck()), Some(EntityId(11)));
        assert!(!manager.contains(EntityId(11)));
        assert_eq!(manager.pop_top(deck()), Some(EntityId(10)));
        assert_eq!(manager.pop_top(deck()), None);
    }

    #[test]
    fn test_shuffle() {
        let mut manager = ZoneManager::new(2);
        for i in 10..30 {
            manager.add_to_zone(EntityId(i), deck(), ZonePosition::Top);
        }

        let before: Vec<_> = manager.cards_in(deck()).to_vec();

        let mut rng = GameRng::new(42);
        manager.shuffle_zone(deck(), &mut rng);

        let after: Vec<_> = manager.cards_in(deck()).to_vec();
        assert_eq!(before.len(), after.len());
        assert_ne!(before, after);
    }

    #[test]
    fn test_zones_are_per_player() {
        let mut manager = ZoneManager::new(2);
        let other_wall = Zone::new(PlayerId::new(1), ZoneKind::Wall);

        manager.add_to_zone(EntityId(10), wall(), ZonePosition::Top);
        manager.add_to_zone(EntityId(11), other_wall, ZonePosition::Top);

        assert_eq!(manager.zone_size(wall()), 1);
        assert_eq!(manager.zone_size(other_wall), 1);
        assert!(!manager.is_in_zone(EntityId(11), wall()));
    }

    #[test]
    #[should_panic(expected = "Entity")]
    fn test_duplicate_entity_panics() {
        let mut manager = ZoneManager::new(2);
        manager.add_to_zone(EntityId(10), deck(), ZonePosition::Top);
        manager.add_to_zone(EntityId(10), deck(), ZonePosition::Top);
    }

    #[test]
    fn test_total_cards() {
        let mut manager = ZoneManager::new(2);
        assert_eq!(manager.total_cards(), 0);

        manager.add_to_zone(EntityId(10), deck(), ZonePosition::Top);
        manager.add_to_zone(EntityId(11), wall(), ZonePosition::Top);
        assert_eq!(manager.total_cards(), 2);
    }
}
