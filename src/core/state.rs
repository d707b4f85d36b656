//! Game state: public and private information.
//!
//! ## PublicState
//!
//! Observable information for both players:
//! - Phase, round number, token holder, priority
//! - Hand sizes, revealed wall cards
//! - Action history
//!
//! ## GameState
//!
//! Complete game state including:
//! - Public state
//! - Zone manager (card locations)
//! - Card instances
//! - The Action Sequence Pile
//! - RNG

use im::{HashSet as ImHashSet, Vector};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::entity::EntityId;
use super::phase::Phase;
use super::player::{PlayerId, PlayerMap};
use super::rng::{GameRng, GameRngState};
use crate::cards::{CardDefinition, CardInstance};
use crate::pile::ActionPile;
use crate::zones::{Zone, ZoneKind, ZoneManager, ZonePosition};

/// Public game state - observable by both players.
///
/// Uses `im` persistent data structures so clones stay cheap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicState {
    player_count: usize,

    // === Game Progression ===
    /// Round number (starts at 1).
    pub round: u32,

    /// Current station of the round state machine.
    pub phase: Phase,

    /// Actor index within per-actor phases: 0 = token holder acts,
    /// 1 = opponent acts.
    pub phase_cursor: u8,

    /// Action sequence within the round.
    pub action_sequence: u32,

    /// Holder of the first-player token.
    pub token_holder: PlayerId,

    /// The player who may act. JaDoK never gives both players
    /// priority at once.
    pub priority: PlayerId,

    // === Information Tracking ===
    /// Hand sizes (public knowledge).
    pub hand_sizes: PlayerMap<u32>,

    /// Wall cards whose identity has been revealed (blocked traps stay
    /// in the wall face-down but both players know them).
    pub known_wall: PlayerMap<ImHashSet<EntityId>>,

    /// Action-point pool for the current Refortify actor.
    pub refortify_points: u32,

    /// Action history for replay.
    pub action_history: Vector<ActionRecord>,
}

impl PublicState {
    /// Create a new public state at round 1, Draw phase, with player 0
    /// holding the token.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            round: 1,
            phase: Phase::Draw,
            phase_cursor: 0,
            action_sequence: 0,
            token_holder: PlayerId::new(0),
            priority: PlayerId::new(0),
            hand_sizes: PlayerMap::with_value(player_count, 0),
            known_wall: PlayerMap::new(player_count, |_| ImHashSet::new()),
            refortify_points: 0,
            action_history: Vector::new(),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count)
    }

    /// Check if a player has priority.
    #[must_use]
    pub fn has_priority(&self, player: PlayerId) -> bool {
        self.priority == player
    }

    /// Advance to the next round.
    pub fn advance_round(&mut self) {
        self.round += 1;
        self.action_sequence = 0;
        self.phase_cursor = 0;
    }

    /// Record an action in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.action_history.push_back(record);
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    /// Mark a wall card as revealed to both players.
    pub fn reveal_wall_card(&mut self, wall_owner: PlayerId, card: EntityId) {
        self.known_wall[wall_owner].insert(card);
    }

    /// Forget a wall card (it left the wall).
    pub fn forget_wall_card(&mut self, wall_owner: PlayerId, card: EntityId) {
        self.known_wall[wall_owner].remove(&card);
    }
}

/// A melee attack frozen mid-resolution: the attacker hit a face-down
/// trap and its owner must block or lose the attacker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTrap {
    pub attacker: EntityId,
    pub trap: EntityId,
}

/// Full game state including private information.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Public state (observable by both players).
    pub public: PublicState,

    /// Zone manager for card locations.
    pub zones: ZoneManager,

    /// Card instances by entity ID.
    cards: FxHashMap<EntityId, CardInstance>,

    /// The Action Sequence Pile.
    pub pile: ActionPile,

    /// A trap waiting for the attacker's owner to respond.
    pub pending_trap: Option<PendingTrap>,

    /// Deterministic RNG.
    pub rng: GameRng,

    /// Next entity ID to allocate.
    next_entity_id: u32,
}

impl GameState {
    /// Create a new game state with empty zones.
    #[must_use]
    pub fn new(player_count: usize, seed: u64) -> Self {
        Self {
            public: PublicState::new(player_count),
            zones: ZoneManager::new(player_count),
            cards: FxHashMap::default(),
            pile: ActionPile::new(),
            pending_trap: None,
            rng: GameRng::new(seed),
            next_entity_id: EntityId::first_non_player(player_count),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.public.player_count()
    }

    // === Entity Management ===

    /// Allocate a new entity ID.
    pub fn alloc_entity(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    /// Spawn a card instance of `definition` into a zone.
    ///
    /// Initial action points and immunity come from the definition;
    /// the card enters face-down on top of the zone.
    pub fn spawn(&mut self, definition: &CardDefinition, owner: PlayerId, zone: Zone) -> EntityId {
        let entity_id = self.alloc_entity();
        let mut card = CardInstance::new(entity_id, definition.id, owner);
        card.action_points = definition.action_points;
        card.ranged_magic_immune = definition.ranged_magic_immune;
        self.cards.insert(entity_id, card);
        self.zones.add_to_zone(entity_id, zone, ZonePosition::Top);
        if zone.kind == ZoneKind::Hand {
            self.public.hand_sizes[zone.owner] += 1;
        }
        entity_id
    }

    /// Get a card instance.
    #[must_use]
    pub fn card(&self, entity_id: EntityId) -> Option<&CardInstance> {
        self.cards.get(&entity_id)
    }

    /// Get a mutable card instance.
    pub fn card_mut(&mut self, entity_id: EntityId) -> Option<&mut CardInstance> {
        self.cards.get_mut(&entity_id)
    }

    /// Iterate over all card instances (unordered).
    pub fn all_cards(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.values()
    }

    // === Movement ===

    /// The zone of the given kind owned by `player`.
    #[must_use]
    pub fn zone(&self, player: PlayerId, kind: ZoneKind) -> Zone {
        Zone::new(player, kind)
    }

    /// Move a card between zones, keeping public hand sizes in sync.
    ///
    /// Returns the old zone, or `None` if the card isn't in a zone
    /// (e.g. it sits on the pile).
    pub fn move_card(&mut self, entity: EntityId, to: Zone, position: ZonePosition) -> Option<Zone> {
        let old = self.zones.move_to_zone(entity, to, position)?;
        if old.kind == ZoneKind::Hand {
            self.public.hand_sizes[old.owner] -= 1;
        }
        if to.kind == ZoneKind::Hand {
            self.public.hand_sizes[to.owner] += 1;
        }
        Some(old)
    }

    /// Take a card out of its zone and hand it to the pile.
    ///
    /// Returns the zone it left, or `None` if it wasn't in one.
    pub fn detach_for_pile(&mut self, entity: EntityId) -> Option<Zone> {
        let old = self.zones.remove(entity)?;
        if old.kind == ZoneKind::Hand {
            self.public.hand_sizes[old.owner] -= 1;
        }
        Some(old)
    }

    /// Place a card from the pile into a zone.
    pub fn attach_from_pile(&mut self, entity: EntityId, zone: Zone, position: ZonePosition) {
        self.zones.add_to_zone(entity, zone, position);
        if zone.kind == ZoneKind::Hand {
            self.public.hand_sizes[zone.owner] += 1;
        }
    }

    // === Decks and hands ===

    /// Draw the top card of a player's deck into their hand.
    ///
    /// Returns the drawn card, or `None` if the deck is empty.
    pub fn draw_card(&mut self, player: PlayerId) -> Option<EntityId> {
        let deck = self.zone(player, ZoneKind::Deck);
        let entity = self.zones.top_card(deck)?;
        self.move_card(entity, self.zone(player, ZoneKind::Hand), ZonePosition::Top);
        if let Some(card) = self.card_mut(entity) {
            card.face_down = false;
        }
        Some(entity)
    }

    /// A player's hand, in draw order.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[EntityId] {
        self.zones.cards_in(self.zone(player, ZoneKind::Hand))
    }

    /// Size of a player's deck.
    #[must_use]
    pub fn deck_size(&self, player: PlayerId) -> usize {
        self.zones.zone_size(self.zone(player, ZoneKind::Deck))
    }

    /// Shuffle a player's deck.
    pub fn shuffle_deck(&mut self, player: PlayerId) {
        let deck = self.zone(player, ZoneKind::Deck);
        self.zones.shuffle_zone(deck, &mut self.rng);
    }

    // === Cloning and snapshots ===

    /// Clone the game state.
    ///
    /// Takes `&mut self` because forking the RNG advances the fork
    /// counter; the clone diverges deterministically.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        Self {
            public: self.public.clone(),
            zones: self.zones.clone(),
            cards: self.cards.clone(),
            pile: self.pile.clone(),
            pending_trap: self.pending_trap,
            rng: self.rng.fork(),
            next_entity_id: self.next_entity_id,
        }
    }

    /// Serialize the full game into snapshot bytes.
    pub fn snapshot(&self) -> Result<Vec<u8>, bincode::Error> {
        let snapshot = Snapshot {
            public: self.public.clone(),
            zones: self.zones.clone(),
            cards: self.cards.clone(),
            pile: self.pile.clone(),
            pending_trap: self.pending_trap,
            rng: self.rng.state(),
            next_entity_id: self.next_entity_id,
        };
        bincode::serialize(&snapshot)
    }

    /// Restore a game from snapshot bytes.
    pub fn restore(bytes: &[u8]) -> Result<Self, bincode::Error> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        Ok(Self {
            public: snapshot.public,
            zones: snapshot.zones,
            cards: snapshot.cards,
            pile: snapshot.pile,
            pending_trap: snapshot.pending_trap,
            rng: GameRng::from_state(&snapshot.rng),
            next_entity_id: snapshot.next_entity_id,
        })
    }
}

/// Serialized form of a full game.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    public: PublicState,
    zones: ZoneManager,
    cards: FxHashMap<EntityId, CardInstance>,
    pile: ActionPile,
    pending_trap: Option<PendingTrap>,
    rng: GameRngState,
    next_entity_id: u32,
}
