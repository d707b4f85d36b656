//! Game construction and the initial deal.

use tracing::info;

use crate::cards::CardSet;
use crate::core::{GameState, PlayerId};
use crate::zones::{ZoneKind, ZonePosition};

use super::game::JadokGame;

/// Two-player duel; the identity plumbing is N-player but the rules
/// are not.
pub const PLAYER_COUNT: usize = 2;

/// Builder for a JaDoK game.
///
/// Defaults match the rulebook: wall capacity 14, an opening deal of
/// 10 wall cards and 10 hand cards, the built-in card set.
pub struct GameBuilder {
    card_set: CardSet,
    wall_capacity: usize,
    wall_deal: usize,
    hand_deal: usize,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            card_set: CardSet::builtin(),
            wall_capacity: 14,
            wall_deal: 10,
            hand_deal: 10,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Play with a custom card set (e.g. loaded from CSV).
    #[must_use]
    pub fn card_set(mut self, set: CardSet) -> Self {
        self.card_set = set;
        self
    }

    #[must_use]
    pub fn wall_capacity(mut self, capacity: usize) -> Self {
        self.wall_capacity = capacity;
        self
    }

    /// Opening deal: `wall` cards face-down into the wall, `hand`
    /// cards into the hand.
    #[must_use]
    pub fn opening_deal(mut self, wall: usize, hand: usize) -> Self {
        self.wall_deal = wall;
        self.hand_deal = hand;
        self
    }

    /// Build the game and its initial state.
    ///
    /// Each player's deck is one full copy of the card set's deck
    /// list, shuffled with the seeded RNG; player 0 starts with the
    /// first-player token.
    #[must_use]
    pub fn build(self, seed: u64) -> (JadokGame, GameState) {
        let mut state = GameState::new(PLAYER_COUNT, seed);

        for player in PlayerId::all(PLAYER_COUNT) {
            let deck = state.zone(player, ZoneKind::Deck);
            for &card_id in &self.card_set.deck {
                if let Some(def) = self.card_set.registry.get(card_id) {
                    let def = def.clone();
                    state.spawn(&def, player, deck);
                }
            }
            state.shuffle_deck(player);

            // Opening deal: the first cards go face-down into the
            // wall, the rest form the hand.
            let wall = state.zone(player, ZoneKind::Wall);
            for _ in 0..self.wall_deal {
                if let Some(card) = state.zones.top_card(deck) {
                    state.move_card(card, wall, ZonePosition::Top);
                }
            }
            for _ in 0..self.hand_deal {
                state.draw_card(player);
            }
        }

        info!(
            seed,
            deck = state.deck_size(PlayerId::new(0)),
            "game dealt"
        );

        let game = JadokGame::new(self.card_set, self.wall_capacity);
        (game, state)
    }
}
