//! Victory points and end-of-game detection.
//!
//! The game ends at a round boundary when a player's hand, field and
//! wall are all empty, or when either deck runs out. The winner is
//! whoever holds more victory points: 2 per character in their field
//! zone plus 2 per trap in their wall.

use crate::cards::CardRegistry;
use crate::core::{GameState, PlayerId};
use crate::rules::GameResult;
use crate::zones::ZoneKind;

use super::combat;

/// Points per field character and per walled trap.
const POINTS_PER_CARD: u32 = 2;

/// A player's current victory points.
#[must_use]
pub fn victory_points(state: &GameState, registry: &CardRegistry, player: PlayerId) -> u32 {
    let field_characters =
        combat::characters_in(state, registry, player, ZoneKind::Field).len() as u32;

    let wall_traps = state
        .zones
        .cards_in(state.zone(player, ZoneKind::Wall))
        .iter()
        .filter(|&&e| combat::definition(registry, state, e).is_some_and(|d| d.is_trap))
        .count() as u32;

    POINTS_PER_CARD * (field_characters + wall_traps)
}

/// Whether end conditions hold (checked at round boundaries).
#[must_use]
pub fn end_conditions_met(state: &GameState) -> bool {
    state.public.player_ids().any(|player| {
        let exhausted = state.hand(player).is_empty()
            && state.zones.zone_size(state.zone(player, ZoneKind::Field)) == 0
            && state.zones.zone_size(state.zone(player, ZoneKind::Wall)) == 0;
        exhausted || state.deck_size(player) == 0
    })
}

/// The final result of a finished game.
#[must_use]
pub fn game_result(state: &GameState, registry: &CardRegistry) -> GameResult {
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);
    let s0 = victory_points(state, registry, p0);
    let s1 = victory_points(state, registry, p1);

    match s0.cmp(&s1) {
        std::cmp::Ordering::Greater => GameResult::Winner(p0),
        std::cmp::Ordering::Less => GameResult::Winner(p1),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}
