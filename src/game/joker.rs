//! The Joker damage sequence.
//!
//! A revealed Joker deals 2 damage plus 1 for every action point
//! drained from the owner's characters in one chosen zone. Damage is
//! assigned one point at a time against the opponent: field characters
//! first (in zone order), then the wall top, then the battlement.
//! Wall cards hit this way are revealed and discarded; traps are
//! ineffective against Joker damage and are discarded too. Points with
//! nothing left to hit are lost. Invulnerability does not apply.

use tracing::debug;

use crate::cards::CardRegistry;
use crate::core::{GameState, PlayerId};
use crate::zones::{ZoneKind, ZonePosition};

use super::combat;

/// Base damage before drained action points.
pub const BASE_DAMAGE: u32 = 2;

/// Drain every action point from the owner's characters in `zone` and
/// return the drained total.
pub fn drain_action_points(
    state: &mut GameState,
    registry: &CardRegistry,
    owner: PlayerId,
    zone: ZoneKind,
) -> u32 {
    let characters = combat::characters_in(state, registry, owner, zone);
    let mut drained = 0;
    for entity in characters {
        if let Some(card) = state.card_mut(entity) {
            drained += card.action_points;
            card.action_points = 0;
        }
    }
    drained
}

/// Deal the full Joker damage sequence to `owner`'s opponent.
pub fn deal_damage(
    state: &mut GameState,
    registry: &CardRegistry,
    owner: PlayerId,
    total: u32,
) {
    let opponent = owner.opponent();
    debug!(%owner, total, "joker damage");

    for _ in 0..total {
        if let Some(&target) =
            combat::characters_in(state, registry, opponent, ZoneKind::Field).first()
        {
            // Joker damage ignores invulnerability.
            combat::apply_damage(state, registry, target, 1, None);
            continue;
        }

        let wall = state.zone(opponent, ZoneKind::Wall);
        if let Some(top) = state.zones.top_card(wall) {
            state.public.forget_wall_card(opponent, top);
            state.move_card(top, state.zone(opponent, ZoneKind::Discard), ZonePosition::Top);
            if let Some(card) = state.card_mut(top) {
                card.face_down = false;
            }
            debug!(card = top.raw(), "joker damage knocks a wall card loose");
            continue;
        }

        if let Some(&target) =
            combat::characters_in(state, registry, opponent, ZoneKind::Battlement).first()
        {
            combat::apply_damage(state, registry, target, 1, None);
            continue;
        }

        // Nothing left to hit; the rest of the damage is lost.
        break;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::catalog;
    use crate::cards::{CardId, Rank, Suit};
    use crate::core::EntityId;

    fn spawn_in(
        state: &mut GameState,
        registry: &CardRegistry,
        id: CardId,
        owner: PlayerId,
        kind: ZoneKind,
    ) -> EntityId {
        let def = registry.get(id).unwrap().clone();
        state.spawn(&def, owner, state.zone(owner, kind))
    }

    #[test]
    fn test_drain_action_points() {
        let mut state = GameState::new(2, 42);
        let registry = catalog::registry();
        let p0 = PlayerId::new(0);

        // Two-Eyed Jack (2 AP) + King (1 AP) in the field.
        spawn_in(&mut state, &registry, CardId::suited(Rank::Jack, Suit::Clubs), p0, ZoneKind::Field);
        let king = spawn_in(&mut state, &registry, CardId::suited(Rank::King, Suit::Clubs), p0, ZoneKind::Field);
        // A block in the field is not a character and is not drained.
        spawn_in(&mut state, &registry, CardId::suited(Rank::Four, Suit::Clubs), p0, ZoneKind::Field);

        let drained = drain_action_points(&mut state, &registry, p0, ZoneKind::Field);
        assert_eq!(drained, 3);
        assert_eq!(state.card(king).unwrap().action_points, 0);
    }

    #[test]
    fn test_damage_walks_field_then_wall_then_battlement() {
        let mut state = GameState::new(2, 42);
        let registry = catalog::registry();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        // Opponent: a Queen (3 dp) in the field, one wall card, a
        // Queen in the battlement.
        let field_queen = spawn_in(&mut state, &registry, CardId::suited(Rank::Queen, Suit::Clubs), p1, ZoneKind::Field);
        let walled = spawn_in(&mut state, &registry, CardId::suited(Rank::Seven, Suit::Clubs), p1, ZoneKind::Wall);
        let bz_queen = spawn_in(&mut state, &registry, CardId::suited(Rank::Queen, Suit::Spades), p1, ZoneKind::Battlement);

        // 3 kill the field queen, 1 knocks the trap out of the wall
        // (no effect), 1 lands on the battlement queen.
        deal_damage(&mut state, &registry, p0, 5);

        let discard = state.zone(p1, ZoneKind::Discard);
        assert_eq!(state.zones.zone_of(field_queen), Some(discard));
        assert_eq!(state.zones.zone_of(walled), Some(discard));
        assert_eq!(state.card(bz_queen).unwrap().damage_taken, 1);
    }

    #[test]
    fn test_damage_ignores_invulnerability() {
        let mut state = GameState::new(2, 42);
        let registry = catalog::registry();
        let p1 = PlayerId::new(1);

        let ace = spawn_in(&mut state, &registry, CardId::suited(Rank::Ace, Suit::Hearts), p1, ZoneKind::Field);

        deal_damage(&mut state, &registry, PlayerId::new(0), 4);
        assert_eq!(
            state.zones.zone_of(ace),
            Some(state.zone(p1, ZoneKind::Discard))
        );
    }

    #[test]
    fn test_excess_damage_is_lost() {
        let mut state = GameState::new(2, 42);
        let registry = catalog::registry();

        // Opponent board is empty; nothing panics, nothing changes.
        deal_damage(&mut state, &registry, PlayerId::new(0), 10);
        assert_eq!(state.zones.total_cards(), 0);
    }
}
