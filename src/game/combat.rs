//! Damage, destruction, blocks and targeting.

use tracing::debug;

use crate::cards::{AttackKind, BlockCondition, CardDefinition, CardRegistry};
use crate::core::{EntityId, GameState, PlayerId};
use crate::zones::{ZoneKind, ZonePosition};

/// Look up the definition behind a card entity.
#[must_use]
pub fn definition<'a>(
    registry: &'a CardRegistry,
    state: &GameState,
    entity: EntityId,
) -> Option<&'a CardDefinition> {
    let card = state.card(entity)?;
    registry.get(card.card_id)
}

/// A player's characters in one of their zones, in zone order.
#[must_use]
pub fn characters_in(
    state: &GameState,
    registry: &CardRegistry,
    player: PlayerId,
    kind: ZoneKind,
) -> Vec<EntityId> {
    state
        .zones
        .cards_in(state.zone(player, kind))
        .iter()
        .copied()
        .filter(|&e| definition(registry, state, e).is_some_and(|d| d.is_character))
        .collect()
}

/// Move a card to its owner's discard pile, face up.
pub fn destroy(state: &mut GameState, entity: EntityId) {
    let Some(card) = state.card(entity) else {
        return;
    };
    let owner = card.owner;
    let was_walled = state
        .zones
        .zone_of(entity)
        .is_some_and(|z| z.kind == ZoneKind::Wall);

    state.move_card(entity, state.zone(owner, ZoneKind::Discard), ZonePosition::Top);
    if was_walled {
        state.public.forget_wall_card(owner, entity);
    }
    if let Some(card) = state.card_mut(entity) {
        card.face_down = false;
    }
    debug!(entity = entity.raw(), %owner, "card destroyed");
}

/// Apply damage to a character in a zone.
///
/// `kind` is `None` for Joker damage, which ignores invulnerability.
/// Returns true if the target was destroyed (and moved to discard).
pub fn apply_damage(
    state: &mut GameState,
    registry: &CardRegistry,
    target: EntityId,
    amount: u32,
    kind: Option<AttackKind>,
) -> bool {
    let Some(def) = definition(registry, state, target) else {
        return false;
    };
    let damage_points = def.damage_points;

    let Some(card) = state.card_mut(target) else {
        return false;
    };
    if card.ranged_magic_immune
        && matches!(kind, Some(AttackKind::Ranged) | Some(AttackKind::Magic))
    {
        debug!(target = target.raw(), "damage ignored by invulnerability");
        return false;
    }

    let total = card.take_damage(amount);
    debug!(target = target.raw(), amount, total, "damage applied");

    if total >= damage_points {
        destroy(state, target);
        true
    } else {
        false
    }
}

/// Whether a block card with this condition is currently usable.
///
/// Conditions look at the blocker's characters in their battlement and
/// field zones.
#[must_use]
pub fn can_use_block(
    state: &GameState,
    registry: &CardRegistry,
    player: PlayerId,
    condition: BlockCondition,
) -> bool {
    let matches_condition = |def: &CardDefinition| match condition {
        BlockCondition::Always => true,
        BlockCondition::LiteMarksman => def.is_lite_marksman(),
        BlockCondition::HeavyWarrior => def.is_heavy_warrior(),
        BlockCondition::RedQueen => def.is_red_queen(),
    };

    if condition == BlockCondition::Always {
        return true;
    }

    [ZoneKind::Battlement, ZoneKind::Field]
        .into_iter()
        .flat_map(|kind| state.zones.cards_in(state.zone(player, kind)))
        .any(|&e| definition(registry, state, e).is_some_and(matches_condition))
}

/// Block cards in a player's hand that are usable right now.
#[must_use]
pub fn usable_blocks(
    state: &GameState,
    registry: &CardRegistry,
    player: PlayerId,
) -> Vec<EntityId> {
    state
        .hand(player)
        .iter()
        .copied()
        .filter(|&e| {
            definition(registry, state, e)
                .and_then(|d| d.block)
                .is_some_and(|c| can_use_block(state, registry, player, c))
        })
        .collect()
}

/// Legal attack targets for a player: opponent field characters, or
/// any wall card when the opponent's field is empty. The attacker
/// picks which wall card to hit.
///
/// `kind` excludes characters invulnerable to that damage.
#[must_use]
pub fn attack_targets(
    state: &GameState,
    registry: &CardRegistry,
    attacker_owner: PlayerId,
    kind: AttackKind,
) -> Vec<EntityId> {
    let opponent = attacker_owner.opponent();
    let field = characters_in(state, registry, opponent, ZoneKind::Field);

    // The wall is only exposed while the field is empty; an immune
    // character still shields it.
    if !field.is_empty() {
        return field
            .into_iter()
            .filter(|&e| {
                let immune = state.card(e).is_some_and(|c| c.ranged_magic_immune);
                !(immune && matches!(kind, AttackKind::Ranged | AttackKind::Magic))
            })
            .collect();
    }

    state
        .zones
        .cards_in(state.zone(opponent, ZoneKind::Wall))
        .to_vec()
}
