//! The JaDoK rules engine.
//!
//! `JadokGame` implements `RulesEngine` over the round state machine:
//! Draw, ASP commit and LIFO resolution, per-player Movement and
//! Melee (with trap responses), Ranged, Refortify, then round-end
//! cleanup and terminal checks.

use tracing::{debug, info};

use crate::cards::{AttackKind, CardSet, CastAbility, PlacementAbility};
use crate::core::{Action, ActionRecord, EntityId, GameState, Phase, PlayerId, TemplateId};
use crate::pile::PileEntry;
use crate::rules::{GameResult, RuleError, RulesEngine};
use crate::zones::{ZoneKind, ZonePosition};

use super::combat;
use super::joker;
use super::score;
use super::templates::Templates;

/// The JaDoK game rules.
#[derive(Clone, Debug)]
pub struct JadokGame {
    set: CardSet,
    templates: Templates,
    wall_capacity: usize,
}

impl JadokGame {
    pub(super) fn new(set: CardSet, wall_capacity: usize) -> Self {
        Self {
            set,
            templates: Templates::new(),
            wall_capacity,
        }
    }

    /// The action templates.
    #[must_use]
    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// The card set in play.
    #[must_use]
    pub fn card_set(&self) -> &CardSet {
        &self.set
    }

    /// Wall capacity (cards placed into a full wall go to discard).
    #[must_use]
    pub fn wall_capacity(&self) -> usize {
        self.wall_capacity
    }

    /// A player's current victory points.
    #[must_use]
    pub fn victory_points(&self, state: &GameState, player: PlayerId) -> u32 {
        score::victory_points(state, &self.set.registry, player)
    }

    /// Display name of a card entity ("???" while its identity is
    /// hidden information doesn't exist at this layer; this is for
    /// logs and the console client, which sees everything).
    #[must_use]
    pub fn card_name(&self, state: &GameState, entity: EntityId) -> String {
        combat::definition(&self.set.registry, state, entity)
            .map_or_else(|| format!("{entity}"), |d| d.name.clone())
    }

    /// Describe an action for logs and prompts.
    #[must_use]
    pub fn describe_action(&self, state: &GameState, action: &Action) -> String {
        let mut out = self.templates.name(action.template).to_string();
        for &pointer in &action.pointers {
            let name = match pointer.as_player(state.public.player_count()) {
                Some(player) => player.to_string(),
                None => self.card_name(state, pointer),
            };
            out.push_str(" / ");
            out.push_str(&name);
        }
        out
    }

    // === Phase bookkeeping ===

    /// The acting player of a per-actor phase: the token holder at
    /// cursor 0, their opponent at cursor 1.
    fn actor(&self, state: &GameState) -> PlayerId {
        if state.public.phase_cursor == 0 {
            state.public.token_holder
        } else {
            state.public.token_holder.opponent()
        }
    }

    fn enter_station(&self, state: &mut GameState, phase: Phase, cursor: u8) {
        state.public.phase = phase;
        state.public.phase_cursor = cursor;
        state.public.priority = self.actor(state);
        if phase == Phase::Refortify {
            let actor = state.public.priority;
            state.public.refortify_points = self.leftover_action_points(state, actor);
            debug!(%actor, pool = state.public.refortify_points, "refortify pool");
        }
        debug!(phase = %state.public.phase, cursor, priority = %state.public.priority, "phase change");
    }

    /// Sum of action points left on a player's characters in their
    /// battlement and field zones.
    fn leftover_action_points(&self, state: &GameState, player: PlayerId) -> u32 {
        [ZoneKind::Battlement, ZoneKind::Field]
            .into_iter()
            .flat_map(|kind| combat::characters_in(state, &self.set.registry, player, kind))
            .filter_map(|e| state.card(e).map(|c| c.action_points))
            .sum()
    }

    /// Move on after an actor ends their current station.
    fn next_station(&self, state: &mut GameState) {
        let cursor = state.public.phase_cursor;
        match state.public.phase {
            Phase::Movement => self.enter_station(state, Phase::Melee, cursor),
            Phase::Melee if cursor == 0 => self.enter_station(state, Phase::Movement, 1),
            Phase::Melee => self.enter_station(state, Phase::Ranged, 0),
            Phase::Ranged if cursor == 0 => self.enter_station(state, Phase::Ranged, 1),
            Phase::Ranged => self.enter_station(state, Phase::Refortify, 0),
            Phase::Refortify if cursor == 0 => self.enter_station(state, Phase::Refortify, 1),
            Phase::Refortify => self.end_round(state),
            _ => unreachable!("next_station called outside a per-actor phase"),
        }
    }

    fn advance_draw_step(&self, state: &mut GameState) {
        if state.public.phase_cursor == 0 {
            state.public.phase_cursor = 1;
            state.public.priority = state.public.priority.opponent();
        } else {
            state.public.phase = Phase::AspCommit;
            state.public.phase_cursor = 0;
            state.public.priority = state.public.token_holder;
            debug!(priority = %state.public.priority, "pile opens");
        }
    }

    fn next_resolution(&self, state: &mut GameState) {
        if let Some(top) = state.pile.top() {
            state.public.priority = top.player;
        } else {
            self.enter_station(state, Phase::Movement, 0);
        }
    }

    fn end_round(&self, state: &mut GameState) {
        // Sweep characters destroyed but not yet moved, then restore
        // action points. The attacked flag is deliberately left alone:
        // the Ace of Spades punishes attacks from any earlier round.
        let entities: Vec<EntityId> = state.all_cards().map(|c| c.entity_id).collect();
        for entity in entities {
            let Some(def) = combat::definition(&self.set.registry, state, entity) else {
                continue;
            };
            let initial = def.action_points;
            let damage_points = def.damage_points;
            let in_play = state.zones.zone_of(entity).is_some_and(|z| {
                matches!(z.kind, ZoneKind::Battlement | ZoneKind::Field)
            });

            let mut destroyed = false;
            if let Some(card) = state.card_mut(entity) {
                destroyed = in_play && card.damage_taken >= damage_points;
                card.action_points = initial;
            }
            if destroyed {
                combat::destroy(state, entity);
            }
        }

        state.pile.reset();
        state.pending_trap = None;
        state.public.refortify_points = 0;

        if score::end_conditions_met(state) {
            state.public.phase = Phase::Finished;
            info!(round = state.public.round, "game over");
        } else {
            state.public.advance_round();
            state.public.phase = Phase::Draw;
            state.public.priority = state.public.token_holder;
            info!(round = state.public.round, token = %state.public.token_holder, "new round");
        }
    }

    // === Per-phase template enumeration ===

    fn draw_templates(&self, state: &GameState, player: PlayerId) -> Vec<TemplateId> {
        let t = &self.templates;
        let mut out = Vec::new();
        if state.deck_size(player) > 0 {
            out.push(t.draw);
        }
        if player == state.public.token_holder && state.hand(player).is_empty() {
            out.push(t.pass_token);
        }
        out.push(t.pass);
        out
    }

    fn commit_templates(&self, state: &GameState, player: PlayerId) -> Vec<TemplateId> {
        let t = &self.templates;
        let mut out = Vec::new();
        if !state.hand(player).is_empty() {
            out.push(t.commit);
        }
        out.push(t.close_pile);
        out
    }

    fn resolve_templates(&self, state: &GameState, player: PlayerId) -> Vec<TemplateId> {
        let t = &self.templates;
        let Some(entry) = state.pile.top() else {
            return Vec::new();
        };
        let Some(def) = combat::definition(&self.set.registry, state, entry.card) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        if def.is_character {
            out.push(t.reveal_battlement);
            out.push(t.reveal_field);
        } else if def.cast == Some(CastAbility::UberDamage) {
            let registry = &self.set.registry;
            if !combat::characters_in(state, registry, player, ZoneKind::Battlement).is_empty() {
                out.push(t.joker_battlement);
            }
            if !combat::characters_in(state, registry, player, ZoneKind::Field).is_empty() {
                out.push(t.joker_field);
            }
        } else if def.cast.is_some() {
            out.push(t.cast);
        }
        out.push(t.pile_discard);
        out.push(t.pile_wall);
        out
    }

    fn melee_attackers(&self, state: &GameState, player: PlayerId) -> Vec<EntityId> {
        combat::characters_in(state, &self.set.registry, player, ZoneKind::Field)
            .into_iter()
            .filter(|&e| {
                let has_ap = state.card(e).is_some_and(|c| c.action_points > 0);
                let Some(attack) = combat::definition(&self.set.registry, state, e)
                    .and_then(|d| d.attack)
                else {
                    return false;
                };
                // Ranged and magic attackers fight in the Ranged phase,
                // where their damage source is paid for.
                attack.kind == AttackKind::Melee
                    && has_ap
                    && !combat::attack_targets(state, &self.set.registry, player, attack.kind)
                        .is_empty()
            })
            .collect()
    }

    fn ranged_attackers(&self, state: &GameState, player: PlayerId) -> Vec<EntityId> {
        let registry = &self.set.registry;
        [ZoneKind::Battlement, ZoneKind::Field]
            .into_iter()
            .flat_map(|kind| combat::characters_in(state, registry, player, kind))
            .filter(|&e| {
                let has_ap = state.card(e).is_some_and(|c| c.action_points > 0);
                let Some(attack) = combat::definition(registry, state, e).and_then(|d| d.attack)
                else {
                    return false;
                };
                let Some(needed) = attack.kind.needs_source() else {
                    return false;
                };
                has_ap
                    && !self.sources_in_hand(state, player, needed).is_empty()
                    && !combat::attack_targets(state, registry, player, attack.kind).is_empty()
            })
            .collect()
    }

    fn sources_in_hand(
        &self,
        state: &GameState,
        player: PlayerId,
        needed: crate::cards::SourceKind,
    ) -> Vec<EntityId> {
        state
            .hand(player)
            .iter()
            .copied()
            .filter(|&e| {
                combat::definition(&self.set.registry, state, e)
                    .is_some_and(|d| d.source_kind == Some(needed))
            })
            .collect()
    }

    fn tens_in_hand(&self, state: &GameState, player: PlayerId) -> Vec<EntityId> {
        state
            .hand(player)
            .iter()
            .copied()
            .filter(|&e| {
                combat::definition(&self.set.registry, state, e)
                    .is_some_and(|d| d.rank == crate::cards::Rank::Ten)
            })
            .collect()
    }

    // === Mutations ===

    fn place_in_wall(&self, state: &mut GameState, entry: PileEntry) {
        let wall = state.zone(entry.player, ZoneKind::Wall);
        if state.zones.zone_size(wall) >= self.wall_capacity {
            // Full wall diverts the card to discard.
            let discard = state.zone(entry.player, ZoneKind::Discard);
            state.attach_from_pile(entry.card, discard, ZonePosition::Top);
            if let Some(card) = state.card_mut(entry.card) {
                card.face_down = false;
            }
            debug!(card = entry.card.raw(), "wall full; card discarded");
        } else {
            state.attach_from_pile(entry.card, wall, ZonePosition::Top);
        }
    }

    fn discard_from_pile(&self, state: &mut GameState, entry: PileEntry) {
        let discard = state.zone(entry.player, ZoneKind::Discard);
        state.attach_from_pile(entry.card, discard, ZonePosition::Top);
        if let Some(card) = state.card_mut(entry.card) {
            card.face_down = false;
        }
    }

    fn reveal_character(&self, state: &mut GameState, entry: PileEntry, kind: ZoneKind) {
        let zone = state.zone(entry.player, kind);
        state.attach_from_pile(entry.card, zone, ZonePosition::Top);
        if let Some(card) = state.card_mut(entry.card) {
            card.face_down = false;
        }
        info!(card = %self.card_name(state, entry.card), zone = %zone, "character placed");

        let placement =
            combat::definition(&self.set.registry, state, entry.card).and_then(|d| d.placement);
        if placement == Some(PlacementAbility::DestroyAttackers) {
            let opponent = entry.player.opponent();
            let attackers: Vec<EntityId> =
                combat::characters_in(state, &self.set.registry, opponent, ZoneKind::Field)
                    .into_iter()
                    .filter(|&e| state.card(e).is_some_and(|c| c.has_attacked))
                    .collect();
            for attacker in attackers {
                info!(card = %self.card_name(state, attacker), "destroyed by placement ability");
                combat::destroy(state, attacker);
            }
        }
    }

    fn resolve_cast(&self, state: &mut GameState, entry: PileEntry, pointers: &[EntityId]) {
        let cast = combat::definition(&self.set.registry, state, entry.card).and_then(|d| d.cast);
        self.discard_from_pile(state, entry);

        match cast {
            Some(CastAbility::DrawTwo) => {
                // Validated pointer: a player entity.
                if let Some(player) = pointers.first().and_then(|p| p.as_player(2)) {
                    for _ in 0..2 {
                        state.draw_card(player);
                    }
                    info!(%player, "draws two");
                }
            }
            Some(CastAbility::Strike { damage, kind }) => {
                if let Some(&target) = pointers.first() {
                    info!(target = %self.card_name(state, target), damage, "strike");
                    combat::apply_damage(state, &self.set.registry, target, damage, Some(kind));
                }
                // No pointer: no legal target, the spell fizzles.
            }
            Some(CastAbility::UberDamage) | None => {}
        }
    }

    fn resolve_joker(&self, state: &mut GameState, entry: PileEntry, drain: ZoneKind) {
        let drained =
            joker::drain_action_points(state, &self.set.registry, entry.player, drain);
        self.discard_from_pile(state, entry);
        joker::deal_damage(
            state,
            &self.set.registry,
            entry.player,
            joker::BASE_DAMAGE + drained,
        );
    }

    fn resolve_melee(&self, state: &mut GameState, attacker: EntityId, target: EntityId) {
        let attack = combat::definition(&self.set.registry, state, attacker)
            .and_then(|d| d.attack)
            .unwrap_or(crate::cards::AttackProfile {
                kind: AttackKind::Melee,
                value: 0,
                bonus: 0,
            });

        if let Some(card) = state.card_mut(attacker) {
            card.spend_action_point();
            card.has_attacked = true;
        }

        let target_zone = state.zones.zone_of(target);
        let hit_wall = target_zone.is_some_and(|z| z.kind == ZoneKind::Wall);

        if hit_wall {
            let wall_owner = target_zone.map(|z| z.owner).unwrap_or_else(|| {
                state.public.priority.opponent()
            });
            state.public.reveal_wall_card(wall_owner, target);
            if let Some(card) = state.card_mut(target) {
                card.face_down = false;
            }

            let is_trap = combat::definition(&self.set.registry, state, target)
                .is_some_and(|d| d.is_trap);
            if is_trap {
                info!(trap = %self.card_name(state, target), "melee attack springs a trap");
                state.pending_trap = Some(crate::core::PendingTrap {
                    attacker,
                    trap: target,
                });
                state.public.phase = Phase::TrapResponse;
            } else {
                info!(card = %self.card_name(state, target), "wall card knocked loose");
                state.public.forget_wall_card(wall_owner, target);
                state.move_card(
                    target,
                    state.zone(wall_owner, ZoneKind::Discard),
                    ZonePosition::Top,
                );
            }
        } else {
            info!(
                attacker = %self.card_name(state, attacker),
                target = %self.card_name(state, target),
                damage = attack.damage(),
                "melee attack"
            );
            combat::apply_damage(
                state,
                &self.set.registry,
                target,
                attack.damage(),
                Some(attack.kind),
            );
        }
    }

    fn resolve_ranged(
        &self,
        state: &mut GameState,
        attacker: EntityId,
        source: EntityId,
        target: EntityId,
    ) {
        let attack = combat::definition(&self.set.registry, state, attacker)
            .and_then(|d| d.attack)
            .unwrap_or(crate::cards::AttackProfile {
                kind: AttackKind::Ranged,
                value: 0,
                bonus: 0,
            });

        let owner = state
            .card(attacker)
            .map(|c| c.owner)
            .unwrap_or(state.public.priority);
        if let Some(card) = state.card_mut(attacker) {
            card.spend_action_point();
            card.has_attacked = true;
        }

        // The source is spent.
        state.move_card(source, state.zone(owner, ZoneKind::Discard), ZonePosition::Top);

        let target_zone = state.zones.zone_of(target);
        if target_zone.is_some_and(|z| z.kind == ZoneKind::Wall) {
            // Wall cards fall to ranged fire; traps never spring at
            // range.
            let wall_owner = target_zone.map(|z| z.owner).unwrap_or(owner.opponent());
            info!(card = %self.card_name(state, target), "wall card shot loose");
            state.public.forget_wall_card(wall_owner, target);
            if let Some(card) = state.card_mut(target) {
                card.face_down = false;
            }
            state.move_card(
                target,
                state.zone(wall_owner, ZoneKind::Discard),
                ZonePosition::Top,
            );
        } else {
            info!(
                attacker = %self.card_name(state, attacker),
                target = %self.card_name(state, target),
                damage = attack.damage(),
                "ranged attack"
            );
            combat::apply_damage(
                state,
                &self.set.registry,
                target,
                attack.damage(),
                Some(attack.kind),
            );
        }
    }

    fn dispatch(&self, state: &mut GameState, player: PlayerId, action: &Action) {
        let t = &self.templates;
        let template = action.template;
        let pointers = &action.pointers;

        if template == t.draw {
            state.draw_card(player);
            self.advance_draw_step(state);
        } else if template == t.pass_token {
            state.public.token_holder = player.opponent();
            info!(token = %state.public.token_holder, "token passed; five cards drawn");
            for _ in 0..5 {
                state.draw_card(player);
            }
            self.advance_draw_step(state);
        } else if template == t.commit {
            let card = pointers[0];
            state.detach_for_pile(card);
            if let Some(instance) = state.card_mut(card) {
                instance.face_down = true;
            }
            state.pile.commit(player, card);
            debug!(%player, pile = state.pile.len(), "card committed");
            state.public.priority = player.opponent();
        } else if template == t.close_pile {
            state.pile.close();
            state.public.token_holder = player;
            info!(%player, pile = state.pile.len(), "pile closed; token taken");
            if state.pile.is_empty() {
                self.enter_station(state, Phase::Movement, 0);
            } else {
                state.public.phase = Phase::AspResolve;
                self.next_resolution(state);
            }
        } else if template == t.reveal_battlement || template == t.reveal_field {
            let entry = state.pile.pop().expect("validated top entry");
            let kind = if template == t.reveal_battlement {
                ZoneKind::Battlement
            } else {
                ZoneKind::Field
            };
            self.reveal_character(state, entry, kind);
            self.next_resolution(state);
        } else if template == t.cast {
            let entry = state.pile.pop().expect("validated top entry");
            self.resolve_cast(state, entry, pointers);
            self.next_resolution(state);
        } else if template == t.joker_battlement || template == t.joker_field {
            let entry = state.pile.pop().expect("validated top entry");
            let drain = if template == t.joker_battlement {
                ZoneKind::Battlement
            } else {
                ZoneKind::Field
            };
            self.resolve_joker(state, entry, drain);
            self.next_resolution(state);
        } else if template == t.pile_discard {
            let entry = state.pile.pop().expect("validated top entry");
            self.discard_from_pile(state, entry);
            self.next_resolution(state);
        } else if template == t.pile_wall {
            let entry = state.pile.pop().expect("validated top entry");
            self.place_in_wall(state, entry);
            self.next_resolution(state);
        } else if template == t.advance {
            let card = pointers[0];
            state.move_card(card, state.zone(player, ZoneKind::Field), ZonePosition::Top);
            info!(card = %self.card_name(state, card), "advances to the field");
        } else if template == t.melee {
            self.resolve_melee(state, pointers[0], pointers[1]);
        } else if template == t.block_trap {
            let block = pointers[0];
            info!(block = %self.card_name(state, block), "trap blocked");
            state.move_card(block, state.zone(player, ZoneKind::Discard), ZonePosition::Top);
            if let Some(pending) = state.pending_trap.take() {
                // The trap turns back down in the wall; both players
                // remember it.
                if let Some(card) = state.card_mut(pending.trap) {
                    card.face_down = true;
                }
            }
            state.public.phase = Phase::Melee;
        } else if template == t.take_trap {
            let pending = state.pending_trap.take().expect("validated pending trap");
            info!(attacker = %self.card_name(state, pending.attacker), "attacker lost to trap");
            combat::destroy(state, pending.attacker);
            // The sprung trap is spent.
            let trap_owner = state.card(pending.trap).map(|c| c.owner).unwrap_or(player.opponent());
            state.public.forget_wall_card(trap_owner, pending.trap);
            state.move_card(
                pending.trap,
                state.zone(trap_owner, ZoneKind::Discard),
                ZonePosition::Top,
            );
            state.public.phase = Phase::Melee;
        } else if template == t.ranged {
            self.resolve_ranged(state, pointers[0], pointers[1], pointers[2]);
        } else if template == t.refortify_place {
            let card = pointers[0];
            let wall = state.zone(player, ZoneKind::Wall);
            if state.zones.zone_size(wall) >= self.wall_capacity {
                state.move_card(card, state.zone(player, ZoneKind::Discard), ZonePosition::Top);
            } else {
                state.move_card(card, wall, ZonePosition::Top);
                if let Some(instance) = state.card_mut(card) {
                    instance.face_down = true;
                }
            }
            state.public.refortify_points -= 1;
        } else if template == t.refortify_discard {
            let card = pointers[0];
            state.move_card(card, state.zone(player, ZoneKind::Discard), ZonePosition::Top);
            state.public.refortify_points -= 1;
        } else if template == t.refortify_ten {
            let ten = pointers[0];
            state.move_card(ten, state.zone(player, ZoneKind::Discard), ZonePosition::Top);
            state.draw_card(player);
            state.public.refortify_points -= 1;
        } else if template == t.pass {
            match state.public.phase {
                Phase::Draw => self.advance_draw_step(state),
                _ => self.next_station(state),
            }
        } else {
            unreachable!("validated template");
        }
    }
}

impl RulesEngine for JadokGame {
    fn legal_templates(&self, state: &GameState, player: PlayerId) -> Vec<TemplateId> {
        if !state.public.has_priority(player) {
            return Vec::new();
        }
        let t = &self.templates;

        match state.public.phase {
            Phase::Draw => self.draw_templates(state, player),
            Phase::AspCommit => self.commit_templates(state, player),
            Phase::AspResolve => self.resolve_templates(state, player),
            Phase::Movement => {
                let mut out = Vec::new();
                if !combat::characters_in(state, &self.set.registry, player, ZoneKind::Battlement)
                    .is_empty()
                {
                    out.push(t.advance);
                }
                out.push(t.pass);
                out
            }
            Phase::Melee => {
                let mut out = Vec::new();
                if !self.melee_attackers(state, player).is_empty() {
                    out.push(t.melee);
                }
                out.push(t.pass);
                out
            }
            Phase::TrapResponse => {
                let mut out = Vec::new();
                if !combat::usable_blocks(state, &self.set.registry, player).is_empty() {
                    out.push(t.block_trap);
                }
                out.push(t.take_trap);
                out
            }
            Phase::Ranged => {
                let mut out = Vec::new();
                if !self.ranged_attackers(state, player).is_empty() {
                    out.push(t.ranged);
                }
                out.push(t.pass);
                out
            }
            Phase::Refortify => {
                let mut out = Vec::new();
                if state.public.refortify_points > 0 && !state.hand(player).is_empty() {
                    out.push(t.refortify_place);
                    out.push(t.refortify_discard);
                    if !self.tens_in_hand(state, player).is_empty() && state.deck_size(player) > 0
                    {
                        out.push(t.refortify_ten);
                    }
                }
                out.push(t.pass);
                out
            }
            Phase::Finished => Vec::new(),
        }
    }

    fn legal_pointers(
        &self,
        state: &GameState,
        player: PlayerId,
        template: TemplateId,
        prior_pointers: &[EntityId],
    ) -> Vec<EntityId> {
        let t = &self.templates;
        let registry = &self.set.registry;

        if template == t.commit && prior_pointers.is_empty() {
            return state.hand(player).to_vec();
        }

        if template == t.cast && prior_pointers.is_empty() {
            let cast = state
                .pile
                .top()
                .and_then(|e| combat::definition(registry, state, e.card))
                .and_then(|d| d.cast);
            return match cast {
                Some(CastAbility::DrawTwo) => state
                    .public
                    .player_ids()
                    .map(EntityId::player)
                    .collect(),
                Some(CastAbility::Strike { kind, .. }) => {
                    combat::characters_in(state, registry, player.opponent(), ZoneKind::Field)
                        .into_iter()
                        .filter(|&e| {
                            let immune =
                                state.card(e).is_some_and(|c| c.ranged_magic_immune);
                            !(immune
                                && matches!(kind, AttackKind::Ranged | AttackKind::Magic))
                        })
                        .collect()
                }
                _ => Vec::new(),
            };
        }

        if template == t.advance && prior_pointers.is_empty() {
            return combat::characters_in(state, registry, player, ZoneKind::Battlement);
        }

        if template == t.melee {
            return match prior_pointers {
                [] => self.melee_attackers(state, player),
                [attacker] => {
                    let Some(attack) =
                        combat::definition(registry, state, *attacker).and_then(|d| d.attack)
                    else {
                        return Vec::new();
                    };
                    combat::attack_targets(state, registry, player, attack.kind)
                }
                _ => Vec::new(),
            };
        }

        if template == t.block_trap && prior_pointers.is_empty() {
            return combat::usable_blocks(state, registry, player);
        }

        if template == t.ranged {
            return match prior_pointers {
                [] => self.ranged_attackers(state, player),
                [attacker] => {
                    let Some(needed) = combat::definition(registry, state, *attacker)
                        .and_then(|d| d.attack)
                        .and_then(|a| a.kind.needs_source())
                    else {
                        return Vec::new();
                    };
                    self.sources_in_hand(state, player, needed)
                }
                [attacker, _source] => {
                    let Some(attack) =
                        combat::definition(registry, state, *attacker).and_then(|d| d.attack)
                    else {
                        return Vec::new();
                    };
                    combat::attack_targets(state, registry, player, attack.kind)
                }
                _ => Vec::new(),
            };
        }

        if (template == t.refortify_place || template == t.refortify_discard)
            && prior_pointers.is_empty()
        {
            return state.hand(player).to_vec();
        }

        if template == t.refortify_ten && prior_pointers.is_empty() {
            return self.tens_in_hand(state, player);
        }

        Vec::new()
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<(), RuleError> {
        if state.public.phase == Phase::Finished {
            return Err(RuleError::GameOver);
        }
        if !state.public.has_priority(player) {
            return Err(RuleError::NotYourTurn { player });
        }
        if !self.legal_templates(state, player).contains(&action.template) {
            return Err(RuleError::WrongPhase {
                template: action.template,
            });
        }

        // Validate pointers one step at a time, exactly as the
        // enumeration would have built them.
        for (i, &pointer) in action.pointers.iter().enumerate() {
            let legal = self.legal_pointers(state, player, action.template, &action.pointers[..i]);
            if legal.is_empty() {
                return Err(RuleError::PointerCount {
                    expected: i,
                    got: action.pointers.len(),
                });
            }
            if !legal.contains(&pointer) {
                return Err(RuleError::BadPointer {
                    template: action.template,
                    pointer,
                });
            }
        }
        if !self
            .legal_pointers(state, player, action.template, &action.pointers)
            .is_empty()
        {
            return Err(RuleError::PointerCount {
                expected: action.pointers.len() + 1,
                got: action.pointers.len(),
            });
        }

        let round = state.public.round;
        let sequence = state.public.next_sequence();
        state
            .public
            .record_action(ActionRecord::new(player, action.clone(), round, sequence));
        debug!(%player, action = %self.describe_action(state, action), "action");

        self.dispatch(state, player, action);
        Ok(())
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.public.phase == Phase::Finished {
            Some(score::game_result(state, &self.set.registry))
        } else {
            None
        }
    }
}
