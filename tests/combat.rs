//! Melee, traps, ranged fire and placement abilities through the full
//! engine interface.

use jadok::cards::catalog::RED_JOKER;
use jadok::cards::{CardId, Rank, Suit};
use jadok::core::{Action, EntityId, GameState, Phase, PlayerId};
use jadok::game::{GameBuilder, JadokGame};
use jadok::rules::{RuleError, RulesEngine};
use jadok::zones::ZoneKind;

fn spawn(
    game: &JadokGame,
    state: &mut GameState,
    id: CardId,
    owner: PlayerId,
    kind: ZoneKind,
) -> EntityId {
    let def = game.card_set().registry.get(id).unwrap().clone();
    state.spawn(&def, owner, state.zone(owner, kind))
}

/// A game with nothing dealt, so tests stage the table themselves.
fn scripted() -> (JadokGame, GameState) {
    GameBuilder::new().opening_deal(0, 0).build(1)
}

fn enter(state: &mut GameState, phase: Phase, actor: PlayerId) {
    state.public.phase = phase;
    state.public.phase_cursor = actor.index() as u8;
    state.public.priority = actor;
}

fn discard_of(state: &GameState, player: PlayerId) -> jadok::zones::Zone {
    state.zone(player, ZoneKind::Discard)
}

#[test]
fn melee_kill_sends_target_to_discard() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    let king = spawn(&game, &mut state, CardId::suited(Rank::King, Suit::Clubs), p0, ZoneKind::Field);
    let queen = spawn(&game, &mut state, CardId::suited(Rank::Queen, Suit::Clubs), p1, ZoneKind::Field);
    enter(&mut state, Phase::Melee, p0);

    game.apply_action(&mut state, p0, &Action::with_pointers(t.melee, &[king, queen]))
        .unwrap();

    // King hits for 5; the Queen has 3 damage points.
    assert_eq!(state.zones.zone_of(queen), Some(discard_of(&state, p1)));
    let attacker = state.card(king).unwrap();
    assert_eq!(attacker.action_points, 0);
    assert!(attacker.has_attacked);

    // Out of action points: only passing remains.
    assert_eq!(game.legal_templates(&state, p0), vec![t.pass]);
}

#[test]
fn melee_survivor_keeps_damage() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    let ace = spawn(&game, &mut state, CardId::suited(Rank::Ace, Suit::Clubs), p0, ZoneKind::Field);
    let king = spawn(&game, &mut state, CardId::suited(Rank::King, Suit::Clubs), p1, ZoneKind::Field);
    enter(&mut state, Phase::Melee, p0);

    game.apply_action(&mut state, p0, &Action::with_pointers(t.melee, &[ace, king]))
        .unwrap();

    // Ace hits for 4; the King has 5 damage points.
    assert_eq!(state.card(king).unwrap().damage_taken, 4);
    assert_eq!(
        state.zones.zone_of(king),
        Some(state.zone(p1, ZoneKind::Field))
    );
}

#[test]
fn mages_and_marksmen_sit_out_the_melee_phase() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    spawn(&game, &mut state, CardId::suited(Rank::Queen, Suit::Clubs), p0, ZoneKind::Field);
    spawn(&game, &mut state, CardId::suited(Rank::Jack, Suit::Clubs), p0, ZoneKind::Field);
    spawn(&game, &mut state, CardId::suited(Rank::King, Suit::Clubs), p1, ZoneKind::Field);
    enter(&mut state, Phase::Melee, p0);

    // Queens and Jacks fight at range, paying a source; with no
    // warrior fielded there is no melee attack at all.
    assert_eq!(game.legal_templates(&state, p0), vec![t.pass]);
    assert!(game.legal_pointers(&state, p0, t.melee, &[]).is_empty());

    // A warrior joins: it is the only attacker on offer.
    let king = spawn(&game, &mut state, CardId::suited(Rank::King, Suit::Hearts), p0, ZoneKind::Field);
    assert!(game.legal_templates(&state, p0).contains(&t.melee));
    assert_eq!(game.legal_pointers(&state, p0, t.melee, &[]), vec![king]);
}

#[test]
fn melee_on_wall_reveals_and_discards_non_traps() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    let king = spawn(&game, &mut state, CardId::suited(Rank::King, Suit::Clubs), p0, ZoneKind::Field);
    let walled = spawn(&game, &mut state, CardId::suited(Rank::Four, Suit::Clubs), p1, ZoneKind::Wall);
    enter(&mut state, Phase::Melee, p0);

    game.apply_action(&mut state, p0, &Action::with_pointers(t.melee, &[king, walled]))
        .unwrap();

    assert_eq!(state.zones.zone_of(walled), Some(discard_of(&state, p1)));
    assert!(!state.card(walled).unwrap().face_down);
    assert!(state.pending_trap.is_none());
    assert_eq!(state.public.phase, Phase::Melee);
}

#[test]
fn sprung_trap_can_be_blocked() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    let king = spawn(&game, &mut state, CardId::suited(Rank::King, Suit::Clubs), p0, ZoneKind::Field);
    let trap = spawn(&game, &mut state, CardId::suited(Rank::Seven, Suit::Clubs), p1, ZoneKind::Wall);
    let block = spawn(&game, &mut state, CardId::suited(Rank::Four, Suit::Clubs), p0, ZoneKind::Hand);
    enter(&mut state, Phase::Melee, p0);

    game.apply_action(&mut state, p0, &Action::with_pointers(t.melee, &[king, trap]))
        .unwrap();

    assert_eq!(state.public.phase, Phase::TrapResponse);
    assert_eq!(state.public.priority, p0);
    let templates = game.legal_templates(&state, p0);
    assert!(templates.contains(&t.block_trap));
    assert!(templates.contains(&t.take_trap));

    game.apply_action(&mut state, p0, &Action::with_pointers(t.block_trap, &[block]))
        .unwrap();

    // The block is spent; the trap turns back face-down in the wall
    // but both players now know it is there.
    assert_eq!(state.zones.zone_of(block), Some(discard_of(&state, p0)));
    assert_eq!(
        state.zones.zone_of(trap),
        Some(state.zone(p1, ZoneKind::Wall))
    );
    assert!(state.card(trap).unwrap().face_down);
    assert!(state.public.known_wall[p1].contains(&trap));
    assert_eq!(
        state.zones.zone_of(king),
        Some(state.zone(p0, ZoneKind::Field))
    );
    assert!(state.pending_trap.is_none());
    assert_eq!(state.public.phase, Phase::Melee);
}

#[test]
fn unblocked_trap_takes_the_attacker() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    let king = spawn(&game, &mut state, CardId::suited(Rank::King, Suit::Clubs), p0, ZoneKind::Field);
    let trap = spawn(&game, &mut state, CardId::suited(Rank::Seven, Suit::Clubs), p1, ZoneKind::Wall);
    enter(&mut state, Phase::Melee, p0);

    game.apply_action(&mut state, p0, &Action::with_pointers(t.melee, &[king, trap]))
        .unwrap();

    // No block in hand: taking the trap is the only response.
    assert_eq!(game.legal_templates(&state, p0), vec![t.take_trap]);

    game.apply_action(&mut state, p0, &Action::new(t.take_trap))
        .unwrap();

    assert_eq!(state.zones.zone_of(king), Some(discard_of(&state, p0)));
    assert_eq!(state.zones.zone_of(trap), Some(discard_of(&state, p1)));
    assert!(!state.public.known_wall[p1].contains(&trap));
    assert!(state.pending_trap.is_none());
    assert_eq!(state.public.phase, Phase::Melee);
}

#[test]
fn melee_may_strike_any_wall_card() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    let king = spawn(&game, &mut state, CardId::suited(Rank::King, Suit::Clubs), p0, ZoneKind::Field);
    let lower = spawn(&game, &mut state, CardId::suited(Rank::Four, Suit::Clubs), p1, ZoneKind::Wall);
    let upper = spawn(&game, &mut state, CardId::suited(Rank::Five, Suit::Clubs), p1, ZoneKind::Wall);
    enter(&mut state, Phase::Melee, p0);

    // The attacker chooses which wall card to hit, not just the top.
    assert_eq!(
        game.legal_pointers(&state, p0, t.melee, &[king]),
        vec![lower, upper]
    );

    game.apply_action(&mut state, p0, &Action::with_pointers(t.melee, &[king, lower]))
        .unwrap();

    assert_eq!(state.zones.zone_of(lower), Some(discard_of(&state, p1)));
    assert_eq!(
        state.zones.zone_of(upper),
        Some(state.zone(p1, ZoneKind::Wall))
    );
}

#[test]
fn ranged_attack_spends_the_source() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    let jack = spawn(&game, &mut state, CardId::suited(Rank::Jack, Suit::Hearts), p0, ZoneKind::Battlement);
    let ammo = spawn(&game, &mut state, CardId::suited(Rank::Two, Suit::Clubs), p0, ZoneKind::Hand);
    let queen = spawn(&game, &mut state, CardId::suited(Rank::Queen, Suit::Clubs), p1, ZoneKind::Field);
    enter(&mut state, Phase::Ranged, p0);

    game.apply_action(
        &mut state,
        p0,
        &Action::with_pointers(t.ranged, &[jack, ammo, queen]),
    )
    .unwrap();

    assert_eq!(state.card(queen).unwrap().damage_taken, 2);
    assert_eq!(state.zones.zone_of(ammo), Some(discard_of(&state, p0)));
    assert_eq!(state.card(jack).unwrap().action_points, 0);
}

#[test]
fn ranged_needs_a_matching_source() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    // A mage with only ammo in hand: magic attacks need magic sources.
    spawn(&game, &mut state, CardId::suited(Rank::Queen, Suit::Clubs), p0, ZoneKind::Battlement);
    spawn(&game, &mut state, CardId::suited(Rank::Two, Suit::Clubs), p0, ZoneKind::Hand);
    spawn(&game, &mut state, CardId::suited(Rank::King, Suit::Clubs), p1, ZoneKind::Field);
    enter(&mut state, Phase::Ranged, p0);

    assert_eq!(game.legal_templates(&state, p0), vec![t.pass]);

    // A magic source unlocks the attack.
    spawn(&game, &mut state, CardId::suited(Rank::Nine, Suit::Clubs), p0, ZoneKind::Hand);
    assert!(game.legal_templates(&state, p0).contains(&t.ranged));
}

#[test]
fn immune_character_cannot_be_shot_but_shields_the_wall() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    spawn(&game, &mut state, CardId::suited(Rank::Jack, Suit::Hearts), p0, ZoneKind::Battlement);
    spawn(&game, &mut state, CardId::suited(Rank::Two, Suit::Clubs), p0, ZoneKind::Hand);
    spawn(&game, &mut state, CardId::suited(Rank::Ace, Suit::Hearts), p1, ZoneKind::Field);
    spawn(&game, &mut state, CardId::suited(Rank::Six, Suit::Clubs), p1, ZoneKind::Wall);
    enter(&mut state, Phase::Ranged, p0);

    // The immune Ace blanks every ranged target without exposing the
    // wall behind it.
    assert_eq!(game.legal_templates(&state, p0), vec![t.pass]);
}

#[test]
fn ace_of_spades_punishes_attacks_from_an_earlier_round() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    let raider = spawn(&game, &mut state, CardId::suited(Rank::King, Suit::Clubs), p1, ZoneKind::Field);
    let idle = spawn(&game, &mut state, CardId::suited(Rank::Queen, Suit::Clubs), p1, ZoneKind::Field);
    let walled = spawn(&game, &mut state, CardId::suited(Rank::Six, Suit::Clubs), p0, ZoneKind::Wall);
    let ace = spawn(&game, &mut state, CardId::suited(Rank::Ace, Suit::Spades), p0, ZoneKind::Hand);

    let pass = |state: &mut GameState, n: usize| {
        for _ in 0..n {
            let player = state.public.priority;
            game.apply_action(state, player, &Action::new(t.pass))
                .unwrap();
        }
    };

    // Round one: skip the draws, close an empty pile, walk to the
    // opponent's melee step.
    pass(&mut state, 2);
    game.apply_action(&mut state, p0, &Action::new(t.close_pile))
        .unwrap();
    pass(&mut state, 3);
    assert_eq!(state.public.phase, Phase::Melee);
    assert_eq!(state.public.priority, p1);

    game.apply_action(&mut state, p1, &Action::with_pointers(t.melee, &[raider, walled]))
        .unwrap();
    assert!(state.card(raider).unwrap().has_attacked);

    // Pass out the rest of the round and the next round's draws.
    pass(&mut state, 7);
    assert_eq!(state.public.round, 2);
    assert_eq!(state.public.phase, Phase::AspCommit);

    // Round two: the Ace arrives and remembers last round's raid.
    game.apply_action(&mut state, p0, &Action::with_pointers(t.commit, &[ace]))
        .unwrap();
    game.apply_action(&mut state, p1, &Action::new(t.close_pile))
        .unwrap();
    game.apply_action(&mut state, p0, &Action::new(t.reveal_field))
        .unwrap();

    assert_eq!(state.zones.zone_of(raider), Some(discard_of(&state, p1)));
    assert_eq!(
        state.zones.zone_of(idle),
        Some(state.zone(p1, ZoneKind::Field))
    );
    assert_eq!(
        state.zones.zone_of(ace),
        Some(state.zone(p0, ZoneKind::Field))
    );
}

#[test]
fn joker_drains_a_zone_and_walks_the_defenses() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    let jack = spawn(&game, &mut state, CardId::suited(Rank::Jack, Suit::Clubs), p0, ZoneKind::Battlement);
    let queen = spawn(&game, &mut state, CardId::suited(Rank::Queen, Suit::Clubs), p1, ZoneKind::Field);
    let walled = spawn(&game, &mut state, CardId::suited(Rank::Six, Suit::Clubs), p1, ZoneKind::Wall);
    let joker = spawn(&game, &mut state, RED_JOKER, p0, ZoneKind::Hand);

    for _ in 0..2 {
        let player = state.public.priority;
        game.apply_action(&mut state, player, &Action::new(t.pass))
            .unwrap();
    }
    game.apply_action(&mut state, p0, &Action::with_pointers(t.commit, &[joker]))
        .unwrap();
    game.apply_action(&mut state, p1, &Action::new(t.close_pile))
        .unwrap();

    // An empty field leaves only the battlement to drain.
    let templates = game.legal_templates(&state, p0);
    assert!(templates.contains(&t.joker_battlement));
    assert!(!templates.contains(&t.joker_field));

    game.apply_action(&mut state, p0, &Action::new(t.joker_battlement))
        .unwrap();

    // 2 base + 2 drained: three points kill the Queen, the fourth
    // knocks the wall card loose.
    assert_eq!(state.card(jack).unwrap().action_points, 0);
    assert_eq!(state.zones.zone_of(queen), Some(discard_of(&state, p1)));
    assert_eq!(state.zones.zone_of(walled), Some(discard_of(&state, p1)));
    assert_eq!(state.zones.zone_of(joker), Some(discard_of(&state, p0)));
}

#[test]
fn rejected_actions_leave_the_state_untouched() {
    let (game, mut state) = scripted();
    let t = *game.templates();
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);

    let king = spawn(&game, &mut state, CardId::suited(Rank::King, Suit::Clubs), p0, ZoneKind::Field);
    let own_queen = spawn(&game, &mut state, CardId::suited(Rank::Queen, Suit::Clubs), p0, ZoneKind::Field);
    spawn(&game, &mut state, CardId::suited(Rank::Queen, Suit::Spades), p1, ZoneKind::Field);
    enter(&mut state, Phase::Melee, p0);

    let before = state.snapshot().unwrap();

    let err = game
        .apply_action(&mut state, p1, &Action::new(t.pass))
        .unwrap_err();
    assert!(matches!(err, RuleError::NotYourTurn { .. }));

    let err = game
        .apply_action(&mut state, p0, &Action::new(t.draw))
        .unwrap_err();
    assert!(matches!(err, RuleError::WrongPhase { .. }));

    let err = game
        .apply_action(&mut state, p0, &Action::with_pointers(t.melee, &[king]))
        .unwrap_err();
    assert!(matches!(err, RuleError::PointerCount { .. }));

    // Friendly fire is not a thing.
    let err = game
        .apply_action(
            &mut state,
            p0,
            &Action::with_pointers(t.melee, &[king, own_queen]),
        )
        .unwrap_err();
    assert!(matches!(err, RuleError::BadPointer { .. }));

    assert_eq!(state.snapshot().unwrap(), before);
}
