//! The built-in JaDoK card set.
//!
//! Fifty-two suited definitions plus the two Jokers. A deck is two
//! copies of every suited card and one of each Joker: 106 cards.
//!
//! Per-rank roles:
//!
//! - Ace: heavy warrior. Hearts is immune to ranged/magic damage,
//!   Spades destroys opponent field characters that attacked this
//!   round when placed. Doubles as a heavy-warrior block.
//! - King: heavy warrior, the hardest melee hitter.
//! - Queen: mage, magic ranged attack. Doubles as a red-queen block.
//! - Jack: lite marksman, ammo ranged attack. Clubs and Diamonds (the
//!   Two-Eyed Jacks) start with 2 action points.
//! - Ten: Draw Two spell; also tradeable for a draw during Refortify.
//! - Nine, Eight: magic sources; red-queen blocks.
//! - Seven: trap.
//! - Six, Five, Four: blocks (heavy warrior / lite marksman / always).
//! - Three, Two: ammo sources; 2-damage ranged strike when cast.
//! - Joker: Uber Damage.

use super::definition::{
    Armor, AttackKind, AttackProfile, BlockCondition, CardDefinition, CardId, CastAbility,
    CharacterClass, PlacementAbility, Rank, SourceKind, Suit,
};
use super::registry::CardRegistry;

/// The ID of the Red Joker.
pub const RED_JOKER: CardId = CardId(52);
/// The ID of the Black Joker.
pub const BLACK_JOKER: CardId = CardId(53);

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 106;

fn suited(rank: Rank, suit: Suit) -> CardDefinition {
    let name = format!("{rank} of {suit}");
    let mut def = CardDefinition::new(CardId::suited(rank, suit), name, rank, Some(suit));

    match rank {
        Rank::Ace => {
            def.is_character = true;
            def.class = Some(CharacterClass::Warrior);
            def.armor = Some(Armor::Heavy);
            def.attack = Some(AttackProfile {
                kind: AttackKind::Melee,
                value: 3,
                bonus: 1,
            });
            def.action_points = 1;
            def.damage_points = 4;
            def.block = Some(BlockCondition::HeavyWarrior);
            def.ranged_magic_immune = suit == Suit::Hearts;
            if suit == Suit::Spades {
                def.placement = Some(PlacementAbility::DestroyAttackers);
            }
        }
        Rank::King => {
            def.is_character = true;
            def.class = Some(CharacterClass::Warrior);
            def.armor = Some(Armor::Heavy);
            def.attack = Some(AttackProfile {
                kind: AttackKind::Melee,
                value: 4,
                bonus: 1,
            });
            def.action_points = 1;
            def.damage_points = 5;
        }
        Rank::Queen => {
            def.is_character = true;
            def.class = Some(CharacterClass::Mage);
            def.armor = Some(Armor::Lite);
            def.attack = Some(AttackProfile {
                kind: AttackKind::Magic,
                value: 2,
                bonus: 1,
            });
            def.action_points = 1;
            def.damage_points = 3;
            def.block = Some(BlockCondition::RedQueen);
        }
        Rank::Jack => {
            def.is_character = true;
            def.class = Some(CharacterClass::Marksman);
            def.armor = Some(Armor::Lite);
            def.attack = Some(AttackProfile {
                kind: AttackKind::Ranged,
                value: 2,
                bonus: 0,
            });
            // The Two-Eyed Jacks.
            def.action_points = match suit {
                Suit::Clubs | Suit::Diamonds => 2,
                Suit::Hearts | Suit::Spades => 1,
            };
            def.damage_points = 3;
        }
        Rank::Ten => {
            def.cast = Some(CastAbility::DrawTwo);
        }
        Rank::Nine | Rank::Eight => {
            def.source_kind = Some(SourceKind::Magic);
            def.block = Some(BlockCondition::RedQueen);
        }
        Rank::Seven => {
            def.is_trap = true;
        }
        Rank::Six => {
            def.block = Some(BlockCondition::HeavyWarrior);
        }
        Rank::Five => {
            def.block = Some(BlockCondition::LiteMarksman);
        }
        Rank::Four => {
            def.block = Some(BlockCondition::Always);
        }
        Rank::Three | Rank::Two => {
            def.source_kind = Some(SourceKind::Ammo);
            def.cast = Some(CastAbility::Strike {
                damage: 2,
                kind: AttackKind::Ranged,
            });
        }
        Rank::Joker => unreachable!("Jokers are not suited"),
    }

    def
}

fn joker(id: CardId, name: &str) -> CardDefinition {
    let mut def = CardDefinition::new(id, name, Rank::Joker, None);
    def.cast = Some(CastAbility::UberDamage);
    def
}

/// All 54 built-in definitions.
#[must_use]
pub fn definitions() -> Vec<CardDefinition> {
    let mut defs = Vec::with_capacity(54);
    for suit in Suit::ALL {
        for rank in Rank::SUITED {
            defs.push(suited(rank, suit));
        }
    }
    defs.push(joker(RED_JOKER, "Red Joker"));
    defs.push(joker(BLACK_JOKER, "Black Joker"));
    defs
}

/// A registry preloaded with the built-in set.
#[must_use]
pub fn registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    for def in definitions() {
        registry.register(def);
    }
    registry
}

/// The 106-card deck list: every suited card twice, each Joker once.
#[must_use]
pub fn deck_list() -> Vec<CardId> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::SUITED {
            let id = CardId::suited(rank, suit);
            deck.push(id);
            deck.push(id);
        }
    }
    deck.push(RED_JOKER);
    deck.push(BLACK_JOKER);
    deck
}
