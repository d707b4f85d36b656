//! CSV card-set loading.
//!
//! Card sets can be loaded from a CSV file with the columns `name`,
//! `character class`, `damage bonus`, `attack type`, `attack value`,
//! `action points`, `damage points`, `sub class`, `cast ability`,
//! `special ability` and `is a character`.
//!
//! Names are "Rank of Suit" ("Jack of Clubs") or "Red Joker" /
//! "Black Joker". The `special ability` column holds a
//! semicolon-separated list (e.g. `source magic; block red queen`).

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::catalog::{BLACK_JOKER, RED_JOKER};
use super::definition::{
    Armor, AttackKind, AttackProfile, BlockCondition, CardDefinition, CardId, CastAbility,
    CharacterClass, PlacementAbility, Rank, SourceKind, Suit,
};
use super::registry::CardRegistry;

/// Errors from card-set loading.
#[derive(Debug, Error)]
pub enum CardDataError {
    #[error("failed to read card file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed card file: {0}")]
    Csv(#[from] csv::Error),

    #[error("unrecognized card name {0:?}")]
    BadName(String),

    #[error("unrecognized {field} value {value:?} for card {card:?}")]
    BadValue {
        field: &'static str,
        value: String,
        card: String,
    },

    #[error("more than two Jokers in card set")]
    TooManyJokers,
}

/// A playable card set: definitions plus the deck list each player's
/// deck is built from.
#[derive(Clone, Debug)]
pub struct CardSet {
    pub registry: CardRegistry,
    /// One deck's worth of cards: every suited definition twice, each
    /// Joker once.
    pub deck: Vec<CardId>,
}

impl CardSet {
    /// The built-in JaDoK set.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            registry: super::catalog::registry(),
            deck: super::catalog::deck_list(),
        }
    }

    /// Load a set from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CardDataError> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut registry = CardRegistry::new();
        let mut deck = Vec::new();
        let mut jokers_seen = 0u32;

        for row in reader.deserialize() {
            let row: CardRow = row?;
            let def = parse_row(&row, &mut jokers_seen)?;
            if def.rank == Rank::Joker {
                deck.push(def.id);
            } else {
                deck.push(def.id);
                deck.push(def.id);
            }
            registry.register(def);
        }

        Ok(Self { registry, deck })
    }
}

#[derive(Debug, Deserialize)]
struct CardRow {
    name: String,
    #[serde(rename = "character class")]
    character_class: String,
    #[serde(rename = "damage bonus")]
    damage_bonus: u32,
    #[serde(rename = "attack type")]
    attack_type: String,
    #[serde(rename = "attack value")]
    attack_value: u32,
    #[serde(rename = "action points")]
    action_points: u32,
    #[serde(rename = "damage points")]
    damage_points: u32,
    #[serde(rename = "sub class")]
    sub_class: String,
    #[serde(rename = "cast ability")]
    cast_ability: String,
    #[serde(rename = "special ability")]
    special_ability: String,
    #[serde(rename = "is a character")]
    is_character: String,
}

fn parse_row(row: &CardRow, jokers_seen: &mut u32) -> Result<CardDefinition, CardDataError> {
    let (rank, suit) = parse_name(&row.name)?;

    let id = match rank {
        Rank::Joker => {
            *jokers_seen += 1;
            match *jokers_seen {
                1 => RED_JOKER,
                2 => BLACK_JOKER,
                _ => return Err(CardDataError::TooManyJokers),
            }
        }
        _ => {
            // parse_name only returns a suitless rank for Jokers
            let suit = suit.ok_or_else(|| CardDataError::BadName(row.name.clone()))?;
            CardId::suited(rank, suit)
        }
    };

    let mut def = CardDefinition::new(id, row.name.clone(), rank, suit);
    def.is_character = parse_bool(&row.is_character, "is a character", &row.name)?;
    def.action_points = row.action_points;
    def.damage_points = row.damage_points.max(1);

    if def.is_character {
        def.class = Some(parse_class(&row.character_class, &row.name)?);
        def.armor = Some(parse_armor(&row.sub_class, &row.name)?);
        def.attack = Some(AttackProfile {
            kind: parse_attack_kind(&row.attack_type, &row.name)?,
            value: row.attack_value,
            bonus: row.damage_bonus,
        });
    }

    if !row.cast_ability.trim().is_empty() {
        def.cast = Some(parse_cast(&row.cast_ability, &row.name)?);
    }

    for special in row.special_ability.split(';') {
        let special = special.trim().to_ascii_lowercase();
        if special.is_empty() {
            continue;
        }
        apply_special(&mut def, &special, &row.name)?;
    }

    Ok(def)
}

fn parse_name(name: &str) -> Result<(Rank, Option<Suit>), CardDataError> {
    let lower = name.trim().to_ascii_lowercase();
    if lower == "joker" || lower == "red joker" || lower == "black joker" {
        return Ok((Rank::Joker, None));
    }

    let (rank_part, suit_part) = lower
        .split_once(" of ")
        .ok_or_else(|| CardDataError::BadName(name.to_string()))?;

    let rank = match rank_part {
        "two" | "2" => Rank::Two,
        "three" | "3" => Rank::Three,
        "four" | "4" => Rank::Four,
        "five" | "5" => Rank::Five,
        "six" | "6" => Rank::Six,
        "seven" | "7" => Rank::Seven,
        "eight" | "8" => Rank::Eight,
        "nine" | "9" => Rank::Nine,
        "ten" | "10" => Rank::Ten,
        "jack" => Rank::Jack,
        "queen" => Rank::Queen,
        "king" => Rank::King,
        "ace" => Rank::Ace,
        _ => return Err(CardDataError::BadName(name.to_string())),
    };

    let suit = match suit_part {
        "clubs" => Suit::Clubs,
        "diamonds" => Suit::Diamonds,
        "hearts" => Suit::Hearts,
        "spades" => Suit::Spades,
        _ => return Err(CardDataError::BadName(name.to_string())),
    };

    Ok((rank, Some(suit)))
}

fn parse_bool(value: &str, field: &'static str, card: &str) -> Result<bool, CardDataError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Ok(true),
        "no" | "false" | "0" | "" => Ok(false),
        _ => Err(bad_value(field, value, card)),
    }
}

fn parse_class(value: &str, card: &str) -> Result<CharacterClass, CardDataError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "warrior" => Ok(CharacterClass::Warrior),
        "mage" => Ok(CharacterClass::Mage),
        "marksman" => Ok(CharacterClass::Marksman),
        _ => Err(bad_value("character class", value, card)),
    }
}

fn parse_armor(value: &str, card: &str) -> Result<Armor, CardDataError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "heavy" | "heavy armor" => Ok(Armor::Heavy),
        "lite" | "lite armor" => Ok(Armor::Lite),
        _ => Err(bad_value("sub class", value, card)),
    }
}

fn parse_attack_kind(value: &str, card: &str) -> Result<AttackKind, CardDataError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "melee" => Ok(AttackKind::Melee),
        "ranged" => Ok(AttackKind::Ranged),
        "magic" => Ok(AttackKind::Magic),
        _ => Err(bad_value("attack type", value, card)),
    }
}

fn parse_cast(value: &str, card: &str) -> Result<CastAbility, CardDataError> {
    let lower = value.trim().to_ascii_lowercase();
    if lower == "draw two" {
        return Ok(CastAbility::DrawTwo);
    }
    if lower == "uber damage" {
        return Ok(CastAbility::UberDamage);
    }
    if let Some(rest) = lower.strip_prefix("strike ") {
        let damage: u32 = rest
            .trim()
            .parse()
            .map_err(|_| bad_value("cast ability", value, card))?;
        return Ok(CastAbility::Strike {
            damage,
            kind: AttackKind::Ranged,
        });
    }
    Err(bad_value("cast ability", value, card))
}

fn apply_special(
    def: &mut CardDefinition,
    special: &str,
    card: &str,
) -> Result<(), CardDataError> {
    match special {
        "trap" => def.is_trap = true,
        "immune" => def.ranged_magic_immune = true,
        "destroy attackers" => def.placement = Some(PlacementAbility::DestroyAttackers),
        "block always" => def.block = Some(BlockCondition::Always),
        "block lite marksman" => def.block = Some(BlockCondition::LiteMarksman),
        "block heavy warrior" => def.block = Some(BlockCondition::HeavyWarrior),
        "block red queen" => def.block = Some(BlockCondition::RedQueen),
        "source ammo" => def.source_kind = Some(SourceKind::Ammo),
        "source magic" => def.source_kind = Some(SourceKind::Magic),
        _ => return Err(bad_value("special ability", special, card)),
    }
    Ok(())
}

fn bad_value(field: &'static str, value: &str, card: &str) -> CardDataError {
    CardDataError::BadValue {
        field,
        value: value.to_string(),
        card: card.to_string(),
    }
}
