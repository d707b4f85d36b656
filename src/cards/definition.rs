//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type:
//! rank, suit, combat stats, abilities. Instance-specific data (damage
//! taken, remaining action points) is stored separately in
//! `CardInstance`.
//!
//! JaDoK plays with a standard deck, so definitions are identified by
//! rank and suit; the two Jokers are their own definitions.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Suited cards are numbered `suit_index * 13 + rank_index`
/// (Two = 0 .. Ace = 12, suits in Clubs/Diamonds/Hearts/Spades order);
/// the Red and Black Jokers take 52 and 53.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The ID for a suited card.
    #[must_use]
    pub const fn suited(rank: Rank, suit: Suit) -> Self {
        Self(suit.index() as u32 * 13 + rank.index() as u32)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card rank. `Joker` stands outside the Two..Ace ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl Rank {
    /// The thirteen suited ranks, low to high.
    pub const SUITED: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Index in the suited ladder (Two = 0 .. Ace = 12, Joker = 13).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
            Rank::Joker => "Joker",
        };
        f.write_str(name)
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, in ID order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Index in ID order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Red suits enable magic blocks (red queens).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Character class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Marksman,
}

/// Character armor weight. Feeds block-card usability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Armor {
    Heavy,
    Lite,
}

/// How an attack is delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackKind {
    Melee,
    Ranged,
    Magic,
}

impl AttackKind {
    /// The damage source a ranged-style attack consumes from hand.
    /// Melee attacks need none.
    #[must_use]
    pub const fn needs_source(self) -> Option<SourceKind> {
        match self {
            AttackKind::Melee => None,
            AttackKind::Ranged => Some(SourceKind::Ammo),
            AttackKind::Magic => Some(SourceKind::Magic),
        }
    }
}

/// Kinds of damage source cards discarded from hand to power attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    Ammo,
    Magic,
}

/// A character's attack line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackProfile {
    pub kind: AttackKind,
    /// Base attack value.
    pub value: u32,
    /// Damage bonus added on top of the base value.
    pub bonus: u32,
}

impl AttackProfile {
    /// Total damage one attack deals.
    #[must_use]
    pub const fn damage(self) -> u32 {
        self.value + self.bonus
    }
}

/// Spell cast abilities, resolved when a card is revealed from the
/// pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastAbility {
    /// A chosen player draws two cards (Tens).
    DrawTwo,
    /// Direct damage to an opponent field character (Twos and Threes).
    Strike { damage: u32, kind: AttackKind },
    /// The Joker: 2 damage plus 1 per drained action point, assigned
    /// point by point across the opponent's zones.
    UberDamage,
}

/// Abilities that fire when a character is placed in a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementAbility {
    /// Destroys opponent field characters that have attacked, in this
    /// round or any earlier one (Ace of Spades).
    DestroyAttackers,
}

/// What must be on the table for a block card to be usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockCondition {
    /// Usable unconditionally (Fours).
    Always,
    /// Needs a lite-armor marksman in a zone (Fives).
    LiteMarksman,
    /// Needs a heavy-armor warrior in a zone (Sixes, Aces).
    HeavyWarrior,
    /// Needs a red queen in a zone (Eights, Nines, Queens).
    RedQueen,
}

/// Static card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,

    /// Display name, e.g. "Jack of Clubs".
    pub name: String,

    pub rank: Rank,

    /// `None` for Jokers.
    pub suit: Option<Suit>,

    /// Characters enter zones and fight; non-characters are spells,
    /// traps, blocks and sources.
    pub is_character: bool,

    pub class: Option<CharacterClass>,
    pub armor: Option<Armor>,
    pub attack: Option<AttackProfile>,

    /// Initial action points. Two-Eyed Jacks get 2, other characters
    /// 1, non-characters 0.
    pub action_points: u32,

    /// Damage points; a card taking this much damage is destroyed.
    pub damage_points: u32,

    pub cast: Option<CastAbility>,
    pub placement: Option<PlacementAbility>,

    /// Sevens. Destroys a melee attacker that hits it in the wall;
    /// worth victory points while walled.
    pub is_trap: bool,

    pub block: Option<BlockCondition>,

    /// Cards that can be discarded from hand as a damage source.
    pub source_kind: Option<SourceKind>,

    /// Ace of Hearts: cannot be destroyed by ranged or magic damage.
    pub ranged_magic_immune: bool,
}

impl CardDefinition {
    /// A bare definition; the catalog and loader fill in abilities.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, rank: Rank, suit: Option<Suit>) -> Self {
        Self {
            id,
            name: name.into(),
            rank,
            suit,
            is_character: false,
            class: None,
            armor: None,
            attack: None,
            action_points: 0,
            damage_points: 1,
            cast: None,
            placement: None,
            is_trap: false,
            block: None,
            source_kind: None,
            ranged_magic_immune: false,
        }
    }

    /// Whether this is a red queen (enables magic blocks).
    #[must_use]
    pub fn is_red_queen(&self) -> bool {
        self.rank == Rank::Queen && self.suit.is_some_and(Suit::is_red)
    }

    /// Whether this is a lite-armor marksman.
    #[must_use]
    pub fn is_lite_marksman(&self) -> bool {
        self.class == Some(CharacterClass::Marksman) && self.armor == Some(Armor::Lite)
    }

    /// Whether this is a heavy-armor warrior.
    #[must_use]
    pub fn is_heavy_warrior(&self) -> bool {
        self.class == Some(CharacterClass::Warrior) && self.armor == Some(Armor::Heavy)
    }
}
