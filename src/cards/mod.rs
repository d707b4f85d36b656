//! Card data: definitions, instances, the built-in set, CSV loading.

pub mod catalog;
mod definition;
mod instance;
mod loader;
mod registry;

pub use definition::{
    Armor, AttackKind, AttackProfile, BlockCondition, CardDefinition, CardId, CastAbility,
    CharacterClass, PlacementAbility, Rank, SourceKind, Suit,
};
pub use instance::CardInstance;
pub use loader::{CardDataError, CardSet};
pub use registry::CardRegistry;
