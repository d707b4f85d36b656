//! Action representation: template + entity pointers.
//!
//! Actions are compositional: a template (the "verb") plus entity
//! pointers (the "nouns"). For example:
//! - "Pass" = template only, no pointers
//! - "Commit card X to the pile" = template + 1 pointer
//! - "Ranged attack with X, spending Y, targeting Z" = template + 3 pointers
//!
//! The rules layer defines which templates exist and what their
//! pointers mean; this module just stores and compares them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::EntityId;
use super::player::PlayerId;

/// Action template identifier.
///
/// Opaque at this level; `game::Templates` names the JaDoK vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u16);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

/// A complete game action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The action template (type of action).
    pub template: TemplateId,

    /// Entity pointers for this action.
    /// SmallVec optimizes for 0-3 pointers without heap allocation.
    pub pointers: SmallVec<[EntityId; 3]>,
}

impl Action {
    /// Create an action with no pointers.
    #[must_use]
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            pointers: SmallVec::new(),
        }
    }

    /// Create an action with the given pointers.
    #[must_use]
    pub fn with_pointers(template: TemplateId, pointers: &[EntityId]) -> Self {
        Self {
            template,
            pointers: SmallVec::from_slice(pointers),
        }
    }

    /// Get the number of pointers.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay, debugging and the deterministic-replay guarantee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken.
    pub round: u32,

    /// Sequence number within the round (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
