//! Core engine types: identity, actions, phases, state, RNG.

mod action;
mod entity;
mod phase;
mod player;
mod rng;
mod state;

pub use action::{Action, ActionRecord, TemplateId};
pub use entity::EntityId;
pub use phase::Phase;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PendingTrap, PublicState};
