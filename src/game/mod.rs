//! The JaDoK rules: setup, templates, combat, scoring.

pub mod combat;
#[allow(clippy::module_inception)]
mod game;
pub mod joker;
pub mod score;
mod setup;
mod templates;

pub use game::JadokGame;
pub use setup::{GameBuilder, PLAYER_COUNT};
pub use templates::Templates;
