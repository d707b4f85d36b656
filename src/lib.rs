//! JaDoK card game engine.
//!
//! An engine for the JaDoK Cultured card game: a two-player duel
//! played with doubled standard decks, face-down walls, a LIFO Action
//! Sequence Pile and victory points for field characters and walled
//! traps.
//!
//! ## Architecture
//!
//! - [`core`] — identity types, actions, the phase machine, game
//!   state, deterministic RNG, snapshots
//! - [`cards`] — static definitions, runtime instances, the built-in
//!   set, CSV loading
//! - [`zones`] — per-player ordered zones and location tracking
//! - [`pile`] — the Action Sequence Pile
//! - [`rules`] — the `RulesEngine` trait and rule errors
//! - [`game`] — the JaDoK rules themselves
//!
//! ## Quick start
//!
//! ```
//! use jadok::game::GameBuilder;
//! use jadok::rules::RulesEngine;
//!
//! let (game, mut state) = GameBuilder::new().build(42);
//!
//! let player = state.public.priority;
//! let actions = game.legal_actions(&state, player);
//! game.apply_action(&mut state, player, &actions[0]).unwrap();
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod pile;
pub mod rules;
pub mod zones;
