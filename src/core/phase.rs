//! The round state machine.
//!
//! A JaDoK round runs Draw → ASP (commit, then LIFO resolve) →
//! Movement & Melee (per player) → Ranged (per player) → Refortify
//! (per player), then round-end cleanup. `TrapResponse` interposes
//! inside Melee while a revealed trap waits for the attacker's owner
//! to block or concede the attacker.
//!
//! Most phases visit both players in token order; `PublicState` keeps
//! a cursor for that, this enum only names the station.

use serde::{Deserialize, Serialize};

/// The current station of the round state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Each player may draw one card (token holder first). An
    /// empty-handed token holder may pass the token and draw five.
    Draw,

    /// Players alternately commit cards face-down to the pile or
    /// place the first-player token, closing it.
    AspCommit,

    /// The pile resolves LIFO; the owner of the top entry chooses its
    /// disposition (reveal / discard / place in wall).
    AspResolve,

    /// One player moves characters from battlement to field, then
    /// makes melee attacks.
    Movement,

    /// Melee attacks for the current actor.
    Melee,

    /// A melee attack hit a face-down trap; the attacker's owner must
    /// block it or lose the attacker.
    TrapResponse,

    /// Ranged attacks for the current actor (spending a damage source
    /// from hand).
    Ranged,

    /// The current actor spends leftover action points on wall
    /// placement, discards, or Ten-for-a-card trades.
    Refortify,

    /// End conditions were met at a round boundary; no further
    /// actions are legal.
    Finished,
}

impl Phase {
    /// Whether this phase visits each player in turn (token holder
    /// first) rather than interleaving both.
    #[must_use]
    pub fn is_per_actor(self) -> bool {
        matches!(
            self,
            Phase::Movement | Phase::Melee | Phase::Ranged | Phase::Refortify
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Draw => "Draw",
            Phase::AspCommit => "ASP (commit)",
            Phase::AspResolve => "ASP (resolve)",
            Phase::Movement => "Movement",
            Phase::Melee => "Melee",
            Phase::TrapResponse => "Trap response",
            Phase::Ranged => "Ranged",
            Phase::Refortify => "Refortify",
            Phase::Finished => "Finished",
        };
        f.write_str(name)
    }
}
