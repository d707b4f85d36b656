//! Rules engine trait and rule errors.
//!
//! A game implements `RulesEngine` to define:
//! - What actions are legal
//! - How actions modify state (fallibly: illegal actions are rejected
//!   without touching the state)
//! - Win/loss conditions

use thiserror::Error;

use crate::core::{Action, EntityId, GameState, PlayerId, TemplateId};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (equal victory points).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Why an action was rejected.
///
/// `apply_action` returning one of these guarantees the state was not
/// mutated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("{player} does not have priority")]
    NotYourTurn { player: PlayerId },

    #[error("{template} is not legal in the current phase")]
    WrongPhase { template: TemplateId },

    #[error("action needs {expected} pointer(s), got {got}")]
    PointerCount { expected: usize, got: usize },

    #[error("{pointer} is not a legal target for {template}")]
    BadPointer {
        template: TemplateId,
        pointer: EntityId,
    },

    #[error("the game is over")]
    GameOver,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_templates`: return empty if the player can't act
/// - `legal_pointers`: called iteratively for multi-pointer actions
/// - `apply_action`: deterministic; rejects anything `legal_actions`
///   would not have produced
/// - `is_terminal`: return `None` if the game continues
pub trait RulesEngine {
    /// Get legal action templates for a player.
    fn legal_templates(&self, state: &GameState, player: PlayerId) -> Vec<TemplateId>;

    /// Get legal entity pointers for an action being built.
    ///
    /// Called iteratively as pointers are selected:
    /// - First call: `prior_pointers` is empty
    /// - Second call: `prior_pointers` has the first pointer
    /// - etc.
    ///
    /// Returns empty when no more pointers are needed.
    fn legal_pointers(
        &self,
        state: &GameState,
        player: PlayerId,
        template: TemplateId,
        prior_pointers: &[EntityId],
    ) -> Vec<EntityId>;

    /// Apply an action to the game state.
    ///
    /// On `Err` the state is unchanged.
    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<(), RuleError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate all legal actions for a player.
    ///
    /// Default implementation builds actions from templates and
    /// pointers.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        let mut actions = Vec::new();

        for template in self.legal_templates(state, player) {
            self.enumerate_actions_for_template(state, player, template, &[], &mut actions);
        }

        actions
    }

    /// Helper to enumerate actions for a template recursively.
    fn enumerate_actions_for_template(
        &self,
        state: &GameState,
        player: PlayerId,
        template: TemplateId,
        prior_pointers: &[EntityId],
        out: &mut Vec<Action>,
    ) {
        let next_pointers = self.legal_pointers(state, player, template, prior_pointers);

        if next_pointers.is_empty() {
            out.push(Action::with_pointers(template, prior_pointers));
        } else {
            for pointer in next_pointers {
                let mut pointers = prior_pointers.to_vec();
                pointers.push(pointer);
                self.enumerate_actions_for_template(state, player, template, &pointers, out);
            }
        }
    }
}
