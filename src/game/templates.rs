//! The JaDoK action vocabulary.
//!
//! Every choice the game puts to a player is one of these templates
//! plus entity pointers. Pointer meanings:
//!
//! | Template | Pointers |
//! |----------|----------|
//! | `draw`, `pass_token`, `close_pile`, `take_trap`, `pass` | none |
//! | `commit` | hand card |
//! | `reveal_battlement`, `reveal_field`, `pile_discard`, `pile_wall` | none (they act on the top pile entry) |
//! | `cast` | Draw Two: beneficiary player; Strike: opponent field character (none if it fizzles) |
//! | `joker_battlement`, `joker_field` | none (the template names the drained zone) |
//! | `advance` | own battlement character |
//! | `melee` | attacker, then target |
//! | `block_trap` | block card in hand |
//! | `ranged` | attacker, then source card in hand, then target |
//! | `refortify_place`, `refortify_discard` | hand card |
//! | `refortify_ten` | a Ten in hand |

use crate::core::TemplateId;

/// Action templates for JaDoK.
#[derive(Clone, Copy, Debug)]
pub struct Templates {
    /// Draw one card (Draw phase).
    pub draw: TemplateId,
    /// Empty-handed token holder: pass the token and draw five.
    pub pass_token: TemplateId,
    /// Commit a hand card face-down to the pile.
    pub commit: TemplateId,
    /// Place the first-player token, closing the pile.
    pub close_pile: TemplateId,
    /// Reveal the top pile entry into the battlement zone.
    pub reveal_battlement: TemplateId,
    /// Reveal the top pile entry into the field zone.
    pub reveal_field: TemplateId,
    /// Reveal the top pile entry and resolve its cast ability.
    pub cast: TemplateId,
    /// Reveal a Joker, draining action points from own battlement.
    pub joker_battlement: TemplateId,
    /// Reveal a Joker, draining action points from own field.
    pub joker_field: TemplateId,
    /// Discard the top pile entry.
    pub pile_discard: TemplateId,
    /// Place the top pile entry face-down in the wall.
    pub pile_wall: TemplateId,
    /// Move a character from battlement to field.
    pub advance: TemplateId,
    /// Melee attack.
    pub melee: TemplateId,
    /// Block a revealed trap with a block card from hand.
    pub block_trap: TemplateId,
    /// Let a revealed trap destroy the attacker.
    pub take_trap: TemplateId,
    /// Ranged attack, spending a damage source from hand.
    pub ranged: TemplateId,
    /// Refortify: place a hand card in the wall.
    pub refortify_place: TemplateId,
    /// Refortify: discard a hand card.
    pub refortify_discard: TemplateId,
    /// Refortify: discard a Ten to draw a card.
    pub refortify_ten: TemplateId,
    /// Decline / end the current step.
    pub pass: TemplateId,
}

impl Templates {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            draw: TemplateId::new(0),
            pass_token: TemplateId::new(1),
            commit: TemplateId::new(2),
            close_pile: TemplateId::new(3),
            reveal_battlement: TemplateId::new(4),
            reveal_field: TemplateId::new(5),
            cast: TemplateId::new(6),
            joker_battlement: TemplateId::new(7),
            joker_field: TemplateId::new(8),
            pile_discard: TemplateId::new(9),
            pile_wall: TemplateId::new(10),
            advance: TemplateId::new(11),
            melee: TemplateId::new(12),
            block_trap: TemplateId::new(13),
            take_trap: TemplateId::new(14),
            ranged: TemplateId::new(15),
            refortify_place: TemplateId::new(16),
            refortify_discard: TemplateId::new(17),
            refortify_ten: TemplateId::new(18),
            pass: TemplateId::new(19),
        }
    }

    /// Human-readable template name for display and logs.
    #[must_use]
    pub fn name(&self, template: TemplateId) -> &'static str {
        match template {
            t if t == self.draw => "draw",
            t if t == self.pass_token => "pass token and draw five",
            t if t == self.commit => "commit card to pile",
            t if t == self.close_pile => "place token (close pile)",
            t if t == self.reveal_battlement => "reveal to battlement",
            t if t == self.reveal_field => "reveal to field",
            t if t == self.cast => "cast",
            t if t == self.joker_battlement => "joker (drain battlement)",
            t if t == self.joker_field => "joker (drain field)",
            t if t == self.pile_discard => "discard from pile",
            t if t == self.pile_wall => "place in wall from pile",
            t if t == self.advance => "advance to field",
            t if t == self.melee => "melee attack",
            t if t == self.block_trap => "block trap",
            t if t == self.take_trap => "take trap",
            t if t == self.ranged => "ranged attack",
            t if t == self.refortify_place => "refortify: place in wall",
            t if t == self.refortify_discard => "refortify: discard",
            t if t == self.refortify_ten => "refortify: trade ten for a draw",
            t if t == self.pass => "pass",
            _ => "unknown",
        }
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}
