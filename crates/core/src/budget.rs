//! Move-point ledger operations.
//!
//! Each actor exclusively owns its ledger; these are the only operations
//! that touch `moves`. Overdraft is allowed: a creature finishes a step it
//! already committed to rather than freezing mid-tile, and the resulting
//! debt shortens its next turn.

use crate::state::ActorState;

impl ActorState {
    /// Credits this turn's allowance. Any debt from the previous turn has
    /// already been carried in `moves`, so the effective budget shrinks by
    /// exactly the overdraft.
    pub fn begin_turn(&mut self) {
        self.moves += self.speed as i32;
    }

    /// Debits one step's cost. May drive the ledger negative, which ends
    /// the turn.
    pub fn charge(&mut self, cost: u32) {
        self.moves -= cost as i32;
    }

    /// An actor keeps stepping while this holds.
    pub fn has_budget(&self) -> bool {
        self.moves >= 0
    }
}
