//! Call-admission lock for the money-moving instructions

use anchor_lang::prelude::*;

use crate::errors::BoxOfficeError;

/// Process-wide reentrancy lock.
///
/// `purchase_ticket` and `purchase_resold_ticket` enter the lock before
/// touching state and exit it on their success path. A failed instruction
/// discards the flag write together with every other mutation, so the lock
/// never outlives the call that took it.
#[account]
#[derive(InitSpace)]
pub struct ReentrancyGuard {
    pub in_progress: bool,
    pub bump: u8,
}

impl ReentrancyGuard {
    /// Fails with `ReentrancyLocked` when an outer guarded call is still
    /// in progress.
    pub fn enter(&mut self) -> Result<()> {
        require!(!self.in_progress, BoxOfficeError::ReentrancyLocked);
        self.in_progress = true;
        Ok(())
    }

    pub fn exit(&mut self) {
        self.in_progress = false;
    }
}
