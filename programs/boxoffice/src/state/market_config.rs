use anchor_lang::prelude::*;

use crate::errors::BoxOfficeError;

/// Global marketplace configuration.
///
/// Holds the administrator allowed to create events and the shared ID
/// sequence from which both event and ticket IDs are allocated.
#[account]
#[derive(InitSpace)]
pub struct MarketConfig {
    pub administrator: Pubkey,
    pub next_id: u64,
    pub bump: u8,
}

impl MarketConfig {
    pub fn is_administrator(&self, key: &Pubkey) -> bool {
        self.administrator == *key
    }

    /// Hand out the next ID and advance the sequence.
    pub fn allocate_id(&mut self) -> Result<u64> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or(BoxOfficeError::ArithmeticOverflow)?;
        Ok(id)
    }
}
