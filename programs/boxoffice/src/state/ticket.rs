use anchor_lang::prelude::*;

use crate::errors::BoxOfficeError;

#[account]
#[derive(InitSpace)]
pub struct Ticket {
    pub ticket_id: u64,
    pub event_id: u64,
    /// Current holder. Mutated only through the transfer guard.
    pub owner: Pubkey,
    /// The principal who performed the primary purchase; never changes.
    pub original_owner: Pubkey,
    /// Primary sale price, copied from the event at mint.
    pub original_price: u64,
    /// Asking price for resale.
    pub current_price: u64,
    /// Cap computed once at mint from the event's resale multiplier.
    pub max_resale_price: u64,
    /// One-way flag set when the organizer validates the ticket.
    pub is_used: bool,
    /// 0 = general admission. Seat collisions are not checked here.
    pub seat_number: u32,
    pub bump: u8,
}

impl Ticket {
    /// Update the asking price for a resale listing.
    pub fn set_asking_price(&mut self, new_price: u64) -> Result<()> {
        require!(!self.is_used, BoxOfficeError::TicketAlreadyUsed);
        require!(
            new_price <= self.max_resale_price,
            BoxOfficeError::ExceedsResaleCap
        );
        self.current_price = new_price;
        Ok(())
    }

    /// Consume the ticket. Irreversible.
    pub fn mark_used(&mut self) -> Result<()> {
        require!(!self.is_used, BoxOfficeError::TicketAlreadyUsed);
        self.is_used = true;
        Ok(())
    }
}
