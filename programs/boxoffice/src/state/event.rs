use anchor_lang::prelude::*;

use crate::constants::{
    MAX_EVENT_DESCRIPTION_LEN, MAX_EVENT_LOCATION_LEN, MAX_EVENT_NAME_LEN, MAX_ROYALTY_BPS,
    MAX_TICKET_SUPPLY, MIN_RESALE_MULTIPLIER, RESALE_MULTIPLIER_BASE, ROYALTY_BPS_BASE,
};
use crate::errors::BoxOfficeError;

#[account]
#[derive(InitSpace)]
pub struct EventRecord {
    pub event_id: u64,
    pub organizer: Pubkey,
    #[max_len(MAX_EVENT_NAME_LEN)]
    pub name: String,
    #[max_len(MAX_EVENT_DESCRIPTION_LEN)]
    pub description: String,
    #[max_len(MAX_EVENT_LOCATION_LEN)]
    pub location: String,
    /// Event date as a unix timestamp, strictly in the future at creation.
    pub date: i64,
    pub total_tickets: u64,
    pub tickets_sold: u64,
    /// Primary sale price in lamports.
    pub ticket_price: u64,
    /// Organizer royalty on secondary sales, in basis points.
    pub royalty_bps: u16,
    /// Resale price cap against original price, base 100 (150 = 1.5x).
    pub max_resale_multiplier: u64,
    /// Write-once true; deactivation is reserved for a later version.
    pub is_active: bool,
    pub bump: u8,
}

impl EventRecord {
    /// Parameter checks for event creation, in the order callers observe
    /// them fail.
    pub fn validate_params(
        now: i64,
        date: i64,
        total_tickets: u64,
        ticket_price: u64,
        royalty_bps: u16,
        max_resale_multiplier: u64,
    ) -> Result<()> {
        require!(date > now, BoxOfficeError::EventDateInPast);
        require!(total_tickets > 0, BoxOfficeError::InvalidTicketSupply);
        require!(
            total_tickets <= MAX_TICKET_SUPPLY,
            BoxOfficeError::TicketSupplyTooLarge
        );
        require!(ticket_price > 0, BoxOfficeError::InvalidTicketPrice);
        require!(royalty_bps <= MAX_ROYALTY_BPS, BoxOfficeError::RoyaltyTooHigh);
        require!(
            max_resale_multiplier >= MIN_RESALE_MULTIPLIER,
            BoxOfficeError::ResaleMultiplierTooLow
        );
        Ok(())
    }

    pub fn can_mint(&self) -> bool {
        self.tickets_sold < self.total_tickets
    }

    /// Register one primary sale against capacity.
    pub fn register_sale(&mut self) -> Result<()> {
        require!(self.can_mint(), BoxOfficeError::SoldOut);
        self.tickets_sold = self
            .tickets_sold
            .checked_add(1)
            .ok_or(BoxOfficeError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Ceiling price a ticket minted at `original_price` may be relisted at.
    /// Truncates toward zero.
    pub fn max_resale_price(&self, original_price: u64) -> Option<u64> {
        original_price
            .checked_mul(self.max_resale_multiplier)?
            .checked_div(RESALE_MULTIPLIER_BASE)
    }

    /// Organizer royalty owed on a secondary sale of `amount`.
    /// Truncates toward zero; the seller receives the exact complement.
    pub fn royalty_on(&self, amount: u64) -> Option<u64> {
        amount
            .checked_mul(self.royalty_bps as u64)?
            .checked_div(ROYALTY_BPS_BASE)
    }

    pub fn assert_organizer(&self, key: &Pubkey) -> Result<()> {
        require_keys_eq!(self.organizer, *key, BoxOfficeError::NotEventOrganizer);
        Ok(())
    }
}
