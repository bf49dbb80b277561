//! Pre-transfer hook for ticket ownership changes
//!
//! Every path that assigns a ticket's holder (the mint at primary purchase
//! and the reassignment at secondary purchase) goes through [`assign_owner`],
//! so a used ticket can never change hands no matter which instruction
//! attempts it.

use anchor_lang::prelude::*;

use crate::errors::BoxOfficeError;
use crate::state::Ticket;

/// Reject any transfer of a used ticket.
pub fn assert_transferable(ticket: &Ticket) -> Result<()> {
    require!(!ticket.is_used, BoxOfficeError::TicketAlreadyUsed);
    Ok(())
}

/// The single owner-mutation primitive. Runs the hook, then writes.
pub fn assign_owner(ticket: &mut Ticket, new_owner: Pubkey) -> Result<()> {
    assert_transferable(ticket)?;
    ticket.owner = new_owner;
    Ok(())
}
