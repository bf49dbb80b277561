use anchor_lang::prelude::*;

use crate::constants::{EVENT_SEED, TICKET_SEED};
use crate::events::TicketValidated;
use crate::state::{EventRecord, Ticket};

#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct ValidateTicket<'info> {
    pub validator: Signer<'info>,

    #[account(
        mut,
        seeds = [TICKET_SEED, &ticket_id.to_le_bytes()],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        seeds = [EVENT_SEED, &ticket.event_id.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, EventRecord>,
}

/// Consume a ticket at the door. Organizer only; irreversible.
pub fn validate_ticket(ctx: Context<ValidateTicket>, ticket_id: u64) -> Result<()> {
    let validator = ctx.accounts.validator.key();
    ctx.accounts.event.assert_organizer(&validator)?;
    ctx.accounts.ticket.mark_used()?;

    emit!(TicketValidated {
        ticket_id,
        validator,
    });

    msg!("Ticket {} validated by {}", ticket_id, validator);

    Ok(())
}
