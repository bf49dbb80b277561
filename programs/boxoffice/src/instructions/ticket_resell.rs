use anchor_lang::prelude::*;

use crate::constants::TICKET_SEED;
use crate::errors::BoxOfficeError;
use crate::events::TicketResold;
use crate::state::Ticket;

#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct ResellTicket<'info> {
    pub seller: Signer<'info>,

    #[account(
        mut,
        seeds = [TICKET_SEED, &ticket_id.to_le_bytes()],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,
}

/// List a held ticket for resale at `new_price`. Pure state mutation,
/// no value transfer.
pub fn resell_ticket(ctx: Context<ResellTicket>, ticket_id: u64, new_price: u64) -> Result<()> {
    let seller = ctx.accounts.seller.key();
    let ticket = &mut ctx.accounts.ticket;

    require_keys_eq!(ticket.owner, seller, BoxOfficeError::NotTicketOwner);
    ticket.set_asking_price(new_price)?;

    emit!(TicketResold {
        ticket_id,
        new_price,
        seller,
    });

    msg!("Ticket {} listed at {} lamports", ticket_id, new_price);

    Ok(())
}
