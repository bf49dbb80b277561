use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{EVENT_SEED, REENTRANCY_SEED, TICKET_SEED};
use crate::errors::BoxOfficeError;
use crate::events::TicketTransferred;
use crate::state::{EventRecord, ReentrancyGuard, Ticket};
use crate::transfer_guard;

#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct PurchaseResoldTicket<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

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

    /// The current holder, who receives the sale proceeds.
    #[account(
        mut,
        address = ticket.owner @ BoxOfficeError::NotTicketOwner
    )]
    pub seller: SystemAccount<'info>,

    /// Receives the royalty cut.
    #[account(
        mut,
        address = event.organizer @ BoxOfficeError::NotEventOrganizer
    )]
    pub organizer: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [REENTRANCY_SEED],
        bump = reentrancy_guard.bump,
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,

    pub system_program: Program<'info, System>,
}

/// Secondary sale: reassign ownership, then split the attached payment
/// between organizer royalty and seller proceeds.
///
/// The split basis is the attached amount, not the asking price; an
/// overpaying buyer inflates both shares proportionally. The two shares
/// sum to the attached amount exactly.
pub fn purchase_resold_ticket(
    ctx: Context<PurchaseResoldTicket>,
    ticket_id: u64,
    amount: u64,
) -> Result<()> {
    ctx.accounts.reentrancy_guard.enter()?;

    let buyer = ctx.accounts.buyer.key();
    let seller = ctx.accounts.seller.key();
    let ticket = &mut ctx.accounts.ticket;
    let event = &ctx.accounts.event;

    require_keys_neq!(ticket.owner, buyer, BoxOfficeError::CannotBuyOwnTicket);
    require!(!ticket.is_used, BoxOfficeError::TicketAlreadyUsed);
    require!(
        amount >= ticket.current_price,
        BoxOfficeError::InsufficientPayment
    );

    let royalty_amount = event
        .royalty_on(amount)
        .ok_or(BoxOfficeError::ArithmeticOverflow)?;
    let seller_amount = amount
        .checked_sub(royalty_amount)
        .ok_or(BoxOfficeError::ArithmeticOverflow)?;

    // State commit: reassign ownership through the pre-transfer hook.
    transfer_guard::assign_owner(ticket, buyer)?;

    if royalty_amount > 0 {
        transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.organizer.to_account_info(),
                },
            ),
            royalty_amount,
        )?;
    }

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.seller.to_account_info(),
            },
        ),
        seller_amount,
    )?;

    ReentrancyGuard::exit(&mut ctx.accounts.reentrancy_guard);

    emit!(TicketTransferred {
        ticket_id,
        seller,
        buyer,
        amount,
    });

    msg!(
        "Ticket {} resold: {} lamports royalty, {} lamports to seller",
        ticket_id,
        royalty_amount,
        seller_amount
    );

    Ok(())
}
