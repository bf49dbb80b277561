use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::*;
use crate::errors::BoxOfficeError;
use crate::events::TicketPurchased;
use crate::state::{EventRecord, MarketConfig, ReentrancyGuard, Ticket};
use crate::transfer_guard;

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct PurchaseTicket<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = market_config.bump,
    )]
    pub market_config: Account<'info, MarketConfig>,

    #[account(
        mut,
        seeds = [EVENT_SEED, &event_id.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, EventRecord>,

    #[account(
        init,
        payer = buyer,
        space = 8 + Ticket::INIT_SPACE,
        seeds = [TICKET_SEED, &market_config.next_id.to_le_bytes()],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    /// Receives the full attached payment.
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

/// Primary sale: mint a ticket to the buyer and forward the payment to
/// the organizer.
///
/// All internal state commits before the payment CPI. A reentrant call
/// triggered from the transfer therefore observes consistent state and is
/// rejected by the guard; a failed transfer aborts the instruction and
/// the runtime discards every mutation made here.
pub fn purchase_ticket(
    ctx: Context<PurchaseTicket>,
    event_id: u64,
    seat_number: u32,
    amount: u64,
) -> Result<()> {
    ctx.accounts.reentrancy_guard.enter()?;

    let event = &mut ctx.accounts.event;
    require!(event.is_active, BoxOfficeError::EventNotActive);
    require!(event.can_mint(), BoxOfficeError::SoldOut);
    require!(amount >= event.ticket_price, BoxOfficeError::InsufficientPayment);

    let ticket_id = ctx.accounts.market_config.allocate_id()?;
    let max_resale_price = event
        .max_resale_price(event.ticket_price)
        .ok_or(BoxOfficeError::ArithmeticOverflow)?;

    let buyer = ctx.accounts.buyer.key();
    let ticket = &mut ctx.accounts.ticket;
    ticket.ticket_id = ticket_id;
    ticket.event_id = event_id;
    ticket.original_owner = buyer;
    ticket.original_price = event.ticket_price;
    ticket.current_price = event.ticket_price;
    ticket.max_resale_price = max_resale_price;
    ticket.is_used = false;
    ticket.seat_number = seat_number;
    ticket.bump = ctx.bumps.ticket;

    // Mint ownership to the buyer through the pre-transfer hook.
    transfer_guard::assign_owner(ticket, buyer)?;

    event.register_sale()?;

    // Commit-then-pay: state is final, now move the money.
    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.organizer.to_account_info(),
            },
        ),
        amount,
    )?;

    ReentrancyGuard::exit(&mut ctx.accounts.reentrancy_guard);

    emit!(TicketPurchased {
        ticket_id,
        event_id,
        buyer,
    });

    msg!(
        "Ticket {} minted for event {}, {} lamports to organizer",
        ticket_id,
        event_id,
        amount
    );

    Ok(())
}
