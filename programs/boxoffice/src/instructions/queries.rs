use anchor_lang::prelude::*;

use crate::constants::{EVENT_SEED, TICKET_SEED};
use crate::errors::BoxOfficeError;
use crate::state::{EventRecord, Ticket};

/// Immutable event snapshot returned to callers.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct EventInfo {
    pub event_id: u64,
    pub organizer: Pubkey,
    pub name: String,
    pub description: String,
    pub location: String,
    pub date: i64,
    pub total_tickets: u64,
    pub tickets_sold: u64,
    pub ticket_price: u64,
    pub royalty_bps: u16,
    pub max_resale_multiplier: u64,
    pub is_active: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct TicketInfo {
    pub ticket_id: u64,
    pub event_id: u64,
    pub owner: Pubkey,
    pub original_owner: Pubkey,
    pub original_price: u64,
    pub current_price: u64,
    pub max_resale_price: u64,
    pub is_used: bool,
    pub seat_number: u32,
}

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct GetEventInfo<'info> {
    #[account(
        seeds = [EVENT_SEED, &event_id.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, EventRecord>,
}

pub fn get_event_info(ctx: Context<GetEventInfo>, _event_id: u64) -> Result<EventInfo> {
    let event = &ctx.accounts.event;
    require!(event.organizer != Pubkey::default(), BoxOfficeError::EventNotFound);

    Ok(EventInfo {
        event_id: event.event_id,
        organizer: event.organizer,
        name: event.name.clone(),
        description: event.description.clone(),
        location: event.location.clone(),
        date: event.date,
        total_tickets: event.total_tickets,
        tickets_sold: event.tickets_sold,
        ticket_price: event.ticket_price,
        royalty_bps: event.royalty_bps,
        max_resale_multiplier: event.max_resale_multiplier,
        is_active: event.is_active,
    })
}

#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct GetTicketInfo<'info> {
    #[account(
        seeds = [TICKET_SEED, &ticket_id.to_le_bytes()],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,
}

pub fn get_ticket_info(ctx: Context<GetTicketInfo>, _ticket_id: u64) -> Result<TicketInfo> {
    let ticket = &ctx.accounts.ticket;

    Ok(TicketInfo {
        ticket_id: ticket.ticket_id,
        event_id: ticket.event_id,
        owner: ticket.owner,
        original_owner: ticket.original_owner,
        original_price: ticket.original_price,
        current_price: ticket.current_price,
        max_resale_price: ticket.max_resale_price,
        is_used: ticket.is_used,
        seat_number: ticket.seat_number,
    })
}
