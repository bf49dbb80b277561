use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod transfer_guard;

use instructions::*;

declare_id!("GP4Rtnmpsmr27AgpBvfkGPrNJ8SyhXRbsMbcuvGRLchN");

#[program]
pub mod boxoffice {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, administrator: Pubkey) -> Result<()> {
        instructions::initialize(ctx, administrator)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_event(
        ctx: Context<CreateEvent>,
        name: String,
        description: String,
        date: i64,
        location: String,
        total_tickets: u64,
        ticket_price: u64,
        royalty_bps: u16,
        max_resale_multiplier: u64,
    ) -> Result<()> {
        instructions::create_event(
            ctx,
            name,
            description,
            date,
            location,
            total_tickets,
            ticket_price,
            royalty_bps,
            max_resale_multiplier,
        )
    }

    pub fn purchase_ticket(
        ctx: Context<PurchaseTicket>,
        event_id: u64,
        seat_number: u32,
        amount: u64,
    ) -> Result<()> {
        instructions::purchase_ticket(ctx, event_id, seat_number, amount)
    }

    pub fn resell_ticket(
        ctx: Context<ResellTicket>,
        ticket_id: u64,
        new_price: u64,
    ) -> Result<()> {
        instructions::resell_ticket(ctx, ticket_id, new_price)
    }

    pub fn purchase_resold_ticket(
        ctx: Context<PurchaseResoldTicket>,
        ticket_id: u64,
        amount: u64,
    ) -> Result<()> {
        instructions::purchase_resold_ticket(ctx, ticket_id, amount)
    }

    pub fn validate_ticket(ctx: Context<ValidateTicket>, ticket_id: u64) -> Result<()> {
        instructions::validate_ticket(ctx, ticket_id)
    }

    pub fn get_event_info(ctx: Context<GetEventInfo>, event_id: u64) -> Result<EventInfo> {
        instructions::get_event_info(ctx, event_id)
    }

    pub fn get_ticket_info(ctx: Context<GetTicketInfo>, ticket_id: u64) -> Result<TicketInfo> {
        instructions::get_ticket_info(ctx, ticket_id)
    }
}
