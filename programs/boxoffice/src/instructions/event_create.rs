use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::BoxOfficeError;
use crate::events::EventCreated;
use crate::state::{EventRecord, MarketConfig};

#[derive(Accounts)]
pub struct CreateEvent<'info> {
    /// The designated administrator, who becomes the event organizer.
    #[account(
        mut,
        constraint = market_config.is_administrator(&organizer.key()) @ BoxOfficeError::Unauthorized
    )]
    pub organizer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = market_config.bump,
    )]
    pub market_config: Account<'info, MarketConfig>,

    #[account(
        init,
        payer = organizer,
        space = 8 + EventRecord::INIT_SPACE,
        seeds = [EVENT_SEED, &market_config.next_id.to_le_bytes()],
        bump
    )]
    pub event: Account<'info, EventRecord>,

    pub system_program: Program<'info, System>,
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
    let clock = Clock::get()?;
    EventRecord::validate_params(
        clock.unix_timestamp,
        date,
        total_tickets,
        ticket_price,
        royalty_bps,
        max_resale_multiplier,
    )?;
    require!(!name.is_empty(), BoxOfficeError::EventNameEmpty);
    require!(name.len() <= MAX_EVENT_NAME_LEN, BoxOfficeError::EventNameTooLong);
    require!(
        location.len() <= MAX_EVENT_LOCATION_LEN,
        BoxOfficeError::EventLocationTooLong
    );
    require!(
        description.len() <= MAX_EVENT_DESCRIPTION_LEN,
        BoxOfficeError::EventDescriptionTooLong
    );

    let event_id = ctx.accounts.market_config.allocate_id()?;

    let event = &mut ctx.accounts.event;
    event.event_id = event_id;
    event.organizer = ctx.accounts.organizer.key();
    event.name = name;
    event.description = description;
    event.location = location;
    event.date = date;
    event.total_tickets = total_tickets;
    event.tickets_sold = 0;
    event.ticket_price = ticket_price;
    event.royalty_bps = royalty_bps;
    event.max_resale_multiplier = max_resale_multiplier;
    event.is_active = true;
    event.bump = ctx.bumps.event;

    emit!(EventCreated {
        event_id,
        organizer: event.organizer,
    });

    msg!("Event {} created by {}", event_id, event.organizer);

    Ok(())
}
