use anchor_lang::prelude::*;
use solana_sdk::pubkey::Pubkey;

use boxoffice::constants::GENERAL_ADMISSION;
use boxoffice::errors::BoxOfficeError;
use boxoffice::state::{EventRecord, MarketConfig, ReentrancyGuard, Ticket};
use boxoffice::transfer_guard;

const NOW: i64 = 1_700_000_000;

fn sample_config() -> MarketConfig {
    MarketConfig {
        administrator: Pubkey::new_unique(),
        next_id: 1,
        bump: 255,
    }
}

fn sample_event(
    event_id: u64,
    total_tickets: u64,
    ticket_price: u64,
    royalty_bps: u16,
    max_resale_multiplier: u64,
) -> EventRecord {
    EventRecord {
        event_id,
        organizer: Pubkey::new_unique(),
        name: "Concert".to_string(),
        description: "Live music event".to_string(),
        location: "Stadium".to_string(),
        date: NOW + 86_400,
        total_tickets,
        tickets_sold: 0,
        ticket_price,
        royalty_bps,
        max_resale_multiplier,
        is_active: true,
        bump: 254,
    }
}

/// The state half of `purchase_ticket`, in handler order.
fn purchase_primary(
    config: &mut MarketConfig,
    event: &mut EventRecord,
    buyer: Pubkey,
    seat_number: u32,
    amount: u64,
) -> Result<Ticket> {
    require!(event.is_active, BoxOfficeError::EventNotActive);
    require!(event.can_mint(), BoxOfficeError::SoldOut);
    require!(amount >= event.ticket_price, BoxOfficeError::InsufficientPayment);

    let ticket_id = config.allocate_id()?;
    let max_resale_price = event
        .max_resale_price(event.ticket_price)
        .ok_or(BoxOfficeError::ArithmeticOverflow)?;

    let mut ticket = Ticket {
        ticket_id,
        event_id: event.event_id,
        owner: Pubkey::default(),
        original_owner: buyer,
        original_price: event.ticket_price,
        current_price: event.ticket_price,
        max_resale_price,
        is_used: false,
        seat_number,
        bump: 253,
    };
    transfer_guard::assign_owner(&mut ticket, buyer)?;
    event.register_sale()?;

    Ok(ticket)
}

/// The state half of `purchase_resold_ticket`: precondition checks,
/// royalty split, ownership reassignment. Returns (royalty, seller_amount).
fn purchase_secondary(
    event: &EventRecord,
    ticket: &mut Ticket,
    buyer: Pubkey,
    amount: u64,
) -> Result<(u64, u64)> {
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

    transfer_guard::assign_owner(ticket, buyer)?;

    Ok((royalty_amount, seller_amount))
}

#[test]
fn create_event_rejects_bad_params_in_order() {
    // Valid baseline passes.
    assert!(EventRecord::validate_params(NOW, NOW + 3600, 100, 50, 500, 150).is_ok());

    // Date must be strictly in the future.
    assert_eq!(
        EventRecord::validate_params(NOW, NOW, 100, 50, 500, 150),
        Err(BoxOfficeError::EventDateInPast.into())
    );
    // Date is checked before capacity.
    assert_eq!(
        EventRecord::validate_params(NOW, NOW - 1, 0, 50, 500, 150),
        Err(BoxOfficeError::EventDateInPast.into())
    );
    assert_eq!(
        EventRecord::validate_params(NOW, NOW + 3600, 0, 50, 500, 150),
        Err(BoxOfficeError::InvalidTicketSupply.into())
    );
    assert_eq!(
        EventRecord::validate_params(NOW, NOW + 3600, 100, 0, 500, 150),
        Err(BoxOfficeError::InvalidTicketPrice.into())
    );
    assert_eq!(
        EventRecord::validate_params(NOW, NOW + 3600, 100, 50, 10_001, 150),
        Err(BoxOfficeError::RoyaltyTooHigh.into())
    );
    assert_eq!(
        EventRecord::validate_params(NOW, NOW + 3600, 100, 50, 500, 99),
        Err(BoxOfficeError::ResaleMultiplierTooLow.into())
    );
    // A 1.0x multiplier is the minimum allowed.
    assert!(EventRecord::validate_params(NOW, NOW + 3600, 100, 50, 0, 100).is_ok());
}

#[test]
fn capacity_is_enforced_and_sold_out_is_terminal() {
    let mut config = sample_config();
    let mut event = sample_event(1, 1, 100, 500, 150);

    let buyer = Pubkey::new_unique();
    let ticket = purchase_primary(&mut config, &mut event, buyer, GENERAL_ADMISSION, 100).unwrap();
    assert_eq!(ticket.owner, buyer);
    assert_eq!(ticket.original_owner, buyer);
    assert_eq!(ticket.max_resale_price, 150);
    assert_eq!(ticket.current_price, 100);
    assert_eq!(ticket.original_price, 100);
    assert_eq!(event.tickets_sold, 1);

    // Second purchase against a supply of one fails and mutates nothing.
    let err = purchase_primary(&mut config, &mut event, Pubkey::new_unique(), 0, 100);
    assert_eq!(err.err(), Some(BoxOfficeError::SoldOut.into()));
    assert_eq!(event.tickets_sold, 1);
    assert!(event.tickets_sold <= event.total_tickets);
}

#[test]
fn underpaying_primary_purchase_fails() {
    let mut config = sample_config();
    let mut event = sample_event(1, 10, 100, 500, 150);

    let err = purchase_primary(&mut config, &mut event, Pubkey::new_unique(), 0, 99);
    assert_eq!(err.err(), Some(BoxOfficeError::InsufficientPayment.into()));
    assert_eq!(event.tickets_sold, 0);

    // Overpaying is allowed; the whole amount goes to the organizer.
    assert!(purchase_primary(&mut config, &mut event, Pubkey::new_unique(), 0, 101).is_ok());
}

#[test]
fn resale_listing_respects_the_price_cap() {
    let mut config = sample_config();
    let mut event = sample_event(1, 1, 100, 500, 150);
    let mut ticket = purchase_primary(&mut config, &mut event, Pubkey::new_unique(), 0, 100).unwrap();

    // One lamport over the cap fails and leaves the asking price alone.
    assert_eq!(
        ticket.set_asking_price(151),
        Err(BoxOfficeError::ExceedsResaleCap.into())
    );
    assert_eq!(ticket.current_price, 100);

    // Exactly the cap is fine.
    assert!(ticket.set_asking_price(150).is_ok());
    assert_eq!(ticket.current_price, 150);
    assert!(ticket.current_price <= ticket.max_resale_price);
}

#[test]
fn resale_cap_truncates_toward_zero() {
    let event = sample_event(1, 10, 999, 0, 150);
    // 999 * 150 / 100 = 1498.5, truncated.
    assert_eq!(event.max_resale_price(999), Some(1498));

    let par = sample_event(2, 10, 100, 0, 100);
    assert_eq!(par.max_resale_price(100), Some(100));
}

#[test]
fn royalty_split_conserves_the_attached_amount() {
    // floor(150 * 500 / 10000) = 7, complement 143.
    let event = sample_event(1, 1, 100, 500, 150);
    assert_eq!(event.royalty_on(150), Some(7));

    for (amount, royalty_bps) in [
        (150u64, 500u16),
        (1u64, 9_999u16),
        (0u64, 500u16),
        (1_000_000u64, 1u16),
        (982_451_653u64, 333u16),
        (u64::MAX / 10_000, 10_000u16),
    ] {
        let event = sample_event(1, 1, 100, royalty_bps, 150);
        let royalty = event.royalty_on(amount).unwrap();
        assert_eq!(royalty, amount * u64::from(royalty_bps) / 10_000);
        let seller = amount - royalty;
        assert_eq!(royalty + seller, amount);
    }
}

#[test]
fn zero_royalty_sends_everything_to_the_seller() {
    let mut config = sample_config();
    let mut event = sample_event(1, 1, 100, 0, 150);
    let mut ticket = purchase_primary(&mut config, &mut event, Pubkey::new_unique(), 0, 100).unwrap();

    let buyer = Pubkey::new_unique();
    let (royalty, seller_amount) = purchase_secondary(&event, &mut ticket, buyer, 100).unwrap();
    assert_eq!(royalty, 0);
    assert_eq!(seller_amount, 100);
}

#[test]
fn secondary_sale_reassigns_ownership_and_splits_payment() {
    let mut config = sample_config();
    let mut event = sample_event(1, 1, 100, 500, 150);
    let first_buyer = Pubkey::new_unique();
    let mut ticket =
        purchase_primary(&mut config, &mut event, first_buyer, GENERAL_ADMISSION, 100).unwrap();
    ticket.set_asking_price(150).unwrap();

    let second_buyer = Pubkey::new_unique();
    let (royalty, seller_amount) =
        purchase_secondary(&event, &mut ticket, second_buyer, 150).unwrap();

    assert_eq!(royalty, 7);
    assert_eq!(seller_amount, 143);
    assert_eq!(ticket.owner, second_buyer);
    // The original owner survives resale.
    assert_eq!(ticket.original_owner, first_buyer);
}

#[test]
fn overpayment_inflates_both_shares() {
    // The split basis is the attached amount, not the asking price.
    let mut config = sample_config();
    let mut event = sample_event(1, 1, 100, 500, 150);
    let mut ticket = purchase_primary(&mut config, &mut event, Pubkey::new_unique(), 0, 100).unwrap();
    ticket.set_asking_price(100).unwrap();

    let (royalty, seller_amount) =
        purchase_secondary(&event, &mut ticket, Pubkey::new_unique(), 200).unwrap();
    assert_eq!(royalty, 10);
    assert_eq!(seller_amount, 190);
}

#[test]
fn holder_cannot_buy_their_own_listing() {
    let mut config = sample_config();
    let mut event = sample_event(1, 1, 100, 500, 150);
    let holder = Pubkey::new_unique();
    let mut ticket = purchase_primary(&mut config, &mut event, holder, 0, 100).unwrap();

    let err = purchase_secondary(&event, &mut ticket, holder, 150);
    assert_eq!(err.err(), Some(BoxOfficeError::CannotBuyOwnTicket.into()));
    assert_eq!(ticket.owner, holder);
}

#[test]
fn validation_is_organizer_only_and_irreversible() {
    let mut config = sample_config();
    let mut event = sample_event(1, 1, 100, 500, 150);
    let mut ticket = purchase_primary(&mut config, &mut event, Pubkey::new_unique(), 0, 100).unwrap();

    // A stranger cannot validate.
    let stranger = Pubkey::new_unique();
    assert_eq!(
        event.assert_organizer(&stranger),
        Err(BoxOfficeError::NotEventOrganizer.into())
    );
    assert!(!ticket.is_used);

    // The organizer can, exactly once.
    let organizer = event.organizer;
    assert!(event.assert_organizer(&organizer).is_ok());
    assert!(ticket.mark_used().is_ok());
    assert!(ticket.is_used);
    assert_eq!(
        ticket.mark_used(),
        Err(BoxOfficeError::TicketAlreadyUsed.into())
    );
}

#[test]
fn used_tickets_are_frozen_on_every_pathway() {
    let mut config = sample_config();
    let mut event = sample_event(1, 1, 100, 500, 150);
    let holder = Pubkey::new_unique();
    let mut ticket = purchase_primary(&mut config, &mut event, holder, 7, 100).unwrap();
    ticket.mark_used().unwrap();

    // Relisting fails.
    assert_eq!(
        ticket.set_asking_price(120),
        Err(BoxOfficeError::TicketAlreadyUsed.into())
    );
    // The pre-transfer hook rejects any ownership change.
    assert_eq!(
        transfer_guard::assert_transferable(&ticket),
        Err(BoxOfficeError::TicketAlreadyUsed.into())
    );
    let thief = Pubkey::new_unique();
    assert_eq!(
        transfer_guard::assign_owner(&mut ticket, thief),
        Err(BoxOfficeError::TicketAlreadyUsed.into())
    );
    assert_eq!(ticket.owner, holder);
    // Secondary purchase fails too.
    let err = purchase_secondary(&event, &mut ticket, thief, 150);
    assert_eq!(err.err(), Some(BoxOfficeError::TicketAlreadyUsed.into()));
    assert_eq!(ticket.owner, holder);
}

#[test]
fn reentrant_purchase_is_rejected_by_the_guard() {
    let mut config = sample_config();
    let mut event = sample_event(1, 10, 100, 500, 150);
    let mut guard = ReentrancyGuard {
        in_progress: false,
        bump: 252,
    };

    // Outer guarded call takes the lock, then commits its state.
    guard.enter().unwrap();
    purchase_primary(&mut config, &mut event, Pubkey::new_unique(), 0, 100).unwrap();
    let sold_before = event.tickets_sold;

    // A reentrant call triggered during the payment step fails at the
    // guard, before it can touch the event.
    assert_eq!(guard.enter(), Err(BoxOfficeError::ReentrancyLocked.into()));
    assert_eq!(event.tickets_sold, sold_before);

    // The outer call releases the lock on exit; the next call proceeds.
    guard.exit();
    assert!(guard.enter().is_ok());
}

#[test]
fn event_and_ticket_ids_come_from_one_sequence() {
    let mut config = sample_config();
    assert_eq!(config.allocate_id().unwrap(), 1);
    assert_eq!(config.allocate_id().unwrap(), 2);
    assert_eq!(config.allocate_id().unwrap(), 3);
    assert_eq!(config.next_id, 4);
}

#[test]
fn administrator_check_matches_the_configured_key() {
    let config = sample_config();
    assert!(config.is_administrator(&config.administrator));
    assert!(!config.is_administrator(&Pubkey::new_unique()));
}
